//! Evidence model
//!
//! Evidence is the photo or video a user submits to prove a task was done.
//! Only `image/*` and `video/*` payloads are accepted.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a submission is rejected before anything changes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No task id given
    #[error("task id is required")]
    MissingTaskId,

    /// No file name given
    #[error("evidence file name is required")]
    MissingFileName,

    /// Zero-byte payload
    #[error("evidence payload is empty")]
    EmptyPayload,

    /// Declared size does not match the payload
    #[error("declared size {declared} does not match payload size {actual}")]
    SizeMismatch {
        /// Size the caller declared
        declared: u64,
        /// Actual payload length
        actual: u64,
    },

    /// Media type outside image/* and video/*
    #[error("unsupported media type: {0} (expected image/* or video/*)")]
    UnsupportedMediaType(String),
}

/// Broad media class of a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// `image/*`
    Image,
    /// `video/*`
    Video,
}

impl MediaKind {
    /// Classify a media type string
    #[must_use]
    pub fn of(media_type: &str) -> Option<Self> {
        let (top, sub) = media_type.trim().split_once('/')?;
        if sub.is_empty() {
            return None;
        }
        match top.to_ascii_lowercase().as_str() {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// A raw evidence payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    /// Original file name
    pub file_name: String,

    /// Size declared by the uploader, in bytes
    pub declared_size: u64,

    /// Media type, e.g. `image/jpeg`
    pub media_type: String,

    /// File contents
    pub bytes: Vec<u8>,
}

impl Evidence {
    /// Create evidence whose declared size is the payload length
    #[must_use]
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            declared_size: bytes.len() as u64,
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Check required fields and the media type
    pub fn validate(&self) -> Result<MediaKind, ValidationError> {
        if self.file_name.trim().is_empty() {
            return Err(ValidationError::MissingFileName);
        }
        if self.bytes.is_empty() {
            return Err(ValidationError::EmptyPayload);
        }
        let actual = self.bytes.len() as u64;
        if self.declared_size != actual {
            return Err(ValidationError::SizeMismatch {
                declared: self.declared_size,
                actual,
            });
        }
        MediaKind::of(&self.media_type)
            .ok_or_else(|| ValidationError::UnsupportedMediaType(self.media_type.clone()))
    }

    /// Payload encoded as standard base64, the form label detection expects
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

/// Guess a media type from a file name's extension
#[must_use]
pub fn guess_media_type(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let media_type = match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        _ => return None,
    };
    Some(media_type)
}

/// Opaque, display-time handle to submitted evidence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceRef(String);

impl EvidenceRef {
    /// Handle for the `ordinal`-th upload of the session
    #[must_use]
    pub fn for_upload(ordinal: u32, file_name: &str) -> Self {
        Self(format!("evidence:{ordinal}:{file_name}"))
    }

    /// The handle as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EvidenceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
