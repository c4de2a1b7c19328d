//! Label detection port
//!
//! The external image-labeling service. Its answer is informational: the
//! submission handler reports it but never gates scoring on it.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use super::super::models::Label;

/// Boxed future returned by [`LabelDetector`], keeping the trait dyn-compatible
pub type LabelFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<Label>, DetectError>> + Send + 'a>>;

/// Failures talking to the label-detection service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    /// No API key available
    #[error("label detection API key not set ({0})")]
    MissingApiKey(String),

    /// Request could not be sent or the response not read
    #[error("label detection request failed: {0}")]
    Transport(String),

    /// The service answered with an error status
    #[error("label detection API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },

    /// The response body was not understood
    #[error("failed to parse label detection response: {0}")]
    Decode(String),
}

/// Detects labels in an image
pub trait LabelDetector: Send + Sync {
    /// Detect labels in base64-encoded image content
    ///
    /// Returns zero or more labels. Implementations copy what they need
    /// from `image_base64` before returning the future.
    fn detect_labels(&self, image_base64: &str) -> LabelFuture<'_>;
}
