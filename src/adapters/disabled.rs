//! Label detector used when no vision service is configured

use crate::core::ports::{LabelDetector, LabelFuture};

/// Detector that never finds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledDetector;

impl LabelDetector for DisabledDetector {
    fn detect_labels(&self, _image_base64: &str) -> LabelFuture<'_> {
        Box::pin(async { Ok(Vec::new()) })
    }
}
