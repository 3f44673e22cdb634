//! Face detector port, used only to trigger auto-capture on the guided
//! photo screen.

use crate::domain::{FaceBox, Frame};

/// Error from the detector. Never fatal: detector failure degrades the
/// screen to manual capture only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    #[error("detector unavailable: {0}")]
    Unavailable(String),

    #[error("detection failed: {0}")]
    Failed(String),
}

/// Best-effort face detection over a single preview frame.
pub trait FaceDetector: Send {
    /// The most prominent detected face, if any.
    ///
    /// # Errors
    /// Returns error if the detector cannot process the frame.
    fn detect(&self, frame: &Frame) -> Result<Option<FaceBox>, DetectError>;
}

impl FaceDetector for Box<dyn FaceDetector> {
    fn detect(&self, frame: &Frame) -> Result<Option<FaceBox>, DetectError> {
        (**self).detect(frame)
    }
}
