//! Media device ports: camera and microphone acquisition.
//!
//! Device access is an external collaborator; these traits keep the capture
//! state machines independent of how frames and clips actually arrive.

use crate::domain::{Frame, MediaArtifact};

/// Why a device could not be acquired or read.
///
/// The wizard distinguishes "permission denied" from "no device present" in
/// the error it shows; both offer a retry that re-enters acquisition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error("device access denied")]
    PermissionDenied,

    #[error("no capture device present")]
    NoDevice,

    #[error("device error: {0}")]
    Device(String),
}

/// A camera owned by exactly one capture screen at a time.
///
/// Lifecycle: `open` before any frame access; `close` on every exit path
/// (confirm, retake, failure, teardown). Implementations must make `close`
/// idempotent.
pub trait Camera: Send {
    /// Acquire the device.
    ///
    /// # Errors
    /// [`CaptureError::PermissionDenied`] or [`CaptureError::NoDevice`] for
    /// the two user-distinguishable failures.
    fn open(&mut self) -> Result<(), CaptureError>;

    /// The current live preview frame.
    ///
    /// # Errors
    /// Returns error if the device is not open or reading fails.
    fn frame(&mut self) -> Result<Frame, CaptureError>;

    /// Snapshot the current frame into an encoded artifact.
    ///
    /// # Errors
    /// Returns error if the device is not open or encoding fails.
    fn capture(&mut self) -> Result<MediaArtifact, CaptureError>;

    /// Release the device. Idempotent.
    fn close(&mut self);

    /// Whether the device is currently held open.
    fn is_open(&self) -> bool;
}

/// A microphone for the stethoscope recording sub-flow.
pub trait Microphone: Send {
    /// Acquire the device and begin recording.
    ///
    /// # Errors
    /// Same taxonomy as [`Camera::open`].
    fn start(&mut self) -> Result<(), CaptureError>;

    /// Stop recording and return the encoded clip. Releases the device.
    ///
    /// # Errors
    /// Returns error if no recording is in progress.
    fn stop(&mut self) -> Result<MediaArtifact, CaptureError>;

    /// Whether a recording is in progress.
    fn is_recording(&self) -> bool;

    /// Release the device without producing a clip. Idempotent.
    fn close(&mut self);
}

impl Camera for Box<dyn Camera> {
    fn open(&mut self) -> Result<(), CaptureError> {
        (**self).open()
    }

    fn frame(&mut self) -> Result<Frame, CaptureError> {
        (**self).frame()
    }

    fn capture(&mut self) -> Result<MediaArtifact, CaptureError> {
        (**self).capture()
    }

    fn close(&mut self) {
        (**self).close();
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}

impl Microphone for Box<dyn Microphone> {
    fn start(&mut self) -> Result<(), CaptureError> {
        (**self).start()
    }

    fn stop(&mut self) -> Result<MediaArtifact, CaptureError> {
        (**self).stop()
    }

    fn is_recording(&self) -> bool {
        (**self).is_recording()
    }

    fn close(&mut self) {
        (**self).close();
    }
}
