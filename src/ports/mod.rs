//! Ports layer: trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the wizard and the outside world (storage, capture devices, the
//! face-detection model).

mod detect;
mod media;
mod store;

pub use detect::{DetectError, FaceDetector};
pub use media::{Camera, CaptureError, Microphone};
pub use store::SessionStore;
