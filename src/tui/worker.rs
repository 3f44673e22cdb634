//! Background device-acquisition worker.
//!
//! Opening a capture device can block on the rig; running it off-thread
//! keeps the draw loop responsive while a screen sits in its acquiring
//! phase. The worker owns the device handle until it hands it back over the
//! channel, opened or not.

use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use crate::ports::{Camera, CaptureError};

/// Outcome of an acquisition attempt. The camera always comes back so the
/// screen can wrap it in a controller (ready) or retry it (failed).
pub enum AcquireOutcome {
    Ready(Box<dyn Camera>),
    Failed(Box<dyn Camera>, CaptureError),
}

/// Handle to a running acquisition.
pub struct AcquireWorkerHandle {
    rx: Receiver<AcquireOutcome>,
    _handle: JoinHandle<()>,
}

impl AcquireWorkerHandle {
    /// Poll for the outcome (non-blocking).
    #[must_use]
    pub fn try_recv(&self) -> Option<AcquireOutcome> {
        self.rx.try_recv().ok()
    }
}

/// Spawns device acquisitions.
pub struct AcquireWorker;

impl AcquireWorker {
    /// Open the camera on a background thread.
    pub fn spawn(mut camera: Box<dyn Camera>) -> AcquireWorkerHandle {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let outcome = match camera.open() {
                Ok(()) => AcquireOutcome::Ready(camera),
                Err(e) => AcquireOutcome::Failed(camera, e),
            };
            let _ = tx.send(outcome);
        });

        AcquireWorkerHandle {
            rx,
            _handle: handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::device::SimCamera;
    use std::time::{Duration, Instant};

    fn wait_outcome(handle: &AcquireWorkerHandle) -> AcquireOutcome {
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            if let Some(outcome) = handle.try_recv() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "worker never reported");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_ready_camera_comes_back_open() {
        let handle = AcquireWorker::spawn(Box::new(SimCamera::centered()));
        match wait_outcome(&handle) {
            AcquireOutcome::Ready(camera) => assert!(camera.is_open()),
            AcquireOutcome::Failed(_, e) => panic!("unexpected failure: {e}"),
        }
    }

    #[test]
    fn test_failed_camera_reports_error() {
        let handle =
            AcquireWorker::spawn(Box::new(SimCamera::failing(CaptureError::PermissionDenied)));
        match wait_outcome(&handle) {
            AcquireOutcome::Failed(camera, e) => {
                assert_eq!(e, CaptureError::PermissionDenied);
                assert!(!camera.is_open());
            }
            AcquireOutcome::Ready(_) => panic!("should not open"),
        }
    }
}
