//! Capture state machines: device lifecycle, auto-capture guidance, audio
//! recording.
//!
//! Every controller owns its device exclusively and releases it on every
//! exit path: confirm, retake, failure and teardown (`Drop`). Timers are
//! deadline fields ticked from the main loop, so a cancelled countdown
//! simply never fires.

use std::time::{Duration, Instant};

use crate::domain::{Frame, MediaArtifact};
use crate::ports::{Camera, CaptureError, FaceDetector, Microphone};

/// Detector sampling cadence on the guided photo screen.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(300);

/// Auto-capture countdown once the face is well positioned.
pub const COUNTDOWN: Duration = Duration::from_secs(3);

/// Acceptance window: face center within this fraction of frame center on
/// both axes, face area within the fraction band below.
pub const CENTER_TOLERANCE: f64 = 0.4;
pub const MIN_AREA_FRACTION: f64 = 0.05;
pub const MAX_AREA_FRACTION: f64 = 0.5;

/// Where a capture screen currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturePhase {
    /// Device being acquired (or re-acquired after retake/retry).
    Acquiring,
    /// Live preview running.
    Live,
    /// An artifact is held, awaiting confirm or retake.
    Captured,
    /// Artifact confirmed and handed off; the screen advances.
    Confirmed,
    /// Device acquisition or capture failed; retry available.
    Failed(CaptureError),
}

/// Owns a camera for the duration of one capture screen.
pub struct CaptureController<C: Camera> {
    camera: C,
    phase: CapturePhase,
    artifact: Option<MediaArtifact>,
}

impl<C: Camera> CaptureController<C> {
    /// Take ownership of the (closed) camera; the screen calls [`Self::open`]
    /// when it mounts.
    pub fn new(camera: C) -> Self {
        Self {
            camera,
            phase: CapturePhase::Acquiring,
            artifact: None,
        }
    }

    /// Wrap a camera that a background worker already opened.
    pub fn from_open(camera: C) -> Self {
        let phase = if camera.is_open() {
            CapturePhase::Live
        } else {
            CapturePhase::Acquiring
        };
        Self {
            camera,
            phase,
            artifact: None,
        }
    }

    /// Wrap a camera whose background acquisition already failed, keeping
    /// the error visible for the retry affordance.
    pub fn from_failed(camera: C, error: CaptureError) -> Self {
        Self {
            camera,
            phase: CapturePhase::Failed(error),
            artifact: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &CapturePhase {
        &self.phase
    }

    /// Acquire the device; on failure the phase records the error and the
    /// screen offers retry.
    pub fn open(&mut self) {
        self.phase = match self.camera.open() {
            Ok(()) => CapturePhase::Live,
            Err(e) => {
                tracing::warn!(error = %e, "camera acquisition failed");
                CapturePhase::Failed(e)
            }
        };
    }

    /// Re-enter acquisition after a failure.
    pub fn retry(&mut self) {
        if matches!(self.phase, CapturePhase::Failed(_)) {
            self.phase = CapturePhase::Acquiring;
            self.open();
        }
    }

    /// The live preview frame, when one is available.
    pub fn preview(&mut self) -> Option<Frame> {
        if self.phase != CapturePhase::Live {
            return None;
        }
        match self.camera.frame() {
            Ok(frame) => Some(frame),
            Err(e) => {
                tracing::warn!(error = %e, "preview frame read failed");
                None
            }
        }
    }

    /// Snapshot the live frame. Overwrites any previously held artifact and
    /// releases the device; the preview freezes on the captured image.
    pub fn capture(&mut self) {
        if self.phase != CapturePhase::Live {
            return;
        }
        match self.camera.capture() {
            Ok(artifact) => {
                self.artifact = Some(artifact);
                self.camera.close();
                self.phase = CapturePhase::Captured;
            }
            Err(e) => {
                self.camera.close();
                tracing::warn!(error = %e, "capture failed");
                self.phase = CapturePhase::Failed(e);
            }
        }
    }

    /// Discard the held artifact and re-acquire the device.
    pub fn retake(&mut self) {
        if self.phase != CapturePhase::Captured {
            return;
        }
        self.artifact = None;
        self.camera.close();
        self.phase = CapturePhase::Acquiring;
        self.open();
    }

    /// Hand the artifact off for persistence. The screen advances; the
    /// device stays released.
    pub fn confirm(&mut self) -> Option<MediaArtifact> {
        if self.phase != CapturePhase::Captured {
            return None;
        }
        self.camera.close();
        self.phase = CapturePhase::Confirmed;
        self.artifact.take()
    }

    /// The held artifact, for rendering the frozen preview.
    #[must_use]
    pub fn captured(&self) -> Option<&MediaArtifact> {
        self.artifact.as_ref()
    }
}

impl<C: Camera> Drop for CaptureController<C> {
    fn drop(&mut self) {
        self.camera.close();
    }
}

/// What the guided-photo overlay shows this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideStatus {
    /// No detector available; manual capture only.
    ManualOnly,
    /// No face in frame.
    Searching,
    /// Face found but outside the acceptance window.
    Misaligned,
    /// Face well positioned; countdown running.
    Aligned { seconds_left: u32 },
    /// Countdown elapsed: fire the capture.
    Trigger,
}

/// Detector-driven auto-capture for the guided photo screen.
///
/// Samples the preview at a fixed interval; a well-positioned face starts a
/// countdown which misalignment or detection loss cancels without side
/// effects. Detector errors permanently degrade to manual-only for this
/// screen.
pub struct AutoCapture<D: FaceDetector> {
    detector: Option<D>,
    last_sample: Option<Instant>,
    deadline: Option<Instant>,
    last_seen: GuideStatus,
}

impl<D: FaceDetector> AutoCapture<D> {
    /// `None` for the detector means the model never loaded; the screen
    /// still works, manually.
    pub fn new(detector: Option<D>) -> Self {
        let last_seen = if detector.is_some() {
            GuideStatus::Searching
        } else {
            GuideStatus::ManualOnly
        };
        Self {
            detector,
            last_sample: None,
            deadline: None,
            last_seen,
        }
    }

    /// Evaluate the current preview frame.
    ///
    /// Cheap between sampling deadlines: detection runs at most once per
    /// [`SAMPLE_INTERVAL`], but countdown expiry is checked on every call.
    pub fn sample(&mut self, frame: &Frame, now: Instant) -> GuideStatus {
        let Some(detector) = &self.detector else {
            return GuideStatus::ManualOnly;
        };

        if let Some(deadline) = self.deadline {
            if now >= deadline {
                self.deadline = None;
                self.last_seen = GuideStatus::Searching;
                return GuideStatus::Trigger;
            }
        }

        let due = self
            .last_sample
            .map_or(true, |t| now.duration_since(t) >= SAMPLE_INTERVAL);
        if !due {
            return self.status(now);
        }
        self.last_sample = Some(now);

        match detector.detect(frame) {
            Ok(Some(face)) => {
                let (dx, dy) = face.center_offset(frame.width, frame.height);
                let area = face.area_fraction(frame.width, frame.height);
                let well_positioned = dx < CENTER_TOLERANCE
                    && dy < CENTER_TOLERANCE
                    && area > MIN_AREA_FRACTION
                    && area < MAX_AREA_FRACTION;

                if well_positioned {
                    if self.deadline.is_none() {
                        self.deadline = Some(now + COUNTDOWN);
                    }
                    self.last_seen = GuideStatus::Aligned { seconds_left: 0 };
                } else {
                    self.deadline = None;
                    self.last_seen = GuideStatus::Misaligned;
                }
            }
            Ok(None) => {
                self.deadline = None;
                self.last_seen = GuideStatus::Searching;
            }
            Err(e) => {
                tracing::warn!(error = %e, "face detector failed; manual capture only");
                self.detector = None;
                self.deadline = None;
                self.last_seen = GuideStatus::ManualOnly;
            }
        }

        self.status(now)
    }

    /// Cancel any running countdown (screen teardown, manual capture).
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    fn status(&self, now: Instant) -> GuideStatus {
        match (self.last_seen, self.deadline) {
            (GuideStatus::Aligned { .. }, Some(deadline)) => {
                let left = deadline.saturating_duration_since(now);
                GuideStatus::Aligned {
                    seconds_left: left.as_secs_f64().ceil() as u32,
                }
            }
            (status, _) => status,
        }
    }
}

/// Audio recording sub-flow for the breathing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordingPhase {
    Idle,
    Recording,
    Recorded,
    Failed(CaptureError),
}

pub struct RecordingController<M: Microphone> {
    mic: M,
    phase: RecordingPhase,
    artifact: Option<MediaArtifact>,
}

impl<M: Microphone> RecordingController<M> {
    pub fn new(mic: M) -> Self {
        Self {
            mic,
            phase: RecordingPhase::Idle,
            artifact: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &RecordingPhase {
        &self.phase
    }

    pub fn start(&mut self) {
        if !matches!(self.phase, RecordingPhase::Idle | RecordingPhase::Failed(_)) {
            return;
        }
        self.phase = match self.mic.start() {
            Ok(()) => RecordingPhase::Recording,
            Err(e) => {
                tracing::warn!(error = %e, "microphone acquisition failed");
                RecordingPhase::Failed(e)
            }
        };
    }

    pub fn stop(&mut self) {
        if self.phase != RecordingPhase::Recording {
            return;
        }
        self.phase = match self.mic.stop() {
            Ok(artifact) => {
                self.artifact = Some(artifact);
                RecordingPhase::Recorded
            }
            Err(e) => RecordingPhase::Failed(e),
        };
    }

    /// Discard the held clip and return to idle for a fresh recording.
    pub fn retake(&mut self) {
        self.artifact = None;
        self.mic.close();
        self.phase = RecordingPhase::Idle;
    }

    pub fn take_artifact(&mut self) -> Option<MediaArtifact> {
        self.artifact.take()
    }

    #[must_use]
    pub fn has_artifact(&self) -> bool {
        self.artifact.is_some()
    }
}

impl<M: Microphone> Drop for RecordingController<M> {
    fn drop(&mut self) {
        self.mic.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::detect::LumaDetector;
    use crate::adapters::device::{SimCamera, SimMicrophone};

    #[test]
    fn test_capture_lifecycle_releases_device() {
        let camera = SimCamera::centered();
        let probe = camera.probe();

        let mut controller = CaptureController::new(camera);
        assert_eq!(*controller.phase(), CapturePhase::Acquiring);

        controller.open();
        assert_eq!(*controller.phase(), CapturePhase::Live);
        assert!(probe.load(std::sync::atomic::Ordering::SeqCst));
        assert!(controller.preview().is_some());

        controller.capture();
        assert_eq!(*controller.phase(), CapturePhase::Captured);
        assert!(
            !probe.load(std::sync::atomic::Ordering::SeqCst),
            "capture freezes the preview and releases the device"
        );
        assert!(controller.captured().is_some());

        let artifact = controller.confirm().expect("Should yield artifact");
        assert_eq!(*controller.phase(), CapturePhase::Confirmed);
        assert!(!artifact.bytes.is_empty());
        assert!(controller.confirm().is_none(), "artifact moves out once");
    }

    #[test]
    fn test_retake_discards_and_reacquires() {
        let camera = SimCamera::centered();
        let probe = camera.probe();
        let mut controller = CaptureController::new(camera);
        controller.open();
        controller.capture();
        assert!(controller.captured().is_some());

        controller.retake();
        assert_eq!(*controller.phase(), CapturePhase::Live);
        assert!(controller.captured().is_none());
        assert!(probe.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[test]
    fn test_failure_distinguishes_permission_from_absence() {
        let mut denied = CaptureController::new(SimCamera::failing(CaptureError::PermissionDenied));
        denied.open();
        assert_eq!(
            *denied.phase(),
            CapturePhase::Failed(CaptureError::PermissionDenied)
        );

        let mut absent = CaptureController::new(SimCamera::failing(CaptureError::NoDevice));
        absent.open();
        assert_eq!(*absent.phase(), CapturePhase::Failed(CaptureError::NoDevice));

        // Retry re-enters acquisition (and fails the same way here).
        absent.retry();
        assert_eq!(*absent.phase(), CapturePhase::Failed(CaptureError::NoDevice));
    }

    #[test]
    fn test_drop_closes_device() {
        let camera = SimCamera::centered();
        let probe = camera.probe();
        {
            let mut controller = CaptureController::new(camera);
            controller.open();
            assert!(probe.load(std::sync::atomic::Ordering::SeqCst));
        }
        assert!(!probe.load(std::sync::atomic::Ordering::SeqCst));
    }

    fn live_frame(camera: &mut SimCamera) -> Frame {
        camera.frame().expect("Should read")
    }

    #[test]
    fn test_autocapture_counts_down_and_triggers() {
        let mut camera = SimCamera::centered();
        camera.open().expect("open");
        let frame = live_frame(&mut camera);

        let mut auto = AutoCapture::new(Some(LumaDetector::new()));
        let t0 = Instant::now();

        match auto.sample(&frame, t0) {
            GuideStatus::Aligned { seconds_left } => assert!(seconds_left <= 3),
            other => panic!("expected aligned, got {other:?}"),
        }

        // Mid-countdown the status stays aligned.
        let mid = t0 + Duration::from_millis(1500);
        assert!(matches!(
            auto.sample(&frame, mid),
            GuideStatus::Aligned { .. }
        ));

        // Past the deadline the trigger fires exactly once.
        let end = t0 + COUNTDOWN + Duration::from_millis(10);
        assert_eq!(auto.sample(&frame, end), GuideStatus::Trigger);
        assert!(!matches!(
            auto.sample(&frame, end + Duration::from_millis(1)),
            GuideStatus::Trigger
        ));
    }

    #[test]
    fn test_autocapture_cancels_on_misalignment() {
        let mut camera = SimCamera::centered();
        camera.open().expect("open");
        let centered = live_frame(&mut camera);

        let mut off = SimCamera::off_center();
        off.open().expect("open");
        let misaligned = live_frame(&mut off);

        let mut auto = AutoCapture::new(Some(LumaDetector::new()));
        let t0 = Instant::now();
        assert!(matches!(
            auto.sample(&centered, t0),
            GuideStatus::Aligned { .. }
        ));

        // Face moves out of the window before the countdown elapses.
        let t1 = t0 + SAMPLE_INTERVAL;
        assert_eq!(auto.sample(&misaligned, t1), GuideStatus::Misaligned);

        // Even well past the original deadline nothing fires.
        let t2 = t0 + COUNTDOWN + Duration::from_secs(1);
        assert_ne!(auto.sample(&misaligned, t2), GuideStatus::Trigger);
    }

    #[test]
    fn test_autocapture_cancels_on_detection_loss() {
        let mut camera = SimCamera::centered();
        camera.open().expect("open");
        let centered = live_frame(&mut camera);

        let mut vacant = SimCamera::vacant();
        vacant.open().expect("open");
        let empty = live_frame(&mut vacant);

        let mut auto = AutoCapture::new(Some(LumaDetector::new()));
        let t0 = Instant::now();
        assert!(matches!(
            auto.sample(&centered, t0),
            GuideStatus::Aligned { .. }
        ));

        let t1 = t0 + SAMPLE_INTERVAL;
        assert_eq!(auto.sample(&empty, t1), GuideStatus::Searching);

        let t2 = t0 + COUNTDOWN + Duration::from_secs(1);
        assert_ne!(auto.sample(&empty, t2), GuideStatus::Trigger);
    }

    #[test]
    fn test_autocapture_without_detector_is_manual_only() {
        let mut camera = SimCamera::centered();
        camera.open().expect("open");
        let frame = live_frame(&mut camera);

        let mut auto: AutoCapture<LumaDetector> = AutoCapture::new(None);
        assert_eq!(auto.sample(&frame, Instant::now()), GuideStatus::ManualOnly);
    }

    #[test]
    fn test_autocapture_degrades_on_detector_error() {
        let empty = Frame::new(0, 0, vec![]);
        let mut auto = AutoCapture::new(Some(LumaDetector::new()));
        assert_eq!(
            auto.sample(&empty, Instant::now()),
            GuideStatus::ManualOnly
        );
        // Degradation is sticky.
        let mut camera = SimCamera::centered();
        camera.open().expect("open");
        let good = live_frame(&mut camera);
        assert_eq!(
            auto.sample(&good, Instant::now() + SAMPLE_INTERVAL),
            GuideStatus::ManualOnly
        );
    }

    #[test]
    fn test_recording_lifecycle() {
        let mut rec = RecordingController::new(SimMicrophone::new());
        assert_eq!(*rec.phase(), RecordingPhase::Idle);
        assert!(!rec.has_artifact());

        rec.start();
        assert_eq!(*rec.phase(), RecordingPhase::Recording);

        rec.stop();
        assert_eq!(*rec.phase(), RecordingPhase::Recorded);
        assert!(rec.has_artifact());

        rec.retake();
        assert_eq!(*rec.phase(), RecordingPhase::Idle);
        assert!(!rec.has_artifact());
    }

    #[test]
    fn test_recording_failure_is_retryable() {
        let mut rec =
            RecordingController::new(SimMicrophone::failing(CaptureError::PermissionDenied));
        rec.start();
        assert_eq!(
            *rec.phase(),
            RecordingPhase::Failed(CaptureError::PermissionDenied)
        );
        // A failed controller accepts another start attempt.
        rec.start();
        assert!(matches!(*rec.phase(), RecordingPhase::Failed(_)));
    }
}
