//! Application layer: the wizard's use cases.
//!
//! Orchestrates domain logic with the ports: routing and its redirect rules,
//! the capture state machines, the questionnaire engine and report export.

mod capture;
mod questionnaire;
mod report;
mod routes;
mod session;

pub use capture::{
    AutoCapture, CaptureController, CapturePhase, GuideStatus, RecordingController,
    RecordingPhase, CENTER_TOLERANCE, COUNTDOWN, MAX_AREA_FRACTION, MIN_AREA_FRACTION,
    SAMPLE_INTERVAL,
};
pub use questionnaire::{EngineEvent, QuestionnaireEngine, ADVANCE_DELAY};
pub use report::{export_report, render_report, report_file_name};
pub use routes::{after_patient_photo, Route};
pub use session::{keys, IntakeSession};
