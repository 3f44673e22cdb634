//! # MediScan
//!
//! Local-only medical-intake wizard for a terminal: language selection,
//! demographic capture, guided photo and per-disease media capture, a
//! branching symptom questionnaire and a locally computed risk summary.
//! There is no server and no inference; "detection" is a fixed weighted
//! count over yes/no/sometimes answers.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: core wizard types (languages, demographics, answers, scoring)
//! - `i18n`: typed message catalog and per-disease question lists
//! - `ports`: trait definitions for storage, capture devices and detection
//! - `adapters`: concrete implementations (SQLite, spool/sim devices, luma
//!   detector, log sanitizer)
//! - `application`: wizard routing, capture state machines, questionnaire
//!   engine, report export
//! - `tui`: terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod i18n;
pub mod ports;
pub mod tui;

pub use domain::{Assessment, Disease, Language, Severity};

/// Result type for MediScan operations
pub type Result<T> = std::result::Result<T, MediscanError>;

/// Main error type for MediScan
#[derive(Debug, thiserror::Error)]
pub enum MediscanError {
    #[error("Storage operation failed: {0}")]
    Store(#[from] adapters::StoreError),

    #[error("Capture device error: {0}")]
    Capture(#[from] ports::CaptureError),

    #[error("Face detector error: {0}")]
    Detect(#[from] ports::DetectError),

    #[error("Invalid phone number: {0}")]
    Phone(#[from] domain::PhoneError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
