//! TUI module: terminal user interface using Ratatui.
//!
//! One screen per wizard step, driven by a single event loop with
//! deadline-based timers and a background device-acquisition worker.

mod app;
mod styles;
mod ui;
mod worker;

pub use app::App;
pub use styles::MedicalTheme;
pub use worker::{AcquireOutcome, AcquireWorker, AcquireWorkerHandle};
