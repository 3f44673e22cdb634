//! Capture device adapters.
//!
//! Two families:
//! - `Spool*`: read frames and clips an external capture rig drops into a
//!   spool directory. The rig owns the actual hardware; this process only
//!   ever sees files. Missing or empty spool maps to "no device", an
//!   unreadable one to "permission denied".
//! - `Sim*`: deterministic synthetic devices for tests and `MEDISCAN_*=sim`
//!   runs, with a scriptable subject so the guided-capture path can be
//!   exercised end to end.

mod pgm;
mod sim;
mod spool;

pub use pgm::{decode_pgm, encode_pgm, PgmError};
pub use sim::{SimCamera, SimMicrophone};
pub use spool::{SpoolCamera, SpoolMicrophone};

use crate::ports::CaptureError;

/// Map an IO failure on the spool directory to the capture taxonomy.
fn io_to_capture(err: &std::io::Error) -> CaptureError {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => CaptureError::PermissionDenied,
        std::io::ErrorKind::NotFound => CaptureError::NoDevice,
        _ => CaptureError::Device(err.to_string()),
    }
}
