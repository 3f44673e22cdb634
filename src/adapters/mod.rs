//! Adapters layer: concrete implementations of ports.
//!
//! - `sqlite`: local key-value session store
//! - `device`: spool-directory and simulated capture devices
//! - `detect`: luma-heuristic face detector
//! - `sanitize`: PII filtering for logs

pub mod detect;
pub mod device;
pub mod sanitize;
pub mod sqlite;

// Re-export the store error for lib.rs
pub use sqlite::StoreError;
