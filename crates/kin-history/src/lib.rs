//! # kin-history
//!
//! The persisted calculation history for Kinema.
//!
//! The log is a JSON array on disk: read once at startup, rewritten wholesale
//! on every mutation and again on drop. Persistence failures are never fatal:
//! a bad load falls back to an empty log and a bad save is a warning, both
//! through `tracing`.

pub mod entry;
pub mod error;
pub mod log;

pub use entry::{HistoryEntry, ResultValue};
pub use error::HistoryError;
pub use log::HistoryLog;
