//! History persistence error types.

use thiserror::Error;

/// Errors from reading or writing the history file.
///
/// Callers downgrade these to warnings: a load failure yields an empty log
/// and a save failure keeps the in-memory state.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The file could not be read or written.
    #[error("history file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but does not hold a valid history array.
    #[error("history file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
