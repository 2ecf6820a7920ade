//! History persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default history file, relative to the working directory.
fn default_path() -> PathBuf {
    PathBuf::from("physics_history.json")
}

/// Default number of entries the history view shows.
const fn default_limit() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Path of the persisted history file.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// How many entries the history view shows.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = HistoryConfig::default();
        assert_eq!(config.path, PathBuf::from("physics_history.json"));
        assert_eq!(config.limit, 10);
    }
}
