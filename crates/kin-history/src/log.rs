//! The persisted history log.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::entry::HistoryEntry;
use crate::error::HistoryError;

/// Ordered log of past calculations, mirrored to a JSON file on disk.
///
/// The file is read once at construction and rewritten wholesale (pretty,
/// 2-space indent) on every mutation. Single process, single writer; there is
/// no locking and no incremental append.
#[derive(Debug)]
pub struct HistoryLog {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Open the log at `path`, loading any existing entries.
    ///
    /// A missing file starts an empty log. An unreadable or corrupt file also
    /// starts an empty log, with a warning.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(%error, path = %path.display(), "could not load history; starting empty");
                Vec::new()
            }
        };
        Self { path, entries }
    }

    fn read_entries(path: &Path) -> Result<Vec<HistoryEntry>, HistoryError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Append one entry and flush to disk.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
        self.flush();
    }

    /// Drop all entries and flush the now-empty log to disk.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.flush();
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recent `limit` entries, oldest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Rewrite the whole file. Failures are downgraded to a warning; the
    /// in-memory log is unaffected.
    pub fn flush(&self) {
        if let Err(error) = self.write_entries() {
            warn!(%error, path = %self.path.display(), "could not save history");
        }
    }

    fn write_entries(&self) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Drop for HistoryLog {
    /// Best-effort flush on every exit path.
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::entry::ResultValue;

    fn entry(topic: &str, value: f64) -> HistoryEntry {
        let inputs = BTreeMap::from([
            ("speed".to_string(), Some(value)),
            ("time".to_string(), Some(5.0)),
            ("distance".to_string(), None),
        ]);
        let results = BTreeMap::from([(
            "distance".to_string(),
            ResultValue::Number(value * 5.0),
        )]);
        HistoryEntry::new(topic, inputs, results)
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let log = HistoryLog::open(dir.path().join("history.json"));
        assert!(log.is_empty());
    }

    #[test]
    fn append_then_reload_round_trips_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut log = HistoryLog::open(&path);
        for index in 0..4 {
            log.append(entry("Basic Motion", f64::from(index)));
        }
        let original = log.entries().to_vec();
        drop(log);

        let reloaded = HistoryLog::open(&path);
        assert_eq!(reloaded.len(), 4);
        assert_eq!(reloaded.entries(), original.as_slice());
    }

    #[test]
    fn corrupt_file_falls_back_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();

        let log = HistoryLog::open(&path);
        assert!(log.is_empty());
    }

    #[test]
    fn clear_empties_the_file_too() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut log = HistoryLog::open(&path);
        log.append(entry("Basic Motion", 20.0));
        log.clear();
        assert!(log.is_empty());
        drop(log);

        let reloaded = HistoryLog::open(&path);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn recent_returns_the_tail_oldest_first() {
        let dir = tempdir().unwrap();
        let mut log = HistoryLog::open(dir.path().join("history.json"));
        for index in 0..5 {
            log.append(entry("Basic Motion", f64::from(index)));
        }

        let tail = log.recent(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].inputs["speed"], Some(3.0));
        assert_eq!(tail[1].inputs["speed"], Some(4.0));
    }

    #[test]
    fn recent_with_large_limit_returns_everything() {
        let dir = tempdir().unwrap();
        let mut log = HistoryLog::open(dir.path().join("history.json"));
        log.append(entry("Basic Motion", 1.0));

        assert_eq!(log.recent(10).len(), 1);
    }

    #[test]
    fn file_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut log = HistoryLog::open(&path);
        log.append(entry("Basic Motion", 20.0));

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {"));
        assert!(raw.contains("\"topic\": \"Basic Motion\""));
    }
}
