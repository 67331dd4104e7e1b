//! Cheap identity of a source file's contents.

use chrono::{DateTime, Local};
use partfind_core::Result;
use std::path::Path;
use std::time::SystemTime;

/// Length and modification time of the workbook on disk.
///
/// Two fingerprints differ whenever the file is rewritten, which is what the
/// index cache keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFingerprint {
    pub len: u64,
    pub modified: SystemTime,
}

impl SourceFingerprint {
    /// Fingerprint the file at `path`.
    pub fn of(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            partfind_core::Error::Source(format!("cannot stat {}: {e}", path.display()))
        })?;

        Ok(Self {
            len: metadata.len(),
            modified: metadata.modified()?,
        })
    }

    /// Modification time in local time, for display.
    pub fn modified_local(&self) -> DateTime<Local> {
        DateTime::<Local>::from(self.modified)
    }
}
