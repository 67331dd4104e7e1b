//! partfind-watcher: notices when the source workbook changes on disk.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use partfind_core::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use tracing::{debug, info};

/// Change to the watched source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
    /// The file was created, written, or renamed into place.
    Changed,
    /// The file disappeared.
    Removed,
}

/// Watches a single file by watching its parent directory.
///
/// Spreadsheet editors usually save by writing a temporary file and renaming
/// it over the old one, so the file itself cannot be watched directly.
pub struct SourceWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<Event>>,
    target: PathBuf,
}

impl SourceWatcher {
    /// Start watching `path`.
    pub fn new(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .ok_or_else(|| Error::Watcher(format!("not a file path: {}", path.display())))?;
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        // Events carry canonical paths (e.g. /private/var on macOS).
        let parent = std::fs::canonicalize(parent)?;
        let target = parent.join(file_name);

        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(tx, Config::default())
            .map_err(|e| Error::Watcher(e.to_string()))?;

        info!("Watching source: {}", target.display());
        watcher
            .watch(&parent, RecursiveMode::NonRecursive)
            .map_err(|e| Error::Watcher(e.to_string()))?;

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            target,
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Drain pending events (non-blocking), collapsed to the last relevant one.
    pub fn poll(&self) -> Option<SourceEvent> {
        let mut latest = None;

        while let Ok(result) = self.receiver.try_recv() {
            match result {
                Ok(event) => {
                    debug!("Source event: {:?}", event);
                    if let Some(update) = self.classify(&event) {
                        latest = Some(update);
                    }
                }
                Err(e) => debug!("Watcher error: {e}"),
            }
        }

        latest
    }

    fn classify(&self, event: &Event) -> Option<SourceEvent> {
        if !event.paths.iter().any(|p| p == &self.target) {
            return None;
        }

        match event.kind {
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any => {
                if self.target.exists() {
                    Some(SourceEvent::Changed)
                } else {
                    Some(SourceEvent::Removed)
                }
            }
            EventKind::Remove(_) => Some(SourceEvent::Removed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};
    use tempfile::TempDir;

    fn event(kind: EventKind, path: &Path) -> Event {
        Event::new(kind).add_path(path.to_path_buf())
    }

    #[test]
    fn test_classify_filters_other_files() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("parts.xlsx");
        std::fs::write(&target, b"x").unwrap();
        let watcher = SourceWatcher::new(&target).unwrap();

        let other = temp.path().join("~$parts.xlsx");
        assert_eq!(
            watcher.classify(&event(EventKind::Create(CreateKind::File), &other)),
            None
        );
        assert_eq!(
            watcher.classify(&event(EventKind::Modify(ModifyKind::Any), watcher.target())),
            Some(SourceEvent::Changed)
        );
    }

    #[test]
    fn test_classify_removal() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("parts.xlsx");
        let watcher = SourceWatcher::new(&target).unwrap();

        assert_eq!(
            watcher.classify(&event(EventKind::Remove(RemoveKind::File), watcher.target())),
            Some(SourceEvent::Removed)
        );
        // Modify on a path that no longer exists reads as removal.
        assert_eq!(
            watcher.classify(&event(EventKind::Modify(ModifyKind::Any), watcher.target())),
            Some(SourceEvent::Removed)
        );
    }

    #[test]
    fn test_poll_without_events() {
        let temp = TempDir::new().unwrap();
        let watcher = SourceWatcher::new(&temp.path().join("parts.xlsx")).unwrap();
        assert_eq!(watcher.poll(), None);
    }
}
