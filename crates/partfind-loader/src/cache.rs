//! Explicitly owned, fingerprint-keyed index cache.

use crate::{SourceFingerprint, WorkbookLoader};
use partfind_core::Result;
use partfind_index::SearchIndex;
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// The source fingerprint matched; the live index was kept.
    Unchanged,
    /// A new index was built and swapped in.
    Rebuilt { entries: usize },
}

/// Holds the live index and the fingerprint of the source it came from.
///
/// Readers take an `Arc` snapshot via [`IndexCache::current`]; a refresh
/// builds the replacement off to the side and swaps the `Arc`, so a snapshot
/// is never observed half built.
///
/// When loading fails the cache serves an empty index and the error is
/// returned to the caller for reporting.
pub struct IndexCache {
    loader: WorkbookLoader,
    index: Arc<SearchIndex>,
    fingerprint: Option<SourceFingerprint>,
}

impl IndexCache {
    /// Create a cache that serves an empty index until the first refresh.
    pub fn new(loader: WorkbookLoader) -> Self {
        Self {
            loader,
            index: Arc::new(SearchIndex::default()),
            fingerprint: None,
        }
    }

    /// Snapshot of the live index.
    pub fn current(&self) -> Arc<SearchIndex> {
        Arc::clone(&self.index)
    }

    /// Fingerprint of the source behind the live index, if one loaded.
    pub fn fingerprint(&self) -> Option<SourceFingerprint> {
        self.fingerprint
    }

    /// True when the source on disk no longer matches the live index.
    pub fn is_stale(&self) -> bool {
        match (self.fingerprint, SourceFingerprint::of(self.loader.path())) {
            (Some(cached), Ok(on_disk)) => cached != on_disk,
            _ => true,
        }
    }

    /// Drop the cached fingerprint so the next refresh rebuilds.
    pub fn invalidate(&mut self) {
        self.fingerprint = None;
    }

    /// Rebuild if the source changed since the last successful load.
    pub fn refresh(&mut self) -> Result<Refresh> {
        let fingerprint = match SourceFingerprint::of(self.loader.path()) {
            Ok(fingerprint) => fingerprint,
            Err(e) => {
                self.install_empty();
                return Err(e);
            }
        };

        if self.fingerprint == Some(fingerprint) {
            return Ok(Refresh::Unchanged);
        }

        match self.loader.load() {
            Ok(entries) => {
                let index = SearchIndex::build(&entries);
                info!(
                    entries = index.len(),
                    tokens = index.token_count(),
                    "Index rebuilt from {}",
                    self.loader.path().display()
                );
                self.index = Arc::new(index);
                self.fingerprint = Some(fingerprint);
                Ok(Refresh::Rebuilt {
                    entries: entries.len(),
                })
            }
            Err(e) => {
                warn!("Load failed, serving an empty index: {e}");
                self.install_empty();
                Err(e)
            }
        }
    }

    /// Rebuild unconditionally.
    pub fn reload(&mut self) -> Result<Refresh> {
        self.invalidate();
        self.refresh()
    }

    fn install_empty(&mut self) {
        self.index = Arc::new(SearchIndex::default());
        self.fingerprint = None;
    }
}
