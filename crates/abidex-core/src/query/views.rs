//! Revision-keyed derived views over the selected file.
//!
//! A single-entry cache per view: the value computed for one
//! `(revision, path)` pair is served until either component changes, then
//! recomputed once and the previous entry discarded. Only one "active" key
//! is ever cached; there is no partial invalidation and no LRU.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::{FileArtifact, Revision};
use crate::sourcemap::SourceIndex;

struct CachedView<T> {
    revision: Revision,
    path: String,
    value: T,
}

/// The read-side caches owned by a session.
#[derive(Default)]
pub(crate) struct ViewCache {
    artifact: Mutex<Option<CachedView<Option<Arc<FileArtifact>>>>>,
    source_index: Mutex<Option<CachedView<Option<Arc<dyn SourceIndex>>>>>,
}

impl ViewCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn artifact_at(
        &self,
        revision: Revision,
        path: &str,
        compute: impl FnOnce() -> Option<Arc<FileArtifact>>,
    ) -> Option<Arc<FileArtifact>> {
        get_or_compute(&self.artifact, revision, path, compute)
    }

    pub(crate) fn source_index_at(
        &self,
        revision: Revision,
        path: &str,
        compute: impl FnOnce() -> Option<Arc<dyn SourceIndex>>,
    ) -> Option<Arc<dyn SourceIndex>> {
        get_or_compute(&self.source_index, revision, path, compute)
    }
}

fn get_or_compute<T: Clone>(
    slot: &Mutex<Option<CachedView<T>>>,
    revision: Revision,
    path: &str,
    compute: impl FnOnce() -> T,
) -> T {
    let mut slot = slot.lock();
    if let Some(cached) = slot.as_ref() {
        if cached.revision == revision && cached.path == path {
            return cached.value.clone();
        }
    }
    let value = compute();
    *slot = Some(CachedView {
        revision,
        path: path.to_string(),
        value: value.clone(),
    });
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn compute_counting(calls: &AtomicUsize) -> impl Fn() -> Option<Arc<FileArtifact>> + '_ {
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            None
        }
    }

    #[test]
    fn test_same_revision_and_path_serves_cache() {
        let cache = ViewCache::new();
        let calls = AtomicUsize::new(0);
        cache.artifact_at(Revision(1), "A.sol", compute_counting(&calls));
        cache.artifact_at(Revision(1), "A.sol", compute_counting(&calls));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_revision_change_recomputes_once() {
        let cache = ViewCache::new();
        let calls = AtomicUsize::new(0);
        cache.artifact_at(Revision(1), "A.sol", compute_counting(&calls));
        cache.artifact_at(Revision(2), "A.sol", compute_counting(&calls));
        cache.artifact_at(Revision(2), "A.sol", compute_counting(&calls));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_path_change_recomputes() {
        let cache = ViewCache::new();
        let calls = AtomicUsize::new(0);
        cache.artifact_at(Revision(1), "A.sol", compute_counting(&calls));
        cache.artifact_at(Revision(1), "B.sol", compute_counting(&calls));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_single_entry_eviction() {
        // Alternating paths never hit: only one key is cached at a time.
        let cache = ViewCache::new();
        let calls = AtomicUsize::new(0);
        cache.artifact_at(Revision(1), "A.sol", compute_counting(&calls));
        cache.artifact_at(Revision(1), "B.sol", compute_counting(&calls));
        cache.artifact_at(Revision(1), "A.sol", compute_counting(&calls));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
