//! Seam for the external source-offset translation collaborator.
//!
//! The store never interprets source text itself: it forwards the registered
//! raw text of the selected path to a [`SourceMapper`] and caches the handle
//! the mapper returns, one handle per selected path per revision.

use std::sync::Arc;

/// A resolved line/column position within one source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineColumn {
    pub line: u32,
    pub column: u32,
}

/// Maps byte offsets within one source text to line/column positions.
pub trait SourceIndex: Send + Sync {
    /// `None` when the offset lies past the end of the indexed text.
    fn locate(&self, offset: usize) -> Option<LineColumn>;
}

/// Builds a [`SourceIndex`] from raw source text.
///
/// Implemented outside this crate by the hosting tool; injected into the
/// session at construction time.
pub trait SourceMapper: Send + Sync {
    fn index(&self, text: &str) -> Arc<dyn SourceIndex>;
}
