//! Selector-to-candidate index over all ingested contract functions.

use alloy_primitives::Selector;
use indexmap::IndexMap;

use crate::models::SignatureEntry;

/// Maps a 4-byte function selector to every candidate
/// `(contract, file, display signature)` seen across ingested contracts.
///
/// Collisions are expected and kept side by side; deduplication only guards
/// against the same artifact being ingested twice.
#[derive(Debug, Default)]
pub struct SignatureIndex {
    entries: IndexMap<Selector, Vec<SignatureEntry>>,
}

impl SignatureIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a candidate for `selector` unless the identical
    /// `(contract_name, file, name)` triple is already present.
    ///
    /// Returns whether the entry was actually added.
    pub fn insert(&mut self, selector: Selector, entry: SignatureEntry) -> bool {
        let candidates = self.entries.entry(selector).or_default();
        if candidates.iter().any(|existing| *existing == entry) {
            return false;
        }
        candidates.push(entry);
        true
    }

    /// Every candidate recorded for `selector`; empty when unknown.
    pub fn candidates(&self, selector: Selector) -> &[SignatureEntry] {
        self.entries
            .get(&selector)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct selectors with at least one candidate.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
