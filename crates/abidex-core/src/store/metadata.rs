//! Compiler metadata records keyed by file and contract.

use indexmap::IndexMap;

/// Owns raw compiler metadata (JSON-encoded version + settings) keyed by
/// `"{file}:{contract}"`.
///
/// Records are set whole and overwritten whole on re-ingestion; the blob is
/// not parsed until a compile spec is assembled from it.
#[derive(Debug, Default)]
pub struct MetadataIndex {
    records: IndexMap<String, String>,
}

impl MetadataIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(file: &str, contract_name: &str) -> String {
        format!("{file}:{contract_name}")
    }

    pub fn insert(&mut self, file: &str, contract_name: &str, raw: String) {
        self.records.insert(Self::key(file, contract_name), raw);
    }

    pub fn raw(&self, file: &str, contract_name: &str) -> Option<&str> {
        self.records
            .get(&Self::key(file, contract_name))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
