//! Raw source text and compiled-target relations.

use indexmap::IndexMap;

use crate::models::SourceFile;

/// Owns raw source text keyed by path, and the dependency relation from a
/// compiled target to the ordered set of source paths that produced it.
///
/// Sources arrive independently of artifacts — before or after their owning
/// compilation — so nothing here is validated against the artifact store.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    contents: IndexMap<String, String>,
    relations: IndexMap<String, Vec<String>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert one path's content. Last write wins.
    pub fn upsert(&mut self, path: &str, content: &str) {
        self.contents.insert(path.to_string(), content.to_string());
    }

    /// Upsert a batch of sources and record the batch's full key list, in
    /// batch order, as the relation for `target`.
    pub fn upsert_batch(&mut self, batch: &IndexMap<String, SourceFile>, target: &str) {
        let mut relation = Vec::with_capacity(batch.len());
        for (path, file) in batch {
            self.contents.insert(path.clone(), file.content.clone());
            relation.push(path.clone());
        }
        self.set_relation(target, relation);
    }

    /// Replace the relation recorded for `target`.
    ///
    /// Replace, not union: a recompilation may drop a file that is no
    /// longer imported, and a stale union would smuggle it back into later
    /// assemblies.
    pub fn set_relation(&mut self, target: &str, paths: Vec<String>) {
        self.relations.insert(target.to_string(), paths);
    }

    pub fn content(&self, path: &str) -> Option<&str> {
        self.contents.get(path).map(String::as_str)
    }

    /// The ordered source paths recorded for `target`, if any compilation
    /// of it has been tracked.
    pub fn relation(&self, target: &str) -> Option<&[String]> {
        self.relations.get(target).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(entries: &[(&str, &str)]) -> IndexMap<String, SourceFile> {
        entries
            .iter()
            .map(|(path, content)| {
                (
                    path.to_string(),
                    SourceFile {
                        content: content.to_string(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_last_write_wins() {
        let mut registry = SourceRegistry::new();
        registry.upsert("A.sol", "first");
        registry.upsert("A.sol", "second");
        assert_eq!(registry.content("A.sol"), Some("second"));
    }

    #[test]
    fn test_relation_records_batch_order() {
        let mut registry = SourceRegistry::new();
        registry.upsert_batch(&batch(&[("B.sol", "b"), ("A.sol", "a")]), "A.sol");
        assert_eq!(
            registry.relation("A.sol"),
            Some(&["B.sol".to_string(), "A.sol".to_string()][..]),
        );
    }

    #[test]
    fn test_relation_replaces_not_merges() {
        let mut registry = SourceRegistry::new();
        registry.upsert_batch(&batch(&[("A.sol", "a"), ("Lib.sol", "lib")]), "A.sol");
        registry.upsert_batch(&batch(&[("A.sol", "a2")]), "A.sol");

        assert_eq!(registry.relation("A.sol"), Some(&["A.sol".to_string()][..]));
        // The dropped file's content survives; only the relation shrinks.
        assert_eq!(registry.content("Lib.sol"), Some("lib"));
        assert_eq!(registry.content("A.sol"), Some("a2"));
    }

    #[test]
    fn test_unknown_target_has_no_relation() {
        let registry = SourceRegistry::new();
        assert_eq!(registry.relation("missing.sol"), None);
    }
}
