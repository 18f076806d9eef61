//! Per-file compiled artifacts: contract sets and syntax trees.

use indexmap::IndexMap;

use crate::models::{ContractArtifact, FileArtifact};

/// Owns, per source path, the set of compiled contracts and the file's
/// syntax tree.
///
/// Re-ingestion always replaces a file's artifact wholesale; there is no
/// merge path, so a recompilation that drops a contract drops it here too.
#[derive(Debug, Default)]
pub struct ArtifactStore {
    files: IndexMap<String, FileArtifact>,
}

impl ArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the artifact stored under `artifact.path`.
    pub fn replace(&mut self, artifact: FileArtifact) {
        self.files.insert(artifact.path.clone(), artifact);
    }

    pub fn file(&self, path: &str) -> Option<&FileArtifact> {
        self.files.get(path)
    }

    pub fn contract(&self, path: &str, contract_name: &str) -> Option<&ContractArtifact> {
        self.files.get(path)?.contracts.get(contract_name)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
