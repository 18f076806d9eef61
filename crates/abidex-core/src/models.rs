//! Shared typed models used across ingestion, storage, and query layers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Revision
// ---------------------------------------------------------------------------

/// Monotonically increasing counter marking the most recent mutation to the
/// store.
///
/// The externally observable view (active artifact, active source index) is a
/// pure function of the revision and the selected path; consumers detect
/// "nothing changed" by comparing revisions, never by diffing contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(pub u64);

impl Revision {
    pub(crate) fn bump(&mut self) {
        self.0 += 1;
    }
}

// ---------------------------------------------------------------------------
// Compiler output (ingestion input)
// ---------------------------------------------------------------------------

/// One compilation run's output, as delivered by the compiler collaborator.
///
/// Shaped like solc standard-JSON output: contracts keyed by source path and
/// contract name, syntax trees keyed by source path. The two key sets are not
/// required to agree; ingestion processes whatever is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompilerOutput {
    #[serde(default)]
    pub contracts: IndexMap<String, IndexMap<String, CompiledContract>>,
    #[serde(default)]
    pub sources: IndexMap<String, CompiledSource>,
}

/// A single compiled contract within a [`CompilerOutput`].
///
/// The ABI is a list of raw JSON entries; the store treats them as opaque
/// except for selector derivation. Third-party compiler output is not fully
/// trusted, so nothing here is validated at deserialization time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompiledContract {
    #[serde(default)]
    pub abi: Vec<Value>,
    #[serde(default)]
    pub metadata: Option<String>,
}

/// Per-file compiler output that is not contract-scoped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompiledSource {
    #[serde(default)]
    pub ast: Option<Value>,
}

// ---------------------------------------------------------------------------
// Stored artifacts
// ---------------------------------------------------------------------------

/// One compiled contract as owned by the artifact store.
///
/// Replaced wholesale whenever its file is re-ingested.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: Vec<Value>,
    pub metadata: Option<String>,
}

/// One compiled source file: its contract set and syntax tree.
///
/// An ingestion that mentions `path` always replaces the complete contract
/// set; file artifacts are never partially merged.
#[derive(Debug, Clone, PartialEq)]
pub struct FileArtifact {
    pub path: String,
    pub contracts: IndexMap<String, ContractArtifact>,
    pub ast: Option<Value>,
}

// ---------------------------------------------------------------------------
// Signature entries
// ---------------------------------------------------------------------------

/// One candidate resolution for a 4-byte selector.
///
/// `name` is the human-readable display signature, e.g.
/// `"transfer (address,uint256)"`. Selector collisions across unrelated
/// contracts are expected; each candidate is kept and disambiguation is left
/// to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureEntry {
    pub contract_name: String,
    pub file: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Source registration
// ---------------------------------------------------------------------------

/// A single file in a source registration batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceFile {
    pub content: String,
}

// ---------------------------------------------------------------------------
// Compile spec (simulate/replay output)
// ---------------------------------------------------------------------------

/// A self-contained description of how to recompile one contract, suitable
/// for a replay/simulate request that runs outside this process.
///
/// Serializes with camelCase keys for the simulate transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileSpec {
    pub compiler_version: String,
    pub contract_name: String,
    /// Left empty here; the submitting caller fills this in.
    pub constructor_args: String,
    pub multi_file: MultiFileSpec,
}

/// The file set and settings portion of a [`CompileSpec`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiFileSpec {
    /// Source path -> full text content.
    pub source: IndexMap<String, String>,
    /// JSON-encoded `{remappings, optimizer}` pair.
    pub compiler_settings: String,
}

// ---------------------------------------------------------------------------
// Contract metadata (parsed form)
// ---------------------------------------------------------------------------

/// Parsed shape of a contract's raw metadata JSON.
///
/// Only the fields the compile-spec assembly needs are modeled; everything
/// else in the metadata blob is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractMetadata {
    pub compiler: CompilerInfo,
    #[serde(default)]
    pub settings: MetadataSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompilerInfo {
    pub version: String,
}

/// The subset of compiler settings a simulate request must reproduce.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MetadataSettings {
    #[serde(default)]
    pub remappings: Vec<String>,
    #[serde(default)]
    pub optimizer: Value,
}

// ---------------------------------------------------------------------------
// Ingest stats
// ---------------------------------------------------------------------------

/// Summary counters from one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// File artifacts created or replaced.
    pub files_indexed: usize,
    /// Contracts stored across all files.
    pub contracts_indexed: usize,
    /// Signature entries newly added to the selector index (deduplicated
    /// re-ingestions add none).
    pub selectors_indexed: usize,
    /// ABI entries whose selector could not be derived and were skipped.
    pub entries_skipped: usize,
}
