//! Compile-spec assembly for replay/simulate requests.
//!
//! A join across three independently updated indices: the target's source
//! relation, its metadata record, and the raw source contents. Sources,
//! metadata, and relations arrive in any order from independent ingestion
//! events, so any leg may be missing or stale at read time; assembly
//! degrades to `None` instead of raising.

use indexmap::IndexMap;
use tracing::debug;

use crate::errors::ArtifactResult;
use crate::models::{CompileSpec, ContractMetadata, MultiFileSpec};
use crate::store::metadata::MetadataIndex;
use crate::store::sources::SourceRegistry;

fn parse_metadata(raw: &str) -> ArtifactResult<ContractMetadata> {
    Ok(serde_json::from_str(raw)?)
}

/// Assemble a minimal self-contained compile spec for `target_contract` in
/// `target_path`.
///
/// Returns `None` when the target has no tracked relation, no metadata
/// record, or unreadable metadata — all normal "not ready" states. Relation
/// paths with no registered content are omitted from the file set; if none
/// resolves, the spec would be unreproducible and `None` is returned.
pub fn assemble_compile_spec(
    sources: &SourceRegistry,
    metadata: &MetadataIndex,
    target_path: &str,
    target_contract: &str,
) -> Option<CompileSpec> {
    let relation = sources.relation(target_path)?;
    let raw = metadata.raw(target_path, target_contract)?;

    let parsed = match parse_metadata(raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(
                file = %target_path,
                contract = %target_contract,
                error = %err,
                "metadata unreadable, compile spec unavailable"
            );
            return None;
        }
    };

    let mut file_set = IndexMap::with_capacity(relation.len());
    for path in relation {
        match sources.content(path) {
            Some(content) => {
                file_set.insert(path.clone(), content.to_string());
            }
            None => {
                debug!(path = %path, "relation references unregistered source, omitting");
            }
        }
    }
    if file_set.is_empty() {
        return None;
    }

    let compiler_settings = serde_json::to_string(&parsed.settings).unwrap_or_default();

    Some(CompileSpec {
        compiler_version: parsed.compiler.version,
        contract_name: target_contract.to_string(),
        constructor_args: String::new(),
        multi_file: MultiFileSpec {
            source: file_set,
            compiler_settings,
        },
    })
}
