//! Ingestion of one compiler output into the session's indices.

use indexmap::IndexMap;
use tracing::debug;

use crate::indexer::abi;
use crate::models::{CompilerOutput, ContractArtifact, FileArtifact, IngestStats, SignatureEntry};
use crate::store::artifacts::ArtifactStore;
use crate::store::metadata::MetadataIndex;
use crate::store::signatures::SignatureIndex;

/// Index one compiler output.
///
/// Walks the union of the output's `contracts` and `sources` key sets —
/// the two are not required to agree — and for every mentioned path:
/// derives selectors for callable ABI entries, overwrites metadata records,
/// and wholesale-replaces the file artifact. An entry whose selector cannot
/// be derived is skipped and counted; its siblings are unaffected.
///
/// The revision bump belongs to the caller; this function only writes index
/// state.
pub(crate) fn ingest_output(
    output: &CompilerOutput,
    artifacts: &mut ArtifactStore,
    metadata: &mut MetadataIndex,
    signatures: &mut SignatureIndex,
) -> IngestStats {
    let mut stats = IngestStats::default();

    for (path, contracts) in &output.contracts {
        let mut file_contracts = IndexMap::with_capacity(contracts.len());

        for (contract_name, compiled) in contracts {
            for entry in &compiled.abi {
                match abi::function_signature(entry) {
                    Ok(Some(sig)) => {
                        let added = signatures.insert(
                            sig.selector(),
                            SignatureEntry {
                                contract_name: contract_name.clone(),
                                file: path.clone(),
                                name: sig.display(),
                            },
                        );
                        if added {
                            stats.selectors_indexed += 1;
                        }
                    }
                    Ok(None) => {}
                    Err(err) => {
                        debug!(
                            file = %path,
                            contract = %contract_name,
                            error = %err,
                            "skipping unindexable ABI entry"
                        );
                        stats.entries_skipped += 1;
                    }
                }
            }

            if let Some(raw) = &compiled.metadata {
                metadata.insert(path, contract_name, raw.clone());
            }

            file_contracts.insert(
                contract_name.clone(),
                ContractArtifact {
                    contract_name: contract_name.clone(),
                    abi: compiled.abi.clone(),
                    metadata: compiled.metadata.clone(),
                },
            );
            stats.contracts_indexed += 1;
        }

        artifacts.replace(FileArtifact {
            path: path.clone(),
            contracts: file_contracts,
            ast: output.sources.get(path).and_then(|s| s.ast.clone()),
        });
        stats.files_indexed += 1;
    }

    // Paths that only appear under `sources` still get a (contract-less)
    // artifact so their syntax trees are reachable.
    for (path, source) in &output.sources {
        if output.contracts.contains_key(path) {
            continue;
        }
        artifacts.replace(FileArtifact {
            path: path.clone(),
            contracts: IndexMap::new(),
            ast: source.ast.clone(),
        });
        stats.files_indexed += 1;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn output(raw: serde_json::Value) -> CompilerOutput {
        serde_json::from_value(raw).unwrap()
    }

    fn token_output() -> CompilerOutput {
        output(json!({
            "contracts": {
                "A.sol": {
                    "Token": {
                        "abi": [
                            {
                                "type": "function",
                                "name": "transfer",
                                "inputs": [
                                    {"name": "to", "type": "address"},
                                    {"name": "amount", "type": "uint256"},
                                ],
                            },
                            {"type": "event", "name": "Transfer", "inputs": []},
                        ],
                        "metadata": "{\"compiler\":{\"version\":\"0.8.19\"},\"settings\":{}}",
                    },
                },
            },
            "sources": {
                "A.sol": {"ast": {"nodeType": "SourceUnit"}},
            },
        }))
    }

    #[test]
    fn test_ingest_populates_all_indices() {
        let mut artifacts = ArtifactStore::new();
        let mut metadata = MetadataIndex::new();
        let mut signatures = SignatureIndex::new();

        let stats = ingest_output(&token_output(), &mut artifacts, &mut metadata, &mut signatures);

        assert_eq!(stats.files_indexed, 1);
        assert_eq!(stats.contracts_indexed, 1);
        assert_eq!(stats.selectors_indexed, 1);
        assert_eq!(stats.entries_skipped, 0);

        let file = artifacts.file("A.sol").unwrap();
        assert_eq!(file.contracts.len(), 1);
        assert!(file.ast.is_some());
        assert!(metadata.raw("A.sol", "Token").is_some());

        let sel = abi::selector("transfer(address,uint256)");
        assert_eq!(
            signatures.candidates(sel),
            &[SignatureEntry {
                contract_name: "Token".to_string(),
                file: "A.sol".to_string(),
                name: "transfer (address,uint256)".to_string(),
            }],
        );
    }

    #[test]
    fn test_reingest_is_idempotent() {
        let mut artifacts = ArtifactStore::new();
        let mut metadata = MetadataIndex::new();
        let mut signatures = SignatureIndex::new();
        let out = token_output();

        ingest_output(&out, &mut artifacts, &mut metadata, &mut signatures);
        let before = artifacts.file("A.sol").unwrap().clone();

        let stats = ingest_output(&out, &mut artifacts, &mut metadata, &mut signatures);
        assert_eq!(stats.selectors_indexed, 0);
        let sel = abi::selector("transfer(address,uint256)");
        assert_eq!(signatures.candidates(sel).len(), 1);
        assert_eq!(artifacts.file("A.sol").unwrap(), &before);
    }

    #[test]
    fn test_malformed_entry_skipped_siblings_kept() {
        let out = output(json!({
            "contracts": {
                "A.sol": {
                    "Broken": {
                        "abi": [
                            {"type": "function", "inputs": []},
                            {"type": "function", "name": "ok", "inputs": []},
                        ],
                    },
                },
            },
            "sources": {},
        }));

        let mut artifacts = ArtifactStore::new();
        let mut metadata = MetadataIndex::new();
        let mut signatures = SignatureIndex::new();
        let stats = ingest_output(&out, &mut artifacts, &mut metadata, &mut signatures);

        assert_eq!(stats.entries_skipped, 1);
        assert_eq!(stats.selectors_indexed, 1);
        assert_eq!(signatures.candidates(abi::selector("ok()")).len(), 1);
    }

    #[test]
    fn test_reingest_replaces_contract_set_wholesale() {
        let mut artifacts = ArtifactStore::new();
        let mut metadata = MetadataIndex::new();
        let mut signatures = SignatureIndex::new();

        ingest_output(&token_output(), &mut artifacts, &mut metadata, &mut signatures);

        let second = output(json!({
            "contracts": {
                "A.sol": {
                    "Renamed": {"abi": []},
                },
            },
            "sources": {},
        }));
        ingest_output(&second, &mut artifacts, &mut metadata, &mut signatures);

        let file = artifacts.file("A.sol").unwrap();
        assert!(file.contracts.contains_key("Renamed"));
        assert!(!file.contracts.contains_key("Token"));
        assert_eq!(file.ast, None);
    }

    #[test]
    fn test_source_only_path_gets_contractless_artifact() {
        let out = output(json!({
            "contracts": {},
            "sources": {"Lib.sol": {"ast": {"nodeType": "SourceUnit"}}},
        }));

        let mut artifacts = ArtifactStore::new();
        let mut metadata = MetadataIndex::new();
        let mut signatures = SignatureIndex::new();
        let stats = ingest_output(&out, &mut artifacts, &mut metadata, &mut signatures);

        assert_eq!(stats.files_indexed, 1);
        let file = artifacts.file("Lib.sol").unwrap();
        assert!(file.contracts.is_empty());
        assert!(file.ast.is_some());
    }
}
