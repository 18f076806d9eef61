//! Canonical signature normalization and 4-byte selector derivation.
//!
//! ABI entries arrive as raw JSON from a third-party compiler and are not
//! fully trusted: an entry that cannot be normalized is reported as an error
//! for the pipeline to skip, without affecting its siblings.

use alloy_primitives::{keccak256, Selector};
use serde_json::Value;

use crate::errors::{ArtifactError, ArtifactResult};

/// A callable function lifted out of a contract ABI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSig {
    pub name: String,
    /// Canonical input types, tuples already flattened.
    pub inputs: Vec<String>,
}

impl FunctionSig {
    /// The canonical signature string hashed for selector derivation,
    /// e.g. `transfer(address,uint256)`.
    pub fn canonical(&self) -> String {
        format!("{}({})", self.name, self.inputs.join(","))
    }

    /// The human-readable display signature shown to consumers,
    /// e.g. `transfer (address,uint256)`.
    pub fn display(&self) -> String {
        format!("{} ({})", self.name, self.inputs.join(","))
    }

    pub fn selector(&self) -> Selector {
        selector(&self.canonical())
    }
}

/// First 4 bytes of keccak-256 over the canonical signature string.
pub fn selector(canonical_signature: &str) -> Selector {
    let digest = keccak256(canonical_signature.as_bytes());
    Selector::from_slice(&digest[..4])
}

/// Interpret one raw ABI entry.
///
/// Returns `Ok(None)` for entry kinds that carry no selector (events,
/// errors, constructors, fallback and receive functions) — passing them over
/// is normal, not a failure. Returns `Err` when the entry claims to be a
/// function but cannot be normalized; callers skip such entries and keep
/// processing siblings.
///
/// Per the JSON-ABI convention, an entry with no `type` field is a function.
pub fn function_signature(entry: &Value) -> ArtifactResult<Option<FunctionSig>> {
    let obj = entry.as_object().ok_or(ArtifactError::NotAnObject)?;
    let kind = obj.get("type").and_then(Value::as_str).unwrap_or("function");
    if kind != "function" {
        return Ok(None);
    }

    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .ok_or(ArtifactError::MissingName)?;

    let inputs = match obj.get("inputs") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(list)) => {
            let mut types = Vec::with_capacity(list.len());
            for (index, input) in list.iter().enumerate() {
                let ty = canonical_type(input)
                    .map_err(|reason| ArtifactError::MalformedInput { index, reason })?;
                types.push(ty);
            }
            types
        }
        Some(_) => return Err(ArtifactError::MalformedInputs),
    };

    Ok(Some(FunctionSig {
        name: name.to_string(),
        inputs,
    }))
}

/// Canonical type for one ABI input.
///
/// Tuple types flatten into a parenthesized, comma-joined component list;
/// array suffixes on the tuple are preserved: `tuple[2][]` with components
/// `(address, uint256)` becomes `(address,uint256)[2][]`. All other type
/// strings pass through unchanged.
fn canonical_type(input: &Value) -> Result<String, String> {
    let obj = input
        .as_object()
        .ok_or_else(|| "input is not an object".to_string())?;
    let ty = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| "input has no type".to_string())?;

    match ty.strip_prefix("tuple") {
        Some(suffix) if suffix.is_empty() || suffix.starts_with('[') => {
            let components = obj
                .get("components")
                .and_then(Value::as_array)
                .ok_or_else(|| "tuple type has no components".to_string())?;
            let mut flat = Vec::with_capacity(components.len());
            for component in components {
                flat.push(canonical_type(component)?);
            }
            Ok(format!("({}){}", flat.join(","), suffix))
        }
        _ => Ok(ty.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
