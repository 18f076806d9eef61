//! Error types for the abidex core library.

/// Errors raised while interpreting untrusted compiler output.
///
/// These never escape the store's public API: ingestion skips the offending
/// item and counts it in the returned stats, and read-side assembly degrades
/// to an empty result instead of propagating.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("ABI entry is not a JSON object")]
    NotAnObject,

    #[error("function ABI entry has no name")]
    MissingName,

    #[error("function ABI entry has a non-array inputs field")]
    MalformedInputs,

    #[error("ABI input {index} is malformed: {reason}")]
    MalformedInput { index: usize, reason: String },

    #[error("metadata is not valid JSON: {0}")]
    Metadata(#[from] serde_json::Error),
}

pub type ArtifactResult<T> = Result<T, ArtifactError>;
