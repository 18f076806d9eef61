//! Abidex core library — compiler-artifact indexing store for a
//! smart-contract debugging tool.
//!
//! This crate ingests solc-style compiler output (per-file contract
//! definitions, ABI entries, syntax trees, metadata blobs) and maintains the
//! cross-referenced lookup structures later stages depend on: transaction
//! decoding resolves a call's 4-byte selector to candidate functions,
//! source-level debugging resolves a file to its compiled artifact and an
//! offset-translation handle, and replay/simulate requests receive a
//! self-contained compile spec joining sources, settings, and compiler
//! version.
//!
//! All state lives in a [`store::session::Session`] owned by one logical
//! debugging context. Everything is in-memory; nothing here performs I/O,
//! and no public operation raises — malformed compiler output is skipped
//! item by item, and reads over half-arrived state degrade to empty results.

pub mod errors;
pub mod indexer;
pub mod models;
pub mod query;
pub mod sourcemap;
pub mod store;

pub use errors::{ArtifactError, ArtifactResult};
pub use models::{
    CompileSpec, CompilerOutput, ContractArtifact, FileArtifact, IngestStats, MultiFileSpec,
    Revision, SignatureEntry, SourceFile,
};
pub use sourcemap::{LineColumn, SourceIndex, SourceMapper};
pub use store::session::Session;
