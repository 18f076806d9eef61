//! The session-owned store and its query facade.

use std::sync::Arc;

use alloy_primitives::Selector;
use indexmap::IndexMap;

use crate::indexer::pipeline;
use crate::models::{
    CompileSpec, CompilerOutput, FileArtifact, IngestStats, Revision, SignatureEntry, SourceFile,
};
use crate::query::simulate;
use crate::query::views::ViewCache;
use crate::sourcemap::{SourceIndex, SourceMapper};
use crate::store::artifacts::ArtifactStore;
use crate::store::metadata::MetadataIndex;
use crate::store::signatures::SignatureIndex;
use crate::store::sources::SourceRegistry;

/// The compiler-artifact store for one debugging/compilation context.
///
/// Owns every index plus the revision counter, and is handed around by
/// explicit reference rather than living in module-level state. One session
/// has one writer; mutations take `&mut self`, run to completion, and bump
/// the revision as their final step, so a reader that observes a new
/// revision observes all of that mutation's writes.
///
/// None of the public reads raise: unknown selectors, un-ingested paths,
/// and half-arrived simulate prerequisites all surface as empty results.
pub struct Session {
    artifacts: ArtifactStore,
    sources: SourceRegistry,
    metadata: MetadataIndex,
    signatures: SignatureIndex,
    revision: Revision,
    views: ViewCache,
    mapper: Box<dyn SourceMapper>,
}

impl Session {
    /// Create an empty session around the given source-mapping collaborator.
    pub fn new(mapper: Box<dyn SourceMapper>) -> Self {
        Self {
            artifacts: ArtifactStore::new(),
            sources: SourceRegistry::new(),
            metadata: MetadataIndex::new(),
            signatures: SignatureIndex::new(),
            revision: Revision::default(),
            views: ViewCache::new(),
            mapper,
        }
    }

    // -----------------------------------------------------------------------
    // Mutations — each bumps the revision exactly once, as the last step.
    // -----------------------------------------------------------------------

    /// Ingest one compiler output into the artifact, metadata, and signature
    /// indices.
    ///
    /// The revision is bumped once per call, however many files or contracts
    /// the output touches.
    pub fn ingest(&mut self, output: &CompilerOutput) -> IngestStats {
        let stats = pipeline::ingest_output(
            output,
            &mut self.artifacts,
            &mut self.metadata,
            &mut self.signatures,
        );
        self.revision.bump();
        stats
    }

    /// Register or overwrite one source file's text.
    pub fn add_source(&mut self, path: &str, content: &str) {
        self.sources.upsert(path, content);
        self.revision.bump();
    }

    /// Register a batch of sources and record the batch as the source
    /// relation for `target`, replacing any prior relation.
    pub fn add_sources(&mut self, batch: &IndexMap<String, SourceFile>, target: &str) {
        self.sources.upsert_batch(batch, target);
        self.revision.bump();
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// The current revision. Readers compare revisions to detect "nothing
    /// changed"; content diffing is neither required nor reliable.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Every candidate recorded for `selector`, empty when unknown.
    /// Collisions across unrelated contracts surface all candidates;
    /// disambiguation is the caller's concern.
    pub fn methods_by_selector(&self, selector: Selector) -> &[SignatureEntry] {
        self.signatures.candidates(selector)
    }

    /// Display label for a selector: the sole candidate's display signature,
    /// or the raw `0x`-prefixed selector hex when unknown or ambiguous.
    pub fn method_display(&self, selector: Selector) -> String {
        match self.signatures.candidates(selector) {
            [single] => single.name.clone(),
            _ => selector.to_string(),
        }
    }

    /// The ingested artifact for `path`, cached until the revision or the
    /// selected path changes.
    pub fn active_artifact(&self, path: &str) -> Option<Arc<FileArtifact>> {
        self.views.artifact_at(self.revision, path, || {
            self.artifacts.file(path).cloned().map(Arc::new)
        })
    }

    /// The offset-translation handle for `path`'s registered source text,
    /// cached until the revision or the selected path changes. `None` when
    /// no text is registered for the path.
    pub fn active_source_index(&self, path: &str) -> Option<Arc<dyn SourceIndex>> {
        self.views.source_index_at(self.revision, path, || {
            self.sources.content(path).map(|text| self.mapper.index(text))
        })
    }

    /// Assemble a self-contained compile spec for replaying `target_contract`
    /// from `target_path` outside this process.
    ///
    /// `None` whenever any prerequisite (relation, metadata, resolvable
    /// sources) has not arrived yet — a normal state, not an error.
    pub fn before_simulate(&self, target_path: &str, target_contract: &str) -> Option<CompileSpec> {
        simulate::assemble_compile_spec(&self.sources, &self.metadata, target_path, target_contract)
    }

    // -----------------------------------------------------------------------
    // Index access
    // -----------------------------------------------------------------------

    pub fn artifacts(&self) -> &ArtifactStore {
        &self.artifacts
    }

    pub fn sources(&self) -> &SourceRegistry {
        &self.sources
    }
}
