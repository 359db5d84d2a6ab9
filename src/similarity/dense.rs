//! Dense embedding similarity.
//!
//! The catalog's combined texts are embedded once at construction; each
//! call embeds only the query and takes cosine similarity against the
//! precomputed vectors.

use tracing::{info, warn};

use crate::catalog::ListingCatalog;
use crate::embedding::{EmbeddingError, TextEmbedder};

use super::{SimilarityProvider, cosine_similarity};

/// Embedding-backed similarity over a fixed catalog.
pub struct EmbeddingSimilarity {
    embedder: TextEmbedder,
    catalog_vectors: Vec<Vec<f32>>,
}

impl EmbeddingSimilarity {
    /// Embeds every listing's combined text and retains the vectors.
    ///
    /// This is the only fallible step; once constructed, the provider
    /// never errors per call.
    pub fn new(
        embedder: TextEmbedder,
        catalog: &ListingCatalog,
    ) -> Result<Self, EmbeddingError> {
        let texts = catalog.combined_texts();
        let catalog_vectors = embedder.embed_batch(&texts)?;

        info!(
            listings = catalog_vectors.len(),
            dim = embedder.dim(),
            stub = embedder.is_stub(),
            "Catalog embeddings precomputed"
        );

        Ok(Self {
            embedder,
            catalog_vectors,
        })
    }

    /// Returns `true` if the underlying embedder is the test stub.
    pub fn is_stub(&self) -> bool {
        self.embedder.is_stub()
    }
}

impl SimilarityProvider for EmbeddingSimilarity {
    fn name(&self) -> &'static str {
        "embedding"
    }

    fn catalog_len(&self) -> usize {
        self.catalog_vectors.len()
    }

    fn similarities(&self, query: &str) -> Vec<f32> {
        match self.embedder.embed(query) {
            Ok(query_vector) => self
                .catalog_vectors
                .iter()
                .map(|vector| cosine_similarity(&query_vector, vector))
                .collect(),
            Err(e) => {
                // The semantic signal is a tiebreak; a failed query embed
                // must not take down the lexical pipeline.
                warn!(error = %e, "Query embedding failed, scoring zero similarity");
                vec![0.0; self.catalog_vectors.len()]
            }
        }
    }
}

impl std::fmt::Debug for EmbeddingSimilarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingSimilarity")
            .field("listings", &self.catalog_vectors.len())
            .field("embedder", &self.embedder)
            .finish()
    }
}
