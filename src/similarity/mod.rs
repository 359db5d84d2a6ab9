//! Semantic similarity providers.
//!
//! A provider scores one query text against every catalog listing and
//! returns the scores in catalog order. Two interchangeable variants exist:
//! dense embedding cosine ([`EmbeddingSimilarity`]) and sparse TF-IDF
//! cosine ([`TfIdfSimilarity`]). The variant is chosen once, at
//! construction; the scoring pipeline is agnostic to which one is active.

pub mod dense;
pub mod sparse;


pub use dense::EmbeddingSimilarity;
pub use sparse::TfIdfSimilarity;

use tracing::warn;

use crate::catalog::ListingCatalog;
use crate::embedding::{EmbedderConfig, TextEmbedder};

/// Scores a query against the whole catalog.
///
/// `similarities` is infallible per call: provider availability is
/// resolved at construction, and any residual per-call failure inside a
/// variant degrades to zero scores rather than surfacing to ranking.
pub trait SimilarityProvider: Send + Sync {
    /// Short variant name, used for logs and the readiness endpoint.
    fn name(&self) -> &'static str;

    /// Number of catalog listings this provider was built over.
    fn catalog_len(&self) -> usize;

    /// Similarity of `query` to each listing, in catalog order.
    /// Always returns exactly `catalog_len()` values.
    fn similarities(&self, query: &str) -> Vec<f32>;
}

/// Builds the similarity provider for `catalog`.
///
/// Tries the dense embedding variant when a model directory is configured;
/// any load failure falls back to the TF-IDF variant with a single warning.
/// Per-request code never observes this decision.
pub fn build_provider(
    embedder_config: Option<EmbedderConfig>,
    catalog: &ListingCatalog,
) -> Box<dyn SimilarityProvider> {
    if let Some(config) = embedder_config {
        match TextEmbedder::load(config)
            .and_then(|embedder| EmbeddingSimilarity::new(embedder, catalog))
        {
            Ok(provider) => return Box::new(provider),
            Err(e) => {
                warn!(error = %e, "Embedding backend unavailable, falling back to TF-IDF");
            }
        }
    }

    Box::new(TfIdfSimilarity::fit(&catalog.combined_texts()))
}

/// Cosine similarity between two vectors.
///
/// Mismatched dimensions and zero-norm vectors score 0 instead of
/// panicking or propagating an error.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        warn!(
            a_len = a.len(),
            b_len = b.len(),
            "vector dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
