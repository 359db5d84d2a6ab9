//! Sparse TF-IDF similarity, the model-free fallback variant.
//!
//! A term-weighting vectorizer is fitted over the catalog once at
//! construction; queries are transformed with the fitted vocabulary.
//! Weights use the smoothed inverse document frequency
//! `ln((1 + n) / (1 + df)) + 1` and vectors are L2-normalized, so the dot
//! product of two transformed vectors is their cosine similarity, in
//! [0, 1].

use std::collections::HashMap;

use tracing::info;

use crate::constants::MIN_TERM_LEN;

use super::SimilarityProvider;

/// Sparse vector as sorted `(term_index, weight)` pairs.
type SparseVec = Vec<(usize, f32)>;

/// TF-IDF vectorizer fitted over a fixed catalog.
pub struct TfIdfSimilarity {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    catalog_vectors: Vec<SparseVec>,
}

impl TfIdfSimilarity {
    /// Fits the vectorizer over the catalog's combined texts and
    /// precomputes one normalized vector per listing.
    pub fn fit(documents: &[String]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(doc))
            .collect();

        for terms in &tokenized {
            let mut seen: Vec<usize> = Vec::new();
            for term in terms {
                let index = *vocabulary.entry(term.clone()).or_insert_with(|| {
                    document_frequency.push(0);
                    document_frequency.len() - 1
                });
                if !seen.contains(&index) {
                    seen.push(index);
                    document_frequency[index] += 1;
                }
            }
        }

        let n_docs = documents.len() as f32;
        let idf: Vec<f32> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let catalog_vectors = tokenized
            .iter()
            .map(|terms| weigh(terms, &vocabulary, &idf))
            .collect();

        info!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "TF-IDF vectorizer fitted"
        );

        Self {
            vocabulary,
            idf,
            catalog_vectors,
        }
    }

    /// Number of distinct terms learned from the catalog.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Transforms a query with the fitted vocabulary. Terms unseen during
    /// fitting are dropped, matching how the vectorizer was trained.
    fn transform(&self, text: &str) -> SparseVec {
        weigh(&tokenize(text), &self.vocabulary, &self.idf)
    }
}

impl SimilarityProvider for TfIdfSimilarity {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn catalog_len(&self) -> usize {
        self.catalog_vectors.len()
    }

    fn similarities(&self, query: &str) -> Vec<f32> {
        let query_vector = self.transform(query);

        self.catalog_vectors
            .iter()
            .map(|vector| sparse_dot(&query_vector, vector))
            .collect()
    }
}

impl std::fmt::Debug for TfIdfSimilarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfSimilarity")
            .field("vocabulary", &self.vocabulary.len())
            .field("listings", &self.catalog_vectors.len())
            .finish()
    }
}

/// Lowercased alphanumeric terms of length >= [`MIN_TERM_LEN`].
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|term| term.len() >= MIN_TERM_LEN)
        .map(str::to_string)
        .collect()
}

/// Counts terms, applies idf weights, and L2-normalizes.
fn weigh(terms: &[String], vocabulary: &HashMap<String, usize>, idf: &[f32]) -> SparseVec {
    let mut counts: HashMap<usize, f32> = HashMap::new();
    for term in terms {
        if let Some(&index) = vocabulary.get(term) {
            *counts.entry(index).or_insert(0.0) += 1.0;
        }
    }

    let mut vector: SparseVec = counts
        .into_iter()
        .map(|(index, count)| (index, count * idf[index]))
        .collect();
    vector.sort_unstable_by_key(|&(index, _)| index);

    let norm: f32 = vector.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, w) in &mut vector {
            *w /= norm;
        }
    }

    vector
}

/// Dot product of two sorted sparse vectors.
fn sparse_dot(a: &SparseVec, b: &SparseVec) -> f32 {
    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    dot
}
