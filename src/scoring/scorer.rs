//! The ranking pipeline: combine lexical and semantic signals, normalize,
//! sort, deduplicate, truncate.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::ListingCatalog;
use crate::constants::SEMANTIC_WEIGHT;
use crate::similarity::SimilarityProvider;

use super::lexical::{LexicalSignals, lexical_signals};
use super::types::{CandidateProfile, ScoredListing};

/// Combines lexical signals with the semantic tiebreak.
///
/// Hard gate: zero skill overlap scores zero, no matter how similar the
/// listing text is; a listing with no shared skill can never outrank one
/// with any. The semantic term is clamped to [0, 1] so a provider
/// reporting negative cosine cannot pull a qualified score below zero.
pub(crate) fn raw_score(signals: &LexicalSignals, semantic_similarity: f32) -> f32 {
    if signals.overlap == 0.0 {
        return 0.0;
    }

    signals.overlap
        + signals.sector_boost
        + signals.location_boost
        + SEMANTIC_WEIGHT * semantic_similarity.clamp(0.0, 1.0)
}

/// The matching engine: a read-only catalog plus the similarity provider
/// chosen at startup.
///
/// [`Recommender::recommend`] is a pure function of its inputs. No state
/// is retained between calls, so any number of calls may run concurrently
/// over the shared catalog.
pub struct Recommender {
    catalog: Arc<ListingCatalog>,
    provider: Box<dyn SimilarityProvider>,
}

impl Recommender {
    pub fn new(catalog: Arc<ListingCatalog>, provider: Box<dyn SimilarityProvider>) -> Self {
        Self { catalog, provider }
    }

    /// The catalog this recommender ranks over.
    pub fn catalog(&self) -> &ListingCatalog {
        &self.catalog
    }

    /// Name of the active similarity variant.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Ranks the catalog for `profile` and returns at most `top_n`
    /// deduplicated listings, best first.
    ///
    /// Zero-overlap listings are never returned; an empty result means
    /// "no matches", not an error. Repeated calls with identical inputs
    /// return identical output.
    pub fn recommend(&self, profile: &CandidateProfile, top_n: usize) -> Vec<ScoredListing<'_>> {
        if self.catalog.is_empty() {
            return Vec::new();
        }

        let candidate_skills = profile.skill_set();
        let similarities = self.provider.similarities(&profile.query_text());

        let mut scored: Vec<ScoredListing<'_>> = self
            .catalog
            .entries()
            .enumerate()
            .map(|(index, (listing, listing_skills))| {
                let signals = lexical_signals(profile, &candidate_skills, listing, listing_skills);
                // Missing entries score zero rather than shifting alignment.
                let semantic_similarity = similarities.get(index).copied().unwrap_or(0.0);
                let raw = raw_score(&signals, semantic_similarity);

                ScoredListing {
                    listing,
                    overlap: signals.overlap,
                    sector_boost: signals.sector_boost,
                    location_boost: signals.location_boost,
                    semantic_similarity,
                    raw_score: raw,
                    normalized_score: 0.0,
                    match_percent: 0,
                    matched_skills: signals.matched_skills,
                }
            })
            .collect();

        let max_raw = scored.iter().map(|s| s.raw_score).fold(0.0_f32, f32::max);
        // Floor of 1 only guards the all-zero catalog; a real maximum must
        // divide through so the best qualifying listing lands exactly at 1.0.
        let denominator = if max_raw > 0.0 { max_raw } else { 1.0 };

        for entry in &mut scored {
            entry.normalized_score = entry.raw_score / denominator;
            entry.match_percent = (entry.normalized_score * 100.0).round() as u8;
        }

        scored.retain(|entry| entry.overlap > 0.0);

        // Stable sort: equal scores keep catalog order, so repeated calls
        // are deterministic.
        scored.sort_by(|a, b| {
            b.normalized_score
                .partial_cmp(&a.normalized_score)
                .unwrap_or(Ordering::Equal)
        });

        let mut seen: HashSet<(String, String)> = HashSet::new();
        scored.retain(|entry| {
            seen.insert((entry.listing.title.clone(), entry.listing.location.clone()))
        });

        scored.truncate(top_n);

        debug!(
            candidate_skills = candidate_skills.len(),
            results = scored.len(),
            top_n,
            provider = self.provider.name(),
            "Ranking complete"
        );

        scored
    }
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("listings", &self.catalog.len())
            .field("provider", &self.provider.name())
            .finish()
    }
}
