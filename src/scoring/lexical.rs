//! Lexical matching: skill overlap and categorical boosts.

use crate::catalog::ListingRecord;
use crate::constants::{LOCATION_BOOST, SECTOR_BOOST};
use crate::skills::SkillSet;

use super::types::CandidateProfile;

/// Per-listing lexical signals.
#[derive(Debug, Clone)]
pub struct LexicalSignals {
    pub overlap: f32,
    pub sector_boost: f32,
    pub location_boost: f32,
    pub matched_skills: SkillSet,
}

/// Computes skill overlap and boosts for one listing.
///
/// The overlap denominator is the listing's skill count, not the
/// candidate's: a listing requiring many skills is harder to fully
/// satisfy than one requiring few. A listing with no required skills has
/// overlap 0 (nothing to match), and an empty candidate skill set
/// intersects nothing.
pub fn lexical_signals(
    profile: &CandidateProfile,
    candidate_skills: &SkillSet,
    listing: &ListingRecord,
    listing_skills: &SkillSet,
) -> LexicalSignals {
    let matched_skills = candidate_skills.intersection(listing_skills);
    let overlap = matched_skills.len() as f32 / listing_skills.len().max(1) as f32;

    let sector_boost = if contains_needle(&listing.sector_text(), &profile.sector) {
        SECTOR_BOOST
    } else {
        0.0
    };

    let location_boost = if contains_needle(&listing.location.to_lowercase(), &profile.location) {
        LOCATION_BOOST
    } else {
        0.0
    };

    LexicalSignals {
        overlap,
        sector_boost,
        location_boost,
        matched_skills,
    }
}

/// Case-insensitive substring check; an empty needle never matches.
fn contains_needle(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    !needle.is_empty() && haystack.contains(&needle)
}
