use crate::catalog::ListingRecord;
use crate::skills::SkillSet;

/// The searcher's stated profile. Every field defaults to empty; absence
/// degrades match quality instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateProfile {
    pub education: String,
    pub skills: String,
    pub sector: String,
    pub location: String,
}

impl CandidateProfile {
    /// Parses the raw skills field into its canonical set.
    pub fn skill_set(&self) -> SkillSet {
        SkillSet::parse(&self.skills)
    }

    /// The semantic query text: non-empty profile fields joined by spaces.
    pub fn query_text(&self) -> String {
        [
            self.education.as_str(),
            self.skills.as_str(),
            self.sector.as_str(),
            self.location.as_str(),
        ]
        .iter()
        .filter(|field| !field.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[derive(Debug, Clone)]
/// One listing annotated with every scoring signal, for explainability.
///
/// Borrows its catalog record: the ranker never owns or mutates catalog
/// state, and all `ScoredListing` values are discarded once the response
/// is produced.
pub struct ScoredListing<'a> {
    /// The catalog record this score belongs to.
    pub listing: &'a ListingRecord,
    /// Skill overlap ratio in [0, 1] (listing-side denominator).
    pub overlap: f32,
    /// 0.1 if the candidate's sector interest matched, else 0.
    pub sector_boost: f32,
    /// 0.1 if the candidate's location matched, else 0.
    pub location_boost: f32,
    /// Raw semantic similarity reported by the active provider.
    pub semantic_similarity: f32,
    /// Combined pre-normalization score; 0 whenever `overlap` is 0.
    pub raw_score: f32,
    /// Raw score rescaled so the best listing in a qualifying set is 1.0.
    pub normalized_score: f32,
    /// `normalized_score` as a display percentage.
    pub match_percent: u8,
    /// Skills shared between candidate and listing.
    pub matched_skills: SkillSet,
}
