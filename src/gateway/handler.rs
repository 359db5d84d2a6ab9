use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::scoring::{CandidateProfile, ScoredListing};

use super::state::GatewayState;

/// Candidate profile as submitted over HTTP.
///
/// Field names follow the web intake form (`sectors`, plural); all
/// fields are optional and default to empty. Wrongly-typed fields (e.g. a
/// numeric `skills`) are rejected by the JSON extractor before this type
/// is ever constructed: the boundary fails fast, so scoring never sees
/// malformed input.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default, alias = "sector")]
    pub sectors: String,
    #[serde(default)]
    pub location: String,
    pub top_n: Option<usize>,
}

impl RecommendRequest {
    fn into_profile(self) -> (CandidateProfile, Option<usize>) {
        let profile = CandidateProfile {
            education: self.education,
            skills: self.skills,
            sector: self.sectors,
            location: self.location,
        };
        (profile, self.top_n)
    }
}

/// One recommendation in the response payload.
#[derive(Debug, Serialize)]
pub struct RecommendationDto {
    pub id: i64,
    pub title: String,
    pub sector: String,
    pub location: String,
    pub skills_required: String,
    pub description: String,
    /// Normalized score rounded to 2 decimals.
    pub score: f32,
    pub match_percent: u8,
    pub matched_skills: Vec<String>,
}

impl From<&ScoredListing<'_>> for RecommendationDto {
    fn from(scored: &ScoredListing<'_>) -> Self {
        Self {
            id: scored.listing.id,
            title: scored.listing.title.clone(),
            sector: scored.listing.sector.clone(),
            location: scored.listing.location.clone(),
            skills_required: scored.listing.skills_required.clone(),
            description: scored.listing.description.clone(),
            score: (scored.normalized_score * 100.0).round() / 100.0,
            match_percent: scored.match_percent,
            matched_skills: scored.matched_skills.to_vec(),
        }
    }
}

/// Ranks the catalog for the submitted profile.
///
/// "No matches" and "empty catalog" both yield `[]` with status 200;
/// callers treat an empty list and no matches identically.
#[instrument(skip(state, request))]
pub async fn recommend_handler(
    State(state): State<GatewayState>,
    Json(request): Json<RecommendRequest>,
) -> Json<Vec<RecommendationDto>> {
    let (profile, top_n) = request.into_profile();
    let top_n = top_n.unwrap_or(state.default_top_n);

    let results = state.recommender.recommend(&profile, top_n);

    info!(
        results = results.len(),
        top_n,
        "Recommendation request served"
    );

    Json(results.iter().map(RecommendationDto::from).collect())
}
