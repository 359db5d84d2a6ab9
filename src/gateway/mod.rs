//! HTTP gateway (axum) for the matching engine.
//!
//! This module is primarily used by the `internmatch` server binary. The
//! pipeline itself is pure and infallible per call; the gateway's only
//! error surface is JSON extraction at the boundary.

pub mod handler;
pub mod state;

#[cfg(test)]
mod handler_tests;

pub use handler::{RecommendRequest, RecommendationDto, recommend_handler};
pub use state::GatewayState;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router_with_state(state: GatewayState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/recommend", post(recommend_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub listings: usize,
    pub similarity_provider: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<GatewayState>) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ready",
        listings: state.recommender.catalog().len(),
        similarity_provider: state.recommender.provider_name(),
    })
}
