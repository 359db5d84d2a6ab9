use std::sync::Arc;

use crate::scoring::Recommender;

/// Shared, read-only handler state.
///
/// The recommender (catalog + fitted similarity provider) is built once
/// in `main` and shared by reference; handlers allocate only per-request
/// scoring state.
#[derive(Clone)]
pub struct GatewayState {
    pub recommender: Arc<Recommender>,
    pub default_top_n: usize,
}

impl GatewayState {
    pub fn new(recommender: Arc<Recommender>, default_top_n: usize) -> Self {
        Self {
            recommender,
            default_top_n,
        }
    }
}
