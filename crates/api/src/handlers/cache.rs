//! Response cache handlers

use axum::{extract::State, response::Json};
use glossary_adapters::CacheStats;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct CacheClearedResponse {
	pub cleared: usize,
	pub timestamp: i64,
}

/// GET /api/v1/cache - Cached directory responses
pub async fn get_cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
	Json(state.cache.stats())
}

/// DELETE /api/v1/cache - Drop every cached directory response
pub async fn clear_cache(State(state): State<AppState>) -> Json<CacheClearedResponse> {
	let cleared = state.cache.len();
	state.cache.clear();
	info!("Cleared {} cached directory responses", cleared);

	Json(CacheClearedResponse {
		cleared,
		timestamp: chrono::Utc::now().timestamp(),
	})
}
