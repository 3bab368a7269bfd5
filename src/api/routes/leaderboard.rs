//! Leaderboard Routes
//!
//! - GET /api/leaderboard - Participants ranked by donations

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::portal::LeaderboardEntry;

/// GET /api/leaderboard
///
/// Entries arrive sorted by donations (highest first) with ranks assigned.
pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let entries = state.repository.leaderboard().await?;

    tracing::debug!(count = entries.len(), "Serving leaderboard");

    Ok(Json(entries))
}
