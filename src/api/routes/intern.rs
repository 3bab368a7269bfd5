//! Intern Routes
//!
//! - GET /api/intern - Profile of the current intern

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::portal::InternProfile;

/// GET /api/intern
///
/// There is no caller identity; every request gets the same profile.
pub async fn get_intern(State(state): State<Arc<AppState>>) -> ApiResult<Json<InternProfile>> {
    let profile = state.repository.profile().await?;

    tracing::debug!(referral_code = %profile.referral_code, "Serving intern profile");

    Ok(Json(profile))
}
