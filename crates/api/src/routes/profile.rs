//! Student profile and onboarding.

use axum::extract::State;
use axum::Json;
use mock_api::OnboardingResult;
use skillsync_core::{OnboardingData, ProfilePatch, StudentProfile};

use crate::error::{found, Result};
use crate::state::AppState;

pub async fn get_profile(State(state): State<AppState>) -> Result<Json<StudentProfile>> {
    found(state.api.profile().get().await?).map(Json)
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<StudentProfile>> {
    Ok(Json(state.api.profile().update(&patch).await?))
}

pub async fn complete_onboarding(
    State(state): State<AppState>,
    Json(data): Json<OnboardingData>,
) -> Result<Json<OnboardingResult>> {
    Ok(Json(state.api.onboarding().complete(&data).await?))
}
