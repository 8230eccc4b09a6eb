//! Read-only catalogs: badges, leaderboard and skills.

use axum::extract::State;
use axum::Json;
use skillsync_core::{Badge, LeaderboardEntry, Skill};

use crate::state::AppState;

pub async fn badges(State(state): State<AppState>) -> Json<Vec<Badge>> {
    Json(state.api.badges().list().await)
}

pub async fn leaderboard(State(state): State<AppState>) -> Json<Vec<LeaderboardEntry>> {
    Json(state.api.leaderboard().get().await)
}

pub async fn skills(State(state): State<AppState>) -> Json<Vec<Skill>> {
    Json(state.api.skills().list().await)
}
