//! Work submissions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mock_api::SubmissionRequest;
use skillsync_core::Submission;

use crate::error::{found, Result};
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<SubmissionRequest>,
) -> Result<(StatusCode, Json<Submission>)> {
    let submission = state.api.submissions().create(request).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Submission>> {
    found(state.api.submissions().get(&id).await).map(Json)
}
