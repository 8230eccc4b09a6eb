//! Project catalog, enrollment and task board.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use skillsync_core::{Project, Task, TaskPatch};

use crate::error::{found, Result};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuery {
    pub project_id: Option<String>,
}

pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.api.projects().list().await)
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>> {
    found(state.api.projects().get(&id).await).map(Json)
}

/// Returns every project id the current user is enrolled in.
pub async fn enroll(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>> {
    Ok(Json(state.api.projects().enroll(&id).await?))
}

pub async fn enrollments(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.api.projects().enrolled().await?))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskQuery>,
) -> Json<Vec<Task>> {
    Json(state.api.tasks().list(query.project_id.as_deref()).await)
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>> {
    found(state.api.tasks().update(&id, &patch).await).map(Json)
}
