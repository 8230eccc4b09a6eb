//! Sign-in, sign-up and session status.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use mock_api::{AuthOutcome, AuthStatus};
use serde::Deserialize;

use crate::state::AppState;

/// Login or signup form. Missing fields arrive as empty strings so the
/// facade reports them.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

pub async fn status(State(state): State<AppState>) -> Json<AuthStatus> {
    Json(state.api.auth().status().await)
}

pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<Credentials>,
) -> (StatusCode, Json<AuthOutcome>) {
    outcome(state.api.auth().login(&form.email, &form.password).await)
}

pub async fn signup(
    State(state): State<AppState>,
    Json(form): Json<Credentials>,
) -> (StatusCode, Json<AuthOutcome>) {
    let name = form.name.as_deref();
    outcome(state.api.auth().signup(&form.email, &form.password, name).await)
}

pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.api.auth().logout().await;
    StatusCode::NO_CONTENT
}

fn outcome(outcome: AuthOutcome) -> (StatusCode, Json<AuthOutcome>) {
    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(outcome))
}
