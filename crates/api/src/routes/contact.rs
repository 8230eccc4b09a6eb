//! Public contact form.

use axum::extract::State;
use axum::Json;
use mock_api::{ContactRequest, ContactResponse};

use crate::state::AppState;

pub async fn send(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Json<ContactResponse> {
    Json(state.api.contact().send(&request).await)
}
