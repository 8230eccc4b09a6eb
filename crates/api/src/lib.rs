//! HTTP gateway for the SkillSync mock API.
//!
//! Serves every [`mock_api::MockApi`] call as a JSON endpoint so a browser UI
//! can be pointed at it during development. The gateway holds one
//! process-wide session: whoever logs in last is the current user for every
//! client.
//!
//! # Example
//!
//! ```rust,no_run
//! use mock_api::{ApiConfig, MockApi};
//! use skillsync_api::{app, state::AppState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = MockApi::from_config(&ApiConfig::instant()).await;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8790").await?;
//! axum::serve(listener, app(AppState::new(api))).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete application with middleware and state.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
