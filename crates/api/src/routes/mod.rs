//! Route handlers for the gateway.

pub mod auth;
pub mod catalog;
pub mod contact;
pub mod health;
pub mod messages;
pub mod profile;
pub mod projects;
pub mod submissions;

use axum::routing::{get, patch, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        // Session
        .route("/auth/status", get(auth::status))
        .route("/auth/login", post(auth::login))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/logout", post(auth::logout))
        // Projects and tasks
        .route("/projects", get(projects::list_projects))
        .route("/projects/:id", get(projects::get_project))
        .route("/projects/:id/enroll", post(projects::enroll))
        .route("/enrollments", get(projects::enrollments))
        .route("/tasks", get(projects::list_tasks))
        .route("/tasks/:id", patch(projects::update_task))
        // Messaging
        .route("/messages", get(messages::list).post(messages::send))
        .route("/mentor/chat", post(messages::chat))
        // Student
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/onboarding", post(profile::complete_onboarding))
        .route("/submissions", post(submissions::create))
        .route("/submissions/:id", get(submissions::get))
        // Catalogs
        .route("/badges", get(catalog::badges))
        .route("/leaderboard", get(catalog::leaderboard))
        .route("/skills", get(catalog::skills))
        .route("/contact", post(contact::send))
}
