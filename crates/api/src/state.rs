//! Application state shared across handlers.

use mock_api::MockApi;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The mock API every route delegates to.
    pub api: MockApi,
}

impl AppState {
    pub fn new(api: MockApi) -> Self {
        Self { api }
    }
}
