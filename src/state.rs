//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no per-user data; it only holds configuration handed out to
//! the browser.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state. Clone is required by Axum.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}
