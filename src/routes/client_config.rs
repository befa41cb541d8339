//! `GET /api/config`: backend coordinates for the browser.

#[cfg(test)]
#[path = "client_config_test.rs"]
mod client_config_test;

use axum::Json;
use axum::extract::State;
use client::net::types::ClientConfig;

use crate::state::AppState;

pub async fn get_client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    tracing::debug!(backend_url = %state.config.backend_url, "serving client config");
    Json(state.config.client_config())
}
