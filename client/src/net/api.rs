//! REST helpers for the host config endpoint and the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers decide whether a
//! failure degrades the view, expires the session, or is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use uuid::Uuid;

use super::types::{ClientConfig, FoodLog, SessionGrant, SessionUser, UserMetadata, WeightLog};

/// Host endpoint serving `ClientConfig`.
pub const CONFIG_ENDPOINT: &str = "/api/config";

/// Failure talking to the host or the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend responded with status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// The backend rejected the credentials (expired or revoked token).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401 | 403))
    }

    /// Transient failures worth another attempt.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_) | Self::Status(500..=599))
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(config: &ClientConfig, path: &str) -> String {
    format!("{}/auth/v1/{path}", config.backend_url)
}

#[cfg(any(test, feature = "hydrate"))]
fn rest_endpoint(config: &ClientConfig, table: &str, query: &str) -> String {
    format!("{}/rest/v1/{table}?{query}", config.backend_url)
}

#[cfg(any(test, feature = "hydrate"))]
fn user_metadata_query(user_id: Uuid) -> String {
    format!("id=eq.{user_id}&limit=1")
}

#[cfg(any(test, feature = "hydrate"))]
fn food_logs_query(user_id: Uuid, date: &str) -> String {
    format!("user_id=eq.{user_id}&date=eq.{date}&select=*,food_item:food_items(*)&order=created_at.asc")
}

#[cfg(any(test, feature = "hydrate"))]
fn weight_logs_query(user_id: Uuid) -> String {
    format!("user_id=eq.{user_id}&order=date.desc")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Sign-up returns a session only when the backend auto-confirms accounts;
/// otherwise the body is the pending user and no token is issued.
#[cfg(any(test, feature = "hydrate"))]
fn grant_from_signup(body: serde_json::Value) -> Result<Option<SessionGrant>, ApiError> {
    if body.get("access_token").is_none() {
        return Ok(None);
    }
    serde_json::from_value(body)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
fn with_credentials(
    builder: gloo_net::http::RequestBuilder,
    config: &ClientConfig,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    let builder = builder.header("apikey", &config.anon_key);
    match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Race `fut` against a `ms` millisecond timer.
///
/// # Errors
///
/// Returns `ApiError::Timeout` if the timer fires first, otherwise the
/// future's own result.
pub async fn with_timeout<T, F>(ms: u32, fut: F) -> Result<T, ApiError>
where
    F: std::future::Future<Output = Result<T, ApiError>>,
{
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let fut = std::pin::pin!(fut);
        let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(ms));
        match select(fut, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ApiError::Timeout(ms)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
        fut.await
    }
}

// =============================================================================
// HOST
// =============================================================================

/// Fetch backend coordinates from the host at `/api/config`.
///
/// # Errors
///
/// Returns an error if the host is unreachable or the body does not decode.
pub async fn fetch_client_config() -> Result<ClientConfig, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT).send().await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Look up the user behind `token` via `GET /auth/v1/user`.
///
/// Returns `Ok(None)` when the backend rejects the token, which means the
/// stored session has expired rather than that the check failed.
///
/// # Errors
///
/// Returns an error for transport failures and non-auth error statuses.
pub async fn fetch_session(config: &ClientConfig, token: &str) -> Result<Option<SessionUser>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&auth_endpoint(config, "user"));
        let resp = with_credentials(req, config, Some(token)).send().await?;
        match decode::<SessionUser>(resp).await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => Err(e),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Terminate the backend session via `POST /auth/v1/logout`.
///
/// A token the backend already considers invalid counts as signed out.
///
/// # Errors
///
/// Returns an error if the request fails or the backend responds with a
/// non-auth error status.
pub async fn sign_out(config: &ClientConfig, token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&auth_endpoint(config, "logout"));
        let resp = with_credentials(req, config, Some(token)).send().await?;
        if resp.ok() {
            return Ok(());
        }
        let err = ApiError::Status(resp.status());
        if err.is_unauthorized() { Ok(()) } else { Err(err) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Exchange email + password for a session via
/// `POST /auth/v1/token?grant_type=password`.
///
/// # Errors
///
/// Returns `ApiError::Status` for rejected credentials, or a transport /
/// decode error.
pub async fn sign_in_with_password(config: &ClientConfig, email: &str, password: &str) -> Result<SessionGrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let req = gloo_net::http::Request::post(&auth_endpoint(config, "token?grant_type=password"));
        let resp = with_credentials(req, config, None).json(&payload)?.send().await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/v1/signup`.
///
/// Returns `Ok(None)` when the account still needs email confirmation.
///
/// # Errors
///
/// Returns `ApiError::Status` if the backend refuses the sign-up, or a
/// transport / decode error.
pub async fn sign_up(config: &ClientConfig, email: &str, password: &str) -> Result<Option<SessionGrant>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let req = gloo_net::http::Request::post(&auth_endpoint(config, "signup"));
        let resp = with_credentials(req, config, None).json(&payload)?.send().await?;
        let body: serde_json::Value = decode(resp).await?;
        grant_from_signup(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// Fetch the signed-in user's metadata row, if one exists.
///
/// # Errors
///
/// Returns an error if the request fails or the row does not decode.
pub async fn fetch_user_metadata(config: &ClientConfig, token: &str, user_id: Uuid) -> Result<Option<UserMetadata>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = rest_endpoint(config, "user_metadata", &user_metadata_query(user_id));
        let req = gloo_net::http::Request::get(&url);
        let resp = with_credentials(req, config, Some(token)).send().await?;
        let rows: Vec<UserMetadata> = decode(resp).await?;
        Ok(rows.into_iter().next())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, user_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one day's diary entries with their food items embedded.
///
/// # Errors
///
/// Returns an error if the request fails or any row does not decode
/// (including an unknown `meal_type`).
pub async fn fetch_food_logs(config: &ClientConfig, token: &str, user_id: Uuid, date: &str) -> Result<Vec<FoodLog>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = rest_endpoint(config, "food_logs", &food_logs_query(user_id, date));
        let req = gloo_net::http::Request::get(&url);
        let resp = with_credentials(req, config, Some(token)).send().await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, user_id, date);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the user's weight history, newest first.
///
/// # Errors
///
/// Returns an error if the request fails or any row does not decode.
pub async fn fetch_weight_logs(config: &ClientConfig, token: &str, user_id: Uuid) -> Result<Vec<WeightLog>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = rest_endpoint(config, "weight_logs", &weight_logs_query(user_id));
        let req = gloo_net::http::Request::get(&url);
        let resp = with_credentials(req, config, Some(token)).send().await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, user_id);
        Err(ApiError::Unavailable)
    }
}
