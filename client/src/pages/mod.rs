//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages load their records through
//! `load_for_user`, which also expires the session when the backend
//! rejects the token.

pub mod dashboard;
pub mod food_diary;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;

use crate::net::api::ApiError;
use crate::state::auth::{AuthContext, Credentials};

/// Run `fetch` with the signed-in user's credentials.
pub(crate) async fn load_for_user<T, F, Fut>(
    auth: AuthContext,
    credentials: Option<Credentials>,
    fetch: F,
) -> Result<T, ApiError>
where
    F: FnOnce(Credentials) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let Some(credentials) = credentials else {
        return Err(ApiError::Unavailable);
    };
    let result = fetch(credentials).await;
    auth.observe(&result);
    result
}

pub(crate) fn load_error_message(what: &str, err: &ApiError) -> String {
    format!("Could not load {what}: {err}")
}
