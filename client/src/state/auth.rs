//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! `AuthProvider` owns the only writers. Everything else receives a `Copy`
//! `AuthContext` handle whose public surface is read accessors plus the
//! `sign_out` / `signed_in` transitions, so every state change goes through
//! one `AuthState` method and readers observe one consistent value per
//! render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{ClientConfig, SessionGrant, SessionUser};
use crate::util::session_store;

/// Attempts made for the startup session check before giving up.
pub const SESSION_CHECK_ATTEMPTS: u32 = 2;

/// Fallback bound for the config fetch, before the host has told us its own.
pub const DEFAULT_SESSION_TIMEOUT_MS: u32 = 8000;

/// Whether a session is active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Startup check still in flight.
    #[default]
    Unknown,
    Authenticated(SessionUser),
    Unauthenticated,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Auth failures surfaced to the UI.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("could not check your session: {0}")]
    SessionResolution(ApiError),
    #[error("sign out failed: {0}")]
    SignOut(ApiError),
}

/// Session plus the last surfaced failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: SessionState,
    pub error: Option<AuthError>,
    pub signing_out: bool,
}

impl AuthState {
    /// Apply the startup session check. Only the first resolution counts;
    /// returns `false` if the session was already resolved.
    ///
    /// A failed check resolves to `Unauthenticated` with the error kept,
    /// so the guard never holds forever.
    pub fn resolve(&mut self, result: Result<Option<SessionUser>, ApiError>) -> bool {
        if self.session.is_resolved() {
            return false;
        }
        match result {
            Ok(Some(user)) => self.session = SessionState::Authenticated(user),
            Ok(None) => self.session = SessionState::Unauthenticated,
            Err(e) => {
                self.session = SessionState::Unauthenticated;
                self.error = Some(AuthError::SessionResolution(e));
            }
        }
        true
    }

    /// A sign-in completed elsewhere (login or register page).
    pub fn signed_in(&mut self, user: SessionUser) {
        self.session = SessionState::Authenticated(user);
        self.error = None;
        self.signing_out = false;
    }

    /// Mark a sign-out as in flight. Returns `false` if there is nothing to
    /// sign out of or a sign-out is already running.
    pub fn begin_sign_out(&mut self) -> bool {
        if !self.session.is_authenticated() || self.signing_out {
            return false;
        }
        self.signing_out = true;
        self.error = None;
        true
    }

    /// Apply the backend's answer to a sign-out. Failure leaves the session
    /// authenticated.
    pub fn finish_sign_out(&mut self, result: Result<(), ApiError>) {
        self.signing_out = false;
        match result {
            Ok(()) => self.session = SessionState::Unauthenticated,
            Err(e) => self.error = Some(AuthError::SignOut(e)),
        }
    }

    /// The backend rejected the token on a data call.
    pub fn expire(&mut self) {
        if self.session.is_authenticated() {
            self.session = SessionState::Unauthenticated;
            self.signing_out = false;
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

/// Decide whether a failed startup check should be attempted again.
#[must_use]
pub fn should_retry_session_check(attempt: u32, err: &ApiError) -> bool {
    attempt < SESSION_CHECK_ATTEMPTS && err.is_retryable()
}

/// Run `call` with each attempt bounded by `timeout_ms`, retrying transient
/// failures per `should_retry_session_check`.
///
/// # Errors
///
/// Returns the last attempt's error once retries are exhausted or the
/// failure is not transient.
pub async fn with_retries<T, F, Fut>(what: &str, timeout_ms: u32, mut call: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 1;
    loop {
        match api::with_timeout(timeout_ms, call()).await {
            Err(e) if should_retry_session_check(attempt, &e) => {
                log::debug!("{what} attempt {attempt} failed: {e}");
                attempt += 1;
            }
            other => return other,
        }
    }
}

/// Fetch the host config with the startup retry policy.
///
/// # Errors
///
/// Returns the last failure when every attempt fails.
pub async fn fetch_config_with_retry() -> Result<ClientConfig, ApiError> {
    with_retries("config fetch", DEFAULT_SESSION_TIMEOUT_MS, api::fetch_client_config).await
}

/// Backend access for an authenticated user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub config: ClientConfig,
    pub token: String,
    pub user: SessionUser,
}

/// Shared handle to the session, provided by `AuthProvider`.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    config: RwSignal<Option<ClientConfig>>,
    config_pending: RwSignal<bool>,
    token: RwSignal<Option<String>>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            config: RwSignal::new(None),
            config_pending: RwSignal::new(false),
            token: RwSignal::new(None),
        }
    }

    /// Current session (tracked).
    pub fn session(&self) -> SessionState {
        self.state.with(|s| s.session.clone())
    }

    /// Borrow the current session (tracked) without cloning.
    pub fn with_session<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.state.with(|s| f(&s.session))
    }

    pub fn is_authenticated(&self) -> bool {
        self.with_session(SessionState::is_authenticated)
    }

    pub fn is_signing_out(&self) -> bool {
        self.state.with(|s| s.signing_out)
    }

    /// Last surfaced auth failure (tracked).
    pub fn error(&self) -> Option<AuthError> {
        self.state.with(|s| s.error.clone())
    }

    /// Backend coordinates, once the host has provided them (tracked).
    pub fn config(&self) -> Option<ClientConfig> {
        self.config.get()
    }

    /// Config, token and user when authenticated (tracked).
    pub fn credentials(&self) -> Option<Credentials> {
        let user = self.with_session(|s| s.user().cloned())?;
        let config = self.config.get()?;
        let token = self.token.get()?;
        Some(Credentials { config, token, user })
    }

    pub fn dismiss_error(&self) {
        self.state.update(AuthState::dismiss_error);
    }

    /// Fetch the host config again if startup never obtained it. No-op
    /// while a fetch is running or once the config is known.
    pub fn ensure_config(&self) {
        if self.config.get_untracked().is_some() || self.config_pending.get_untracked() {
            return;
        }
        self.config_pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let ctx = *self;
            leptos::task::spawn_local(async move {
                match fetch_config_with_retry().await {
                    Ok(config) => {
                        let _ = ctx.config.try_set(Some(config));
                    }
                    Err(e) => log::warn!("config fetch failed: {e}"),
                }
                let _ = ctx.config_pending.try_set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            self.config_pending.set(false);
        }
    }

    /// Adopt a session issued by a sign-in or sign-up.
    pub fn signed_in(&self, grant: SessionGrant) {
        session_store::save_token(&grant.access_token);
        log::debug!("session started for {}", grant.user.id);
        self.token.set(Some(grant.access_token));
        self.state.update(|s| s.signed_in(grant.user));
    }

    /// Expire the session if `result` shows the backend rejected the token.
    pub fn observe<T>(&self, result: &Result<T, ApiError>) {
        if let Err(e) = result
            && e.is_unauthorized()
        {
            log::debug!("session expired: {e}");
            session_store::clear_token();
            let _ = self.token.try_set(None);
            let _ = self.state.try_update(AuthState::expire);
        }
    }

    /// Terminate the session. On success every later read reports
    /// `Unauthenticated`; on failure the session stays and `error()` is set.
    pub fn sign_out(&self) {
        if !self.state.try_update(AuthState::begin_sign_out).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let ctx = *self;
            leptos::task::spawn_local(async move {
                let config = ctx.config.try_get_untracked().flatten();
                let token = ctx.token.try_get_untracked().flatten();
                let result = match (config, token) {
                    (Some(config), Some(token)) => api::sign_out(&config, &token).await,
                    _ => Ok(()),
                };
                match &result {
                    Ok(()) => {
                        session_store::clear_token();
                        let _ = ctx.token.try_set(None);
                        log::debug!("signed out");
                    }
                    Err(e) => log::warn!("sign out failed: {e}"),
                }
                // Owner may be gone; the update is then dropped.
                let _ = ctx.state.try_update(|s| s.finish_sign_out(result));
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            self.state.update(|s| s.finish_sign_out(Err(ApiError::Unavailable)));
        }
    }
}

/// Fetch the host config, then check the stored token against the backend.
#[cfg(feature = "hydrate")]
async fn check_session(ctx: AuthContext) -> Result<Option<SessionUser>, ApiError> {
    let config = fetch_config_with_retry().await?;
    let _ = ctx.config.try_set(Some(config.clone()));

    let Some(token) = session_store::load_token() else {
        return Ok(None);
    };

    let (config_ref, token_ref) = (&config, token.as_str());
    let result = with_retries("session check", config.session_timeout_ms, move || {
        api::fetch_session(config_ref, token_ref)
    })
    .await;

    match &result {
        Ok(Some(_)) => {
            let _ = ctx.token.try_set(Some(token));
        }
        Ok(None) => session_store::clear_token(),
        Err(_) => {}
    }
    result
}

/// Provides `AuthContext` to its children and resolves the stored session.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = AuthContext::new();
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = check_session(ctx).await;
        if let Err(e) = &result {
            log::warn!("session check failed: {e}");
        }
        let _ = ctx.state.try_update(|s| s.resolve(result));
    });

    children()
}

/// Read the `AuthContext` provided by `AuthProvider`.
///
/// # Panics
///
/// Panics if called outside an `AuthProvider`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
