//! Browser `localStorage` persistence for the session access token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token outlives page reloads so the auth provider can resume a
//! session at startup. SSR paths no-op and always report "no token".

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "fitlog_session";

/// Load the stored access token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token` for later sessions.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Drop the stored token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
