//! Dismissable banner for the last auth failure, shown on every route.

#[cfg(test)]
#[path = "auth_error_banner_test.rs"]
mod auth_error_banner_test;

use leptos::prelude::*;

use crate::state::auth::{AuthError, use_auth};

/// Banner text for `err`, with a next step when the user is left signed out.
#[must_use]
pub fn banner_text(err: &AuthError) -> String {
    match err {
        AuthError::SessionResolution(_) => format!("{err}. Sign in to continue."),
        AuthError::SignOut(_) => format!("{err}. You are still signed in."),
    }
}

#[component]
pub fn AuthErrorBanner() -> impl IntoView {
    let auth = use_auth();

    view! {
        {move || {
            auth.error()
                .map(|err| {
                    view! {
                        <div class="auth-error-banner" role="alert">
                            <span>{banner_text(&err)}</span>
                            <button class="btn" on:click=move |_| auth.dismiss_error()>
                                "Dismiss"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
