//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::{AppRoute, replace_history};
use crate::net::api::ApiError;
use crate::state::auth::{SessionState, use_auth};

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns the message to show when a field is missing or malformed.
pub fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub fn sign_in_failed_message(err: &ApiError) -> String {
    match err {
        ApiError::Status(400 | 401) => "Invalid email or password.".to_owned(),
        other => format!("Sign in failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Signed-in visitors (existing session or fresh sign-in) go to the dashboard.
    Effect::new(move || {
        if auth.is_authenticated() {
            navigate(AppRoute::Dashboard.path(), replace_history());
        }
    });

    // Startup may have failed to reach the host; fetch the config again.
    Effect::new(move || {
        if auth.with_session(SessionState::is_resolved) && auth.config().is_none() {
            auth.ensure_config();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let Some(config) = auth.config() else {
            auth.ensure_config();
            info.set("Still connecting. Try again in a moment.".to_owned());
            return;
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in_with_password(&config, &email_value, &password_value).await {
                Ok(grant) => auth.signed_in(grant),
                Err(e) => {
                    let _ = info.try_set(sign_in_failed_message(&e));
                    let _ = busy.try_set(false);
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"FitLog"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <a href=AppRoute::Register.path()>"Create one"</a>
                </p>
            </div>
        </div>
    }
}
