//! Registration page: create an account with email + password.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::{AppRoute, replace_history};
use crate::state::auth::{SessionState, use_auth};

/// Backend minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Trim the email and check the password rules.
///
/// # Errors
///
/// Returns the message to show for the first rule the input breaks.
pub fn validate_registration_input(
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter an email and a password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

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
        let (email_value, password_value) =
            match validate_registration_input(&email.get(), &password.get(), &confirm.get()) {
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
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_up(&config, &email_value, &password_value).await {
                Ok(Some(grant)) => auth.signed_in(grant),
                Ok(None) => {
                    let _ = info.try_set("Check your email to confirm your account, then sign in.".to_owned());
                    let _ = busy.try_set(false);
                }
                Err(e) => {
                    let _ = info.try_set(format!("Registration failed: {e}"));
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
                <p class="login-card__subtitle">"Create your account"</p>
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
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href=AppRoute::Login.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
