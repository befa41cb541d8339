//! Profile page: account identity and stored body metrics.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use super::{load_error_message, load_for_user};
use crate::net::api;
use crate::net::types::UserMetadata;
use crate::state::auth::use_auth;
use crate::util::format::{NOT_SET, calorie_goal_text, centimeters_text, date_part, kilograms_text};

/// Label/value rows shown for a metadata record.
#[must_use]
pub fn profile_rows(meta: Option<&UserMetadata>) -> Vec<(&'static str, String)> {
    vec![
        ("Height", centimeters_text(meta.and_then(|m| m.height_cm))),
        ("Weight", kilograms_text(meta.and_then(|m| m.weight_kg))),
        ("Target weight", kilograms_text(meta.and_then(|m| m.target_weight_kg))),
        ("Daily calorie goal", calorie_goal_text(meta.and_then(|m| m.daily_calorie_goal))),
        (
            "Member since",
            meta.map_or_else(|| NOT_SET.to_owned(), |m| date_part(&m.created_at).to_owned()),
        ),
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();

    let metadata = LocalResource::new(move || {
        let credentials = auth.credentials();
        load_for_user(auth, credentials, |c| async move {
            api::fetch_user_metadata(&c.config, &c.token, c.user.id).await
        })
    });

    let email = move || {
        auth.with_session(|s| s.user().and_then(|u| u.email.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <h1>"Profile"</h1>
                <p class="profile-page__email">{email}</p>
            </header>

            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    metadata
                        .get()
                        .map(|result| match result {
                            Ok(meta) => {
                                view! {
                                    <dl class="profile-page__fields">
                                        {profile_rows(meta.as_ref())
                                            .into_iter()
                                            .map(|(label, value)| {
                                                view! {
                                                    <dt>{label}</dt>
                                                    <dd>{value}</dd>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </dl>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="page-error">{load_error_message("profile", &e)}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
