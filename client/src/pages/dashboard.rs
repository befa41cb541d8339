//! Dashboard page: daily calorie goal and latest weigh-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route (`/` redirects here). It only
//! displays stored values; it does not total or derive nutrition figures.

use leptos::prelude::*;

use super::{load_error_message, load_for_user};
use crate::net::api;
use crate::net::types::{UserMetadata, WeightLog};
use crate::state::auth::use_auth;
use crate::util::format::{calorie_goal_text, kilograms_text};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    let metadata = LocalResource::new(move || {
        let credentials = auth.credentials();
        load_for_user(auth, credentials, |c| async move {
            api::fetch_user_metadata(&c.config, &c.token, c.user.id).await
        })
    });

    let weights = LocalResource::new(move || {
        let credentials = auth.credentials();
        load_for_user(auth, credentials, |c| async move {
            api::fetch_weight_logs(&c.config, &c.token, c.user.id).await
        })
    });

    let greeting = move || {
        auth.with_session(|s| s.user().and_then(|u| u.email.clone()))
            .map_or_else(|| "Welcome back".to_owned(), |email| format!("Welcome back, {email}"))
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <p class="dashboard-page__greeting">{greeting}</p>
            </header>

            <div class="dashboard-page__cards">
                <Suspense fallback=move || view! { <p>"Loading goals..."</p> }>
                    {move || {
                        metadata
                            .get()
                            .map(|result| match result {
                                Ok(meta) => view! { <GoalsCard meta/> }.into_any(),
                                Err(e) => {
                                    view! { <p class="page-error">{load_error_message("goals", &e)}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
                <Suspense fallback=move || view! { <p>"Loading weigh-ins..."</p> }>
                    {move || {
                        weights
                            .get()
                            .map(|result| match result {
                                Ok(logs) => view! { <LatestWeightCard latest=logs.into_iter().next()/> }.into_any(),
                                Err(e) => {
                                    view! { <p class="page-error">{load_error_message("weigh-ins", &e)}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}

#[component]
fn GoalsCard(meta: Option<UserMetadata>) -> impl IntoView {
    let goal = calorie_goal_text(meta.as_ref().and_then(|m| m.daily_calorie_goal));
    let target = kilograms_text(meta.as_ref().and_then(|m| m.target_weight_kg));

    view! {
        <section class="dashboard-card">
            <h2>"Daily Goal"</h2>
            <p class="dashboard-card__value">{goal}</p>
            <p class="dashboard-card__detail">"Target weight: " {target}</p>
        </section>
    }
}

#[component]
fn LatestWeightCard(latest: Option<WeightLog>) -> impl IntoView {
    let body = match latest {
        Some(log) => view! {
            <p class="dashboard-card__value">{kilograms_text(Some(log.weight_kg))}</p>
            <p class="dashboard-card__detail">"Recorded " {log.date}</p>
        }
        .into_any(),
        None => view! { <p class="dashboard-card__detail">"No weigh-ins yet."</p> }.into_any(),
    };

    view! {
        <section class="dashboard-card">
            <h2>"Current Weight"</h2>
            {body}
        </section>
    }
}
