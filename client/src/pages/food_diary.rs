//! Food diary page: one day's entries listed under their meal slots.

#[cfg(test)]
#[path = "food_diary_test.rs"]
mod food_diary_test;

use leptos::prelude::*;

use super::{load_error_message, load_for_user};
use crate::net::api;
use crate::net::types::{FoodLog, MealType};
use crate::state::auth::use_auth;
use crate::util::calendar::{is_calendar_date, today};
use crate::util::format::servings_text;

/// Entries filed under `meal`, in backend order.
#[must_use]
pub fn entries_for_slot(logs: &[FoodLog], meal: MealType) -> Vec<FoodLog> {
    logs.iter().filter(|log| log.meal_type == meal).cloned().collect()
}

/// One-line description of an entry.
#[must_use]
pub fn entry_label(log: &FoodLog) -> String {
    let name = log.food_item.as_ref().map_or("Unknown food", |item| item.name.as_str());
    format!("{name} \u{b7} {}", servings_text(log.quantity))
}

#[component]
pub fn FoodDiaryPage() -> impl IntoView {
    let auth = use_auth();
    let date = RwSignal::new(today().unwrap_or_default());

    let logs = LocalResource::new(move || {
        let credentials = auth.credentials();
        let day = date.get();
        load_for_user(auth, credentials, move |c| async move {
            if !is_calendar_date(&day) {
                return Ok(Vec::new());
            }
            api::fetch_food_logs(&c.config, &c.token, c.user.id, &day).await
        })
    });

    view! {
        <div class="food-diary-page">
            <header class="food-diary-page__header">
                <h1>"Food Diary"</h1>
                <input
                    class="food-diary-page__date"
                    type="date"
                    prop:value=move || date.get()
                    on:change=move |ev| date.set(event_target_value(&ev))
                />
            </header>

            <Suspense fallback=move || view! { <p>"Loading diary..."</p> }>
                {move || {
                    logs.get()
                        .map(|result| match result {
                            Ok(entries) => {
                                MealType::ALL
                                    .into_iter()
                                    .map(|meal| {
                                        view! { <MealSection meal entries=entries_for_slot(&entries, meal)/> }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="page-error">{load_error_message("diary", &e)}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn MealSection(meal: MealType, entries: Vec<FoodLog>) -> impl IntoView {
    let body = if entries.is_empty() {
        view! { <p class="meal-section__empty">"Nothing logged."</p> }.into_any()
    } else {
        view! {
            <ul class="meal-section__entries">
                {entries
                    .iter()
                    .map(|log| view! { <li class="meal-section__entry">{entry_label(log)}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <section class="meal-section" data-meal=meal.as_str()>
            <h2>{meal.label()}</h2>
            {body}
        </section>
    }
}
