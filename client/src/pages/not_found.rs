//! Fallback page for paths no route declares.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;

    Effect::new(move || {
        log::warn!("unmatched route: {}", pathname.get());
    });

    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"There is nothing at " <code>{move || pathname.get()}</code> "."</p>
            <a href=AppRoute::Dashboard.path() class="btn btn--primary">
                "Go to dashboard"
            </a>
        </div>
    }
}
