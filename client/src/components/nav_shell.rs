//! Persistent top navigation with page links, sign-out, and the page outlet.
//!
//! Sign-out failures surface through `auth_error_banner`, which sits above
//! the routes.

#[cfg(test)]
#[path = "nav_shell_test.rs"]
mod nav_shell_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::app::AppRoute;
use crate::state::auth::use_auth;

pub const BRAND: &str = "FitLog";

/// A top-level destination shown in the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub route: AppRoute,
    pub label: &'static str,
    pub icon: NavIcon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Calendar,
    User,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { route: AppRoute::Dashboard, label: "Dashboard", icon: NavIcon::Home },
    NavLink { route: AppRoute::FoodDiary, label: "Food Diary", icon: NavIcon::Calendar },
    NavLink { route: AppRoute::Profile, label: "Profile", icon: NavIcon::User },
];

/// Exact string equality: `/dashboard/` and `/dashboard/week` are not
/// `/dashboard`.
#[must_use]
pub fn is_active(link_path: &str, current_path: &str) -> bool {
    link_path == current_path
}

#[must_use]
pub fn link_class(active: bool) -> &'static str {
    if active { "nav-shell__link nav-shell__link--active" } else { "nav-shell__link" }
}

/// Top navigation bar plus the matched page below it.
#[component]
pub fn NavShell() -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;

    let on_sign_out = move |_| auth.sign_out();

    view! {
        <div class="app-shell">
            <nav class="nav-shell">
                <div class="nav-shell__inner">
                    <div class="nav-shell__left">
                        <span class="nav-shell__brand">{BRAND}</span>
                        <div class="nav-shell__links">
                            {NAV_LINKS
                                .into_iter()
                                .map(|link| {
                                    let path = link.route.path();
                                    let active = move || pathname.with(|current| is_active(path, current));
                                    view! {
                                        <a
                                            href=path
                                            class=move || link_class(active())
                                            aria-current=move || active().then_some("page")
                                        >
                                            <NavIconSvg icon=link.icon/>
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                    <div class="nav-shell__right">
                        <button
                            class="btn btn--primary nav-shell__sign-out"
                            on:click=on_sign_out
                            disabled=move || auth.is_signing_out()
                        >
                            <svg class="nav-shell__icon" viewBox="0 0 24 24" aria-hidden="true">
                                <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"></path>
                                <polyline points="16 17 21 12 16 7"></polyline>
                                <line x1="21" y1="12" x2="9" y2="12"></line>
                            </svg>
                            {move || if auth.is_signing_out() { "Signing Out..." } else { "Sign Out" }}
                        </button>
                    </div>
                </div>
            </nav>

            <main class="app-shell__main">
                <Outlet/>
            </main>
        </div>
    }
}

#[component]
fn NavIconSvg(icon: NavIcon) -> impl IntoView {
    match icon {
        NavIcon::Home => view! {
            <svg class="nav-shell__icon" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"></path>
                <polyline points="9 22 9 12 15 12 15 22"></polyline>
            </svg>
        }
        .into_any(),
        NavIcon::Calendar => view! {
            <svg class="nav-shell__icon" viewBox="0 0 24 24" aria-hidden="true">
                <rect x="3" y="4" width="18" height="18" rx="2" ry="2"></rect>
                <line x1="16" y1="2" x2="16" y2="6"></line>
                <line x1="8" y1="2" x2="8" y2="6"></line>
                <line x1="3" y1="10" x2="21" y2="10"></line>
            </svg>
        }
        .into_any(),
        NavIcon::User => view! {
            <svg class="nav-shell__icon" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"></path>
                <circle cx="12" cy="7" r="4"></circle>
            </svg>
        }
        .into_any(),
    }
}
