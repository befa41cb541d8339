//! Root application component with routing and context providers.
//!
//! ROUTES
//! ======
//! `/login` and `/register` are public. Everything else nests under the
//! route guard and navigation shell; `/` replace-redirects to `/dashboard`.
//! Unmatched paths render the not-found page.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::use_navigate;
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::{auth_error_banner::AuthErrorBanner, nav_shell::NavShell, route_guard::RouteGuard};
use crate::pages::{
    dashboard::DashboardPage, food_diary::FoodDiaryPage, login::LoginPage, not_found::NotFoundPage,
    profile::ProfilePage, register::RegisterPage,
};
use crate::state::auth::AuthProvider;

/// Every declared route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    Root,
    Dashboard,
    FoodDiary,
    Profile,
}

impl AppRoute {
    pub const ALL: [AppRoute; 6] = [
        Self::Login,
        Self::Register,
        Self::Root,
        Self::Dashboard,
        Self::FoodDiary,
        Self::Profile,
    ];

    /// Absolute URL path.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Root => "/",
            Self::Dashboard => "/dashboard",
            Self::FoodDiary => "/food-diary",
            Self::Profile => "/profile",
        }
    }

    /// Router segment (path without the leading slash).
    #[must_use]
    pub fn segment(self) -> &'static str {
        &self.path()[1..]
    }

    /// Whether the route sits behind the route guard.
    #[must_use]
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::Login | Self::Register)
    }

    /// Where the route sends the user instead of rendering, if anywhere.
    #[must_use]
    pub fn redirect(self) -> Option<AppRoute> {
        match self {
            Self::Root => Some(Self::Dashboard),
            _ => None,
        }
    }
}

/// Navigation that overwrites the current history entry, so back-navigation
/// skips the redirect.
#[must_use]
pub fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/fitlog.css"/>
        <Title text="FitLog"/>

        <Router>
            <AuthProvider>
                <AuthErrorBanner/>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                    <Route path=StaticSegment(AppRoute::Register.segment()) view=RegisterPage/>
                    <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                        <Route path=StaticSegment(AppRoute::Root.segment()) view=RootRedirect/>
                        <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage/>
                        <Route path=StaticSegment(AppRoute::FoodDiary.segment()) view=FoodDiaryPage/>
                        <Route path=StaticSegment(AppRoute::Profile.segment()) view=ProfilePage/>
                    </ParentRoute>
                </Routes>
            </AuthProvider>
        </Router>
    }
}

/// Guard + shell wrapping every protected page.
#[component]
fn ProtectedLayout() -> impl IntoView {
    view! {
        <RouteGuard>
            <NavShell/>
        </RouteGuard>
    }
}

/// `/` renders nothing and replaces itself with its redirect target.
#[component]
fn RootRedirect() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(target) = AppRoute::Root.redirect() {
            navigate(target.path(), replace_history());
        }
    });
}
