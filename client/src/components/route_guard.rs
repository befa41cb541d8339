//! Gate that renders protected content only for an authenticated session.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::{AppRoute, replace_history};
use crate::state::auth::{SessionState, use_auth};

/// What the guard does for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: render nothing protected, do not redirect.
    Hold,
    Render,
    Redirect(&'static str),
}

#[must_use]
pub fn guard_decision(session: &SessionState) -> GuardDecision {
    match session {
        SessionState::Unknown => GuardDecision::Hold,
        SessionState::Authenticated(_) => GuardDecision::Render,
        SessionState::Unauthenticated => GuardDecision::Redirect(AppRoute::Login.path()),
    }
}

/// Renders `children` while authenticated, a placeholder while the session
/// resolves, and replace-redirects to `/login` otherwise.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| auth.with_session(guard_decision));

    Effect::new(move || {
        if let GuardDecision::Redirect(to) = decision.get() {
            navigate(to, replace_history());
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                (decision.get() == GuardDecision::Hold)
                    .then(|| {
                        view! {
                            <div class="route-guard__pending" aria-busy="true">
                                <p>"Checking your session..."</p>
                            </div>
                        }
                    })
            }
        >
            {children()}
        </Show>
    }
}
