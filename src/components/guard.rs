//! Route guards gating screens on authentication state.
//!
//! DESIGN
//! ======
//! The render-or-redirect choice is a pure function of [`AuthState`] so it
//! can be tested without a rendering environment; the components only
//! apply the decision, navigating with history replacement so the guarded
//! screen cannot be reached through the back button.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Outcome of evaluating a guard against the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the wrapped screen.
    Render,
    /// Redirect to the given path instead.
    Redirect(&'static str),
}

/// Authenticated-only screens redirect to the login screen when logged out.
pub fn require_auth_decision(state: &AuthState) -> GuardDecision {
    if state.is_logged_in() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect("/login")
    }
}

/// Guest-only screens (login, register) redirect home when logged in.
pub fn guest_only_decision(state: &AuthState) -> GuardDecision {
    if state.is_logged_in() {
        GuardDecision::Redirect("/")
    } else {
        GuardDecision::Render
    }
}

fn replace_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Wrapper for screens that require a logged-in user.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let GuardDecision::Redirect(target) = require_auth_decision(&auth.get()) {
            navigate(target, replace_options());
        }
    });

    view! {
        <Show when=move || require_auth_decision(&auth.get()) == GuardDecision::Render>
            {children()}
        </Show>
    }
}

/// Wrapper for screens that only make sense for guests.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let GuardDecision::Redirect(target) = guest_only_decision(&auth.get()) {
            navigate(target, replace_options());
        }
    });

    view! {
        <Show when=move || guest_only_decision(&auth.get()) == GuardDecision::Render>
            {children()}
        </Show>
    }
}
