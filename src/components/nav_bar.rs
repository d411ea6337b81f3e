//! Top navigation bar with search and auth affordances.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route. Reads the auth context to decide between
//! guest links and the logged-in action set, and owns the search box that
//! redirects to the search screen.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::url::encode_query_component;

/// Build the search navigation target for a raw query box value.
///
/// Trims the input; an empty query yields `None` (no navigation, no
/// error shown).
pub fn search_target(raw: &str) -> Option<String> {
    let query = raw.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("/search?query={}", encode_query_component(query)))
}

/// Application navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_search = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if let Some(target) = search_target(&query.get()) {
                query.set(String::new());
                navigate(&target, NavigateOptions::default());
            }
        }
    };

    // Local teardown always runs; home navigation does not wait for the
    // server to acknowledge the logout.
    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                crate::util::auth::logout(auth).await;
            });
            navigate("/", NavigateOptions::default());
        }
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "Marketplace"
            </a>
            <form class="nav-bar__search" on:submit=on_search>
                <input
                    class="nav-bar__search-input"
                    type="text"
                    placeholder="Search advertisements..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn nav-bar__search-button" type="submit">
                    "Search"
                </button>
            </form>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || auth.get().is_logged_in()
                fallback=|| {
                    view! {
                        <a class="nav-bar__link" href="/login">
                            "Login"
                        </a>
                        <a class="nav-bar__link" href="/register">
                            "Register"
                        </a>
                    }
                }
            >
                <a class="nav-bar__link" href="/advertisements/new">
                    "Post Ad"
                </a>
                <a class="nav-bar__link" href="/my-advertisements">
                    "My Ads"
                </a>
                <a class="nav-bar__link" href="/profile">
                    "Profile"
                </a>
                <button class="btn nav-bar__logout" on:click=on_logout.clone() title="Logout">
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
