//! Login page exchanging credentials for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;

/// Validate the login form. Both fields are required after trimming.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Login form. Wrapped in the guest-only guard by the router; on success
/// the auth context is updated and the user lands on the home feed.
#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&username_value, &password_value).await {
                    Ok(resp) => {
                        crate::util::auth::login(auth, resp.token, resp.user.id);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(Some(format!("Login failed: {err}")));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value);
        }
    };

    view! {
        <div class="page login-page">
            <form class="form-card" on:submit=on_submit>
                <h2 class="form-card__title">"Login"</h2>
                <label class="form-card__label">
                    "Username"
                    <input
                        class="form-card__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-card__label">
                    "Password"
                    <input
                        class="form-card__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Login"
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="form-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </div>
    }
}
