//! Create-advertisement page with multipart image upload.

#[cfg(test)]
#[path = "new_ad_test.rs"]
mod new_ad_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiError;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;

/// Server message sent when a user hits the per-user listing cap.
const AD_LIMIT_SERVER_MESSAGE: &str = "You can't create more them 5 advertisements";

/// Validate the create form. Title and description are required.
fn validate_new_ad_input(title: &str, description: &str) -> Result<(String, String), &'static str> {
    let title = title.trim();
    let description = description.trim();
    if title.is_empty() || description.is_empty() {
        return Err("Enter both a title and a description.");
    }
    Ok((title.to_owned(), description.to_owned()))
}

/// Map a create failure to user-facing copy, special-casing the server's
/// listing cap.
fn create_ad_error_message(err: &ApiError) -> String {
    if let ApiError::Status(_, message) = err {
        if message == AD_LIMIT_SERVER_MESSAGE {
            return "You have reached the maximum number of advertisements allowed.".to_owned();
        }
    }
    format!("Failed to create advertisement: {err}")
}

/// Authenticated route for posting a new advertisement. On success the
/// user lands on their own public profile.
#[component]
pub fn NewAdPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let images_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (title_value, description_value) = match validate_new_ad_input(&title.get(), &description.get()) {
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
            let state = auth.get_untracked();
            let (Some(user_id), Some(token)) = (state.user_id(), state.token()) else {
                busy.set(false);
                return;
            };
            let Some(files) = images_ref.get().and_then(|input| input.files()) else {
                error.set(Some("Attach at least one image.".to_owned()));
                busy.set(false);
                return;
            };
            if files.length() == 0 {
                error.set(Some("Attach at least one image.".to_owned()));
                busy.set(false);
                return;
            }
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_advertisement(&token, user_id, &title_value, &description_value, &files)
                    .await
                {
                    Ok(()) => navigate(&format!("/user/{user_id}"), NavigateOptions::default()),
                    Err(ApiError::Unauthorized) => crate::util::auth::expire_session(auth),
                    Err(err) => {
                        error.set(Some(create_ad_error_message(&err)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title_value, description_value);
        }
    };

    view! {
        <div class="page new-ad-page">
            <form class="form-card" on:submit=on_submit>
                <h2 class="form-card__title">"Add New Advertisement"</h2>
                <label class="form-card__label">
                    "Title"
                    <input
                        class="form-card__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-card__label">
                    "Description"
                    <textarea
                        class="form-card__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form-card__label">
                    "Images"
                    <input class="form-card__input" type="file" accept="image/*" multiple node_ref=images_ref/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Add Advertisement"
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="form-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </div>
    }
}
