//! Own-profile page for the logged-in user.

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::AuthState;

/// Authenticated route showing the logged-in user's own record.
///
/// The route guard keeps guests out; a 401 from the server expires the
/// session and the guard then redirects.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let user = RwSignal::new(None::<User>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let state = auth.get_untracked();
        if let (Some(user_id), Some(token)) = (state.user_id(), state.token()) {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_user(user_id, Some(&token)).await {
                    Ok(fetched) => user.set(Some(fetched)),
                    Err(crate::net::api::ApiError::Unauthorized) => crate::util::auth::expire_session(auth),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        } else {
            loading.set(false);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        loading.set(false);
    }

    let line = |label: &'static str, value: String| {
        view! {
            <p class="user-profile__line">
                <strong>{format!("{label}: ")}</strong>
                {value}
            </p>
        }
    };

    view! {
        <div class="page profile-page">
            <h2 class="profile-page__title">"Profile"</h2>
            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get() && user.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || loading.get()>
                            <p class="page__loading">"Loading..."</p>
                        </Show>
                    }
                }
            >
                {move || {
                    user.get()
                        .map(|user| {
                            view! {
                                <div class="user-profile">
                                    {match user.profile_image.clone() {
                                        Some(url) => view! {
                                            <img
                                                class="user-profile__avatar"
                                                src=url
                                                alt=format!("{}'s profile", user.username)
                                            />
                                        }
                                            .into_any(),
                                        None => view! { <div class="user-profile__avatar--empty">"No Image"</div> }
                                            .into_any(),
                                    }}
                                    {line("Username", user.username.clone())}
                                    {line("Name", user.name.clone())}
                                    {line("Email", user.email.clone())}
                                    {line("Phone", user.phone.clone().unwrap_or_default())}
                                    {line("Profession", user.profession.clone().unwrap_or_default())}
                                    {line("Location", user.location.clone().unwrap_or_default())}
                                    {line("Description", user.description.clone().unwrap_or_default())}
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
