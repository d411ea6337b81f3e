//! Public user profile page with that user's advertisements.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::ad_card::AdCard;
use crate::net::types::{Advertisement, User};

/// Public route showing a user's profile and their listings.
#[component]
pub fn UserProfilePage() -> impl IntoView {
    let params = use_params_map();
    let user = RwSignal::new(None::<User>);
    let ads = RwSignal::new(Vec::<Advertisement>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let id = params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());
        user.set(None);
        ads.set(Vec::new());
        error.set(None);
        let Some(id) = id else {
            loading.set(false);
            error.set(Some("User not found.".to_owned()));
            return;
        };
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_user(id, None).await {
                Ok(fetched) => {
                    user.set(Some(fetched));
                    match crate::net::api::fetch_user_advertisements(id, None).await {
                        Ok(items) => ads.set(items),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    let optional_line = |label: &'static str, value: Option<String>| {
        value.map(|value| view! { <p class="user-profile__line">{format!("{label}: {value}")}</p> })
    };

    view! {
        <div class="page user-profile-page">
            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get() && user.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || loading.get()>
                            <p class="page__loading">"Loading user information..."</p>
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
                                                alt=format!("{}'s profile", user.name)
                                            />
                                        }
                                            .into_any(),
                                        None => view! { <div class="user-profile__avatar--empty">"No Image"</div> }
                                            .into_any(),
                                    }}
                                    <h2 class="user-profile__name">{user.name.clone()}</h2>
                                    <p class="user-profile__line">{format!("Username: {}", user.username)}</p>
                                    <p class="user-profile__line">{format!("Email: {}", user.email)}</p>
                                    {optional_line("Phone number", user.phone.clone())}
                                    {optional_line("Profession", user.profession.clone())}
                                    {optional_line("Location", user.location.clone())}
                                    {optional_line("Description", user.description.clone())}
                                </div>
                            }
                        })
                }}
                <h3 class="user-profile-page__ads-title">"Advertisements"</h3>
                <Show
                    when=move || !ads.get().is_empty()
                    fallback=|| view! { <p class="user-profile-page__empty">"No advertisements."</p> }
                >
                    <div class="user-profile-page__grid">
                        {move || {
                            ads.get()
                                .into_iter()
                                .map(|ad| view! { <AdCard ad=ad/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
