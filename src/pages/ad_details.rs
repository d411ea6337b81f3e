//! Advertisement detail page with image carousel and poster info.

#[cfg(test)]
#[path = "ad_details_test.rs"]
mod ad_details_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::{Advertisement, User};

/// Step forward through the carousel, wrapping past the last image.
fn next_image_index(current: usize, count: usize) -> usize {
    if count == 0 || current + 1 >= count {
        0
    } else {
        current + 1
    }
}

/// Step backward through the carousel, wrapping before the first image.
fn prev_image_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else if current == 0 {
        count - 1
    } else {
        current - 1
    }
}

/// Public detail route for one advertisement. Fetches the advertisement,
/// then its poster's public record.
#[component]
pub fn AdDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let ad = RwSignal::new(None::<Advertisement>);
    let poster = RwSignal::new(None::<User>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let image_index = RwSignal::new(0_usize);

    // Refetch whenever the route id changes.
    Effect::new(move || {
        let id = params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());
        ad.set(None);
        poster.set(None);
        image_index.set(0);
        error.set(None);
        let Some(id) = id else {
            loading.set(false);
            error.set(Some("Advertisement not found.".to_owned()));
            return;
        };
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_advertisement(id).await {
                Ok(fetched) => {
                    let user_id = fetched.user_id;
                    ad.set(Some(fetched));
                    match crate::net::api::fetch_user(user_id, None).await {
                        Ok(user) => poster.set(Some(user)),
                        // Poster info is secondary; the listing still renders.
                        Err(err) => log::warn!("poster fetch failed: {err}"),
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    let image_count = move || ad.get().map_or(0, |a| a.images.len());
    let on_prev = move |_| image_index.update(|i| *i = prev_image_index(*i, image_count()));
    let on_next = move |_| image_index.update(|i| *i = next_image_index(*i, image_count()));

    view! {
        <div class="page ad-details-page">
            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get() && ad.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || loading.get()>
                            <p class="page__loading">"Loading advertisement details..."</p>
                        </Show>
                    }
                }
            >
                <div class="ad-details">
                    <h2 class="ad-details__title">{move || ad.get().map(|a| a.title).unwrap_or_default()}</h2>
                    <p class="ad-details__description">
                        {move || ad.get().map(|a| a.description).unwrap_or_default()}
                    </p>
                    <Show when={move || image_count() > 0}>
                        <div class="ad-details__carousel">
                            <img
                                class="ad-details__image"
                                src=move || {
                                    ad.get()
                                        .and_then(|a| a.images.get(image_index.get()).map(|i| i.image_url.clone()))
                                        .unwrap_or_default()
                                }
                                alt=move || format!("Image {} of this advertisement", image_index.get() + 1)
                            />
                            <Show when={move || image_count() > 1}>
                                <button class="btn ad-details__carousel-prev" on:click=on_prev>
                                    "◄"
                                </button>
                                <button class="btn ad-details__carousel-next" on:click=on_next>
                                    "►"
                                </button>
                                <div class="ad-details__dots">
                                    {move || {
                                        (0..image_count())
                                            .map(|dot| {
                                                view! {
                                                    <span
                                                        class="ad-details__dot"
                                                        class:ad-details__dot--active=move || dot == image_index.get()
                                                    ></span>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </div>
                            </Show>
                        </div>
                    </Show>
                    <Show when=move || ad.get().is_some_and(|a| a.created_at.is_some())>
                        <p class="ad-details__created">
                            {move || {
                                let created = ad.get().and_then(|a| a.created_at).unwrap_or_default();
                                format!("Created on: {created}")
                            }}
                        </p>
                    </Show>
                    <Show when=move || poster.get().is_some()>
                        <div class="ad-details__poster">
                            <h3>"Posted by"</h3>
                            {move || {
                                poster
                                    .get()
                                    .map(|user| {
                                        let profile_href = format!("/user/{}", user.id);
                                        let phone_line = user.phone.map(|phone| format!("Phone number: {phone}"));
                                        let location_line = user.location.map(|location| format!("Location: {location}"));
                                        view! {
                                            <p>{format!("Name: {}", user.name)}</p>
                                            <p>{format!("Email: {}", user.email)}</p>
                                            {phone_line.map(|line| view! { <p>{line}</p> })}
                                            {location_line.map(|line| view! { <p>{line}</p> })}
                                            <a class="btn btn--primary" href=profile_href>
                                                "View user"
                                            </a>
                                        }
                                    })
                            }}
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
