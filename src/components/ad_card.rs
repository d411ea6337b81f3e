//! Reusable card component for advertisement list screens.
//!
//! DESIGN
//! ======
//! Keeps listing presentation consistent between the home feed, search
//! results, user profiles, and the owner's management screen while
//! centralizing the detail-page link.

use leptos::prelude::*;

use crate::net::types::Advertisement;

/// A clickable card summarizing one advertisement.
#[component]
pub fn AdCard(ad: Advertisement, #[prop(optional)] on_delete: Option<Callback<i64>>) -> impl IntoView {
    let href = format!("/advertisements/{}", ad.id);
    let first_image = ad.images.first().map(|image| image.image_url.clone());
    let created_at = ad.created_at.clone();
    let ad_id = ad.id;

    let on_delete_click = Callback::new(move |()| {
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(ad_id);
        }
    });

    view! {
        <a class="ad-card" href=href>
            <span class="ad-card__title">{ad.title.clone()}</span>
            <span class="ad-card__description">{ad.description.clone()}</span>
            {match first_image {
                Some(url) => view! {
                    <img class="ad-card__image" src=url alt=format!("Image for {}", ad.title)/>
                }
                    .into_any(),
                None => view! { <span class="ad-card__no-image">"No images available"</span> }.into_any(),
            }}
            <Show when=move || created_at.is_some()>
                {
                    let created_at = ad.created_at.clone().unwrap_or_default();
                    view! { <span class="ad-card__created">{format!("Created on: {created_at}")}</span> }
                }
            </Show>
            <Show when=move || on_delete.is_some()>
                <button
                    class="ad-card__delete"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_delete_click.run(());
                    }
                    title="Delete advertisement"
                    aria-label="Delete advertisement"
                >
                    "✕"
                </button>
            </Show>
        </a>
    }
}
