//! Home page listing the advertisement feed.

use leptos::prelude::*;

use crate::components::ad_card::AdCard;
use crate::net::types::Advertisement;

/// Public landing route — fetches every advertisement once on mount.
#[component]
pub fn HomePage() -> impl IntoView {
    let ads = RwSignal::new(Vec::<Advertisement>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_advertisements().await {
            Ok(items) => ads.set(items),
            Err(err) => error.set(Some(err.to_string())),
        }
        loading.set(false);
    });

    view! {
        <div class="page home-page">
            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__loading">"Loading advertisements..."</p> }
            >
                <Show
                    when=move || !ads.get().is_empty()
                    fallback=|| view! { <p class="home-page__empty">"No advertisements yet."</p> }
                >
                    <div class="home-page__grid">
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
