//! Search results page driven by the `?query=` parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::ad_card::AdCard;
use crate::net::types::Advertisement;

/// Public search route. Re-fetches whenever the query parameter changes;
/// an empty query renders the empty state without calling the server.
#[component]
pub fn SearchPage() -> impl IntoView {
    let query_map = use_query_map();
    let ads = RwSignal::new(Vec::<Advertisement>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let query = move || query_map.get().get("query").unwrap_or_default();

    Effect::new(move || {
        let current = query();
        ads.set(Vec::new());
        error.set(None);
        if current.trim().is_empty() {
            loading.set(false);
            return;
        }
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::search_advertisements(current.trim()).await {
                Ok(items) => ads.set(items),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    view! {
        <div class="page search-page">
            <h1 class="search-page__title">
                {move || format!("Search Results for \"{}\"", query())}
            </h1>
            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__loading">"Loading..."</p> }
            >
                <Show
                    when=move || !ads.get().is_empty()
                    fallback=|| view! { <p class="search-page__empty">"No advertisements found"</p> }
                >
                    <div class="search-page__grid">
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
