//! Management screen for the logged-in user's own advertisements.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only screen with write access to listings: edit title/description,
//! add/remove images, delete. Every mutation updates the local list state
//! on success; there is no refetch-after-write.

#[cfg(test)]
#[path = "my_ads_test.rs"]
mod my_ads_test;

use leptos::prelude::*;

use crate::components::ad_card::AdCard;
#[cfg(feature = "hydrate")]
use crate::net::api::ApiError;
use crate::net::types::Advertisement;
use crate::state::auth::AuthState;

/// Replace an advertisement in the list by id. Ignores unknown ids.
fn replace_ad(list: &mut Vec<Advertisement>, updated: Advertisement) {
    if let Some(slot) = list.iter_mut().find(|ad| ad.id == updated.id) {
        *slot = updated;
    }
}

/// Remove an advertisement from the list by id.
fn remove_ad(list: &mut Vec<Advertisement>, id: i64) {
    list.retain(|ad| ad.id != id);
}

/// Remove one image from an advertisement in the list.
fn remove_ad_image(list: &mut Vec<Advertisement>, ad_id: i64, image_id: i64) {
    if let Some(ad) = list.iter_mut().find(|ad| ad.id == ad_id) {
        ad.images.retain(|image| image.id != image_id);
    }
}

/// Authenticated route listing the user's own advertisements with edit
/// and delete affordances.
#[component]
pub fn MyAdsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ads = RwSignal::new(Vec::<Advertisement>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<Advertisement>);
    let delete_id = RwSignal::new(None::<i64>);

    #[cfg(feature = "hydrate")]
    {
        let state = auth.get_untracked();
        if let (Some(user_id), Some(token)) = (state.user_id(), state.token()) {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_user_advertisements(user_id, Some(&token)).await {
                    Ok(items) => ads.set(items),
                    Err(ApiError::Unauthorized) => crate::util::auth::expire_session(auth),
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

    let on_edit_cancel = Callback::new(move |()| editing.set(None));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));
    let on_delete_request = Callback::new(move |id: i64| delete_id.set(Some(id)));

    view! {
        <div class="page my-ads-page">
            <h2 class="my-ads-page__title">"My Advertisements"</h2>
            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__loading">"Loading..."</p> }
            >
                <Show
                    when=move || !ads.get().is_empty()
                    fallback=|| view! { <p class="my-ads-page__empty">"You have no advertisements."</p> }
                >
                    <div class="my-ads-page__grid">
                        {move || {
                            ads.get()
                                .into_iter()
                                .map(|ad| {
                                    let ad_for_edit = ad.clone();
                                    view! {
                                        <div class="my-ads-page__item">
                                            <AdCard ad=ad on_delete=on_delete_request/>
                                            <button
                                                class="btn my-ads-page__edit"
                                                on:click=move |_| editing.set(Some(ad_for_edit.clone()))
                                            >
                                                "Edit"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
            <Show when=move || editing.get().is_some()>
                {move || {
                    editing
                        .get()
                        .map(|ad| view! { <EditAdDialog ad=ad ads=ads on_cancel=on_edit_cancel/> })
                }}
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <DeleteAdDialog delete_id=delete_id ads=ads on_cancel=on_delete_cancel/>
            </Show>
        </div>
    }
}

/// Modal dialog for editing a listing's title/description and managing
/// its images.
#[component]
fn EditAdDialog(ad: Advertisement, ads: RwSignal<Vec<Advertisement>>, on_cancel: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let title = RwSignal::new(ad.title.clone());
    let description = RwSignal::new(ad.description.clone());
    let images = RwSignal::new(ad.images.clone());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let images_ref = NodeRef::<leptos::html::Input>::new();
    let ad_id = ad.id;

    let on_save = move |_| {
        if busy.get() {
            return;
        }
        let title_value = title.get().trim().to_owned();
        let description_value = description.get().trim().to_owned();
        if title_value.is_empty() || description_value.is_empty() {
            error.set(Some("Enter both a title and a description.".to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(token) = auth.get_untracked().token() else {
                busy.set(false);
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::update_advertisement(&token, ad_id, &title_value, &description_value).await {
                    Ok(updated) => {
                        ads.update(|list| replace_ad(list, updated));
                        on_cancel.run(());
                    }
                    Err(ApiError::Unauthorized) => crate::util::auth::expire_session(auth),
                    Err(err) => {
                        error.set(Some(err.to_string()));
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

    let on_remove_image = move |image_id: i64| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let Some(token) = auth.get_untracked().token() else {
                busy.set(false);
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_advertisement_image(&token, ad_id, image_id).await {
                    Ok(()) => {
                        images.update(|list| list.retain(|image| image.id != image_id));
                        ads.update(|list| remove_ad_image(list, ad_id, image_id));
                    }
                    Err(ApiError::Unauthorized) => crate::util::auth::expire_session(auth),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = image_id;
            busy.set(false);
        }
    };

    let on_add_images = move |_| {
        if busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(files) = images_ref.get().and_then(|input| input.files()) else {
                return;
            };
            if files.length() == 0 {
                return;
            }
            let Some(token) = auth.get_untracked().token() else {
                return;
            };
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_advertisement_images(&token, ad_id, &files).await {
                    Ok(updated) => {
                        images.set(updated.images.clone());
                        ads.update(|list| replace_ad(list, updated));
                    }
                    Err(ApiError::Unauthorized) => crate::util::auth::expire_session(auth),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Advertisement"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__images">
                    {move || {
                        images
                            .get()
                            .into_iter()
                            .map(|image| {
                                let image_id = image.id;
                                view! {
                                    <span class="dialog__image">
                                        <img src=image.image_url alt="Advertisement image"/>
                                        <button
                                            class="dialog__image-remove"
                                            on:click=move |_| on_remove_image(image_id)
                                            title="Remove image"
                                        >
                                            "✕"
                                        </button>
                                    </span>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <label class="dialog__label">
                    "Add images"
                    <input class="dialog__input" type="file" accept="image/*" multiple node_ref=images_ref/>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn" on:click=on_add_images disabled=move || busy.get()>
                        "Upload"
                    </button>
                    <button class="btn btn--primary" on:click=on_save disabled=move || busy.get()>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog for deleting an advertisement.
#[component]
fn DeleteAdDialog(
    delete_id: RwSignal<Option<i64>>,
    ads: RwSignal<Vec<Advertisement>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_confirm = move |_| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(token) = auth.get_untracked().token() else {
                busy.set(false);
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_advertisement(&token, id).await {
                    Ok(()) => {
                        ads.update(|list| remove_ad(list, id));
                        on_cancel.run(());
                    }
                    Err(ApiError::Unauthorized) => crate::util::auth::expire_session(auth),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Advertisement"</h2>
                <p class="dialog__danger">"This will permanently delete this advertisement and its images."</p>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=on_confirm disabled=move || busy.get()>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
