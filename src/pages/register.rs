//! Registration page with optional profile image upload.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::api::RegisterForm;

/// Validate the registration form before submission.
///
/// Username, name, email, and password are required; the confirmation
/// must match the password. Contact fields are optional.
fn validate_register_input(form: &RegisterForm, confirm_password: &str) -> Result<(), &'static str> {
    if form.username.trim().is_empty()
        || form.name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.password.is_empty()
    {
        return Err("Username, name, email, and password are required.");
    }
    if form.password != confirm_password {
        return Err("Passwords do not match.");
    }
    Ok(())
}

/// Registration form. Wrapped in the guest-only guard by the router; a
/// successful submission lands on the login screen.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let profession = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let image_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegisterForm {
            username: username.get().trim().to_owned(),
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            phone: phone.get().trim().to_owned(),
            profession: profession.get().trim().to_owned(),
            location: location.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
        };
        if let Err(message) = validate_register_input(&form, &confirm_password.get()) {
            error.set(Some(message.to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let profile_image = image_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.item(0));
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&form, profile_image).await {
                    Ok(()) => navigate("/login", NavigateOptions::default()),
                    Err(err) => {
                        error.set(Some(format!("Registration failed: {err}")));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    };

    let text_field = move |label: &'static str, kind: &'static str, signal: RwSignal<String>| {
        view! {
            <label class="form-card__label">
                {label}
                <input
                    class="form-card__input"
                    type=kind
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="page register-page">
            <form class="form-card" on:submit=on_submit>
                <h2 class="form-card__title">"Register"</h2>
                {text_field("Username", "text", username)}
                {text_field("Name", "text", name)}
                {text_field("Email", "email", email)}
                {text_field("Password", "password", password)}
                {text_field("Confirm password", "password", confirm_password)}
                {text_field("Phone", "tel", phone)}
                {text_field("Profession", "text", profession)}
                {text_field("Location", "text", location)}
                <label class="form-card__label">
                    "Description"
                    <textarea
                        class="form-card__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form-card__label">
                    "Profile image"
                    <input class="form-card__input" type="file" accept="image/*" node_ref=image_ref/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="form-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </div>
    }
}
