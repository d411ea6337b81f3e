//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::{GuestOnly, RequireAuth};
use crate::components::nav_bar::NavBar;
use crate::pages::{
    ad_details::AdDetailsPage, home::HomePage, login::LoginPage, my_ads::MyAdsPage, new_ad::NewAdPage,
    profile::ProfilePage, register::RegisterPage, search::SearchPage, user_profile::UserProfilePage,
};
use crate::state::auth::AuthState;
use crate::util::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Seeds the auth context from the persisted session synchronously,
/// before the first render and without any network call, then sets up
/// client-side routing with the nav bar above every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState {
        session: Session::load(),
    });
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/marketplace.css"/>
        <Title text="Marketplace"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("login")
                        view=|| {
                            view! {
                                <GuestOnly>
                                    <LoginPage/>
                                </GuestOnly>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| {
                            view! {
                                <GuestOnly>
                                    <RegisterPage/>
                                </GuestOnly>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("advertisements"), StaticSegment("new"))
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <NewAdPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route path=(StaticSegment("advertisements"), ParamSegment("id")) view=AdDetailsPage/>
                    <Route path=(StaticSegment("user"), ParamSegment("id")) view=UserProfilePage/>
                    <Route
                        path=StaticSegment("profile")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <ProfilePage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("my-advertisements")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <MyAdsPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route path=StaticSegment("search") view=SearchPage/>
                </Routes>
            </main>
        </Router>
    }
}
