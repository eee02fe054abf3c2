//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the host binary for every route. `App` provides the
//! client config, auth state and session storage as context and declares the
//! routes. Every page route sits under `AppFrame`, which walks the launch
//! sequence: splash screen (once per session), auth gate, navigation shell.
//!
//! DESIGN
//! ======
//! The router is always mounted, even during SSR, so the host can collect
//! the route list from it. Gating happens inside the parent route instead,
//! and unknown paths are a wildcard child of that route so the 404 page sits
//! behind the same splash, auth gate and navbar.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::{auth_panel::AuthPanelView, navbar::Navbar, splash::Splash};
use crate::config::ClientConfig;
use crate::pages::{
    about::AboutPage,
    feed::{HomePage, SearchPage},
    not_found::NotFoundPage,
    post_listing::PostListingPage,
    shortlist::ShortlistPage,
};
use crate::state::auth::{AuthGate, AuthState};
use crate::state::ui::should_show_splash;
use crate::util::storage::BrowserStorage;

/// Whether the splash screen is still covering the app.
#[derive(Clone, Copy)]
struct SplashVisible(RwSignal<bool>);

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
/// Provides shared contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::default());
    let session = BrowserStorage::session();
    let splash = RwSignal::new(true);

    provide_context(config.clone());
    provide_context(auth);
    provide_context(session);
    provide_context(SplashVisible(splash));

    // The server cannot read the session flag, so it always renders the
    // splash; the browser drops it right away if it was already shown.
    Effect::new(move || {
        if !should_show_splash(&session) {
            splash.set(false);
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::ui::SPLASH_DURATION_MS).await;
            crate::state::ui::mark_splash_shown(&session);
            splash.set(false);
        });
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user(&config).await;
        if user.is_none() {
            log::debug!("no signed-in user");
        }
        auth.set(AuthState { user, loading: false });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <Stylesheet id="leptos" href="/pkg/anvaya.css"/>
        <Title text="Anvaya"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <ParentRoute path=StaticSegment("") view=AppFrame>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("postcard") view=PostListingPage/>
                    <Route path=StaticSegment("contact") view=AboutPage/>
                    <Route path=StaticSegment("mylist") view=ShortlistPage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route path=WildcardSegment("any") view=NotFoundPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Splash, then auth gate, then the navigation shell around the active page.
#[component]
fn AppFrame() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let SplashVisible(splash) = expect_context::<SplashVisible>();

    view! {
        <Show when=move || !splash.get() fallback=|| view! { <Splash/> }>
            {move || match auth.with(AuthState::gate) {
                AuthGate::Loading => view! { <p class="app__loading">"Loading..."</p> }.into_any(),
                AuthGate::SignedOut => view! { <AuthPanelView/> }.into_any(),
                AuthGate::SignedIn => view! {
                    <Navbar/>
                    <Outlet/>
                }
                .into_any(),
            }}
        </Show>
    }
}
