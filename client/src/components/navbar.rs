//! Top navigation shell: brand, page links, search and the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every signed-in route. Below `NAV_MOBILE_MAX_WIDTH` the page
//! links move into a toggleable overlay that closes whenever a link is
//! followed or a search is submitted.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::ui::{NavState, search_path};
use crate::util::viewport::{is_mobile_nav, use_viewport_width};

const NAV_LINKS: [(&str, &str); 3] = [("/postcard", "Post"), ("/contact", "About us"), ("/mylist", "My List")];

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let nav = RwSignal::new(NavState::default());
    let query = RwSignal::new(String::new());
    let width = use_viewport_width();
    let mobile = move || is_mobile_nav(width.get());
    let navigate = use_navigate();

    let submit_search = move || {
        if let Some(path) = search_path(&query.get_untracked()) {
            navigate(&path, NavigateOptions::default());
            nav.update(NavState::close);
        }
    };
    let submit_search_click = submit_search.clone();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out(&config).await;
                auth.update(|a| a.user = None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &config;
    };

    let links = move |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|(href, label)| {
                view! {
                    <a href=*href class=class on:click=move |_| nav.update(NavState::close)>
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar" role="navigation" aria-label="Main Navigation">
            <div class="navbar__row">
                <div class="navbar__left">
                    <a href="/" class="navbar__brand" aria-label="Home">
                        <img src="/logo.avif" alt="Brand Logo" class="navbar__logo" loading="lazy"/>
                        <span class="navbar__brand-name">"Anvaya"</span>
                    </a>
                    <Show
                        when=mobile
                        fallback=move || view! { <div class="navbar__links">{links("navbar__link")}</div> }
                    >
                        <button
                            class="navbar__toggle"
                            aria-label="Toggle menu"
                            aria-expanded=move || nav.get().show_links.to_string()
                            on:click=move |_| nav.update(NavState::toggle)
                        >
                            "☰"
                        </button>
                    </Show>
                </div>
                <div class="navbar__right">
                    <form
                        class="navbar__search"
                        role="search"
                        aria-label="Search scratch cards"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            submit_search();
                        }
                    >
                        <input
                            type="search"
                            name="search"
                            autocomplete="off"
                            placeholder="Search..."
                            aria-label="Search scratch cards"
                            class="navbar__search-input"
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                    </form>
                    <button
                        type="button"
                        class="navbar__search-button"
                        aria-label="Submit search"
                        on:click=move |_| submit_search_click()
                    >
                        "Search"
                    </button>
                    <span class="navbar__username">{move || auth.get().display_name()}</span>
                    <button type="button" class="navbar__sign-out" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </div>
            </div>
            <Show when=mobile>
                <div class="navbar__links-mobile" class:navbar__links-mobile--show=move || nav.get().show_links>
                    {links("navbar__link")}
                </div>
            </Show>
        </nav>
    }
}
