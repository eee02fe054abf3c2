//! Listing feed: the home page and the filtered search results page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both routes render `ListingFeed`, which issues exactly one listings request
//! on mount. The search route narrows the fetched collection client-side with
//! the `query` URL parameter; no search request is sent to the API.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch replaces the grid with the error message. There is no retry;
//! navigating back to the page remounts it and fetches again.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::banner_slider::BannerSlider;
use crate::components::lightbox::Lightbox;
use crate::components::listing_card::ListingCard;
use crate::config::ClientConfig;
use crate::net::types::Listing;
use crate::state::feed::{FeedState, FeedStatus, lightbox_slides};
use crate::util::rotation::visible_slides;
use crate::util::viewport::{is_narrow_banner, use_viewport_width};

pub const FEED_BANNER_INTERVAL_MS: u32 = 6000;

const FEED_BANNERS: [&str; 6] = [
    "https://m.media-amazon.com/images/S/al-eu-726f4d26-7fdb/e9512ab9-474c-49b4-9b56-1d004a582fd5._CR0%2C0%2C3000%2C600_SX1500_.jpg",
    "https://www.agoda.com/press/wp-content/uploads/2025/02/screenshot.png",
    "https://www.abhibus.com/blog/wp-content/uploads/2023/05/abhiubs-logo-696x423.jpg",
    "https://businessmodelnavigator.com/img/case-firms-logos/42.png",
    "https://palmonas.com/cdn/shop/files/web_link_creative_2.jpg?v=1738936545",
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQ_m9RRzlBWRBBpX39bUde7w0vwFN2IUpW68A&s",
];

/// Every listing (`/`).
#[component]
pub fn HomePage() -> impl IntoView {
    view! { <ListingFeed query=Signal::derive(|| None::<String>)/> }
}

/// Listings matching `?query=` (`/search`).
#[component]
pub fn SearchPage() -> impl IntoView {
    let params = use_query_map();
    let query = Signal::derive(move || params.with(|p| p.get("query")).filter(|q| !q.trim().is_empty()));
    view! { <ListingFeed query/> }
}

#[component]
fn ListingFeed(#[prop(into)] query: Signal<Option<String>>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let feed = RwSignal::new(FeedState::default());

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_listings(&config).await;
            if let Err(e) = &result {
                log::warn!("listing fetch failed: {e}");
            }
            feed.update(|f| f.apply_fetch(result));
        });
    }

    let width = use_viewport_width();
    let banners = Signal::derive(move || {
        visible_slides(&FEED_BANNERS, is_narrow_banner(width.get()))
            .iter()
            .map(|src| (*src).to_owned())
            .collect::<Vec<_>>()
    });

    let visible = Memo::new(move |_| {
        let query = query.get();
        feed.with(|f| f.visible(query.as_deref()))
    });
    let slides = Signal::derive(move || visible.with(|v| lightbox_slides(v, &config)));
    let lightbox_index = Signal::derive(move || feed.with(|f| f.lightbox.index));

    let on_toggle = Callback::new(move |id: String| feed.update(|f| f.toggle_expanded(&id)));
    let on_open_image = Callback::new(move |id: String| {
        let listings = visible.get_untracked();
        feed.update(|f| {
            f.open_lightbox_for(&listings, &id);
        });
    });
    let on_prev = Callback::new(move |()| {
        let len = slides.with_untracked(Vec::len);
        feed.update(|f| f.lightbox.prev(len));
    });
    let on_next = Callback::new(move |()| {
        let len = slides.with_untracked(Vec::len);
        feed.update(|f| f.lightbox.next(len));
    });
    let on_close = Callback::new(move |()| feed.update(|f| f.lightbox.close()));

    let heading = move || match query.get() {
        Some(q) => format!("Search results for \"{q}\""),
        None => "All Scratch Cards".to_owned(),
    };

    let grid = move || {
        if visible.with(Vec::is_empty) {
            return view! { <p class="feed__empty">"No cards available."</p> }.into_any();
        }
        view! {
            <div class="feed__grid">
                <For
                    each=move || visible.get()
                    key=|listing: &Listing| listing.id.clone()
                    children=move |listing: Listing| {
                        let id = listing.id.clone();
                        let expanded = Signal::derive(move || feed.with(|f| f.is_expanded(&id)));
                        view! { <ListingCard listing expanded on_toggle on_open_image/> }
                    }
                />
            </div>
        }
        .into_any()
    };

    view! {
        <main class="feed" tabindex="-1">
            <BannerSlider images=banners interval_ms=FEED_BANNER_INTERVAL_MS/>
            <h2 class="feed__heading">{heading}</h2>
            {move || match feed.with(|f| f.status.clone()) {
                FeedStatus::Loading => view! { <div class="feed__loading">"Loading scratch cards..."</div> }.into_any(),
                FeedStatus::Failed(msg) => view! { <div class="feed__error" role="alert">{msg}</div> }.into_any(),
                FeedStatus::Loaded => grid(),
            }}
            <Show when=move || feed.with(|f| f.lightbox.open)>
                <Lightbox slides index=lightbox_index on_prev on_next on_close/>
            </Show>
        </main>
    }
}
