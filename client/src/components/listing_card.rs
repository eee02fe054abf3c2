//! One scratch-card listing in the feed grid.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::Listing;
use crate::state::feed::{DescriptionView, description_view, image_loading_hint};
use crate::util::format::{format_expiry_date, mailto_href, price_label};

/// Card with cover, title, expandable description and contact details.
///
/// Clicking the description area calls `on_toggle` with the listing id;
/// clicking an expanded description image calls `on_open_image` instead.
#[component]
pub fn ListingCard(
    listing: Listing,
    #[prop(into)] expanded: Signal<bool>,
    on_toggle: Callback<String>,
    on_open_image: Callback<String>,
) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let id = listing.id.clone();
    let aria_label = format!("Scratch card: {}", listing.display_title());

    let description = {
        let listing = listing.clone();
        let id = id.clone();
        move || match description_view(&listing, expanded.get(), &config) {
            DescriptionView::Summary(text) => view! {
                <p class="listing-card__description listing-card__description--collapsed">{text}</p>
            }
            .into_any(),
            DescriptionView::FullText(text) => view! { <p class="listing-card__description">{text}</p> }.into_any(),
            DescriptionView::Placeholder => view! {
                <p class="listing-card__description listing-card__description--empty">
                    "No description available."
                </p>
            }
            .into_any(),
            DescriptionView::Image { src, alt } => {
                let id = id.clone();
                let loaded = RwSignal::new(false);
                view! {
                    {move || {
                        image_loading_hint(loaded.get())
                            .map(|text| view! { <p class="listing-card__image-loading">{text}</p> })
                    }}
                    <img
                        src=src
                        alt=alt
                        class="listing-card__description-image"
                        style:display=move || if loaded.get() { "" } else { "none" }
                        on:load=move |_| loaded.set(true)
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            on_open_image.run(id.clone());
                        }
                    />
                }
                .into_any()
            }
        }
    };

    let cover = listing.image_url.clone().map(|src| {
        view! { <img src=src alt=listing.title.clone() class="listing-card__cover" loading="lazy"/> }
    });
    let price = listing.price.as_deref().map(|p| view! { <p class="listing-card__price">{price_label(p)}</p> });
    let poster = listing.poster_email.clone().map(|email| {
        view! {
            <p class="listing-card__poster">
                "Posted by: "
                <a href=mailto_href(&email)>{email.clone()}</a>
            </p>
        }
    });
    let expiry = listing
        .expiry_date
        .as_deref()
        .map(|d| view! { <p class="listing-card__expiry">{format!("Expires on: {}", format_expiry_date(d))}</p> });

    view! {
        <article class="listing-card" tabindex="0" aria-label=aria_label>
            {cover}
            <h3 class="listing-card__title">{listing.title.clone()}</h3>
            <div
                class="listing-card__description-wrapper"
                role="button"
                tabindex="0"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| on_toggle.run(id.clone())
            >
                {description}
            </div>
            {price}
            {poster}
            {expiry}
        </article>
    }
}
