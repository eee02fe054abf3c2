//! Listing feed state: fetch outcome, expanded card, lightbox.
//!
//! DESIGN
//! ======
//! A card's description is resolved into exactly one `DescriptionView`, so the
//! collapsed summary and the expanded content can never render together. At
//! most one card is expanded at a time. The lightbox only ever indexes the
//! image-bearing subset of the listings currently on screen.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::config::ClientConfig;
use crate::net::api::{ApiError, feed_error_message};
use crate::net::types::{Listing, ListingDescription};

/// Collapsed text descriptions are cut to this many characters.
pub const SUMMARY_MAX_CHARS: usize = 100;
pub const SUMMARY_IMAGE_HINT: &str = "Click to view description image";
pub const SUMMARY_PLACEHOLDER: &str = "No description available";
pub const EXPANDED_PLACEHOLDER: &str = "No description available.";
pub const IMAGE_LOADING_TEXT: &str = "Loading image...";

/// What a card's description area shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DescriptionView {
    /// Collapsed one-line summary.
    Summary(String),
    /// Expanded description image.
    Image { src: String, alt: String },
    /// Expanded full text.
    FullText(String),
    /// Expanded, nothing to show.
    Placeholder,
}

/// Resolve the description area of `listing`.
pub fn description_view(listing: &Listing, expanded: bool, config: &ClientConfig) -> DescriptionView {
    match (listing.description(), expanded) {
        (ListingDescription::Image(_), false) => DescriptionView::Summary(SUMMARY_IMAGE_HINT.to_owned()),
        (ListingDescription::Text(text), false) => DescriptionView::Summary(summarize(text)),
        (ListingDescription::Missing, false) => DescriptionView::Summary(SUMMARY_PLACEHOLDER.to_owned()),
        (ListingDescription::Image(path), true) => DescriptionView::Image {
            src: config.asset_url(path),
            alt: format!("{} description", listing.display_title()),
        },
        (ListingDescription::Text(text), true) => DescriptionView::FullText(text.to_owned()),
        (ListingDescription::Missing, true) => DescriptionView::Placeholder,
    }
}

/// Text shown in place of an expanded description image until it loads.
pub fn image_loading_hint(loaded: bool) -> Option<&'static str> {
    (!loaded).then_some(IMAGE_LOADING_TEXT)
}

/// First `SUMMARY_MAX_CHARS` characters, with `...` when cut.
pub fn summarize(text: &str) -> String {
    match text.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Case-insensitive match of `query` against title, description and poster.
/// A blank query matches everything.
pub fn matches_query(listing: &Listing, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [Some(listing.title.as_str()), listing.description.as_deref(), listing.poster_email.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// A slide in the description-image lightbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxSlide {
    pub listing_id: String,
    pub src: String,
    pub alt: String,
}

/// Slides for every listing with a description image, in feed order.
pub fn lightbox_slides(listings: &[Listing], config: &ClientConfig) -> Vec<LightboxSlide> {
    listings
        .iter()
        .filter_map(|listing| {
            let path = listing.description_image_url.as_deref()?;
            Some(LightboxSlide {
                listing_id: listing.id.clone(),
                src: config.asset_url(path),
                alt: if listing.title.trim().is_empty() {
                    "Description Image".to_owned()
                } else {
                    listing.title.clone()
                },
            })
        })
        .collect()
}

/// Position of listing `id` within the image-bearing subset.
pub fn lightbox_index_for(listings: &[Listing], id: &str) -> Option<usize> {
    listings
        .iter()
        .filter(|listing| listing.has_description_image())
        .position(|listing| listing.id == id)
}

/// Lightbox visibility and current slide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    pub open: bool,
    pub index: usize,
}

impl LightboxState {
    pub fn open_at(&mut self, index: usize) {
        self.open = true;
        self.index = index;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn prev(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }
}

/// Outcome of the one-shot feed fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedStatus {
    Loading,
    Failed(String),
    Loaded,
}

/// Everything the feed page renders from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedState {
    pub status: FeedStatus,
    pub listings: Vec<Listing>,
    pub expanded_id: Option<String>,
    pub lightbox: LightboxState,
}

impl Default for FeedState {
    fn default() -> Self {
        Self { status: FeedStatus::Loading, listings: Vec::new(), expanded_id: None, lightbox: LightboxState::default() }
    }
}

impl FeedState {
    /// Record the fetch result. A failure suppresses the collection.
    pub fn apply_fetch(&mut self, result: Result<Vec<Listing>, ApiError>) {
        match result {
            Ok(listings) => {
                self.listings = listings;
                self.status = FeedStatus::Loaded;
            }
            Err(err) => {
                self.listings.clear();
                self.status = FeedStatus::Failed(feed_error_message(&err));
            }
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_id.as_deref() == Some(id)
    }

    /// Expand `id`, or collapse it if it is already expanded.
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded_id = None;
        } else {
            self.expanded_id = Some(id.to_owned());
        }
    }

    /// Listings on screen for `query` (all of them when `None`).
    pub fn visible(&self, query: Option<&str>) -> Vec<Listing> {
        match query {
            Some(q) => self.listings.iter().filter(|l| matches_query(l, q)).cloned().collect(),
            None => self.listings.clone(),
        }
    }

    /// Open the lightbox on listing `id` among `visible`. Returns `false`
    /// when that listing has no description image.
    pub fn open_lightbox_for(&mut self, visible: &[Listing], id: &str) -> bool {
        match lightbox_index_for(visible, id) {
            Some(index) => {
                self.lightbox.open_at(index);
                true
            }
            None => false,
        }
    }
}
