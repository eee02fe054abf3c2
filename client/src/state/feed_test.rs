use super::*;

// =============================================================
// Helpers
// =============================================================

fn config() -> ClientConfig {
    ClientConfig { api_url: "https://api.example.com".to_owned(), ..ClientConfig::default() }
}

fn text_listing(id: &str, text: &str) -> Listing {
    Listing { id: id.to_owned(), title: format!("Card {id}"), description: Some(text.to_owned()), ..Listing::default() }
}

fn image_listing(id: &str) -> Listing {
    Listing {
        id: id.to_owned(),
        title: format!("Card {id}"),
        description_image_url: Some(format!("/uploads/{id}.png")),
        ..Listing::default()
    }
}

fn bare_listing(id: &str) -> Listing {
    Listing { id: id.to_owned(), title: format!("Card {id}"), ..Listing::default() }
}

// =============================================================
// description_view
// =============================================================

#[test]
fn missing_description_renders_placeholder_in_both_states() {
    let listing = bare_listing("a");
    assert_eq!(
        description_view(&listing, false, &config()),
        DescriptionView::Summary("No description available".to_owned())
    );
    assert_eq!(description_view(&listing, true, &config()), DescriptionView::Placeholder);
}

#[test]
fn collapsed_text_is_truncated_at_100_chars() {
    let long = "x".repeat(150);
    let view = description_view(&text_listing("a", &long), false, &config());
    assert_eq!(view, DescriptionView::Summary(format!("{}...", "x".repeat(100))));
}

#[test]
fn collapsed_text_at_limit_is_untouched() {
    let exact = "y".repeat(100);
    let view = description_view(&text_listing("a", &exact), false, &config());
    assert_eq!(view, DescriptionView::Summary(exact));
}

#[test]
fn summarize_counts_characters_not_bytes() {
    let text = "₹".repeat(101);
    assert_eq!(summarize(&text), format!("{}...", "₹".repeat(100)));
}

#[test]
fn expanded_text_shows_full_text_only() {
    let long = "z".repeat(150);
    let view = description_view(&text_listing("a", &long), true, &config());
    assert_eq!(view, DescriptionView::FullText(long));
}

#[test]
fn image_listing_collapsed_shows_hint_and_expanded_shows_image() {
    let listing = image_listing("b");
    assert_eq!(
        description_view(&listing, false, &config()),
        DescriptionView::Summary("Click to view description image".to_owned())
    );
    assert_eq!(
        description_view(&listing, true, &config()),
        DescriptionView::Image {
            src: "https://api.example.com/uploads/b.png".to_owned(),
            alt: "Card b description".to_owned(),
        }
    );
}

#[test]
fn description_image_shows_loading_text_until_loaded() {
    assert_eq!(image_loading_hint(false), Some("Loading image..."));
    assert_eq!(image_loading_hint(true), None);
}

// =============================================================
// Expand / collapse
// =============================================================

#[test]
fn toggle_expanded_is_exclusive() {
    let mut state = FeedState::default();
    state.toggle_expanded("a");
    assert!(state.is_expanded("a"));
    state.toggle_expanded("b");
    assert!(state.is_expanded("b"));
    assert!(!state.is_expanded("a"));
    state.toggle_expanded("b");
    assert_eq!(state.expanded_id, None);
}

// =============================================================
// Fetch outcome
// =============================================================

#[test]
fn feed_starts_loading() {
    assert_eq!(FeedState::default().status, FeedStatus::Loading);
}

#[test]
fn apply_fetch_success_stores_listings() {
    let mut state = FeedState::default();
    state.apply_fetch(Ok(vec![bare_listing("a"), bare_listing("b")]));
    assert_eq!(state.status, FeedStatus::Loaded);
    assert_eq!(state.listings.len(), 2);
}

#[test]
fn apply_fetch_failure_suppresses_collection() {
    let mut state = FeedState { listings: vec![bare_listing("stale")], ..FeedState::default() };
    state.apply_fetch(Err(ApiError::Status { status: 503, message: None }));
    assert_eq!(state.status, FeedStatus::Failed("Failed to fetch scratch cards.".to_owned()));
    assert!(state.listings.is_empty());
}

// =============================================================
// Lightbox
// =============================================================

#[test]
fn lightbox_slides_only_include_image_listings() {
    let listings = vec![text_listing("a", "t"), image_listing("b"), bare_listing("c"), image_listing("d")];
    let slides = lightbox_slides(&listings, &config());
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].listing_id, "b");
    assert_eq!(slides[1].src, "https://api.example.com/uploads/d.png");
    assert_eq!(slides[1].alt, "Card d");
}

#[test]
fn lightbox_slide_alt_falls_back_for_untitled() {
    let listing = Listing { title: String::new(), ..image_listing("e") };
    let slides = lightbox_slides(&[listing], &config());
    assert_eq!(slides[0].alt, "Description Image");
}

#[test]
fn open_lightbox_uses_index_within_image_subset() {
    let listings = vec![text_listing("a", "t"), image_listing("b"), bare_listing("c"), image_listing("d")];
    let mut state = FeedState::default();
    assert!(state.open_lightbox_for(&listings, "d"));
    assert!(state.lightbox.open);
    assert_eq!(state.lightbox.index, 1);
}

#[test]
fn open_lightbox_ignores_listing_without_image() {
    let listings = vec![text_listing("a", "t"), image_listing("b")];
    let mut state = FeedState::default();
    assert!(!state.open_lightbox_for(&listings, "a"));
    assert!(!state.lightbox.open);
}

#[test]
fn lightbox_navigation_wraps() {
    let mut lightbox = LightboxState::default();
    lightbox.open_at(2);
    lightbox.next(3);
    assert_eq!(lightbox.index, 0);
    lightbox.prev(3);
    assert_eq!(lightbox.index, 2);
    lightbox.close();
    assert!(!lightbox.open);
}

#[test]
fn lightbox_navigation_with_no_slides_is_noop() {
    let mut lightbox = LightboxState::default();
    lightbox.next(0);
    lightbox.prev(0);
    assert_eq!(lightbox.index, 0);
}

// =============================================================
// Search filtering
// =============================================================

#[test]
fn matches_query_checks_title_description_and_poster() {
    let listing = Listing {
        id: "a".to_owned(),
        title: "Amazon Pay".to_owned(),
        description: Some("Cashback on groceries".to_owned()),
        poster_email: Some("deals@example.com".to_owned()),
        ..Listing::default()
    };
    assert!(matches_query(&listing, "amazon"));
    assert!(matches_query(&listing, "GROCERIES"));
    assert!(matches_query(&listing, "deals@"));
    assert!(!matches_query(&listing, "flipkart"));
}

#[test]
fn blank_query_matches_everything() {
    assert!(matches_query(&bare_listing("a"), "   "));
}

#[test]
fn visible_filters_only_with_query() {
    let state = FeedState {
        listings: vec![text_listing("a", "myntra sale"), text_listing("b", "zomato gold")],
        ..FeedState::default()
    };
    assert_eq!(state.visible(None).len(), 2);
    let hits = state.visible(Some("zomato"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "b");
}
