use super::*;
use crate::util::storage::MemoryStore;

// =============================================================
// Splash
// =============================================================

#[test]
fn splash_shows_once_per_session() {
    let store = MemoryStore::new();
    assert!(should_show_splash(&store));
    mark_splash_shown(&store);
    assert!(!should_show_splash(&store));
    assert_eq!(store.get(LAUNCH_FLAG_KEY).as_deref(), Some("true"));
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn nav_toggle_and_close() {
    let mut nav = NavState::default();
    assert!(!nav.show_links);
    nav.toggle();
    assert!(nav.show_links);
    nav.close();
    assert!(!nav.show_links);
    nav.close();
    assert!(!nav.show_links);
}

#[test]
fn search_path_encodes_query() {
    assert_eq!(search_path("amazon").as_deref(), Some("/search?query=amazon"));
    assert_eq!(search_path("  gift cards & more ").as_deref(), Some("/search?query=gift+cards+%26+more"));
}

#[test]
fn search_path_rejects_blank_query() {
    assert_eq!(search_path(""), None);
    assert_eq!(search_path("   "), None);
}

// =============================================================
// About sections
// =============================================================

#[test]
fn about_section_defaults_to_about() {
    assert_eq!(AboutSection::default(), AboutSection::About);
}

#[test]
fn about_sections_have_distinct_labels() {
    let labels: Vec<_> = AboutSection::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["About", "Terms", "Contact"]);
    assert_eq!(AboutSection::Terms.heading(), "Terms & Conditions");
}
