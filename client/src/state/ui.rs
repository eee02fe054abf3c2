//! Small view-state pieces of the app shell: navigation menu, splash screen,
//! About page sections and search routing.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::storage::KeyValueStore;

/// Session flag set once the splash screen has been shown.
pub const LAUNCH_FLAG_KEY: &str = "launchShown";
pub const SPLASH_DURATION_MS: u32 = 3000;
pub const SPLASH_TEXT: &str = "ANVAYA-THE PERFECT MARKET PLACE";

/// Whether this browser session still has to see the splash screen.
pub fn should_show_splash(store: &impl KeyValueStore) -> bool {
    store.get(LAUNCH_FLAG_KEY).is_none()
}

pub fn mark_splash_shown(store: &impl KeyValueStore) {
    store.set(LAUNCH_FLAG_KEY, "true");
}

/// Mobile navigation overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub show_links: bool,
}

impl NavState {
    pub fn toggle(&mut self) {
        self.show_links = !self.show_links;
    }

    pub fn close(&mut self) {
        self.show_links = false;
    }
}

/// Route for a search, or `None` when the trimmed query is empty.
pub fn search_path(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    Some(format!("/search?query={encoded}"))
}

/// Sections of the About page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AboutSection {
    #[default]
    About,
    Terms,
    Contact,
}

impl AboutSection {
    pub const ALL: [Self; 3] = [Self::About, Self::Terms, Self::Contact];

    /// Toggle button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Terms => "Terms",
            Self::Contact => "Contact",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::About => "About Us",
            Self::Terms => "Terms & Conditions",
            Self::Contact => "Contact",
        }
    }
}
