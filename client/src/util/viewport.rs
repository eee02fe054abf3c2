//! Reactive viewport width for responsive layout switches.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation shell collapses below `NAV_MOBILE_MAX_WIDTH` and the feed
//! banner drops its wide first image below `BANNER_NARROW_MAX_WIDTH`. SSR
//! renders the desktop layout; the browser corrects it after hydration.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

/// Widest viewport (px) that gets the collapsed mobile navigation.
pub const NAV_MOBILE_MAX_WIDTH: f64 = 700.0;
/// Widest viewport (px) treated as narrow by the feed banner.
pub const BANNER_NARROW_MAX_WIDTH: f64 = 600.0;
/// Width assumed before the browser reports one.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

pub fn is_mobile_nav(width: f64) -> bool {
    width <= NAV_MOBILE_MAX_WIDTH
}

pub fn is_narrow_banner(width: f64) -> bool {
    width <= BANNER_NARROW_MAX_WIDTH
}

/// Current `window.innerWidth`, updated on every resize.
pub fn use_viewport_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(DEFAULT_VIEWPORT_WIDTH);

    #[cfg(feature = "hydrate")]
    {
        let read_width = || window().inner_width().ok().and_then(|w| w.as_f64());
        Effect::new(move || {
            if let Some(w) = read_width() {
                set_width.set(w);
            }
        });
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(w) = read_width() {
                set_width.set(w);
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_width;
    }

    width
}
