//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation shell, listing cards and overlays. They
//! read configuration and auth state from Leptos context and report user
//! actions to their page through `Callback` props.

pub mod auth_panel;
pub mod banner_slider;
pub mod brand_suggestions;
pub mod lightbox;
pub mod listing_card;
pub mod navbar;
pub mod splash;
