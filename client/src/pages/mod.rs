//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, timers, storage) and
//! delegates rendering details to `components`.

pub mod about;
pub mod feed;
pub mod not_found;
pub mod post_listing;
pub mod shortlist;
