//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module holds plain data plus transition methods. Pages wrap these in
//! `RwSignal`s; nothing here touches the DOM, so every state machine is unit
//! tested without a browser.

pub mod auth;
pub mod feed;
pub mod shortlist;
pub mod submission;
pub mod ui;
