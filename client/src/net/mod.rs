//! Networking modules for the external REST services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues requests to the listings API, the brand-search API and the auth
//! provider; `types` defines their wire schema.

pub mod api;
pub mod types;
