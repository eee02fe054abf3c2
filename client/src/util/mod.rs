//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! files, viewport) from page and component logic to improve reuse and
//! testability.

pub mod debounce;
pub mod file;
pub mod format;
pub mod rotation;
pub mod storage;
pub mod viewport;
