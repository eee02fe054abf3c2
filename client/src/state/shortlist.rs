//! Session-persisted shortlist of favourite contacts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shortlist page keeps a `Shortlist` in a signal. It is loaded once from
//! the injected `KeyValueStore` on mount and written back after every change.
//!
//! TRADE-OFFS
//! ==========
//! Entries are stored as `{id, number, name}` so lists written by earlier
//! builds of the site stay readable; `number` carries the poster email.

#[cfg(test)]
#[path = "shortlist_test.rs"]
mod shortlist_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Storage key holding the JSON array of entries.
pub const SHORTLIST_KEY: &str = "mylistCards";
pub const EMPTY_MESSAGE: &str = "No favorite cards yet. Add one above!";

/// One favourite contact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistEntry {
    pub id: i64,
    #[serde(rename = "number")]
    pub email: String,
    pub name: String,
}

/// Ordered shortlist, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shortlist {
    entries: Vec<ShortlistEntry>,
}

impl Shortlist {
    /// Read the list from `store`. Missing or malformed data gives an empty list.
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self { entries: load_json(store, SHORTLIST_KEY).unwrap_or_default() }
    }

    pub fn save(&self, store: &impl KeyValueStore) {
        save_json(store, SHORTLIST_KEY, &self.entries);
    }

    pub fn entries(&self) -> &[ShortlistEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a trimmed entry. Blank email or name is a no-op returning
    /// `None`. Ids come from `now_ms` but never repeat or go backwards.
    pub fn add(&mut self, email: &str, name: &str, now_ms: i64) -> Option<i64> {
        let (email, name) = (email.trim(), name.trim());
        if email.is_empty() || name.is_empty() {
            return None;
        }
        let id = match self.entries.iter().map(|e| e.id).max() {
            Some(last) => match last.checked_add(1) {
                Some(next) => now_ms.max(next),
                None => self.free_id_at_or_below(now_ms)?,
            },
            None => now_ms,
        };
        self.entries.push(ShortlistEntry { id, email: email.to_owned(), name: name.to_owned() });
        Some(id)
    }

    /// Highest id not yet taken that is at most `start`. Only reached when
    /// stored ids already sit at `i64::MAX`.
    fn free_id_at_or_below(&self, start: i64) -> Option<i64> {
        (i64::MIN..=start).rev().find(|id| self.entries.iter().all(|e| e.id != *id))
    }

    /// Drop the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }
}
