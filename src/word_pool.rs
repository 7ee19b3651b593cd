//! Persistent word pool and poor-word list.
//!
//! Both lists are stored as JSON arrays of strings. Reads never fail: an
//! absent key, unparseable text or a value that is not an array of strings
//! all read as an empty list. Writes never fail either: storage errors are
//! logged and the write is dropped.

use log::{debug, error};

use crate::storage::{KeyValueStore, StorageError};

pub const WORDS_KEY: &str = "words";
pub const POOR_WORDS_KEY: &str = "poor-words";

/// Read/modify/write access to the `words` and `poor-words` records.
#[derive(Debug)]
pub struct WordPoolStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> WordPoolStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the stored pool with `words`.
    pub fn save_words(&mut self, words: &[String]) {
        if let Err(e) = self.write_list(WORDS_KEY, words) {
            error!("Failed to update stored words: {e}");
        }
    }

    #[must_use]
    pub fn get_words(&self) -> Vec<String> {
        self.read_list(WORDS_KEY)
    }

    /// Drops every stored word that appears in `words_to_remove`.
    ///
    /// Plain read-modify-write: two callers racing on the same store lose
    /// one of the updates.
    pub fn remove_words(&mut self, words_to_remove: &[String]) {
        let remaining: Vec<String> = self
            .get_words()
            .into_iter()
            .filter(|word| !words_to_remove.contains(word))
            .collect();
        self.save_words(&remaining);
    }

    /// Prepends `poor_words` to the stored poor-word list. Duplicates are kept.
    pub fn save_poor_words(&mut self, poor_words: &[String]) {
        let stored = self.read_list(POOR_WORDS_KEY);
        let merged: Vec<String> = poor_words.iter().cloned().chain(stored).collect();
        if let Err(e) = self.write_list(POOR_WORDS_KEY, &merged) {
            error!("Failed to save poor words: {e}");
        }
    }

    #[must_use]
    pub fn get_poor_words(&self) -> Vec<String> {
        self.read_list(POOR_WORDS_KEY)
    }

    pub fn clear_words(&mut self) {
        self.remove_key(WORDS_KEY);
    }

    pub fn clear_poor_words(&mut self) {
        self.remove_key(POOR_WORDS_KEY);
    }

    // Names used by the browser front end.

    #[must_use]
    pub fn get_words_from_local_storage(&self) -> Vec<String> {
        self.get_words()
    }

    pub fn save_words_to_local_storage(&mut self, words: &[String]) {
        self.save_words(words);
    }

    pub fn update_words_in_local_storage(&mut self, words_to_remove: &[String]) {
        self.remove_words(words_to_remove);
    }

    fn read_list(&self, key: &str) -> Vec<String> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                debug!("Reading '{key}' failed, treating as empty: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(words) => words,
            Err(e) => {
                debug!("Stored '{key}' is not a list of words, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    fn write_list(&mut self, key: &str, words: &[String]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(words)?;
        self.store.set_item(key, &raw)
    }

    fn remove_key(&mut self, key: &str) {
        if let Err(e) = self.store.remove_item(key) {
            error!("Failed to clear '{key}': {e}");
        }
    }
}
