//! # Snippet Store
//!
//! [`SnippetStore`] owns the in-memory collection and is the only thing that
//! mutates it. It is generic over a [`SnippetStorage`] backend:
//!
//! - Production: `SnippetStore<FileStorage>`
//! - Testing: `SnippetStore<MemStorage>`
//!
//! ## Persistence contract
//!
//! The collection is loaded once in [`SnippetStore::open`]. A failed load is
//! logged and the store starts empty. After that, every successful mutation
//! writes the whole collection exactly once, and every rejected mutation writes
//! nothing.
//!
//! Saving is fire-and-forget: a failing write never undoes the in-memory change
//! or fails the mutation. The error is logged and parked until the caller picks
//! it up with [`SnippetStore::take_save_error`], which the command layer turns
//! into a warning.

use crate::error::{Result, SnipzError};
use crate::model::{EditRequest, IdGenerator, Snippet, Stats, UuidGenerator};
use crate::normalize::{canonical_text, normalize_tags};
use crate::storage::SnippetStorage;
use tracing::{debug, warn};

pub struct SnippetStore<S: SnippetStorage> {
    storage: S,
    items: Vec<Snippet>,
    ids: Box<dyn IdGenerator>,
    save_error: Option<SnipzError>,
}

impl<S: SnippetStorage> SnippetStore<S> {
    pub fn open(storage: S) -> Self {
        let items = match storage.load() {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "could not load snippets, starting empty");
                Vec::new()
            }
        };
        debug!(count = items.len(), "loaded snippets");
        Self {
            storage,
            items,
            ids: Box::new(UuidGenerator),
            save_error: None,
        }
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn items(&self) -> &[Snippet] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.items.iter().find(|s| s.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn id_generator(&self) -> &dyn IdGenerator {
        self.ids.as_ref()
    }

    pub fn stats(&self) -> Stats {
        Stats::of(&self.items)
    }

    /// Creates a snippet from raw input and prepends it.
    pub fn add(&mut self, text: &str, tags_raw: &str, pinned: bool) -> Result<Snippet> {
        let text = canonical_text(text);
        if text.is_empty() {
            return Err(SnipzError::EmptyText);
        }
        let snippet = Snippet::new(self.ids.new_id(), text, normalize_tags(tags_raw), pinned);
        debug!(id = %snippet.id, "added snippet");
        self.items.insert(0, snippet.clone());
        self.persist();
        Ok(snippet)
    }

    /// Removes the snippet with `id`. Absent ids are a no-op, but the
    /// collection is still written. Returns whether something was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|s| s.id != id);
        let removed = self.items.len() != before;
        debug!(id, removed, "deleted snippet");
        self.persist();
        removed
    }

    /// Replaces text and tags together. On any error the snippet is untouched.
    pub fn edit(&mut self, id: &str, request: &EditRequest) -> Result<Snippet> {
        let pos = self.position(id)?;
        let text = canonical_text(&request.text);
        if text.is_empty() {
            return Err(SnipzError::EmptyText);
        }
        let snippet = &mut self.items[pos];
        snippet.text = text;
        if let Some(raw) = &request.tags_raw {
            snippet.tags = normalize_tags(raw);
        }
        snippet.touch();
        let updated = snippet.clone();
        debug!(id, "edited snippet");
        self.persist();
        Ok(updated)
    }

    pub fn toggle_pin(&mut self, id: &str) -> Result<Snippet> {
        let pos = self.position(id)?;
        let snippet = &mut self.items[pos];
        snippet.pinned = !snippet.pinned;
        snippet.touch();
        let updated = snippet.clone();
        debug!(id, pinned = updated.pinned, "toggled pin");
        self.persist();
        Ok(updated)
    }

    /// Empties the collection. Returns `false`, without writing, when it was
    /// already empty.
    pub fn clear_all(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        debug!(count = self.items.len(), "clearing all snippets");
        self.items.clear();
        self.persist();
        true
    }

    pub fn replace_all(&mut self, items: Vec<Snippet>) {
        debug!(count = items.len(), "replacing collection");
        self.items = items;
        self.persist();
    }

    /// The error from the most recent failed save, if any.
    pub fn take_save_error(&mut self) -> Option<SnipzError> {
        self.save_error.take()
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.items
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| SnipzError::NotFound(id.to_string()))
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.items) {
            warn!(error = %e, "failed to save snippets");
            self.save_error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SequentialIds;
    use crate::storage::memory::MemStorage;

    fn store() -> SnippetStore<MemStorage> {
        SnippetStore::open(MemStorage::new()).with_id_generator(SequentialIds::default())
    }

    #[test]
    fn add_normalizes_and_prepends() {
        let mut store = store();
        store.add("first", "", false).unwrap();
        let s = store.add("  second  ", " Work , Home  Office ", true).unwrap();

        assert_eq!(s.text, "second");
        assert_eq!(s.tags, vec!["work", "home office"]);
        assert!(s.pinned);
        assert_eq!(s.created_at, s.updated_at);
        assert_eq!(store.items()[0].id, s.id);
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.storage().save_count(), 2);
    }

    #[test]
    fn add_blank_text_is_rejected_without_saving() {
        let mut store = store();
        let err = store.add(" \n\t ", "tag", false).unwrap_err();
        assert!(matches!(err, SnipzError::EmptyText));
        assert!(store.items().is_empty());
        assert_eq!(store.storage().save_count(), 0);
    }

    #[test]
    fn delete_is_idempotent_and_still_saves() {
        let mut store = store();
        let s = store.add("a", "", false).unwrap();
        assert!(store.delete(&s.id));
        assert!(!store.delete(&s.id));
        assert!(store.items().is_empty());
        assert_eq!(store.storage().save_count(), 3);
    }

    #[test]
    fn edit_replaces_text_and_tags() {
        let mut store = store();
        let s = store.add("old", "a", false).unwrap();
        let edited = store
            .edit(&s.id, &EditRequest::new(" new ", "B, c"))
            .unwrap();
        assert_eq!(edited.text, "new");
        assert_eq!(edited.tags, vec!["b", "c"]);
        assert_eq!(edited.created_at, s.created_at);
        assert!(edited.updated_at >= s.updated_at);
        assert_eq!(store.get(&s.id), Some(&edited));
    }

    #[test]
    fn edit_missing_id_is_not_found() {
        let mut store = store();
        store.add("a", "", false).unwrap();
        let err = store.edit("nope", &EditRequest::new("x", "")).unwrap_err();
        assert!(matches!(err, SnipzError::NotFound(id) if id == "nope"));
        assert_eq!(store.storage().save_count(), 1);
    }

    #[test]
    fn edit_blank_text_leaves_snippet_untouched() {
        let mut store = store();
        let s = store.add("keep me", "x", false).unwrap();
        let err = store
            .edit(&s.id, &EditRequest::new("   ", "other"))
            .unwrap_err();
        assert!(matches!(err, SnipzError::EmptyText));
        assert_eq!(store.get(&s.id), Some(&s));
        assert_eq!(store.storage().save_count(), 1);
    }

    #[test]
    fn toggle_pin_flips_and_touches() {
        let mut store = store();
        let s = store.add("a", "", false).unwrap();
        let pinned = store.toggle_pin(&s.id).unwrap();
        assert!(pinned.pinned);
        assert!(pinned.updated_at >= s.updated_at);
        let unpinned = store.toggle_pin(&s.id).unwrap();
        assert!(!unpinned.pinned);
        assert!(matches!(
            store.toggle_pin("missing"),
            Err(SnipzError::NotFound(_))
        ));
        assert_eq!(store.storage().save_count(), 3);
    }

    #[test]
    fn clear_all_on_empty_does_nothing() {
        let mut store = store();
        assert!(!store.clear_all());
        assert_eq!(store.storage().save_count(), 0);

        store.add("a", "", false).unwrap();
        assert!(store.clear_all());
        assert!(store.items().is_empty());
        assert_eq!(store.storage().save_count(), 2);
    }

    #[test]
    fn replace_all_overwrites() {
        let mut store = store();
        store.add("a", "", false).unwrap();
        let other = Snippet::new("z".into(), "z".into(), vec![], true);
        store.replace_all(vec![other.clone()]);
        assert_eq!(store.items(), &[other]);
        assert_eq!(store.stats(), Stats { total: 1, pinned: 1 });
    }

    #[test]
    fn failed_load_starts_empty() {
        let storage = MemStorage::with_items(vec![Snippet::new(
            "x".into(),
            "x".into(),
            vec![],
            false,
        )]);
        storage.set_simulate_load_error(true);
        let store = SnippetStore::open(storage);
        assert!(store.items().is_empty());
    }

    #[test]
    fn failed_save_keeps_mutation_and_parks_error() {
        let storage = MemStorage::new();
        storage.set_simulate_write_error(true);
        let mut store = SnippetStore::open(storage);

        let s = store.add("still here", "", false).unwrap();
        assert_eq!(store.get(&s.id).map(|s| s.text.as_str()), Some("still here"));
        assert!(matches!(store.take_save_error(), Some(SnipzError::Store(_))));
        assert!(store.take_save_error().is_none());
    }

    #[test]
    fn loads_existing_items() {
        let existing = Snippet::new("x".into(), "x".into(), vec![], false);
        let store = SnippetStore::open(MemStorage::with_items(vec![existing.clone()]));
        assert_eq!(store.items(), &[existing]);
    }
}
