//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for UI
//! clients. It owns the [`SnippetStore`] and the clipboard strategy, and
//! dispatches each call to the matching `commands::*` function.
//!
//! The facade holds no business logic and does no terminal I/O. It is generic
//! over the persistence backend:
//! - Production: `SnipzApi<FileStorage>`
//! - Testing: `SnipzApi<MemStorage>`
//!
//! Snippets are addressed by id or unique id prefix everywhere; see
//! [`commands::helpers::resolve_id`].

use crate::clipboard::Clipboard;
use crate::commands;
use crate::error::Result;
use crate::model::Snippet;
use crate::storage::SnippetStorage;
use crate::store::SnippetStore;
use crate::view::ViewParams;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::view::{Filter, SortOrder};

pub struct SnipzApi<S: SnippetStorage> {
    store: SnippetStore<S>,
    clipboard: Box<dyn Clipboard>,
}

impl<S: SnippetStorage> SnipzApi<S> {
    pub fn new(store: SnippetStore<S>, clipboard: Box<dyn Clipboard>) -> Self {
        Self { store, clipboard }
    }

    pub fn store(&self) -> &SnippetStore<S> {
        &self.store
    }

    pub fn items(&self) -> &[Snippet] {
        self.store.items()
    }

    pub fn add(&mut self, text: &str, tags_raw: &str, pinned: bool) -> Result<CmdResult> {
        commands::add::run(&mut self.store, text, tags_raw, pinned)
    }

    pub fn add_from_clipboard(&mut self, tags_raw: &str, pinned: bool) -> Result<CmdResult> {
        commands::add::paste(&mut self.store, self.clipboard.as_ref(), tags_raw, pinned)
    }

    pub fn list(&self, params: &ViewParams) -> Result<CmdResult> {
        commands::list::run(&self.store, params)
    }

    pub fn view<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        commands::view::run(&self.store, &owned(ids))
    }

    pub fn copy(&self, id: &str) -> Result<CmdResult> {
        commands::copy::run(&self.store, self.clipboard.as_ref(), id)
    }

    pub fn edit(&mut self, id: &str, text: &str, tags_raw: Option<&str>) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, id, text, tags_raw)
    }

    pub fn toggle_pin<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::pinning::toggle(&mut self.store, &owned(ids))
    }

    pub fn delete<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, &owned(ids))
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn export(&self) -> Result<CmdResult> {
        commands::export::run(&self.store)
    }

    pub fn import(&mut self, raw: &str) -> Result<CmdResult> {
        commands::import::run(&mut self.store, raw)
    }
}

fn owned<I: AsRef<str>>(ids: &[I]) -> Vec<String> {
    ids.iter().map(|id| id.as_ref().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::UnsupportedClipboard;
    use crate::storage::memory::MemStorage;

    fn api() -> SnipzApi<MemStorage> {
        SnipzApi::new(
            SnippetStore::open(MemStorage::new()),
            Box::new(UnsupportedClipboard),
        )
    }

    #[test]
    fn add_then_list() {
        let mut api = api();
        api.add("hello", "greeting", false).unwrap();
        let result = api.list(&ViewParams::default()).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].tags, vec!["greeting"]);
    }

    #[test]
    fn dispatches_mutations_by_prefix() {
        let mut api = api();
        let id = api.add("hello", "", false).unwrap().affected[0].id.clone();
        let prefix = &id[..8];

        assert!(api.toggle_pin(&[prefix]).unwrap().affected[0].pinned);
        assert_eq!(api.edit(prefix, "bye", None).unwrap().affected[0].text, "bye");
        assert_eq!(api.view(&[prefix]).unwrap().listed[0].text, "bye");
        api.delete(&[prefix]).unwrap();
        assert!(api.items().is_empty());
    }

    #[test]
    fn copy_without_clipboard_warns() {
        let mut api = api();
        let id = api.add("hello", "", false).unwrap().affected[0].id.clone();
        let result = api.copy(&id).unwrap();
        assert!(result.has_level(MessageLevel::Warning));
    }

    #[test]
    fn export_import_round_trip() {
        let mut api = api();
        api.add("one", "a", true).unwrap();
        api.add("two", "b", false).unwrap();
        let raw = api.export().unwrap().export.unwrap().to_json().unwrap();

        let mut other = self::api();
        other.import(&raw).unwrap();
        assert_eq!(other.items(), api.items());
        assert_eq!(other.stats().unwrap().stats, api.stats().unwrap().stats);
    }

    #[test]
    fn clear_then_clear_again() {
        let mut api = api();
        api.add("x", "", false).unwrap();
        assert!(api.clear().unwrap().has_level(MessageLevel::Success));
        assert!(api.clear().unwrap().has_level(MessageLevel::Info));
        assert_eq!(api.store().storage().save_count(), 2);
    }
}
