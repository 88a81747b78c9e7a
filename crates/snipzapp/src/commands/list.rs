use crate::commands::CmdResult;
use crate::error::Result;
use crate::storage::SnippetStorage;
use crate::store::SnippetStore;
use crate::view::{build_view, ViewParams};

/// The display list for the given view settings, plus collection totals so the
/// caller can tell "no matches" apart from "nothing saved yet".
pub fn run<S: SnippetStorage>(store: &SnippetStore<S>, params: &ViewParams) -> Result<CmdResult> {
    let listed = build_view(store.items(), params);
    Ok(CmdResult::default()
        .with_listed(listed)
        .with_stats(store.stats()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemStorage;
    use crate::view::{Filter, SortOrder};

    #[test]
    fn lists_matching_snippets_with_stats() {
        let mut store = SnippetStore::open(MemStorage::new());
        store.add("Buy milk", "home", false).unwrap();
        store.add("Deploy service", "work", true).unwrap();
        store.add("Call mom", "home", false).unwrap();

        let params = ViewParams::new("HOME", Filter::All, SortOrder::Newest);
        let result = run(&store, &params).unwrap();
        let texts: Vec<&str> = result.listed.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Call mom", "Buy milk"]);
        let stats = result.stats.unwrap();
        assert_eq!((stats.total, stats.pinned), (3, 1));
    }

    #[test]
    fn pinned_come_first_by_default() {
        let mut store = SnippetStore::open(MemStorage::new());
        store.add("first", "", true).unwrap();
        store.add("second", "", false).unwrap();
        let result = run(&store, &ViewParams::default()).unwrap();
        assert_eq!(result.listed[0].text, "first");
    }
}
