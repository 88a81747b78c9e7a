use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::storage::SnippetStorage;
use crate::store::SnippetStore;

use super::helpers::{label, report_save_error, resolve_ids};

/// Flips the pinned flag of each selected snippet.
pub fn toggle<S: SnippetStorage>(
    store: &mut SnippetStore<S>,
    inputs: &[String],
) -> Result<CmdResult> {
    let ids = resolve_ids(store, inputs)?;
    let mut result = CmdResult::default();

    for id in ids {
        let snippet = store.toggle_pin(&id)?;
        let verb = if snippet.pinned { "Pinned" } else { "Unpinned" };
        result.add_message(CmdMessage::success(format!("{}: {}", verb, label(&snippet))));
        result.affected.push(snippet);
    }

    report_save_error(store, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::storage::memory::MemStorage;
    use crate::view::ViewParams;

    #[test]
    fn toggling_moves_snippet_to_the_top() {
        let mut store = SnippetStore::open(MemStorage::new());
        let old = store.add("older", "", false).unwrap();
        store.add("newer", "", false).unwrap();

        let result = toggle(&mut store, &[old.id.clone()]).unwrap();
        assert!(result.affected[0].pinned);
        assert!(result.messages[0].content.starts_with("Pinned"));

        let listed = list::run(&store, &ViewParams::default()).unwrap().listed;
        assert_eq!(listed[0].id, old.id);
    }

    #[test]
    fn toggling_twice_unpins() {
        let mut store = SnippetStore::open(MemStorage::new());
        let s = store.add("a", "", true).unwrap();
        let result = toggle(&mut store, &[s.id.clone()]).unwrap();
        assert!(!result.affected[0].pinned);
        assert!(result.messages[0].content.starts_with("Unpinned"));
    }

    #[test]
    fn unknown_id_aborts_before_changes() {
        let mut store = SnippetStore::open(MemStorage::new());
        let s = store.add("a", "", false).unwrap();
        let inputs = vec![s.id.clone(), "missing".to_string()];
        assert!(toggle(&mut store, &inputs).is_err());
        assert!(!store.get(&s.id).unwrap().pinned);
    }
}
