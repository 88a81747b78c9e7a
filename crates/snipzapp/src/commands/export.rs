use crate::commands::CmdResult;
use crate::error::Result;
use crate::export::ExportDocument;
use crate::storage::SnippetStorage;
use crate::store::SnippetStore;

/// Builds the backup document for the whole collection. Writing it out is up
/// to the caller.
pub fn run<S: SnippetStorage>(store: &SnippetStore<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_stats(store.stats());
    result.export = Some(ExportDocument::new(store.items()));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemStorage;

    #[test]
    fn exports_all_items_in_store_order() {
        let mut store = SnippetStore::open(MemStorage::new());
        store.add("a", "", false).unwrap();
        store.add("b", "", true).unwrap();
        let doc = run(&store).unwrap().export.unwrap();
        assert_eq!(doc.version, 1);
        assert_eq!(doc.items, store.items());
    }

    #[test]
    fn export_does_not_save() {
        let mut store = SnippetStore::open(MemStorage::new());
        store.add("a", "", false).unwrap();
        run(&store).unwrap();
        assert_eq!(store.storage().save_count(), 1);
    }
}
