use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::export::parse_backup;
use crate::merge::merge_with_report;
use crate::storage::SnippetStorage;
use crate::store::SnippetStore;

use super::helpers::report_save_error;

/// Merges a backup (raw JSON text) into the collection. A document of the
/// wrong shape fails before anything changes.
pub fn run<S: SnippetStorage>(store: &mut SnippetStore<S>, raw: &str) -> Result<CmdResult> {
    let incoming = parse_backup(raw)?;
    let (merged, report) = merge_with_report(store.items(), &incoming, store.id_generator())?;
    store.replace_all(merged);

    let mut result = CmdResult::default().with_stats(store.stats());
    result.add_message(CmdMessage::success(format!(
        "Imported {} {}",
        report.imported,
        if report.imported == 1 { "snippet" } else { "snippets" }
    )));
    if report.replaced > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} existing replaced",
            report.replaced
        )));
    }
    if report.dropped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} skipped (missing text)",
            report.dropped
        )));
    }
    report_save_error(store, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::export;
    use crate::commands::MessageLevel;
    use crate::error::SnipzError;
    use crate::storage::memory::MemStorage;

    #[test]
    fn imports_valid_records_only() {
        let mut store = SnippetStore::open(MemStorage::new());
        store.add("existing", "", false).unwrap();
        let raw = r#"[{"text": "new one"}, {"tags": ["no text"]}]"#;
        let result = run(&mut store, raw).unwrap();
        assert_eq!(store.items().len(), 2);
        assert_eq!(result.messages[0].content, "Imported 1 snippet");
        assert!(result.has_level(MessageLevel::Warning));
    }

    #[test]
    fn number_document_is_rejected_untouched() {
        let mut store = SnippetStore::open(MemStorage::new());
        store.add("existing", "", false).unwrap();
        let before = store.items().to_vec();
        assert!(matches!(run(&mut store, "42"), Err(SnipzError::Format(_))));
        assert_eq!(store.items(), before.as_slice());
        assert_eq!(store.storage().save_count(), 1);
    }

    #[test]
    fn invalid_json_is_rejected() {
        let mut store = SnippetStore::open(MemStorage::new());
        assert!(matches!(
            run(&mut store, "{oops"),
            Err(SnipzError::Format(_))
        ));
    }

    #[test]
    fn reimporting_an_export_changes_nothing() {
        let mut store = SnippetStore::open(MemStorage::new());
        store.add("a", "x", true).unwrap();
        store.add("b", "", false).unwrap();
        let raw = export::run(&store).unwrap().export.unwrap().to_json().unwrap();
        let before = store.items().to_vec();

        let result = run(&mut store, &raw).unwrap();
        assert_eq!(store.items(), before.as_slice());
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "2 existing replaced"));
    }
}
