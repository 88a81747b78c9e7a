use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::storage::SnippetStorage;
use crate::store::SnippetStore;

use super::helpers::report_save_error;

/// Removes every snippet. Confirmation is the caller's job.
pub fn run<S: SnippetStorage>(store: &mut SnippetStore<S>) -> Result<CmdResult> {
    let count = store.items().len();
    let mut result = CmdResult::default();
    if store.clear_all() {
        let noun = if count == 1 { "snippet" } else { "snippets" };
        result.add_message(CmdMessage::success(format!("Cleared {} {}", count, noun)));
        report_save_error(store, &mut result);
    } else {
        result.add_message(CmdMessage::info("Nothing to clear"));
    }
    Ok(result.with_stats(store.stats()))
}
