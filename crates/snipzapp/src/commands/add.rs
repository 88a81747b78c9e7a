use crate::clipboard::Clipboard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::storage::SnippetStorage;
use crate::store::SnippetStore;

use super::helpers::report_save_error;

pub fn run<S: SnippetStorage>(
    store: &mut SnippetStore<S>,
    text: &str,
    tags_raw: &str,
    pinned: bool,
) -> Result<CmdResult> {
    let snippet = store.add(text, tags_raw, pinned)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Saved {}", snippet.short_id())));
    report_save_error(store, &mut result);
    Ok(result.with_affected(vec![snippet]))
}

/// Saves the current clipboard contents. An empty clipboard is reported and
/// nothing is created.
pub fn paste<S: SnippetStorage>(
    store: &mut SnippetStore<S>,
    clipboard: &dyn Clipboard,
    tags_raw: &str,
    pinned: bool,
) -> Result<CmdResult> {
    let text = clipboard.read()?;
    if text.trim().is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("Clipboard empty"));
        return Ok(result);
    }
    let mut result = run(store, &text, tags_raw, pinned)?;
    result.messages.insert(0, CmdMessage::info("Pasted"));
    Ok(result)
}
