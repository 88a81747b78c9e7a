use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EditRequest;
use crate::storage::SnippetStorage;
use crate::store::SnippetStore;

use super::helpers::{report_save_error, resolve_id};

/// Replaces a snippet's text and tags in one step. When `tags_raw` is `None`
/// the current tags are carried over.
pub fn run<S: SnippetStorage>(
    store: &mut SnippetStore<S>,
    input: &str,
    text: &str,
    tags_raw: Option<&str>,
) -> Result<CmdResult> {
    let id = resolve_id(store, input)?;
    let request = match tags_raw {
        Some(raw) => EditRequest::new(text, raw),
        None => EditRequest::keep_tags(text),
    };

    let updated = store.edit(&id, &request)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Updated"));
    report_save_error(store, &mut result);
    Ok(result.with_affected(vec![updated]))
}
