use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use crate::normalize::{title_of, DEFAULT_TITLE_WIDTH};
use crate::storage::SnippetStorage;
use crate::store::SnippetStore;

/// Resolves user input to a snippet id.
///
/// An exact id match wins. Otherwise the input is treated as an id prefix and
/// must match exactly one snippet, so the 8-character ids shown in listings can
/// be typed back in.
pub fn resolve_id<S: SnippetStorage>(store: &SnippetStore<S>, input: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SnipzError::NotFound(input.to_string()));
    }
    if store.get(input).is_some() {
        return Ok(input.to_string());
    }

    let mut matches = store.items().iter().filter(|s| s.id.starts_with(input));
    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found.id.clone()),
        (Some(_), Some(_)) => Err(SnipzError::AmbiguousId(input.to_string())),
        (None, _) => Err(SnipzError::NotFound(input.to_string())),
    }
}

pub fn resolve_ids<S: SnippetStorage>(
    store: &SnippetStore<S>,
    inputs: &[String],
) -> Result<Vec<String>> {
    let mut ids: Vec<String> = Vec::with_capacity(inputs.len());
    for input in inputs {
        let id = resolve_id(store, input)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Short label used in command messages.
pub fn label(snippet: &Snippet) -> String {
    title_of(&snippet.text, DEFAULT_TITLE_WIDTH)
}

/// Turns a parked save failure into a warning on `result`.
pub fn report_save_error<S: SnippetStorage>(store: &mut SnippetStore<S>, result: &mut CmdResult) {
    if let Some(e) = store.take_save_error() {
        result.add_message(CmdMessage::warning(format!(
            "Changes kept in memory but not saved: {}",
            e
        )));
    }
}
