use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::model::short_id;
use crate::storage::SnippetStorage;
use crate::store::SnippetStore;

use super::helpers::{report_save_error, resolve_id};

/// Deletes each selected snippet. Inputs that match nothing are not an error:
/// the delete still goes through as a no-op.
pub fn run<S: SnippetStorage>(store: &mut SnippetStore<S>, inputs: &[String]) -> Result<CmdResult> {
    let mut targets = Vec::with_capacity(inputs.len());
    for input in inputs {
        match resolve_id(store, input) {
            Ok(id) => targets.push(id),
            Err(SnipzError::NotFound(_)) => targets.push(input.trim().to_string()),
            Err(e) => return Err(e),
        }
    }

    let mut result = CmdResult::default();
    for id in targets {
        let snippet = store.get(&id).cloned();
        if store.delete(&id) {
            result.add_message(CmdMessage::success(format!("Deleted {}", short_id(&id))));
        } else {
            result.add_message(CmdMessage::info(format!("No snippet matching '{}'", id)));
        }
        result.affected.extend(snippet);
    }

    report_save_error(store, &mut result);
    Ok(result)
}
