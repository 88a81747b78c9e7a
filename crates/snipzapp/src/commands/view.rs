use crate::commands::CmdResult;
use crate::error::Result;
use crate::storage::SnippetStorage;
use crate::store::SnippetStore;

use super::helpers::resolve_ids;

pub fn run<S: SnippetStorage>(store: &SnippetStore<S>, inputs: &[String]) -> Result<CmdResult> {
    let ids = resolve_ids(store, inputs)?;
    let listed = ids
        .iter()
        .filter_map(|id| store.get(id).cloned())
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}
