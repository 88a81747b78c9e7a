use crate::commands::CmdResult;
use crate::error::Result;
use crate::storage::SnippetStorage;
use crate::store::SnippetStore;

pub fn run<S: SnippetStorage>(store: &SnippetStore<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(store.stats()))
}
