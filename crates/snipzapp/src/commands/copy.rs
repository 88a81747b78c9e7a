use crate::clipboard::Clipboard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::storage::SnippetStorage;
use crate::store::SnippetStore;
use tracing::warn;

use super::helpers::resolve_id;

/// Copies a snippet's text. A clipboard failure is a warning, not an error.
pub fn run<S: SnippetStorage>(
    store: &SnippetStore<S>,
    clipboard: &dyn Clipboard,
    input: &str,
) -> Result<CmdResult> {
    let id = resolve_id(store, input)?;
    let mut result = CmdResult::default();
    let Some(snippet) = store.get(&id) else {
        return Ok(result);
    };

    match clipboard.write(&snippet.text) {
        Ok(()) => result.add_message(CmdMessage::success("Copied")),
        Err(e) => {
            warn!(error = %e, "clipboard write failed");
            result.add_message(CmdMessage::warning(format!("Clipboard blocked: {}", e)));
        }
    }
    Ok(result.with_affected(vec![snippet.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::UnsupportedClipboard;
    use crate::commands::MessageLevel;
    use crate::storage::memory::MemStorage;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingClipboard(RefCell<Vec<String>>);

    impl Clipboard for RecordingClipboard {
        fn write(&self, text: &str) -> Result<()> {
            self.0.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn read(&self) -> Result<String> {
            Ok(self.0.borrow().last().cloned().unwrap_or_default())
        }
    }

    #[test]
    fn copies_text() {
        let mut store = SnippetStore::open(MemStorage::new());
        let s = store.add("copy me", "", false).unwrap();
        let clip = RecordingClipboard::default();
        let result = run(&store, &clip, &s.id).unwrap();
        assert_eq!(clip.0.borrow().as_slice(), ["copy me"]);
        assert!(result.has_level(MessageLevel::Success));
    }

    #[test]
    fn clipboard_failure_is_a_warning() {
        let mut store = SnippetStore::open(MemStorage::new());
        let s = store.add("copy me", "", false).unwrap();
        let result = run(&store, &UnsupportedClipboard, &s.id).unwrap();
        assert!(result.has_level(MessageLevel::Warning));
        assert_eq!(result.affected.len(), 1);
    }
}
