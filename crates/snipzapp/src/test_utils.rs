use crate::api::SnipzApi;
use crate::clipboard::UnsupportedClipboard;
use crate::storage::fs::FileStorage;
use crate::store::SnippetStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// A file-backed API rooted in a temporary directory.
pub struct TestEnv {
    // Held so the directory outlives the test.
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Opens a fresh API over the same directory, as a new process would.
    pub fn api(&self) -> SnipzApi<FileStorage> {
        let store = SnippetStore::open(FileStorage::new(&self.root));
        SnipzApi::new(store, Box::new(UnsupportedClipboard))
    }
}
