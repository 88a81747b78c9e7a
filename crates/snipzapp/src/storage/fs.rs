use super::SnippetStorage;
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DATA_FILE: &str = "snippets.json";

/// Stores the collection as a pretty-printed JSON array in `<root>/snippets.json`.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(SnipzError::Io)?;
        }
        Ok(())
    }
}

impl SnippetStorage for FileStorage {
    fn load(&self) -> Result<Vec<Snippet>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&data_file).map_err(SnipzError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<Snippet> =
            serde_json::from_str(&content).map_err(SnipzError::Serialization)?;
        Ok(items)
    }

    fn save(&self, items: &[Snippet]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(items).map_err(SnipzError::Serialization)?;

        let tmp_file = self.root.join(format!(".snippets-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(SnipzError::Io)?;
        fs::rename(&tmp_file, self.data_file()).map_err(SnipzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample(id: &str) -> Snippet {
        Snippet::new(id.into(), format!("text {}", id), vec!["t".into()], false)
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));
        let items = vec![sample("a"), sample("b")];
        storage.save(&items).unwrap();
        assert_eq!(storage.load().unwrap(), items);
    }

    #[test]
    fn save_leaves_no_tmp_files() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.save(&[sample("a")]).unwrap();
        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().into_string().unwrap();
            assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
        }
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DATA_FILE), "{ not json").unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(matches!(
            storage.load(),
            Err(SnipzError::Serialization(_))
        ));
    }
}
