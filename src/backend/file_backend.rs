use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// A key-value store that keeps every slot in its own file inside a folder.
///
/// Slot names are sanitized to make valid file names, and get a `.json` extension.
#[derive(Clone, Debug, PartialEq)]
pub struct FileBackend {
    backing_folder: PathBuf,
}

impl FileBackend {
    /// Use the given folder. It will be created at the first write if it does not exist yet
    pub fn new(folder: &Path) -> Self {
        Self { backing_folder: PathBuf::from(folder) }
    }

    pub fn folder(&self) -> &Path {
        &self.backing_folder
    }

    /// The path to the file that holds a slot
    pub fn slot_path(&self, key: &str) -> PathBuf {
        let file_name = format!("{}.json", sanitize_filename::sanitize(key));
        self.backing_folder.join(file_name)
    }
}

impl KeyValueStore for FileBackend {
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::trace!("No file for slot {:?} at {:?}", key, path);
                Ok(None)
            },
            Err(source) => Err(StorageError::Read { key: key.to_string(), source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let to_write_error = |source| StorageError::Write { key: key.to_string(), source };

        std::fs::create_dir_all(&self.backing_folder).map_err(to_write_error)?;
        let path = self.slot_path(key);
        std::fs::write(&path, value).map_err(to_write_error)?;
        log::trace!("Written slot {:?} to {:?}", key, path);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_files() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("nested").join("planner");
        let mut backend = FileBackend::new(&folder);

        assert_eq!(backend.get("notion-todos").unwrap(), None);
        backend.set("notion-todos", "[]").unwrap();
        assert_eq!(backend.slot_path("notion-todos"), folder.join("notion-todos.json"));
        assert_eq!(std::fs::read_to_string(folder.join("notion-todos.json")).unwrap(), "[]");
        assert_eq!(backend.get("notion-todos").unwrap().as_deref(), Some("[]"));

        backend.set("notion-todos", "[1]").unwrap();
        assert_eq!(backend.get("notion-todos").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn slot_names_are_sanitized() {
        let backend = FileBackend::new(Path::new("/tmp/planner"));
        let path = backend.slot_path("../escape/me");
        assert_eq!(path.parent(), Some(Path::new("/tmp/planner")));
    }
}
