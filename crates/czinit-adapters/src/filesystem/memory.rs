//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeSet, HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use czinit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CzinitError, CzinitResult},
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        {
            let path = path.as_ref();
            let mut inner = self
                .inner
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.files.keys().cloned().collect()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn lock_poisoned(path: &Path) -> CzinitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "memory filesystem lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> CzinitResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn list_entries(&self, path: &Path) -> CzinitResult<Vec<String>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned(path))?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Directory does not exist".into(),
            }
            .into());
        }

        let names: BTreeSet<String> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|candidate| candidate.parent() == Some(path))
            .filter_map(|candidate| candidate.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();

        Ok(names.into_iter().collect())
    }

    fn read_to_string(&self, path: &Path) -> CzinitResult<Option<String>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned(path))?;
        Ok(inner.files.get(path).cloned())
    }

    fn write_file(&self, path: &Path, content: &str) -> CzinitResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_files_and_directories_of_one_level() {
        let fs = MemoryFilesystem::new()
            .with_file("/work/app/README.md", "# app")
            .with_file("/work/app/src/index.js", "");
        fs.create_dir_all(Path::new("/work/app/.git")).unwrap();

        let entries = fs.list_entries(Path::new("/work/app")).unwrap();
        assert_eq!(entries, vec![".git", "README.md", "src"]);
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/work/app")).unwrap();
        assert!(fs.list_entries(Path::new("/work/app")).unwrap().is_empty());
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(
            fs.write_file(Path::new("/missing/package.json"), "{}")
                .is_err()
        );
    }

    #[test]
    fn read_missing_is_none() {
        let fs = MemoryFilesystem::new();
        assert_eq!(
            fs.read_to_string(Path::new("/work/package.json")).unwrap(),
            None
        );
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        other.create_dir_all(Path::new("/work")).unwrap();
        other.write_file(Path::new("/work/a.txt"), "a").unwrap();
        assert_eq!(fs.read_file(Path::new("/work/a.txt")).as_deref(), Some("a"));
        assert_eq!(fs.list_files().len(), 1);
    }
}
