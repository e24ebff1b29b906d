//! Directory Validator - is the target safe to use as a fresh project root?

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{DirectoryCheck, DomainError},
    error::CzinitResult,
};

/// Creates the target directory and checks it only holds allow-listed entries.
pub struct DirectoryValidator {
    filesystem: Box<dyn Filesystem>,
}

impl DirectoryValidator {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Make sure the directory exists (creating parents as needed).
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn prepare(&self, dir: &Path) -> CzinitResult<()> {
        if !self.filesystem.exists(dir) {
            info!("creating project directory");
        }
        self.filesystem.create_dir_all(dir)
    }

    /// Classify the current contents of `dir`.
    pub fn check(&self, dir: &Path) -> CzinitResult<DirectoryCheck> {
        let entries = self.filesystem.list_entries(dir)?;
        debug!(entries = entries.len(), "listed project directory");
        Ok(DirectoryCheck::from_entries(entries))
    }

    /// Fail with the conflicting entries if `dir` is not safe.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn ensure_safe(&self, dir: &Path, name: &str) -> CzinitResult<()> {
        match self.check(dir)? {
            DirectoryCheck::Safe => Ok(()),
            DirectoryCheck::Unsafe(conflicts) => {
                warn!(conflicts = ?conflicts, "directory contains conflicting entries");
                Err(DomainError::DirectoryConflicts {
                    name: name.to_string(),
                    conflicts,
                }
                .into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::error::ErrorKind;

    fn validator_listing(entries: &'static [&'static str]) -> DirectoryValidator {
        let mut fs = MockFilesystem::new();
        fs.expect_list_entries()
            .returning(move |_| Ok(entries.iter().map(|e| e.to_string()).collect()));
        DirectoryValidator::new(Box::new(fs))
    }

    #[test]
    fn empty_directory_is_safe() {
        let validator = validator_listing(&[]);
        assert!(validator.ensure_safe(Path::new("/tmp/myapp"), "myapp").is_ok());
    }

    #[test]
    fn vcs_and_readme_are_safe() {
        let validator = validator_listing(&[".git", "README.md"]);
        assert_eq!(
            validator.check(Path::new("/tmp/myapp")).unwrap(),
            DirectoryCheck::Safe
        );
    }

    #[test]
    fn unknown_file_is_unsafe() {
        let validator = validator_listing(&["README.md", "app.js"]);
        let err = validator
            .ensure_safe(Path::new("/tmp/myapp"), "myapp")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PreconditionMissing);
        assert!(err.to_string().contains("app.js"));
    }

    #[test]
    fn prepare_creates_directory() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/tmp/myapp"))
            .times(1)
            .returning(|_| Ok(()));
        let validator = DirectoryValidator::new(Box::new(fs));
        assert!(validator.prepare(Path::new("/tmp/myapp")).is_ok());
    }
}
