//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `czinit-adapters` crate provides implementations.

use std::path::Path;

use crate::application::ProcessFailure;
use crate::domain::Invocation;
use crate::error::CzinitResult;

/// Port for spawning external programs.
///
/// Implemented by:
/// - `czinit_adapters::process::SystemProcessRunner` (production)
/// - `czinit_adapters::process::RecordingRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    /// Run a setup command in `cwd` with inherited standard streams and wait
    /// for it. Non-zero exit is a failure.
    fn run(&self, invocation: &Invocation, cwd: &Path) -> Result<(), ProcessFailure>;

    /// Run a presence check with null standard streams.
    ///
    /// `Ok(true)` on exit 0, `Ok(false)` on any other exit,
    /// `Err(ProcessFailure::Spawn)` if the program could not be started.
    fn probe(&self, invocation: &Invocation) -> Result<bool, ProcessFailure>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `czinit_adapters::filesystem::LocalFilesystem` (production)
/// - `czinit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CzinitResult<()>;

    /// Names of the direct entries of a directory.
    fn list_entries(&self, path: &Path) -> CzinitResult<Vec<String>>;

    /// Read a file; `Ok(None)` if it does not exist.
    fn read_to_string(&self, path: &Path) -> CzinitResult<Option<String>>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> CzinitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the static files copied into a new project.
///
/// Implemented by:
/// - `czinit_adapters::templates::BundledTemplates`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateProvider: Send + Sync {
    /// Contents of `commitlint.config.js`, copied verbatim.
    fn commitlint_config(&self) -> CzinitResult<String>;
}
