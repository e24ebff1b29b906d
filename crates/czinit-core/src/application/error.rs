//! Application layer errors.
//!
//! These errors represent failures in orchestration, not setup rules.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorKind;

/// Why an external process did not succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessFailure {
    /// The program could not be started (not found, not executable, ...).
    #[error("failed to start: {reason}")]
    Spawn { reason: String },

    /// The program ran and exited non-zero, or was killed by a signal.
    #[error("{}", describe_exit(*code))]
    Exit { code: Option<i32> },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A tool presence check could not be run at all.
    #[error("Could not probe '{program}': {failure}")]
    ProbeFailed {
        program: String,
        #[source]
        failure: ProcessFailure,
    },

    /// A pipeline step failed; later steps were not run.
    #[error("Step '{step}' failed running `{command}`: {reason}")]
    StepFailed {
        step: &'static str,
        command: String,
        reason: String,
    },

    /// The manifest could not be read or written.
    #[error("Failed to update {path}: {reason}")]
    PatchFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The commitlint template could not be loaded.
    #[error("Commitlint template unavailable: {reason}")]
    TemplateUnavailable { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProbeFailed { program, .. } => vec![
                format!("Check that '{}' is installed and on your PATH", program),
            ],
            Self::StepFailed { command, .. } => vec![
                format!("The command `{}` did not succeed", command),
                "Check the command output above for details".into(),
                "The directory may be partially initialised; clean it up before retrying".into(),
            ],
            Self::PatchFailed { path, .. } => vec![
                format!("Check that {} is writable and contains a JSON object", path.display()),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::TemplateUnavailable { .. } => vec![
                "Check the `setup.commitlint_template` path in your configuration".into(),
            ],
        }
    }

    /// Which kind of failure this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ProbeFailed { .. } => ErrorKind::ProbeFailed,
            Self::StepFailed { .. } => ErrorKind::StepFailed,
            Self::PatchFailed { .. } => ErrorKind::PatchFailed,
            Self::FilesystemError { .. } | Self::TemplateUnavailable { .. } => ErrorKind::Internal,
        }
    }
}
