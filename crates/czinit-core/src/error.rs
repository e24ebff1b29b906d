//! Unified error handling for czinit core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, and classifies every failure into one of a closed set of
//! [`ErrorKind`]s so callers can assert on the kind instead of the message.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ErrorCategory as DomainCategory};

/// Root error type for czinit core operations.
#[derive(Debug, Error, Clone)]
pub enum CzinitError {
    /// Violated preconditions and manifest-shape errors.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Failures while probing tools or running the pipeline.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CzinitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in czinit".into(),
                "Please report this issue at: https://github.com/cosecruz/czinit/issues".into(),
            ],
        }
    }

    /// Which kind of failure this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => match e.category() {
                DomainCategory::Precondition => ErrorKind::PreconditionMissing,
                DomainCategory::Manifest => ErrorKind::PatchFailed,
            },
            Self::Application(e) => e.kind(),
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }
}

/// Closed set of failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing argument, missing tool or unsafe directory; nothing was touched.
    PreconditionMissing,
    /// A tool presence check could not be carried out.
    ProbeFailed,
    /// A pipeline step failed to start or exited non-zero.
    StepFailed,
    /// The manifest could not be read, parsed or written.
    PatchFailed,
    Internal,
}

/// Convenient result type alias.
pub type CzinitResult<T> = Result<T, CzinitError>;
