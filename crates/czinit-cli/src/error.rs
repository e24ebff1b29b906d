//! Error handling for the czinit CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use czinit_core::{
    domain::DomainError,
    error::{CzinitError, ErrorKind},
};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `czinit-core` or an adapter.
    #[error("{0}")]
    Core(#[from] CzinitError),

    /// A configuration file or environment value could not be used.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O operation outside the pipeline failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Core(err.into())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),
            Self::ConfigError { .. } => {
                let mut suggestions = vec!["Check the file passed with --config-file".to_string()];
                if let Some(path) = crate::config::AppConfig::config_path() {
                    suggestions.push(format!("Check your config file at {}", path.display()));
                }
                suggestions.push("Check CZINIT_* environment variables".into());
                suggestions
            }
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and log severity.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.kind() {
                ErrorKind::PreconditionMissing => ErrorCategory::UserError,
                ErrorKind::ProbeFailed | ErrorKind::StepFailed | ErrorKind::PatchFailed => {
                    ErrorCategory::SetupFailure
                }
                ErrorKind::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every failure exits with `1`; the category only changes how the
    /// error is logged and styled.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Whether the usage line should follow the message.
    ///
    /// True for the errors a user fixes by changing how czinit is invoked
    /// or what is installed.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            Self::Core(CzinitError::Domain(
                DomainError::MissingProjectDirectory
                    | DomainError::NoPackageManager
                    | DomainError::NoVersionControl
            ))
        )
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "  {} {}\n",
                    "\u{2192}".dimmed(), // →
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        for suggestion in self.suggestions() {
            output.push_str(&format!("{}\n", suggestion.yellow()));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("{self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        for s in self.suggestions() {
            out.push_str(&format!("{s}\n"));
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::SetupFailure => tracing::error!("Setup failed: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing argument, missing tool, unsafe directory.
    UserError,
    /// A pipeline step or the manifest patch failed.
    SetupFailure,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert `std::io` results into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use czinit_core::application::{ApplicationError, ProcessFailure};
    use std::io;

    fn conflicts() -> CliError {
        DomainError::DirectoryConflicts {
            name: "myapp".into(),
            conflicts: vec!["app.js".into()],
        }
        .into()
    }

    #[test]
    fn every_error_exits_one() {
        let errors = vec![
            CliError::from(DomainError::MissingProjectDirectory),
            conflicts(),
            CliError::Core(
                ApplicationError::StepFailed {
                    step: "install dependencies",
                    command: "npm install --save-dev husky".into(),
                    reason: ProcessFailure::Exit { code: Some(1) }.to_string(),
                }
                .into(),
            ),
            CliError::ConfigError {
                message: "x".into(),
                source: None,
            },
            CliError::from(io::Error::other("e")),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn missing_directory_message_and_usage() {
        let err = CliError::from(DomainError::MissingProjectDirectory);
        assert_eq!(err.to_string(), "Please specify the project directory");
        assert!(err.shows_usage());
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    #[test]
    fn missing_tools_show_usage() {
        assert!(CliError::from(DomainError::NoPackageManager).shows_usage());
        assert!(CliError::from(DomainError::NoVersionControl).shows_usage());
        assert!(!conflicts().shows_usage());
    }

    #[test]
    fn conflicts_are_listed_in_plain_output() {
        let out = conflicts().format_plain(false);
        assert!(out.starts_with("The directory myapp contains files that could conflict:"));
        assert!(out.contains("\n  app.js\n"));
        assert!(out.ends_with(
            "Either try using a new directory name, or remove the files listed above.\n"
        ));
    }

    #[test]
    fn verbose_plain_output_shows_cause_chain() {
        let err = CliError::IoError {
            message: "resolving the current directory".into(),
            source: io::Error::other("gone"),
        };
        assert!(err.format_plain(true).contains("Caused by: gone"));
        assert!(!err.format_plain(false).contains("Caused by"));
    }

    #[test]
    fn anyhow_errors_become_config_errors() {
        let err = CliError::from(anyhow::anyhow!("bad toml"));
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn step_failure_is_setup_failure() {
        let err = CliError::Core(
            ApplicationError::PatchFailed {
                path: "/w/package.json".into(),
                reason: "denied".into(),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::SetupFailure);
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
