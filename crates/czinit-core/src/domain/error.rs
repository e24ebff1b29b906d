// ============================================================================
// domain/error.rs - SETUP PRECONDITIONS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (settings are rebuilt from scratch on every run)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Preconditions (checked before any filesystem mutation)
    // ========================================================================
    #[error("Please specify the project directory")]
    MissingProjectDirectory,

    #[error("Project directory must be absolute: {path}")]
    RelativeProjectDirectory { path: PathBuf },

    #[error("Cannot derive a project name from '{path}'")]
    InvalidProjectName { path: PathBuf },

    #[error("No node package manager detected. Ensure node and npm/yarn is installed")]
    NoPackageManager,

    #[error("Git was not detected. Ensure git is installed")]
    NoVersionControl,

    #[error("The directory {name} contains files that could conflict: {}", conflicts.join(", "))]
    DirectoryConflicts { name: String, conflicts: Vec<String> },

    // ========================================================================
    // Manifest shape
    // ========================================================================
    #[error("Manifest is not valid JSON: {reason}")]
    InvalidManifest { reason: String },

    #[error("Manifest must be a JSON object, found {found}")]
    ManifestNotAnObject { found: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingProjectDirectory => vec![
                "Pass the directory to set up as the first argument".into(),
                "Example: czinit my-app --yes".into(),
            ],
            Self::NoPackageManager => vec![
                "Install node together with npm, or install yarn".into(),
                "Check that `npm --version` or `yarnpkg --version` works in this shell".into(),
            ],
            Self::NoVersionControl => vec![
                "Install git and make sure it is on your PATH".into(),
                "Check that `git --version` works in this shell".into(),
            ],
            Self::DirectoryConflicts { conflicts, .. } => {
                let mut suggestions: Vec<String> =
                    conflicts.iter().map(|entry| format!("  {entry}")).collect();
                suggestions.push(
                    "Either try using a new directory name, or remove the files listed above."
                        .into(),
                );
                suggestions
            }
            Self::InvalidManifest { .. } | Self::ManifestNotAnObject { .. } => vec![
                "Fix or remove package.json and run czinit again".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidManifest { .. } | Self::ManifestNotAnObject { .. } => {
                ErrorCategory::Manifest
            }
            _ => ErrorCategory::Precondition,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Precondition,
    Manifest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicts_are_listed_in_suggestions() {
        let err = DomainError::DirectoryConflicts {
            name: "myapp".into(),
            conflicts: vec!["app.js".into(), "src".into()],
        };
        let suggestions = err.suggestions();
        assert_eq!(suggestions[0], "  app.js");
        assert_eq!(suggestions[1], "  src");
        assert!(suggestions.last().unwrap().contains("new directory name"));
    }

    #[test]
    fn conflict_message_names_directory() {
        let err = DomainError::DirectoryConflicts {
            name: "myapp".into(),
            conflicts: vec!["app.js".into()],
        };
        assert!(err.to_string().contains("myapp"));
        assert!(err.to_string().contains("app.js"));
    }

    #[test]
    fn manifest_errors_have_manifest_category() {
        let err = DomainError::ManifestNotAnObject { found: "array" };
        assert_eq!(err.category(), ErrorCategory::Manifest);
        assert_eq!(
            DomainError::NoPackageManager.category(),
            ErrorCategory::Precondition
        );
    }
}
