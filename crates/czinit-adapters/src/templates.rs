//! Template provider for the files copied into a new project.

use std::path::PathBuf;

use czinit_core::{
    application::{ApplicationError, ports::TemplateProvider},
    error::CzinitResult,
};
use tracing::debug;

/// `commitlint.config.js` shipped inside the binary.
const COMMITLINT_CONFIG: &str = include_str!("../templates/commitlint.config.template");

/// Serves the bundled templates, or a user-supplied replacement file.
#[derive(Debug, Clone, Default)]
pub struct BundledTemplates {
    commitlint_override: Option<PathBuf>,
}

impl BundledTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the file at `path` instead of the bundled commitlint config.
    pub fn with_commitlint_override(mut self, path: Option<PathBuf>) -> Self {
        self.commitlint_override = path;
        self
    }
}

impl TemplateProvider for BundledTemplates {
    fn commitlint_config(&self) -> CzinitResult<String> {
        let Some(path) = &self.commitlint_override else {
            return Ok(COMMITLINT_CONFIG.to_string());
        };

        debug!(path = %path.display(), "loading commitlint template override");
        std::fs::read_to_string(path).map_err(|e| {
            ApplicationError::TemplateUnavailable {
                reason: format!("{}: {}", path.display(), e),
            }
            .into()
        })
    }
}
