//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CZINIT_<SECTION>__<KEY>`, e.g.
//!    `CZINIT_SETUP__LINT_CONFIG`
//! 3. Config file: `--config-file`, else `<config dir>/czinit/config.toml`
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use czinit_core::domain::DEFAULT_LINT_CONFIG;

const ENV_PREFIX: &str = "CZINIT";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Setup defaults.
    pub setup: SetupConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Lint-config package used when `-c` is not given.
    pub lint_config: String,
    /// Replacement for the bundled `commitlint.config.js`.
    pub commitlint_template: Option<PathBuf>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            lint_config: DEFAULT_LINT_CONFIG.into(),
            commitlint_template: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("setup.lint_config", defaults.setup.lint_config)?
            .set_default("output.no_color", defaults.output.no_color)?;

        builder = match config_file {
            Some(path) => {
                debug!(path = %path.display(), "using explicit config file");
                builder.add_source(
                    File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
                )
            }
            None => match Self::config_path() {
                Some(path) => builder.add_source(
                    File::new(&path.to_string_lossy(), FileFormat::Toml).required(false),
                ),
                None => builder,
            },
        };

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?;

        config
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "czinit", "czinit")
            .map(|d| d.config_dir().join("config.toml"))
    }
}
