//! czinit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for czinit, a tool
//! that prepares a directory for conventional commits (commitizen,
//! commitlint, standard-version).
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            czinit-cli (CLI)             │
//! │     parses args, loads config, prints   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  EnvironmentProber, DirectoryValidator, │
//! │     ManifestPatcher, SetupService       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ ProcessRunner, Filesystem, Templates    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     czinit-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use czinit_core::prelude::*;
//! # fn adapters() -> (Box<dyn ProcessRunner>, Box<dyn ProcessRunner>, Box<dyn Filesystem>, Box<dyn TemplateProvider>) { unimplemented!() }
//! # fn main() -> CzinitResult<()> {
//! let (probe_runner, runner, filesystem, templates) = adapters();
//!
//! let environment = EnvironmentProber::new(probe_runner).probe();
//! let settings = RunSettings::from_parts(
//!     SetupRequest {
//!         project_directory: "/work/myapp".into(),
//!         non_interactive: true,
//!         lint_config_package: None,
//!     },
//!     environment,
//! )?;
//!
//! SetupService::new(runner, filesystem, templates).run(&settings, |step| {
//!     println!("done: {step}");
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DirectoryValidator, EnvironmentProber, ManifestPatcher, SetupService,
        ports::{Filesystem, ProcessRunner, TemplateProvider},
    };
    pub use crate::domain::{
        DirectoryCheck, EnvironmentReport, HostPlatform, Invocation, PackageManagerKind,
        RunSettings, SetupPlan, SetupRequest, SetupStep,
    };
    pub use crate::error::{CzinitError, CzinitResult, ErrorKind};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
