//! Application layer for czinit.
//!
//! This layer contains:
//! - **Services**: the prober, directory validator, manifest patcher and the
//!   setup orchestrator
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but holds no setup
//! rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{DirectoryValidator, EnvironmentProber, ManifestPatcher, SetupService};

pub use ports::{Filesystem, ProcessRunner, TemplateProvider};

pub use error::{ApplicationError, ProcessFailure};
