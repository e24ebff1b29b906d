// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for czinit.
//!
//! This module contains pure setup logic with no I/O. Processes, the
//! filesystem and the bundled template are reached through ports (traits)
//! defined in the application layer.
//!
//! - **No async**: the pipeline is strictly sequential
//! - **No I/O**: no filesystem, network, or process calls
//! - **Immutable settings**: [`RunSettings`] is built once and only read

pub mod directory;
pub mod error;
pub mod manifest;
pub mod plan;
pub mod platform;
pub mod settings;

pub use directory::{ALLOWED_ENTRIES, DirectoryCheck};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{COMMITLINT_CONFIG_FILE, MANIFEST_FILE};
pub use plan::{SetupPlan, SetupStep};
pub use platform::HostPlatform;
pub use settings::{
    DEFAULT_LINT_CONFIG, EnvironmentReport, IgnoreGenerator, Invocation, PackageManager,
    PackageManagerKind, RunSettings, SetupRequest,
};
