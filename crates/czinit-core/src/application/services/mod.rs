//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! the steps of a setup run.

pub mod directory;
pub mod environment;
pub mod manifest;
pub mod setup;

pub use directory::DirectoryValidator;
pub use environment::EnvironmentProber;
pub use manifest::ManifestPatcher;
pub use setup::SetupService;
