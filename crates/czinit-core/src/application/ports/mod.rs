//! Application ports (traits) for external dependencies.
//!
//! Ports define interfaces that the application needs from the outside
//! world. Adapters in `czinit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ProcessRunner`: spawning external tools
//!   - `Filesystem`: file operations
//!   - `TemplateProvider`: bundled template contents

pub mod output;

pub use output::{Filesystem, ProcessRunner, TemplateProvider};

#[cfg(test)]
pub use output::{MockFilesystem, MockProcessRunner, MockTemplateProvider};
