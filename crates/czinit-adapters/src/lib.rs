//! Infrastructure adapters for czinit.
//!
//! This crate implements the ports defined in `czinit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod process;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingRunner, SystemProcessRunner};
pub use templates::BundledTemplates;
