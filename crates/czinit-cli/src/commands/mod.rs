//! Command handlers.

pub mod setup;
