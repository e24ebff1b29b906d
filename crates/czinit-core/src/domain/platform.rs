//! Host platform detection for the `.gitignore` generator.

use std::fmt;

/// Operating systems the `.gitignore` generator has a template for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    Osx,
    Linux,
    Windows,
}

impl HostPlatform {
    /// Platform of the running binary, if the generator knows about it.
    pub fn current() -> Option<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier to a platform.
    ///
    /// Accepts both Rust's `std::env::consts::OS` names and node's
    /// `process.platform` names (`darwin`, `win32`).
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "macos" | "darwin" => Some(Self::Osx),
            "linux" => Some(Self::Linux),
            "windows" | "win32" => Some(Self::Windows),
            _ => None,
        }
    }

    /// Tag passed to the generator.
    pub fn gitignore_tag(self) -> &'static str {
        match self {
            Self::Osx => "osx",
            Self::Linux => "linux",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gitignore_tag())
    }
}
