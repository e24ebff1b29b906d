//! Which existing entries may sit in a directory that becomes a new project.

/// Entries that never conflict with a fresh project: VCS metadata, OS
/// metadata files, license/readme files and IDE markers.
pub const ALLOWED_ENTRIES: [&str; 11] = [
    ".DS_Store",
    "Thumbs.db",
    ".git",
    ".gitignore",
    ".idea",
    "README.md",
    "LICENSE",
    "web.iml",
    ".hg",
    ".hgignore",
    ".hgcheck",
];

/// Outcome of inspecting a target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCheck {
    Safe,
    /// Entries that are not allow-listed, sorted by name.
    Unsafe(Vec<String>),
}

impl DirectoryCheck {
    /// Classify a directory from the names of its entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut conflicts: Vec<String> = entries
            .into_iter()
            .filter(|e| !is_allowed(e.as_ref()))
            .map(|e| e.as_ref().to_string())
            .collect();

        if conflicts.is_empty() {
            return Self::Safe;
        }
        conflicts.sort();
        Self::Unsafe(conflicts)
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe)
    }
}

/// Exact, case-sensitive match against [`ALLOWED_ENTRIES`].
pub fn is_allowed(entry: &str) -> bool {
    ALLOWED_ENTRIES.contains(&entry)
}
