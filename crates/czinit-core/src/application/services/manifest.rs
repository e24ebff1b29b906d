//! Manifest Patcher - read, shallow-merge and rewrite `package.json`.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::manifest::{merge_shallow, parse_manifest, render_manifest},
    error::{CzinitError, CzinitResult},
};

/// Applies a top-level patch to a JSON manifest on disk.
pub struct ManifestPatcher<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ManifestPatcher<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Load `path` (missing → `{}`), overwrite the patch's top-level keys and
    /// write it back with two-space indentation.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn patch(&self, path: &Path, patch: &Map<String, Value>) -> CzinitResult<()> {
        let existing = self
            .filesystem
            .read_to_string(path)
            .map_err(|e| patch_failed(path, e))?;
        debug!(exists = existing.is_some(), "loaded manifest");

        let mut manifest = parse_manifest(existing.as_deref())?;
        merge_shallow(&mut manifest, patch);

        self.filesystem
            .write_file(path, &render_manifest(&manifest))
            .map_err(|e| patch_failed(path, e))?;

        debug!(keys = patch.len(), "manifest patched");
        Ok(())
    }
}

fn patch_failed(path: &Path, err: CzinitError) -> CzinitError {
    ApplicationError::PatchFailed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
    .into()
}
