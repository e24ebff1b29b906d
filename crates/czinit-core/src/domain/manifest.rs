//! The `package.json` patch and its shallow merge.
//!
//! The merge is deliberately shallow: a top-level key present in the patch
//! replaces the existing value wholesale. Pre-existing `scripts` or `config`
//! entries are therefore discarded, not combined.

use serde_json::{Map, Value, json};

use crate::domain::error::DomainError;

/// File name of the manifest inside the project directory.
pub const MANIFEST_FILE: &str = "package.json";

/// File name the commitlint template is copied to.
pub const COMMITLINT_CONFIG_FILE: &str = "commitlint.config.js";

/// Scopes accepted by the `scope-enum` commitlint rule.
pub const ALLOWED_SCOPES: [&str; 8] = [
    "config", "deps", "info", "module", "package", "release", "script", "utility",
];

/// Path commitizen loads its adapter from.
pub const COMMITIZEN_PATH: &str = "./node_modules/cz-conventional-changelog";

/// Top-level keys written into the manifest for a given lint-config package.
pub fn commit_tooling_patch(lint_config: &str) -> Map<String, Value> {
    let patch = json!({
        "config": {
            "commitizen": { "path": COMMITIZEN_PATH },
            "commitLint": {
                "extends": [lint_config],
                "rules": {
                    "scope-enum": [2, "always", ALLOWED_SCOPES]
                }
            }
        },
        "scripts": {
            "commit": "git-cz",
            "commitmsg": "commitlint -e",
            "release": "standard-version"
        }
    });

    patch.as_object().cloned().unwrap_or_default()
}

/// Parse manifest text; `None` (no file) is an empty object.
pub fn parse_manifest(text: Option<&str>) -> Result<Map<String, Value>, DomainError> {
    let Some(text) = text else {
        return Ok(Map::new());
    };

    let value: Value =
        serde_json::from_str(text).map_err(|e| DomainError::InvalidManifest {
            reason: e.to_string(),
        })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(DomainError::ManifestNotAnObject {
            found: json_type_name(&other),
        }),
    }
}

/// Shallow merge: every key of `patch` overwrites the same key in `base`.
///
/// Existing keys keep their position; new keys are appended in patch order.
pub fn merge_shallow(base: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, value) in patch {
        base.insert(key.clone(), value.clone());
    }
}

/// Render a manifest the way npm writes it: two-space indent, trailing newline.
pub fn render_manifest(manifest: &Map<String, Value>) -> String {
    // Serializing a map of `Value`s cannot fail.
    let mut text = serde_json::to_string_pretty(manifest).unwrap_or_else(|_| "{}".into());
    text.push('\n');
    text
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
