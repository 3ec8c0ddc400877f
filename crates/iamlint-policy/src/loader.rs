//! # Loader — File and Format Checks
//!
//! First stage of the pipeline. Confirms the input path exists and carries
//! a `.json` extension, then parses the bytes into an untyped
//! [`serde_json::Value`]. The loader makes no claim about the shape of the
//! parsed value — a bare string or number is a successful load; shape is
//! the structural checker's concern.
//!
//! The extension check runs before any read: a file of perfectly valid
//! JSON named `policy.txt` is rejected without opening it.

use std::path::Path;

use serde_json::Value;

use crate::error::PolicyError;

/// Load and parse a policy document from disk.
///
/// # Errors
///
/// Returns `PolicyError::FileNotFound` if `path` does not exist,
/// `PolicyError::NotJsonExtension` if its extension is not `.json`, and
/// `PolicyError::MalformedJson` if the contents do not parse as JSON.
pub fn load_document(path: &Path) -> Result<Value, PolicyError> {
    if !path.exists() {
        return Err(PolicyError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(PolicyError::NotJsonExtension {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| PolicyError::MalformedJson {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;

    serde_json::from_str(&content).map_err(|e| PolicyError::MalformedJson {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
