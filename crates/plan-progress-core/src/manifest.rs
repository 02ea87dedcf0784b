//! Phase manifest loading
//!
//! The manifest is a JSON array of objects, each with a `phase` field naming
//! a phase file. Uses serde_json; shape errors name the offending entry.

use crate::error::ManifestError;
use crate::types::PhaseEntry;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Loaded phase manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseManifest {
    path: PathBuf,
    entries: Vec<PhaseEntry>,
}

impl PhaseManifest {
    /// Read and parse the manifest at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ManifestError::from_io(path, e))?;
        Self::parse(path, &content)
    }

    /// Parse manifest content. `path` is only used for error messages.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, ManifestError> {
        let path = path.into();

        let value: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::malformed(&path, format!("invalid JSON: {e}")))?;

        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(ManifestError::malformed(
                    &path,
                    format!("expected a JSON array of phases, found {}", describe(&other)),
                ))
            }
        };

        let entries = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| parse_entry(&path, i + 1, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { path, entries })
    }

    /// Manifest location
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[PhaseEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_entry(path: &Path, entry: usize, item: Value) -> Result<PhaseEntry, ManifestError> {
    match item.get("phase") {
        Some(Value::String(_)) => {}
        Some(other) => {
            return Err(ManifestError::malformed(
                path,
                format!(
                    "entry {entry}: `phase` must be a string, found {}",
                    describe(other)
                ),
            ))
        }
        None if item.is_object() => {
            return Err(ManifestError::malformed(
                path,
                format!("entry {entry}: missing `phase` field"),
            ))
        }
        None => {
            return Err(ManifestError::malformed(
                path,
                format!("entry {entry}: expected an object, found {}", describe(&item)),
            ))
        }
    }

    serde_json::from_value(item)
        .map_err(|e| ManifestError::malformed(path, format!("entry {entry}: {e}")))
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Resolve a possibly relative path against `root`
#[must_use]
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
