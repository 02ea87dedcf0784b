//! Progress run configuration

use crate::error::{ProgressError, ProgressResult};
use crate::manifest::resolve;
use crate::marker::{CompletionMarker, DEFAULT_MARKER};
use crate::render::{ProgressBar, MAX_BAR_WIDTH};
use crate::state::DEFAULT_STATE_FILE;
use std::path::{Path, PathBuf};

/// Default manifest location, relative to the project root.
/// The file holds JSON despite its extension.
pub const DEFAULT_MANIFEST: &str = ".planning/ROADMAP.md";

/// Configuration for a progress run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Directory relative paths are resolved against
    pub root: PathBuf,
    /// Phase manifest path
    pub manifest: PathBuf,
    /// Completion marker substring
    pub marker: String,
    /// Cells in the reported bar
    pub bar_width: usize,
    /// Cells in the bar written to the state file
    pub state_bar_width: usize,
    /// State file path
    pub state_file: PathBuf,
}

impl ProgressConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With project root
    #[inline]
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// With manifest path
    #[inline]
    #[must_use]
    pub fn with_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.manifest = manifest.into();
        self
    }

    /// With completion marker
    #[inline]
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// With bar width
    #[inline]
    #[must_use]
    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    /// With state file bar width
    #[inline]
    #[must_use]
    pub fn with_state_bar_width(mut self, width: usize) -> Self {
        self.state_bar_width = width;
        self
    }

    /// With state file path
    #[inline]
    #[must_use]
    pub fn with_state_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_file = path.into();
        self
    }

    /// Reject unusable values
    pub fn validate(&self) -> ProgressResult<()> {
        if self.marker.is_empty() {
            return Err(ProgressError::config("completion marker must not be empty"));
        }
        for (name, width) in [
            ("bar width", self.bar_width),
            ("state bar width", self.state_bar_width),
        ] {
            if width == 0 || width > MAX_BAR_WIDTH {
                return Err(ProgressError::config(format!(
                    "{name} must be between 1 and {MAX_BAR_WIDTH}, got {width}"
                )));
            }
        }
        Ok(())
    }

    /// Manifest path resolved against the root
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        resolve(&self.root, &self.manifest)
    }

    /// State file path resolved against the root
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        resolve(&self.root, &self.state_file)
    }

    /// Phase path resolved against the root
    #[must_use]
    pub fn phase_path(&self, phase: &Path) -> PathBuf {
        resolve(&self.root, phase)
    }

    #[must_use]
    pub fn completion_marker(&self) -> CompletionMarker {
        CompletionMarker::new(self.marker.clone())
    }

    #[must_use]
    pub fn bar(&self) -> ProgressBar {
        ProgressBar::new(self.bar_width)
    }

    #[must_use]
    pub fn state_bar(&self) -> ProgressBar {
        ProgressBar::new(self.state_bar_width)
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            marker: DEFAULT_MARKER.to_string(),
            bar_width: 20,
            state_bar_width: 10,
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn defaults_are_valid() {
        let config = ProgressConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.manifest_path(), PathBuf::from("./.planning/ROADMAP.md"));
        assert_eq!(config.state_path(), PathBuf::from("./.planning/STATE.md"));
        assert_eq!(config.bar().width(), 20);
        assert_eq!(config.state_bar().width(), 10);
    }

    #[test]
    fn rejects_zero_width() {
        let err = ProgressConfig::new().with_bar_width(0).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains("bar width"));
    }

    #[test]
    fn rejects_oversized_state_width() {
        let err = ProgressConfig::new()
            .with_state_bar_width(MAX_BAR_WIDTH + 1)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("state bar width"));
    }

    #[test]
    fn rejects_empty_marker() {
        assert!(ProgressConfig::new().with_marker("").validate().is_err());
    }

    #[test]
    fn absolute_manifest_ignores_root() {
        let config = ProgressConfig::new()
            .with_root("/work")
            .with_manifest("/elsewhere/phases.json");
        assert_eq!(config.manifest_path(), PathBuf::from("/elsewhere/phases.json"));
    }
}
