//! Completion marker detection

/// Default completion marker
pub const DEFAULT_MARKER: &str = "SUMMARY.md";

/// Case-insensitive substring marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionMarker {
    raw: String,
    folded: String,
}

impl CompletionMarker {
    /// Create marker. Matching ignores case.
    #[must_use]
    pub fn new(marker: impl Into<String>) -> Self {
        let raw = marker.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// Marker as configured
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when `contents` contains the marker, ignoring case
    #[must_use]
    pub fn is_present(&self, contents: &str) -> bool {
        !self.folded.is_empty() && contents.to_lowercase().contains(&self.folded)
    }
}

impl Default for CompletionMarker {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}
