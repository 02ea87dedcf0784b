//! Error types for progress reporting
//!
//! Provides error handling for:
//! - Manifest loading (JSON file → phase list)
//! - Phase inspection (phase file → completion flag)
//! - State file updates (progress line rewrite)

use std::path::PathBuf;

/// Errors while loading the phase manifest
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Manifest file does not exist
    #[error("phase manifest not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// IO error during manifest read
    #[error("io error reading manifest {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not a JSON array of phase objects
    #[error("malformed phase manifest {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },
}

impl ManifestError {
    /// Classify an IO failure on the manifest path
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create malformed-input error for path
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Errors while inspecting a single phase file
#[derive(Debug, thiserror::Error)]
pub enum PhaseError {
    /// Phase file referenced by the manifest does not exist
    #[error("phase file not found: {} (manifest entry {entry})", path.display())]
    NotFound { path: PathBuf, entry: usize },

    /// IO error during phase read
    #[error("io error reading phase file {} (manifest entry {entry})", path.display())]
    Io {
        path: PathBuf,
        entry: usize,
        #[source]
        source: std::io::Error,
    },
}

impl PhaseError {
    /// Classify an IO failure on a phase path. `entry` is 1-based.
    pub fn from_io(path: impl Into<PathBuf>, entry: usize, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path, entry }
        } else {
            Self::Io {
                path,
                entry,
                source,
            }
        }
    }
}

/// Errors while rewriting the state file
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// State file does not exist
    #[error("state file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// State file has no `**Progress:**` field
    #[error("progress field not found in state file {}", path.display())]
    FieldMissing { path: PathBuf },

    /// IO error during state read or write
    #[error("io error on state file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StateError {
    /// Classify an IO failure on the state file path
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Coarse classification used for reporting and exit handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Manifest or phase file missing
    FileNotFound,
    /// Manifest does not decode to the expected shape
    MalformedInput,
    /// Any other filesystem failure
    Io,
    /// State file missing or lacking a progress field
    StateFile,
    /// Invalid configuration values
    Config,
    /// Report could not be rendered
    Render,
}

/// Combined progress error
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Phase(#[from] PhaseError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to render report")]
    Render(#[from] serde_json::Error),
}

impl ProgressError {
    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Manifest(ManifestError::NotFound { .. })
            | Self::Phase(PhaseError::NotFound { .. }) => ErrorKind::FileNotFound,
            Self::Manifest(ManifestError::Malformed { .. }) => ErrorKind::MalformedInput,
            Self::Manifest(ManifestError::Io { .. }) | Self::Phase(PhaseError::Io { .. }) => {
                ErrorKind::Io
            }
            Self::State(_) => ErrorKind::StateFile,
            Self::Config(_) => ErrorKind::Config,
            Self::Render(_) => ErrorKind::Render,
        }
    }

    /// Create configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias for progress operations
pub type ProgressResult<T> = Result<T, ProgressError>;
