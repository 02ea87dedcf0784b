//! Core types for phase progress

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One manifest entry
///
/// Only `phase` is required; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseEntry {
    /// Path to the phase-description file
    pub phase: PathBuf,
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PhaseEntry {
    /// Create entry for a phase path
    #[inline]
    #[must_use]
    pub fn new(phase: impl Into<PathBuf>) -> Self {
        Self {
            phase: phase.into(),
            name: None,
        }
    }

    /// With display name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Completion status of a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseStatus {
    Complete,
    Pending,
}

impl PhaseStatus {
    #[inline]
    #[must_use]
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            Self::Complete
        } else {
            Self::Pending
        }
    }

    #[inline]
    #[must_use]
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => f.write_str("Complete"),
            Self::Pending => f.write_str("Pending"),
        }
    }
}

/// Inspection result for one phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseReport {
    /// 1-based position in the manifest
    pub index: usize,
    /// Phase path as written in the manifest
    pub phase: PathBuf,
    /// Display name, if the manifest gave one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub status: PhaseStatus,
}

/// Completed/total counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Create progress counts. `completed` is clamped to `total`.
    #[inline]
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed: completed.min(total),
            total,
        }
    }

    /// Count completed phases
    #[must_use]
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = PhaseStatus>,
    {
        statuses
            .into_iter()
            .fold(Self::default(), |acc, status| Self {
                completed: acc.completed + usize::from(status.is_complete()),
                total: acc.total + 1,
            })
    }

    /// True when the manifest listed no phases
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Integer percentage, floor(100 * completed / total); 0 for an empty list
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = self.completed * 100 / self.total;
        u8::try_from(pct).unwrap_or(100)
    }
}

/// Full result of one progress run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    /// Manifest the phases were read from
    pub manifest: PathBuf,
    pub phases: Vec<PhaseReport>,
    #[serde(flatten)]
    pub progress: Progress,
    pub percent: u8,
}

impl ProgressReport {
    /// Build report from inspected phases
    #[must_use]
    pub fn new(manifest: impl Into<PathBuf>, phases: Vec<PhaseReport>) -> Self {
        let progress = Progress::from_statuses(phases.iter().map(|p| p.status));
        Self {
            manifest: manifest.into(),
            phases,
            progress,
            percent: progress.percent(),
        }
    }
}
