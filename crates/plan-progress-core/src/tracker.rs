//! Progress tracker
//!
//! Reads the manifest, inspects each phase file for the completion marker
//! and builds a [`ProgressReport`]. Runs are stateless: the same inputs
//! always yield the same report.

use crate::config::ProgressConfig;
use crate::error::{PhaseError, ProgressResult};
use crate::manifest::PhaseManifest;
use crate::marker::CompletionMarker;
use crate::render::state_value;
use crate::state::{update_state_file, StateUpdate};
use crate::types::{PhaseEntry, PhaseReport, PhaseStatus, ProgressReport};

/// Computes phase progress for one configuration
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    config: ProgressConfig,
    marker: CompletionMarker,
}

impl ProgressTracker {
    /// Create tracker, validating the configuration
    pub fn new(config: ProgressConfig) -> ProgressResult<Self> {
        config.validate()?;
        let marker = config.completion_marker();
        Ok(Self { config, marker })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Load the manifest and inspect every phase
    pub fn run(&self) -> ProgressResult<ProgressReport> {
        let manifest_path = self.config.manifest_path();
        tracing::debug!(manifest = %manifest_path.display(), "loading phase manifest");

        let manifest = PhaseManifest::load(&manifest_path)?;
        if manifest.is_empty() {
            tracing::warn!(manifest = %manifest_path.display(), "phase manifest lists no phases");
        }

        let phases = manifest
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| self.inspect(i + 1, entry))
            .collect::<Result<Vec<_>, _>>()?;

        let report = ProgressReport::new(self.config.manifest.clone(), phases);
        tracing::info!(
            completed = report.progress.completed,
            total = report.progress.total,
            percent = report.percent,
            "progress computed"
        );
        Ok(report)
    }

    /// Check one phase file. `index` is 1-based.
    pub fn inspect(&self, index: usize, entry: &PhaseEntry) -> Result<PhaseReport, PhaseError> {
        let path = self.config.phase_path(&entry.phase);
        let bytes = std::fs::read(&path).map_err(|e| PhaseError::from_io(&path, index, e))?;
        let contents = String::from_utf8_lossy(&bytes);

        let status = PhaseStatus::from_completed(self.marker.is_present(&contents));
        tracing::debug!(index, phase = %entry.phase.display(), %status, "phase inspected");

        Ok(PhaseReport {
            index,
            phase: entry.phase.clone(),
            name: entry.name.clone(),
            status,
        })
    }

    /// Write the report's progress into the configured state file
    pub fn update_state(&self, report: &ProgressReport) -> ProgressResult<StateUpdate> {
        let value = state_value(report, self.config.state_bar());
        Ok(update_state_file(self.config.state_path(), &value)?)
    }
}
