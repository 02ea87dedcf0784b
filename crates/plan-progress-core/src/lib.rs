//! Plan Progress Core
//!
//! Computes a completion percentage across planning phases.
//!
//! # Core Operations
//!
//! - **Load**: read the phase manifest (a JSON array of `{"phase": path}`)
//! - **Inspect**: a phase is complete when its file mentions `SUMMARY.md`
//! - **Render**: fixed-width bar, JSON report or markdown table
//! - **Record** (opt-in): rewrite the `**Progress:**` field of a state file
//!
//! # Example
//!
//! ```rust,ignore
//! use plan_progress_core::{ProgressConfig, ProgressTracker};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = ProgressTracker::new(ProgressConfig::new().with_root("."))?;
//! let report = tracker.run()?;
//! println!("{}", plan_progress_core::progress_line(&report, tracker.config().bar()));
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod config;
pub mod error;
pub mod manifest;
pub mod marker;
pub mod render;
pub mod state;
pub mod tracker;
pub mod types;

// Re-exports for convenience
pub use config::{ProgressConfig, DEFAULT_MANIFEST};
pub use error::{ErrorKind, ManifestError, PhaseError, ProgressError, ProgressResult, StateError};
pub use manifest::PhaseManifest;
pub use marker::{CompletionMarker, DEFAULT_MARKER};
pub use render::{
    confirmation, progress_line, render_report, state_value, OutputFormat, ProgressBar,
};
pub use state::{StateUpdate, DEFAULT_STATE_FILE};
pub use tracker::ProgressTracker;
pub use types::{PhaseEntry, PhaseReport, PhaseStatus, Progress, ProgressReport};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for progress reporting
    pub use crate::{
        OutputFormat, ProgressBar, ProgressConfig, ProgressError, ProgressReport,
        ProgressResult, ProgressTracker,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
