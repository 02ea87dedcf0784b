//! Testing utilities for the plan-progress workspace
//!
//! A temporary planning directory with helpers to write the manifest,
//! phase files and state file.

#![allow(missing_docs)]

use plan_progress_core::{ProgressConfig, DEFAULT_MANIFEST, DEFAULT_STATE_FILE};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Phase file contents that count as complete
pub const COMPLETE_PHASE: &str = "# Phase\n\nPlan executed. See 01-01-SUMMARY.md.\n";

/// Phase file contents that count as pending
pub const PENDING_PHASE: &str = "# Phase\n\nPlan written, not yet executed.\n";

/// State file with a progress field
pub const STATE_TEMPLATE: &str =
    "# Project State\n\n**Current Phase:** 01\n**Progress:** [░░░░░░░░░░] 0%\n**Status:** active\n";

pub struct PlanningFixture {
    dir: TempDir,
}

impl PlanningFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a file relative to the root, creating parent directories
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        self.write_bytes(relative, contents.as_bytes())
    }

    /// Write raw bytes, for files that are not valid UTF-8
    pub fn write_bytes(&self, relative: &str, contents: &[u8]) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Write the default manifest listing `phases` in order
    pub fn write_manifest(&self, phases: &[&str]) -> PathBuf {
        let entries: Vec<Value> = phases.iter().map(|p| json!({ "phase": p })).collect();
        self.write(DEFAULT_MANIFEST, &Value::Array(entries).to_string())
    }

    pub fn write_phase(&self, relative: &str, complete: bool) -> PathBuf {
        self.write(relative, if complete { COMPLETE_PHASE } else { PENDING_PHASE })
    }

    /// Manifest plus one phase file per flag, named `.planning/phases/NN.md`
    pub fn with_phases(completed: &[bool]) -> Self {
        let fixture = Self::new();
        let names: Vec<String> = (1..=completed.len())
            .map(|i| format!(".planning/phases/{i:02}.md"))
            .collect();
        for (name, done) in names.iter().zip(completed) {
            fixture.write_phase(name, *done);
        }
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        fixture.write_manifest(&refs);
        fixture
    }

    pub fn write_state(&self) -> PathBuf {
        self.write(DEFAULT_STATE_FILE, STATE_TEMPLATE)
    }

    pub fn config(&self) -> ProgressConfig {
        ProgressConfig::new().with_root(self.root())
    }
}

impl Default for PlanningFixture {
    fn default() -> Self {
        Self::new()
    }
}
