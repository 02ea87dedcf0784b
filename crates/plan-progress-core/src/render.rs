//! Progress bar and report rendering
//!
//! Three output formats:
//! - `bar`: one progress line
//! - `json`: the full report as pretty-printed JSON
//! - `table`: markdown progress line plus a per-phase status table

use crate::error::{ProgressError, ProgressResult};
use crate::types::ProgressReport;
use std::fmt;
use std::str::FromStr;

/// Filled cell glyph
pub const FILLED_CELL: char = '█';

/// Empty cell glyph
pub const EMPTY_CELL: char = '░';

/// Widest bar accepted
pub const MAX_BAR_WIDTH: usize = 200;

/// Fixed-width bar of filled and empty cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBar {
    width: usize,
}

impl ProgressBar {
    /// Bar of `width` cells, clamped to [`MAX_BAR_WIDTH`]
    #[inline]
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width: width.min(MAX_BAR_WIDTH),
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of filled cells for `percent`, rounded down. Only 100% fills the bar.
    #[must_use]
    pub fn filled_cells(&self, percent: u8) -> usize {
        let percent = usize::from(percent.min(100));
        percent * self.width / 100
    }

    /// Render the bar glyphs (no brackets)
    #[must_use]
    pub fn render(&self, percent: u8) -> String {
        let filled = self.filled_cells(percent);
        let mut out = String::with_capacity(self.width * FILLED_CELL.len_utf8());
        out.extend(std::iter::repeat(FILLED_CELL).take(filled));
        out.extend(std::iter::repeat(EMPTY_CELL).take(self.width - filled));
        out
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new(20)
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Bar,
    Json,
    Table,
}

impl OutputFormat {
    /// All format names, for CLI help
    pub const NAMES: [&'static str; 3] = ["bar", "json", "table"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Json => "json",
            Self::Table => "table",
        }
    }

    /// Whether the human confirmation line follows the rendered report
    #[inline]
    #[must_use]
    pub fn has_confirmation(self) -> bool {
        !matches!(self, Self::Json)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            other => Err(ProgressError::config(format!(
                "unknown output format '{other}' (expected one of: {})",
                Self::NAMES.join(", ")
            ))),
        }
    }
}

/// `Progress: [bar] 50% (1/2 phases)`
#[must_use]
pub fn progress_line(report: &ProgressReport, bar: ProgressBar) -> String {
    format!(
        "Progress: [{}] {}% ({}/{} phases)",
        bar.render(report.percent),
        report.percent,
        report.progress.completed,
        report.progress.total
    )
}

/// `[bar] 50%`, the value written into a state file
#[must_use]
pub fn state_value(report: &ProgressReport, bar: ProgressBar) -> String {
    format!("[{}] {}%", bar.render(report.percent), report.percent)
}

/// Human confirmation sentence for a read-only run
#[must_use]
pub fn confirmation(report: &ProgressReport) -> String {
    let manifest = report.manifest.display();
    if report.progress.is_empty() {
        return format!("No phases listed in {manifest}; reporting 0% complete.");
    }
    let total = report.progress.total;
    let completed = report.progress.completed;
    format!(
        "Checked {total} {} from {manifest}: {completed} complete, {} pending.",
        if total == 1 { "phase" } else { "phases" },
        total - completed
    )
}

/// Render the report body in `format`
pub fn render_report(
    report: &ProgressReport,
    format: OutputFormat,
    bar: ProgressBar,
) -> ProgressResult<String> {
    match format {
        OutputFormat::Bar => Ok(progress_line(report, bar)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(render_table(report, bar)),
    }
}

fn render_table(report: &ProgressReport, bar: ProgressBar) -> String {
    let mut out = format!(
        "**Progress:** [{}] {}/{} phases ({}%)\n\n",
        bar.render(report.percent),
        report.progress.completed,
        report.progress.total,
        report.percent
    );
    out.push_str("| # | Phase | Name | Status |\n");
    out.push_str("|---|-------|------|--------|\n");
    for phase in &report.phases {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            phase.index,
            phase.phase.display(),
            phase.name.as_deref().unwrap_or("-"),
            phase.status
        ));
    }
    out.truncate(out.trim_end().len());
    out
}
