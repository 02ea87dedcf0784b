//! State file progress update
//!
//! Rewrites the value after the first `**Progress:**` label of a markdown
//! state document. Nothing is written when the label is absent.

use crate::error::StateError;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Default state file, relative to the project root
pub const DEFAULT_STATE_FILE: &str = ".planning/STATE.md";

fn progress_field() -> &'static Regex {
    static FIELD: OnceLock<Regex> = OnceLock::new();
    FIELD.get_or_init(|| {
        Regex::new(r"(?i)(\*\*Progress:\*\*[ \t]*)[^\r\n]*").expect("progress field pattern")
    })
}

/// Outcome of a state file update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateUpdate {
    pub path: PathBuf,
    /// Value previously recorded after the label
    pub previous: String,
    /// Value now recorded after the label
    pub value: String,
}

impl StateUpdate {
    /// Whether the file content changed
    #[inline]
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != self.value
    }
}

/// Replace the progress value in `content`.
///
/// Returns the new content and the previous value, or `None` if there is no
/// progress field.
#[must_use]
pub fn replace_progress(content: &str, value: &str) -> Option<(String, String)> {
    let caps = progress_field().captures(content)?;
    let previous = caps[0][caps[1].len()..].to_string();

    let updated = progress_field()
        .replacen(content, 1, |caps: &Captures<'_>| {
            let label = &caps[1];
            if label.ends_with([' ', '\t']) {
                format!("{label}{value}")
            } else {
                format!("{label} {value}")
            }
        })
        .into_owned();

    Some((updated, previous))
}

/// Rewrite the progress field of the state file at `path`
pub fn update_state_file(path: impl AsRef<Path>, value: &str) -> Result<StateUpdate, StateError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| StateError::from_io(path, e))?;

    let (updated, previous) =
        replace_progress(&content, value).ok_or_else(|| StateError::FieldMissing {
            path: path.to_path_buf(),
        })?;

    let update = StateUpdate {
        path: path.to_path_buf(),
        previous,
        value: value.to_string(),
    };

    if update.changed() {
        std::fs::write(path, updated).map_err(|e| StateError::from_io(path, e))?;
        tracing::info!(path = %path.display(), value, "state file progress updated");
    } else {
        tracing::debug!(path = %path.display(), "state file progress already current");
    }

    Ok(update)
}
