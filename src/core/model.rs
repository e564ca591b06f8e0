// GaitLab - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies (core depends on std only).
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// =============================================================================
// Screen mode
// =============================================================================

/// Which of the two screens is currently displayed.
///
/// The mode starts at `Login` and moves to `Dashboard` exactly once, via
/// `AppState::launch()`. No transition leads back; `Dashboard` is terminal
/// for the UI session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenMode {
    #[default]
    Login,
    Dashboard,
}

impl ScreenMode {
    /// Human-readable label for logging and the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            ScreenMode::Login => "Login",
            ScreenMode::Dashboard => "Dashboard",
        }
    }
}

impl std::fmt::Display for ScreenMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Terminal line (normalised output of a pipeline run)
// =============================================================================

/// A single emitted pipeline message shown in the terminal panel.
///
/// Lines are append-only: the terminal sequence only grows during an active
/// run and is never truncated or reordered. Ordering is by `id` alone; the
/// timestamp is display metadata.
#[derive(Debug, Clone)]
pub struct TerminalLine {
    /// Monotonically increasing unique ID within the application session.
    pub id: u64,

    /// Wall-clock time the line was emitted by the run worker.
    pub emitted_at: DateTime<Utc>,

    /// Opaque message text, exactly as defined by the pipeline script.
    pub text: String,
}

// =============================================================================
// Run summary
// =============================================================================

/// Summary statistics for a completed pipeline run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of lines emitted by the run.
    pub lines_emitted: usize,

    /// Wall-clock run duration, including the delay after the final line.
    pub duration: std::time::Duration,
}

// =============================================================================
// Run progress (for UI updates)
// =============================================================================

/// Progress messages sent from the run worker thread to the UI thread.
#[derive(Debug, Clone)]
pub enum RunProgress {
    /// A run has started; `total_steps` lines will follow.
    Started { total_steps: usize },

    /// One pipeline line was emitted.
    Line { line: TerminalLine },

    /// The run finished after the final step's delay.
    Completed { summary: RunSummary },
}

// =============================================================================
// Media sources
// =============================================================================

/// Reference shown by one of the dashboard's media panels.
///
/// Sources are opaque display sinks: they are shown to the operator but
/// never opened, probed, or parsed. Whether the referenced media actually
/// exists is not this application's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaSource {
    /// A file on the local machine.
    LocalFile(PathBuf),

    /// A remote reference (typically a raw-content URL).
    Remote(String),
}

impl MediaSource {
    /// Short text shown inside the media placeholder.
    pub fn display_label(&self) -> String {
        match self {
            MediaSource::LocalFile(path) => path.display().to_string(),
            MediaSource::Remote(url) => url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_mode_defaults_to_login() {
        assert_eq!(ScreenMode::default(), ScreenMode::Login);
    }

    #[test]
    fn media_source_labels() {
        let local = MediaSource::LocalFile(PathBuf::from("folie.mp4"));
        assert_eq!(local.display_label(), "folie.mp4");

        let remote = MediaSource::Remote("https://example.test/model.mp4".to_string());
        assert_eq!(remote.display_label(), "https://example.test/model.mp4");
    }
}
