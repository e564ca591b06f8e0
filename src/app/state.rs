// GaitLab - app/state.rs
//
// Application state management. Holds the screen mode, the login form,
// the terminal line sequence, and the media panel sources.
// Owned by the eframe::App implementation; panels communicate requests
// back to the update loop through explicit request flags.

use crate::core::model::{MediaSource, ScreenMode, TerminalLine};
use crate::util::constants;
use std::path::PathBuf;

/// The login form's text fields.
///
/// Purely presentational: nothing is validated and nothing is authenticated.
/// Only the session id survives an application restart (via the persisted
/// session); credentials are never written anywhere.
#[derive(Debug, Default)]
pub struct LoginForm {
    /// Operator login id.
    pub login_id: String,

    /// Operator password (rendered masked, never logged or persisted).
    pub password: String,

    /// OpenCap session identifier.
    pub session_id: String,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Which screen is currently displayed. Starts at `Login`; moves to
    /// `Dashboard` exactly once via `launch()`.
    pub screen: ScreenMode,

    /// Login form field contents.
    pub login: LoginForm,

    /// Terminal line sequence. Append-only: grows during an active run,
    /// never truncated or reordered, reset only on application restart.
    pub terminal: Vec<TerminalLine>,

    /// Whether a pipeline run is currently in progress (mirrored from run
    /// progress messages for rendering; the sequence manager's busy flag
    /// is the authoritative guard).
    pub run_in_progress: bool,

    /// Source reference for the raw-capture media panel.
    pub capture_source: MediaSource,

    /// Source reference for the optimised-model media panel.
    pub model_source: MediaSource,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Set by the terminal panel to request a pipeline run; consumed by the
    /// update loop.
    pub request_run: bool,

    /// Set by the media panel to request a capture-file chooser; consumed
    /// by the update loop.
    pub request_pick_capture: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state: login screen, empty terminal, default media
    /// references.
    pub fn new(debug_mode: bool) -> Self {
        Self {
            screen: ScreenMode::Login,
            login: LoginForm::default(),
            terminal: Vec::new(),
            run_in_progress: false,
            capture_source: MediaSource::LocalFile(PathBuf::from(constants::DEFAULT_CAPTURE_FILE)),
            model_source: MediaSource::Remote(constants::DEFAULT_MODEL_URL.to_string()),
            status_message: "Ready. Enter a session id and launch.".to_string(),
            show_about: false,
            request_run: false,
            request_pick_capture: false,
            debug_mode,
        }
    }

    /// Launch the session: move from the login screen to the dashboard.
    ///
    /// Idempotent: calling this while already on the dashboard has no
    /// observable effect. There is no reverse transition.
    pub fn launch(&mut self) {
        if self.screen == ScreenMode::Dashboard {
            tracing::debug!("Launch requested while already on dashboard; ignoring");
            return;
        }
        self.screen = ScreenMode::Dashboard;
        self.status_message = "Session active. Ready for sequence.".to_string();
        tracing::info!(session_id = %self.login.session_id, "Session launched");
    }

    /// The ID the next terminal line should carry.
    ///
    /// IDs are monotonically increasing across runs within the application
    /// session, continuing from the last appended line.
    pub fn next_line_id(&self) -> u64 {
        self.terminal.last().map(|line| line.id + 1).unwrap_or(0)
    }

    /// Append an emitted line to the terminal sequence.
    pub fn push_line(&mut self, line: TerminalLine) {
        self.terminal.push(line);
    }
}

// =============================================================================
// Unit tests
// =============================================================================
