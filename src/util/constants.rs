// GaitLab - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "GaitLab";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "GaitLab";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Badge text shown in the dashboard header.
pub const DASHBOARD_BADGE: &str = "DASHBOARD_V1.0";

// =============================================================================
// Pipeline run
// =============================================================================

/// Delay in milliseconds observed after each emitted pipeline step,
/// including the last one before the run is considered complete.
pub const STEP_DELAY_MS: u64 = 800;

/// Maximum number of run-progress messages processed by the UI update loop
/// per frame. Any remaining messages are left in the channel and processed
/// on subsequent frames, preventing a burst from stalling the render loop.
/// A standard run emits 7 messages in total, so this cap is never reached
/// in practice.
pub const MAX_RUN_MESSAGES_PER_FRAME: usize = 64;

// =============================================================================
// Media defaults
// =============================================================================

/// Default local file reference for the raw-capture media panel.
pub const DEFAULT_CAPTURE_FILE: &str = "folie.mp4";

/// Placeholder remote reference for the optimised-model media panel.
/// Replaced by the operator (persisted across sessions once changed).
pub const DEFAULT_MODEL_URL: &str = "https://raw.githubusercontent.com/gaitlab/media/main/model.mp4";

// =============================================================================
// Feedback
// =============================================================================

/// Static analysis feedback shown in the dashboard's AI feedback card.
pub const AI_FEEDBACK_TEXT: &str = "\"Neural weights loaded. Anomaly detected in right \
ankle flexion. Correction applied via RL policy.\"";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Initial window size.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1100.0, 760.0];

/// Minimum window size.
pub const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 480.0];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";
