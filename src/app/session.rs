// GaitLab - app/session.rs
//
// Session persistence: save and restore the last-entered session id and the
// media panel source overrides between application restarts.
//
// Design principles:
// - Session is saved atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good session.
// - Load errors start the app fresh (corrupt or incompatible sessions are
//   logged and discarded rather than surfaced to the user).
// - The data directory is created on first save; no user action required.
// - The terminal line sequence is NOT persisted: a restart always begins
//   with an empty terminal.
// - Credentials are never persisted; only the session id field survives.

use crate::core::model::MediaSource;
use crate::util::constants::SESSION_FILE_NAME;
use crate::util::error::{GaitLabError, SessionError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment this constant whenever `SessionData` gains or removes fields
/// in a breaking way. Version mismatches discard the session.
pub const SESSION_VERSION: u32 = 1;

// =============================================================================
// On-disk data structure
// =============================================================================

/// Complete persistent session snapshot.
///
/// Missing fields are handled by serde defaults so minor format additions
/// are tolerated without bumping the version.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version: must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    /// OpenCap session id entered on the login screen in the last session.
    /// Restored to prefill the login form.
    #[serde(default)]
    pub last_session_id: String,

    /// Raw-capture media source override (None = application default).
    #[serde(default)]
    pub capture_source: Option<MediaSource>,

    /// Optimised-model media source override (None = application default).
    #[serde(default)]
    pub model_source: Option<MediaSource>,
}

// =============================================================================
// I/O helpers
// =============================================================================

/// Resolve the session file path from the platform data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Save `data` to `path` atomically (write temp → rename).
///
/// Creates all parent directories as needed. The caller decides whether to
/// surface the error (typically it is logged and ignored on exit).
pub fn save(data: &SessionData, path: &Path) -> Result<(), GaitLabError> {
    // Ensure the parent directory exists before writing.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GaitLabError::Io {
            path: parent.to_path_buf(),
            operation: "create session directory",
            source: e,
        })?;
    }

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| GaitLabError::Session(SessionError::Serialise { source: e }))?;

    // Atomic write: write to a sibling temp file then rename.
    // A crash between write and rename loses the new session but never
    // corrupts the previous one (rename is atomic on all supported platforms).
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(|e| GaitLabError::Io {
        path: tmp.clone(),
        operation: "write session temp file",
        source: e,
    })?;

    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        GaitLabError::Io {
            path: path.to_path_buf(),
            operation: "finalise session file",
            source: e,
        }
    })?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

/// Parse and validate session file content.
fn parse(path: &Path, content: &str) -> Result<SessionData, GaitLabError> {
    let data: SessionData =
        serde_json::from_str(content).map_err(|e| SessionError::Deserialise {
            path: path.to_path_buf(),
            source: e,
        })?;

    if data.version != SESSION_VERSION {
        return Err(SessionError::VersionMismatch {
            found: data.version,
            expected: SESSION_VERSION,
        }
        .into());
    }

    Ok(data)
}

/// Load and validate a `SessionData` from `path`.
///
/// Returns `None` on any error (file not found, JSON parse failure,
/// version mismatch). The caller should treat `None` as "start fresh".
pub fn load(path: &Path) -> Option<SessionData> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            // Distinguish "file not found" (normal first run) from other errors.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read session file");
            }
        })
        .ok()?;

    let data = parse(path, &content)
        .map_err(|e| {
            tracing::warn!(error = %e, "Session file rejected: starting fresh");
        })
        .ok()?;

    tracing::info!(path = %path.display(), "Session file loaded");
    Some(data)
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_data() -> SessionData {
        SessionData {
            version: SESSION_VERSION,
            last_session_id: "8821-X".to_string(),
            capture_source: Some(MediaSource::LocalFile(PathBuf::from("/captures/folie.mp4"))),
            model_source: Some(MediaSource::Remote(
                "https://example.test/model.mp4".to_string(),
            )),
        }
    }

    /// Save and load must round-trip all fields accurately.
    #[test]
    fn test_session_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let original = sample_data();

        save(&original, &path).expect("save should succeed");
        let loaded = load(&path).expect("load should return Some after valid save");

        assert_eq!(loaded.version, SESSION_VERSION);
        assert_eq!(loaded.last_session_id, "8821-X");
        assert_eq!(loaded.capture_source, original.capture_source);
        assert_eq!(loaded.model_source, original.model_source);
    }

    /// Load must return None when the file does not exist (first run).
    #[test]
    fn test_session_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nonexistent.json");
        assert!(load(&path).is_none());
    }

    /// Load must return None when the JSON is malformed rather than panicking.
    #[test]
    fn test_session_load_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        assert!(load(&path).is_none());
    }

    /// Load must return None when the version field is wrong.
    #[test]
    fn test_session_load_wrong_version_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut data = sample_data();
        data.version = 99;
        // save() writes whatever version we give it: validation is in load().
        save(&data, &path).unwrap();
        assert!(load(&path).is_none());
    }

    /// Media overrides are optional; a session without them loads cleanly.
    #[test]
    fn test_session_load_tolerates_missing_optional_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, format!("{{\"version\": {SESSION_VERSION}}}")).unwrap();

        let loaded = load(&path).expect("minimal session should load");
        assert_eq!(loaded.last_session_id, "");
        assert!(loaded.capture_source.is_none());
        assert!(loaded.model_source.is_none());
    }

    /// A crash during save (temp file exists) must not corrupt the original.
    #[test]
    fn test_session_save_atomic_does_not_corrupt_original() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        // Write an initial good session.
        let original = sample_data();
        save(&original, &path).unwrap();

        // Simulate a leftover temp file (e.g. from a previous crash).
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, b"garbage").unwrap();

        // Save a new session: should overwrite the temp file and rename correctly.
        let mut updated = sample_data();
        updated.last_session_id = "9034-B".to_string();
        save(&updated, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.last_session_id, "9034-B");
    }
}
