// GaitLab - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.
//
// The run/navigation core has no failure path (every operation succeeds
// or is a guarded no-op), so these types cover the ambient surfaces only:
// configuration and session persistence.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all GaitLab operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum GaitLabError {
    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Session persistence failed.
    Session(SessionError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for GaitLabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Session(e) => write!(f, "Session error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for GaitLabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Session(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for GaitLabError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SessionError> for GaitLabError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors related to config.toml loading.
///
/// Out-of-range values are not errors: validation clamps them to the named
/// bounds and emits a warning instead, so a hand-edited config never
/// prevents startup.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML file could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "cannot parse '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Session errors
// ---------------------------------------------------------------------------

/// Errors related to session.json persistence.
#[derive(Debug)]
pub enum SessionError {
    /// Session data could not be serialised to JSON.
    Serialise { source: serde_json::Error },

    /// Session file content could not be deserialised.
    Deserialise {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Session file schema version does not match this binary's.
    VersionMismatch { found: u32, expected: u32 },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialise { source } => write!(f, "cannot serialise session: {source}"),
            Self::Deserialise { path, source } => {
                write!(f, "cannot parse session file '{}': {source}", path.display())
            }
            Self::VersionMismatch { found, expected } => {
                write!(f, "session version {found} does not match expected {expected}")
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialise { source } => Some(source),
            Self::Deserialise { source, .. } => Some(source),
            Self::VersionMismatch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Display output must carry path context so log lines are actionable.
    #[test]
    fn io_error_display_includes_operation_and_path() {
        let err = GaitLabError::Io {
            path: PathBuf::from("/tmp/config.toml"),
            operation: "read config",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("read config"), "missing operation: {text}");
        assert!(text.contains("/tmp/config.toml"), "missing path: {text}");
    }

    #[test]
    fn version_mismatch_display_names_both_versions() {
        let err = GaitLabError::Session(SessionError::VersionMismatch {
            found: 3,
            expected: 1,
        });
        let text = err.to_string();
        assert!(text.contains('3') && text.contains('1'), "got: {text}");
    }
}
