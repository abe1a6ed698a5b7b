//! Error type shared by the parsers, the profile loader and the session store.
//!
//! Unrecognized equipment labels are not errors; they never reach this type.

use std::path::PathBuf;
use thiserror::Error;

/// Failure surfaced to callers of the core.
#[derive(Debug, Error)]
pub enum LiftError {
    /// External response did not match the expected JSON shape.
    #[error("malformed response JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("profile parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Well-formed JSON carrying a value that breaks a model invariant.
    #[error("invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("unknown equipment id '{0}'")]
    UnknownEquipment(String),

    #[error("unknown goal '{0}'")]
    UnknownGoal(String),

    #[error("unknown training context '{0}'")]
    UnknownContext(String),
}

impl LiftError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias for the core.
pub type Result<T> = std::result::Result<T, LiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_json_display() {
        let err: LiftError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("malformed response JSON"));
    }

    #[test]
    fn test_error_invalid_field_display() {
        let err = LiftError::invalid("workouts[0].exercises[1].name", "must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid workouts[0].exercises[1].name: must not be empty"
        );
    }

    #[test]
    fn test_error_io_display_includes_path() {
        let err = LiftError::io(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/tmp/missing.json"));
    }
}
