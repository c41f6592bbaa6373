//! Errors produced while resolving responsive styles.

use std::path::PathBuf;

use crate::token::Dimension;

/// Convenience alias for results carrying a [`StyleError`].
pub type Result<T> = std::result::Result<T, StyleError>;

/// Error returned when style resolution fails.
///
/// Every variant is a deterministic configuration failure: resolving the same
/// input again reproduces the same error, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// A breakpoint-keyed value omitted the mandatory `base` entry.
    #[error("responsive value for '{prop}' is missing the required 'base' breakpoint")]
    MissingBaseBreakpoint { prop: &'static str },

    /// A layout template identifier outside the known set.
    #[error("unknown layout template '{name}'")]
    UnknownTemplate { name: String },

    /// A token that is not part of its dimension's catalog.
    #[error(
        "invalid token '{token}' for '{dimension}' (allowed: {})",
        .allowed.join(", ")
    )]
    InvalidToken {
        dimension: Dimension,
        token: String,
        allowed: Vec<&'static str>,
    },

    /// A props key that does not name a style dimension.
    #[error("unknown style dimension '{name}'")]
    UnknownDimension { name: String },

    /// Style configuration could not be parsed.
    #[error("failed to parse style configuration: {message}")]
    Parse { message: String },

    /// Style configuration could not be read from disk.
    #[error("failed to read '{}': {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

impl StyleError {
    pub(crate) fn parse(err: impl std::fmt::Display) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_base_display() {
        let err = StyleError::MissingBaseBreakpoint { prop: "gap" };
        let msg = err.to_string();
        assert!(msg.contains("gap"));
        assert!(msg.contains("base"));
    }

    #[test]
    fn test_invalid_token_lists_allowed() {
        let err = StyleError::InvalidToken {
            dimension: Dimension::Align,
            token: "diagonal".to_string(),
            allowed: vec!["start", "center", "end"],
        };
        assert_eq!(
            err.to_string(),
            "invalid token 'diagonal' for 'align' (allowed: start, center, end)"
        );
    }

    #[test]
    fn test_io_error_display() {
        let err = StyleError::Io {
            path: PathBuf::from("/tmp/frame.yaml"),
            message: "not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/frame.yaml"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_parse_helper() {
        let err = StyleError::parse("bad indent");
        assert_eq!(
            err,
            StyleError::Parse {
                message: "bad indent".to_string()
            }
        );
    }
}
