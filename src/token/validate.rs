//! Catalog validation.

use super::{Dimension, Token};
use crate::error::{Result, StyleError};

/// Checks `token` against the catalog of `dimension`.
///
/// Returns the catalog's own [`Token`] on success. Unknown tokens are never
/// replaced by a default; the caller gets [`StyleError::InvalidToken`] with
/// the full allowed set.
///
/// # Example
///
/// ```rust
/// use framekit::{validate, Dimension, StyleError};
///
/// assert_eq!(validate(Dimension::Align, "center").unwrap().as_str(), "center");
///
/// let err = validate(Dimension::Align, "diagonal").unwrap_err();
/// assert!(matches!(err, StyleError::InvalidToken { .. }));
/// ```
pub fn validate(dimension: Dimension, token: &str) -> Result<Token> {
    dimension
        .catalog()
        .iter()
        .find(|candidate| **candidate == token)
        .map(|candidate| Token(*candidate))
        .ok_or_else(|| StyleError::InvalidToken {
            dimension,
            token: token.to_string(),
            allowed: dimension.catalog().to_vec(),
        })
}
