//! Explicit style props.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleError};
use crate::responsive::ResponsiveValue;
use crate::token::Dimension;

/// Explicit, per-dimension style props supplied by a caller.
///
/// Values are unvalidated text; validation happens during resolution. Keys
/// deserialize from dimension names, and unknown names are rejected.
///
/// # Example
///
/// ```rust
/// use framekit::{Breakpoint, Dimension, ResponsiveValue, StyleProps};
///
/// let props = StyleProps::new()
///     .set(Dimension::Gap, "lg")
///     .set(
///         Dimension::Container,
///         ResponsiveValue::at(Breakpoint::Base, "full").with(Breakpoint::Md, "6xl"),
///     );
///
/// assert!(props.contains(Dimension::Gap));
/// assert_eq!(props.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleProps {
    values: BTreeMap<Dimension, ResponsiveValue<String>>,
}

impl StyleProps {
    /// Creates empty props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a dimension, returning the updated props for chaining.
    pub fn set<V: Into<ResponsiveValue<String>>>(mut self, dimension: Dimension, value: V) -> Self {
        self.insert(dimension, value);
        self
    }

    /// Sets a dimension in place, replacing any previous value.
    pub fn insert<V: Into<ResponsiveValue<String>>>(&mut self, dimension: Dimension, value: V) {
        self.values.insert(dimension, value.into());
    }

    /// Sets a dimension only when `value` is present.
    pub fn set_opt(mut self, dimension: Dimension, value: Option<ResponsiveValue<String>>) -> Self {
        if let Some(value) = value {
            self.values.insert(dimension, value);
        }
        self
    }

    /// The explicit value for `dimension`, if any.
    pub fn get(&self, dimension: Dimension) -> Option<&ResponsiveValue<String>> {
        self.values.get(&dimension)
    }

    /// Returns `true` if `dimension` was set explicitly.
    pub fn contains(&self, dimension: Dimension) -> bool {
        self.values.contains_key(&dimension)
    }

    /// Dimensions set explicitly, in dimension order.
    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.values.keys().copied()
    }

    /// Number of explicitly set dimensions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no dimension is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses props from a JSON object keyed by dimension name.
    ///
    /// ```rust
    /// use framekit::{Dimension, StyleProps};
    ///
    /// let props = StyleProps::from_json_str(
    ///     r#"{ "gap": "lg", "container": { "base": "full", "md": "6xl" } }"#,
    /// ).unwrap();
    /// assert!(props.contains(Dimension::Container));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(StyleError::parse)
    }

    /// Parses props from a YAML mapping keyed by dimension name.
    ///
    /// Numeric grid columns must be quoted (`grid: "3"`).
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(StyleError::parse)
    }
}

impl FromIterator<(Dimension, ResponsiveValue<String>)> for StyleProps {
    fn from_iter<I: IntoIterator<Item = (Dimension, ResponsiveValue<String>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
