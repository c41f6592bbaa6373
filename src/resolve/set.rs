//! The resolver's output.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::breakpoint::Breakpoint;
use crate::class::class_name;
use crate::responsive::ResolvedResponsive;
use crate::token::{Dimension, Token};

/// Fully resolved, validated tokens for every requested dimension.
///
/// Immutable once built. Iteration is in dimension declaration order, so
/// anything derived from it (serialization, class lists) is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyleSet {
    dimensions: BTreeMap<Dimension, ResolvedResponsive<Token>>,
}

impl ResolvedStyleSet {
    pub(crate) fn new(dimensions: BTreeMap<Dimension, ResolvedResponsive<Token>>) -> Self {
        Self { dimensions }
    }

    /// The resolved values for `dimension`, if it was resolved.
    pub fn get(&self, dimension: Dimension) -> Option<&ResolvedResponsive<Token>> {
        self.dimensions.get(&dimension)
    }

    /// The token for `dimension` at `breakpoint`, if the dimension was resolved.
    pub fn token(&self, dimension: Dimension, breakpoint: Breakpoint) -> Option<Token> {
        self.get(dimension).map(|values| *values.get(breakpoint))
    }

    /// Returns `true` if `dimension` was resolved.
    pub fn contains(&self, dimension: Dimension) -> bool {
        self.dimensions.contains_key(&dimension)
    }

    /// Iterates resolved dimensions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &ResolvedResponsive<Token>)> + '_ {
        self.dimensions.iter().map(|(dim, values)| (*dim, values))
    }

    /// Resolved dimensions in declaration order.
    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.dimensions.keys().copied()
    }

    /// Number of resolved dimensions.
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns `true` if no dimension was resolved.
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Every dimension's token at a single breakpoint.
    pub fn at(&self, breakpoint: Breakpoint) -> BTreeMap<Dimension, Token> {
        self.iter()
            .map(|(dim, values)| (dim, *values.get(breakpoint)))
            .collect()
    }

    /// Utility-class tokens for the whole set.
    ///
    /// Dimensions appear in declaration order; within a dimension a class is
    /// emitted at `base` and at each breakpoint where the token changes, with
    /// a `"{breakpoint}:"` prefix above `base`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use framekit::{Breakpoint, Dimension, Resolver, ResponsiveValue, StyleProps};
    ///
    /// let props = StyleProps::new().set(
    ///     Dimension::Container,
    ///     ResponsiveValue::at(Breakpoint::Base, "full")
    ///         .with(Breakpoint::Md, "6xl")
    ///         .with(Breakpoint::Xl, "7xl"),
    /// );
    /// let set = Resolver::only([Dimension::Container])
    ///     .resolve(&props, None)
    ///     .unwrap();
    ///
    /// assert_eq!(set.class_string(), "max-w-full md:max-w-6xl xl:max-w-7xl");
    /// ```
    pub fn class_tokens(&self) -> Vec<String> {
        let mut classes = Vec::new();
        for (dim, values) in self.iter() {
            for (bp, token) in values.changes() {
                let class = class_name(dim, *token);
                if bp == Breakpoint::Base {
                    classes.push(class.into_owned());
                } else {
                    classes.push(format!("{}:{}", bp, class));
                }
            }
        }
        classes
    }

    /// [`class_tokens`](Self::class_tokens) joined with single spaces.
    pub fn class_string(&self) -> String {
        self.class_tokens().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responsive::{normalize, ResponsiveValue};
    use crate::token::validate;

    fn resolved(dim: Dimension, input: ResponsiveValue<&'static str>) -> ResolvedResponsive<Token> {
        normalize(dim.as_str(), &input)
            .unwrap()
            .try_map(|t| validate(dim, t))
            .unwrap()
    }

    fn sample() -> ResolvedStyleSet {
        ResolvedStyleSet::new(BTreeMap::from([
            (
                Dimension::Gap,
                resolved(
                    Dimension::Gap,
                    ResponsiveValue::at(Breakpoint::Base, "sm").with(Breakpoint::Lg, "xl"),
                ),
            ),
            (Dimension::Align, resolved(Dimension::Align, "center".into())),
        ]))
    }

    #[test]
    fn test_token_lookup() {
        let set = sample();
        assert_eq!(set.token(Dimension::Gap, Breakpoint::Md).unwrap(), "sm");
        assert_eq!(set.token(Dimension::Gap, Breakpoint::TwoXl).unwrap(), "xl");
        assert_eq!(set.token(Dimension::Grid, Breakpoint::Base), None);
    }

    #[test]
    fn test_iteration_follows_dimension_order() {
        let dims: Vec<_> = sample().dimensions().collect();
        assert_eq!(dims, vec![Dimension::Align, Dimension::Gap]);
    }

    #[test]
    fn test_at_breakpoint_snapshot() {
        let snapshot = sample().at(Breakpoint::Xl);
        assert_eq!(snapshot[&Dimension::Gap], "xl");
        assert_eq!(snapshot[&Dimension::Align], "center");
    }

    #[test]
    fn test_class_tokens() {
        assert_eq!(
            sample().class_tokens(),
            vec!["text-center", "gap-sm", "lg:gap-xl"]
        );
    }

    #[test]
    fn test_serializes_nested_maps() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["gap"]["md"], "sm");
        assert_eq!(json["gap"]["3xl"], "xl");
        assert_eq!(json["align"]["base"], "center");
    }
}
