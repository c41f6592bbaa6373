//! Per-dimension precedence merge.

use std::collections::{BTreeMap, BTreeSet};

use super::props::StyleProps;
use super::set::ResolvedStyleSet;
use crate::error::Result;
use crate::responsive::{normalize, ResolvedResponsive, ResponsiveValue};
use crate::template::{LayoutTemplate, TemplateAssignment};
use crate::token::{validate, Dimension, Token};

/// Where the winning value of a dimension came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Explicit,
    Template,
    Default,
}

/// Resolves style props into a [`ResolvedStyleSet`].
///
/// Precedence is decided independently for each dimension:
///
/// 1. an explicit prop wins,
/// 2. otherwise the layout template's value, if the template sets it,
/// 3. otherwise the dimension's default token, uniform across breakpoints.
///
/// The winner is then normalized across all breakpoints and every token is
/// validated against the dimension's catalog. The first failure aborts the
/// whole resolution; there is no partial result.
///
/// The output contains the requested dimensions plus any dimension that the
/// props or the template set.
///
/// # Example
///
/// ```rust
/// use framekit::{Breakpoint, Dimension, LayoutTemplate, Resolver, StyleProps};
///
/// let props = StyleProps::new().set(Dimension::Gap, "lg");
/// let set = Resolver::new()
///     .resolve(&props, Some(LayoutTemplate::DashboardGrid))
///     .unwrap();
///
/// // Explicit gap beats the template's `md`, the template's grid survives.
/// assert_eq!(set.token(Dimension::Gap, Breakpoint::Xl).unwrap(), "lg");
/// assert_eq!(set.token(Dimension::Grid, Breakpoint::Xl).unwrap(), "auto");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    requested: BTreeSet<Dimension>,
}

impl Resolver {
    /// A resolver for every layout dimension ([`Dimension::LAYOUT`]).
    pub fn new() -> Self {
        Self::only(Dimension::LAYOUT)
    }

    /// A resolver for every dimension, including `size`.
    pub fn all() -> Self {
        Self::only(Dimension::ALL)
    }

    /// A resolver for exactly the given dimensions.
    pub fn only<I: IntoIterator<Item = Dimension>>(dimensions: I) -> Self {
        Self {
            requested: dimensions.into_iter().collect(),
        }
    }

    /// Dimensions always present in the output.
    pub fn requested(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.requested.iter().copied()
    }

    /// Resolves `props`, optionally on top of a layout template.
    ///
    /// # Errors
    ///
    /// - [`StyleError::MissingBaseBreakpoint`](crate::StyleError::MissingBaseBreakpoint)
    ///   if a structured prop lacks `base`
    /// - [`StyleError::InvalidToken`](crate::StyleError::InvalidToken) if any
    ///   token, at any breakpoint, is outside its catalog
    #[tracing::instrument(level = "debug", skip(self, props), fields(explicit = props.len()))]
    pub fn resolve(
        &self,
        props: &StyleProps,
        template: Option<LayoutTemplate>,
    ) -> Result<ResolvedStyleSet> {
        let assignment: Option<&TemplateAssignment> = template.map(LayoutTemplate::expand);

        let mut dimensions = self.requested.clone();
        dimensions.extend(props.dimensions());
        if let Some(assignment) = assignment {
            dimensions.extend(assignment.keys().copied());
        }

        let mut resolved = BTreeMap::new();
        for dimension in dimensions {
            let template_value = assignment.and_then(|a| a.get(&dimension));
            let (source, values) = match (props.get(dimension), template_value) {
                (Some(explicit), _) => (Source::Explicit, resolve_dimension(dimension, explicit)?),
                (None, Some(from_template)) => {
                    (Source::Template, resolve_dimension(dimension, from_template)?)
                }
                (None, None) => {
                    let fallback = ResponsiveValue::single(dimension.default_token().as_str());
                    (Source::Default, resolve_dimension(dimension, &fallback)?)
                }
            };
            tracing::debug!(dimension = %dimension, source = ?source, "resolved dimension");
            resolved.insert(dimension, values);
        }

        Ok(ResolvedStyleSet::new(resolved))
    }

    /// Like [`resolve`](Self::resolve), with the template given by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownTemplate`](crate::StyleError::UnknownTemplate)
    /// for an unrecognized identifier, before anything is resolved.
    pub fn resolve_named(
        &self,
        props: &StyleProps,
        template: Option<&str>,
    ) -> Result<ResolvedStyleSet> {
        let template = template
            .map(str::parse::<LayoutTemplate>)
            .transpose()?;
        self.resolve(props, template)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes one dimension's winning value and validates every breakpoint.
fn resolve_dimension<T: Clone + AsRef<str>>(
    dimension: Dimension,
    input: &ResponsiveValue<T>,
) -> Result<ResolvedResponsive<Token>> {
    normalize(dimension.as_str(), input)?.try_map(|token| validate(dimension, token.as_ref()))
}

/// Resolves `props` over the layout dimensions with [`Resolver::new`].
pub fn resolve(props: &StyleProps, template: Option<LayoutTemplate>) -> Result<ResolvedStyleSet> {
    Resolver::new().resolve(props, template)
}

/// Resolves `props` with a template given by identifier.
pub fn resolve_named(props: &StyleProps, template: Option<&str>) -> Result<ResolvedStyleSet> {
    Resolver::new().resolve_named(props, template)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::breakpoint::Breakpoint;
    use proptest::prelude::*;

    fn dimension() -> impl Strategy<Value = Dimension> {
        prop::sample::select(Dimension::ALL.to_vec())
    }

    fn props() -> impl Strategy<Value = StyleProps> {
        prop::collection::vec(
            dimension().prop_flat_map(|dim| {
                let tokens = prop::sample::select(dim.catalog().to_vec());
                (
                    Just(dim),
                    tokens.clone(),
                    prop::collection::vec(prop::option::of(tokens), Breakpoint::COUNT - 1),
                )
            }),
            0..5,
        )
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(dim, base, rest)| {
                    let value: ResponsiveValue<String> = std::iter::once((Breakpoint::Base, base))
                        .chain(
                            Breakpoint::ALL[1..]
                                .iter()
                                .zip(rest)
                                .filter_map(|(bp, t)| t.map(|t| (*bp, t))),
                        )
                        .map(|(bp, t)| (bp, t.to_string()))
                        .collect();
                    (dim, value)
                })
                .collect()
        })
    }

    fn template() -> impl Strategy<Value = Option<LayoutTemplate>> {
        prop::option::of(prop::sample::select(LayoutTemplate::ALL.to_vec()))
    }

    proptest! {
        #[test]
        fn resolve_is_idempotent(props in props(), template in template()) {
            let first = resolve(&props, template).unwrap();
            let second = resolve(&props, template).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn every_resolved_dimension_is_complete(props in props(), template in template()) {
            let set = resolve(&props, template).unwrap();
            for (dim, values) in set.iter() {
                prop_assert_eq!(values.iter().count(), Breakpoint::COUNT);
                for (_, token) in values.iter() {
                    prop_assert!(dim.allows(token.as_str()));
                }
            }
        }

        #[test]
        fn explicit_props_always_win(props in props(), template in template()) {
            let set = resolve(&props, template).unwrap();
            for dim in props.dimensions() {
                let explicit = props.get(dim).unwrap();
                let expected = normalize(dim.as_str(), explicit).unwrap();
                let actual = set.get(dim).unwrap().map(|t| t.as_str().to_string());
                prop_assert_eq!(actual, expected);
            }
        }
    }
}
