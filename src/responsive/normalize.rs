//! Mobile-first forward fill.

use super::{ResolvedResponsive, ResponsiveValue};
use crate::breakpoint::Breakpoint;
use crate::error::{Result, StyleError};

/// Expands a responsive value into a value for every breakpoint.
///
/// Walks the breakpoints smallest first, carrying the most recent explicit
/// value forward. A uniform value is carried unchanged across the whole scale.
/// `prop` names the value in [`StyleError::MissingBaseBreakpoint`] when a
/// structured value has no `base` entry.
///
/// # Example
///
/// ```rust
/// use framekit::{normalize, Breakpoint, ResponsiveValue};
///
/// let container = ResponsiveValue::at(Breakpoint::Base, "full")
///     .with(Breakpoint::Md, "6xl")
///     .with(Breakpoint::Xl, "7xl");
///
/// let resolved = normalize("container", &container).unwrap();
/// assert_eq!(*resolved.get(Breakpoint::Sm), "full");
/// assert_eq!(*resolved.get(Breakpoint::Lg), "6xl");
/// assert_eq!(*resolved.get(Breakpoint::ThreeXl), "7xl");
/// ```
pub fn normalize<T: Clone>(
    prop: &'static str,
    input: &ResponsiveValue<T>,
) -> Result<ResolvedResponsive<T>> {
    let overrides = match input {
        ResponsiveValue::Single(value) => {
            return Ok(ResolvedResponsive::from_values(std::array::from_fn(|_| {
                value.clone()
            })));
        }
        ResponsiveValue::Breakpoints(map) => map,
    };

    let mut carried = overrides
        .get(&Breakpoint::Base)
        .ok_or(StyleError::MissingBaseBreakpoint { prop })?;

    // from_fn visits indices in ascending order, which is the cascade order
    let values = std::array::from_fn(|i| {
        if let Some(value) = overrides.get(&Breakpoint::ALL[i]) {
            carried = value;
        }
        carried.clone()
    });

    Ok(ResolvedResponsive::from_values(values))
}
