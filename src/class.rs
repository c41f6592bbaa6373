//! Utility-class names for resolved tokens.
//!
//! This is the static `(dimension, token) -> class` table used by
//! [`ResolvedStyleSet::class_tokens`](crate::ResolvedStyleSet::class_tokens).
//! Breakpoint prefixes are added by the caller.

use std::borrow::Cow;

use crate::token::{Dimension, Token};

/// Grid template used by the `auto` column token.
pub const GRID_AUTO_FIT: &str = "grid-cols-[repeat(auto-fit,minmax(var(--grid-min-width),1fr))]";

/// Grid template used by the `auto-fill` column token.
pub const GRID_AUTO_FILL: &str = "grid-cols-[repeat(auto-fill,minmax(var(--grid-min-width),1fr))]";

/// The class name for `token` on `dimension`, without breakpoint prefix.
///
/// # Example
///
/// ```rust
/// use framekit::{class_name, validate, Dimension};
///
/// let token = validate(Dimension::Height, "min-screen").unwrap();
/// assert_eq!(class_name(Dimension::Height, token), "min-h-screen");
/// ```
pub fn class_name(dimension: Dimension, token: Token) -> Cow<'static, str> {
    let t = token.as_str();
    match (dimension, t) {
        (Dimension::Container, _) => format!("max-w-{}", t).into(),
        (Dimension::Padding, "none") => "p-0".into(),
        (Dimension::Padding, _) => format!("p-{}", t).into(),
        (Dimension::Align, _) => format!("text-{}", t).into(),
        (Dimension::Height, "min-screen") => "min-h-screen".into(),
        (Dimension::Height, "almost-full") => "min-h-[85vh]".into(),
        (Dimension::Height, _) => format!("h-{}", t).into(),
        (Dimension::Grid, "auto") => GRID_AUTO_FIT.into(),
        (Dimension::Grid, "auto-fill") => GRID_AUTO_FILL.into(),
        (Dimension::Grid, _) => format!("grid-cols-{}", t).into(),
        (Dimension::Gap, "none") => "gap-0".into(),
        (Dimension::Gap, _) => format!("gap-{}", t).into(),
        (Dimension::Direction, _) => format!("flex-{}", t).into(),
        (Dimension::Justify, _) => format!("justify-{}", t).into(),
        (Dimension::Items, _) => format!("items-{}", t).into(),
        (Dimension::Size, _) => format!("size-{}", t).into(),
    }
}
