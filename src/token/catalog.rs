//! Static token catalogs, one per dimension.
//!
//! Catalog order is significant: it is the order reported in
//! [`StyleError::InvalidToken`](crate::StyleError::InvalidToken).

pub(crate) const CONTAINER: &[&str] = &[
    "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "full", "screen",
    "none",
];

pub(crate) const SPACING: &[&str] = &["none", "xs", "sm", "md", "lg", "xl", "2xl", "3xl"];

pub(crate) const ALIGN: &[&str] = &["start", "center", "end"];

pub(crate) const HEIGHT: &[&str] = &["auto", "fit", "screen", "min-screen", "almost-full", "full"];

pub(crate) const GRID: &[&str] = &[
    "none", "auto", "auto-fill", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

pub(crate) const DIRECTION: &[&str] = &["row", "row-reverse", "col", "col-reverse"];

pub(crate) const JUSTIFY: &[&str] = &[
    "start", "end", "center", "between", "around", "evenly", "stretch",
];

pub(crate) const ITEMS: &[&str] = &["start", "end", "center", "baseline", "stretch"];

pub(crate) const SIZE: &[&str] = &["xs", "sm", "md", "lg", "xl", "2xl"];
