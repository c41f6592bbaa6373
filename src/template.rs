//! Predefined layout templates.
//!
//! A template is a named, partial assignment of layout dimensions. It only
//! supplies values; merging with explicit props happens in the resolver, so a
//! caller can pick a template and still override any single dimension.
//!
//! | Template | Assignment |
//! |----------|------------|
//! | `default` | nothing |
//! | `dashboard-grid` | grid `auto`, gap `md` |
//! | `stats-row` | grid `1` / sm `2` / lg `4`, gap `md` |
//! | `sidebar-content` | direction `row`, justify `start`, gap `lg` |
//! | `header-content` | direction `col`, gap `md` |
//! | `three-column` | grid `1` / lg `3`, gap `lg` |
//! | `card-grid` | grid `1` / sm `2` / lg `3`, gap `lg` |
//! | `masonry` | grid `auto-fill`, gap `sm`, items `start` |
//! | `flex-row` | direction `row`, items `center`, gap `md` |
//! | `flex-col` | direction `col`, gap `md` |

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::breakpoint::Breakpoint;
use crate::error::{Result, StyleError};
use crate::responsive::ResponsiveValue;
use crate::token::Dimension;

/// Dimension values implied by a template.
pub type TemplateAssignment = BTreeMap<Dimension, ResponsiveValue<&'static str>>;

/// A named layout shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LayoutTemplate {
    /// No special layout.
    #[default]
    Default,
    /// Auto-fitting grid for dashboard cards.
    DashboardGrid,
    /// Horizontal stats strip.
    StatsRow,
    /// Sidebar beside main content.
    SidebarContent,
    /// Header above main content.
    HeaderContent,
    /// Side, main, side.
    ThreeColumn,
    /// Responsive card grid.
    CardGrid,
    /// Masonry-style layout.
    Masonry,
    /// Horizontal flex layout.
    FlexRow,
    /// Vertical flex layout.
    FlexCol,
}

impl LayoutTemplate {
    /// Every template, in declaration order.
    pub const ALL: [LayoutTemplate; 10] = [
        LayoutTemplate::Default,
        LayoutTemplate::DashboardGrid,
        LayoutTemplate::StatsRow,
        LayoutTemplate::SidebarContent,
        LayoutTemplate::HeaderContent,
        LayoutTemplate::ThreeColumn,
        LayoutTemplate::CardGrid,
        LayoutTemplate::Masonry,
        LayoutTemplate::FlexRow,
        LayoutTemplate::FlexCol,
    ];

    /// Template identifier as used in props.
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutTemplate::Default => "default",
            LayoutTemplate::DashboardGrid => "dashboard-grid",
            LayoutTemplate::StatsRow => "stats-row",
            LayoutTemplate::SidebarContent => "sidebar-content",
            LayoutTemplate::HeaderContent => "header-content",
            LayoutTemplate::ThreeColumn => "three-column",
            LayoutTemplate::CardGrid => "card-grid",
            LayoutTemplate::Masonry => "masonry",
            LayoutTemplate::FlexRow => "flex-row",
            LayoutTemplate::FlexCol => "flex-col",
        }
    }

    /// The dimension values this template implies.
    pub fn expand(self) -> &'static TemplateAssignment {
        let assignment = &TEMPLATES[self as usize];
        tracing::debug!(
            template = self.as_str(),
            dimensions = assignment.len(),
            "expanded layout template"
        );
        assignment
    }
}

/// Expands a template identifier.
///
/// # Errors
///
/// Returns [`StyleError::UnknownTemplate`] if `id` is not a known template.
pub fn expand(id: &str) -> Result<&'static TemplateAssignment> {
    Ok(id.parse::<LayoutTemplate>()?.expand())
}

// Indexed by discriminant; built on first use and read-only afterwards.
static TEMPLATES: Lazy<[TemplateAssignment; 10]> = Lazy::new(|| {
    LayoutTemplate::ALL.map(|template| match template {
        LayoutTemplate::Default => TemplateAssignment::new(),
        LayoutTemplate::DashboardGrid => assignment([
            (Dimension::Grid, "auto".into()),
            (Dimension::Gap, "md".into()),
        ]),
        LayoutTemplate::StatsRow => assignment([
            (Dimension::Grid, columns(&[(Breakpoint::Sm, "2"), (Breakpoint::Lg, "4")])),
            (Dimension::Gap, "md".into()),
        ]),
        LayoutTemplate::SidebarContent => assignment([
            (Dimension::Direction, "row".into()),
            (Dimension::Justify, "start".into()),
            (Dimension::Gap, "lg".into()),
        ]),
        LayoutTemplate::HeaderContent => assignment([
            (Dimension::Direction, "col".into()),
            (Dimension::Gap, "md".into()),
        ]),
        LayoutTemplate::ThreeColumn => assignment([
            (Dimension::Grid, columns(&[(Breakpoint::Lg, "3")])),
            (Dimension::Gap, "lg".into()),
        ]),
        LayoutTemplate::CardGrid => assignment([
            (Dimension::Grid, columns(&[(Breakpoint::Sm, "2"), (Breakpoint::Lg, "3")])),
            (Dimension::Gap, "lg".into()),
        ]),
        LayoutTemplate::Masonry => assignment([
            (Dimension::Grid, "auto-fill".into()),
            (Dimension::Gap, "sm".into()),
            (Dimension::Items, "start".into()),
        ]),
        LayoutTemplate::FlexRow => assignment([
            (Dimension::Direction, "row".into()),
            (Dimension::Items, "center".into()),
            (Dimension::Gap, "md".into()),
        ]),
        LayoutTemplate::FlexCol => assignment([
            (Dimension::Direction, "col".into()),
            (Dimension::Gap, "md".into()),
        ]),
    })
});

fn assignment<const N: usize>(
    entries: [(Dimension, ResponsiveValue<&'static str>); N],
) -> TemplateAssignment {
    entries.into_iter().collect()
}

/// Single column on mobile, widening at the given breakpoints.
fn columns(steps: &[(Breakpoint, &'static str)]) -> ResponsiveValue<&'static str> {
    steps
        .iter()
        .fold(ResponsiveValue::at(Breakpoint::Base, "1"), |value, (bp, n)| {
            value.with(*bp, *n)
        })
}

impl fmt::Display for LayoutTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutTemplate {
    type Err = StyleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        LayoutTemplate::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| StyleError::UnknownTemplate {
                name: s.to_string(),
            })
    }
}

impl Serialize for LayoutTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LayoutTemplate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        crate::util::deserialize_from_str(deserializer)
    }
}
