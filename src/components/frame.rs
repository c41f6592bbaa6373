//! Layout frame props.

use serde::{Deserialize, Serialize};

use super::BaseProps;
use crate::error::{Result, StyleError};
use crate::resolve::{Resolver, ResolvedStyleSet, StyleProps};
use crate::responsive::ResponsiveValue;
use crate::template::LayoutTemplate;
use crate::token::Dimension;

/// Frame visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Muted,
}

/// Props of the layout frame.
///
/// # Example
///
/// ```rust
/// use framekit::{Breakpoint, Dimension, FrameProps};
///
/// let frame: FrameProps = serde_json::from_str(r#"{
///     "layout": "dashboard-grid",
///     "gap": "lg",
///     "container": { "base": "full", "xl": "7xl" }
/// }"#).unwrap();
///
/// let style = frame.resolve_style().unwrap();
/// assert_eq!(style.token(Dimension::Grid, Breakpoint::Md).unwrap(), "auto");
/// assert_eq!(style.token(Dimension::Gap, Breakpoint::Md).unwrap(), "lg");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrameProps {
    pub variant: FrameVariant,
    pub container: Option<ResponsiveValue<String>>,
    pub padding: Option<ResponsiveValue<String>>,
    pub align: Option<ResponsiveValue<String>>,
    pub height: Option<ResponsiveValue<String>>,
    pub grid: Option<ResponsiveValue<String>>,
    pub gap: Option<ResponsiveValue<String>>,
    /// Minimum column width for `auto`/`auto-fill` grids, as a CSS length.
    pub grid_min_width: Option<String>,
    pub direction: Option<ResponsiveValue<String>>,
    pub justify: Option<ResponsiveValue<String>>,
    pub items: Option<ResponsiveValue<String>>,
    pub layout: Option<LayoutTemplate>,
    pub background: Option<String>,
    pub border: bool,
    #[serde(flatten)]
    pub base: BaseProps,
}

impl FrameProps {
    /// Parses frame props from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(StyleError::parse)
    }

    /// Parses frame props from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(StyleError::parse)
    }

    /// The explicitly set layout dimensions.
    pub fn style_props(&self) -> StyleProps {
        StyleProps::new()
            .set_opt(Dimension::Container, self.container.clone())
            .set_opt(Dimension::Padding, self.padding.clone())
            .set_opt(Dimension::Align, self.align.clone())
            .set_opt(Dimension::Height, self.height.clone())
            .set_opt(Dimension::Grid, self.grid.clone())
            .set_opt(Dimension::Gap, self.gap.clone())
            .set_opt(Dimension::Direction, self.direction.clone())
            .set_opt(Dimension::Justify, self.justify.clone())
            .set_opt(Dimension::Items, self.items.clone())
    }

    /// Resolves every layout dimension, applying the frame's template.
    pub fn resolve_style(&self) -> Result<ResolvedStyleSet> {
        Resolver::new().resolve(&self.style_props(), self.layout)
    }

    /// Resolves the style and renders the full class list, caller classes last.
    pub fn class_string(&self) -> Result<String> {
        let style = self.resolve_style()?;
        let mut classes = style.class_tokens();
        if self.border {
            classes.push("border".to_string());
        }
        Ok(self.base.merge_classes(&classes))
    }

    /// Inline style declarations that have no class equivalent.
    pub fn inline_style(&self) -> Option<String> {
        let mut declarations = Vec::new();
        if let Some(width) = &self.grid_min_width {
            declarations.push(format!("--grid-min-width: {}", width));
        }
        if let Some(background) = &self.background {
            declarations.push(format!("background: {}", background));
        }
        if declarations.is_empty() {
            None
        } else {
            Some(declarations.join("; "))
        }
    }
}
