//! Window-chrome mock props.

use serde::{Deserialize, Serialize};

use super::FrameProps;
use crate::error::Result;
use crate::icon::{AssetHandle, IconName};
use crate::resolve::ResolvedStyleSet;
use crate::responsive::{normalize, ResolvedResponsive, ResponsiveValue};

/// Kind of window chrome drawn around the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowType {
    #[default]
    Mac,
    Browser,
    Code,
    Terminal,
}

/// Title bar controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowHeaderConfig {
    /// Show close/minimize/maximize lights.
    pub traffic_lights: bool,
}

impl Default for WindowHeaderConfig {
    fn default() -> Self {
        Self {
            traffic_lights: true,
        }
    }
}

/// A browser tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabConfig {
    pub title: String,
    pub url: Option<String>,
    pub favicon: Option<String>,
    pub active: bool,
    pub closable: bool,
}

/// Browser chrome settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub url: Option<String>,
    pub tabs: Vec<TabConfig>,
    pub navigation: bool,
    pub bookmarks: bool,
}

/// Editor color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeTheme {
    #[default]
    Auto,
    Dark,
    Light,
}

/// Terminal color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalTheme {
    #[default]
    Dark,
    Light,
    Matrix,
    Retro,
}

/// Editor chrome settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeConfig {
    pub language: Option<String>,
    pub filename: Option<String>,
    pub line_numbers: bool,
    pub theme: Option<CodeTheme>,
}

/// Terminal chrome settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub prompt: Option<String>,
    pub theme: Option<TerminalTheme>,
    pub cwd: Option<String>,
}

/// Props of the window mock. Layout props are those of the inner frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowProps {
    #[serde(rename = "type")]
    pub kind: WindowType,
    pub title: Option<String>,
    /// Title bar visibility per breakpoint; shown everywhere when unset.
    pub titlebar: Option<ResponsiveValue<bool>>,
    pub header: WindowHeaderConfig,
    pub browser: BrowserConfig,
    pub code: CodeConfig,
    pub terminal: TerminalConfig,
    pub icon: Option<IconName>,
    #[serde(flatten)]
    pub frame: FrameProps,
}

/// Everything the window renderer needs from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowStyle {
    pub frame: ResolvedStyleSet,
    pub titlebar: ResolvedResponsive<bool>,
    pub icon: Option<AssetHandle>,
}

impl WindowProps {
    /// Resolves the inner frame, the title bar visibility and the icon.
    pub fn resolve_style(&self) -> Result<WindowStyle> {
        let frame = self.frame.resolve_style()?;
        let titlebar = match &self.titlebar {
            Some(titlebar) => normalize("titlebar", titlebar)?,
            None => normalize("titlebar", &ResponsiveValue::single(true))?,
        };
        let icon = self.icon.map(AssetHandle::from);
        Ok(WindowStyle {
            frame,
            titlebar,
            icon,
        })
    }
}
