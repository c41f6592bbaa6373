//! Prop shapes of the presentational components.
//!
//! Components are rendered elsewhere; this module holds their declarative
//! props and the glue that runs them through the style engine and the icon
//! lookup. Every props type deserializes from the camelCase keys components
//! are written with.
//!
//! - [`FrameProps`]: layout frame, the main consumer of the resolver
//! - [`WindowProps`]: window-chrome mock wrapping a frame
//! - [`ButtonProps`], [`BadgeProps`], [`InputProps`]: controls

mod controls;
mod frame;
mod window;

use serde::{Deserialize, Serialize};

pub use controls::{
    BadgeProps, BadgeSize, BadgeVariant, ButtonProps, ButtonSize, ButtonStyle, ButtonVariant,
    IconPosition, InputAddon, InputProps, InputState, InputType, InputValue, InputVariant,
    INPUT_SIZES,
};
pub use frame::{FrameProps, FrameVariant};
pub use window::{
    BrowserConfig, CodeConfig, CodeTheme, TabConfig, TerminalConfig, TerminalTheme,
    WindowHeaderConfig, WindowProps, WindowStyle, WindowType,
};

/// Props accepted by every component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseProps {
    /// Additional classes appended after generated ones.
    pub class: Option<String>,
    /// Element id.
    pub id: Option<String>,
    /// Test hook.
    #[serde(rename = "data-testid")]
    pub test_id: Option<String>,
}

impl BaseProps {
    /// Joins generated classes with the caller's extra classes.
    pub fn merge_classes(&self, generated: &[String]) -> String {
        let mut classes: Vec<&str> = generated.iter().map(String::as_str).collect();
        if let Some(extra) = self.class.as_deref().filter(|c| !c.trim().is_empty()) {
            classes.push(extra.trim());
        }
        classes.join(" ")
    }
}
