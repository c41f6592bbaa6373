//! Button, badge and input props.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::BaseProps;
use crate::error::{Result, StyleError};
use crate::icon::{AssetHandle, IconName};
use crate::responsive::{normalize, ResolvedResponsive, ResponsiveValue};
use crate::token::{validate, Dimension, Token};

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
    Destructive,
}

/// Button size, a subset of the size scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
        }
    }
}

/// Which side of the label the icon sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

/// Props of a button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonProps {
    pub text: Option<String>,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub loading: bool,
    pub loading_text: Option<String>,
    pub icon: Option<IconName>,
    pub icon_only: bool,
    pub icon_position: IconPosition,
    #[serde(flatten)]
    pub base: BaseProps,
}

/// What a button renders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    pub size: Token,
    /// Visible label; `None` for icon-only buttons.
    pub label: Option<String>,
    pub icon: Option<AssetHandle>,
    pub icon_position: IconPosition,
    /// Disabled explicitly or while loading.
    pub inert: bool,
}

impl ButtonProps {
    /// Resolves the size token, label and icon.
    ///
    /// While loading, `loading_text` replaces the label when set. An
    /// icon-only button without an icon falls back to its text so it never
    /// renders empty.
    pub fn resolve_style(&self) -> Result<ButtonStyle> {
        let size = validate(Dimension::Size, self.size.as_str())?;
        let icon = self.icon.map(AssetHandle::from);

        let text = if self.loading {
            self.loading_text.as_ref().or(self.text.as_ref())
        } else {
            self.text.as_ref()
        };
        let label = if self.icon_only && icon.is_some() {
            None
        } else {
            text.cloned()
        };

        Ok(ButtonStyle {
            size,
            label,
            icon,
            icon_position: self.icon_position,
            inert: self.disabled || self.loading,
        })
    }
}

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
    Subtle,
    New,
    Soon,
}

/// Badge size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Props of a badge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BadgeProps {
    pub text: String,
    pub variant: BadgeVariant,
    pub size: BadgeSize,
    /// Show an animated dot before the text.
    pub dot: bool,
    pub dot_color: Option<String>,
    #[serde(flatten)]
    pub base: BaseProps,
}

impl BadgeProps {
    /// Size token on the shared size scale.
    pub fn size_token(&self) -> Result<Token> {
        let size = match self.size {
            BadgeSize::Sm => "sm",
            BadgeSize::Md => "md",
            BadgeSize::Lg => "lg",
        };
        validate(Dimension::Size, size)
    }
}

/// HTML input type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Search,
    Number,
    Tel,
    Url,
    Date,
    Time,
}

/// Input visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputVariant {
    #[default]
    Default,
    Floating,
    Minimal,
    Filled,
}

/// Tokens of the size scale an input accepts.
pub const INPUT_SIZES: [&str; 3] = ["sm", "md", "lg"];

/// Current value of an input, text or numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Number(n) => write!(f, "{}", n),
            InputValue::Text(text) => f.write_str(text),
        }
    }
}

/// Validation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputState {
    #[default]
    Default,
    Error,
    Success,
    Warning,
}

/// Prefix or suffix attached to an input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputAddon {
    pub icon: Option<IconName>,
    pub text: Option<String>,
    pub loading: bool,
}

impl InputAddon {
    /// The addon's icon asset.
    pub fn icon_asset(&self) -> Option<AssetHandle> {
        self.icon.map(AssetHandle::from)
    }
}

/// Props of a text input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputProps {
    #[serde(rename = "type")]
    pub kind: InputType,
    pub variant: InputVariant,
    pub size: Option<ResponsiveValue<String>>,
    pub state: InputState,
    pub value: Option<InputValue>,
    pub placeholder: Option<String>,
    pub label: Option<String>,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub disabled: bool,
    pub readonly: bool,
    pub required: bool,
    pub loading: bool,
    pub clearable: bool,
    pub show_password_toggle: bool,
    pub prefix: Option<InputAddon>,
    pub suffix: Option<InputAddon>,
    pub autofocus: bool,
    pub autocomplete: Option<String>,
    pub maxlength: Option<u32>,
    pub minlength: Option<u32>,
    pub pattern: Option<String>,
    pub step: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    #[serde(flatten)]
    pub base: BaseProps,
}

impl InputProps {
    /// Resolves the responsive size through the `size` dimension.
    ///
    /// Inputs only use part of the size scale; tokens outside
    /// [`INPUT_SIZES`] are rejected like any other invalid token, with
    /// the narrower allowed set.
    pub fn resolve_size(&self) -> Result<ResolvedResponsive<Token>> {
        let size = match &self.size {
            Some(size) => normalize(Dimension::Size.as_str(), size)?,
            None => normalize(Dimension::Size.as_str(), &ResponsiveValue::single("md".to_string()))?,
        };
        size.try_map(|token| {
            let token = validate(Dimension::Size, token)?;
            if INPUT_SIZES.contains(&token.as_str()) {
                Ok(token)
            } else {
                Err(StyleError::InvalidToken {
                    dimension: Dimension::Size,
                    token: token.to_string(),
                    allowed: INPUT_SIZES.to_vec(),
                })
            }
        })
    }

    /// Text shown under the input: the error message in the error state,
    /// otherwise the helper text.
    pub fn helper_message(&self) -> Option<&str> {
        match (self.state, &self.error_message) {
            (InputState::Error, Some(message)) => Some(message.as_str()),
            _ => self.helper_text.as_deref(),
        }
    }

    /// Whether the password visibility toggle should be drawn.
    pub fn shows_password_toggle(&self) -> bool {
        self.show_password_toggle && self.kind == InputType::Password
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;
    use crate::icon::IconName;

    #[test]
    fn test_button_defaults() {
        let style = ButtonProps::default().resolve_style().unwrap();
        assert_eq!(style.size, "md");
        assert_eq!(style.label, None);
        assert_eq!(style.icon, None);
        assert!(!style.inert);
    }

    #[test]
    fn test_button_loading_label() {
        let button = ButtonProps {
            text: Some("Save".to_string()),
            loading: true,
            loading_text: Some("Saving…".to_string()),
            ..Default::default()
        };
        let style = button.resolve_style().unwrap();
        assert_eq!(style.label.as_deref(), Some("Saving…"));
        assert!(style.inert);
    }

    #[test]
    fn test_icon_only_button() {
        let button: ButtonProps = serde_json::from_str(
            r#"{"text": "Delete", "icon": "trash-2", "iconOnly": true, "iconPosition": "right"}"#,
        )
        .unwrap();
        let style = button.resolve_style().unwrap();
        assert_eq!(style.label, None);
        assert_eq!(style.icon.map(|i| i.icon()), Some(IconName::Trash2));
        assert_eq!(style.icon_position, IconPosition::Right);
    }

    #[test]
    fn test_icon_only_button_without_icon_keeps_text() {
        let button = ButtonProps {
            text: Some("Delete".to_string()),
            icon_only: true,
            ..Default::default()
        };
        let style = button.resolve_style().unwrap();
        assert_eq!(style.icon, None);
        assert_eq!(style.label.as_deref(), Some("Delete"));
    }

    #[test]
    fn test_button_rejects_unknown_icon() {
        let err = serde_json::from_str::<ButtonProps>(
            r#"{"text": "Save", "icon": "sav", "iconOnly": true}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown icon 'sav'"));
    }

    #[test]
    fn test_addon_rejects_unknown_icon() {
        assert!(serde_json::from_str::<InputAddon>(r#"{"icon": "sav"}"#).is_err());
        assert!(serde_json::from_str::<InputProps>(r#"{"prefix": {"icon": "sav"}}"#).is_err());
    }

    #[test]
    fn test_input_value_text_or_number() {
        let text: InputProps = serde_json::from_str(r#"{"value": "hello"}"#).unwrap();
        assert_eq!(text.value, Some(InputValue::Text("hello".to_string())));

        let number: InputProps =
            serde_json::from_str(r#"{"type": "number", "value": 42}"#).unwrap();
        assert_eq!(number.value, Some(InputValue::Number(42.0)));
        assert_eq!(number.value.unwrap().to_string(), "42");
    }

    #[test]
    fn test_input_value_from_yaml() {
        let input: InputProps = serde_yaml::from_str("value: 2.5
").unwrap();
        assert_eq!(input.value, Some(InputValue::Number(2.5)));
    }

    #[test]
    fn test_badge_size_token() {
        let badge: BadgeProps =
            serde_json::from_str(r#"{"text": "beta", "variant": "new", "size": "lg"}"#).unwrap();
        assert_eq!(badge.variant, BadgeVariant::New);
        assert_eq!(badge.size_token().unwrap(), "lg");
    }

    #[test]
    fn test_input_size_defaults_to_md() {
        let size = InputProps::default().resolve_size().unwrap();
        assert!(size.is_uniform());
        assert_eq!(*size.base(), "md");
    }

    #[test]
    fn test_input_responsive_size() {
        let input: InputProps =
            serde_json::from_str(r#"{"size": {"base": "sm", "lg": "lg"}}"#).unwrap();
        let size = input.resolve_size().unwrap();
        assert_eq!(*size.get(Breakpoint::Md), "sm");
        assert_eq!(*size.get(Breakpoint::Xl), "lg");
    }

    #[test]
    fn test_input_rejects_size_outside_input_scale() {
        let input = InputProps {
            size: Some("2xl".into()),
            ..Default::default()
        };
        assert_eq!(
            input.resolve_size().unwrap_err(),
            StyleError::InvalidToken {
                dimension: Dimension::Size,
                token: "2xl".to_string(),
                allowed: vec!["sm", "md", "lg"],
            }
        );
    }

    #[test]
    fn test_input_helper_message() {
        let mut input = InputProps {
            helper_text: Some("We never share it".to_string()),
            error_message: Some("Invalid email".to_string()),
            ..Default::default()
        };
        assert_eq!(input.helper_message(), Some("We never share it"));
        input.state = InputState::Error;
        assert_eq!(input.helper_message(), Some("Invalid email"));
    }

    #[test]
    fn test_password_toggle_only_for_passwords() {
        let mut input: InputProps =
            serde_json::from_str(r#"{"type": "email", "showPasswordToggle": true}"#).unwrap();
        assert!(!input.shows_password_toggle());
        input.kind = InputType::Password;
        assert!(input.shows_password_toggle());
    }

    #[test]
    fn test_addon_icon() {
        let input: InputProps =
            serde_json::from_str(r#"{"prefix": {"icon": "search"}, "suffix": {"text": "kg"}}"#)
                .unwrap();
        assert_eq!(
            input.prefix.unwrap().icon_asset().map(|i| i.icon()),
            Some(IconName::Search)
        );
        assert_eq!(input.suffix.unwrap().icon_asset(), None);
    }
}
