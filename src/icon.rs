//! Icon lookup.
//!
//! Icons are a closed set. Component props hold [`IconName`] directly, so an
//! unknown name fails when the props are parsed instead of at render time.
//! [`resolve_icon`] is the strict lookup for names arriving as plain text.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned by icon lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IconError {
    /// The name is not in the icon set.
    #[error("unknown icon '{name}'")]
    UnknownIcon { name: String },
}

macro_rules! icons {
    ($($variant:ident => $name:literal,)+) => {
        /// A known icon.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum IconName {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
        }

        impl IconName {
            /// Every icon, in declaration order.
            pub const ALL: &'static [IconName] = &[$(IconName::$variant),+];

            /// Kebab-case icon name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(IconName::$variant => $name,)+
                }
            }
        }
    };
}

icons! {
    Save => "save",
    Upload => "upload",
    Download => "download",
    Settings => "settings",
    ChevronRight => "chevron-right",
    ChevronLeft => "chevron-left",
    ExternalLink => "external-link",
    Mail => "mail",
    Heart => "heart",
    Star => "star",
    Plus => "plus",
    Search => "search",
    Trash2 => "trash-2",
    Edit => "edit",
    Zap => "zap",
    Lock => "lock",
    Loader => "loader",
    Send => "send",
    Copy => "copy",
    Scissors => "scissors",
    Clipboard => "clipboard",
    Undo => "undo",
    Redo => "redo",
    ArrowRight => "arrow-right",
    BookOpen => "book-open",
    FileText => "file-text",
    Trash => "trash",
    RefreshCw => "refresh-cw",
    Eye => "eye",
    EyeOff => "eye-off",
    User => "user",
    Phone => "phone",
    Globe => "globe",
}

static BY_NAME: Lazy<HashMap<&'static str, IconName>> =
    Lazy::new(|| IconName::ALL.iter().map(|icon| (icon.as_str(), *icon)).collect());

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconName {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| IconError::UnknownIcon {
                name: s.to_string(),
            })
    }
}

impl Serialize for IconName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IconName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::util::deserialize_from_str(deserializer)
    }
}

/// Reference to an icon asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetHandle {
    icon: IconName,
}

impl AssetHandle {
    /// The icon this handle refers to.
    pub fn icon(&self) -> IconName {
        self.icon
    }

    /// Asset path relative to the icon set root.
    pub fn path(&self) -> String {
        format!("lucide/{}.svg", self.icon)
    }
}

impl From<IconName> for AssetHandle {
    fn from(icon: IconName) -> Self {
        Self { icon }
    }
}

/// Looks up an icon asset by name.
///
/// # Example
///
/// ```rust
/// use framekit::{resolve_icon, IconError};
///
/// assert_eq!(resolve_icon("trash-2").unwrap().path(), "lucide/trash-2.svg");
/// assert!(matches!(resolve_icon("unicorn"), Err(IconError::UnknownIcon { .. })));
/// ```
pub fn resolve_icon(name: &str) -> Result<AssetHandle, IconError> {
    name.parse::<IconName>().map(AssetHandle::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_count() {
        assert_eq!(IconName::ALL.len(), 33);
        assert_eq!(BY_NAME.len(), 33);
    }

    #[test]
    fn test_names_round_trip() {
        for icon in IconName::ALL {
            assert_eq!(icon.as_str().parse::<IconName>(), Ok(*icon));
        }
    }

    #[test]
    fn test_unknown_icon() {
        assert_eq!(
            resolve_icon("Save"),
            Err(IconError::UnknownIcon {
                name: "Save".to_string()
            })
        );
    }

    #[test]
    fn test_asset_path() {
        let handle = resolve_icon("chevron-right").unwrap();
        assert_eq!(handle.icon(), IconName::ChevronRight);
        assert_eq!(handle.path(), "lucide/chevron-right.svg");
    }

    #[test]
    fn test_deserialize() {
        let icon: IconName = serde_json::from_str("\"eye-off\"").unwrap();
        assert_eq!(icon, IconName::EyeOff);
        assert!(serde_json::from_str::<IconName>("\"eye-on\"").is_err());
    }
}
