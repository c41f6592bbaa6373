//! Loading props from configuration files.
//!
//! Format is chosen by extension:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.json` | JSON |
//! | `.yaml`, `.yml` | YAML |
//!
//! Files are read once per call; nothing is cached.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::components::FrameProps;
use crate::error::{Result, StyleError};
use crate::resolve::StyleProps;

/// Recognized configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }

    /// Parses `source` in this format.
    pub fn parse<T: DeserializeOwned>(self, source: &str) -> Result<T> {
        match self {
            ConfigFormat::Json => serde_json::from_str(source).map_err(StyleError::parse),
            ConfigFormat::Yaml => serde_yaml::from_str(source).map_err(StyleError::parse),
        }
    }
}

/// Reads and parses any props type from `path`.
///
/// # Errors
///
/// - [`StyleError::Parse`] for an unsupported extension or malformed content
/// - [`StyleError::Io`] if the file cannot be read
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path).ok_or_else(|| StyleError::Parse {
        message: format!(
            "unsupported configuration format for '{}' (expected .json, .yaml or .yml)",
            path.display()
        ),
    })?;
    let source = std::fs::read_to_string(path).map_err(|e| StyleError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), ?format, "loading style configuration");
    format.parse(&source)
}

/// Loads explicit style props from `path`.
pub fn load_props(path: impl AsRef<Path>) -> Result<StyleProps> {
    load(path)
}

/// Loads frame props from `path`.
pub fn load_frame(path: impl AsRef<Path>) -> Result<FrameProps> {
    load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Dimension;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/frame.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("frame.yml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("frame.toml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("frame")), None);
    }

    #[test]
    fn test_parse_yaml_props() {
        let props: StyleProps = ConfigFormat::Yaml.parse("align: center\n").unwrap();
        assert!(props.contains(Dimension::Align));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_props("frame.toml").unwrap_err();
        assert!(matches!(err, StyleError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/nonexistent/framekit/props.json");
        match load_props(&path).unwrap_err() {
            StyleError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
