//! Style dimensions and their token catalogs.
//!
//! - [`Dimension`]: a named style axis with a closed catalog and a default
//! - [`Token`]: a catalog member, obtainable only through [`validate`]
//!
//! Catalogs are compile-time constants, so they are fully built before any
//! resolution runs and are never written afterwards.

mod catalog;
mod validate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StyleError;

pub use validate::validate;

/// A single style axis.
///
/// Declaration order is the order dimensions appear in a
/// [`ResolvedStyleSet`](crate::ResolvedStyleSet) and in generated classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    /// Container max width.
    Container,
    /// Internal padding.
    Padding,
    /// Text alignment.
    Align,
    /// Height behavior.
    Height,
    /// Grid column count.
    Grid,
    /// Gap between grid/flex items.
    Gap,
    /// Flex direction.
    Direction,
    /// Justify content.
    Justify,
    /// Align items.
    Items,
    /// Control size scale.
    Size,
}

impl Dimension {
    /// Every dimension in declaration order.
    pub const ALL: [Dimension; 10] = [
        Dimension::Container,
        Dimension::Padding,
        Dimension::Align,
        Dimension::Height,
        Dimension::Grid,
        Dimension::Gap,
        Dimension::Direction,
        Dimension::Justify,
        Dimension::Items,
        Dimension::Size,
    ];

    /// Dimensions resolved for a layout frame when the caller requests none.
    pub const LAYOUT: [Dimension; 9] = [
        Dimension::Container,
        Dimension::Padding,
        Dimension::Align,
        Dimension::Height,
        Dimension::Grid,
        Dimension::Gap,
        Dimension::Direction,
        Dimension::Justify,
        Dimension::Items,
    ];

    /// Prop name of this dimension.
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Container => "container",
            Dimension::Padding => "padding",
            Dimension::Align => "align",
            Dimension::Height => "height",
            Dimension::Grid => "grid",
            Dimension::Gap => "gap",
            Dimension::Direction => "direction",
            Dimension::Justify => "justify",
            Dimension::Items => "items",
            Dimension::Size => "size",
        }
    }

    /// The closed set of legal tokens, in catalog order.
    pub fn catalog(self) -> &'static [&'static str] {
        match self {
            Dimension::Container => catalog::CONTAINER,
            Dimension::Padding | Dimension::Gap => catalog::SPACING,
            Dimension::Align => catalog::ALIGN,
            Dimension::Height => catalog::HEIGHT,
            Dimension::Grid => catalog::GRID,
            Dimension::Direction => catalog::DIRECTION,
            Dimension::Justify => catalog::JUSTIFY,
            Dimension::Items => catalog::ITEMS,
            Dimension::Size => catalog::SIZE,
        }
    }

    /// Token used when neither props nor a template set this dimension.
    pub fn default_token(self) -> Token {
        Token(match self {
            Dimension::Container => "7xl",
            Dimension::Padding => "md",
            Dimension::Align => "start",
            Dimension::Height => "auto",
            Dimension::Grid => "none",
            Dimension::Gap => "none",
            Dimension::Direction => "col",
            Dimension::Justify => "start",
            Dimension::Items => "stretch",
            Dimension::Size => "md",
        })
    }

    /// Whether layout templates may assign this dimension.
    pub fn accepts_template(self) -> bool {
        matches!(
            self,
            Dimension::Grid
                | Dimension::Gap
                | Dimension::Direction
                | Dimension::Justify
                | Dimension::Items
        )
    }

    /// Returns `true` if `token` belongs to this dimension's catalog.
    pub fn allows(self, token: &str) -> bool {
        self.catalog().iter().any(|candidate| *candidate == token)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| StyleError::UnknownDimension {
                name: s.to_string(),
            })
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::util::deserialize_from_str(deserializer)
    }
}

/// A validated catalog token.
///
/// Holding a `Token` proves the value is a member of some dimension's
/// catalog; the only constructors are [`validate`] and
/// [`Dimension::default_token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(&'static str);

impl Token {
    /// The token text.
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}
