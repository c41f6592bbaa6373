//! Responsive breakpoints.
//!
//! Breakpoints form a fixed, totally ordered, mobile-first scale. A value set
//! at one breakpoint applies to every larger breakpoint until overridden.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A named responsive threshold.
///
/// Declaration order is the cascade order: `base < xs < sm < md < lg < xl < 2xl < 3xl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Always-present starting point (mobile).
    Base,
    /// 480px and up.
    Xs,
    /// 640px and up.
    Sm,
    /// 768px and up.
    Md,
    /// 1024px and up.
    Lg,
    /// 1280px and up.
    Xl,
    /// 1536px and up.
    TwoXl,
    /// 1920px and up.
    ThreeXl,
}

/// Error returned when a string does not name a breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown breakpoint '{0}'")]
pub struct UnknownBreakpoint(pub String);

impl Breakpoint {
    /// Number of breakpoints on the scale.
    pub const COUNT: usize = 8;

    /// Every breakpoint, smallest first.
    pub const ALL: [Breakpoint; Breakpoint::COUNT] = [
        Breakpoint::Base,
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::TwoXl,
        Breakpoint::ThreeXl,
    ];

    /// Position on the scale, `0` for `base`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short name as used in props and class prefixes.
    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::TwoXl => "2xl",
            Breakpoint::ThreeXl => "3xl",
        }
    }

    /// Minimum viewport width, in pixels, at which this breakpoint applies.
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Base => 0,
            Breakpoint::Xs => 480,
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
            Breakpoint::TwoXl => 1536,
            Breakpoint::ThreeXl => 1920,
        }
    }

    /// The largest breakpoint active for a viewport of `width` pixels.
    ///
    /// # Example
    ///
    /// ```rust
    /// use framekit::Breakpoint;
    ///
    /// assert_eq!(Breakpoint::for_width(320), Breakpoint::Base);
    /// assert_eq!(Breakpoint::for_width(800), Breakpoint::Md);
    /// assert_eq!(Breakpoint::for_width(4000), Breakpoint::ThreeXl);
    /// ```
    pub fn for_width(width: u32) -> Breakpoint {
        Breakpoint::ALL
            .iter()
            .rev()
            .copied()
            .find(|bp| bp.min_width() <= width)
            .unwrap_or(Breakpoint::Base)
    }

    /// The next larger breakpoint, if any.
    pub fn next(self) -> Option<Breakpoint> {
        Breakpoint::ALL.get(self.index() + 1).copied()
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = UnknownBreakpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .iter()
            .copied()
            .find(|bp| bp.as_str() == s)
            .ok_or_else(|| UnknownBreakpoint(s.to_string()))
    }
}

impl Serialize for Breakpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Breakpoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::util::deserialize_from_str(deserializer)
    }
}
