//! Responsive values and their fully resolved form.
//!
//! - [`ResponsiveValue`]: what callers write, a bare value or per-breakpoint overrides
//! - [`ResolvedResponsive`]: one value for every breakpoint, no gaps
//! - [`normalize`]: the forward-fill turning the former into the latter

mod normalize;

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::value::{BorrowedStrDeserializer, MapAccessDeserializer};
use serde::de::{self, IntoDeserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::breakpoint::Breakpoint;

pub use normalize::normalize;

/// A prop value that is either uniform or keyed by breakpoint.
///
/// The structured form must contain [`Breakpoint::Base`]; this is checked when
/// the value is normalized, so a value read from configuration can still be
/// inspected before it is rejected.
///
/// # Example
///
/// ```rust
/// use framekit::{Breakpoint, ResponsiveValue};
///
/// let uniform = ResponsiveValue::single("lg");
///
/// let container = ResponsiveValue::at(Breakpoint::Base, "full")
///     .with(Breakpoint::Md, "6xl")
///     .with(Breakpoint::Xl, "7xl");
/// assert_eq!(container.get(Breakpoint::Md), Some(&"6xl"));
/// assert_eq!(uniform.base(), Some(&"lg"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    /// Applies to every breakpoint.
    Single(T),
    /// Explicit values at some breakpoints; larger ones inherit.
    Breakpoints(BTreeMap<Breakpoint, T>),
}

impl<T> ResponsiveValue<T> {
    /// Creates a uniform value.
    pub fn single(value: T) -> Self {
        ResponsiveValue::Single(value)
    }

    /// Creates a structured value with a single entry.
    pub fn at(breakpoint: Breakpoint, value: T) -> Self {
        ResponsiveValue::Breakpoints(BTreeMap::from([(breakpoint, value)]))
    }

    /// Adds or replaces the entry at `breakpoint`, converting a uniform value
    /// into a structured one whose `base` is the previous value.
    pub fn with(self, breakpoint: Breakpoint, value: T) -> Self {
        let mut map = match self {
            ResponsiveValue::Single(base) => BTreeMap::from([(Breakpoint::Base, base)]),
            ResponsiveValue::Breakpoints(map) => map,
        };
        map.insert(breakpoint, value);
        ResponsiveValue::Breakpoints(map)
    }

    /// The value written for exactly `breakpoint`, without inheritance.
    ///
    /// A uniform value answers only for `base`.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        match self {
            ResponsiveValue::Single(value) if breakpoint == Breakpoint::Base => Some(value),
            ResponsiveValue::Single(_) => None,
            ResponsiveValue::Breakpoints(map) => map.get(&breakpoint),
        }
    }

    /// The `base` value, if present.
    pub fn base(&self) -> Option<&T> {
        self.get(Breakpoint::Base)
    }

    /// Returns `true` if this is the uniform form.
    pub fn is_single(&self) -> bool {
        matches!(self, ResponsiveValue::Single(_))
    }

    /// Converts every contained value.
    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> ResponsiveValue<U> {
        match self {
            ResponsiveValue::Single(value) => ResponsiveValue::Single(f(value)),
            ResponsiveValue::Breakpoints(map) => {
                ResponsiveValue::Breakpoints(map.iter().map(|(bp, v)| (*bp, f(v))).collect())
            }
        }
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        ResponsiveValue::Single(value)
    }
}

impl From<&str> for ResponsiveValue<String> {
    fn from(value: &str) -> Self {
        ResponsiveValue::Single(value.to_string())
    }
}

impl From<ResponsiveValue<&str>> for ResponsiveValue<String> {
    fn from(value: ResponsiveValue<&str>) -> Self {
        value.map(|v| v.to_string())
    }
}

impl<T> FromIterator<(Breakpoint, T)> for ResponsiveValue<T> {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, T)>>(iter: I) -> Self {
        ResponsiveValue::Breakpoints(iter.into_iter().collect())
    }
}

// A map is always the breakpoint form and a scalar always the uniform form,
// so errors inside a map (such as an unknown breakpoint) reach the caller.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for ResponsiveValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ResponsiveVisitor(PhantomData))
    }
}

struct ResponsiveVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> ResponsiveVisitor<T> {
    fn single<D: Deserializer<'de>>(deserializer: D) -> Result<ResponsiveValue<T>, D::Error> {
        T::deserialize(deserializer).map(ResponsiveValue::Single)
    }
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for ResponsiveVisitor<T> {
    type Value = ResponsiveValue<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a value or a map keyed by breakpoint")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        BTreeMap::deserialize(MapAccessDeserializer::new(map)).map(ResponsiveValue::Breakpoints)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Self::single(v.into_deserializer())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Self::single(v.into_deserializer())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Self::single(v.into_deserializer())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Self::single(v.into_deserializer())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Self::single(v.into_deserializer())
    }

    fn visit_borrowed_str<E: de::Error>(self, v: &'de str) -> Result<Self::Value, E> {
        Self::single(BorrowedStrDeserializer::new(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Self::single(v.into_deserializer())
    }
}

/// A value defined at every breakpoint.
///
/// Produced by [`normalize`]; for every breakpoint the value equals the input
/// value at the nearest defined breakpoint at or below it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedResponsive<T> {
    // one entry per breakpoint, in breakpoint order
    values: Vec<T>,
}

impl<T> ResolvedResponsive<T> {
    pub(crate) fn from_values(values: [T; Breakpoint::COUNT]) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// The value at `breakpoint`.
    pub fn get(&self, breakpoint: Breakpoint) -> &T {
        &self.values[breakpoint.index()]
    }

    /// The value at `base`.
    pub fn base(&self) -> &T {
        self.get(Breakpoint::Base)
    }

    /// The value in effect for a viewport `width` pixels wide.
    pub fn at_width(&self, width: u32) -> &T {
        self.get(Breakpoint::for_width(width))
    }

    /// Iterates `(breakpoint, value)` pairs, smallest breakpoint first.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> + '_ {
        Breakpoint::ALL.iter().copied().zip(self.values.iter())
    }

    /// Converts every value, keeping breakpoint positions.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> ResolvedResponsive<U> {
        ResolvedResponsive {
            values: self.values.iter().map(f).collect(),
        }
    }

    /// Converts every value, stopping at the first error in breakpoint order.
    pub fn try_map<U, E, F>(&self, f: F) -> Result<ResolvedResponsive<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        let values = self.values.iter().map(f).collect::<Result<Vec<_>, E>>()?;
        Ok(ResolvedResponsive { values })
    }
}

impl<T: PartialEq> ResolvedResponsive<T> {
    /// Returns `true` if every breakpoint holds the same value.
    pub fn is_uniform(&self) -> bool {
        self.values.iter().all(|v| *v == self.values[0])
    }

    /// The breakpoints at which the value changes, always starting at `base`.
    ///
    /// This is the smallest structured input that normalizes back to `self`.
    pub fn changes(&self) -> Vec<(Breakpoint, &T)> {
        let mut out: Vec<(Breakpoint, &T)> = Vec::new();
        for (bp, value) in self.iter() {
            match out.last() {
                Some((_, previous)) if *previous == value => {}
                _ => out.push((bp, value)),
            }
        }
        out
    }
}

impl<T: Serialize> Serialize for ResolvedResponsive<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Breakpoint::COUNT))?;
        for (bp, value) in self.iter() {
            map.serialize_entry(&bp, value)?;
        }
        map.end()
    }
}
