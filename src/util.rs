//! Small serde helpers shared by the string-named enumerations.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};

/// Deserializes a value from its string name through [`FromStr`].
///
/// Keeps the parse error of the type itself as the deserialization message,
/// so unknown names read the same whether they come from code or from a
/// configuration file.
pub(crate) fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Even(u32);

    impl FromStr for Even {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.parse::<u32>() {
                Ok(n) if n % 2 == 0 => Ok(Even(n)),
                _ => Err(format!("'{}' is not even", s)),
            }
        }
    }

    impl<'de> Deserialize<'de> for Even {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserialize_from_str(deserializer)
        }
    }

    #[test]
    fn test_parses_through_from_str() {
        let value: Even = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(value, Even(4));
    }

    #[test]
    fn test_error_message_is_preserved() {
        let err = serde_json::from_str::<Even>("\"3\"").unwrap_err();
        assert!(err.to_string().contains("'3' is not even"));
    }
}
