//! Station name type.

use std::fmt;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A validated station name.
///
/// Station names are human-readable strings such as "Baker Street".
/// This type guarantees that any `StationName` value is non-empty and
/// contains at least one non-whitespace character.
///
/// The derived [`Ord`] gives the lexicographic order used for
/// deterministic tie-breaking in all searches.
///
/// # Examples
///
/// ```
/// use railway_core::domain::StationName;
///
/// let baker = StationName::parse("Baker Street").unwrap();
/// assert_eq!(baker.as_str(), "Baker Street");
///
/// // Empty and all-whitespace names are rejected
/// assert!(StationName::parse("").is_err());
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name from a string.
    ///
    /// The input must contain at least one non-whitespace character.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        if s.is_empty() {
            return Err(InvalidStationName {
                reason: "must not be empty",
            });
        }

        if s.chars().all(char::is_whitespace) {
            return Err(InvalidStationName {
                reason: "must contain a non-whitespace character",
            });
        }

        Ok(StationName(s.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
