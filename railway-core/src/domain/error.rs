//! Domain error types.
//!
//! These errors represent references to stations the network does not
//! know about. An unreachable pair of valid stations is not an error:
//! the path queries report it as `Ok(None)` so the two outcomes can
//! never be confused.

use super::{InvalidStationName, StationName};

/// Errors raised while building or querying a railway network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// A query or edge record names a station absent from the network
    #[error("unknown station: {0}")]
    UnknownStation(StationName),

    /// A construction record carries a malformed station name
    #[error(transparent)]
    InvalidName(#[from] InvalidStationName),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let name = StationName::parse("Narnia Central").unwrap();
        let err = NetworkError::UnknownStation(name);
        assert_eq!(err.to_string(), "unknown station: Narnia Central");

        let parse_err = StationName::parse("").unwrap_err();
        let err = NetworkError::from(parse_err);
        assert_eq!(err.to_string(), "invalid station name: must not be empty");
    }
}
