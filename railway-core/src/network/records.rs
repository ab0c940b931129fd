//! Construction input records.
//!
//! Parsing station and edge data out of CSV or JSON is an external
//! collaborator's job; it hands the rows over as these records. Any
//! header row is the parser's to skip.

use serde::{Deserialize, Serialize};

/// One station row: a name and its position in decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl StationRecord {
    /// Create a station record.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// One edge row: a line label and the two stations it connects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub line: String,
    pub from: String,
    pub to: String,
}

impl EdgeRecord {
    /// Create an edge record.
    pub fn new(line: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}
