//! The railway network graph.
//!
//! A [`Network`] is built once from station and edge records and owns
//! the station set, the symmetric adjacency relation, and each
//! station's line membership. It exposes no mutation after
//! construction, so a shared reference can serve concurrent queries.

mod graph;
mod records;

pub use graph::{Network, Station};
pub use records::{EdgeRecord, StationRecord};
