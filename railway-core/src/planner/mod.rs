//! Shortest-path queries over the network.
//!
//! Two searches share one frontier discipline: [`min_stops`] counts
//! edges (uniform-cost, BFS-equivalent) and [`min_distance`] sums
//! great-circle edge lengths (exact Dijkstra). Both break cost ties
//! alphabetically by station name so results and exploration order are
//! deterministic.
//!
//! An unreachable destination is a normal outcome, reported as
//! `Ok(None)`; only a name the network has never seen is an error.

mod distance;
mod frontier;
mod hops;

pub use distance::min_distance;
pub use frontier::{Frontier, FrontierCost};
pub use hops::min_stops;
