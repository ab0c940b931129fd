//! New-line optimizer.
//!
//! Given an unordered set of stations, [`new_railway_line`] searches
//! permutation space with simulated annealing for an ordering that
//! approximately minimizes the total great-circle track length. The
//! result is best-effort: different random sources may produce
//! different orderings, but the output is always a permutation of the
//! input and its reported distance is always the true length of the
//! returned order.

mod annealing;
mod config;
mod matrix;

pub use annealing::{RailwayLine, new_railway_line};
pub use config::AnnealingConfig;
pub use matrix::DistanceMatrix;
