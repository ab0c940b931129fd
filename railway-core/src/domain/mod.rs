//! Domain types for the railway network.
//!
//! This module contains the core domain model types. Types enforce
//! their invariants at construction time, so code that receives them
//! can trust their validity.

mod error;
mod geo;
mod station;

pub use error::NetworkError;
pub use geo::{Coordinates, MILES_PER_KM};
pub use station::{InvalidStationName, StationName};
