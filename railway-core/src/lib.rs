//! Railway network queries.
//!
//! Models a rail network as a weighted undirected graph over geographic
//! stations and answers three questions: fewest stops between two
//! stations, shortest real-world distance between two stations, and an
//! approximate best ordering for a proposed new line through a set of
//! stations.
//!
//! The network is built once from station and edge records and is
//! read-only afterwards, so queries may run concurrently against a
//! shared [`network::Network`].

pub mod domain;
pub mod network;
pub mod optimizer;
pub mod planner;
