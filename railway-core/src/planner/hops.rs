//! Minimum hop-count search.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{NetworkError, StationName};
use crate::network::Network;

use super::frontier::Frontier;

/// Minimum number of edges between two stations.
///
/// Uniform-cost search with unit edge weights (BFS-equivalent). Because
/// pop costs are non-decreasing, the search can stop as soon as the
/// popped station is the destination (answer: its cost) or adjacent to
/// it (answer: its cost plus one); either way the result is the true
/// shortest edge count.
///
/// Returns `Ok(None)` when no path exists, and
/// [`NetworkError::UnknownStation`] when either name is absent from the
/// network. `min_stops(a, a)` is `Ok(Some(0))`.
pub fn min_stops(
    network: &Network,
    from: &StationName,
    to: &StationName,
) -> Result<Option<u32>, NetworkError> {
    network.station(from)?;
    network.station(to)?;

    let mut frontier = Frontier::new();
    let mut visited: HashSet<StationName> = HashSet::new();
    frontier.push(0u32, from.clone());
    visited.insert(from.clone());

    while let Some((cost, current)) = frontier.pop() {
        if current == *to {
            return Ok(Some(cost));
        }

        let station = network.station(&current)?;
        if station.is_adjacent(to) {
            trace!(station = %current, cost, "destination adjacent");
            return Ok(Some(cost + 1));
        }

        for (neighbor, _) in station.edges() {
            if visited.insert(neighbor.clone()) {
                frontier.push(cost + 1, neighbor.clone());
            }
        }
    }

    debug!(from = %from, to = %to, "no path found");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{EdgeRecord, StationRecord};

    fn name(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    /// A - B - C - D in a line, plus isolated station X.
    fn line_network() -> Network {
        let stations = vec![
            StationRecord::new("A", 51.50, 0.0),
            StationRecord::new("B", 51.51, 0.0),
            StationRecord::new("C", 51.52, 0.0),
            StationRecord::new("D", 51.53, 0.0),
            StationRecord::new("X", 52.00, 1.0),
        ];
        let edges = vec![
            EdgeRecord::new("Test Line", "A", "B"),
            EdgeRecord::new("Test Line", "B", "C"),
            EdgeRecord::new("Test Line", "C", "D"),
        ];
        Network::build(stations, edges).unwrap()
    }

    #[test]
    fn same_station_is_zero() {
        let network = line_network();
        assert_eq!(min_stops(&network, &name("A"), &name("A")), Ok(Some(0)));
    }

    #[test]
    fn adjacent_stations_are_one() {
        let network = line_network();
        assert_eq!(min_stops(&network, &name("A"), &name("B")), Ok(Some(1)));
    }

    #[test]
    fn two_hops_through_middle() {
        let network = line_network();
        assert_eq!(min_stops(&network, &name("A"), &name("C")), Ok(Some(2)));
    }

    #[test]
    fn three_hops_end_to_end() {
        let network = line_network();
        assert_eq!(min_stops(&network, &name("A"), &name("D")), Ok(Some(3)));
    }

    #[test]
    fn symmetric_on_undirected_network() {
        let network = line_network();
        for (a, b) in [("A", "D"), ("B", "C"), ("A", "C")] {
            assert_eq!(
                min_stops(&network, &name(a), &name(b)),
                min_stops(&network, &name(b), &name(a)),
            );
        }
    }

    #[test]
    fn shortcut_beats_long_way_round() {
        // A - B - C - D plus a direct A - D edge.
        let stations = vec![
            StationRecord::new("A", 51.50, 0.0),
            StationRecord::new("B", 51.51, 0.0),
            StationRecord::new("C", 51.52, 0.0),
            StationRecord::new("D", 51.53, 0.0),
        ];
        let edges = vec![
            EdgeRecord::new("Slow Line", "A", "B"),
            EdgeRecord::new("Slow Line", "B", "C"),
            EdgeRecord::new("Slow Line", "C", "D"),
            EdgeRecord::new("Express Line", "A", "D"),
        ];
        let network = Network::build(stations, edges).unwrap();
        assert_eq!(min_stops(&network, &name("A"), &name("D")), Ok(Some(1)));
    }

    #[test]
    fn unreachable_is_none() {
        let network = line_network();
        assert_eq!(min_stops(&network, &name("A"), &name("X")), Ok(None));
        assert_eq!(min_stops(&network, &name("X"), &name("A")), Ok(None));
    }

    #[test]
    fn unknown_station_is_an_error() {
        let network = line_network();
        assert_eq!(
            min_stops(&network, &name("A"), &name("Nowhere")),
            Err(NetworkError::UnknownStation(name("Nowhere"))),
        );
        assert_eq!(
            min_stops(&network, &name("Nowhere"), &name("A")),
            Err(NetworkError::UnknownStation(name("Nowhere"))),
        );
    }
}
