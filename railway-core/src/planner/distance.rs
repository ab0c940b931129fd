//! Minimum geodesic-distance search.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{MILES_PER_KM, NetworkError, StationName};
use crate::network::Network;

use super::frontier::Frontier;

/// Minimum total great-circle distance between two stations, in miles.
///
/// Exact Dijkstra over the stored edge lengths: the priority is the
/// accumulated distance so far and nothing else, so the first time the
/// destination is popped its cost is optimal. Stale frontier entries
/// are skipped rather than decreased in place.
///
/// Returns `Ok(None)` when no path exists, and
/// [`NetworkError::UnknownStation`] when either name is absent from the
/// network. `min_distance(a, a)` is `Ok(Some(0.0))`.
pub fn min_distance(
    network: &Network,
    from: &StationName,
    to: &StationName,
) -> Result<Option<f64>, NetworkError> {
    network.station(from)?;
    network.station(to)?;

    let mut frontier = Frontier::new();
    let mut best: HashMap<StationName, f64> = HashMap::new();
    let mut settled: HashSet<StationName> = HashSet::new();

    frontier.push(0.0f64, from.clone());
    best.insert(from.clone(), 0.0);

    while let Some((cost_km, current)) = frontier.pop() {
        if !settled.insert(current.clone()) {
            continue;
        }

        if current == *to {
            return Ok(Some(cost_km * MILES_PER_KM));
        }

        let station = network.station(&current)?;
        for (neighbor, length_km) in station.edges() {
            if settled.contains(neighbor) {
                continue;
            }
            let candidate = cost_km + length_km;
            if best.get(neighbor).is_none_or(|&known| candidate < known) {
                best.insert(neighbor.clone(), candidate);
                frontier.push(candidate, neighbor.clone());
            }
        }
    }

    debug!(from = %from, to = %to, "no path found");
    Ok(None)
}
