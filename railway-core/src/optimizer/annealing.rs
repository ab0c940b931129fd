//! Simulated annealing over station orderings.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::domain::{MILES_PER_KM, NetworkError, StationName};
use crate::network::Network;

use super::config::AnnealingConfig;
use super::matrix::DistanceMatrix;

/// A proposed railway line: an ordering of the requested stations and
/// the total track length it implies.
#[derive(Debug, Clone, PartialEq)]
pub struct RailwayLine {
    /// The stations in visiting order.
    pub stations: Vec<StationName>,

    /// Sum of consecutive great-circle distances along the order,
    /// in miles.
    pub total_miles: f64,
}

/// Order a set of stations into an approximately shortest line.
///
/// Simulated annealing over permutations: start from a random
/// shuffle, propose swapping two random positions each iteration, and
/// accept by the Metropolis criterion — improvements always, worsening
/// moves with probability `exp((current − candidate) / T)` where the
/// temperature `T` decays multiplicatively. The search stops after
/// [`AnnealingConfig::stagnation_limit`] consecutive rejections or
/// [`AnnealingConfig::max_iterations`] iterations.
///
/// All randomness comes from the caller-supplied `rng`, so a seeded
/// generator makes the result reproducible. Every input name must
/// exist in the network; an empty input yields an empty line with zero
/// distance and a single station yields itself.
///
/// The returned order is always a permutation of `names`, and
/// `total_miles` is always the true length of the returned order.
pub fn new_railway_line<R: Rng + ?Sized>(
    network: &Network,
    names: &[StationName],
    config: &AnnealingConfig,
    rng: &mut R,
) -> Result<RailwayLine, NetworkError> {
    let stations = names
        .iter()
        .map(|name| network.station(name))
        .collect::<Result<Vec<_>, _>>()?;

    if stations.len() <= 1 {
        return Ok(RailwayLine {
            stations: names.to_vec(),
            total_miles: 0.0,
        });
    }

    let matrix = DistanceMatrix::from_stations(&stations);
    let n = stations.len();

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    let mut current_km = matrix.path_length(&order);

    let mut temperature = config.initial_temperature;
    let mut stagnation = 0usize;
    let mut iterations = 0usize;

    for _ in 0..config.max_iterations {
        if stagnation >= config.stagnation_limit {
            break;
        }
        iterations += 1;

        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n);
        while j == i {
            j = rng.random_range(0..n);
        }

        order.swap(i, j);
        let candidate_km = matrix.path_length(&order);
        let delta = candidate_km - current_km;

        let accept = delta < 0.0 || rng.random::<f64>() < (-delta / temperature).exp();
        if accept {
            current_km = candidate_km;
            stagnation = 0;
        } else {
            order.swap(i, j);
            stagnation += 1;
        }

        temperature *= config.cooling_factor;
    }

    // Recomputing from the final order keeps the reported length
    // honest even if incremental bookkeeping ever drifts.
    let total_km = matrix.path_length(&order);

    debug!(
        stations = n,
        iterations,
        final_temperature = temperature,
        total_km,
        "annealing finished"
    );

    Ok(RailwayLine {
        stations: order.iter().map(|&idx| names[idx].clone()).collect(),
        total_miles: total_km * MILES_PER_KM,
    })
}
