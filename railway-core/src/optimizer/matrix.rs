//! Dense pairwise distance matrix.

use crate::network::Station;

/// A dense n×n matrix of pairwise great-circle distances in
/// kilometers, stored in row-major order.
///
/// Built once per optimizer call so the annealing loop evaluates
/// candidate orderings with lookups instead of trigonometry.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the pairwise distance matrix for the given stations.
    ///
    /// Distances ignore adjacency: a new line may lay track between
    /// any two stations.
    pub fn from_stations(stations: &[&Station]) -> Self {
        let n = stations.len();
        let mut matrix = Self {
            data: vec![0.0; n * n],
            size: n,
        };
        for i in 0..n {
            for j in (i + 1)..n {
                let d = stations[i].distance_to(stations[j]);
                matrix.set(i, j, d);
                matrix.set(j, i, d);
            }
        }
        matrix
    }

    /// Returns the distance between stations `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    fn set(&mut self, i: usize, j: usize, distance: f64) {
        self.data[i * self.size + j] = distance;
    }

    /// Number of stations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total length of a path visiting stations in the given order:
    /// the sum of consecutive pairwise distances. An order of length
    /// zero or one has length 0.
    pub fn path_length(&self, order: &[usize]) -> f64 {
        order
            .windows(2)
            .map(|pair| self.get(pair[0], pair[1]))
            .sum()
    }
}
