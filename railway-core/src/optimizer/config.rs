//! Annealing configuration.

/// Tunable parameters for the simulated-annealing line optimizer.
///
/// The random source is not part of the configuration; callers pass it
/// separately so each invocation owns an independent, optionally
/// seeded generator.
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    /// Starting temperature for the Metropolis acceptance rule.
    pub initial_temperature: f64,

    /// Multiplicative temperature decay applied every iteration.
    pub cooling_factor: f64,

    /// Hard cap on the number of iterations.
    pub max_iterations: usize,

    /// Stop after this many consecutive rejected candidates.
    pub stagnation_limit: usize,
}

impl AnnealingConfig {
    /// Create a configuration with the given parameters.
    pub fn new(
        initial_temperature: f64,
        cooling_factor: f64,
        max_iterations: usize,
        stagnation_limit: usize,
    ) -> Self {
        Self {
            initial_temperature,
            cooling_factor,
            max_iterations,
            stagnation_limit,
        }
    }
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            cooling_factor: 0.999,
            max_iterations: 50_000,
            stagnation_limit: 1_000,
        }
    }
}
