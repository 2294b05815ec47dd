//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the steady-state loop.

use crate::error::GaError;

/// Configuration for the steady-state genetic algorithm.
///
/// # Defaults
///
/// ```
/// use nqueens_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.tournament_size, 5);
/// assert_eq!(config.max_evaluations, 10_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use nqueens_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.5)
///     .with_max_evaluations(50_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of distinct contestants drawn per tournament.
    ///
    /// The two fittest contestants become the parents.
    pub tournament_size: usize,

    /// Probability of applying mutation to each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Total fitness evaluations allowed, initialization included.
    pub max_evaluations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            tournament_size: 5,
            mutation_rate: 0.8,
            max_evaluations: 10_000,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.tournament_size < 2 {
            return Err(GaError::TournamentTooSmall(self.tournament_size));
        }
        if self.population_size < self.tournament_size {
            return Err(GaError::PopulationTooSmall {
                population: self.population_size,
                tournament: self.tournament_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidMutationRate(self.mutation_rate));
        }
        if self.max_evaluations == 0 {
            return Err(GaError::ZeroBudget);
        }
        Ok(())
    }
}
