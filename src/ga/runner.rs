//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives a [`Population`] from initialization to termination
//! and collects the per-generation fitness history.

use super::config::GaConfig;
use super::population::{Population, Status, Termination};
use super::types::{GaProblem, Individual};
use crate::error::GaError;

/// Statistics for a single generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats<F> {
    /// 1-based generation number.
    pub generation: usize,

    /// Total evaluations consumed after this generation.
    pub evaluations: usize,

    /// Fitness of the best member after replacement.
    pub best_fitness: F,

    /// Mean fitness over the whole population after replacement.
    pub average_fitness: f64,
}

/// Result of a GA run.
///
/// `best_history` and `average_history` have one entry per generation and
/// always the same length. They are meant for an external plotter.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual at termination.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// How the run ended.
    pub termination: Termination,

    /// Total fitness evaluations consumed, initialization included.
    pub evaluations: usize,

    /// Number of generations executed after initialization.
    pub generations: usize,

    /// Seed the run's RNG was created from.
    pub seed: u64,

    /// Best fitness at the end of each generation.
    pub best_history: Vec<I::Fitness>,

    /// Average fitness at the end of each generation.
    pub average_history: Vec<f64>,
}

impl<I: Individual> GaResult<I> {
    /// `true` if the run found an optimal individual.
    pub fn is_solved(&self) -> bool {
        self.termination == Termination::Solved
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use nqueens_ga::ga::{GaConfig, GaRunner};
/// use nqueens_ga::queens::NQueens;
///
/// let problem = NQueens::new(8)?;
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// assert!(result.evaluations >= config.population_size);
/// # Ok::<(), nqueens_ga::GaError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs until the problem is solved or the evaluation budget is spent.
    ///
    /// Fails only if `config` is invalid.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>, GaError> {
        let mut population = Population::new(problem, config.clone())?;

        let expected_generations = config
            .max_evaluations
            .saturating_sub(config.population_size)
            .div_ceil(2);
        let mut best_history = Vec::with_capacity(expected_generations);
        let mut average_history = Vec::with_capacity(expected_generations);

        while let Some(stats) = population.step() {
            best_history.push(stats.best_fitness);
            average_history.push(stats.average_fitness);
        }

        let Status::Terminated(termination) = population.status() else {
            unreachable!("step() only returns None once terminated");
        };

        let evaluations = population.evaluations();
        let generations = population.generation();
        let seed = population.seed();
        let best = population.into_best();

        tracing::info!(
            ?termination,
            evaluations,
            generations,
            seed,
            best = ?best.fitness(),
            "run finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            termination,
            evaluations,
            generations,
            seed,
            best_history,
            average_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
