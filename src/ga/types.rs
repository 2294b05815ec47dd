//! Core trait definitions for the GA engine.
//!
//! The two central traits — [`Individual`] and [`GaProblem`] — define the
//! contract between the generic steady-state engine and a concrete problem
//! such as [`NQueens`](crate::queens::NQueens).

use rand::Rng;

use super::runner::GenerationStats;

/// Marker trait for fitness values.
///
/// Fitness is totally ordered and **higher is better** (maximization).
/// A total order keeps sorting and tie-breaking deterministic.
pub trait Fitness: Ord + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for averages and reporting.
    fn to_f64(self) -> f64;
}

impl Fitness for u32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for u64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for usize {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry a cached fitness. The engine calls
/// [`GaProblem::evaluate`] exactly once per new or mutated individual and
/// stores the result via [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone + Send + Sync {
    /// The fitness type.
    type Fitness: Fitness;

    /// Returns the cached fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Stores a freshly computed fitness.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// Implementors describe how to:
///
/// 1. **Create** random individuals
/// 2. **Evaluate** fitness
/// 3. **Cross over** two parents into two offspring
/// 4. **Mutate** an offspring in place
///
/// The engine owns the loop, the RNG, the evaluation budget and the
/// replacement policy.
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random, not yet evaluated individual.
    fn create_individual<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Individual;

    /// Computes the fitness of an individual. Higher is better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Recombines two parents into two offspring.
    ///
    /// Offspring are returned unevaluated; the engine evaluates them after
    /// mutation.
    fn crossover<R: Rng + ?Sized>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> (Self::Individual, Self::Individual);

    /// Mutates an individual in place.
    ///
    /// The engine decides whether to call this (see
    /// [`GaConfig::mutation_rate`](super::GaConfig::mutation_rate)).
    fn mutate<R: Rng + ?Sized>(&self, individual: &mut Self::Individual, rng: &mut R);

    /// The fitness of a perfect solution, if one is known.
    ///
    /// When `Some`, the engine stops as soon as the best individual reaches
    /// it. The default is `None` (run until the budget is exhausted).
    fn optimal_fitness(&self) -> Option<<Self::Individual as Individual>::Fitness> {
        None
    }

    /// Called after every generation with that generation's statistics.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _stats: &GenerationStats<<Self::Individual as Individual>::Fitness>) {}
}
