//! Steady-state Genetic Algorithm engine.
//!
//! A small, trait-based GA engine. Problems plug in by implementing
//! [`GaProblem`], which specifies how to create, evaluate, cross over and
//! mutate individuals. The engine owns everything else: the RNG, the
//! evaluation budget, tournament selection and elitist replacement.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with a cached fitness
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, tournament, budget)
//! - [`Population`]: Stateful engine; one [`step`](Population::step) per generation
//! - [`GaRunner`]: Runs a population to termination
//! - [`GaResult`]: Final result with the fitness history
//!
//! # Generation
//!
//! 1. Tournament: draw `k` distinct members, the best two become parents
//! 2. Crossover: two offspring from a single cut point
//! 3. Mutation: each offspring mutated with probability `mutation_rate`
//! 4. Evaluation: two evaluations charged against the budget
//! 5. Replacement: offspring replace the two worst members, then re-sort
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Syswerda (1991), "A Study of Reproduction in Generational and Steady-State
//!   Genetic Algorithms"

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use population::{Population, Status, Termination};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::tournament_pair;
pub use types::{Fitness, GaProblem, Individual};
