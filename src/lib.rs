//! Genetic algorithm for the N-Queens placement problem.
//!
//! Evolves a population of permutation-encoded boards toward an
//! arrangement where no two queens attack each other.
//!
//! - [`queens`]: board encoding, fitness, and the [`NQueens`](queens::NQueens)
//!   problem definition
//! - [`ga`]: the steady-state GA engine (tournament selection, single-point
//!   crossover, swap mutation, elitist replacement)
//! - [`random`]: seeded RNG construction
//!
//! # Example
//!
//! ```
//! use nqueens_ga::ga::{GaConfig, GaRunner};
//! use nqueens_ga::queens::NQueens;
//!
//! let problem = NQueens::new(8)?;
//! let config = GaConfig::default().with_population_size(100).with_seed(7);
//! let result = GaRunner::run(&problem, &config)?;
//!
//! if result.is_solved() {
//!     assert_eq!(result.best_fitness, 28);
//! }
//! assert_eq!(result.best_history.len(), result.average_history.len());
//! # Ok::<(), nqueens_ga::GaError>(())
//! ```
//!
//! The algorithm is stochastic: a run may exhaust its evaluation budget
//! without finding a solution. That outcome is reported as
//! [`Termination::BudgetExhausted`](ga::Termination::BudgetExhausted), not
//! as an error.

mod error;
pub mod ga;
pub mod queens;
pub mod random;

pub use error::GaError;
