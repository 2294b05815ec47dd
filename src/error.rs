//! Error types.

use thiserror::Error;

/// Precondition violations detected when building boards or engines.
///
/// The evolutionary loop itself never fails; these are raised only at
/// construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    #[error("board size must be at least 2, got {0}")]
    BoardTooSmall(usize),

    #[error("tournament size must be at least 2, got {0}")]
    TournamentTooSmall(usize),

    #[error("population size {population} is smaller than tournament size {tournament}")]
    PopulationTooSmall { population: usize, tournament: usize },

    #[error("evaluation budget must be at least 1")]
    ZeroBudget,

    #[error("mutation rate must be within [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("placements {0:?} are not a permutation of 0..{len}", len = .0.len())]
    InvalidPermutation(Vec<usize>),
}
