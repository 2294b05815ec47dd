//! The N-Queens problem on permutation-encoded boards.
//!
//! A board of size `n` is a permutation of `0..n`: index = row,
//! value = column. One queen per row and per column is guaranteed by the
//! encoding, so only diagonal attacks remain to be resolved.
//!
//! Fitness is the number of non-attacking row pairs, with a maximum of
//! `n * (n - 1) / 2` for a valid solution (28 on the classic 8×8 board).

use std::fmt;

use rand::Rng;

use crate::error::GaError;
use crate::ga::operators::{crossover_point, is_permutation, single_point_crossover, swap_mutation};
use crate::ga::{GaProblem, Individual};
use crate::random::random_permutation;

/// Fitness of a conflict-free board of size `n`.
///
/// Computed in `u64`, so the pair count stays exact well past the point
/// where an O(n²) evaluation is practical.
pub fn max_fitness(n: usize) -> u64 {
    let n = n as u64;
    n * n.saturating_sub(1) / 2
}

/// Counts row pairs whose queens do not attack each other.
///
/// A pair `(i, j)` is non-attacking when the columns differ and
/// `|p[i] - p[j]| != |i - j|`. O(n²).
pub fn non_attacking_pairs(placements: &[usize]) -> u64 {
    let n = placements.len();
    let mut count = 0u64;
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (placements[i], placements[j]);
            if a != b && a.abs_diff(b) != j - i {
                count += 1;
            }
        }
    }
    count
}

/// One candidate board and its cached fitness.
///
/// The fitness is only meaningful once the board has been evaluated;
/// boards produced by crossover start with a fitness of zero and are
/// evaluated by the engine after mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Board {
    placements: Vec<usize>,
    fitness: u64,
}

impl Board {
    /// Builds an evaluated board from explicit placements.
    ///
    /// ```
    /// use nqueens_ga::queens::Board;
    ///
    /// let board = Board::new(vec![1, 3, 0, 2])?;
    /// assert_eq!(board.fitness_value(), 6);
    /// assert!(board.is_solution());
    /// # Ok::<(), nqueens_ga::GaError>(())
    /// ```
    pub fn new(placements: Vec<usize>) -> Result<Self, GaError> {
        if !is_permutation(&placements) {
            return Err(GaError::InvalidPermutation(placements));
        }
        let fitness = non_attacking_pairs(&placements);
        Ok(Self { placements, fitness })
    }

    /// Builds an evaluated board from a uniformly random permutation.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let placements = random_permutation(n, rng);
        let fitness = non_attacking_pairs(&placements);
        Self { placements, fitness }
    }

    fn unevaluated(placements: Vec<usize>) -> Self {
        Self {
            placements,
            fitness: 0,
        }
    }

    /// Column of the queen in each row.
    pub fn placements(&self) -> &[usize] {
        &self.placements
    }

    /// Board size `n` (rows, and columns).
    pub fn size(&self) -> usize {
        self.placements.len()
    }

    /// Cached number of non-attacking pairs.
    pub fn fitness_value(&self) -> u64 {
        self.fitness
    }

    /// `true` if no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.fitness == max_fitness(self.size())
    }
}

impl Individual for Board {
    type Fitness = u64;

    fn fitness(&self) -> u64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: u64) {
        self.fitness = fitness;
    }
}

impl fmt::Display for Board {
    /// Renders one line per row, `Q` for a queen and `.` for an empty square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for &col in &self.placements {
            let row: String = (0..n)
                .map(|c| if c == col { 'Q' } else { '.' })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// The N-Queens problem for a fixed board size.
#[derive(Debug, Clone, Copy)]
pub struct NQueens {
    board_size: usize,
}

impl NQueens {
    /// Creates the problem for an `n`×`n` board.
    ///
    /// Fails for `n < 2`, where crossover has no valid cut.
    pub fn new(board_size: usize) -> Result<Self, GaError> {
        if board_size < 2 {
            return Err(GaError::BoardTooSmall(board_size));
        }
        Ok(Self { board_size })
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.board_size
    }
}

impl GaProblem for NQueens {
    type Individual = Board;

    fn create_individual<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        Board::unevaluated(random_permutation(self.board_size, rng))
    }

    fn evaluate(&self, board: &Board) -> u64 {
        non_attacking_pairs(&board.placements)
    }

    fn crossover<R: Rng + ?Sized>(&self, parent1: &Board, parent2: &Board, rng: &mut R) -> (Board, Board) {
        let point = crossover_point(self.board_size, rng);
        let (a, b) = single_point_crossover(&parent1.placements, &parent2.placements, point);
        (Board::unevaluated(a), Board::unevaluated(b))
    }

    fn mutate<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) {
        swap_mutation(&mut board.placements, rng);
    }

    fn optimal_fitness(&self) -> Option<u64> {
        Some(max_fitness(self.board_size))
    }
}
