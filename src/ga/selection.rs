//! Parent selection.
//!
//! Tournament selection without replacement: draw `k` distinct members,
//! keep the two fittest as parents.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::seq::index;
use rand::Rng;

/// Selects two parent indices by tournament.
///
/// Samples `tournament_size` distinct indices uniformly from the population,
/// stable-sorts the sample by descending fitness, and returns the first two.
/// Equal-fitness contestants keep their sample order, so ties go to whoever
/// was drawn first.
///
/// # Panics
/// Panics if `tournament_size < 2` or exceeds the population size.
pub fn tournament_pair<I: Individual, R: Rng + ?Sized>(
    population: &[I],
    tournament_size: usize,
    rng: &mut R,
) -> (usize, usize) {
    assert!(tournament_size >= 2, "tournament needs at least two contestants");
    assert!(
        tournament_size <= population.len(),
        "tournament size exceeds population"
    );

    let mut contestants = index::sample(rng, population.len(), tournament_size).into_vec();
    contestants.sort_by(|&a, &b| population[b].fitness().cmp(&population[a].fitness()));

    (contestants[0], contestants[1])
}
