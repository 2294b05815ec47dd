//! Permutation-preserving genetic operators.
//!
//! Crossover and mutation operators for permutation-encoded chromosomes.
//! They operate on `&[usize]` index vectors and know nothing about queens:
//! any permutation problem can use them.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: keep a parent prefix, fill the rest in the
//!   other parent's order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange the values at two distinct positions — O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, §4.5

use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Draws a crossover point uniformly from `1..=n-2`.
///
/// Keeps both sides of the cut non-empty and excludes a full copy of the
/// primary parent. Boards with `n <= 2` have a single legal cut at `1`.
pub fn crossover_point<R: Rng + ?Sized>(n: usize, rng: &mut R) -> usize {
    if n <= 3 {
        return 1;
    }
    rng.random_range(1..=n - 2)
}

/// Single-point, order-preserving crossover for permutations.
///
/// Returns two children:
///
/// - child A = `parent1[..point]`, then every value of `parent2` in
///   `parent2`'s order that is not already in that prefix
/// - child B = the same construction with the parents swapped
///
/// Both children are permutations whenever the parents are.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or `point > n`.
pub fn single_point_crossover(
    parent1: &[usize],
    parent2: &[usize],
    point: usize,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(point <= parent1.len(), "crossover point out of range");

    (
        prefix_then_fill(parent1, parent2, point),
        prefix_then_fill(parent2, parent1, point),
    )
}

/// Build one child: `primary[..point]` followed by the remaining values of
/// `donor` in donor order.
fn prefix_then_fill(primary: &[usize], donor: &[usize], point: usize) -> Vec<usize> {
    let n = primary.len();
    let mut child = Vec::with_capacity(n);
    let mut taken = vec![false; n];

    for &val in &primary[..point] {
        child.push(val);
        taken[val] = true;
    }

    for &val in donor {
        if !taken[val] {
            child.push(val);
            taken[val] = true;
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange the values at two **distinct** random positions.
///
/// Every unordered pair of positions is equally likely. No-op for
/// permutations shorter than 2.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng + ?Sized>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let picked = index::sample(rng, n, 2);
    perm.swap(picked.index(0), picked.index(1));
}

/// Returns `true` if `perm` is a permutation of `0..perm.len()`.
pub fn is_permutation(perm: &[usize]) -> bool {
    let n = perm.len();
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
