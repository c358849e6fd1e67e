//! Recombination and mutation operators.
//!
//! Both operators work on any allele type:
//!
//! - [`one_point_crossover`]: cut both parents at one random point and swap tails
//! - [`mutate`]: redraw exactly one gene chosen below the mutation rate
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*

use super::types::{Allele, AlleleDomain, Genome, Individual};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Splits both parents at `point` and swaps their tails.
///
/// Returns `(a[..point] + b[point..], b[..point] + a[point..])`.
///
/// # Panics
/// Panics if the parents have different lengths or `point > len`.
pub fn crossover_at<A: Allele>(
    a: &Genome<A>,
    b: &Genome<A>,
    point: usize,
) -> (Genome<A>, Genome<A>) {
    let (a, b) = (a.alleles(), b.alleles());
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    assert!(point <= a.len(), "crossover point out of bounds");

    let first = a[..point].iter().chain(&b[point..]).copied().collect();
    let second = b[..point].iter().chain(&a[point..]).copied().collect();
    (Genome::new(first), Genome::new(second))
}

/// Single-point crossover with the point drawn uniformly in `[0, len)`.
///
/// The offspring are fresh individuals with zero fitness and probability.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn one_point_crossover<A: Allele, R: Rng>(
    parent_a: &Individual<A>,
    parent_b: &Individual<A>,
    rng: &mut R,
) -> [Individual<A>; 2] {
    let len = parent_a.genome().len();
    assert!(len > 0, "parents must not be empty");

    let point = rng.random_range(0..len);
    let (first, second) = crossover_at(parent_a.genome(), parent_b.genome(), point);
    [Individual::new(first), Individual::new(second)]
}

// ============================================================================
// Mutation
// ============================================================================

/// Replaces the gene at an index drawn from `[0, rate)` with a value from
/// `domain`, and returns that index.
///
/// `rate` is an index bound, not a probability; one gene always changes
/// hands (for non-binary domains the fresh draw may equal the old value).
///
/// # Panics
/// Panics if `rate` is 0 or exceeds the genome length.
pub fn mutate<D, R>(
    genome: &mut Genome<D::Allele>,
    rate: usize,
    domain: &D,
    rng: &mut R,
) -> usize
where
    D: AlleleDomain,
    R: Rng,
{
    assert!(rate > 0 && rate <= genome.len(), "mutation rate out of bounds");

    let idx = rng.random_range(0..rate);
    let current = genome.alleles()[idx];
    genome.set(idx, domain.mutate(current, rng));
    idx
}

/// Applies [`mutate`] once to every child.
pub fn mutate_all<D, R>(
    children: &mut [Individual<D::Allele>],
    rate: usize,
    domain: &D,
    rng: &mut R,
) where
    D: AlleleDomain,
    R: Rng,
{
    for child in children {
        mutate(child.genome_mut(), rate, domain, rng);
    }
}
