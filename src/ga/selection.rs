//! Fitness-proportionate (roulette-wheel) selection.
//!
//! The wheel is an ordered list of cumulative probability boundaries.
//! Slot `i` owns the half-open interval `(bounds[i-1], bounds[i]]`, with
//! an implicit lower bound of 0 for the first slot. Spins are uniform in
//! `[0, 1)` and are resolved by scanning slots in ascending index order.
//!
//! A spin that lands in no slot (exactly 0, or beyond the wheel's total
//! mass when the slots cover less than the whole population) resolves to
//! index 0.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use super::population::Population;
use super::types::Allele;
use log::trace;
use rand::Rng;

/// Cumulative-probability partition used for roulette-wheel sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct RouletteWheel {
    bounds: Vec<f64>,
}

impl RouletteWheel {
    /// Builds a wheel from per-slot probabilities, in slot order.
    pub fn from_probabilities<I: IntoIterator<Item = f64>>(probabilities: I) -> Self {
        let mut total = 0.0;
        let bounds = probabilities
            .into_iter()
            .map(|p| {
                total += p;
                total
            })
            .collect();
        Self { bounds }
    }

    /// Builds a wheel over the first `slots` individuals of `population`.
    ///
    /// Probabilities are read as stored; they were normalised over the
    /// whole population, so the wheel's mass falls short of 1 once the
    /// population has grown past `slots`.
    pub fn from_population<A: Allele>(population: &Population<A>, slots: usize) -> Self {
        let slots = slots.min(population.len());
        Self::from_probabilities(population.iter().take(slots).map(|ind| ind.probability()))
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Total probability mass covered by the wheel.
    pub fn total(&self) -> f64 {
        self.bounds.last().copied().unwrap_or(0.0)
    }

    /// The `(lower, upper]` interval of slot `index`.
    pub fn interval(&self, index: usize) -> Option<(f64, f64)> {
        let upper = *self.bounds.get(index)?;
        let lower = if index == 0 { 0.0 } else { self.bounds[index - 1] };
        Some((lower, upper))
    }

    /// The first slot whose interval contains `spin`.
    pub fn locate(&self, spin: f64) -> Option<usize> {
        let mut lower = 0.0;
        for (i, &upper) in self.bounds.iter().enumerate() {
            if lower < spin && spin <= upper {
                return Some(i);
            }
            lower = upper;
        }
        None
    }

    /// Spins the wheel `count` times.
    ///
    /// Unresolved spins yield index 0.
    pub fn select<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<usize> {
        let mut misses = 0usize;
        let chosen = (0..count)
            .map(|_| {
                let spin: f64 = rng.random();
                self.locate(spin).unwrap_or_else(|| {
                    misses += 1;
                    0
                })
            })
            .collect();
        if misses > 0 {
            trace!(
                "{misses}/{count} spins fell outside the wheel (mass {:.4})",
                self.total()
            );
        }
        chosen
    }
}

/// Draws `count` parent indices from the first `count` individuals of
/// `population`, whose probabilities must already be assigned.
pub fn roulette_selection<A: Allele, R: Rng>(
    population: &Population<A>,
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    RouletteWheel::from_population(population, count).select(count, rng)
}
