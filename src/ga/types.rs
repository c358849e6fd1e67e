//! Core type definitions for the GA engine.
//!
//! Three pieces define the contract between the generic engine and a
//! problem domain:
//!
//! - [`AlleleDomain`]: where alleles come from and how one is redrawn
//! - [`Genome`] / [`Individual`]: the encoded candidate and its derived scores
//! - [`FitnessFunction`]: how a genome is scored

use super::runner::GenerationStats;
use crate::error::{Error, Result};
use rand::Rng;
use std::fmt;

/// Fitness of a single individual. Always non-negative.
pub type Fitness = u32;

/// A single gene value.
///
/// Implemented for `i32` (bounded integers), `bool` (binary digits) and
/// `f64` (bounded reals).
pub trait Allele: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Whether a displayed genome is wrapped as `[a b c]` rather than
    /// written as a bare run of alleles.
    const BRACKETED: bool = true;

    /// Writes one allele.
    fn fmt_allele(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Allele for i32 {
    fn fmt_allele(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Allele for f64 {
    fn fmt_allele(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Allele for bool {
    const BRACKETED: bool = false;

    fn fmt_allele(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if *self { "1" } else { "0" })
    }
}

/// The set alleles are drawn from, both at initialization and on mutation.
pub trait AlleleDomain: Clone + fmt::Debug + Send + Sync {
    /// The allele type this domain produces.
    type Allele: Allele;

    /// Draws a fresh allele.
    fn sample<R: Rng>(&self, rng: &mut R) -> Self::Allele;

    /// Produces the replacement for `current` when it is chosen for mutation.
    ///
    /// Defaults to a fresh draw, which may coincide with `current`.
    fn mutate<R: Rng>(&self, _current: Self::Allele, rng: &mut R) -> Self::Allele {
        self.sample(rng)
    }

    /// The allele used to fill placeholder genomes.
    fn zero(&self) -> Self::Allele;

    /// Checks that the domain is non-empty.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Integers in `low..=high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntRange {
    pub low: i32,
    pub high: i32,
}

impl IntRange {
    pub fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// Decimal digits `0..=9`.
    pub fn digits() -> Self {
        Self::new(0, 9)
    }
}

impl AlleleDomain for IntRange {
    type Allele = i32;

    fn sample<R: Rng>(&self, rng: &mut R) -> i32 {
        rng.random_range(self.low..=self.high)
    }

    fn zero(&self) -> i32 {
        0
    }

    fn validate(&self) -> Result<()> {
        if self.low > self.high {
            return Err(Error::invalid("domain", "lower bound exceeds upper bound"));
        }
        Ok(())
    }
}

/// Binary digits. Mutation flips the bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Binary;

impl AlleleDomain for Binary {
    type Allele = bool;

    fn sample<R: Rng>(&self, rng: &mut R) -> bool {
        rng.random_bool(0.5)
    }

    fn mutate<R: Rng>(&self, current: bool, _rng: &mut R) -> bool {
        !current
    }

    fn zero(&self) -> bool {
        false
    }
}

/// Reals in `low..=high`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealRange {
    pub low: f64,
    pub high: f64,
}

impl RealRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

impl AlleleDomain for RealRange {
    type Allele = f64;

    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.low..=self.high)
    }

    fn zero(&self) -> f64 {
        0.0
    }

    fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(Error::invalid("domain", "bounds must be finite"));
        }
        if self.low > self.high {
            return Err(Error::invalid("domain", "lower bound exceeds upper bound"));
        }
        Ok(())
    }
}

/// A fixed-length encoded candidate solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome<A> {
    alleles: Vec<A>,
}

impl<A: Allele> Genome<A> {
    pub fn new(alleles: Vec<A>) -> Self {
        Self { alleles }
    }

    /// Draws `len` alleles from `domain`.
    pub fn random<D, R>(domain: &D, len: usize, rng: &mut R) -> Self
    where
        D: AlleleDomain<Allele = A>,
        R: Rng,
    {
        Self::new((0..len).map(|_| domain.sample(rng)).collect())
    }

    /// A genome of `len` copies of the domain's zero allele.
    pub fn zeroed<D: AlleleDomain<Allele = A>>(domain: &D, len: usize) -> Self {
        Self::new(vec![domain.zero(); len])
    }

    pub fn len(&self) -> usize {
        self.alleles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alleles.is_empty()
    }

    pub fn alleles(&self) -> &[A] {
        &self.alleles
    }

    pub fn get(&self, index: usize) -> Option<A> {
        self.alleles.get(index).copied()
    }

    /// Overwrites the allele at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, allele: A) {
        self.alleles[index] = allele;
    }

    pub fn into_alleles(self) -> Vec<A> {
        self.alleles
    }
}

impl Genome<bool> {
    /// Parses a string of `0`/`1` characters.
    pub fn from_bit_str(bits: &str) -> Option<Self> {
        bits.chars()
            .map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Self::new)
    }
}

impl<A: Allele> From<Vec<A>> for Genome<A> {
    fn from(alleles: Vec<A>) -> Self {
        Self::new(alleles)
    }
}

impl<A: Allele> fmt::Display for Genome<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if A::BRACKETED {
            f.write_str("[")?;
        }
        for (i, allele) in self.alleles.iter().enumerate() {
            if i > 0 && A::BRACKETED {
                f.write_str(" ")?;
            }
            allele.fmt_allele(f)?;
        }
        if A::BRACKETED {
            f.write_str("]")?;
        }
        Ok(())
    }
}

/// A genome together with its derived fitness and selection probability.
///
/// Both derived values start at zero and are recomputed by the engine
/// every generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual<A> {
    genome: Genome<A>,
    fitness: Fitness,
    probability: f64,
}

impl<A: Allele> Individual<A> {
    pub fn new(genome: Genome<A>) -> Self {
        Self {
            genome,
            fitness: 0,
            probability: 0.0,
        }
    }

    pub fn genome(&self) -> &Genome<A> {
        &self.genome
    }

    pub(crate) fn genome_mut(&mut self) -> &mut Genome<A> {
        &mut self.genome
    }

    pub fn fitness(&self) -> Fitness {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: Fitness) {
        self.fitness = fitness;
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn set_probability(&mut self, probability: f64) {
        self.probability = probability;
    }
}

impl<A: Allele> From<Genome<A>> for Individual<A> {
    fn from(genome: Genome<A>) -> Self {
        Self::new(genome)
    }
}

/// Scores a genome for one problem domain.
///
/// # Implementing
///
/// ```
/// use evogen::ga::{Fitness, FitnessFunction, Genome};
///
/// struct SumOfDigits;
///
/// impl FitnessFunction for SumOfDigits {
///     type Allele = i32;
///     fn evaluate(&self, genome: &Genome<i32>) -> Fitness {
///         genome.alleles().iter().map(|&g| g.max(0) as u32).sum()
///     }
/// }
/// ```
pub trait FitnessFunction: Send + Sync {
    /// The allele type of the genomes this function scores.
    type Allele: Allele;

    /// Computes the (non-negative) fitness of a genome. Higher is better.
    fn evaluate(&self, genome: &Genome<Self::Allele>) -> Fitness;

    /// The genome length this function requires, if any.
    ///
    /// The engine rejects configurations whose `individual_size` differs.
    fn genome_len(&self) -> Option<usize> {
        None
    }

    /// Called at the end of each generation.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _stats: &GenerationStats) {}
}
