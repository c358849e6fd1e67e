//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use super::types::{AlleleDomain, Binary, IntRange, RealRange};
use crate::error::{Error, Result};

/// What to do when a generation's total fitness is zero and selection
/// probabilities cannot be computed as `fitness / total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroFitnessPolicy {
    /// Give every individual probability `1 / len`.
    #[default]
    Uniform,

    /// Abort the run with [`Error::ZeroTotalFitness`].
    Fail,
}

/// Configuration for the Genetic Algorithm.
///
/// `D` is the allele domain the population is drawn from.
///
/// # Defaults
///
/// ```
/// use evogen::ga::{GaConfig, IntRange};
///
/// let config = GaConfig::new(IntRange::digits());
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.individual_size, 5);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.effective_mutation_rate(), 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evogen::ga::{Binary, GaConfig, ZeroFitnessPolicy};
///
/// let config = GaConfig::new(Binary)
///     .with_population_size(40)
///     .with_individual_size(16)
///     .with_generations(200)
///     .with_zero_fitness(ZeroFitnessPolicy::Fail)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig<D> {
    /// Number of individuals generated at start-up.
    ///
    /// Also the number of parent slots drawn by selection every generation,
    /// even though the live population grows past it.
    pub population_size: usize,

    /// Genome length, identical for every individual.
    pub individual_size: usize,

    /// Number of generations to run. There is no early stop.
    pub generations: usize,

    /// Exclusive upper bound of the gene index picked for mutation.
    ///
    /// This is not a probability: every child mutates exactly one gene.
    /// `None` means "the genome length".
    pub mutation_rate: Option<usize>,

    /// Behaviour when total fitness is zero.
    pub zero_fitness: ZeroFitnessPolicy,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Where alleles are drawn from.
    pub domain: D,
}

impl<D: AlleleDomain> GaConfig<D> {
    /// Creates a configuration with default sizes over `domain`.
    pub fn new(domain: D) -> Self {
        Self {
            population_size: 100,
            individual_size: 5,
            generations: 100,
            mutation_rate: None,
            zero_fitness: ZeroFitnessPolicy::default(),
            seed: None,
            domain,
        }
    }

    /// Sets the initial population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the genome length.
    pub fn with_individual_size(mut self, n: usize) -> Self {
        self.individual_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the exclusive upper bound of the mutated gene index.
    pub fn with_mutation_rate(mut self, rate: usize) -> Self {
        self.mutation_rate = Some(rate);
        self
    }

    /// Sets the zero-total-fitness policy.
    pub fn with_zero_fitness(mut self, policy: ZeroFitnessPolicy) -> Self {
        self.zero_fitness = policy;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the allele domain.
    pub fn with_domain(mut self, domain: D) -> Self {
        self.domain = domain;
        self
    }

    /// The mutation index bound actually used by the engine.
    pub fn effective_mutation_rate(&self) -> usize {
        self.mutation_rate.unwrap_or(self.individual_size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::invalid("population_size", "must be at least 1"));
        }
        if self.individual_size == 0 {
            return Err(Error::invalid("individual_size", "must be at least 1"));
        }
        if self.generations == 0 {
            return Err(Error::invalid("generations", "must be at least 1"));
        }
        let rate = self.effective_mutation_rate();
        if rate == 0 {
            return Err(Error::invalid("mutation_rate", "must be at least 1"));
        }
        if rate > self.individual_size {
            return Err(Error::invalid(
                "mutation_rate",
                "must not exceed individual_size",
            ));
        }
        self.domain.validate()
    }
}

impl GaConfig<IntRange> {
    /// Solves `a + 2b - 3c + d + 4e = 30` over digits.
    ///
    /// - Population: 100, Genome: 5, Generations: 100
    pub fn equation() -> Self {
        Self::new(IntRange::digits())
    }
}

impl GaConfig<Binary> {
    /// MAXONE over 10-bit strings.
    ///
    /// - Population: 100, Genome: 10, Generations: 1000
    pub fn max_one() -> Self {
        Self::new(Binary)
            .with_individual_size(10)
            .with_generations(1000)
    }
}

impl GaConfig<RealRange> {
    /// Intercept/slope search over `[0, 300]`.
    ///
    /// - Population: 100, Genome: 2, Generations: 1000
    pub fn regression() -> Self {
        Self::new(RealRange::new(0.0, 300.0))
            .with_individual_size(2)
            .with_generations(1000)
    }
}
