//! Genetic Algorithm engine.
//!
//! A generational GA over fixed-length genomes. The allele representation
//! and the fitness function are plugged in; everything else (roulette-wheel
//! selection, single-point crossover, single-gene mutation and population
//! growth) is shared.
//!
//! # Core Traits
//!
//! - [`AlleleDomain`]: Where alleles are drawn from ([`IntRange`], [`Binary`], [`RealRange`])
//! - [`FitnessFunction`]: Scores a [`Genome`]; higher is better
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters and per-problem presets
//! - [`GaEngine`]: Executes the generational loop
//! - [`GaResult`]: Best individual, best population total and per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and single-gene mutation
//! - [`selection`]: Roulette-wheel sampling
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
pub mod operators;
mod population;
mod runner;
pub mod selection;
mod types;

pub use config::{GaConfig, ZeroFitnessPolicy};
pub use fitness::{CountOnes, LinearEquation, RegressionFit};
pub use population::{children_per_generation, expected_population_len, Population};
pub use runner::{EngineState, GaEngine, GaResult, GenerationStats};
pub use selection::RouletteWheel;
pub use types::{
    Allele, AlleleDomain, Binary, Fitness, FitnessFunction, Genome, Individual, IntRange,
    RealRange,
};
