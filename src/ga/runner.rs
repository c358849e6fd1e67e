//! GA generational loop execution.
//!
//! [`GaEngine`] orchestrates the complete evolutionary process:
//! initialization → (evaluation → selection → crossover → mutation → growth)* → report.
//!
//! The population is never culled. Each generation appends
//! [`children_per_generation`] offspring, so after `g` generations it holds
//! [`expected_population_len`]`(n, g)` individuals.
//!
//! [`children_per_generation`]: super::population::children_per_generation
//! [`expected_population_len`]: super::population::expected_population_len

use super::config::GaConfig;
use super::operators::{mutate_all, one_point_crossover};
use super::population::Population;
use super::selection::roulette_selection;
use super::types::{Allele, AlleleDomain, Fitness, FitnessFunction, Genome, Individual};
use crate::error::{Error, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Lifecycle of a [`GaEngine`].
///
/// A freshly populated engine is `Running { generation: 0 }`; `Finished`
/// is reached once the budget is spent and the result can be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed, no population yet.
    Uninitialized,
    /// Initial random population generated; `generation` generations done.
    Running { generation: usize },
    /// The generation budget is exhausted.
    Finished,
}

/// Statistics for one completed generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation index.
    pub generation: usize,

    /// Live population size when the generation was evaluated.
    pub evaluated: usize,

    /// Sum of fitness over the evaluated population.
    pub total_fitness: u64,

    /// Highest individual fitness in the evaluated population.
    pub max_fitness: Fitness,

    /// Offspring appended at the end of the generation.
    pub children: usize,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult<A> {
    /// Fittest individual of the final population by stored fitness.
    ///
    /// Offspring appended in the last generation were never evaluated and
    /// carry fitness 0. If nothing has positive fitness this is a zeroed
    /// placeholder genome.
    pub best: Individual<A>,

    /// Highest population *total* fitness seen in any generation.
    ///
    /// This is a sum over the population, not an individual's score.
    pub best_total_fitness: u64,

    /// Highest individual fitness seen in any evaluated generation.
    pub best_individual_fitness: Fitness,

    /// Number of generations executed.
    pub generations: usize,

    /// Final live population size.
    pub population_len: usize,

    /// Per-generation statistics.
    pub history: Vec<GenerationStats>,
}

impl<A: Allele> fmt::Display for GaResult<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Best fitness: {}", self.best_total_fitness)?;
        writeln!(f, "Actual best: {}", self.best.genome())?;
        write!(f, "Actual best fitness: {}", self.best.fitness())
    }
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use evogen::ga::{CountOnes, GaConfig, GaEngine};
///
/// let config = GaConfig::max_one().with_generations(20).with_seed(42);
/// let result = GaEngine::new(config, CountOnes)?.run()?;
/// assert!(result.best.fitness() <= 10);
/// # Ok::<(), evogen::Error>(())
/// ```
pub struct GaEngine<D, F, R = StdRng>
where
    D: AlleleDomain,
    F: FitnessFunction<Allele = D::Allele>,
{
    config: GaConfig<D>,
    fitness: F,
    rng: R,
    population: Population<D::Allele>,
    state: EngineState,
    best_total_fitness: u64,
    best_individual_fitness: Fitness,
    history: Vec<GenerationStats>,
}

impl<D, F> GaEngine<D, F, StdRng>
where
    D: AlleleDomain,
    F: FitnessFunction<Allele = D::Allele>,
{
    /// Creates an engine seeded from `config.seed`, or from the OS when unset.
    pub fn new(config: GaConfig<D>, fitness: F) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, fitness, rng)
    }
}

impl<D, F, R> GaEngine<D, F, R>
where
    D: AlleleDomain,
    F: FitnessFunction<Allele = D::Allele>,
    R: Rng,
{
    /// Creates an engine drawing from `rng`. `config.seed` is ignored.
    pub fn with_rng(config: GaConfig<D>, fitness: F, rng: R) -> Result<Self> {
        config.validate()?;
        if let Some(len) = fitness.genome_len() {
            if len != config.individual_size {
                return Err(Error::invalid(
                    "individual_size",
                    "does not match the genome length the fitness function requires",
                ));
            }
        }

        Ok(Self {
            history: Vec::with_capacity(config.generations),
            config,
            fitness,
            rng,
            population: Population::new(Vec::new()),
            state: EngineState::Uninitialized,
            best_total_fitness: 0,
            best_individual_fitness: 0,
        })
    }

    pub fn config(&self) -> &GaConfig<D> {
        &self.config
    }

    pub fn fitness(&self) -> &F {
        &self.fitness
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn population(&self) -> &Population<D::Allele> {
        &self.population
    }

    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Generates the initial random population.
    ///
    /// Has no effect once the engine has left [`EngineState::Uninitialized`].
    pub fn initialize(&mut self) {
        if self.state != EngineState::Uninitialized {
            return;
        }
        self.population = Population::random(
            &self.config.domain,
            self.config.population_size,
            self.config.individual_size,
            &mut self.rng,
        );
        self.state = EngineState::Running { generation: 0 };
    }

    /// Runs one generation and returns its statistics, or `None` once the
    /// generation budget is spent.
    ///
    /// Initializes the population first if needed.
    pub fn step(&mut self) -> Result<Option<GenerationStats>> {
        self.initialize();
        let generation = match self.state {
            EngineState::Running { generation } => generation,
            _ => return Ok(None),
        };
        if generation >= self.config.generations {
            self.state = EngineState::Finished;
            return Ok(None);
        }

        // Evaluate
        let evaluated = self.population.len();
        let total = self.population.evaluate(&self.fitness);
        let max_fitness = self.population.max_fitness();
        self.best_total_fitness = self.best_total_fitness.max(total);
        self.best_individual_fitness = self.best_individual_fitness.max(max_fitness);

        // Select
        self.population
            .assign_probabilities(total, self.config.zero_fitness)?;
        let chosen = roulette_selection(
            &self.population,
            self.config.population_size,
            &mut self.rng,
        );

        // Recombine consecutive selections; the tail is never a first parent
        let pairs = (chosen.len() / 2).saturating_sub(1);
        let mut children = Vec::with_capacity(2 * pairs);
        for i in 0..pairs {
            let parent_a = &self.population[chosen[i]];
            let parent_b = &self.population[chosen[i + 1]];
            children.extend(one_point_crossover(parent_a, parent_b, &mut self.rng));
        }

        // Mutate
        mutate_all(
            &mut children,
            self.config.effective_mutation_rate(),
            &self.config.domain,
            &mut self.rng,
        );

        // Grow
        let stats = GenerationStats {
            generation: generation + 1,
            evaluated,
            total_fitness: total,
            max_fitness,
            children: children.len(),
        };
        self.population.extend(children);

        debug!(
            "generation {}: evaluated {} individuals, total fitness {}, max {}, +{} children",
            stats.generation,
            stats.evaluated,
            stats.total_fitness,
            stats.max_fitness,
            stats.children
        );
        self.fitness.on_generation(&stats);
        self.history.push(stats);

        self.state = if stats.generation >= self.config.generations {
            EngineState::Finished
        } else {
            EngineState::Running {
                generation: stats.generation,
            }
        };
        Ok(Some(stats))
    }

    /// The fittest individual of the current population by stored fitness,
    /// or a zeroed placeholder if none has positive fitness.
    pub fn best(&self) -> Individual<D::Allele> {
        let placeholder = Individual::new(Genome::zeroed(
            &self.config.domain,
            self.config.individual_size,
        ));
        self.population.fittest_or(placeholder)
    }

    /// Runs all remaining generations and reports the result.
    pub fn run(mut self) -> Result<GaResult<D::Allele>> {
        info!(
            "starting GA: population {}, genome length {}, {} generations",
            self.config.population_size, self.config.individual_size, self.config.generations
        );

        while self.step()?.is_some() {}

        let best = self.best();
        info!(
            "GA finished after {} generations: population {}, best total fitness {}, best individual {}",
            self.history.len(),
            self.population.len(),
            self.best_total_fitness,
            best.fitness()
        );

        Ok(GaResult {
            best,
            best_total_fitness: self.best_total_fitness,
            best_individual_fitness: self.best_individual_fitness,
            generations: self.history.len(),
            population_len: self.population.len(),
            history: self.history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
