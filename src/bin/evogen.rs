//! evogen: runs the bundled optimization demos and prints their reports.
//!
//! Set `RUST_LOG=debug` to see per-generation statistics.

use clap::{Args, Parser, Subcommand};
use evogen::ga::{
    AlleleDomain, CountOnes, FitnessFunction, GaConfig, GaEngine, LinearEquation, RegressionFit,
};
use evogen::gd::{GdConfig, GdRunner, Parabola};
use evogen::regression::Dataset;
use evogen::Result;

#[derive(Parser, Debug)]
#[command(
    name = "evogen",
    version,
    about = "Genetic algorithm and gradient descent demos"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a + 2b - 3c + d + 4e = 30 over digits
    Equation(GaArgs),
    /// Maximise the number of set bits
    MaxOne(GaArgs),
    /// Search intercept and slope for the sample dataset
    Regression(GaArgs),
    /// Fit the sample dataset by gradient descent and predict one value
    Slr {
        /// Value of x to predict y for
        #[arg(long)]
        predict: f64,
    },
    /// Minimise x² by gradient descent from a random start in [-1, 1]
    Descent {
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug)]
struct GaArgs {
    /// Initial population size
    #[arg(long)]
    population: Option<usize>,
    /// Number of generations
    #[arg(long)]
    generations: Option<usize>,
    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

impl GaArgs {
    fn apply<D: AlleleDomain>(&self, mut config: GaConfig<D>) -> GaConfig<D> {
        if let Some(n) = self.population {
            config = config.with_population_size(n);
        }
        if let Some(n) = self.generations {
            config = config.with_generations(n);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn run_ga<D, F>(config: GaConfig<D>, fitness: F) -> Result<()>
where
    D: AlleleDomain,
    F: FitnessFunction<Allele = D::Allele>,
{
    let result = GaEngine::new(config, fitness)?.run()?;
    println!("{result}");
    println!("------------------------------------------------");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Equation(args) => {
            run_ga(args.apply(GaConfig::equation()), LinearEquation::classic())
        }
        Command::MaxOne(args) => run_ga(args.apply(GaConfig::max_one()), CountOnes),
        Command::Regression(args) => {
            run_ga(args.apply(GaConfig::regression()), RegressionFit::default())
        }
        Command::Slr { predict } => {
            let model = GdRunner::fit_linear(&Dataset::sample(), &GdConfig::regression())?;
            println!("Regression equation:");
            println!("{model}");
            println!("Predicted value of {predict}: {}", model.predict(predict));
            Ok(())
        }
        Command::Descent { seed } => {
            let mut config = GdConfig::parabola();
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let result = GdRunner::minimize(&Parabola, &config)?;
            println!("------------------------------");
            println!("{:<8} | {:<8} | f(x)", "n_iter", "x value");
            println!("------------------------------");
            for step in &result.trace {
                println!("{:<8} | {:<8.5} | {:.5}", step.iteration, step.x, step.value);
            }
            Ok(())
        }
    }
}
