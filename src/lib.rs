//! Generational genetic algorithm engine with pluggable genomes.
//!
//! Provides:
//!
//! - **Genetic Algorithm (GA)**: One engine shared by integer-vector,
//!   bit-string and real-vector genomes, with roulette-wheel selection,
//!   single-point crossover and single-gene mutation. Ships fitness
//!   functions for a linear equation, MAXONE and regression coefficients.
//! - **Gradient Descent (GD)**: Scalar descent on a differentiable
//!   objective and per-sample descent for simple linear regression.
//! - **Regression**: The dataset and line model both of the above share.
//!
//! Every run owns its random source; runs are single-threaded and
//! reproducible given a seed.

pub mod error;
pub mod ga;
pub mod gd;
pub mod regression;

pub use error::{Error, Result};
