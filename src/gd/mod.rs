//! Gradient descent.
//!
//! Two small first-order optimizers:
//!
//! - [`GdRunner::minimize`]: scalar descent on an [`Objective`] from a random
//!   start, recording every iterate
//! - [`GdRunner::fit_linear`]: per-sample descent on the squared residuals
//!   of a [`LinearModel`](crate::regression::LinearModel)
//!
//! # References
//!
//! - Cauchy (1847), "Méthode générale pour la résolution des systèmes
//!   d'équations simultanées"

mod config;
mod runner;
mod types;

pub use config::GdConfig;
pub use runner::{GdResult, GdRunner, GdStep};
pub use types::{Objective, Parabola};
