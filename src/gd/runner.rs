//! Gradient descent execution.

use super::config::GdConfig;
use super::types::Objective;
use crate::error::{Error, Result};
use crate::regression::{Dataset, LinearModel};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One iterate of scalar descent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GdStep {
    /// 0-based iteration index.
    pub iteration: usize,
    /// The point after this iteration's update.
    pub x: f64,
    /// Objective value at `x`.
    pub value: f64,
}

/// Result of a scalar descent run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GdResult {
    /// The randomly drawn starting point.
    pub start: f64,

    /// The final iterate.
    pub solution: f64,

    /// Objective value at `solution`.
    pub value: f64,

    /// Every iterate, in order.
    pub trace: Vec<GdStep>,
}

/// Executes gradient descent.
pub struct GdRunner;

impl GdRunner {
    /// Minimizes `objective` starting from a point drawn uniformly from the
    /// configured start bounds.
    pub fn minimize<O: Objective>(objective: &O, config: &GdConfig) -> Result<GdResult> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let start = rng.random_range(config.start_low..=config.start_high);
        Ok(Self::minimize_from(objective, start, config))
    }

    /// Minimizes `objective` from a fixed starting point.
    ///
    /// Each iteration applies `x ← x - learning_rate · f'(x)`.
    pub fn minimize_from<O: Objective>(objective: &O, start: f64, config: &GdConfig) -> GdResult {
        let mut x = start;
        let mut trace = Vec::with_capacity(config.iterations);

        for iteration in 0..config.iterations {
            x -= config.learning_rate * objective.derivative(x);
            let value = objective.value(x);
            debug!("iteration {iteration}: x = {x:.5}, f(x) = {value:.5}");
            trace.push(GdStep { iteration, x, value });
        }

        GdResult {
            start,
            solution: x,
            value: objective.value(x),
            trace,
        }
    }

    /// Fits `y = intercept + slope · x` to `dataset`, starting from the
    /// zero line.
    ///
    /// Every epoch visits the points in order. For each point the intercept
    /// is updated first, then the slope is updated using the new intercept:
    ///
    /// - `intercept ← intercept + lr · (2/n) · e`
    /// - `slope ← slope + lr · (2/n) · x · e`
    ///
    /// where `e = y - predict(x)` is recomputed before each update.
    pub fn fit_linear(dataset: &Dataset, config: &GdConfig) -> Result<LinearModel> {
        config.validate()?;
        if dataset.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let scale = 2.0 / dataset.len() as f64;
        let mut model = LinearModel::default();

        for _ in 0..config.iterations {
            for (x, y) in dataset.iter() {
                let e = model.residual(x, y);
                model.intercept += config.learning_rate * scale * e;
                let e = model.residual(x, y);
                model.slope += config.learning_rate * scale * x * e;
            }
        }

        info!(
            "fitted {} after {} epochs (mse {:.3})",
            model,
            config.iterations,
            model.mean_squared_error(dataset)
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gd::types::Parabola;

    #[test]
    fn test_parabola_geometric_decay() {
        // x_{k+1} = x_k - 0.1 * 2 x_k = 0.8 x_k
        let config = GdConfig::parabola();
        let result = GdRunner::minimize_from(&Parabola, 1.0, &config);

        assert_eq!(result.trace.len(), 30);
        for step in &result.trace {
            let expected = 0.8f64.powi(step.iteration as i32 + 1);
            assert!((step.x - expected).abs() < 1e-12);
            assert!((step.value - expected * expected).abs() < 1e-12);
        }
        assert!(result.solution.abs() <= 0.8f64.powi(30) + 1e-12);
    }

    #[test]
    fn test_minimize_random_start_within_bounds() {
        let config = GdConfig::parabola().with_seed(42);
        let result = GdRunner::minimize(&Parabola, &config).unwrap();
        assert!((-1.0..=1.0).contains(&result.start));
        assert!(result.value <= result.start * result.start);
    }

    #[test]
    fn test_minimize_seed_reproducible() {
        let config = GdConfig::parabola().with_seed(3);
        let a = GdRunner::minimize(&Parabola, &config).unwrap();
        let b = GdRunner::minimize(&Parabola, &config).unwrap();
        assert_eq!(a.start, b.start);
        assert_eq!(a.trace, b.trace);
    }

    #[test]
    fn test_minimize_invalid_config() {
        let config = GdConfig::parabola().with_iterations(0);
        assert!(GdRunner::minimize(&Parabola, &config).is_err());
    }

    #[test]
    fn test_fit_exact_line() {
        let data = Dataset::new(vec![(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]).unwrap();
        let config = GdConfig::default()
            .with_learning_rate(0.05)
            .with_iterations(2000);
        let model = GdRunner::fit_linear(&data, &config).unwrap();
        assert!((model.intercept - 1.0).abs() < 1e-3, "{model}");
        assert!((model.slope - 2.0).abs() < 1e-3, "{model}");
        assert!((model.predict(10.0) - 21.0).abs() < 1e-2);
    }

    #[test]
    fn test_fit_sample_reduces_error() {
        let data = Dataset::sample();
        let model = GdRunner::fit_linear(&data, &GdConfig::regression()).unwrap();
        let before = LinearModel::default().mean_squared_error(&data);
        let after = model.mean_squared_error(&data);
        assert!(after.is_finite());
        assert!(after < before / 10.0, "mse {after} vs {before}");
        assert!(model.slope > 0.0);
    }
}
