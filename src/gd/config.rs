//! Gradient descent configuration.

use crate::error::{Error, Result};

/// Configuration for [`GdRunner`](super::GdRunner).
///
/// # Examples
///
/// ```
/// use evogen::gd::GdConfig;
///
/// let config = GdConfig::default()
///     .with_learning_rate(0.05)
///     .with_iterations(200)
///     .with_start_bounds(-2.0, 2.0)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GdConfig {
    /// Step size applied to the gradient.
    pub learning_rate: f64,

    /// Iterations for [`minimize`](super::GdRunner::minimize), epochs for
    /// [`fit_linear`](super::GdRunner::fit_linear).
    pub iterations: usize,

    /// Lower bound of the uniformly drawn starting point.
    pub start_low: f64,

    /// Upper bound of the uniformly drawn starting point.
    pub start_high: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GdConfig {
    fn default() -> Self {
        Self::parabola()
    }
}

impl GdConfig {
    /// Sets the learning rate.
    pub fn with_learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    /// Sets the number of iterations (or epochs).
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the interval the starting point is drawn from.
    pub fn with_start_bounds(mut self, low: f64, high: f64) -> Self {
        self.start_low = low;
        self.start_high = high;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for `x²` on `[-1, 1]`.
    ///
    /// - Learning rate: 0.1, Iterations: 30
    pub fn parabola() -> Self {
        Self {
            learning_rate: 0.1,
            iterations: 30,
            start_low: -1.0,
            start_high: 1.0,
            seed: None,
        }
    }

    /// Preset for fitting a line to [`Dataset::sample`](crate::regression::Dataset::sample).
    ///
    /// - Learning rate: 0.001, Epochs: 13100
    pub fn regression() -> Self {
        Self {
            learning_rate: 0.001,
            iterations: 13_100,
            ..Self::parabola()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::invalid("learning_rate", "must be positive and finite"));
        }
        if self.iterations == 0 {
            return Err(Error::invalid("iterations", "must be at least 1"));
        }
        if !(self.start_low.is_finite() && self.start_high.is_finite()) {
            return Err(Error::invalid("start_bounds", "must be finite"));
        }
        if self.start_low > self.start_high {
            return Err(Error::invalid(
                "start_bounds",
                "lower bound exceeds upper bound",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let p = GdConfig::parabola();
        assert!((p.learning_rate - 0.1).abs() < 1e-15);
        assert_eq!(p.iterations, 30);
        assert_eq!((p.start_low, p.start_high), (-1.0, 1.0));

        let r = GdConfig::regression();
        assert!((r.learning_rate - 0.001).abs() < 1e-15);
        assert_eq!(r.iterations, 13_100);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(GdConfig::default().with_learning_rate(0.0).validate().is_err());
        assert!(GdConfig::default()
            .with_learning_rate(f64::NAN)
            .validate()
            .is_err());
        assert!(GdConfig::default().with_iterations(0).validate().is_err());
        assert!(GdConfig::default()
            .with_start_bounds(1.0, -1.0)
            .validate()
            .is_err());
    }
}
