//! Simple linear regression primitives.
//!
//! [`Dataset`] holds `(x, y)` observations and [`LinearModel`] is the line
//! `y = intercept + slope * x`. The GA's regression fitness scores a
//! genome by turning it into a model, and the gradient-descent trainer in
//! [`crate::gd`] fits one directly.

use crate::error::{Error, Result};

/// A non-empty set of `(x, y)` observations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    points: Vec<(f64, f64)>,
}

impl Dataset {
    /// Wraps `points`, rejecting an empty set.
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyDataset);
        }
        Ok(Self { points })
    }

    /// Nine-point advertising-spend vs. sales sample.
    pub fn sample() -> Self {
        Self {
            points: vec![
                (23.0, 651.0),
                (26.0, 762.0),
                (30.0, 856.0),
                (34.0, 1063.0),
                (43.0, 1190.0),
                (48.0, 1298.0),
                (52.0, 1421.0),
                (57.0, 1440.0),
                (58.0, 1518.0),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().copied()
    }
}

/// The line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearModel {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearModel {
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Residual `y - predict(x)`.
    pub fn residual(&self, x: f64, y: f64) -> f64 {
        y - self.predict(x)
    }

    /// Mean of the signed residuals over `dataset`.
    ///
    /// Over- and under-predictions cancel out; this is not the mean
    /// squared error.
    pub fn mean_signed_error(&self, dataset: &Dataset) -> f64 {
        let total: f64 = dataset.iter().map(|(x, y)| self.residual(x, y)).sum();
        total / dataset.len() as f64
    }

    /// Mean of the squared residuals over `dataset`.
    pub fn mean_squared_error(&self, dataset: &Dataset) -> f64 {
        let total: f64 = dataset
            .iter()
            .map(|(x, y)| self.residual(x, y).powi(2))
            .sum();
        total / dataset.len() as f64
    }
}

impl std::fmt::Display for LinearModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "y_p = {} + {} * X", self.intercept, self.slope)
    }
}
