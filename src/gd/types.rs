//! Objective functions for scalar gradient descent.

/// A differentiable function of one variable.
pub trait Objective {
    /// `f(x)`.
    fn value(&self, x: f64) -> f64;

    /// `f'(x)`.
    fn derivative(&self, x: f64) -> f64;
}

/// `f(x) = x²`, minimum at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parabola;

impl Objective for Parabola {
    fn value(&self, x: f64) -> f64 {
        x * x
    }

    fn derivative(&self, x: f64) -> f64 {
        2.0 * x
    }
}
