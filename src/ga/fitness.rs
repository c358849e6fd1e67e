//! Built-in fitness functions.
//!
//! - [`LinearEquation`]: integer genomes scored against `Σ cᵢ·gᵢ = target`
//! - [`CountOnes`]: MAXONE, the number of set bits
//! - [`RegressionFit`]: real `[intercept, slope]` genomes scored against a dataset

use super::types::{Fitness, FitnessFunction, Genome};
use crate::error::{Error, Result};
use crate::regression::{Dataset, LinearModel};

/// Scores integer genomes by how a weighted sum relates to a target.
///
/// A genome whose sum hits the target scores `target`; any other sum `s`
/// scores `s mod (target + 1)` using floor modulo, so negative sums fold
/// into `[0, target]` as well (a sum of `-1` scores `target`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearEquation {
    coefficients: Vec<i64>,
    target: i64,
}

impl LinearEquation {
    /// Creates an equation `Σ coefficients[i]·gᵢ = target`.
    ///
    /// `target` must lie in `[0, Fitness::MAX]` so every score is
    /// representable.
    pub fn new(coefficients: Vec<i64>, target: i64) -> Result<Self> {
        if !(0..=i64::from(Fitness::MAX)).contains(&target) {
            return Err(Error::invalid("target", "must lie in [0, u32::MAX]"));
        }
        Ok(Self {
            coefficients,
            target,
        })
    }

    /// `a + 2b - 3c + d + 4e = 30`.
    pub fn classic() -> Self {
        Self {
            coefficients: vec![1, 2, -3, 1, 4],
            target: 30,
        }
    }

    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// The weighted sum for `genome`, saturating at the `i64` bounds.
    pub fn weighted_sum(&self, genome: &Genome<i32>) -> i64 {
        self.coefficients
            .iter()
            .zip(genome.alleles())
            .map(|(&c, &g)| c.saturating_mul(i64::from(g)))
            .fold(0i64, i64::saturating_add)
    }
}

impl Default for LinearEquation {
    fn default() -> Self {
        Self::classic()
    }
}

impl FitnessFunction for LinearEquation {
    type Allele = i32;

    fn evaluate(&self, genome: &Genome<i32>) -> Fitness {
        let sum = self.weighted_sum(genome);
        let score = if sum == self.target {
            self.target
        } else {
            sum.rem_euclid(self.target + 1)
        };
        // `new` bounds the target, so the score always fits
        Fitness::try_from(score).unwrap_or(Fitness::MAX)
    }

    fn genome_len(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }
}

/// MAXONE: the number of set bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountOnes;

impl FitnessFunction for CountOnes {
    type Allele = bool;

    fn evaluate(&self, genome: &Genome<bool>) -> Fitness {
        genome.alleles().iter().filter(|&&bit| bit).count() as Fitness
    }
}

/// Scores `[intercept, slope]` genomes by `|100 - |mean signed error| / 100|`,
/// truncated toward zero.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionFit {
    dataset: Dataset,
}

impl RegressionFit {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Interprets a genome as a model. Missing genes read as 0.
    pub fn model(genome: &Genome<f64>) -> LinearModel {
        LinearModel::new(
            genome.get(0).unwrap_or(0.0),
            genome.get(1).unwrap_or(0.0),
        )
    }
}

impl Default for RegressionFit {
    fn default() -> Self {
        Self::new(Dataset::sample())
    }
}

impl FitnessFunction for RegressionFit {
    type Allele = f64;

    fn evaluate(&self, genome: &Genome<f64>) -> Fitness {
        let error = Self::model(genome).mean_signed_error(&self.dataset).abs() / 100.0;
        let score = (100.0 - error).abs();
        // `as` saturates and truncates toward zero
        score as Fitness
    }

    fn genome_len(&self) -> Option<usize> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equation_exact_solution_scores_target() {
        let eq = LinearEquation::classic();
        let g = Genome::new(vec![0, 0, 0, 2, 7]);
        assert_eq!(eq.weighted_sum(&g), 30);
        assert_eq!(eq.evaluate(&g), 30);
    }

    #[test]
    fn test_equation_negative_sum_uses_floor_modulo() {
        let eq = LinearEquation::classic();
        let g = Genome::new(vec![0, 0, 1, 2, 0]);
        assert_eq!(eq.weighted_sum(&g), -1);
        assert_eq!(eq.evaluate(&g), 30);

        let g = Genome::new(vec![0, 0, 9, 0, 0]);
        assert_eq!(eq.weighted_sum(&g), -27);
        assert_eq!(eq.evaluate(&g), 4);
    }

    #[test]
    fn test_equation_positive_overshoot() {
        let eq = LinearEquation::classic();
        let g = Genome::new(vec![9, 9, 0, 9, 9]);
        assert_eq!(eq.weighted_sum(&g), 72);
        assert_eq!(eq.evaluate(&g), 10);

        let g = Genome::new(vec![9, 9, 0, 7, 6]);
        assert_eq!(eq.weighted_sum(&g), 58);
        assert_eq!(eq.evaluate(&g), 27);
    }

    #[test]
    fn test_equation_never_exceeds_target() {
        let eq = LinearEquation::classic();
        for a in 0..10 {
            for c in 0..10 {
                for e in 0..10 {
                    let g = Genome::new(vec![a, 9 - a, c, 5, e]);
                    assert!(eq.evaluate(&g) <= 30);
                }
            }
        }
        assert_eq!(eq.genome_len(), Some(5));
    }

    #[test]
    fn test_equation_rejects_unrepresentable_targets() {
        for target in [-1, i64::from(Fitness::MAX) + 1, 5_000_000_000, i64::MAX] {
            let err = LinearEquation::new(vec![1, 1], target).unwrap_err();
            assert!(
                matches!(err, Error::InvalidConfig { field: "target", .. }),
                "target {target}: {err:?}"
            );
        }
    }

    #[test]
    fn test_equation_largest_target_scores_exactly() {
        let target = i64::from(Fitness::MAX);
        let eq = LinearEquation::new(vec![1], target).unwrap();
        assert_eq!(eq.target(), target);
        assert_eq!(eq.coefficients(), &[1]);
        assert_eq!(eq.evaluate(&Genome::new(vec![3])), 3);

        let eq = LinearEquation::new(vec![0, 2], 0).unwrap();
        assert_eq!(eq.evaluate(&Genome::new(vec![9, 9])), 0);
    }

    #[test]
    fn test_equation_weighted_sum_saturates() {
        let eq = LinearEquation::new(vec![i64::MAX, i64::MAX], 30).unwrap();
        let g = Genome::new(vec![i32::MAX, i32::MAX]);
        assert_eq!(eq.weighted_sum(&g), i64::MAX);
        assert!(eq.evaluate(&g) <= 30);

        let eq = LinearEquation::new(vec![i64::MIN], 30).unwrap();
        assert_eq!(eq.weighted_sum(&Genome::new(vec![i32::MAX])), i64::MIN);
    }

    #[test]
    fn test_count_ones() {
        let g = Genome::from_bit_str("1011").unwrap();
        assert_eq!(CountOnes.evaluate(&g), 3);
        let g = Genome::from_bit_str("0000").unwrap();
        assert_eq!(CountOnes.evaluate(&g), 0);
        assert_eq!(CountOnes.genome_len(), None);
    }

    #[test]
    fn test_regression_hand_computed() {
        let fit = RegressionFit::default();

        // mean error = 10199 / 9 = 1133.22 → 100 - 11.33 = 88.67
        assert_eq!(fit.evaluate(&Genome::new(vec![0.0, 0.0])), 88);

        // mean x = 371 / 9; mean error = 1133.22 - 30 * 41.22 = -103.44
        // → 100 - 1.03 = 98.97
        assert_eq!(fit.evaluate(&Genome::new(vec![0.0, 30.0])), 98);
    }

    #[test]
    fn test_regression_large_error_folds_positive() {
        // mean error = 1133.22 - (300 + 300 * 41.22) = -11533.44
        // → |100 - 115.33| = 15.33
        let fit = RegressionFit::default();
        assert_eq!(fit.evaluate(&Genome::new(vec![300.0, 300.0])), 15);
    }

    #[test]
    fn test_regression_perfect_line_scores_100() {
        let data = Dataset::new(vec![(1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]).unwrap();
        let fit = RegressionFit::new(data);
        assert_eq!(fit.evaluate(&Genome::new(vec![1.0, 2.0])), 100);
        assert_eq!(fit.genome_len(), Some(2));
    }
}
