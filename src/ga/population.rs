//! Population storage, evaluation and selection probabilities.
//!
//! The population is insertion-ordered and only grows: offspring are
//! appended every generation and nothing is ever removed.

use super::config::ZeroFitnessPolicy;
use super::types::{Allele, AlleleDomain, Fitness, FitnessFunction, Genome, Individual};
use crate::error::{Error, Result};
use log::warn;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of children appended per generation for a configured
/// population size `n`: two per pair, `n / 2 - 1` pairs.
pub fn children_per_generation(population_size: usize) -> usize {
    2 * (population_size / 2).saturating_sub(1)
}

/// Live population size after `generations` generations.
pub fn expected_population_len(population_size: usize, generations: usize) -> usize {
    population_size + generations * children_per_generation(population_size)
}

/// Ordered collection of individuals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population<A> {
    individuals: Vec<Individual<A>>,
}

impl<A: Allele> Population<A> {
    pub fn new(individuals: Vec<Individual<A>>) -> Self {
        Self { individuals }
    }

    /// Generates `size` random individuals with genomes of length `len`.
    pub fn random<D, R>(domain: &D, size: usize, len: usize, rng: &mut R) -> Self
    where
        D: AlleleDomain<Allele = A>,
        R: Rng,
    {
        let individuals = (0..size)
            .map(|_| Individual::new(Genome::random(domain, len, rng)))
            .collect();
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Individual<A>> {
        self.individuals.get(index)
    }

    pub fn individuals(&self) -> &[Individual<A>] {
        &self.individuals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual<A>> {
        self.individuals.iter()
    }

    /// Appends offspring at the end.
    pub fn extend<I: IntoIterator<Item = Individual<A>>>(&mut self, children: I) {
        self.individuals.extend(children);
    }

    /// Scores every individual, stores the result on it, and returns the
    /// population's total fitness.
    pub fn evaluate<F>(&mut self, fitness: &F) -> u64
    where
        F: FitnessFunction<Allele = A>,
    {
        #[cfg(feature = "parallel")]
        let total = self
            .individuals
            .par_iter_mut()
            .map(|ind| {
                let f = fitness.evaluate(ind.genome());
                ind.set_fitness(f);
                u64::from(f)
            })
            .sum();

        #[cfg(not(feature = "parallel"))]
        let total = self
            .individuals
            .iter_mut()
            .map(|ind| {
                let f = fitness.evaluate(ind.genome());
                ind.set_fitness(f);
                u64::from(f)
            })
            .sum();

        total
    }

    /// Sum of the stored fitness values, without re-evaluating.
    pub fn total_fitness(&self) -> u64 {
        self.individuals
            .iter()
            .map(|ind| u64::from(ind.fitness()))
            .sum()
    }

    /// Highest stored fitness, or 0 for an empty population.
    pub fn max_fitness(&self) -> Fitness {
        self.individuals
            .iter()
            .map(Individual::fitness)
            .max()
            .unwrap_or(0)
    }

    /// Sets every individual's probability to `fitness / total`.
    ///
    /// A zero total is handled according to `policy`: either every
    /// individual gets `1 / len`, or [`Error::ZeroTotalFitness`] is
    /// returned and probabilities are left untouched.
    pub fn assign_probabilities(&mut self, total: u64, policy: ZeroFitnessPolicy) -> Result<()> {
        if total == 0 {
            return match policy {
                ZeroFitnessPolicy::Fail => Err(Error::ZeroTotalFitness),
                ZeroFitnessPolicy::Uniform => {
                    warn!(
                        "total fitness is zero across {} individuals; using uniform probabilities",
                        self.len()
                    );
                    let p = 1.0 / self.len().max(1) as f64;
                    for ind in &mut self.individuals {
                        ind.set_probability(p);
                    }
                    Ok(())
                }
            };
        }

        let total = total as f64;
        for ind in &mut self.individuals {
            ind.set_probability(f64::from(ind.fitness()) / total);
        }
        Ok(())
    }

    /// The first individual with strictly greater stored fitness than the
    /// running incumbent, which starts as `placeholder` with fitness 0.
    ///
    /// When no individual has positive fitness the placeholder is returned.
    pub fn fittest_or(&self, placeholder: Individual<A>) -> Individual<A> {
        let mut best: Option<&Individual<A>> = None;
        let mut best_fitness = 0;
        for ind in &self.individuals {
            if ind.fitness() > best_fitness {
                best_fitness = ind.fitness();
                best = Some(ind);
            }
        }
        best.cloned().unwrap_or(placeholder)
    }
}

impl<A> std::ops::Index<usize> for Population<A> {
    type Output = Individual<A>;

    fn index(&self, index: usize) -> &Individual<A> {
        &self.individuals[index]
    }
}

impl<'a, A> IntoIterator for &'a Population<A> {
    type Item = &'a Individual<A>;
    type IntoIter = std::slice::Iter<'a, Individual<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::fitness::CountOnes;
    use crate::ga::types::{Binary, IntRange};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bits(s: &[&str]) -> Population<bool> {
        Population::new(
            s.iter()
                .map(|b| Individual::new(Genome::from_bit_str(b).unwrap()))
                .collect(),
        )
    }

    #[test]
    fn test_random_population_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = Population::random(&IntRange::digits(), 20, 5, &mut rng);
        assert_eq!(pop.len(), 20);
        assert!(pop.iter().all(|ind| ind.genome().len() == 5));
        assert!(pop.iter().all(|ind| ind.fitness() == 0));
    }

    #[test]
    fn test_evaluate_stores_fitness_and_returns_total() {
        let mut pop = bits(&["1011", "0000", "1111"]);
        let total = pop.evaluate(&CountOnes);
        assert_eq!(total, 7);
        let scores: Vec<_> = pop.iter().map(|i| i.fitness()).collect();
        assert_eq!(scores, vec![3, 0, 4]);
        assert_eq!(pop.total_fitness(), 7);
        assert_eq!(pop.max_fitness(), 4);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let mut pop = bits(&["1011", "0001", "1111", "0110"]);
        let total = pop.evaluate(&CountOnes);
        pop.assign_probabilities(total, ZeroFitnessPolicy::Uniform)
            .unwrap();
        let sum: f64 = pop.iter().map(|i| i.probability()).sum();
        assert!((sum - 1.0).abs() < 1e-12, "sum = {sum}");
        assert!((pop[2].probability() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_uniform() {
        let mut pop = bits(&["000", "000", "000", "000"]);
        let total = pop.evaluate(&CountOnes);
        assert_eq!(total, 0);
        pop.assign_probabilities(total, ZeroFitnessPolicy::Uniform)
            .unwrap();
        for ind in &pop {
            assert!((ind.probability() - 0.25).abs() < 1e-12);
            assert!(ind.probability().is_finite());
        }
    }

    #[test]
    fn test_zero_total_fail() {
        let mut pop = bits(&["00", "00"]);
        let total = pop.evaluate(&CountOnes);
        let err = pop.assign_probabilities(total, ZeroFitnessPolicy::Fail);
        assert_eq!(err, Err(Error::ZeroTotalFitness));
        assert!(pop.iter().all(|i| i.probability() == 0.0));
    }

    #[test]
    fn test_fittest_picks_first_maximum() {
        let mut pop = bits(&["0011", "1110", "0111", "1000"]);
        pop.evaluate(&CountOnes);
        let placeholder = Individual::new(Genome::zeroed(&Binary, 4));
        let best = pop.fittest_or(placeholder);
        assert_eq!(best.genome().to_string(), "1110");
        assert_eq!(best.fitness(), 3);
    }

    #[test]
    fn test_fittest_all_zero_returns_placeholder() {
        let mut pop = bits(&["000", "000"]);
        pop.evaluate(&CountOnes);
        let placeholder = Individual::new(Genome::zeroed(&Binary, 3));
        let best = pop.fittest_or(placeholder.clone());
        assert_eq!(best, placeholder);
    }

    #[test]
    fn test_growth_formula() {
        assert_eq!(children_per_generation(20), 18);
        assert_eq!(children_per_generation(21), 18);
        assert_eq!(children_per_generation(3), 0);
        assert_eq!(children_per_generation(1), 0);
        assert_eq!(expected_population_len(20, 50), 20 + 50 * 18);
        assert_eq!(expected_population_len(100, 0), 100);
    }

    #[test]
    fn test_extend_appends_in_order() {
        let mut pop = bits(&["01"]);
        pop.extend(vec![
            Individual::new(Genome::from_bit_str("10").unwrap()),
            Individual::new(Genome::from_bit_str("11").unwrap()),
        ]);
        let order: Vec<_> = pop.iter().map(|i| i.genome().to_string()).collect();
        assert_eq!(order, vec!["01", "10", "11"]);
    }
}
