//! Injectable randomness for generation and growth.
//!
//! Every model threads a [`RandomSource`] explicitly; any [`rand::Rng`]
//! implements it, and tests can substitute scripted sources to pin exact
//! draws.

use rand::{
    Rng, SeedableRng,
    distributions::{Distribution, Standard, WeightedError, WeightedIndex},
    rngs::SmallRng,
    seq::index,
};

use crate::{
    Result,
    error::{GraphError, Parameter},
};

/// Seed used by [`seeded_source`] callers that do not pick their own.
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

/// Source of the random draws consumed by the graph models.
///
/// Implementations must not consume randomness for zero-sized requests so
/// that composite draws stay aligned with their single-rule counterparts.
pub trait RandomSource {
    /// Returns a uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Returns a uniform index in `0..len`.
    ///
    /// # Errors
    /// Returns [`GraphError::SamplingExhausted`] when `len` is zero.
    fn pick(&mut self, len: usize) -> Result<usize>;

    /// Draws `amount` distinct indices from `0..population` uniformly.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidParameter`] when `amount > population`.
    fn sample_distinct(&mut self, population: usize, amount: usize) -> Result<Vec<usize>>;

    /// Draws `amount` indices with replacement, each proportional to its
    /// weight in `weights`.
    ///
    /// # Errors
    /// Returns [`GraphError::SamplingExhausted`] when `amount > 0` and no
    /// weight is positive.
    fn sample_weighted(&mut self, weights: &[usize], amount: usize) -> Result<Vec<usize>>;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.sample(Standard)
    }

    fn pick(&mut self, len: usize) -> Result<usize> {
        if len == 0 {
            return Err(GraphError::SamplingExhausted {
                context: "uniform index from an empty range",
            });
        }
        Ok(self.gen_range(0..len))
    }

    fn sample_distinct(&mut self, population: usize, amount: usize) -> Result<Vec<usize>> {
        if amount > population {
            return Err(GraphError::invalid(
                Parameter::LinksPerNode,
                format!("cannot draw {amount} distinct targets from {population} nodes"),
            ));
        }
        if amount == 0 {
            return Ok(Vec::new());
        }
        Ok(index::sample(self, population, amount).into_vec())
    }

    fn sample_weighted(&mut self, weights: &[usize], amount: usize) -> Result<Vec<usize>> {
        if amount == 0 {
            return Ok(Vec::new());
        }
        let distribution: WeightedIndex<usize> =
            WeightedIndex::new(weights).map_err(map_weighted_error)?;
        Ok((0..amount).map(|_| distribution.sample(self)).collect())
    }
}

fn map_weighted_error(error: WeightedError) -> GraphError {
    match error {
        WeightedError::NoItem | WeightedError::AllWeightsZero => GraphError::SamplingExhausted {
            context: "degree-weighted targets",
        },
        other => GraphError::invalid(Parameter::Weights, other.to_string()),
    }
}

/// Returns a small, fast generator seeded for reproducible runs.
///
/// # Examples
/// ```
/// use retia_core::{RandomSource, seeded_source};
///
/// let mut first = seeded_source(7);
/// let mut second = seeded_source(7);
/// assert_eq!(first.unit(), second.unit());
/// ```
#[must_use]
pub fn seeded_source(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn unit_draws_stay_in_half_open_interval() {
        let mut rng = seeded_source(11);
        for _ in 0..1_000 {
            let value = rng.unit();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[rstest]
    fn pick_rejects_empty_ranges() {
        let mut rng = seeded_source(1);
        let err = rng.pick(0).expect_err("empty range must fail");
        assert!(matches!(err, GraphError::SamplingExhausted { .. }));
    }

    #[rstest]
    #[case(5, 5)]
    #[case(10, 3)]
    #[case(4, 0)]
    fn sample_distinct_returns_unique_indices(#[case] population: usize, #[case] amount: usize) {
        let mut rng = seeded_source(3);
        let mut drawn = rng
            .sample_distinct(population, amount)
            .expect("amount fits population");
        assert_eq!(drawn.len(), amount);
        assert!(drawn.iter().all(|&index| index < population));
        drawn.sort_unstable();
        drawn.dedup();
        assert_eq!(drawn.len(), amount);
    }

    #[rstest]
    fn sample_distinct_rejects_oversized_requests() {
        let mut rng = seeded_source(3);
        let err = rng
            .sample_distinct(2, 3)
            .expect_err("oversized draw must fail");
        assert!(matches!(
            err,
            GraphError::InvalidParameter {
                parameter: Parameter::LinksPerNode,
                ..
            }
        ));
    }

    #[rstest]
    fn sample_weighted_never_returns_zero_weight_indices() {
        let mut rng = seeded_source(5);
        let drawn = rng
            .sample_weighted(&[0, 3, 0, 1], 500)
            .expect("positive weights exist");
        assert!(drawn.iter().all(|&index| index == 1 || index == 3));
    }

    #[rstest]
    #[case(&[])]
    #[case(&[0, 0, 0])]
    fn sample_weighted_rejects_weightless_pools(#[case] weights: &[usize]) {
        let mut rng = seeded_source(5);
        let err = rng
            .sample_weighted(weights, 1)
            .expect_err("no positive weight must fail");
        assert!(matches!(err, GraphError::SamplingExhausted { .. }));
    }

    #[rstest]
    fn zero_sized_requests_consume_no_randomness() {
        let mut touched = seeded_source(9);
        let mut untouched = seeded_source(9);
        touched
            .sample_distinct(10, 0)
            .expect("empty draw is valid");
        touched
            .sample_weighted(&[0, 0], 0)
            .expect("empty draw is valid");
        assert_eq!(touched.unit(), untouched.unit());
    }
}
