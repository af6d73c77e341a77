//! Shared test utilities for `retia-core`.

use std::collections::VecDeque;

use proptest::test_runner::Config as ProptestConfig;
use retia_test_support::property_test_profile::ProptestRunProfile;

use crate::{RandomSource, Result, error::GraphError};

/// Builds a proptest configuration from the shared run profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}

/// [`RandomSource`] that replays pre-recorded draws in order.
///
/// Running out of scripted values panics so tests notice unexpected draws.
///
/// # Examples
/// ```ignore
/// use crate::{RandomSource, test_utils::ScriptedSource};
///
/// let mut rng = ScriptedSource::with_units([0.25]).and_picks([3]);
/// assert_eq!(rng.unit(), 0.25);
/// assert_eq!(rng.pick(5)?, 3);
/// ```
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    units: VecDeque<f64>,
    picks: VecDeque<usize>,
    distinct: VecDeque<Vec<usize>>,
    weighted: VecDeque<Vec<usize>>,
    units_consumed: usize,
    weighted_requests: Vec<(Vec<usize>, usize)>,
}

impl ScriptedSource {
    /// Creates a source replaying `units` from [`RandomSource::unit`].
    pub(crate) fn with_units(units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            units: units.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queues the indices returned by [`RandomSource::pick`].
    #[must_use]
    pub(crate) fn and_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Queues one result for [`RandomSource::sample_distinct`].
    #[must_use]
    pub(crate) fn and_distinct(mut self, draw: impl Into<Vec<usize>>) -> Self {
        self.distinct.push_back(draw.into());
        self
    }

    /// Queues one result for [`RandomSource::sample_weighted`].
    #[must_use]
    pub(crate) fn and_weighted(mut self, draw: impl Into<Vec<usize>>) -> Self {
        self.weighted.push_back(draw.into());
        self
    }

    /// Number of unit draws served so far.
    pub(crate) fn units_consumed(&self) -> usize {
        self.units_consumed
    }

    /// Weight vectors and amounts seen by [`RandomSource::sample_weighted`].
    pub(crate) fn weighted_requests(&self) -> &[(Vec<usize>, usize)] {
        &self.weighted_requests
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f64 {
        self.units_consumed += 1;
        match self.units.pop_front() {
            Some(value) => value,
            None => panic!("scripted source ran out of unit draws"),
        }
    }

    fn pick(&mut self, len: usize) -> Result<usize> {
        let Some(index) = self.picks.pop_front() else {
            panic!("scripted source ran out of picks");
        };
        assert!(index < len, "scripted pick {index} outside 0..{len}");
        Ok(index)
    }

    fn sample_distinct(&mut self, population: usize, amount: usize) -> Result<Vec<usize>> {
        if amount > population {
            return Err(GraphError::invalid(
                crate::error::Parameter::LinksPerNode,
                "scripted oversized draw",
            ));
        }
        if amount == 0 {
            return Ok(Vec::new());
        }
        match self.distinct.pop_front() {
            Some(draw) => Ok(draw),
            None => panic!("scripted source ran out of distinct draws"),
        }
    }

    fn sample_weighted(&mut self, weights: &[usize], amount: usize) -> Result<Vec<usize>> {
        if amount == 0 {
            return Ok(Vec::new());
        }
        self.weighted_requests.push((weights.to_vec(), amount));
        if weights.iter().all(|&weight| weight == 0) {
            return Err(GraphError::SamplingExhausted {
                context: "scripted weighted draw",
            });
        }
        match self.weighted.pop_front() {
            Some(draw) => Ok(draw),
            None => panic!("scripted source ran out of weighted draws"),
        }
    }
}
