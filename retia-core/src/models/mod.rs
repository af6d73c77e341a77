//! Whole-graph random network models.
//!
//! Each model builds a fresh [`Graph`](crate::Graph) from scratch, drawing
//! every decision from the supplied [`RandomSource`](crate::RandomSource).

mod community;
mod independent;
mod small_world;

pub use self::{
    community::{Communities, CommunityGraph, ProbabilityMatrix, community_block_graph},
    independent::independent_edge_graph,
    small_world::small_world_graph,
};

use crate::{
    Result,
    error::{GraphError, Parameter},
};

/// Ensures `value` is a finite probability in `[0, 1]`.
pub(crate) fn validate_probability(parameter: Parameter, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(GraphError::invalid(
            parameter,
            format!("{value} is not a probability in [0, 1]"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(0.25)]
    #[case(1.0)]
    fn accepts_closed_unit_interval(#[case] value: f64) {
        assert_eq!(
            validate_probability(Parameter::EdgeProbability, value),
            Ok(value)
        );
    }

    #[rstest]
    #[case(-0.01)]
    #[case(1.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_values_outside_unit_interval(#[case] value: f64) {
        let err = validate_probability(Parameter::RewireProbability, value)
            .expect_err("out-of-range probability must fail");
        assert!(matches!(
            err,
            GraphError::InvalidParameter {
                parameter: Parameter::RewireProbability,
                ..
            }
        ));
    }
}
