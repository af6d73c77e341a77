use retia_core::{GraphError, GraphErrorCode, Parameter};
use rstest::rstest;

#[rstest]
#[case(
    GraphError::InvalidParameter {
        parameter: Parameter::EdgeProbability,
        reason: "1.5 is not a probability in [0, 1]".into(),
    },
    GraphErrorCode::InvalidParameter,
    "GRAPH_INVALID_PARAMETER",
)]
#[case(
    GraphError::SamplingExhausted { context: "degree-weighted targets" },
    GraphErrorCode::SamplingExhausted,
    "GRAPH_SAMPLING_EXHAUSTED",
)]
#[case(
    GraphError::DuplicateNodeId { node: 3 },
    GraphErrorCode::DuplicateNodeId,
    "GRAPH_DUPLICATE_NODE_ID",
)]
#[case(GraphError::UnknownNode { node: 8 }, GraphErrorCode::UnknownNode, "GRAPH_UNKNOWN_NODE")]
#[case(GraphError::SelfLoop { node: 1 }, GraphErrorCode::SelfLoop, "GRAPH_SELF_LOOP")]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] code: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(expected.to_string(), code);
}

#[rstest]
fn invalid_parameter_message_names_the_argument() {
    let error = GraphError::InvalidParameter {
        parameter: Parameter::PreferentialFraction,
        reason: "2 is not a probability in [0, 1]".into(),
    };
    assert_eq!(
        error.to_string(),
        "invalid preferential_fraction: 2 is not a probability in [0, 1]"
    );
}
