//! Scenario tests for region graph vectorization.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p morphvec-tests --test scenarios
//! ```

use pretty_assertions::assert_eq;

use morphvec_core::{
    select_root, traverse, vectorize, vectorize_with_order, DisconnectedPolicy, ErrorKind,
    GraphVectorizer, NeighborOrdering, VectorizeConfig, VectorizeError,
};
use morphvec_graph::{validate_graph, Attribute, NodeId, RegionGraph, RegionNode};
use morphvec_tests::fixtures::{
    disconnected_pairs, invalid_color_graph, nested_regions, nested_regions_with_white, path_graph,
    star_graph, GraphFixture, BLACK, WHITE,
};
use morphvec_tests::init_tracing;

fn ids(raw: &[u32]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId).collect()
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn path_graph_starts_from_middle() {
    init_tracing();
    let graph = path_graph();

    assert_eq!(select_root(&graph).unwrap(), NodeId(2));

    let (vector, order) = vectorize_with_order(&graph).unwrap();
    assert_eq!(order, ids(&[2, 1, 3]));
    assert_eq!(vector, vec![-1.0, -2.0, -3.0]);
}

#[test]
fn star_graph_leaves_in_ascending_weight() {
    init_tracing();
    let graph = star_graph(0.25);

    let (vector, order) = vectorize_with_order(&graph).unwrap();
    assert_eq!(order, ids(&[1, 3, 4, 2]));
    assert_eq!(vector, vec![0.25, 1.0, 3.0, 5.0]);
}

#[test]
fn disconnected_graph_only_covers_root_component() {
    init_tracing();
    let graph = disconnected_pairs();

    let embedding = GraphVectorizer::default().embed(&graph).unwrap();
    assert_eq!(embedding.root, NodeId(3));
    assert_eq!(embedding.order, ids(&[3, 4]));
    assert_eq!(embedding.values, vec![1.7, -2.2]);
    assert_eq!(embedding.len(), 2);
    assert!(embedding.len() < graph.len());
    assert!(!embedding.is_complete());
}

#[test]
fn disconnected_graph_rejected_when_configured() {
    let config = VectorizeConfig::from_json(r#"{"disconnected": "reject"}"#).unwrap();
    assert_eq!(config.disconnected, DisconnectedPolicy::Reject);

    let err = GraphVectorizer::new(config)
        .vectorize(&disconnected_pairs())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert_eq!(
        err,
        VectorizeError::Disconnected {
            reached: 2,
            total: 4
        }
    );
}

#[test]
fn invalid_color_raises_validation_error() {
    init_tracing();
    let result = vectorize(&invalid_color_graph());

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.code(), "VEC_001");
    assert_eq!(
        err,
        VectorizeError::InvalidColor {
            value: 128,
            node: Some(NodeId(3))
        }
    );
}

// ============================================================================
// Realistic segmentations
// ============================================================================

#[test]
fn nested_regions_vector() {
    let graph = nested_regions();
    assert!(validate_graph(&graph).is_ok());

    let (vector, order) = vectorize_with_order(&graph).unwrap();
    assert_eq!(order, ids(&[2, 1, 4, 3, 5]));
    assert_eq!(vector, vec![0.11, -0.02, -0.31, -0.35, 0.6]);
}

#[test]
fn binary_and_eight_bit_masks_match() {
    let eight_bit = nested_regions();
    let binary = nested_regions_with_white(1);

    assert_eq!(vectorize(&eight_bit).unwrap(), vectorize(&binary).unwrap());
}

#[test]
fn relabeled_graph_has_same_vector() {
    let fixture = GraphFixture {
        regions: vec![
            (0.3, BLACK, 700),
            (0.8, WHITE, 90),
            (0.2, WHITE, 90),
            (0.5, BLACK, 15),
            (0.5, BLACK, 15),
        ],
        edges: vec![(0, 1), (0, 2), (1, 3), (2, 4), (1, 2)],
    };

    let a = vectorize(&fixture.build_with_labels(1)).unwrap();
    let b = vectorize(&fixture.build_with_labels(5000)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 5);
}

// ============================================================================
// Error surfaces
// ============================================================================

#[test]
fn empty_graph() {
    let err = vectorize(&RegionGraph::default()).unwrap_err();
    assert_eq!(err, VectorizeError::EmptyGraph);
    assert_eq!(err.kind(), ErrorKind::Structural);
}

#[test]
fn traverse_from_missing_root() {
    let err = traverse(&path_graph(), NodeId(404)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
}

#[test]
fn signature_never_attached() {
    let graph = RegionGraph::builder()
        .region(1, BLACK, 10)
        .region(2, WHITE, 5)
        .signature(1, 0.4)
        .edge(1, 2)
        .build()
        .unwrap();

    let err = vectorize(&graph).unwrap_err();
    assert_eq!(
        err,
        VectorizeError::MissingAttribute {
            node: NodeId(2),
            attribute: Attribute::Weight
        }
    );
    assert_eq!(err.kind(), ErrorKind::MissingAttribute);
}

#[test]
fn heap_ordering_matches_on_scenarios() {
    let heap = GraphVectorizer::new(
        VectorizeConfig::default().neighbor_ordering(NeighborOrdering::Heap),
    );
    for graph in [path_graph(), star_graph(2.0), disconnected_pairs(), nested_regions()] {
        assert_eq!(
            heap.vectorize_with_order(&graph).unwrap(),
            vectorize_with_order(&graph).unwrap()
        );
    }
}

#[test]
fn single_region_image() {
    let graph = RegionGraph::builder()
        .node(RegionNode::region(1, 0.9, BLACK, 4096))
        .build()
        .unwrap();
    assert_eq!(vectorize(&graph).unwrap(), vec![-0.9]);
}
