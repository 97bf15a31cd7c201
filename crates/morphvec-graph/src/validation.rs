//! Pre-flight graph validation.
//!
//! Vectorization stops at the first bad node it meets. This module walks the
//! whole graph instead and reports every problem, which is what a pipeline
//! wants when it is deciding whether a segmentation is usable at all.

use crate::error::{GraphIssue, GraphWarning, IssueCode, ValidationResult, WarningCode};
use crate::graph::RegionGraph;
use crate::node::MeanColor;

/// Validates a graph and returns a validation result.
///
/// # Example
/// ```
/// use morphvec_graph::{validate_graph, RegionGraph};
///
/// let graph = RegionGraph::builder()
///     .region(1, 128, 10)
///     .signature(1, 0.5)
///     .build()
///     .unwrap();
///
/// let result = validate_graph(&graph);
/// assert!(!result.is_ok());
/// assert_eq!(result.errors[0].code.code(), "G001");
/// ```
pub fn validate_graph(graph: &RegionGraph) -> ValidationResult {
    let mut result = ValidationResult::success();

    if graph.is_empty() {
        result.add_error(GraphIssue::new(
            IssueCode::EmptyGraph,
            "graph must contain at least 1 node",
        ));
        return result;
    }

    for (ix, node) in graph.nodes().iter().enumerate() {
        match node.weight {
            None => result.add_error(GraphIssue::at(
                IssueCode::MissingWeight,
                "weight is required",
                node.id,
            )),
            Some(w) if !w.is_finite() => result.add_error(GraphIssue::at(
                IssueCode::NonFiniteWeight,
                format!("weight must be finite, got {}", w),
                node.id,
            )),
            Some(_) => {}
        }

        match node.mean_color {
            None => result.add_error(GraphIssue::at(
                IssueCode::MissingMeanColor,
                "mean color is required",
                node.id,
            )),
            Some(raw) if MeanColor::classify(raw).is_none() => {
                result.add_error(GraphIssue::at(
                    IssueCode::InvalidMeanColor,
                    format!("mean color must be 0, 1 or 255, got {}", raw),
                    node.id,
                ))
            }
            Some(_) => {}
        }

        if node.pixel_count.is_none() {
            result.add_error(GraphIssue::at(
                IssueCode::MissingPixelCount,
                "pixel count is required",
                node.id,
            ));
        }

        if graph.len() > 1 && graph.degree_at(ix) == 0 {
            result.add_warning(GraphWarning::at(
                WarningCode::IsolatedNode,
                "node has no neighbors",
                node.id,
            ));
        }
    }

    let components = graph.components().len();
    if components > 1 {
        result.add_warning(GraphWarning::new(
            WarningCode::Disconnected,
            format!(
                "graph has {} connected components; only the root's component is vectorized",
                components
            ),
        ));
    }

    result
}
