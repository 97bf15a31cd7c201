//! Region graph fixtures.
//!
//! Region ids are small integers as produced by connected-component labeling
//! (labels start at 1).

use morphvec_graph::{GraphBudget, RegionGraph, RegionGraphBuilder, RegionNode};

/// Background color value.
pub const BLACK: u8 = 0;
/// Foreground color value in 8-bit masks.
pub const WHITE: u8 = 255;

/// Plain description of a region graph, convenient for generated inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphFixture {
    /// `(weight, mean_color, pixel_count)` per region, in label order.
    pub regions: Vec<(f64, u8, u64)>,
    /// Edges as pairs of 0-based region positions.
    pub edges: Vec<(usize, usize)>,
}

impl GraphFixture {
    /// Builds the graph, labeling regions `first_label..`.
    ///
    /// # Panics
    /// Panics if the fixture is malformed (self-loop, out-of-range edge).
    pub fn build_with_labels(&self, first_label: u32) -> RegionGraph {
        let label = |pos: usize| first_label + pos as u32;
        let mut builder = RegionGraphBuilder::new().budget(GraphBudget::unbounded());
        for (pos, &(weight, color, pixels)) in self.regions.iter().enumerate() {
            builder = builder.node(RegionNode::region(label(pos), weight, color, pixels));
        }
        for &(a, b) in &self.edges {
            builder = builder.edge(label(a), label(b));
        }
        builder.build().expect("fixture graph must be well formed")
    }

    /// Builds the graph with labels starting at 1.
    pub fn build(&self) -> RegionGraph {
        self.build_with_labels(1)
    }
}

/// Path A(1)–B(2)–C(3); weights 2, 1, 3; all black.
pub fn path_graph() -> RegionGraph {
    RegionGraph::builder()
        .node(RegionNode::region(1, 2.0, BLACK, 40))
        .node(RegionNode::region(2, 1.0, BLACK, 40))
        .node(RegionNode::region(3, 3.0, BLACK, 40))
        .edge(1, 2)
        .edge(2, 3)
        .build()
        .expect("path graph")
}

/// Star with hub H(1) and leaves L1(2, w=5), L2(3, w=1), L3(4, w=3); all white.
pub fn star_graph(hub_weight: f64) -> RegionGraph {
    RegionGraph::builder()
        .node(RegionNode::region(1, hub_weight, WHITE, 900))
        .node(RegionNode::region(2, 5.0, WHITE, 30))
        .node(RegionNode::region(3, 1.0, WHITE, 30))
        .node(RegionNode::region(4, 3.0, WHITE, 30))
        .edge(1, 2)
        .edge(1, 3)
        .edge(1, 4)
        .build()
        .expect("star graph")
}

/// Two separate edges A(1)–B(2) and C(3)–D(4).
///
/// All nodes have degree 1, so the largest region (C) becomes the root.
pub fn disconnected_pairs() -> RegionGraph {
    RegionGraph::builder()
        .node(RegionNode::region(1, 0.4, BLACK, 10))
        .node(RegionNode::region(2, 0.9, WHITE, 12))
        .node(RegionNode::region(3, 1.7, WHITE, 60))
        .node(RegionNode::region(4, 2.2, BLACK, 8))
        .edge(1, 2)
        .edge(3, 4)
        .build()
        .expect("disconnected graph")
}

/// A connected graph whose last-visited node has `mean_color = 128`.
pub fn invalid_color_graph() -> RegionGraph {
    RegionGraph::builder()
        .node(RegionNode::region(1, 1.0, BLACK, 500))
        .node(RegionNode::region(2, 0.5, WHITE, 20))
        .node(RegionNode::region(3, 0.7, 128, 20))
        .edge(1, 2)
        .edge(1, 3)
        .build()
        .expect("invalid color graph")
}

/// A binary image of a white blob with two black holes, one of which holds
/// a white island: background(1) ⊃ blob(2) ⊃ {hole(3) ⊃ island(5), hole(4)}.
pub fn nested_regions() -> RegionGraph {
    nested_regions_with_white(WHITE)
}

/// [`nested_regions`] with a custom foreground value (`1` for binarized images).
pub fn nested_regions_with_white(white: u8) -> RegionGraph {
    RegionGraph::builder()
        .region(1, BLACK, 10_000)
        .region(2, white, 2_500)
        .region(3, BLACK, 300)
        .region(4, BLACK, 120)
        .region(5, white, 40)
        .signature(1, 0.02)
        .signature(2, 0.11)
        .signature(3, 0.35)
        .signature(4, 0.31)
        .signature(5, 0.6)
        .edge(1, 2)
        .edge(2, 3)
        .edge(2, 4)
        .edge(3, 5)
        .build()
        .expect("nested regions graph")
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphvec_graph::NodeId;

    #[test]
    fn fixture_builds_with_offset_labels() {
        let fixture = GraphFixture {
            regions: vec![(1.0, BLACK, 1), (2.0, WHITE, 1)],
            edges: vec![(0, 1)],
        };
        let graph = fixture.build_with_labels(100);
        assert!(graph.contains(NodeId(100)));
        assert!(graph.contains(NodeId(101)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn scenario_graphs_build() {
        assert_eq!(path_graph().len(), 3);
        assert_eq!(star_graph(1.0).edge_count(), 3);
        assert!(!disconnected_pairs().is_connected());
        assert!(invalid_color_graph().is_connected());
        assert!(nested_regions().is_connected());
    }
}
