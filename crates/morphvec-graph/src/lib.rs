//! morphvec Region Graph Library
//!
//! This crate provides the input data model for morphvec: a region adjacency
//! graph built from a segmented image, with one node per connected region and
//! an edge between every pair of spatially adjacent regions.
//!
//! # Overview
//!
//! - Nodes carry a shape signature (`weight`), a raw `mean_color` and a
//!   `pixel_count`.
//! - [`RegionGraph`] is an immutable index-addressed arena. Node insertion
//!   order is the canonical enumeration order; edge insertion order is the
//!   canonical neighbor order. Vectorization tie-breaks depend on both.
//! - [`validate_graph`] reports every attribute problem in one pass.
//!
//! # Example
//!
//! ```
//! use morphvec_graph::{validate_graph, NodeId, RegionGraph, RegionNode};
//!
//! let graph = RegionGraph::builder()
//!     .node(RegionNode::region(1, 2.0, 0, 50))
//!     .node(RegionNode::region(2, 1.0, 0, 80))
//!     .node(RegionNode::region(3, 3.0, 0, 50))
//!     .edge(1, 2)
//!     .edge(2, 3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.degree(NodeId(2)), Some(2));
//! assert!(validate_graph(&graph).is_ok());
//! ```

pub mod budget;
pub mod builder;
pub mod error;
pub mod graph;
pub mod node;
pub mod validation;

pub use budget::GraphBudget;
pub use builder::RegionGraphBuilder;
pub use error::{
    GraphError, GraphIssue, GraphWarning, IssueCode, ValidationResult, WarningCode,
};
pub use graph::RegionGraph;
pub use node::{Attribute, MeanColor, NodeId, RegionNode};
pub use validation::validate_graph;
