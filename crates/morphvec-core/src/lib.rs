//! morphvec Core
//!
//! This crate turns a region adjacency graph (see `morphvec-graph`) into a
//! deterministic numeric vector for shape and morphology similarity.
//!
//! # Algorithm
//!
//! 1. **Root selection**: the node with the highest degree, ties broken by
//!    larger `pixel_count`, then by enumeration order.
//! 2. **Priority BFS**: breadth-first from the root; each expansion enqueues
//!    the unvisited neighbors in ascending signature order (stable for equal
//!    signatures).
//! 3. **Color sign**: every visited node contributes `±weight`, negative for
//!    background (`mean_color == 0`) and positive for foreground (`1`/`255`).
//!
//! # Example
//!
//! ```
//! use morphvec_core::vectorize;
//! use morphvec_graph::{RegionGraph, RegionNode};
//!
//! let graph = RegionGraph::builder()
//!     .node(RegionNode::region(1, 0.5, 255, 400))
//!     .node(RegionNode::region(2, 5.0, 255, 10))
//!     .node(RegionNode::region(3, 1.0, 0, 10))
//!     .node(RegionNode::region(4, 3.0, 255, 10))
//!     .edge(1, 2)
//!     .edge(1, 3)
//!     .edge(1, 4)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(vectorize(&graph).unwrap(), vec![0.5, -1.0, 3.0, 5.0]);
//! ```
//!
//! # Determinism
//!
//! Output depends only on the graph, including the node and neighbor
//! enumeration order fixed by its builder. The same graph always produces
//! the same vector and [`vector_fingerprint`].
//!
//! Unreachable nodes are left out of the vector unless
//! [`DisconnectedPolicy::Reject`] is configured.

pub mod color;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod root;
pub mod traversal;
pub mod vectorize;

// Re-export main types for convenience
pub use color::{color_sign, sign_of};
pub use config::{DisconnectedPolicy, NeighborOrdering, VectorizeConfig};
pub use error::{ConfigError, ErrorKind, VectorizeError};
pub use fingerprint::vector_fingerprint;
pub use root::select_root;
pub use traversal::{traverse, traverse_with, Traversal};
pub use vectorize::{vectorize, vectorize_with_order, GraphEmbedding, GraphVectorizer};
