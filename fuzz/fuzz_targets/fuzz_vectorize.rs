#![no_main]

//! Builds a region graph from raw bytes and vectorizes it.
//!
//! Layout: one byte for the node count, then 11 bytes per node
//! (weight as f64 LE, mean color, pixel count as u16 LE), then pairs of
//! bytes as edges between node positions.

use libfuzzer_sys::fuzz_target;
use morphvec_core::{vectorize, GraphVectorizer, NeighborOrdering, VectorizeConfig};
use morphvec_graph::{validate_graph, RegionGraph, RegionNode};

const NODE_BYTES: usize = 11;

fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let count = usize::from(count % 64);
    if rest.len() < count * NODE_BYTES {
        return;
    }
    let (nodes, edges) = rest.split_at(count * NODE_BYTES);

    let mut builder = RegionGraph::builder();
    for (pos, chunk) in nodes.chunks_exact(NODE_BYTES).enumerate() {
        let mut weight = [0u8; 8];
        weight.copy_from_slice(&chunk[..8]);
        let pixels = u16::from_le_bytes([chunk[9], chunk[10]]);
        builder = builder.node(RegionNode::region(
            pos as u32,
            f64::from_le_bytes(weight),
            chunk[8],
            u64::from(pixels),
        ));
    }
    if count > 0 {
        for pair in edges.chunks_exact(2) {
            let a = u32::from(pair[0]) % count as u32;
            let b = u32::from(pair[1]) % count as u32;
            builder = builder.edge(a, b);
        }
    }

    // Self-loops are rejected by the builder; that is a valid outcome.
    let Ok(graph) = builder.build() else {
        return;
    };

    let _ = validate_graph(&graph);
    let sorted = vectorize(&graph);
    let heap = GraphVectorizer::new(
        VectorizeConfig::default().neighbor_ordering(NeighborOrdering::Heap),
    )
    .vectorize(&graph);

    match (&sorted, &heap) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a.len(), b.len());
            assert!(a.len() <= graph.len());
        }
        (Err(_), Err(_)) => {}
        _ => panic!("orderings disagree: {sorted:?} vs {heap:?}"),
    }
});
