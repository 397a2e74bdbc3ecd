//! Weighted Graph - an undirected, positively weighted graph engine
//!
//! This library stores vertices and weighted edges, answers connectivity and
//! path-cost queries, reconstructs breadth-first and depth-first paths, and
//! grows Prim-style spanning trees driven by a min-priority queue.
//!
//! Spanning trees are built by default with a cumulative-cost priority (each
//! candidate edge is keyed by the total path weight from the start vertex),
//! which yields a shortest-path-tree-like result. The classical edge-weight
//! rule is available through [`SpanningTreeBuilder::with_rule`].

pub mod algorithm;
pub mod data_structures;
pub mod events;
pub mod graph;

pub use algorithm::{
    BreadthFirst, DepthFirst, PredecessorMap, PriorityRule, SpanningTree, SpanningTreeBuilder,
    Traversal,
};
/// Re-export main types for convenient use
pub use graph::edge::Edge;
pub use graph::undirected::{ConnectOutcome, UndirectedGraph};
pub use graph::{Graph, MutableGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Vertex not found in graph: {0}")]
    VertexNotFound(String),

    #[error("Edge weight must be positive, got {0}")]
    NonPositiveWeight(String),

    #[error("Graph is disconnected: spanning tree reached {reached} of {total} vertices")]
    Disconnected { reached: usize, total: usize },

    #[error("Path cost to {0} overflows the weight type")]
    CostOverflow(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
