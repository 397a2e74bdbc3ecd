pub mod traits;
pub mod traversal;
pub mod spanning_tree;

pub use traits::{PredecessorMap, Traversal};
pub use traversal::{BreadthFirst, DepthFirst};
pub use spanning_tree::{PriorityRule, SpanningTree, SpanningTreeBuilder};
