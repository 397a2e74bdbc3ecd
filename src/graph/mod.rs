pub mod traits;
pub mod edge;
pub mod undirected;
pub mod generators;

pub use traits::{Graph, MutableGraph, Vertex, Weight};
pub use edge::{Edge, EdgeId};
pub use undirected::{ConnectOutcome, UndirectedGraph};
