use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Bounded, Num};

use crate::events::GraphEvent;

/// Bounds required of a vertex key: identity by equality, hashable, cloneable
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Clone + Debug {}

/// Bounds required of an edge weight: numeric, bounded, totally ordered,
/// copyable
///
/// Integers satisfy this directly; floating point weights go through
/// `ordered_float::OrderedFloat`.
pub trait Weight: Num + Bounded + Copy + Ord + Debug {
    /// `self + rhs`, or None if the sum falls outside the type's range.
    /// For `OrderedFloat` the range is the finite values.
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        let fits = if rhs >= Self::zero() {
            self <= Self::max_value() - rhs
        } else {
            self >= Self::min_value() - rhs
        };
        fits.then(|| self + rhs)
    }
}

impl<T> Weight for T where T: Num + Bounded + Copy + Ord + Debug {}

/// Trait representing a weighted undirected graph
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of distinct unordered vertex pairs joined by an edge
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns an iterator over the vertices, in insertion order
    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = &'a V> + 'a>
    where
        V: 'a;

    /// Returns an iterator over the neighbours of a vertex with the weight of
    /// the joining edge, in the order the edges were first inserted
    fn neighbors<'a>(&'a self, vertex: &V) -> Box<dyn Iterator<Item = (&'a V, W)> + 'a>
    where
        V: 'a;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, a: &V, b: &V) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, a: &V, b: &V) -> Option<W>;

    /// Receives events raised by algorithms running over this graph
    fn notify(&self, _event: &GraphEvent<V, W>) {}
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Adds a vertex; returns false if it was already present
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Joins two existing vertices with a positively weighted edge
    fn connect(&mut self, a: V, b: V, weight: W) -> bool;
}
