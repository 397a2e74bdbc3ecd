use std::cmp::Ordering;

use crate::graph::traits::{Vertex, Weight};

/// Position of an edge in a graph's edge arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Returns the arena index
    pub fn index(self) -> usize {
        self.0
    }
}

/// An undirected, positively weighted connection between two vertices
///
/// The pair is unordered: `endpoint_a` is simply whichever vertex was named
/// first when the edge was created. Edges order by weight first, then by
/// endpoints, which gives a total order consistent with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V, W> {
    endpoint_a: V,
    endpoint_b: V,
    weight: W,
}

impl<V, W> Edge<V, W>
where
    W: Copy,
{
    /// Creates an edge record. Weight validation happens when the edge is
    /// inserted into a graph, not here.
    pub fn new(endpoint_a: V, endpoint_b: V, weight: W) -> Self {
        Edge {
            endpoint_a,
            endpoint_b,
            weight,
        }
    }

    pub fn endpoint_a(&self) -> &V {
        &self.endpoint_a
    }

    pub fn endpoint_b(&self) -> &V {
        &self.endpoint_b
    }

    /// Both endpoints, in creation order
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.endpoint_a, &self.endpoint_b)
    }

    pub fn weight(&self) -> W {
        self.weight
    }
}

impl<V, W> Edge<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Returns the endpoint opposite `vertex`, or None if `vertex` is not on
    /// this edge. A self-loop returns the vertex itself.
    pub fn other(&self, vertex: &V) -> Option<&V> {
        if *vertex == self.endpoint_a {
            Some(&self.endpoint_b)
        } else if *vertex == self.endpoint_b {
            Some(&self.endpoint_a)
        } else {
            None
        }
    }

    /// True if this edge joins `x` and `y`, in either order
    pub fn connects(&self, x: &V, y: &V) -> bool {
        (self.endpoint_a == *x && self.endpoint_b == *y)
            || (self.endpoint_a == *y && self.endpoint_b == *x)
    }

    pub fn is_self_loop(&self) -> bool {
        self.endpoint_a == self.endpoint_b
    }
}

impl<V, W> PartialOrd for Edge<V, W>
where
    V: Vertex + Ord,
    W: Weight,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, W> Ord for Edge<V, W>
where
    V: Vertex + Ord,
    W: Weight,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.endpoint_a.cmp(&other.endpoint_a))
            .then_with(|| self.endpoint_b.cmp(&other.endpoint_b))
    }
}
