use std::collections::VecDeque;

use crate::algorithm::traits::{PredecessorMap, Traversal};
use crate::graph::{Graph, Vertex, Weight};

/// Order in which discovered vertices are expanded
trait Frontier<V> {
    fn push(&mut self, vertex: V);
    fn pop(&mut self) -> Option<V>;
}

/// First in, first out: breadth-first
impl<V> Frontier<V> for VecDeque<V> {
    fn push(&mut self, vertex: V) {
        self.push_back(vertex);
    }

    fn pop(&mut self) -> Option<V> {
        self.pop_front()
    }
}

/// Last in, first out: depth-first
impl<V> Frontier<V> for Vec<V> {
    fn push(&mut self, vertex: V) {
        Vec::push(self, vertex);
    }

    fn pop(&mut self) -> Option<V> {
        Vec::pop(self)
    }
}

/// Expands the frontier until it is empty. The whole component of `start`
/// is always explored, even once a particular target has been seen.
fn explore_with<V, W, G, F>(graph: &G, start: &V, mut frontier: F) -> Option<PredecessorMap<V>>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W> + ?Sized,
    F: Frontier<V>,
{
    if !graph.has_vertex(start) {
        return None;
    }

    let mut predecessors = PredecessorMap::new(start.clone());
    frontier.push(start.clone());

    while let Some(current) = frontier.pop() {
        for (neighbor, _) in graph.neighbors(&current) {
            if predecessors.discover(neighbor, &current) {
                frontier.push(neighbor.clone());
            }
        }
    }

    Some(predecessors)
}

/// Breadth-first exploration; reconstructed paths use the fewest edges
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

impl Traversal for BreadthFirst {
    fn name(&self) -> &'static str {
        "BreadthFirst"
    }

    fn explore<V, W, G>(&self, graph: &G, start: &V) -> Option<PredecessorMap<V>>
    where
        V: Vertex,
        W: Weight,
        G: Graph<V, W> + ?Sized,
    {
        explore_with::<V, W, G, _>(graph, start, VecDeque::new())
    }
}

/// Depth-first exploration
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;

impl Traversal for DepthFirst {
    fn name(&self) -> &'static str {
        "DepthFirst"
    }

    fn explore<V, W, G>(&self, graph: &G, start: &V) -> Option<PredecessorMap<V>>
    where
        V: Vertex,
        W: Weight,
        G: Graph<V, W> + ?Sized,
    {
        explore_with::<V, W, G, _>(graph, start, Vec::new())
    }
}
