use indexmap::IndexMap;
use log::warn;

use crate::graph::{Graph, Vertex, Weight};

/// Outcome of exploring a graph from a start vertex
///
/// Records, for every vertex reached, the vertex it was discovered from.
/// The start vertex has no predecessor.
#[derive(Debug, Clone)]
pub struct PredecessorMap<V>
where
    V: Vertex,
{
    /// Start vertex of the exploration
    start: V,

    /// vertex -> vertex it was discovered from, in discovery order
    predecessors: IndexMap<V, Option<V>>,
}

impl<V> PredecessorMap<V>
where
    V: Vertex,
{
    pub(crate) fn new(start: V) -> Self {
        let mut predecessors = IndexMap::new();
        predecessors.insert(start.clone(), None);
        PredecessorMap {
            start,
            predecessors,
        }
    }

    /// Records `vertex` as discovered from `from`. Returns false if the
    /// vertex had already been discovered.
    pub(crate) fn discover(&mut self, vertex: &V, from: &V) -> bool {
        if self.predecessors.contains_key(vertex) {
            return false;
        }
        self.predecessors.insert(vertex.clone(), Some(from.clone()));
        true
    }

    pub fn start(&self) -> &V {
        &self.start
    }

    /// True if the exploration reached `vertex`
    pub fn contains(&self, vertex: &V) -> bool {
        self.predecessors.contains_key(vertex)
    }

    /// The vertex `vertex` was discovered from. None for the start vertex and
    /// for vertices that were never reached.
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(|p| p.as_ref())
    }

    /// Reached vertices in discovery order, start first
    pub fn reached(&self) -> impl Iterator<Item = &V> + '_ {
        self.predecessors.keys()
    }

    /// Number of vertices reached, start included
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Walks predecessors back from `end` to the start and returns the path
    /// in forward order. Empty if `end` was never reached.
    pub fn path_to(&self, end: &V) -> Vec<V> {
        if !self.contains(end) {
            return Vec::new();
        }

        let mut path = vec![end.clone()];
        let mut current = end;
        while let Some(previous) = self.predecessor(current) {
            path.push(previous.clone());
            current = previous;

            if path.len() > self.predecessors.len() {
                warn!("Path length exceeds reached vertex count, predecessor chain has a cycle");
                return Vec::new();
            }
        }

        path.reverse();
        path
    }
}

/// Trait for graph explorations that reconstruct vertex paths
pub trait Traversal {
    /// Get the name of the traversal
    fn name(&self) -> &'static str;

    /// Explores the whole connected component of `start`. Returns None if
    /// `start` is not a vertex of the graph.
    fn explore<V, W, G>(&self, graph: &G, start: &V) -> Option<PredecessorMap<V>>
    where
        V: Vertex,
        W: Weight,
        G: Graph<V, W> + ?Sized;

    /// Get the path from `start` to `end` as a sequence of vertices, both
    /// inclusive. Empty if either vertex is absent or `end` is unreachable.
    fn find_path<V, W, G>(&self, graph: &G, start: &V, end: &V) -> Vec<V>
    where
        V: Vertex,
        W: Weight,
        G: Graph<V, W> + ?Sized,
    {
        if !graph.has_vertex(end) {
            return Vec::new();
        }
        self.explore::<V, W, G>(graph, start)
            .map(|map| map.path_to(end))
            .unwrap_or_default()
    }
}
