use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use log::{log_enabled, trace, Level};

use crate::algorithm::spanning_tree::SpanningTreeBuilder;
use crate::algorithm::{BreadthFirst, DepthFirst, Traversal};
use crate::events::{GraphEvent, GraphObserver};
use crate::graph::edge::{Edge, EdgeId};
use crate::graph::traits::{Graph, MutableGraph, Vertex, Weight};
use crate::{Error, Result};

/// What a successful connect did to the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// A new unordered pair was joined and the edge count grew by one
    Inserted,
    /// The pair was already joined; its edge was replaced in place
    Replaced,
}

/// An undirected, positively weighted graph
///
/// Edges live in a single arena. Each vertex maps its neighbours to the
/// arena slot of the joining edge, so both endpoints always see the same
/// record. Vertices and neighbours iterate in insertion order.
#[derive(Clone)]
pub struct UndirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Neighbour maps for each vertex: vertex -> {neighbour -> edge slot}
    adjacency: IndexMap<V, IndexMap<V, EdgeId>>,

    /// Edge arena, one slot per distinct unordered pair
    edges: Vec<Edge<V, W>>,

    observer: Option<Rc<dyn GraphObserver<V, W>>>,
}

impl<V, W> UndirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            adjacency: IndexMap::new(),
            edges: Vec::new(),
            observer: None,
        }
    }

    /// Creates a new empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        UndirectedGraph {
            adjacency: IndexMap::with_capacity(vertices),
            edges: Vec::new(),
            observer: None,
        }
    }

    /// Attaches an observer that receives every event raised on this graph
    pub fn with_observer(mut self, observer: Rc<dyn GraphObserver<V, W>>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn set_observer(&mut self, observer: Option<Rc<dyn GraphObserver<V, W>>>) {
        self.observer = observer;
    }

    /// Inserts a vertex with no neighbours. Returns false and leaves the
    /// graph untouched if the vertex is already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex.clone(), IndexMap::new());
        self.emit(|| GraphEvent::VertexAdded(vertex));
        true
    }

    /// Joins two vertices, reporting why the edge was refused
    ///
    /// Re-connecting a pair that is already joined replaces its edge in both
    /// directions and leaves the edge count unchanged.
    ///
    /// # Errors
    ///
    /// `Error::VertexNotFound` if either endpoint is absent,
    /// `Error::NonPositiveWeight` if `weight <= 0`.
    pub fn try_connect(&mut self, a: V, b: V, weight: W) -> Result<ConnectOutcome> {
        for vertex in [&a, &b] {
            if !self.adjacency.contains_key(vertex) {
                return Err(Error::VertexNotFound(format!("{:?}", vertex)));
            }
        }
        if weight <= W::zero() {
            return Err(Error::NonPositiveWeight(format!("{:?}", weight)));
        }

        let existing = self.adjacency.get(&a).and_then(|n| n.get(&b)).copied();
        let edge = Edge::new(a.clone(), b.clone(), weight);

        let (id, outcome) = match existing {
            Some(id) => {
                self.edges[id.index()] = edge;
                (id, ConnectOutcome::Replaced)
            }
            None => {
                let id = EdgeId(self.edges.len());
                self.edges.push(edge);
                if let Some(neighbors) = self.adjacency.get_mut(&a) {
                    neighbors.insert(b.clone(), id);
                }
                if let Some(neighbors) = self.adjacency.get_mut(&b) {
                    neighbors.insert(a, id);
                }
                (id, ConnectOutcome::Inserted)
            }
        };

        self.emit(|| GraphEvent::EdgeAdded {
            edge: self.edges[id.index()].clone(),
            replaced: outcome == ConnectOutcome::Replaced,
        });
        Ok(outcome)
    }

    /// Joins two existing vertices with a positively weighted edge. Returns
    /// false without touching the graph if either vertex is missing or the
    /// weight is not positive.
    pub fn connect(&mut self, a: V, b: V, weight: W) -> bool {
        match self.try_connect(a, b, weight) {
            Ok(_) => true,
            Err(err) => {
                trace!("connect refused: {}", err);
                false
            }
        }
    }

    /// True only if `b` is a direct neighbour of `a`
    pub fn is_connected(&self, a: &V, b: &V) -> bool {
        self.adjacency
            .get(a)
            .map_or(false, |neighbors| neighbors.contains_key(b))
    }

    /// Cost of the hop-minimal route between two vertices
    ///
    /// Sums the edge weights along the breadth-first path from `a` to `b`.
    /// This is the cost of the route with the fewest edges, which is not
    /// necessarily the cheapest route. Returns None if either vertex is
    /// absent, `b` cannot be reached from `a`, or the sum overflows `W`.
    ///
    /// Self-loop cost: when `a == b` the path is the single vertex, and the
    /// cost is the weight of that vertex's self-loop if it has one, zero
    /// otherwise.
    pub fn cost(&self, a: &V, b: &V) -> Option<W> {
        if !self.has_vertex(a) || !self.has_vertex(b) {
            return None;
        }
        let path = self.breadth_first_search(a, b);
        match path.len() {
            0 => None,
            1 => Some(self.self_loop_weight(a).unwrap_or_else(W::zero)),
            _ => self.path_cost(&path),
        }
    }

    /// Sum of the edge weights between consecutive vertices of `path`, or
    /// None if some consecutive pair is not joined by an edge or the sum
    /// overflows `W`
    pub fn path_cost(&self, path: &[V]) -> Option<W> {
        path.windows(2).try_fold(W::zero(), |total, pair| {
            self.get_edge_weight(&pair[0], &pair[1])
                .and_then(|weight| total.checked_sum(weight))
        })
    }

    fn self_loop_weight(&self, vertex: &V) -> Option<W> {
        self.get_edge_weight(vertex, vertex)
    }

    /// Vertex path from `start` to `end` found by breadth-first exploration.
    /// Empty if either vertex is absent or `end` is unreachable.
    pub fn breadth_first_search(&self, start: &V, end: &V) -> Vec<V> {
        BreadthFirst.find_path::<V, W, Self>(self, start, end)
    }

    /// Vertex path from `start` to `end` found by depth-first exploration.
    /// Empty if either vertex is absent or `end` is unreachable.
    pub fn depth_first_search(&self, start: &V, end: &V) -> Vec<V> {
        DepthFirst.find_path::<V, W, Self>(self, start, end)
    }

    /// Every vertex in the connected component of `start`, in breadth-first
    /// discovery order
    pub fn reachable_from(&self, start: &V) -> Vec<V> {
        BreadthFirst
            .explore::<V, W, Self>(self, start)
            .map(|map| map.reached().cloned().collect())
            .unwrap_or_default()
    }

    /// Spanning tree grown from the first inserted vertex with the default
    /// cumulative-cost priority
    ///
    /// # Errors
    ///
    /// `Error::Disconnected` if some vertex cannot be reached,
    /// `Error::CostOverflow` if a path cost from the start overflows `W`.
    pub fn minimum_spanning_tree(&self) -> Result<Self> {
        SpanningTreeBuilder::new().build::<W, Self>(self)
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// The vertex inserted first, if any
    pub fn first_vertex(&self) -> Option<&V> {
        self.adjacency.keys().next()
    }

    /// The edge joining two vertices, if any
    pub fn edge(&self, a: &V, b: &V) -> Option<&Edge<V, W>> {
        self.adjacency
            .get(a)
            .and_then(|neighbors| neighbors.get(b))
            .map(|id| &self.edges[id.index()])
    }

    /// All edges, in the order their pairs were first connected
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V, W>> + '_ {
        self.edges.iter()
    }

    /// Number of neighbours of a vertex; a self-loop counts once
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get(vertex).map(|neighbors| neighbors.len())
    }

    /// Sum of all edge weights, or None if it overflows `W`
    pub fn total_weight(&self) -> Option<W> {
        self.edges
            .iter()
            .try_fold(W::zero(), |total, edge| total.checked_sum(edge.weight()))
    }

    fn emit<F>(&self, event: F)
    where
        F: FnOnce() -> GraphEvent<V, W>,
    {
        if self.observer.is_none() && !log_enabled!(Level::Trace) {
            return;
        }
        self.notify(&event());
    }
}

impl<V, W> Default for UndirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> fmt::Debug for UndirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndirectedGraph")
            .field("vertices", &self.adjacency.keys().collect::<Vec<_>>())
            .field("edges", &self.edges)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl<V, W> Graph<V, W> for UndirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = &'a V> + 'a>
    where
        V: 'a,
    {
        Box::new(self.adjacency.keys())
    }

    fn neighbors<'a>(&'a self, vertex: &V) -> Box<dyn Iterator<Item = (&'a V, W)> + 'a>
    where
        V: 'a,
    {
        if let Some(neighbors) = self.adjacency.get(vertex) {
            Box::new(
                neighbors
                    .iter()
                    .map(move |(neighbor, id)| (neighbor, self.edges[id.index()].weight())),
            )
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_edge(&self, a: &V, b: &V) -> bool {
        self.is_connected(a, b)
    }

    fn get_edge_weight(&self, a: &V, b: &V) -> Option<W> {
        self.edge(a, b).map(|edge| edge.weight())
    }

    fn notify(&self, event: &GraphEvent<V, W>) {
        trace!("{:?}", event);
        if let Some(observer) = &self.observer {
            observer.on_event(event);
        }
    }
}

impl<V, W> MutableGraph<V, W> for UndirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        UndirectedGraph::add_vertex(self, vertex)
    }

    fn connect(&mut self, a: V, b: V, weight: W) -> bool {
        UndirectedGraph::connect(self, a, b, weight)
    }
}
