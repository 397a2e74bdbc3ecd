//! Prim-style spanning tree construction.
//!
//! The tree grows from a start vertex. A frontier queue holds the vertices
//! whose edges have not yet been offered as candidates; a min-priority
//! queue holds the candidate edges. By default a candidate's priority is
//! the cumulative path cost from the start vertex to its far end, which
//! makes the result a shortest-path-tree-like spanning tree rather than a
//! classical minimum spanning tree whenever the graph has cycles.
//! [`PriorityRule::EdgeWeight`] selects classical Prim behaviour.

use std::collections::VecDeque;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::data_structures::MinPriorityQueue;
use crate::events::GraphEvent;
use crate::graph::{Edge, Graph, UndirectedGraph, Vertex, Weight};
use crate::{Error, Result};

/// How candidate edges are keyed in the priority queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityRule {
    /// Total path weight from the start vertex to the candidate's target
    #[default]
    CumulativeCost,
    /// The candidate edge's own weight (classical Prim)
    EdgeWeight,
}

/// A candidate edge from a tree vertex to a vertex outside the tree
#[derive(Debug)]
struct Candidate<V, W> {
    from: V,
    to: V,
    weight: W,
}

/// A spanning tree together with how it was grown
#[derive(Debug, Clone)]
pub struct SpanningTree<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// The tree itself, edges at their original weights
    pub tree: UndirectedGraph<V, W>,

    /// Vertex the tree was grown from; None for an empty source graph
    pub start: Option<V>,

    /// Path cost from the start vertex to each tree vertex, in the order the
    /// vertices joined the tree
    pub costs: IndexMap<V, W>,

    /// Tree edges in the order they were chosen
    pub chosen: Vec<Edge<V, W>>,
}

impl<V, W> SpanningTree<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn empty() -> Self {
        SpanningTree {
            tree: UndirectedGraph::new(),
            start: None,
            costs: IndexMap::new(),
            chosen: Vec::new(),
        }
    }

    /// Path cost from the start vertex to `vertex` along tree edges
    pub fn cost_to(&self, vertex: &V) -> Option<W> {
        self.costs.get(vertex).copied()
    }
}

/// Builds spanning trees over any [`Graph`]
#[derive(Debug, Clone)]
pub struct SpanningTreeBuilder<V> {
    /// Candidate priority rule
    rule: PriorityRule,
    /// Explicit start vertex; the first inserted vertex when None
    start: Option<V>,
}

impl<V> Default for SpanningTreeBuilder<V> {
    fn default() -> Self {
        SpanningTreeBuilder {
            rule: PriorityRule::default(),
            start: None,
        }
    }
}

impl<V> SpanningTreeBuilder<V>
where
    V: Vertex,
{
    /// Create a builder with the cumulative-cost rule, starting from the
    /// first inserted vertex
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate priority rule
    pub fn with_rule(mut self, rule: PriorityRule) -> Self {
        self.rule = rule;
        self
    }

    /// Grow the tree from this vertex instead of the first inserted one
    pub fn with_start(mut self, start: V) -> Self {
        self.start = Some(start);
        self
    }

    /// The candidate priority rule in effect
    pub fn rule(&self) -> PriorityRule {
        self.rule
    }

    /// Builds the spanning tree of `graph` as a new graph
    ///
    /// # Errors
    ///
    /// `Error::Disconnected` if the graph has vertices the tree cannot
    /// reach, `Error::VertexNotFound` if an explicit start vertex is absent,
    /// `Error::CostOverflow` if a path cost from the start overflows `W`.
    pub fn build<W, G>(&self, graph: &G) -> Result<UndirectedGraph<V, W>>
    where
        W: Weight,
        G: Graph<V, W> + ?Sized,
    {
        Ok(self.build_with_costs::<W, G>(graph)?.tree)
    }

    /// Builds the spanning tree of `graph`, keeping per-vertex path costs and
    /// the order edges were chosen in
    ///
    /// # Errors
    ///
    /// Same as [`SpanningTreeBuilder::build`].
    pub fn build_with_costs<W, G>(&self, graph: &G) -> Result<SpanningTree<V, W>>
    where
        W: Weight,
        G: Graph<V, W> + ?Sized,
    {
        let total = graph.vertex_count();
        if total == 0 {
            return Ok(SpanningTree::empty());
        }

        let start = match &self.start {
            Some(vertex) if graph.has_vertex(vertex) => vertex.clone(),
            Some(vertex) => return Err(Error::VertexNotFound(format!("{:?}", vertex))),
            None => match graph.vertices().next() {
                Some(vertex) => vertex.clone(),
                None => return Ok(SpanningTree::empty()),
            },
        };
        debug!(
            "Growing spanning tree from {:?} over {} vertices ({:?})",
            start, total, self.rule
        );

        let mut tree = UndirectedGraph::with_capacity(total);
        tree.add_vertex(start.clone());

        let mut costs = IndexMap::with_capacity(total);
        costs.insert(start.clone(), W::zero());

        let mut frontier = VecDeque::from([start.clone()]);
        let mut candidates: MinPriorityQueue<Candidate<V, W>, W> = MinPriorityQueue::new();
        let mut chosen = Vec::with_capacity(total - 1);

        while tree.edge_count() < total - 1 {
            while let Some(from) = frontier.pop_front() {
                let base = costs.get(&from).copied().unwrap_or_else(W::zero);
                for (to, weight) in graph.neighbors(&from) {
                    if tree.has_vertex(to) {
                        continue;
                    }
                    let priority = match self.rule {
                        PriorityRule::CumulativeCost => base
                            .checked_sum(weight)
                            .ok_or_else(|| Error::CostOverflow(format!("{:?}", to)))?,
                        PriorityRule::EdgeWeight => weight,
                    };
                    trace!("candidate {:?} -- {:?} priority {:?}", from, to, priority);
                    candidates.push(
                        Candidate {
                            from: from.clone(),
                            to: to.clone(),
                            weight,
                        },
                        priority,
                    );
                }
            }

            let next = loop {
                match candidates.pop() {
                    Some((candidate, _)) if tree.has_vertex(&candidate.to) => {
                        trace!("discarding {:?}, target already in tree", candidate);
                    }
                    found => break found,
                }
            };

            let Some((candidate, priority)) = next else {
                debug!(
                    "Candidate queue exhausted with {} of {} vertices in tree",
                    tree.vertex_count(),
                    total
                );
                return Err(Error::Disconnected {
                    reached: tree.vertex_count(),
                    total,
                });
            };

            let Candidate { from, to, weight } = candidate;
            let cumulative_cost = costs
                .get(&from)
                .copied()
                .unwrap_or_else(W::zero)
                .checked_sum(weight)
                .ok_or_else(|| Error::CostOverflow(format!("{:?}", to)))?;

            tree.add_vertex(to.clone());
            tree.try_connect(from.clone(), to.clone(), weight)?;
            costs.insert(to.clone(), cumulative_cost);
            frontier.push_back(to.clone());

            trace!("accepted {:?} -- {:?} at priority {:?}", from, to, priority);
            let edge = Edge::new(from, to, weight);
            graph.notify(&GraphEvent::SpanningEdgeChosen {
                edge: edge.clone(),
                cumulative_cost,
            });
            chosen.push(edge);
        }

        debug!(
            "Spanning tree complete: {} vertices, {} edges",
            tree.vertex_count(),
            tree.edge_count()
        );

        Ok(SpanningTree {
            tree,
            start: Some(start),
            costs,
            chosen,
        })
    }
}
