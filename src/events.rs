//! Structured events raised while a graph is built and while spanning trees
//! are grown over it.
//!
//! An observer is optional. Without one the graph still reports every event
//! at `trace` level through the `log` facade.

use std::cell::RefCell;
use std::fmt::Debug;

use log::info;

use crate::graph::edge::Edge;

/// Something that happened to, or over, a graph
#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent<V, W> {
    /// A new vertex was inserted
    VertexAdded(V),
    /// An edge was inserted, or an existing pair was re-connected
    EdgeAdded { edge: Edge<V, W>, replaced: bool },
    /// The spanning tree builder accepted an edge into the tree
    SpanningEdgeChosen { edge: Edge<V, W>, cumulative_cost: W },
}

/// Receives graph events
pub trait GraphObserver<V, W> {
    fn on_event(&self, event: &GraphEvent<V, W>);
}

impl<V, W, F> GraphObserver<V, W> for F
where
    F: Fn(&GraphEvent<V, W>),
{
    fn on_event(&self, event: &GraphEvent<V, W>) {
        self(event)
    }
}

/// Forwards every event to `log::info!`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl<V, W> GraphObserver<V, W> for LogObserver
where
    V: Debug,
    W: Debug + Copy,
{
    fn on_event(&self, event: &GraphEvent<V, W>) {
        match event {
            GraphEvent::VertexAdded(vertex) => info!("vertex {:?} added", vertex),
            GraphEvent::EdgeAdded { edge, replaced } => {
                let (a, b) = (edge.endpoint_a(), edge.endpoint_b());
                if *replaced {
                    info!("edge {:?} -- {:?} replaced, weight {:?}", a, b, edge.weight());
                } else {
                    info!("edge {:?} -- {:?} added, weight {:?}", a, b, edge.weight());
                }
            }
            GraphEvent::SpanningEdgeChosen {
                edge,
                cumulative_cost,
            } => info!(
                "spanning edge {:?} -- {:?} chosen, weight {:?}, cumulative cost {:?}",
                edge.endpoint_a(),
                edge.endpoint_b(),
                edge.weight(),
                cumulative_cost
            ),
        }
    }
}

/// Keeps every event it sees, in order
#[derive(Debug)]
pub struct RecordingObserver<V, W> {
    events: RefCell<Vec<GraphEvent<V, W>>>,
}

impl<V, W> Default for RecordingObserver<V, W> {
    fn default() -> Self {
        RecordingObserver {
            events: RefCell::new(Vec::new()),
        }
    }
}

impl<V, W> RecordingObserver<V, W>
where
    V: Clone,
    W: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<GraphEvent<V, W>> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl<V, W> GraphObserver<V, W> for RecordingObserver<V, W>
where
    V: Clone,
    W: Clone,
{
    fn on_event(&self, event: &GraphEvent<V, W>) {
        self.events.borrow_mut().push(event.clone());
    }
}
