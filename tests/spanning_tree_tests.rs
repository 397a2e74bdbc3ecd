use std::rc::Rc;

use ordered_float::OrderedFloat;
use weighted_graph::events::{GraphEvent, RecordingObserver};
use weighted_graph::graph::generators::{
    generate_components, generate_geometric, generate_random_connected, GeneratorConfig,
};
use weighted_graph::{Error, Graph, PriorityRule, SpanningTreeBuilder, UndirectedGraph};

// Test helper: A - B (1), B - C (2), A - C (4), C - D (1)
fn create_diamond() -> UndirectedGraph<&'static str, i64> {
    let mut graph = UndirectedGraph::new();
    for v in ["A", "B", "C", "D"] {
        graph.add_vertex(v);
    }
    graph.connect("A", "B", 1);
    graph.connect("B", "C", 2);
    graph.connect("A", "C", 4);
    graph.connect("C", "D", 1);
    graph
}

// Test helper: S - X (5), S - Y (6), X - Y (2)
fn create_triangle() -> UndirectedGraph<&'static str, i64> {
    let mut graph = UndirectedGraph::new();
    for v in ["S", "X", "Y"] {
        graph.add_vertex(v);
    }
    graph.connect("S", "X", 5);
    graph.connect("S", "Y", 6);
    graph.connect("X", "Y", 2);
    graph
}

// Reference minimum spanning tree weight (Kruskal with union-find)
fn kruskal_weight(graph: &UndirectedGraph<usize, i64>) -> i64 {
    fn find(parent: &mut Vec<usize>, x: usize) -> usize {
        let p = parent[x];
        if p != x {
            let root = find(parent, p);
            parent[x] = root;
        }
        parent[x]
    }

    let mut edges: Vec<(i64, usize, usize)> = graph
        .edges()
        .map(|edge| (edge.weight(), *edge.endpoint_a(), *edge.endpoint_b()))
        .collect();
    edges.sort_unstable();

    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    let mut total = 0;
    for (weight, a, b) in edges {
        let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
        if ra != rb {
            parent[ra] = rb;
            total += weight;
        }
    }
    total
}

// Reference single-source distances (Bellman-Ford over both edge directions)
fn shortest_distances(graph: &UndirectedGraph<usize, i64>, source: usize) -> Vec<Option<i64>> {
    let mut dist = vec![None; graph.vertex_count()];
    dist[source] = Some(0);
    for _ in 0..graph.vertex_count() {
        for edge in graph.edges() {
            let (a, b) = (*edge.endpoint_a(), *edge.endpoint_b());
            for (from, to) in [(a, b), (b, a)] {
                if let Some(d) = dist[from] {
                    let candidate = d + edge.weight();
                    if dist[to].map_or(true, |current| candidate < current) {
                        dist[to] = Some(candidate);
                    }
                }
            }
        }
    }
    dist
}

// Asserts the structural spanning tree properties against the source graph
fn assert_spanning_tree(source: &UndirectedGraph<usize, i64>, tree: &UndirectedGraph<usize, i64>) {
    assert_eq!(tree.vertex_count(), source.vertex_count());
    assert_eq!(tree.edge_count(), source.vertex_count() - 1);
    for edge in tree.edges() {
        let (a, b) = edge.endpoints();
        assert!(source.has_vertex(a) && source.has_vertex(b));
        assert_eq!(source.get_edge_weight(a, b), Some(edge.weight()), "Tree edges keep their original weight");
    }
    assert_eq!(tree.reachable_from(&0).len(), source.vertex_count(), "Tree should be connected");
}

#[test]
fn test_diamond_spanning_tree() {
    let graph = create_diamond();
    let tree = graph.minimum_spanning_tree().expect("diamond is connected");

    assert_eq!(tree.vertex_count(), 4);
    assert_eq!(tree.edge_count(), 3);
    assert_eq!(tree.get_edge_weight(&"A", &"B"), Some(1));
    assert_eq!(tree.get_edge_weight(&"B", &"C"), Some(2));
    assert_eq!(tree.get_edge_weight(&"C", &"D"), Some(1));
    assert!(!tree.is_connected(&"A", &"C"), "A - C (4) must be excluded");

    // The source graph is left untouched
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_diamond_costs_and_choice_order() {
    let graph = create_diamond();
    let result = SpanningTreeBuilder::new()
        .build_with_costs(&graph)
        .expect("diamond is connected");

    assert_eq!(result.start, Some("A"));
    assert_eq!(
        result.costs.iter().map(|(v, c)| (*v, *c)).collect::<Vec<_>>(),
        vec![("A", 0), ("B", 1), ("C", 3), ("D", 4)]
    );
    let chosen: Vec<(&str, &str, i64)> = result
        .chosen
        .iter()
        .map(|edge| (*edge.endpoint_a(), *edge.endpoint_b(), edge.weight()))
        .collect();
    assert_eq!(chosen, vec![("A", "B", 1), ("B", "C", 2), ("C", "D", 1)]);
    assert_eq!(result.cost_to(&"D"), Some(4));
    assert_eq!(result.cost_to(&"missing"), None);
}

#[test]
fn test_empty_graph() {
    let graph: UndirectedGraph<&str, i64> = UndirectedGraph::new();
    let tree = graph.minimum_spanning_tree().expect("empty graph has an empty tree");

    assert_eq!(tree.vertex_count(), 0);
    assert_eq!(tree.edge_count(), 0);

    let explicit = SpanningTreeBuilder::new().with_start("A").build(&graph);
    assert_eq!(explicit.map(|tree| tree.vertex_count()), Ok(0));
}

#[test]
fn test_single_vertex() {
    let mut graph: UndirectedGraph<&str, i64> = UndirectedGraph::new();
    graph.add_vertex("A");
    graph.connect("A", "A", 3);

    let tree = graph.minimum_spanning_tree().expect("a single vertex spans itself");
    assert_eq!(tree.vertex_count(), 1);
    assert_eq!(tree.edge_count(), 0);
}

#[test]
fn test_disconnected_graph_is_an_error() {
    let mut graph: UndirectedGraph<&str, i64> = UndirectedGraph::new();
    for v in ["A", "B", "C", "D"] {
        graph.add_vertex(v);
    }
    graph.connect("A", "B", 1);
    graph.connect("C", "D", 1);

    assert_eq!(
        graph.minimum_spanning_tree().map(|tree| tree.edge_count()),
        Err(Error::Disconnected { reached: 2, total: 4 })
    );

    let mut isolated: UndirectedGraph<&str, i64> = UndirectedGraph::new();
    isolated.add_vertex("A");
    isolated.add_vertex("B");
    assert!(matches!(
        isolated.minimum_spanning_tree(),
        Err(Error::Disconnected { reached: 1, total: 2 })
    ));
}

#[test]
fn test_disconnected_random_components() {
    let config = GeneratorConfig::new(10).with_seed(3);
    let graph = generate_components(3, &config);

    assert_eq!(graph.vertex_count(), 30);
    assert!(matches!(
        graph.minimum_spanning_tree(),
        Err(Error::Disconnected { reached: 10, total: 30 })
    ));
}

#[test]
fn test_cumulative_rule_differs_from_edge_weight_rule() {
    let graph = create_triangle();

    let cumulative = graph.minimum_spanning_tree().expect("triangle is connected");
    assert!(cumulative.is_connected(&"S", &"X"));
    assert!(cumulative.is_connected(&"S", &"Y"));
    assert_eq!(cumulative.total_weight(), Some(11));

    let classical = SpanningTreeBuilder::new()
        .with_rule(PriorityRule::EdgeWeight)
        .build(&graph)
        .expect("triangle is connected");
    assert!(classical.is_connected(&"S", &"X"));
    assert!(classical.is_connected(&"X", &"Y"));
    assert_eq!(classical.total_weight(), Some(7));
}

#[test]
fn test_builder_rule() {
    let builder: SpanningTreeBuilder<&str> = SpanningTreeBuilder::new();
    assert_eq!(builder.rule(), PriorityRule::CumulativeCost);
    assert_eq!(builder.with_rule(PriorityRule::EdgeWeight).rule(), PriorityRule::EdgeWeight);
}

#[test]
fn test_self_loops_are_not_tree_edges() {
    let mut graph: UndirectedGraph<&str, i64> = UndirectedGraph::new();
    for v in ["A", "B", "C"] {
        graph.add_vertex(v);
    }
    graph.connect("A", "A", 1);
    graph.connect("A", "B", 2);
    graph.connect("B", "B", 5);
    graph.connect("B", "C", 3);

    for rule in [PriorityRule::CumulativeCost, PriorityRule::EdgeWeight] {
        let tree = SpanningTreeBuilder::new()
            .with_rule(rule)
            .build(&graph)
            .expect("self-loops do not disconnect the graph");

        assert_eq!(tree.vertex_count(), 3);
        assert_eq!(tree.edge_count(), 2, "{:?}", rule);
        assert!(!tree.is_connected(&"A", &"A"));
        assert!(!tree.is_connected(&"B", &"B"));
        assert_eq!(tree.total_weight(), Some(5));
    }
}

#[test]
fn test_cost_overflow_is_an_error() {
    let mut graph: UndirectedGraph<u32, i64> = UndirectedGraph::new();
    for v in 0..3 {
        graph.add_vertex(v);
    }
    graph.connect(0, 1, i64::MAX);
    graph.connect(1, 2, i64::MAX);

    assert_eq!(
        graph.minimum_spanning_tree().map(|tree| tree.edge_count()),
        Err(Error::CostOverflow("2".to_string()))
    );

    // Edge-weight priorities fit, the recorded path cost to 2 does not
    let classical = SpanningTreeBuilder::new()
        .with_rule(PriorityRule::EdgeWeight)
        .build(&graph);
    assert_eq!(classical.map(|tree| tree.edge_count()), Err(Error::CostOverflow("2".to_string())));

    // Starting from the middle keeps every path cost in range
    let middle = SpanningTreeBuilder::new()
        .with_start(1)
        .build_with_costs(&graph)
        .expect("costs from 1 fit in i64");
    assert_eq!(middle.cost_to(&0), Some(i64::MAX));
    assert_eq!(middle.cost_to(&2), Some(i64::MAX));
    assert_eq!(middle.tree.total_weight(), None);
}

#[test]
fn test_explicit_start_vertex() {
    let graph = create_diamond();
    let result = SpanningTreeBuilder::new()
        .with_start("D")
        .build_with_costs(&graph)
        .expect("diamond is connected");

    assert_eq!(result.start, Some("D"));
    assert_eq!(result.cost_to(&"C"), Some(1));
    assert_eq!(result.cost_to(&"B"), Some(3));
    assert_eq!(result.cost_to(&"A"), Some(4));
    assert!(result.tree.is_connected(&"A", &"B"));
    assert!(!result.tree.is_connected(&"A", &"C"));

    let missing = SpanningTreeBuilder::new().with_start("Z").build(&graph);
    assert_eq!(missing.map(|tree| tree.edge_count()), Err(Error::VertexNotFound("\"Z\"".to_string())));
}

#[test]
fn test_equal_priorities_pop_in_insertion_order() {
    let mut graph: UndirectedGraph<&str, i64> = UndirectedGraph::new();
    for v in ["R", "P", "Q"] {
        graph.add_vertex(v);
    }
    graph.connect("R", "P", 1);
    graph.connect("R", "Q", 1);
    graph.connect("P", "Q", 1);

    let result = SpanningTreeBuilder::new()
        .build_with_costs(&graph)
        .expect("triangle is connected");
    let chosen: Vec<(&str, &str)> = result
        .chosen
        .iter()
        .map(|edge| (*edge.endpoint_a(), *edge.endpoint_b()))
        .collect();
    assert_eq!(chosen, vec![("R", "P"), ("R", "Q")]);
}

#[test]
fn test_spanning_edge_events() {
    let recorder: Rc<RecordingObserver<&'static str, i64>> = Rc::new(RecordingObserver::new());
    let mut graph = create_diamond();
    graph.set_observer(Some(recorder.clone()));

    graph.minimum_spanning_tree().expect("diamond is connected");

    let costs: Vec<i64> = recorder
        .events()
        .into_iter()
        .filter_map(|event| match event {
            GraphEvent::SpanningEdgeChosen { cumulative_cost, .. } => Some(cumulative_cost),
            _ => None,
        })
        .collect();
    assert_eq!(costs, vec![1, 3, 4]);
}

#[test]
fn test_random_graphs_span_and_match_references() {
    for seed in 0..8 {
        let config = GeneratorConfig::new(50)
            .with_extra_edge_factor(1.5)
            .with_weights(1, 20)
            .with_seed(seed);
        let graph = generate_random_connected(&config);

        let cumulative = SpanningTreeBuilder::new()
            .build_with_costs(&graph)
            .expect("generated graph is connected");
        assert_spanning_tree(&graph, &cumulative.tree);

        // Keying by cumulative cost yields shortest-path distances from the start
        let distances = shortest_distances(&graph, 0);
        for v in 0..graph.vertex_count() {
            assert_eq!(cumulative.cost_to(&v), distances[v], "cost to {} (seed {})", v, seed);
        }

        let classical = SpanningTreeBuilder::new()
            .with_rule(PriorityRule::EdgeWeight)
            .build(&graph)
            .expect("generated graph is connected");
        assert_spanning_tree(&graph, &classical);
        assert_eq!(classical.total_weight(), Some(kruskal_weight(&graph)));
        assert!(classical.total_weight() <= cumulative.tree.total_weight());
    }
}

#[test]
fn test_float_weighted_spanning_tree() {
    let graph = generate_geometric(40, 0.5, Some(11));
    let components = graph.reachable_from(&0).len();

    match graph.minimum_spanning_tree() {
        Ok(tree) => {
            assert_eq!(components, graph.vertex_count());
            assert_eq!(tree.edge_count(), graph.vertex_count() - 1);
            assert!(tree.total_weight() > Some(OrderedFloat(0.0)));
        }
        Err(Error::Disconnected { reached, total }) => {
            assert_eq!(reached, components);
            assert_eq!(total, graph.vertex_count());
        }
        Err(other) => panic!("unexpected error: {}", other),
    }
}
