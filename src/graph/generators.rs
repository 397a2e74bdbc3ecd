use crate::graph::UndirectedGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Parameters for random graph generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of vertices, labelled 0..vertices
    pub vertices: usize,
    /// Extra edges attempted on top of the spanning skeleton, per vertex
    pub extra_edge_factor: f64,
    /// Smallest edge weight (clamped to at least 1)
    pub min_weight: i64,
    /// Largest edge weight
    pub max_weight: i64,
    /// Seed for reproducible graphs; entropy when None
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            vertices: 100,
            extra_edge_factor: 1.0,
            min_weight: 1,
            max_weight: 100,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(vertices: usize) -> Self {
        GeneratorConfig {
            vertices,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_extra_edge_factor(mut self, factor: f64) -> Self {
        self.extra_edge_factor = factor;
        self
    }

    pub fn with_weights(mut self, min_weight: i64, max_weight: i64) -> Self {
        self.min_weight = min_weight;
        self.max_weight = max_weight;
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn weight_range(&self) -> std::ops::RangeInclusive<i64> {
        let low = self.min_weight.max(1);
        low..=self.max_weight.max(low)
    }
}

/// Generates a random connected graph: a random spanning skeleton (every
/// vertex joined to some earlier vertex) plus extra random edges
pub fn generate_random_connected(config: &GeneratorConfig) -> UndirectedGraph<usize, i64> {
    let n = config.vertices;
    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = config.rng();
    let weights = config.weight_range();

    for v in 0..n {
        graph.add_vertex(v);
    }

    for v in 1..n {
        let parent = rng.gen_range(0..v);
        graph.connect(v, parent, rng.gen_range(weights.clone()));
    }

    if n > 1 {
        let extra = (config.extra_edge_factor * n as f64) as usize;
        for _ in 0..extra {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // Avoid self-loops and re-connecting existing pairs
            if u != v && !graph.is_connected(&u, &v) {
                graph.connect(u, v, rng.gen_range(weights.clone()));
            }
        }
    }

    graph
}

/// Generates `components` disjoint random connected graphs in one graph.
/// Component `c` holds vertices `c * config.vertices .. (c + 1) * config.vertices`.
pub fn generate_components(components: usize, config: &GeneratorConfig) -> UndirectedGraph<usize, i64> {
    let size = config.vertices;
    let mut graph = UndirectedGraph::with_capacity(components * size);

    for c in 0..components {
        let part = generate_random_connected(&GeneratorConfig {
            seed: config.seed.map(|seed| seed.wrapping_add(c as u64)),
            ..config.clone()
        });
        let offset = c * size;
        for v in 0..size {
            graph.add_vertex(offset + v);
        }
        for edge in part.edges() {
            let (a, b) = edge.endpoints();
            graph.connect(offset + a, offset + b, edge.weight());
        }
    }

    graph
}

/// Generates a path 0 - 1 - ... - (n-1) with a uniform edge weight
pub fn generate_path(n: usize, weight: i64) -> UndirectedGraph<usize, i64> {
    let mut graph = UndirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for v in 1..n {
        graph.connect(v - 1, v, weight);
    }
    graph
}

/// Generates a width x height grid with 4-connectivity and unit weights.
/// Vertex (x, y) has label `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> UndirectedGraph<usize, i64> {
    let mut graph = UndirectedGraph::with_capacity(width * height);

    for v in 0..(width * height) {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                graph.connect(current, current + 1, 1);
            }
            if y + 1 < height {
                graph.connect(current, current + width, 1);
            }
        }
    }

    graph
}

/// Generates a random geometric graph in the unit square
/// n: number of vertices
/// r: connection radius (vertices within distance r are connected)
pub fn generate_geometric(n: usize, r: f64, seed: Option<u64>) -> UndirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut points = Vec::with_capacity(n);
    for v in 0..n {
        let x: f64 = rng.gen_range(0.0..1.0);
        let y: f64 = rng.gen_range(0.0..1.0);
        points.push((x, y));
        graph.add_vertex(v);
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let (x1, y1) = points[i];
            let (x2, y2) = points[j];
            let dist = f64::sqrt((x1 - x2) * (x1 - x2) + (y1 - y2) * (y1 - y2));

            // Coincident points would give a zero weight, which is refused
            if dist > 0.0 && dist <= r {
                graph.connect(i, j, OrderedFloat(dist));
            }
        }
    }

    graph
}
