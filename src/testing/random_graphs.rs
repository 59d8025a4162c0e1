use crate::types::Graph;
use crate::visualize::canonical_pair;
use hashbrown::HashSet;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng_for(vertices: usize) -> StdRng {
    // Seeded by the vertex count so generated inputs are reproducible.
    StdRng::seed_from_u64(vertices as u64)
}

/// Generates a complete graph with random weights in `1..=100`.
pub fn complete_graph(vertices: usize) -> Graph {
    let mut rng = rng_for(vertices);
    let mut graph = Graph::new(&format!("complete_{}", vertices), vertices);

    for i in 0..vertices {
        for j in i + 1..vertices {
            graph.add_edge(i, j, rng.random_range(1..=100));
        }
    }

    graph
}

/// Generates a sparse connected graph: a random tree plus a few extra
/// edges.
pub fn sparse_graph(vertices: usize) -> Graph {
    let mut rng = rng_for(vertices);
    let mut graph = Graph::new(&format!("sparse_{}", vertices), vertices);

    for i in 1..vertices {
        let parent = rng.random_range(0..i);
        graph.add_edge(parent, i, rng.random_range(1..=50));
    }

    for _ in 0..vertices / 2 {
        let source = rng.random_range(0..vertices);
        let destination = rng.random_range(0..vertices);
        if source != destination {
            graph.add_edge(source, destination, rng.random_range(1..=100));
        }
    }

    graph
}

/// Generates a simple graph hitting the requested fraction of the maximum
/// possible edge count.
pub fn dense_graph(vertices: usize, density: f64) -> Graph {
    let mut rng = rng_for(vertices);
    let mut graph = Graph::new(&format!("dense_{}", vertices), vertices);

    let max_edges = vertices * vertices.saturating_sub(1) / 2;
    let target_edges = (max_edges as f64 * density) as usize;

    let mut added: HashSet<(usize, usize)> = HashSet::new();
    while added.len() < target_edges {
        let source = rng.random_range(0..vertices);
        let destination = rng.random_range(0..vertices);
        if source == destination {
            continue;
        }
        if added.insert(canonical_pair(source, destination)) {
            graph.add_edge(source, destination, rng.random_range(1..=100));
        }
    }

    graph
}

/// Builds the full input collection: small, medium and large graphs of
/// varying density.
pub fn generate_suite() -> Vec<Graph> {
    let mut graphs = Vec::new();

    for i in 0..5 {
        let mut graph = dense_graph(4 + i, 0.6);
        graph.name = format!("small_graph_{}", i + 1);
        graphs.push(graph);
    }

    let medium_sizes = [10, 15, 20, 25, 30, 50, 75, 100, 150, 200];
    for (i, &vertices) in medium_sizes.iter().enumerate() {
        let density = 0.3 + (i % 3) as f64 * 0.15;
        let mut graph = dense_graph(vertices, density);
        graph.name = format!("medium_graph_{}", i + 1);
        graphs.push(graph);
    }

    for (i, &vertices) in [250, 300].iter().enumerate() {
        let mut graph = dense_graph(vertices, 0.4);
        graph.name = format!("large_graph_{}", i + 1);
        graphs.push(graph);
    }

    graphs
}
