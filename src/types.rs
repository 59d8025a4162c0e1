use crate::error::VizError;
use serde::{Deserialize, Serialize};

/// Wrapper for petgraph's graph type. Node weights carry the vertex id,
/// edge weights carry the cost.
pub type UnGraph = petgraph::graph::UnGraph<u32, i64>;

/// A weighted edge in an undirected graph. `(a-b)` and `(b-a)` denote the
/// same edge for rendering and highlight matching.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub destination: usize,
    pub weight: i64,
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}-{}: {})", self.source, self.destination, self.weight)
    }
}

/// A weighted undirected graph with vertices `0..vertices`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub name: String,
    pub vertices: usize,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(name: &str, vertices: usize) -> Self {
        Graph {
            name: name.to_string(),
            vertices,
            edges: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, source: usize, destination: usize, weight: i64) {
        self.edges.push(Edge {
            source,
            destination,
            weight,
        });
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks that every edge endpoint lies in `[0, vertices)`.
    ///
    /// The renderers call this before touching any position, so a malformed
    /// edge fails loudly instead of drawing at an undefined coordinate.
    pub fn validate(&self) -> Result<(), VizError> {
        for edge in &self.edges {
            if edge.source >= self.vertices || edge.destination >= self.vertices {
                return Err(VizError::InvalidEdge {
                    graph: self.name.clone(),
                    source: edge.source,
                    destination: edge.destination,
                    vertices: self.vertices,
                });
            }
        }
        Ok(())
    }

    /// Converts to a petgraph graph. Vertex `i` maps to node index `i`.
    pub fn to_ungraph(&self) -> UnGraph {
        let mut graph = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..self.vertices).map(|i| graph.add_node(i as u32)).collect();
        graph.extend_with_edges(
            self.edges
                .iter()
                .map(|e| (nodes[e.source], nodes[e.destination], e.weight)),
        );
        graph
    }

    /// True if all vertices are reachable from each other.
    pub fn is_connected(&self) -> bool {
        self.vertices == 0 || petgraph::algo::connected_components(&self.to_ungraph()) == 1
    }
}

/// Edges selected by one MST run plus their summed weight.
#[derive(Clone, Debug, Default)]
pub struct MstResult {
    pub edges: Vec<Edge>,
    pub total_cost: i64,
}
