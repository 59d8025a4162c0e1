use crate::types::{Edge, Graph, MstResult, UnGraph};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Finds a minimum spanning tree with Prim's algorithm.
///
/// Grows the tree from vertex 0, keeping candidate vertices in a min-heap
/// keyed by the cheapest edge into the tree. Stale heap entries are
/// skipped on pop instead of being decreased in place.
///
/// On a disconnected graph this spans only the component containing
/// vertex 0; an empty graph yields an empty result.
pub fn prim_mst(graph: &Graph) -> MstResult {
    let n = graph.vertices;
    if n == 0 {
        return MstResult::default();
    }

    let g: UnGraph = graph.to_ungraph();

    let mut in_mst = vec![false; n];
    let mut key = vec![i64::MAX; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut mst_edges = Vec::new();

    let mut heap = BinaryHeap::new();
    key[0] = 0;
    heap.push(Reverse((0i64, 0usize)));

    while let Some(Reverse((_, u))) = heap.pop() {
        if in_mst[u] {
            continue;
        }
        in_mst[u] = true;

        if let Some(p) = parent[u] {
            mst_edges.push(Edge {
                source: p,
                destination: u,
                weight: key[u],
            });
        }

        for edge in g.edges(NodeIndex::new(u)) {
            let v = if edge.source().index() == u {
                edge.target().index()
            } else {
                edge.source().index()
            };
            let weight = *edge.weight();
            if !in_mst[v] && weight < key[v] {
                key[v] = weight;
                parent[v] = Some(u);
                heap.push(Reverse((weight, v)));
            }
        }
    }

    let total_cost = mst_edges.iter().map(|e| e.weight).sum();
    MstResult {
        edges: mst_edges,
        total_cost,
    }
}
