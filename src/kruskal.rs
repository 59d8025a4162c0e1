use crate::types::{Edge, Graph, MstResult};
use radsort::sort_by_key;

/// Disjoint set with path compression and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`; false if they were already joined.
    fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }
        true
    }
}

/// Finds a minimum spanning tree with Kruskal's algorithm.
///
/// Edges are taken in order of increasing weight; one that would close a
/// cycle is rejected by the union-find. Stops once `vertices - 1` edges
/// are selected. On a disconnected graph the result is a minimum spanning
/// forest.
pub fn kruskal_mst(graph: &Graph) -> MstResult {
    if graph.vertices == 0 {
        return MstResult::default();
    }

    let mut edges = graph.edges.clone();
    sort_by_key(&mut edges, |e| e.weight);

    let mut uf = UnionFind::new(graph.vertices);
    let mut mst_edges = Vec::new();

    for edge in edges {
        if uf.union(edge.source, edge.destination) {
            mst_edges.push(edge);
            if mst_edges.len() == graph.vertices - 1 {
                break;
            }
        }
    }

    let total_cost = mst_edges.iter().map(|e| e.weight).sum();
    MstResult {
        edges: mst_edges,
        total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prim::prim_mst;
    use crate::testing::random_graphs::{complete_graph, sparse_graph};

    #[test]
    fn test_empty_graph() {
        let result = kruskal_mst(&Graph::new("empty", 0));
        assert!(result.edges.is_empty());
        assert_eq!(result.total_cost, 0);
    }

    #[test]
    fn test_triangle() {
        let mut g = Graph::new("triangle", 3);
        g.add_edge(0, 1, 5);
        g.add_edge(1, 2, 3);
        g.add_edge(0, 2, 7);

        let result = kruskal_mst(&g);
        assert_eq!(result.edges.len(), 2);
        assert_eq!(result.total_cost, 8);
        // Cheapest edge first.
        assert_eq!(result.edges[0].weight, 3);
    }

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert_ne!(uf.find(0), uf.find(2));
        assert!(uf.union(1, 3));
        assert_eq!(uf.find(0), uf.find(2));
    }

    #[test]
    fn test_agrees_with_prim() {
        // MST edge sets may differ when weights tie, but the total cost
        // must match on connected graphs.
        for n in [2, 5, 9, 14] {
            for graph in [complete_graph(n), sparse_graph(n)] {
                assert!(graph.is_connected());
                let kruskal = kruskal_mst(&graph);
                let prim = prim_mst(&graph);
                assert_eq!(kruskal.edges.len(), n - 1);
                assert_eq!(prim.edges.len(), n - 1);
                assert_eq!(kruskal.total_cost, prim.total_cost, "graph {}", graph.name);
            }
        }
    }
}
