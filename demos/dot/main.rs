//! I use it with `cargo run --example dot | neato -Tsvg > graph.svg`

use mst_viz::kruskal::kruskal_mst;
use mst_viz::output::to_dot_str;
use mst_viz::testing::random_graphs::sparse_graph;
use mst_viz::visualize::highlight_set;

fn main() {
    let graph = sparse_graph(10);
    let mst = kruskal_mst(&graph);
    let highlighted = highlight_set(&mst.edges);
    print!("{}", to_dot_str(&graph, Some(&highlighted)));
}
