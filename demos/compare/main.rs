//! I use it with `cargo run --example compare > comparison.svg`

use log::info;
use mst_viz::kruskal::kruskal_mst;
use mst_viz::prim::prim_mst;
use mst_viz::testing::random_graphs::dense_graph;
use mst_viz::visualize::{RenderOptions, visualize_mst_comparison};

fn main() {
    env_logger::init();

    let graph = dense_graph(8, 0.5);

    let prim = prim_mst(&graph);
    let kruskal = kruskal_mst(&graph);
    assert_eq!(prim.total_cost, kruskal.total_cost);

    for (name, mst) in [("Prim", &prim), ("Kruskal", &kruskal)] {
        let edges: Vec<String> = mst.edges.iter().map(|e| e.to_string()).collect();
        info!("{} MST, cost {}: {}", name, mst.total_cost, edges.join(" "));
    }

    visualize_mst_comparison(&graph, &prim.edges, &kruskal.edges, &RenderOptions::default())
        .expect("rendering should succeed");
}
