//! I use it with `cargo run --example render > graph.svg`

use mst_viz::input::graphs_from_str;
use mst_viz::visualize::{RenderOptions, visualize_graph};

fn main() {
    env_logger::init();

    let input = r#"{
        "graphs": [
            {
                "name": "demo",
                "vertices": 5,
                "edges": [
                    {"source": 0, "destination": 1, "weight": 10},
                    {"source": 0, "destination": 2, "weight": 6},
                    {"source": 1, "destination": 3, "weight": 15},
                    {"source": 2, "destination": 3, "weight": 4},
                    {"source": 3, "destination": 4, "weight": 8},
                    {"source": 1, "destination": 4, "weight": 9}
                ]
            }
        ]
    }"#;

    let graphs = graphs_from_str(input).expect("sample input should parse");
    visualize_graph(&graphs[0], &RenderOptions::default()).expect("rendering should succeed");
}
