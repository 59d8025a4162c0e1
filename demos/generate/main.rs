//! Generates the test input collection.
//!
//! Usage: `cargo run --example generate -- data/input.json`

use mst_viz::input::save_graphs;
use mst_viz::testing::random_graphs::generate_suite;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("input.json"));

    let graphs = generate_suite();
    match save_graphs(&path, &graphs) {
        Ok(()) => {
            println!("Saved {} graphs to {}", graphs.len(), path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error generating test data: {}", e);
            ExitCode::FAILURE
        }
    }
}
