//! Renders the first graphs of an input collection into a directory.
//!
//! Usage: `cargo run --example batch -- data/input.json report/ [max]`

use mst_viz::batch::{BatchConfig, run_batch};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: {} <input.json> <output_dir> [max_graphs]", args[0]);
        return ExitCode::FAILURE;
    }

    let mut config = BatchConfig::new(PathBuf::from(&args[1]), PathBuf::from(&args[2]));
    if let Some(max) = args.get(3) {
        config.max_graphs = max.parse().expect("max_graphs should be a number");
    }

    match run_batch(&config) {
        Ok(report) => {
            println!(
                "Generated {} graph visualizations in {}",
                report.generated, config.output_directory.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error generating visualizations: {}", e);
            ExitCode::FAILURE
        }
    }
}
