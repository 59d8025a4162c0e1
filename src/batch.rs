use crate::error::VizError;
use crate::input::load_graphs;
use crate::visualize::{RenderOptions, visualize_graph};
use log::{error, info};
use std::path::PathBuf;

pub const DEFAULT_MAX_GRAPHS: usize = 3;

/// Explicit configuration for a batch run; there are no baked-in default
/// paths.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    pub input_path: PathBuf,
    pub output_directory: PathBuf,
    pub max_graphs: usize,
}

impl BatchConfig {
    pub fn new(input_path: PathBuf, output_directory: PathBuf) -> Self {
        BatchConfig {
            input_path,
            output_directory,
            max_graphs: DEFAULT_MAX_GRAPHS,
        }
    }
}

/// How many visualizations a batch run produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchReport {
    pub generated: usize,
}

/// A batch failure, structured so callers can decide continuation policy
/// programmatically instead of parsing a printed message.
#[derive(Debug)]
pub enum BatchError {
    /// The input collection could not be loaded at all.
    Load(VizError),
    /// Rendering one graph failed; the remainder of the batch was not
    /// attempted.
    Render {
        index: usize,
        name: String,
        source: VizError,
    },
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::Load(source) => write!(f, "failed to load input graphs: {}", source),
            BatchError::Render { index, name, source } => write!(
                f,
                "failed to render graph #{} ('{}'): {}",
                index + 1,
                name,
                source
            ),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Load(source) => Some(source),
            BatchError::Render { source, .. } => Some(source),
        }
    }
}

/// Renders the first `max_graphs` graphs of the input collection in
/// single-graph mode, writing `graph_{i+1}_visualization.svg` into the
/// output directory.
///
/// An empty collection is not an error; the report just says zero. The
/// first graph that fails to render aborts the remaining batch.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport, BatchError> {
    let graphs = load_graphs(&config.input_path).map_err(BatchError::Load)?;
    info!("loaded {} graphs from {}", graphs.len(), config.input_path.display());

    let mut generated = 0;
    for (index, graph) in graphs.iter().take(config.max_graphs).enumerate() {
        let save_path = config
            .output_directory
            .join(format!("graph_{}_visualization.svg", index + 1));
        let options = RenderOptions {
            save_path: Some(save_path),
            ..RenderOptions::default()
        };
        visualize_graph(graph, &options).map_err(|e| {
            error!("aborting batch at graph #{}: {}", index + 1, e);
            BatchError::Render {
                index,
                name: graph.name.clone(),
                source: e,
            }
        })?;
        generated += 1;
    }

    info!("generated {} graph visualizations", generated);
    Ok(BatchReport { generated })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mst_viz_batch_{}_{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_empty_collection() {
        let dir = scratch_dir("empty");
        let input = dir.join("input.json");
        fs::write(&input, r#"{"graphs": []}"#).unwrap();

        let report = run_batch(&BatchConfig::new(input, dir.clone())).unwrap();
        assert_eq!(report, BatchReport { generated: 0 });
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_renders_up_to_max_graphs() {
        let dir = scratch_dir("limit");
        let input = dir.join("input.json");
        let graph = r#"{"name": "g", "vertices": 3, "edges": [
            {"source": 0, "destination": 1, "weight": 2},
            {"source": 1, "destination": 2, "weight": 4}
        ]}"#;
        fs::write(
            &input,
            format!(r#"{{"graphs": [{0}, {0}, {0}, {0}, {0}]}}"#, graph),
        )
        .unwrap();

        let mut config = BatchConfig::new(input, dir.clone());
        config.max_graphs = 2;
        let report = run_batch(&config).unwrap();
        assert_eq!(report.generated, 2);
        assert!(dir.join("graph_1_visualization.svg").exists());
        assert!(dir.join("graph_2_visualization.svg").exists());
        assert!(!dir.join("graph_3_visualization.svg").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_input_is_load_error() {
        let dir = scratch_dir("noinput");
        let config = BatchConfig::new(dir.join("nope.json"), dir.clone());
        assert!(matches!(run_batch(&config), Err(BatchError::Load(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_graph_aborts_batch() {
        let dir = scratch_dir("badedge");
        let input = dir.join("input.json");
        fs::write(
            &input,
            r#"{"graphs": [
                {"name": "bad", "vertices": 2, "edges": [
                    {"source": 0, "destination": 5, "weight": 1}
                ]},
                {"name": "fine", "vertices": 2, "edges": []}
            ]}"#,
        )
        .unwrap();

        let err = run_batch(&BatchConfig::new(input, dir.clone())).unwrap_err();
        match err {
            BatchError::Render { index, name, source } => {
                assert_eq!(index, 0);
                assert_eq!(name, "bad");
                assert!(matches!(source, VizError::InvalidEdge { .. }));
            }
            other => panic!("expected render error, got {:?}", other),
        }
        // Reference behavior: nothing after the failing graph is written.
        assert!(!dir.join("graph_2_visualization.svg").exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
