use crate::error::VizError;
use crate::types::Graph;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize)]
struct GraphFile {
    graphs: Vec<Graph>,
}

/// Reads a collection of graphs from a JSON file.
///
/// Expected format:
/// ```text
/// {
///   "graphs": [
///     {
///       "name": "small_graph_1",
///       "vertices": 4,
///       "edges": [
///         {"source": 0, "destination": 1, "weight": 10},
///         {"source": 1, "destination": 2, "weight": 6}
///       ]
///     }
///   ]
/// }
/// ```
///
/// The `name` field may be omitted; it defaults to an empty string.
pub fn load_graphs(path: &Path) -> Result<Vec<Graph>, VizError> {
    let data = fs::read_to_string(path).map_err(|e| VizError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let file: GraphFile = serde_json::from_str(&data).map_err(|e| VizError::Parse {
        path: Some(path.to_path_buf()),
        source: e,
    })?;
    Ok(file.graphs)
}

/// This is equivalent to [`load_graphs`], but takes a string as input.
pub fn graphs_from_str(input: &str) -> Result<Vec<Graph>, VizError> {
    let file: GraphFile =
        serde_json::from_str(input).map_err(|e| VizError::Parse { path: None, source: e })?;
    Ok(file.graphs)
}

/// Writes a graph collection back out in the same JSON format.
pub fn save_graphs(path: &Path, graphs: &[Graph]) -> Result<(), VizError> {
    let file = GraphFile {
        graphs: graphs.to_vec(),
    };
    let data = serde_json::to_string_pretty(&file).map_err(|e| VizError::Parse {
        path: Some(path.to_path_buf()),
        source: e,
    })?;
    fs::write(path, data).map_err(|e| VizError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
