use std::path::PathBuf;

/// Errors surfaced by the loader and the renderers.
#[derive(Debug)]
pub enum VizError {
    /// An edge references a vertex outside `[0, vertices)`.
    InvalidEdge {
        graph: String,
        source: usize,
        destination: usize,
        vertices: usize,
    },
    /// Reading or writing a file failed.
    Io { path: PathBuf, source: std::io::Error },
    /// The input document is not valid graph JSON.
    Parse {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for VizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VizError::InvalidEdge {
                graph,
                source,
                destination,
                vertices,
            } => write!(
                f,
                "graph '{}': edge ({}-{}) references a vertex outside 0..{}",
                graph, source, destination, vertices
            ),
            VizError::Io { path, source } => {
                write!(f, "io error on {}: {}", path.display(), source)
            }
            VizError::Parse { path: Some(path), source } => {
                write!(f, "invalid graph JSON in {}: {}", path.display(), source)
            }
            VizError::Parse { path: None, source } => {
                write!(f, "invalid graph JSON: {}", source)
            }
        }
    }
}

impl std::error::Error for VizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VizError::InvalidEdge { .. } => None,
            VizError::Io { source, .. } => Some(source),
            VizError::Parse { source, .. } => Some(source),
        }
    }
}
