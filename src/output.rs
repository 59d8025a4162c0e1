use crate::error::VizError;
use crate::types::Graph;
use crate::visualize::canonical_pair;
use hashbrown::HashSet;
use log::info;
use std::path::Path;

/// Returns a graph in DOT format.
///
/// Edge weights become edge labels. With a highlight set, the selected
/// edges are drawn bold and green while the rest are muted gray.
///
/// Intended to be used with `neato`.
pub fn to_dot_str(graph: &Graph, highlight: Option<&HashSet<(usize, usize)>>) -> String {
    let mut output = String::from("graph {\n");
    output.push_str("  overlap=false;\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=lightcoral];\n");

    for vertex in 0..graph.vertices {
        output.push_str(&format!("  {} [label=\"{}\"];\n", vertex, vertex));
    }

    for edge in &graph.edges {
        let selected = highlight
            .map(|set| set.contains(&canonical_pair(edge.source, edge.destination)))
            .unwrap_or(false);
        let (color, penwidth) = if selected {
            ("green", "3.0")
        } else if highlight.is_some() {
            ("gray80", "1.0")
        } else {
            ("gray30", "1.5")
        };
        output.push_str(&format!(
            "  {} -- {} [label=\"{}\", color={}, penwidth={}];\n",
            edge.source, edge.destination, edge.weight, color, penwidth
        ));
    }
    output.push_str("}\n");
    output
}

/// Writes the graph to a file in DOT format.
pub fn to_dot_file(
    graph: &Graph,
    highlight: Option<&HashSet<(usize, usize)>>,
    path: &Path,
) -> Result<(), VizError> {
    let dot_str = to_dot_str(graph, highlight);
    std::fs::write(path, dot_str).map_err(|e| VizError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!("saved DOT graph to: {}", path.display());
    Ok(())
}
