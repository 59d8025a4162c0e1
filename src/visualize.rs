use crate::error::VizError;
use crate::layout::circular_layout;
use crate::types::{Edge, Graph};
use hashbrown::HashSet;
use log::info;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_DPI: u32 = 150;

/// Radius of the circular layout in abstract units; the renderer scales it
/// to pixels per panel.
const LAYOUT_RADIUS: f64 = 1.0;

// Figure sizes in inches, multiplied by dpi to get pixels.
const SINGLE_WIDTH_IN: f64 = 10.0;
const SINGLE_HEIGHT_IN: f64 = 8.0;
const PANEL_WIDTH_IN: f64 = 8.0;
const PANEL_HEIGHT_IN: f64 = 8.0;

const EDGE_COLOR: &str = "#0000ff";
const MUTED_COLOR: &str = "#d3d3d3";
const PRIM_COLOR: &str = "#008000";
const KRUSKAL_COLOR: &str = "#0000ff";
const VERTEX_FILL: &str = "#ff0000";
const VERTEX_BORDER: &str = "#8b0000";

/// Where and how to emit the image.
///
/// With a `save_path` the SVG is written there and a confirmation is
/// logged; without one it goes to stdout, so demos can be piped straight
/// into a file.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub save_path: Option<PathBuf>,
    pub dpi: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            save_path: None,
            dpi: DEFAULT_DPI,
        }
    }
}

/// Sorts an endpoint pair so `(a, b)` and `(b, a)` compare equal.
pub fn canonical_pair(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Builds the set of canonicalized endpoint pairs for an MST edge list.
///
/// The MST edge list and the graph's edge list carry no guarantee of
/// storing endpoints in the same order, so membership tests must go
/// through [`canonical_pair`].
pub fn highlight_set(edges: &[Edge]) -> HashSet<(usize, usize)> {
    edges
        .iter()
        .map(|e| canonical_pair(e.source, e.destination))
        .collect()
}

/// Renders a single graph and emits it per `options`.
///
/// Vertices sit on a circle, every edge carries its weight at the segment
/// midpoint, and the title names the graph with its vertex and edge
/// counts. A graph with no edges renders vertices only.
pub fn visualize_graph(graph: &Graph, options: &RenderOptions) -> Result<(), VizError> {
    let svg = graph_svg(graph, options.dpi)?;
    emit(&svg, options, "graph visualization")
}

/// Renders two MST solutions side by side over the same graph.
///
/// The layout is computed once and both panels draw from it, so vertex
/// positions line up between panels by construction. Within a panel an
/// edge whose canonicalized endpoints are in that panel's highlight set is
/// drawn bold in the panel color; every other edge stays visible but
/// muted.
pub fn visualize_mst_comparison(
    graph: &Graph,
    prim_edges: &[Edge],
    kruskal_edges: &[Edge],
    options: &RenderOptions,
) -> Result<(), VizError> {
    let svg = mst_comparison_svg(graph, prim_edges, kruskal_edges, options.dpi)?;
    emit(&svg, options, "MST comparison")
}

/// Single-graph SVG document, returned as a string.
pub fn graph_svg(graph: &Graph, dpi: u32) -> Result<String, VizError> {
    graph.validate()?;

    let px = dpi as f64 / 72.0;
    let width = SINGLE_WIDTH_IN * dpi as f64;
    let height = SINGLE_HEIGHT_IN * dpi as f64;

    let positions = circular_layout(graph.vertices, LAYOUT_RADIUS);

    let mut svg = String::new();
    open_document(&mut svg, width, height);

    writeln!(
        svg,
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"Helvetica\" font-size=\"{:.2}\" font-weight=\"bold\">Graph Visualization: {}</text>",
        width / 2.0,
        20.0 * px,
        14.0 * px,
        escape_xml(&graph.name)
    )
    .unwrap();
    writeln!(
        svg,
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"Helvetica\" font-size=\"{:.2}\" font-weight=\"bold\">Vertices: {}, Edges: {}</text>",
        width / 2.0,
        38.0 * px,
        14.0 * px,
        graph.vertices,
        graph.edge_count()
    )
    .unwrap();

    let panel = Panel::fitted(0.0, 45.0 * px, width, height - 45.0 * px);

    for edge in &graph.edges {
        let (x1, y1) = panel.project(positions[edge.source]);
        let (x2, y2) = panel.project(positions[edge.destination]);
        draw_line(&mut svg, x1, y1, x2, y2, EDGE_COLOR, 1.5 * px, 0.4);
        draw_weight_label(&mut svg, (x1 + x2) / 2.0, (y1 + y2) / 2.0, edge.weight, 8.0 * px);
    }

    draw_vertices(&mut svg, &panel, &positions, 7.5 * px, 10.0 * px);

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Two-panel comparison SVG document, returned as a string.
pub fn mst_comparison_svg(
    graph: &Graph,
    prim_edges: &[Edge],
    kruskal_edges: &[Edge],
    dpi: u32,
) -> Result<String, VizError> {
    graph.validate()?;

    let px = dpi as f64 / 72.0;
    let panel_w = PANEL_WIDTH_IN * dpi as f64;
    let height = PANEL_HEIGHT_IN * dpi as f64;
    let width = 2.0 * panel_w;

    // Computed once; both panels draw from the same mapping.
    let positions = circular_layout(graph.vertices, LAYOUT_RADIUS);

    let prim_set = highlight_set(prim_edges);
    let kruskal_set = highlight_set(kruskal_edges);

    let panels = [
        ("Prim's Algorithm MST", &prim_set, PRIM_COLOR, 0.0),
        ("Kruskal's Algorithm MST", &kruskal_set, KRUSKAL_COLOR, panel_w),
    ];

    let mut svg = String::new();
    open_document(&mut svg, width, height);

    for (subtitle, highlighted, color, origin_x) in panels {
        writeln!(
            svg,
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"Helvetica\" font-size=\"{:.2}\" font-weight=\"bold\">{}</text>",
            origin_x + panel_w / 2.0,
            24.0 * px,
            12.0 * px,
            subtitle
        )
        .unwrap();

        let panel = Panel::fitted(origin_x, 32.0 * px, panel_w, height - 32.0 * px);

        for edge in &graph.edges {
            let (x1, y1) = panel.project(positions[edge.source]);
            let (x2, y2) = panel.project(positions[edge.destination]);
            if highlighted.contains(&canonical_pair(edge.source, edge.destination)) {
                draw_line(&mut svg, x1, y1, x2, y2, color, 3.0 * px, 0.8);
            } else {
                draw_line(&mut svg, x1, y1, x2, y2, MUTED_COLOR, 1.0 * px, 0.3);
            }
        }

        draw_vertices(&mut svg, &panel, &positions, 6.0 * px, 9.0 * px);
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// A square drawing region; maps layout coordinates to pixels.
struct Panel {
    cx: f64,
    cy: f64,
    scale: f64,
}

impl Panel {
    fn fitted(origin_x: f64, origin_y: f64, w: f64, h: f64) -> Self {
        Panel {
            cx: origin_x + w / 2.0,
            cy: origin_y + h / 2.0,
            scale: 0.40 * w.min(h),
        }
    }

    fn project(&self, p: (f64, f64)) -> (f64, f64) {
        (self.cx + p.0 * self.scale, self.cy + p.1 * self.scale)
    }
}

fn open_document(svg: &mut String, width: f64, height: f64) {
    writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" viewBox=\"0 0 {:.0} {:.0}\">",
        width, height, width, height
    )
    .unwrap();
    writeln!(svg, "  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>").unwrap();
}

fn draw_line(svg: &mut String, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64, opacity: f64) {
    writeln!(
        svg,
        "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{:.2}\" stroke-opacity=\"{}\"/>",
        x1, y1, x2, y2, color, width, opacity
    )
    .unwrap();
}

/// Weight text on a white rounded box so it stays legible where edges
/// cross.
fn draw_weight_label(svg: &mut String, x: f64, y: f64, weight: i64, font: f64) {
    let text = weight.to_string();
    let w = 0.62 * font * text.len() as f64 + 0.8 * font;
    let h = 1.6 * font;
    writeln!(
        svg,
        "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{:.2}\" fill=\"#ffffff\" fill-opacity=\"0.7\" stroke=\"#bbbbbb\" stroke-width=\"0.5\"/>",
        x - w / 2.0,
        y - h / 2.0,
        w,
        h,
        0.4 * font
    )
    .unwrap();
    writeln!(
        svg,
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"Helvetica\" font-size=\"{:.2}\">{}</text>",
        x, y, font, text
    )
    .unwrap();
}

/// Vertices go on top of edges: filled circle, dark border, index label
/// centered in white.
fn draw_vertices(svg: &mut String, panel: &Panel, positions: &[(f64, f64)], radius: f64, font: f64) {
    for (vertex, &p) in positions.iter().enumerate() {
        let (x, y) = panel.project(p);
        writeln!(
            svg,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>",
            x, y, radius, VERTEX_FILL, VERTEX_BORDER
        )
        .unwrap();
        writeln!(
            svg,
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"Helvetica\" font-size=\"{:.2}\" font-weight=\"bold\" fill=\"#ffffff\">{}</text>",
            x, y, font, vertex
        )
        .unwrap();
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn emit(svg: &str, options: &RenderOptions, what: &str) -> Result<(), VizError> {
    match &options.save_path {
        Some(path) => {
            fs::write(path, svg).map_err(|e| VizError::Io {
                path: path.clone(),
                source: e,
            })?;
            info!("saved {} to: {}", what, path.display());
        }
        None => print!("{}", svg),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut g = Graph::new("triangle", 3);
        g.add_edge(0, 1, 5);
        g.add_edge(1, 2, 3);
        g.add_edge(0, 2, 7);
        g
    }

    fn count_occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_canonical_pair() {
        assert_eq!(canonical_pair(2, 5), (2, 5));
        assert_eq!(canonical_pair(5, 2), (2, 5));
        assert_eq!(canonical_pair(3, 3), (3, 3));
    }

    #[test]
    fn test_highlight_set_order_independent() {
        let stored = [Edge { source: 1, destination: 0, weight: 5 }];
        let set = highlight_set(&stored);
        assert!(set.contains(&canonical_pair(0, 1)));
        assert!(set.contains(&canonical_pair(1, 0)));
        assert!(!set.contains(&canonical_pair(0, 2)));
    }

    #[test]
    fn test_graph_svg_contents() {
        let svg = graph_svg(&triangle(), DEFAULT_DPI).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Graph Visualization: triangle"));
        assert!(svg.contains("Vertices: 3, Edges: 3"));
        assert_eq!(count_occurrences(&svg, "<circle"), 3);
        assert_eq!(count_occurrences(&svg, "<line"), 3);
        // One weight box per edge.
        assert_eq!(count_occurrences(&svg, "fill-opacity=\"0.7\""), 3);
    }

    #[test]
    fn test_graph_svg_no_edges() {
        let g = Graph::new("lonely", 4);
        let svg = graph_svg(&g, DEFAULT_DPI).unwrap();
        assert_eq!(count_occurrences(&svg, "<circle"), 4);
        assert_eq!(count_occurrences(&svg, "<line"), 0);
    }

    #[test]
    fn test_graph_svg_rejects_bad_edge() {
        let mut g = triangle();
        g.add_edge(1, 9, 2);
        assert!(matches!(
            graph_svg(&g, DEFAULT_DPI),
            Err(VizError::InvalidEdge { .. })
        ));
    }

    #[test]
    fn test_comparison_highlights_per_panel() {
        // Prim picks (0,1), Kruskal picks (0,2); endpoints stored reversed
        // to exercise canonicalization.
        let g = triangle();
        let prim = [Edge { source: 1, destination: 0, weight: 5 }];
        let kruskal = [Edge { source: 2, destination: 0, weight: 7 }];
        let svg = mst_comparison_svg(&g, &prim, &kruskal, DEFAULT_DPI).unwrap();

        assert!(svg.contains("Prim's Algorithm MST"));
        assert!(svg.contains("Kruskal's Algorithm MST"));
        assert_eq!(count_occurrences(&svg, PRIM_COLOR), 1);
        // Kruskal's color: one bold edge in the right panel.
        assert_eq!(count_occurrences(&svg, &format!("stroke=\"{}\"", KRUSKAL_COLOR)), 1);
        // 2 muted edges per panel, 6 edges drawn in total.
        assert_eq!(count_occurrences(&svg, MUTED_COLOR), 4);
        assert_eq!(count_occurrences(&svg, "<line"), 6);
    }

    #[test]
    fn test_highlight_marks_exactly_the_selected_edges() {
        // Highlight {(0,1), (1,2)}: two bold edges, the third stays muted.
        let g = triangle();
        let mst = [
            Edge { source: 0, destination: 1, weight: 5 },
            Edge { source: 1, destination: 2, weight: 3 },
        ];
        let svg = mst_comparison_svg(&g, &mst, &mst, DEFAULT_DPI).unwrap();
        assert_eq!(count_occurrences(&svg, PRIM_COLOR), 2);
        assert_eq!(count_occurrences(&svg, &format!("stroke=\"{}\"", KRUSKAL_COLOR)), 2);
        assert_eq!(count_occurrences(&svg, MUTED_COLOR), 2);
    }

    #[test]
    fn test_comparison_panels_share_positions() {
        let g = triangle();
        let svg = mst_comparison_svg(&g, &[], &[], DEFAULT_DPI).unwrap();

        let centers: Vec<(f64, f64)> = svg
            .lines()
            .filter(|l| l.trim_start().starts_with("<circle"))
            .map(|l| {
                let cx = extract_attr(l, "cx");
                let cy = extract_attr(l, "cy");
                (cx, cy)
            })
            .collect();
        assert_eq!(centers.len(), 6);

        // Right panel is the left panel shifted by exactly one panel width.
        let shift = PANEL_WIDTH_IN * DEFAULT_DPI as f64;
        for i in 0..3 {
            let (lx, ly) = centers[i];
            let (rx, ry) = centers[i + 3];
            // Attribute values carry two decimals, so allow for display
            // rounding.
            assert!((rx - lx - shift).abs() < 0.011);
            assert!((ry - ly).abs() < 0.011);
        }
    }

    fn extract_attr(line: &str, name: &str) -> f64 {
        let key = format!("{}=\"", name);
        let start = line.find(&key).unwrap() + key.len();
        let end = start + line[start..].find('"').unwrap();
        line[start..end].parse().unwrap()
    }
}
