// #![warn(missing_docs)]

//! # mst_viz
//!
//! A Rust library for rendering weighted undirected graphs and comparing
//! minimum spanning tree solutions from Prim's and Kruskal's algorithms
//! side by side.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! Vertices are placed on a deterministic circular layout and images are
//! emitted as SVG, either to a file or to stdout.

pub mod batch;
pub mod error;
pub mod input;
pub mod kruskal;
pub mod layout;
pub mod output;
pub mod prim;
pub mod testing;
pub mod types;
pub mod visualize;

pub use error::VizError;
pub use types::Edge;
pub use types::Graph;
pub use types::MstResult;
pub use types::UnGraph;
