//! Adjacency-vector graph containers, labelings, and single-source shortest paths.
//!
//! Vertices and edges are dense integer handles into contiguous storage; a
//! [`Labeling`] attaches arbitrary per-vertex or per-edge data without extending the
//! graph type, and [`alg::dijkstra`] / [`alg::bellman_ford`] are generic over the
//! [`Graph`] query trait.
//!
//! ```
//! use selkie::{DiGraph, Graph, alg, label_edges};
//!
//! let mut g = DiGraph::with_order(3);
//! let v: Vec<_> = g.vertices().collect();
//! let ab = g.add_edge(v[0], v[1]);
//! let bc = g.add_edge(v[1], v[2]);
//!
//! let mut w = label_edges(&g, 0u64);
//! w[ab] = 2;
//! w[bc] = 3;
//!
//! let paths = alg::dijkstra_labeled(&g, v[0], &w)?;
//! assert_eq!(paths.distance(v[2]), Some(5));
//! assert_eq!(paths.path_to(v[2]), Some(vec![v[0], v[1], v[2]]));
//! # Ok::<(), selkie::Error>(())
//! ```

pub mod error;
pub mod graph;
pub mod labeling;
pub mod queue;

pub use error::{Error, Result};
pub use graph::alg;
pub use graph::{DiGraph, Edge, Graph, Handle, UnGraph, Vertex};
pub use labeling::{EdgeLabeling, Labeling, VertexLabeling, label_edges, label_vertices};
pub use queue::WeightQueue;
