//! labelgraph
//!
//! A mutable, labeled, directed graph for in-memory models such as
//! dependency graphs and layout graphs.
//!
//! # Model
//!
//! - Node ids are normalized to strings: `1`, `1u8` and `"1"` name the same node
//! - Nodes, edges and the graph itself carry optional labels of any type
//! - At most one edge exists per ordered `(tail, head)` pair; self-loops are legal
//! - Adding an edge creates missing endpoints without a label
//! - Removing a node removes every edge incident on it
//!
//! Graph algorithms, serialization formats and undirected or multi-edge
//! variants are left to collaborators built on the read API.
//!
//! ## Example Usage
//!
//! ```rust
//! use labelgraph::{LabelArg, LabeledGraph, LabelValue, NodeId};
//!
//! let mut g: LabeledGraph = LabeledGraph::new();
//!
//! g.set_node_label("a", LabelValue::from("start"))
//!     .set_edge("a", "b")
//!     .set_edge_label(1, 2, LabelValue::from(0.5));
//!
//! assert_eq!(g.node_count(), 4);
//! assert_eq!(g.successors("a"), Some(vec![NodeId::from("b")]));
//! assert_eq!(g.get_edge("1", "2"), Some(&LabelValue::Float(0.5)));
//!
//! // Omitting the label keeps the existing one; an explicit `None` clears it
//! g.set_node("a");
//! assert_eq!(g.get_node("a"), Some(&LabelValue::from("start")));
//! g.set_node_with("a", LabelArg::none());
//! assert_eq!(g.get_node("a"), None);
//! assert!(g.has_node("a"));
//!
//! let without_b = g.filter_nodes(|id, _| id.as_str() != "b");
//! assert_eq!(without_b.edge_count(), 1);
//! ```

#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    DefaultEdgeLabel, DefaultLabel, DefaultNodeLabel, Edge, EdgeKey, GraphConfig, GraphError,
    GraphResult, GraphStatistics, LabelArg, LabelValue, LabeledGraph, Node, NodeId, RemovalHook,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
