//! Labeled directed graph
//!
//! This module implements the graph storage engine:
//! - Node table with optional labels and string-normalized ids
//! - Edge table keyed by ordered `(tail, head)` pairs, self-loops included
//! - Adjacency indices (successors, predecessors, in-edges, out-edges)
//!   maintained in the same mutation path as the edge table
//! - Default-label generators and a node removal observer
//! - Copy and induced-subgraph transformations

pub mod config;
pub mod defaults;
pub mod edge;
pub mod event;
pub mod node;
pub mod store;
pub mod transform;
pub mod types;
pub mod value;

// Re-export main types
pub use config::{GraphConfig, MAX_PREALLOCATED_SLOTS};
pub use defaults::{DefaultEdgeLabel, DefaultLabel, DefaultNodeLabel, LabelArg};
pub use edge::Edge;
pub use event::RemovalHook;
pub use node::Node;
pub use store::{GraphError, GraphResult, GraphStatistics, LabeledGraph};
pub use types::{EdgeKey, NodeId};
pub use value::LabelValue;
