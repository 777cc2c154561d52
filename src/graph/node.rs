//! Node records returned by graph queries

use super::types::NodeId;
use serde::{Deserialize, Serialize};

/// Snapshot of a node: its identity and optional label
///
/// Records are owned copies. Mutating one never reaches back into the
/// graph that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<N> {
    /// Normalized node identifier
    pub id: NodeId,

    /// Label, or `None` when the node carries no label
    pub label: Option<N>,
}

impl<N> Node<N> {
    pub fn new(id: impl Into<NodeId>, label: Option<N>) -> Self {
        Node {
            id: id.into(),
            label,
        }
    }

    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }
}
