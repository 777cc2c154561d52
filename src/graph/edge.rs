//! Edge records returned by graph queries
//!
//! Edges are directed: `tail -> head`. At most one edge exists per ordered
//! pair, and `tail == head` is a legal self-loop.

use super::types::{EdgeKey, NodeId};
use serde::{Deserialize, Serialize};

/// Snapshot of a directed edge
///
/// Like [`Node`](super::Node), an `Edge` is an owned copy of stored state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<E> {
    /// Node the edge goes FROM
    pub tail: NodeId,

    /// Node the edge goes TO
    pub head: NodeId,

    /// Label, or `None` when the edge carries no label
    pub label: Option<E>,
}

impl<E> Edge<E> {
    pub fn new(tail: impl Into<NodeId>, head: impl Into<NodeId>, label: Option<E>) -> Self {
        Edge {
            tail: tail.into(),
            head: head.into(),
            label,
        }
    }

    /// Identity of this edge
    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            tail: self.tail.clone(),
            head: self.head.clone(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.tail == self.head
    }

    /// Check if this edge connects two nodes, in either direction
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.tail == a && &self.head == b) || (&self.tail == b && &self.head == a)
    }

    pub fn starts_from(&self, node: &NodeId) -> bool {
        &self.tail == node
    }

    pub fn ends_at(&self, node: &NodeId) -> bool {
        &self.head == node
    }
}
