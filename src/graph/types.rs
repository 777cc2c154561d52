//! Core identity types for the labeled graph

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a node, normalized to its string form
///
/// Every conversion into a `NodeId` is total: numbers are rendered with
/// `Display`, so `1u32`, `1i64` and `1.0f64` all identify node `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl From<&String> for NodeId {
    fn from(s: &String) -> Self {
        NodeId(s.clone())
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<char> for NodeId {
    fn from(c: char) -> Self {
        NodeId(c.to_string())
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

macro_rules! node_id_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for NodeId {
                fn from(value: $ty) -> Self {
                    NodeId(value.to_string())
                }
            }
        )*
    };
}

node_id_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Identity of a directed edge: the ordered `(tail, head)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeKey {
    /// Node the edge leaves
    pub tail: NodeId,

    /// Node the edge enters
    pub head: NodeId,
}

impl EdgeKey {
    pub fn new(tail: impl Into<NodeId>, head: impl Into<NodeId>) -> Self {
        EdgeKey {
            tail: tail.into(),
            head: head.into(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.tail == self.head
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.tail, self.head)
    }
}
