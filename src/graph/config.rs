//! Graph configuration

use super::store::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};

/// Upper bound on slots reserved up front by [`GraphConfig`]
pub const MAX_PREALLOCATED_SLOTS: usize = 1 << 24;

/// Storage configuration for a [`LabeledGraph`](super::LabeledGraph)
///
/// Capacities only size the initial arenas; graphs grow past them freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Node slots reserved at construction
    pub node_capacity: usize,
    /// Edge slots reserved at construction
    pub edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_capacity: 1024,
            edge_capacity: 4096,
        }
    }
}

impl GraphConfig {
    /// Parse and validate a JSON configuration document
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        let config: GraphConfig =
            serde_json::from_str(json).map_err(|e| GraphError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.node_capacity > MAX_PREALLOCATED_SLOTS {
            return Err(GraphError::InvalidConfig(format!(
                "node_capacity {} exceeds {}",
                self.node_capacity, MAX_PREALLOCATED_SLOTS
            )));
        }
        if self.edge_capacity > MAX_PREALLOCATED_SLOTS {
            return Err(GraphError::InvalidConfig(format!(
                "edge_capacity {} exceeds {}",
                self.edge_capacity, MAX_PREALLOCATED_SLOTS
            )));
        }
        Ok(())
    }

    pub(crate) fn node_slots(&self) -> usize {
        self.node_capacity.min(MAX_PREALLOCATED_SLOTS)
    }

    pub(crate) fn edge_slots(&self) -> usize {
        self.edge_capacity.min(MAX_PREALLOCATED_SLOTS)
    }
}
