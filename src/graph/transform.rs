//! Structural transformations producing new graphs
//!
//! Results never share mutable state with their source. Default labels and
//! the removal hook are immutable closures and are carried over as-is.

use super::store::LabeledGraph;
use super::types::NodeId;
use rustc_hash::FxHashMap;
use tracing::debug;

impl<N: Clone, E: Clone, G: Clone> LabeledGraph<N, E, G> {
    /// Independent copy of this graph
    pub fn copy(&self) -> Self {
        debug!(
            nodes = self.node_count(),
            edges = self.edge_count(),
            "copying graph"
        );
        self.clone()
    }

    /// Induced subgraph over the nodes for which `predicate(id, label)` holds
    ///
    /// Surviving nodes keep their labels, every edge between two survivors is
    /// kept with its label, and the graph label is copied. The source graph is
    /// left untouched.
    pub fn filter_nodes<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&NodeId, Option<&N>) -> bool,
    {
        let mut filtered = Self::with_config(self.config().clone());
        if let Some(label) = self.graph() {
            filtered.set_graph(label.clone());
        }
        filtered.default_node_label = self.default_node_label.clone();
        filtered.default_edge_label = self.default_edge_label.clone();
        filtered.removal_hook = self.removal_hook.clone();

        // source handle -> handle in `filtered`
        let mut kept: FxHashMap<usize, usize> = FxHashMap::default();
        for (id, &handle) in &self.node_index {
            let Some(slot) = self.slot(handle) else {
                continue;
            };
            if predicate(id, slot.label.as_ref()) {
                let new_handle = filtered.alloc_node(id.clone(), slot.label.clone());
                kept.insert(handle, new_handle);
            }
        }

        for (&(tail, head), &edge) in &self.edge_index {
            let (Some(&t), Some(&h)) = (kept.get(&tail), kept.get(&head)) else {
                continue;
            };
            let label = self.edge_slot(edge).and_then(|slot| slot.label.clone());
            filtered.alloc_edge(t, h, label);
        }

        debug!(
            nodes_before = self.node_count(),
            nodes_after = filtered.node_count(),
            edges_after = filtered.edge_count(),
            "filtered graph"
        );
        filtered
    }
}
