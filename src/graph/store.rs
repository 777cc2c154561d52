//! In-memory labeled graph storage
//!
//! Nodes and edges live in arenas addressed by integer handles:
//! - nodes: handle -> NodeSlot (id, label, adjacency)
//! - edges: handle -> EdgeSlot (tail handle, head handle, label)
//! - node_index: NodeId -> node handle, in insertion order
//! - edge_index: (tail handle, head handle) -> edge handle, in insertion order
//!
//! Each node slot keeps its out-edges keyed by head and its in-edges keyed by
//! tail. The keys of those maps are the successors and predecessors, their
//! values the out-edges and in-edges, so all four adjacency views are updated
//! by the same insert or remove that touches the edge table.

use super::config::GraphConfig;
use super::defaults::{DefaultEdgeLabel, DefaultLabel, DefaultNodeLabel, LabelArg};
use super::edge::Edge;
use super::event::RemovalHook;
use super::node::Node;
use super::types::{EdgeKey, NodeId};
use super::value::LabelValue;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Errors reported by the checked accessors and configuration loading
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeKey),

    #[error("Invalid graph configuration: {0}")]
    InvalidConfig(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Clone)]
pub(crate) struct NodeSlot<N> {
    pub(crate) id: NodeId,
    pub(crate) label: Option<N>,
    /// head handle -> edge handle
    outgoing: FxIndexMap<usize, usize>,
    /// tail handle -> edge handle
    incoming: FxIndexMap<usize, usize>,
}

#[derive(Debug, Clone)]
pub(crate) struct EdgeSlot<E> {
    pub(crate) tail: usize,
    pub(crate) head: usize,
    pub(crate) label: Option<E>,
}

/// Shape summary of a graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub self_loop_count: usize,
    /// Nodes with no incident edge at all
    pub isolated_node_count: usize,
    pub max_in_degree: usize,
    pub max_out_degree: usize,
}

/// Mutable, labeled, directed graph
///
/// `N`, `E` and `G` are the node, edge and graph label types. Every label is
/// optional; `None` means "no label". At most one edge exists per ordered
/// `(tail, head)` pair and self-loops are allowed.
///
/// Node, edge and id enumeration follow insertion order.
#[derive(Debug, Clone)]
pub struct LabeledGraph<N = LabelValue, E = LabelValue, G = LabelValue> {
    config: GraphConfig,

    /// Whole-graph label
    label: Option<G>,

    /// Node arena; `None` marks a free slot
    pub(crate) nodes: Vec<Option<NodeSlot<N>>>,
    pub(crate) node_index: FxIndexMap<NodeId, usize>,
    free_node_slots: Vec<usize>,

    /// Edge arena; `None` marks a free slot
    pub(crate) edges: Vec<Option<EdgeSlot<E>>>,
    pub(crate) edge_index: FxIndexMap<(usize, usize), usize>,
    free_edge_slots: Vec<usize>,

    pub(crate) default_node_label: Option<DefaultNodeLabel<N>>,
    pub(crate) default_edge_label: Option<DefaultEdgeLabel<E>>,
    pub(crate) removal_hook: Option<RemovalHook>,
}

impl<N, E, G> LabeledGraph<N, E, G> {
    /// Create an empty graph with the default configuration
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        let node_slots = config.node_slots();
        let edge_slots = config.edge_slots();
        LabeledGraph {
            config,
            label: None,
            nodes: Vec::with_capacity(node_slots),
            node_index: IndexMap::with_capacity_and_hasher(node_slots, FxBuildHasher::default()),
            free_node_slots: Vec::new(),
            edges: Vec::with_capacity(edge_slots),
            edge_index: IndexMap::with_capacity_and_hasher(edge_slots, FxBuildHasher::default()),
            free_edge_slots: Vec::new(),
            default_node_label: None,
            default_edge_label: None,
            removal_hook: None,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ============================================================
    // Graph label
    // ============================================================

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.label = Some(label);
        self
    }

    /// Reset the graph label to "no label"
    pub fn clear_graph(&mut self) -> &mut Self {
        self.label = None;
        self
    }

    pub fn graph(&self) -> Option<&G> {
        self.label.as_ref()
    }

    /// Replace the graph label with `f(current)`; `None` clears it
    pub fn update_graph<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(Option<&G>) -> Option<G>,
    {
        self.label = f(self.label.as_ref());
        self
    }

    // ============================================================
    // Configuration of defaults and observers
    // ============================================================

    /// Label every node later created without an explicit label with `label`
    pub fn set_default_node_label(&mut self, label: N) -> &mut Self {
        self.default_node_label = Some(DefaultLabel::Constant(label));
        self
    }

    /// Label every node later created without an explicit label with `f(id)`
    pub fn set_default_node_label_with<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&NodeId) -> N + Send + Sync + 'static,
    {
        self.default_node_label = Some(DefaultLabel::computed(f));
        self
    }

    pub fn set_default_edge_label(&mut self, label: E) -> &mut Self {
        self.default_edge_label = Some(DefaultLabel::Constant(label));
        self
    }

    pub fn set_default_edge_label_with<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&EdgeKey) -> E + Send + Sync + 'static,
    {
        self.default_edge_label = Some(DefaultLabel::computed(f));
        self
    }

    /// Install the observer notified by [`remove_node`](Self::remove_node)
    pub fn set_removal_hook(&mut self, hook: RemovalHook) -> &mut Self {
        self.removal_hook = Some(hook);
        self
    }

    pub fn on_remove_node<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&NodeId) + Send + Sync + 'static,
    {
        self.set_removal_hook(RemovalHook::new(f))
    }

    pub fn clear_removal_hook(&mut self) -> &mut Self {
        self.removal_hook = None;
        self
    }

    // ============================================================
    // Nodes
    // ============================================================

    pub fn has_node(&self, id: impl Into<NodeId>) -> bool {
        self.node_index.contains_key(id.into().as_str())
    }

    /// Label of a node
    ///
    /// Returns `None` both for a missing node and for an unlabeled one; use
    /// [`has_node`](Self::has_node) or [`try_get_node`](Self::try_get_node)
    /// to tell them apart.
    pub fn get_node(&self, id: impl Into<NodeId>) -> Option<&N> {
        self.node_label(id.into().as_str())
    }

    pub fn get_node_mut(&mut self, id: impl Into<NodeId>) -> Option<&mut N> {
        let handle = self.handle(id.into().as_str())?;
        self.slot_mut(handle)?.label.as_mut()
    }

    /// Label of a node, failing when the node does not exist
    pub fn try_get_node(&self, id: impl Into<NodeId>) -> GraphResult<Option<&N>> {
        let id = id.into();
        match self.node_slot(id.as_str()) {
            Some(slot) => Ok(slot.label.as_ref()),
            None => Err(GraphError::NodeNotFound(id)),
        }
    }

    /// Remove a node and every edge incident on it
    ///
    /// Absent nodes are ignored. The removal hook, if any, runs once before
    /// the incident edges are dropped.
    pub fn remove_node(&mut self, id: impl Into<NodeId>) -> &mut Self {
        let id = id.into();
        let Some(handle) = self.handle(id.as_str()) else {
            return self;
        };

        if let Some(hook) = &self.removal_hook {
            hook.notify(&id);
        }

        // A self-loop sits in both maps; the set keeps it once
        let incident: FxIndexSet<usize> = match self.slot(handle) {
            Some(slot) => slot
                .outgoing
                .values()
                .chain(slot.incoming.values())
                .copied()
                .collect(),
            None => FxIndexSet::default(),
        };
        for &edge in &incident {
            self.detach_edge(edge);
        }

        self.nodes[handle] = None;
        self.node_index.shift_remove(id.as_str());
        self.free_node_slots.push(handle);

        debug!(node = %id, edges_removed = incident.len(), "removed node");
        self
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.node_index.keys().cloned().collect()
    }

    pub fn node_count(&self) -> usize {
        self.node_index.len()
    }

    /// Nodes without in-edges
    pub fn sources(&self) -> Vec<NodeId> {
        self.node_index
            .iter()
            .filter(|&(_, &h)| self.slot(h).map_or(false, |s| s.incoming.is_empty()))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Nodes without out-edges
    pub fn sinks(&self) -> Vec<NodeId> {
        self.node_index
            .iter()
            .filter(|&(_, &h)| self.slot(h).map_or(false, |s| s.outgoing.is_empty()))
            .map(|(id, _)| id.clone())
            .collect()
    }

    // ============================================================
    // Adjacency
    // ============================================================

    /// Heads of the edges leaving `id`, or `None` if `id` is not a node
    pub fn successors(&self, id: impl Into<NodeId>) -> Option<Vec<NodeId>> {
        let slot = self.node_slot(id.into().as_str())?;
        Some(self.ids_of(slot.outgoing.keys().copied()))
    }

    /// Tails of the edges entering `id`, or `None` if `id` is not a node
    pub fn predecessors(&self, id: impl Into<NodeId>) -> Option<Vec<NodeId>> {
        let slot = self.node_slot(id.into().as_str())?;
        Some(self.ids_of(slot.incoming.keys().copied()))
    }

    /// Union of successors and predecessors, or `None` if `id` is not a node
    pub fn neighbors(&self, id: impl Into<NodeId>) -> Option<Vec<NodeId>> {
        let slot = self.node_slot(id.into().as_str())?;
        let handles: FxIndexSet<usize> = slot
            .outgoing
            .keys()
            .chain(slot.incoming.keys())
            .copied()
            .collect();
        Some(self.ids_of(handles.into_iter()))
    }

    // ============================================================
    // Edges
    // ============================================================

    pub fn has_edge(&self, tail: impl Into<NodeId>, head: impl Into<NodeId>) -> bool {
        self.edge_handle(tail.into().as_str(), head.into().as_str())
            .is_some()
    }

    /// Label of an edge
    ///
    /// Like [`get_node`](Self::get_node), `None` covers both a missing edge
    /// and an unlabeled one.
    pub fn get_edge(&self, tail: impl Into<NodeId>, head: impl Into<NodeId>) -> Option<&E> {
        self.edge_label(tail.into().as_str(), head.into().as_str())
    }

    pub fn get_edge_mut(
        &mut self,
        tail: impl Into<NodeId>,
        head: impl Into<NodeId>,
    ) -> Option<&mut E> {
        let edge = self.edge_handle(tail.into().as_str(), head.into().as_str())?;
        self.edges.get_mut(edge)?.as_mut()?.label.as_mut()
    }

    /// Label of an edge, failing when the edge does not exist
    pub fn try_get_edge(
        &self,
        tail: impl Into<NodeId>,
        head: impl Into<NodeId>,
    ) -> GraphResult<Option<&E>> {
        let key = EdgeKey::new(tail, head);
        match self
            .edge_handle(key.tail.as_str(), key.head.as_str())
            .and_then(|e| self.edge_slot(e))
        {
            Some(edge) => Ok(edge.label.as_ref()),
            None => Err(GraphError::EdgeNotFound(key)),
        }
    }

    /// Remove the edge `tail -> head`; absent edges are ignored
    pub fn remove_edge(&mut self, tail: impl Into<NodeId>, head: impl Into<NodeId>) -> &mut Self {
        let tail = tail.into();
        let head = head.into();
        if let Some(edge) = self.edge_handle(tail.as_str(), head.as_str()) {
            self.detach_edge(edge);
            trace!(%tail, %head, "removed edge");
        }
        self
    }

    /// Identities of all edges, without their labels
    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edge_index
            .keys()
            .filter_map(|&(t, h)| {
                Some(EdgeKey {
                    tail: self.id_of(t)?.clone(),
                    head: self.id_of(h)?.clone(),
                })
            })
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_index.len()
    }

    pub fn statistics(&self) -> GraphStatistics {
        let mut stats = GraphStatistics {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            self_loop_count: self.edge_index.keys().filter(|(t, h)| t == h).count(),
            ..Default::default()
        };

        for slot in self.nodes.iter().flatten() {
            if slot.outgoing.is_empty() && slot.incoming.is_empty() {
                stats.isolated_node_count += 1;
            }
            stats.max_out_degree = stats.max_out_degree.max(slot.outgoing.len());
            stats.max_in_degree = stats.max_in_degree.max(slot.incoming.len());
        }
        stats
    }

    /// Drop every node and edge
    ///
    /// The graph label, default labels and removal hook are kept. The hook is
    /// not notified.
    pub fn clear(&mut self) {
        debug!(
            nodes = self.node_count(),
            edges = self.edge_count(),
            "clearing graph"
        );
        self.nodes.clear();
        self.node_index.clear();
        self.free_node_slots.clear();
        self.edges.clear();
        self.edge_index.clear();
        self.free_edge_slots.clear();
    }

    // ============================================================
    // Handle plumbing
    // ============================================================

    fn handle(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub(crate) fn slot(&self, handle: usize) -> Option<&NodeSlot<N>> {
        self.nodes.get(handle).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, handle: usize) -> Option<&mut NodeSlot<N>> {
        self.nodes.get_mut(handle).and_then(Option::as_mut)
    }

    fn node_slot(&self, id: &str) -> Option<&NodeSlot<N>> {
        self.slot(self.handle(id)?)
    }

    fn node_label(&self, id: &str) -> Option<&N> {
        self.node_slot(id)?.label.as_ref()
    }

    pub(crate) fn id_of(&self, handle: usize) -> Option<&NodeId> {
        self.slot(handle).map(|slot| &slot.id)
    }

    fn ids_of(&self, handles: impl Iterator<Item = usize>) -> Vec<NodeId> {
        handles.filter_map(|h| self.id_of(h).cloned()).collect()
    }

    pub(crate) fn edge_slot(&self, edge: usize) -> Option<&EdgeSlot<E>> {
        self.edges.get(edge).and_then(Option::as_ref)
    }

    fn edge_handle(&self, tail: &str, head: &str) -> Option<usize> {
        let t = self.handle(tail)?;
        let h = self.handle(head)?;
        self.edge_index.get(&(t, h)).copied()
    }

    fn edge_label(&self, tail: &str, head: &str) -> Option<&E> {
        self.edge_slot(self.edge_handle(tail, head)?)?.label.as_ref()
    }

    /// Store a node that is known to be absent
    pub(crate) fn alloc_node(&mut self, id: NodeId, label: Option<N>) -> usize {
        let slot = NodeSlot {
            id: id.clone(),
            label,
            outgoing: FxIndexMap::default(),
            incoming: FxIndexMap::default(),
        };
        let handle = match self.free_node_slots.pop() {
            Some(handle) => {
                self.nodes[handle] = Some(slot);
                handle
            }
            None => {
                self.nodes.push(Some(slot));
                self.nodes.len() - 1
            }
        };
        self.node_index.insert(id, handle);
        handle
    }

    /// Handle of `id`, creating an unlabeled node when missing
    fn ensure_node(&mut self, id: NodeId) -> usize {
        match self.handle(id.as_str()) {
            Some(handle) => handle,
            None => self.alloc_node(id, None),
        }
    }

    /// Store an edge that is known to be absent, between live handles
    pub(crate) fn alloc_edge(&mut self, tail: usize, head: usize, label: Option<E>) -> usize {
        let slot = EdgeSlot { tail, head, label };
        let edge = match self.free_edge_slots.pop() {
            Some(edge) => {
                self.edges[edge] = Some(slot);
                edge
            }
            None => {
                self.edges.push(Some(slot));
                self.edges.len() - 1
            }
        };

        self.edge_index.insert((tail, head), edge);
        if let Some(t) = self.slot_mut(tail) {
            t.outgoing.insert(head, edge);
        }
        if let Some(h) = self.slot_mut(head) {
            h.incoming.insert(tail, edge);
        }
        edge
    }

    /// Unlink an edge from the edge table and both endpoints
    fn detach_edge(&mut self, edge: usize) -> Option<EdgeSlot<E>> {
        let slot = self.edges.get_mut(edge)?.take()?;

        self.edge_index.shift_remove(&(slot.tail, slot.head));
        if let Some(t) = self.slot_mut(slot.tail) {
            t.outgoing.shift_remove(&slot.head);
        }
        if let Some(h) = self.slot_mut(slot.head) {
            h.incoming.shift_remove(&slot.tail);
        }
        self.free_edge_slots.push(edge);
        Some(slot)
    }
}

impl<N: Clone, E: Clone, G> LabeledGraph<N, E, G> {
    // ============================================================
    // Node mutation
    // ============================================================

    /// Ensure `id` exists, leaving an existing label untouched
    ///
    /// A new node takes the default node label, if one is configured.
    pub fn set_node(&mut self, id: impl Into<NodeId>) -> &mut Self {
        self.set_node_with(id, LabelArg::Omitted)
    }

    /// Create or relabel `id` with `label`
    pub fn set_node_label(&mut self, id: impl Into<NodeId>, label: N) -> &mut Self {
        self.set_node_with(id, LabelArg::Given(Some(label)))
    }

    /// Create or update `id` according to `label`
    ///
    /// See [`LabelArg`] for how an omitted label differs from an explicit
    /// `None`.
    pub fn set_node_with(&mut self, id: impl Into<NodeId>, label: LabelArg<N>) -> &mut Self {
        let id = id.into();
        if let Some(handle) = self.handle(id.as_str()) {
            if let LabelArg::Given(label) = label {
                if let Some(slot) = self.slot_mut(handle) {
                    slot.label = label;
                }
            }
            return self;
        }

        let label = match label {
            LabelArg::Given(label) => label,
            LabelArg::Omitted => self.default_node_label.as_ref().map(|d| d.resolve(&id)),
        };
        self.alloc_node(id, label);
        self
    }

    pub fn set_nodes<I>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        self.set_nodes_with(ids, LabelArg::Omitted)
    }

    /// Create or relabel every id in `ids` with the same label
    pub fn set_nodes_label<I>(&mut self, ids: I, label: N) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        self.set_nodes_with(ids, LabelArg::Given(Some(label)))
    }

    pub fn set_nodes_with<I>(&mut self, ids: I, label: LabelArg<N>) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        for id in ids {
            self.set_node_with(id, label.clone());
        }
        self
    }

    /// Set the label of `id` to `f(current, id)`, creating the node if absent
    pub fn update_node<F>(&mut self, id: impl Into<NodeId>, f: F) -> &mut Self
    where
        F: FnOnce(Option<&N>, &NodeId) -> Option<N>,
    {
        let id = id.into();
        let next = f(self.node_label(id.as_str()), &id);
        self.set_node_with(id, LabelArg::Given(next))
    }

    pub fn update_nodes<I, F>(&mut self, ids: I, mut f: F) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
        F: FnMut(Option<&N>, &NodeId) -> Option<N>,
    {
        for id in ids {
            self.update_node(id, &mut f);
        }
        self
    }

    // ============================================================
    // Edge mutation
    // ============================================================

    /// Ensure the edge `tail -> head` exists, leaving an existing label alone
    pub fn set_edge(&mut self, tail: impl Into<NodeId>, head: impl Into<NodeId>) -> &mut Self {
        self.set_edge_with(tail, head, LabelArg::Omitted)
    }

    pub fn set_edge_label(
        &mut self,
        tail: impl Into<NodeId>,
        head: impl Into<NodeId>,
        label: E,
    ) -> &mut Self {
        self.set_edge_with(tail, head, LabelArg::Given(Some(label)))
    }

    /// Create or update the edge `tail -> head` according to `label`
    ///
    /// Missing endpoints are created without a label; the default node label
    /// does not apply to them.
    pub fn set_edge_with(
        &mut self,
        tail: impl Into<NodeId>,
        head: impl Into<NodeId>,
        label: LabelArg<E>,
    ) -> &mut Self {
        let tail = tail.into();
        let head = head.into();

        if let Some(edge) = self.edge_handle(tail.as_str(), head.as_str()) {
            if let LabelArg::Given(label) = label {
                if let Some(slot) = self.edges.get_mut(edge).and_then(Option::as_mut) {
                    slot.label = label;
                }
            }
            return self;
        }

        let label = match label {
            LabelArg::Given(label) => label,
            LabelArg::Omitted => self.default_edge_label.as_ref().map(|d| {
                d.resolve(&EdgeKey {
                    tail: tail.clone(),
                    head: head.clone(),
                })
            }),
        };

        trace!(%tail, %head, "created edge");
        let t = self.ensure_node(tail);
        let h = self.ensure_node(head);
        self.alloc_edge(t, h, label);
        self
    }

    /// Chain consecutive ids with edges; a path of fewer than two ids is a no-op
    pub fn set_path<I>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        self.set_path_with(ids, LabelArg::Omitted)
    }

    pub fn set_path_label<I>(&mut self, ids: I, label: E) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        self.set_path_with(ids, LabelArg::Given(Some(label)))
    }

    pub fn set_path_with<I>(&mut self, ids: I, label: LabelArg<E>) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        let ids: Vec<NodeId> = ids.into_iter().map(Into::into).collect();
        for pair in ids.windows(2) {
            self.set_edge_with(&pair[0], &pair[1], label.clone());
        }
        self
    }

    /// Set the label of `tail -> head` to `f(current)`, creating the edge if absent
    pub fn update_edge<F>(
        &mut self,
        tail: impl Into<NodeId>,
        head: impl Into<NodeId>,
        f: F,
    ) -> &mut Self
    where
        F: FnOnce(Option<&E>) -> Option<E>,
    {
        let tail = tail.into();
        let head = head.into();
        let next = f(self.edge_label(tail.as_str(), head.as_str()));
        self.set_edge_with(tail, head, LabelArg::Given(next))
    }

    /// Apply `f(current, key)` to every edge along the path
    pub fn update_path<I, F>(&mut self, ids: I, mut f: F) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
        F: FnMut(Option<&E>, &EdgeKey) -> Option<E>,
    {
        let ids: Vec<NodeId> = ids.into_iter().map(Into::into).collect();
        for pair in ids.windows(2) {
            let key = EdgeKey {
                tail: pair[0].clone(),
                head: pair[1].clone(),
            };
            let next = f(self.edge_label(key.tail.as_str(), key.head.as_str()), &key);
            self.set_edge_with(key.tail, key.head, LabelArg::Given(next));
        }
        self
    }

    // ============================================================
    // Snapshots
    // ============================================================

    pub fn nodes(&self) -> Vec<Node<N>> {
        self.node_index
            .iter()
            .filter_map(|(id, &h)| {
                let slot = self.slot(h)?;
                Some(Node {
                    id: id.clone(),
                    label: slot.label.clone(),
                })
            })
            .collect()
    }

    pub fn edges(&self) -> Vec<Edge<E>> {
        self.edge_records(self.edge_index.values().copied())
    }

    /// Edges entering `id`, or `None` if `id` is not a node
    pub fn in_edges(&self, id: impl Into<NodeId>) -> Option<Vec<Edge<E>>> {
        let slot = self.node_slot(id.into().as_str())?;
        Some(self.edge_records(slot.incoming.values().copied()))
    }

    /// Edges leaving `id`, or `None` if `id` is not a node
    pub fn out_edges(&self, id: impl Into<NodeId>) -> Option<Vec<Edge<E>>> {
        let slot = self.node_slot(id.into().as_str())?;
        Some(self.edge_records(slot.outgoing.values().copied()))
    }

    /// Edges incident on `id` in either direction, a self-loop listed once
    pub fn node_edges(&self, id: impl Into<NodeId>) -> Option<Vec<Edge<E>>> {
        let slot = self.node_slot(id.into().as_str())?;
        let handles: FxIndexSet<usize> = slot
            .outgoing
            .values()
            .chain(slot.incoming.values())
            .copied()
            .collect();
        Some(self.edge_records(handles.into_iter()))
    }

    fn edge_records(&self, handles: impl Iterator<Item = usize>) -> Vec<Edge<E>> {
        handles
            .filter_map(|e| {
                let slot = self.edge_slot(e)?;
                Some(Edge {
                    tail: self.id_of(slot.tail)?.clone(),
                    head: self.id_of(slot.head)?.clone(),
                    label: slot.label.clone(),
                })
            })
            .collect()
    }
}

impl<N, E, G> Default for LabeledGraph<N, E, G> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl<N, E, G> LabeledGraph<N, E, G> {
    /// Assert that the adjacency maps mirror the edge table exactly
    pub(crate) fn assert_indices_consistent(&self) {
        let mut out_total = 0;
        let mut in_total = 0;
        for (id, &h) in &self.node_index {
            let slot = self.slot(h).expect("indexed node has a live slot");
            assert_eq!(&slot.id, id);
            for (&head, &e) in &slot.outgoing {
                assert_eq!(self.edge_index.get(&(h, head)), Some(&e));
            }
            for (&tail, &e) in &slot.incoming {
                assert_eq!(self.edge_index.get(&(tail, h)), Some(&e));
            }
            out_total += slot.outgoing.len();
            in_total += slot.incoming.len();
        }
        for (&(t, h), &e) in &self.edge_index {
            let edge = self.edge_slot(e).expect("indexed edge has a live slot");
            assert_eq!((edge.tail, edge.head), (t, h));
        }
        assert_eq!(out_total, self.edge_count());
        assert_eq!(in_total, self.edge_count());
        assert_eq!(self.nodes.iter().flatten().count(), self.node_count());
        assert_eq!(self.edges.iter().flatten().count(), self.edge_count());
    }
}
