//! Node removal observer
//!
//! A graph may carry one [`RemovalHook`]. It fires once for every node that
//! `remove_node` actually removes, before any incident edge is dropped, so
//! collaborators can mirror the removal in their own structures.

use super::types::NodeId;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct RemovalHook(Arc<dyn Fn(&NodeId) + Send + Sync>);

impl RemovalHook {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&NodeId) + Send + Sync + 'static,
    {
        RemovalHook(Arc::new(f))
    }

    pub(crate) fn notify(&self, id: &NodeId) {
        (self.0)(id)
    }
}

impl fmt::Debug for RemovalHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RemovalHook(..)")
    }
}
