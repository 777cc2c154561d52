//! Label arguments and default-label generators

use super::types::{EdgeKey, NodeId};
use std::fmt;
use std::sync::Arc;

/// Label argument of a `set_*` call
///
/// `Omitted` and `Given(None)` are different requests. On a new node or edge
/// `Omitted` falls back to the configured default label, while on an existing
/// one it leaves the stored label alone. `Given(None)` always stores "no label".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelArg<L> {
    Omitted,
    Given(Option<L>),
}

impl<L> LabelArg<L> {
    pub fn value(label: L) -> Self {
        LabelArg::Given(Some(label))
    }

    /// An explicit "no label", distinct from omitting the argument
    pub fn none() -> Self {
        LabelArg::Given(None)
    }

    pub fn is_omitted(&self) -> bool {
        matches!(self, LabelArg::Omitted)
    }
}

impl<L> Default for LabelArg<L> {
    fn default() -> Self {
        LabelArg::Omitted
    }
}

/// Generator for labels of elements created without an explicit label
///
/// `K` is what a computed default receives: the [`NodeId`] for nodes and the
/// [`EdgeKey`] for edges.
pub enum DefaultLabel<L, K> {
    Constant(L),
    Computed(Arc<dyn Fn(&K) -> L + Send + Sync>),
}

pub type DefaultNodeLabel<N> = DefaultLabel<N, NodeId>;
pub type DefaultEdgeLabel<E> = DefaultLabel<E, EdgeKey>;

impl<L, K> DefaultLabel<L, K> {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&K) -> L + Send + Sync + 'static,
    {
        DefaultLabel::Computed(Arc::new(f))
    }
}

impl<L: Clone, K> DefaultLabel<L, K> {
    /// Produce the label for a newly created element
    pub fn resolve(&self, key: &K) -> L {
        match self {
            DefaultLabel::Constant(label) => label.clone(),
            DefaultLabel::Computed(f) => f(key),
        }
    }
}

impl<L: Clone, K> Clone for DefaultLabel<L, K> {
    fn clone(&self) -> Self {
        match self {
            DefaultLabel::Constant(label) => DefaultLabel::Constant(label.clone()),
            DefaultLabel::Computed(f) => DefaultLabel::Computed(Arc::clone(f)),
        }
    }
}

impl<L: fmt::Debug, K> fmt::Debug for DefaultLabel<L, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultLabel::Constant(label) => f.debug_tuple("Constant").field(label).finish(),
            DefaultLabel::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}
