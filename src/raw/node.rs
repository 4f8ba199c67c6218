use super::handle::Handle;

/// A single key-value element and its links within the tree.
///
/// `left` and `right` are the structural edges: every node is reachable from
/// exactly one of them (or the root link). `parent` is a back-link used only to
/// find the slot that holds this node.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) parent: Option<Handle>,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// Creates a node with no children below `parent`.
    pub(crate) const fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        Self {
            key,
            value,
            parent,
            left: None,
            right: None,
        }
    }

    /// The link holding `child`, which must be one of this node's children.
    pub(crate) fn slot_of(&self, handle: Handle, child: Handle) -> Slot {
        if self.left == Some(child) {
            Slot::Left(handle)
        } else {
            debug_assert_eq!(self.right, Some(child), "`Node::slot_of()` - not a child!");
            Slot::Right(handle)
        }
    }
}

/// The link that currently points at a node: the map's root link, or the
/// left/right link of some parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Slot {
    Root,
    Left(Handle),
    Right(Handle),
}

impl Slot {
    /// The node owning this link, i.e. the parent of whatever it holds.
    pub(crate) const fn owner(self) -> Option<Handle> {
        match self {
            Slot::Root => None,
            Slot::Left(parent) | Slot::Right(parent) => Some(parent),
        }
    }
}
