use core::borrow::Borrow;
use core::cmp::Ordering;

use smallvec::{SmallVec, smallvec};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Slot};

/// Traversal stack; spills to the heap only for deep (degenerate) trees.
type Stack<T> = SmallVec<[T; 32]>;

/// The unbalanced binary search tree backing `OrderedMap`.
pub(crate) struct RawOrderedMap<K, V> {
    /// Arena owning every node of the tree.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<K, V> RawOrderedMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns true if the tree has no root.
    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes reachable from the root.
    pub(crate) fn len(&self) -> usize {
        let mut stack: Stack<Handle> = self.root.into_iter().collect();
        let mut count = 0;

        while let Some(handle) = stack.pop() {
            let node = self.nodes.get(handle);
            count += 1;
            stack.extend(node.left);
            stack.extend(node.right);
        }

        count
    }

    /// Drops every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Moves the whole tree out, leaving `self` empty. No node is visited.
    pub(crate) fn take(&mut self) -> Self {
        tracing::trace!(root = ?self.root, "moving tree");
        core::mem::replace(self, Self::new())
    }

    /// Returns the node behind `handle`.
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Visits every entry in key order.
    pub(crate) fn in_order(&self) -> InOrder<'_, K, V> {
        let mut walk = InOrder {
            tree: self,
            stack: Stack::new(),
        };
        walk.descend_left(self.root);
        walk
    }

    /// Reads the link stored in `slot`.
    fn link(&self, slot: Slot) -> Option<Handle> {
        match slot {
            Slot::Root => self.root,
            Slot::Left(parent) => self.nodes.get(parent).left,
            Slot::Right(parent) => self.nodes.get(parent).right,
        }
    }

    /// Overwrites the link stored in `slot`. Does not touch `link`'s parent.
    fn set_link(&mut self, slot: Slot, link: Option<Handle>) {
        match slot {
            Slot::Root => self.root = link,
            Slot::Left(parent) => self.nodes.get_mut(parent).left = link,
            Slot::Right(parent) => self.nodes.get_mut(parent).right = link,
        }
    }

    /// Finds the link that currently points at `handle`.
    fn slot_of(&self, handle: Handle) -> Slot {
        match self.nodes.get(handle).parent {
            None => Slot::Root,
            Some(parent) => self.nodes.get(parent).slot_of(parent, handle),
        }
    }

    fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes.get(handle).left {
            handle = left;
        }
        handle
    }

    /// Removes the node from its tree. The node stays allocated, but its own
    /// links are stale and must not be followed afterwards.
    fn unlink(&mut self, handle: Handle) {
        let slot = self.slot_of(handle);
        let node = self.nodes.get(handle);
        let parent = node.parent;

        match (node.left, node.right) {
            (None, None) => {
                tracing::trace!(?handle, "unlinking leaf");
                self.set_link(slot, None);
            }
            (Some(child), None) | (None, Some(child)) => {
                tracing::trace!(?handle, ?child, "unlinking node with one child");
                self.set_link(slot, Some(child));
                self.nodes.get_mut(child).parent = parent;
            }
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                let adjacent = successor == right;
                tracing::trace!(?handle, ?successor, adjacent, "unlinking node with two children");

                // The successor has no left child, so this takes one of the
                // arms above. When it is `right` itself, our right link is
                // rewritten here.
                self.unlink(successor);

                let node = self.nodes.get(handle);
                let (left, right) = (node.left, node.right);

                let replacement = self.nodes.get_mut(successor);
                replacement.parent = parent;
                replacement.left = left;
                replacement.right = right;
                self.set_link(slot, Some(successor));

                for child in left.into_iter().chain(right) {
                    self.nodes.get_mut(child).parent = Some(successor);
                }
            }
        }
    }
}

impl<K: Ord, V> RawOrderedMap<K, V> {
    /// Searches for a key and returns the handle of its node.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(handle),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }

        None
    }

    /// Returns the key-value pair corresponding to the key.
    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(self.search(key)?);
        Some((&node.key, &node.value))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(&mut self.nodes.get_mut(handle).value)
    }

    /// Inserts a key-value pair into the tree.
    /// Returns the old value if the key was already present; its node is reused.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut slot = Slot::Root;

        while let Some(handle) = self.link(slot) {
            let node = self.nodes.get_mut(handle);
            slot = match key.cmp(&node.key) {
                Ordering::Less => Slot::Left(handle),
                Ordering::Greater => Slot::Right(handle),
                Ordering::Equal => {
                    tracing::trace!(?handle, "updating value in place");
                    return Some(core::mem::replace(&mut node.value, value));
                }
            };
        }

        let handle = self.nodes.alloc(Node::new(key, value, slot.owner()));
        self.set_link(slot, Some(handle));
        tracing::trace!(?handle, parent = ?slot.owner(), "allocated node");
        None
    }

    /// Removes a key from the tree, returning the stored key and value.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        self.unlink(handle);
        let node = self.nodes.take(handle);
        Some((node.key, node.value))
    }
}

impl<K: Clone, V: Clone> RawOrderedMap<K, V> {
    /// Appends a copy of `source`'s tree to this (empty) tree.
    ///
    /// Each copy is allocated after its parent, so its parent link is set at
    /// allocation and never repaired afterwards.
    fn copy_from(&mut self, source: &Self) {
        debug_assert!(self.is_empty(), "`RawOrderedMap::copy_from()` - target is not empty!");

        let Some(root) = source.root else {
            return;
        };
        let mut pending: Stack<(Handle, Slot)> = smallvec![(root, Slot::Root)];

        while let Some((original, slot)) = pending.pop() {
            let node = source.nodes.get(original);
            let copy = self.nodes.alloc(Node::new(node.key.clone(), node.value.clone(), slot.owner()));
            self.set_link(slot, Some(copy));

            if let Some(right) = node.right {
                pending.push((right, Slot::Right(copy)));
            }
            if let Some(left) = node.left {
                pending.push((left, Slot::Left(copy)));
            }
        }

        tracing::trace!(nodes = self.nodes.len(), "copied tree");
    }
}

impl<K: Clone, V: Clone> Clone for RawOrderedMap<K, V> {
    fn clone(&self) -> Self {
        let mut tree = Self::with_capacity(self.nodes.len());
        tree.copy_from(self);
        tree
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.nodes.reserve(source.nodes.len());
        self.copy_from(source);
    }
}

/// In-order walk over a tree's entries.
pub(crate) struct InOrder<'a, K, V> {
    tree: &'a RawOrderedMap<K, V>,
    stack: Stack<Handle>,
}

impl<K, V> InOrder<'_, K, V> {
    fn descend_left(&mut self, mut link: Option<Handle>) {
        while let Some(handle) = link {
            self.stack.push(handle);
            link = self.tree.node(handle).left;
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.node(handle);
        self.descend_left(node.right);
        Some((&node.key, &node.value))
    }
}
