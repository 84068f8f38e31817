use crate::arena::{Handle, TypedArena};
use crate::comparator::Comparator;
use crate::treap::node::{leftmost, rightmost, Node, NodeRef};
use log::trace;
use std::cmp::Ordering;

/// Nodes of a treap linked through arena handles, together with the handle of the root.
///
/// Every mutation is expressed with `rotate_left` and `rotate_right`, which keep the in-order
/// sequence of keys intact and only swap the depth of a node and its parent.
pub struct Tree<K, V> {
    pub nodes: TypedArena<Node<K, V>>,
    pub root: Option<Handle>,
}

impl<K, V> Tree<K, V> {
    pub fn new(chunk_size: usize) -> Self {
        Tree {
            nodes: TypedArena::new(chunk_size),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub fn node_ref(&self, handle: Handle) -> NodeRef<'_, K, V> {
        NodeRef::new(&self.nodes, handle)
    }

    // Points the slot of `parent` that held `old` at `new`. A missing parent means `old` was the
    // root.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            Some(parent) => {
                let parent_node = &mut self.nodes[parent];
                if parent_node.left == Some(old) {
                    parent_node.left = new;
                } else {
                    debug_assert_eq!(parent_node.right, Some(old), "Expected `old` to be a child.");
                    parent_node.right = new;
                }
            },
            None => self.root = new,
        }
    }

    /// Rotates a left child above its parent.
    ///
    /// ```text
    ///       P            N
    ///      / \          / \
    ///     N   c  ->    a   P
    ///    / \              / \
    ///   a   b            b   c
    /// ```
    pub fn rotate_right(&mut self, node: Handle) {
        let parent = self.nodes[node].parent.expect("Expected the rotated node to have a parent.");
        debug_assert_eq!(self.nodes[parent].left, Some(node), "Expected a left child.");

        let grandparent = self.nodes[parent].parent;
        self.replace_child(grandparent, parent, Some(node));
        self.nodes[node].parent = grandparent;

        let inner = self.nodes[node].right.take();
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(parent);
        }
        self.nodes[parent].left = inner;

        self.nodes[node].right = Some(parent);
        self.nodes[parent].parent = Some(node);
        trace!("rotated {:?} right above {:?}", node, parent);
    }

    /// Rotates a right child above its parent. Mirror of `rotate_right`.
    pub fn rotate_left(&mut self, node: Handle) {
        let parent = self.nodes[node].parent.expect("Expected the rotated node to have a parent.");
        debug_assert_eq!(self.nodes[parent].right, Some(node), "Expected a right child.");

        let grandparent = self.nodes[parent].parent;
        self.replace_child(grandparent, parent, Some(node));
        self.nodes[node].parent = grandparent;

        let inner = self.nodes[node].left.take();
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(parent);
        }
        self.nodes[parent].right = inner;

        self.nodes[node].left = Some(parent);
        self.nodes[parent].parent = Some(node);
        trace!("rotated {:?} left above {:?}", node, parent);
    }

    pub fn rotate_up(&mut self, node: Handle) {
        let parent = self.nodes[node].parent.expect("Expected the rotated node to have a parent.");
        if self.nodes[parent].left == Some(node) {
            self.rotate_right(node);
        } else {
            self.rotate_left(node);
        }
    }

    /// Returns the child with the numerically smaller priority, preferring the left child on
    /// ties. Returns `None` for a leaf.
    pub fn highest_priority_child(&self, node: Handle) -> Option<Handle> {
        let Node { left, right, .. } = self.nodes[node];
        match (left, right) {
            (Some(left), Some(right)) => {
                if self.nodes[left].priority <= self.nodes[right].priority {
                    Some(left)
                } else {
                    Some(right)
                }
            },
            (Some(child), None) | (None, Some(child)) => Some(child),
            (None, None) => None,
        }
    }

    // Rotates `node` up while its priority is strictly smaller than its parent's.
    pub fn bubble_up(&mut self, node: Handle) {
        while let Some(parent) = self.nodes[node].parent {
            if self.nodes[node].priority >= self.nodes[parent].priority {
                break;
            }
            self.rotate_up(node);
        }
    }

    // Rotates children above `node` while its priority is strictly larger than theirs.
    pub fn sink(&mut self, node: Handle) {
        while let Some(child) = self.highest_priority_child(node) {
            if self.nodes[node].priority <= self.nodes[child].priority {
                break;
            }
            self.rotate_up(child);
        }
    }

    pub fn search<C>(&self, comparator: &C, key: &K) -> Option<Handle>
    where
        C: Comparator<K>,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.nodes[handle];
            curr = match comparator.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Attaches a new leaf for `key` and rotates it up to its heap position. Returns `None`
    /// without touching the tree if `key` is already present.
    pub fn insert<C>(
        &mut self,
        comparator: &C,
        key: K,
        value: Option<V>,
        priority: f64,
    ) -> Option<Handle>
    where
        C: Comparator<K>,
    {
        let mut parent = None;
        let mut side = Ordering::Equal;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.nodes[handle];
            side = comparator.compare(&key, &node.key);
            parent = Some(handle);
            curr = match side {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return None,
            };
        }

        let handle = self.nodes.allocate(Node::new(key, value, priority));
        match parent {
            Some(parent) => {
                self.nodes[handle].parent = Some(parent);
                if side == Ordering::Less {
                    self.nodes[parent].left = Some(handle);
                } else {
                    self.nodes[parent].right = Some(handle);
                }
                self.bubble_up(handle);
            },
            None => self.root = Some(handle),
        }
        Some(handle)
    }

    /// Sinks `node` to a leaf by rotating its highest priority child above it until it has no
    /// children, then unlinks it and frees its slot.
    pub fn remove(&mut self, node: Handle) -> Node<K, V> {
        if self.nodes[node].is_root() && self.nodes[node].is_leaf() {
            self.root = None;
            return self.nodes.free(&node);
        }

        self.nodes[node].priority = f64::INFINITY;
        while let Some(child) = self.highest_priority_child(node) {
            self.rotate_up(child);
        }

        let parent = self.nodes[node].parent;
        debug_assert!(parent.is_some(), "Expected a sunk node to have a parent.");
        self.replace_child(parent, node, None);
        self.nodes[node].parent = None;
        self.nodes.free(&node)
    }

    /// Reassigns the priority of `node` and restores the heap order around it. Only one of the
    /// two repair directions can do any work for a given change.
    pub fn set_priority(&mut self, node: Handle, priority: f64) {
        self.nodes[node].priority = priority;
        self.bubble_up(node);
        self.sink(node);
    }

    /// Returns the node with the largest key smaller than `key`, if `key` is present.
    pub fn predecessor<C>(&self, comparator: &C, key: &K) -> Option<Handle>
    where
        C: Comparator<K>,
    {
        let mut ancestor = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.nodes[handle];
            match comparator.compare(key, &node.key) {
                Ordering::Less => curr = node.left,
                Ordering::Greater => {
                    ancestor = Some(handle);
                    curr = node.right;
                },
                Ordering::Equal => {
                    return match node.left {
                        Some(left) => Some(rightmost(&self.nodes, left)),
                        None => ancestor,
                    };
                },
            }
        }
        None
    }

    /// Returns the node with the smallest key larger than `key`, if `key` is present.
    pub fn successor<C>(&self, comparator: &C, key: &K) -> Option<Handle>
    where
        C: Comparator<K>,
    {
        let mut ancestor = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.nodes[handle];
            match comparator.compare(key, &node.key) {
                Ordering::Less => {
                    ancestor = Some(handle);
                    curr = node.left;
                },
                Ordering::Greater => curr = node.right,
                Ordering::Equal => {
                    return match node.right {
                        Some(right) => Some(leftmost(&self.nodes, right)),
                        None => ancestor,
                    };
                },
            }
        }
        None
    }
}
