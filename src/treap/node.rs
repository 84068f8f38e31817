use crate::arena::{Handle, TypedArena};
use std::fmt;
use std::ptr;

/// A struct representing an internal node of a treap.
///
/// Children and parent are handles into the arena that owns every node of the tree. The parent
/// link is only followed upwards during rotations and never decides when a node is dropped.
pub struct Node<K, V> {
    pub key: K,
    pub value: Option<V>,
    pub priority: f64,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
    pub parent: Option<Handle>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: Option<V>, priority: f64) -> Self {
        Node {
            key,
            value,
            priority,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn payload(&self) -> Payload<'_, K, V> {
        match self.value {
            Some(ref value) => Payload::Value(value),
            None => Payload::Key(&self.key),
        }
    }
}

// Descends left from `handle` until there is no left child.
pub fn leftmost<K, V>(nodes: &TypedArena<Node<K, V>>, mut handle: Handle) -> Handle {
    while let Some(left) = nodes[handle].left {
        handle = left;
    }
    handle
}

// Descends right from `handle` until there is no right child.
pub fn rightmost<K, V>(nodes: &TypedArena<Node<K, V>>, mut handle: Handle) -> Handle {
    while let Some(right) = nodes[handle].right {
        handle = right;
    }
    handle
}

/// What a lookup reports for a node: its value if one was inserted, otherwise its key.
///
/// # Examples
///
/// ```
/// use treap_dictionary::treap::{Payload, TreapDictionary};
///
/// let mut dict = TreapDictionary::new();
/// dict.insert(1, "one");
/// dict.insert_key(2);
///
/// assert_eq!(dict.min(), Some(Payload::Value(&"one")));
/// assert_eq!(dict.max(), Some(Payload::Key(&2)));
/// ```
#[derive(Debug, Eq, PartialEq)]
pub enum Payload<'a, K, V> {
    Value(&'a V),
    Key(&'a K),
}

impl<'a, K, V> Payload<'a, K, V> {
    /// Returns the value if the node carried one.
    pub fn value(self) -> Option<&'a V> {
        match self {
            Payload::Value(value) => Some(value),
            Payload::Key(_) => None,
        }
    }

    /// Returns the key if the node had no value.
    pub fn key(self) -> Option<&'a K> {
        match self {
            Payload::Value(_) => None,
            Payload::Key(key) => Some(key),
        }
    }
}

impl<'a, K, V> Clone for Payload<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for Payload<'a, K, V> {}

/// A read-only view of a node inside a `TreapDictionary<K, V, C>`.
///
/// A `NodeRef` borrows the dictionary, so the tree cannot change while one is alive. It exposes
/// the key, value, priority and links of the node, which is enough to walk or verify the tree.
pub struct NodeRef<'a, K, V> {
    nodes: &'a TypedArena<Node<K, V>>,
    handle: Handle,
}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) fn new(nodes: &'a TypedArena<Node<K, V>>, handle: Handle) -> Self {
        NodeRef { nodes, handle }
    }

    fn node(&self) -> &'a Node<K, V> {
        &self.nodes[self.handle]
    }

    fn to(&self, handle: Option<Handle>) -> Option<NodeRef<'a, K, V>> {
        handle.map(|handle| NodeRef::new(self.nodes, handle))
    }

    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    pub fn value(&self) -> Option<&'a V> {
        self.node().value.as_ref()
    }

    pub fn priority(&self) -> f64 {
        self.node().priority
    }

    pub fn left(&self) -> Option<NodeRef<'a, K, V>> {
        self.to(self.node().left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, K, V>> {
        self.to(self.node().right)
    }

    pub fn parent(&self) -> Option<NodeRef<'a, K, V>> {
        self.to(self.node().parent)
    }

    pub fn is_root(&self) -> bool {
        self.node().is_root()
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Returns the value of the node, or its key if it has no value.
    pub fn payload(&self) -> Payload<'a, K, V> {
        self.node().payload()
    }

    /// Returns the payload of the minimum node in the subtree rooted at this node.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::traversal;
    /// use treap_dictionary::treap::{Payload, TreapDictionary};
    ///
    /// let mut dict: TreapDictionary<u32, ()> = TreapDictionary::new();
    /// for key in &[5, 3, 8, 1, 4, 7, 9] {
    ///     dict.insert_key(*key);
    /// }
    ///
    /// let root = dict.root().unwrap();
    /// assert_eq!(root.min(), Payload::Key(&1));
    /// assert_eq!(root.max(), Payload::Key(&9));
    ///
    /// let subtree = dict.subtree(&8).unwrap();
    /// let keys = traversal::in_order_keys(Some(subtree));
    /// assert_eq!(subtree.min().key(), keys.first().cloned());
    /// assert_eq!(subtree.max().key(), keys.last().cloned());
    /// ```
    pub fn min(&self) -> Payload<'a, K, V> {
        self.nodes[leftmost(self.nodes, self.handle)].payload()
    }

    /// Returns the payload of the maximum node in the subtree rooted at this node.
    pub fn max(&self) -> Payload<'a, K, V> {
        self.nodes[rightmost(self.nodes, self.handle)].payload()
    }
}

impl<'a, K, V> Clone for NodeRef<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for NodeRef<'a, K, V> {}

impl<'a, K, V> PartialEq for NodeRef<'a, K, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.nodes, other.nodes) && self.handle == other.handle
    }
}

impl<'a, K, V> Eq for NodeRef<'a, K, V> {}

impl<'a, K, V> fmt::Debug for NodeRef<'a, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("value", &self.value())
            .field("priority", &self.priority())
            .finish()
    }
}
