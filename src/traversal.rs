//! Walks over a treap for inspection and testing.
//!
//! Every walk starts from an optional root view, usually `TreapDictionary::root`, and uses an
//! explicit stack so that deep trees cannot overflow the call stack.

use crate::comparator::Comparator;
use crate::treap::NodeRef;
use std::cmp::Ordering;

/// Returns the nodes of the tree in ascending key order.
///
/// # Examples
///
/// ```
/// use treap_dictionary::traversal;
/// use treap_dictionary::treap::TreapDictionary;
///
/// let mut dict: TreapDictionary<u32, ()> = TreapDictionary::new();
/// for key in &[5, 3, 8, 1, 4] {
///     dict.insert_key(*key);
/// }
/// assert_eq!(traversal::in_order_keys(dict.root()), vec![&1, &3, &4, &5, &8]);
/// ```
pub fn in_order<'a, K, V>(root: Option<NodeRef<'a, K, V>>) -> Vec<NodeRef<'a, K, V>> {
    let mut ret = Vec::new();
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(node) = curr {
            stack.push(node);
            curr = node.left();
        }
        match stack.pop() {
            Some(node) => {
                ret.push(node);
                curr = node.right();
            },
            None => return ret,
        }
    }
}

/// Returns the keys of the tree in ascending order.
pub fn in_order_keys<'a, K, V>(root: Option<NodeRef<'a, K, V>>) -> Vec<&'a K> {
    in_order(root).into_iter().map(|node| node.key()).collect()
}

/// Returns the priorities of the tree with every node listed after both of its subtrees.
pub fn post_order_priorities<K, V>(root: Option<NodeRef<K, V>>) -> Vec<f64> {
    let mut ret = Vec::new();
    let mut stack: Vec<_> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        ret.push(node.priority());
        stack.extend(node.left());
        stack.extend(node.right());
    }
    ret.reverse();
    ret
}

/// Checks that no node has a smaller priority than its parent and that every child links back
/// to its parent.
pub fn is_heap_ordered<K, V>(root: Option<NodeRef<K, V>>) -> bool {
    if root.map_or(false, |node| !node.is_root()) {
        return false;
    }
    in_order(root).into_iter().all(|node| {
        let children_linked = node
            .left()
            .into_iter()
            .chain(node.right())
            .all(|child| child.parent() == Some(node));
        let above_parent = node
            .parent()
            .map_or(true, |parent| node.priority() >= parent.priority());
        children_linked && above_parent
    })
}

/// Checks that an in-order walk yields strictly increasing keys under `comparator`.
pub fn is_search_ordered<K, V, C>(root: Option<NodeRef<K, V>>, comparator: &C) -> bool
where
    C: Comparator<K>,
{
    in_order_keys(root)
        .windows(2)
        .all(|pair| comparator.compare(pair[0], pair[1]) == Ordering::Less)
}
