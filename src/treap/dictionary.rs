use crate::comparator::{Comparator, Numeric, NumericOrder};
use crate::error::{Error, Result};
use crate::treap::config::TreapConfig;
use crate::treap::node::{Node, NodeRef, Payload};
use crate::treap::tree::Tree;
use log::{debug, trace};
use rand::{Rng, XorShiftRng};

/// An ordered dictionary implemented by a treap.
///
/// A treap is a binary search tree whose nodes also carry a random priority. Keys follow the
/// search tree order under the dictionary's comparator, and priorities follow min-heap order: a
/// node never has a smaller priority than its parent. Because priorities are drawn uniformly
/// at random, the expected height of the tree is logarithmic in the number of keys.
///
/// Each entry holds a key and an optional value. Lookups that report an entry return its value
/// if one was inserted and fall back to the key otherwise (see `Payload`).
///
/// Numeric keys are ordered by `NumericOrder` out of the box. Any other key type needs a
/// comparator injected through `with_comparator`.
///
/// # Examples
///
/// ```
/// use treap_dictionary::treap::{Payload, TreapDictionary};
///
/// let mut dict = TreapDictionary::new();
/// dict.insert(5, "five");
/// dict.insert(3, "three");
/// dict.insert(8, "eight");
///
/// assert!(dict.contains(&3));
/// assert_eq!(dict.get(&8), Some(&"eight"));
/// assert_eq!(dict.len(), 3);
///
/// assert_eq!(dict.min(), Some(Payload::Value(&"three")));
/// assert_eq!(dict.successor(&5), Some(Payload::Value(&"eight")));
///
/// assert!(dict.remove(&5));
/// assert_eq!(dict.predecessor(&8), Some(Payload::Value(&"three")));
/// ```
pub struct TreapDictionary<K, V, C = NumericOrder> {
    tree: Tree<K, V>,
    comparator: C,
    rng: XorShiftRng,
}

impl<K, V> TreapDictionary<K, V, NumericOrder>
where
    K: Numeric,
{
    /// Constructs a new, empty `TreapDictionary<K, V>` for numeric keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::treap::TreapDictionary;
    ///
    /// let dict: TreapDictionary<u32, u32> = TreapDictionary::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(NumericOrder)
    }
}

impl<K, V, C> TreapDictionary<K, V, C>
where
    C: Comparator<K>,
{
    /// Constructs a new, empty `TreapDictionary<K, V, C>` that orders keys with `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::treap::TreapDictionary;
    ///
    /// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    /// let mut dict: TreapDictionary<&str, (), _> = TreapDictionary::with_comparator(by_len);
    /// dict.insert_key("ccc");
    /// dict.insert_key("a");
    /// assert_eq!(dict.min().and_then(|payload| payload.key()), Some(&"a"));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        let config = TreapConfig::default();
        debug!("constructing treap dictionary with {:?}", config);
        TreapDictionary {
            tree: Tree::new(config.chunk_size),
            comparator,
            rng: config.rng(),
        }
    }

    /// Constructs a new, empty `TreapDictionary<K, V, C>` from an explicit configuration.
    /// Returns an error if the configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::comparator::NumericOrder;
    /// use treap_dictionary::error::Error;
    /// use treap_dictionary::treap::{TreapConfig, TreapDictionary};
    ///
    /// let config = TreapConfig::new().seed([0; 4]);
    /// let dict = TreapDictionary::<u32, u32, _>::with_config(NumericOrder, config);
    /// assert_eq!(dict.err(), Some(Error::InvalidSeed));
    /// ```
    pub fn with_config(comparator: C, config: TreapConfig) -> Result<Self> {
        config.validate()?;
        debug!("constructing treap dictionary with {:?}", config);
        Ok(TreapDictionary {
            tree: Tree::new(config.chunk_size),
            comparator,
            rng: config.rng(),
        })
    }

    fn insert_entry(&mut self, key: K, value: Option<V>) -> bool {
        let &mut TreapDictionary {
            ref mut tree,
            ref comparator,
            ref mut rng,
        } = self;
        let priority = rng.gen::<f64>();
        let inserted = tree.insert(comparator, key, value, priority).is_some();
        trace!("insert with priority {} created a node: {}", priority, inserted);
        inserted
    }

    /// Inserts a key-value pair into the dictionary. If the key already exists, the dictionary is
    /// left untouched and the original value is kept. Returns `true` if a new entry was created.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::treap::TreapDictionary;
    ///
    /// let mut dict = TreapDictionary::new();
    /// assert!(dict.insert(1, 1));
    /// assert!(!dict.insert(1, 2));
    /// assert_eq!(dict.get(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.insert_entry(key, Some(value))
    }

    /// Inserts a key without a value. The key stands in for the value in `min`, `max`,
    /// `predecessor` and `successor`. Duplicates are ignored as in `insert`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::treap::{Payload, TreapDictionary};
    ///
    /// let mut dict: TreapDictionary<u32, ()> = TreapDictionary::new();
    /// assert!(dict.insert_key(1));
    /// assert_eq!(dict.get(&1), None);
    /// assert_eq!(dict.max(), Some(Payload::Key(&1)));
    /// ```
    pub fn insert_key(&mut self, key: K) -> bool {
        self.insert_entry(key, None)
    }

    /// Removes a key from the dictionary. Removing an absent key is a no-op, so this always
    /// returns `true`. Use `take` to learn whether the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::treap::TreapDictionary;
    ///
    /// let mut dict = TreapDictionary::new();
    /// dict.insert(1, 1);
    /// assert!(dict.remove(&1));
    /// assert!(!dict.contains(&1));
    /// assert!(dict.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key);
        true
    }

    /// Removes a key from the dictionary and returns its entry, or `None` if the key was absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::treap::TreapDictionary;
    ///
    /// let mut dict = TreapDictionary::new();
    /// dict.insert(1, "one");
    /// dict.insert_key(2);
    /// assert_eq!(dict.take(&1), Some((1, Some("one"))));
    /// assert_eq!(dict.take(&2), Some((2, None)));
    /// assert_eq!(dict.take(&2), None);
    /// ```
    pub fn take(&mut self, key: &K) -> Option<(K, Option<V>)> {
        let &mut TreapDictionary {
            ref mut tree,
            ref comparator,
            ..
        } = self;
        tree.search(comparator, key).map(|handle| {
            let Node { key, value, .. } = tree.remove(handle);
            trace!("removed node {:?}, {} nodes left", handle, tree.len());
            (key, value)
        })
    }

    /// Checks if a key exists in the dictionary.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::treap::TreapDictionary;
    ///
    /// let mut dict = TreapDictionary::new();
    /// dict.insert(1, 1);
    /// assert!(!dict.contains(&0));
    /// assert!(dict.contains(&1));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.tree.search(&self.comparator, key).is_some()
    }

    /// Returns an immutable reference to the value associated with a key. Returns `None` if the
    /// key is absent or was inserted without a value.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree
            .search(&self.comparator, key)
            .and_then(|handle| self.tree.nodes[handle].value.as_ref())
    }

    /// Returns a mutable reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::treap::TreapDictionary;
    ///
    /// let mut dict = TreapDictionary::new();
    /// dict.insert(1, 1);
    /// *dict.get_mut(&1).unwrap() = 2;
    /// assert_eq!(dict.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let &mut TreapDictionary {
            ref mut tree,
            ref comparator,
            ..
        } = self;
        match tree.search(comparator, key) {
            Some(handle) => tree.nodes[handle].value.as_mut(),
            None => None,
        }
    }

    /// Returns the heap priority of a key, or `None` if the key is absent.
    pub fn priority(&self, key: &K) -> Option<f64> {
        self.tree
            .search(&self.comparator, key)
            .map(|handle| self.tree.nodes[handle].priority)
    }

    /// Reassigns the priority of a key and rotates its node until the heap order holds again.
    /// Returns `Ok(false)` without changing anything if the key is absent, and an error if the
    /// priority is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::treap::TreapDictionary;
    ///
    /// let mut dict: TreapDictionary<u32, ()> = TreapDictionary::new();
    /// dict.insert_key(1);
    /// dict.insert_key(2);
    ///
    /// assert_eq!(dict.update(&2, -1.0), Ok(true));
    /// assert_eq!(dict.root().map(|node| *node.key()), Some(2));
    /// assert_eq!(dict.update(&3, 0.5), Ok(false));
    /// assert!(dict.update(&1, std::f64::NAN).is_err());
    /// ```
    pub fn update(&mut self, key: &K, priority: f64) -> Result<bool> {
        if priority.is_nan() {
            return Err(Error::InvalidPriority(priority));
        }
        let &mut TreapDictionary {
            ref mut tree,
            ref comparator,
            ..
        } = self;
        match tree.search(comparator, key) {
            Some(handle) => {
                tree.set_priority(handle, priority);
                trace!("updated priority of node {:?} to {}", handle, priority);
                Ok(true)
            },
            None => Ok(false),
        }
    }

    /// Returns the payload of the entry with the smallest key, or `None` if the dictionary is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::treap::{Payload, TreapDictionary};
    ///
    /// let mut dict: TreapDictionary<u32, ()> = TreapDictionary::new();
    /// assert_eq!(dict.min(), None);
    /// dict.insert_key(3);
    /// dict.insert_key(1);
    /// assert_eq!(dict.min(), Some(Payload::Key(&1)));
    /// ```
    pub fn min(&self) -> Option<Payload<'_, K, V>> {
        self.root().map(|root| root.min())
    }

    /// Returns the payload of the entry with the largest key, or `None` if the dictionary is
    /// empty.
    pub fn max(&self) -> Option<Payload<'_, K, V>> {
        self.root().map(|root| root.max())
    }

    /// Returns the payload of the entry whose key immediately precedes `key`. Returns `None` if
    /// `key` is absent or is the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::treap::{Payload, TreapDictionary};
    ///
    /// let mut dict = TreapDictionary::new();
    /// for key in &[1, 3, 5, 7, 9] {
    ///     dict.insert(*key, *key * 10);
    /// }
    /// assert_eq!(dict.predecessor(&5), Some(Payload::Value(&30)));
    /// assert_eq!(dict.predecessor(&1), None);
    /// assert_eq!(dict.predecessor(&4), None);
    /// ```
    pub fn predecessor(&self, key: &K) -> Option<Payload<'_, K, V>> {
        self.tree
            .predecessor(&self.comparator, key)
            .map(|handle| self.tree.nodes[handle].payload())
    }

    /// Returns the payload of the entry whose key immediately follows `key`. Returns `None` if
    /// `key` is absent or is the largest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::treap::{Payload, TreapDictionary};
    ///
    /// let mut dict = TreapDictionary::new();
    /// for key in &[1, 3, 5, 7, 9] {
    ///     dict.insert(*key, *key * 10);
    /// }
    /// assert_eq!(dict.successor(&5), Some(Payload::Value(&70)));
    /// assert_eq!(dict.successor(&9), None);
    /// ```
    pub fn successor(&self, key: &K) -> Option<Payload<'_, K, V>> {
        self.tree
            .successor(&self.comparator, key)
            .map(|handle| self.tree.nodes[handle].payload())
    }

    /// Returns a view of the node holding `key`. The view's `min` and `max` answer bounded
    /// queries over the subtree below that node.
    pub fn subtree(&self, key: &K) -> Option<NodeRef<'_, K, V>> {
        self.tree
            .search(&self.comparator, key)
            .map(|handle| self.tree.node_ref(handle))
    }

    /// Returns a view of the root node, or `None` if the dictionary is empty.
    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        self.tree.root.map(|handle| self.tree.node_ref(handle))
    }

    /// Returns the comparator that orders the keys of the dictionary.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of entries in the dictionary.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry from the dictionary.
    pub fn clear(&mut self) {
        debug!("clearing treap dictionary with {} entries", self.len());
        self.tree.clear();
    }
}

impl<K, V> Default for TreapDictionary<K, V, NumericOrder>
where
    K: Numeric,
{
    fn default() -> Self {
        Self::new()
    }
}
