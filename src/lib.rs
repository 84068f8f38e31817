//! An ordered key-value dictionary backed by a treap.
//!
//! Nodes live in a `TypedArena` and refer to their children and parent through handles, so
//! rotations are a handful of handle updates. Keys are ordered by a `Comparator`: numeric keys
//! get `NumericOrder` by default, every other key type has to inject one.

pub mod arena;
pub mod comparator;
pub mod error;
pub mod traversal;
pub mod treap;
