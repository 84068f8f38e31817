//! Ordered dictionary backed by a binary search tree where each node also maintains the heap
//! invariant on a random priority.

mod config;
mod dictionary;
mod node;
mod tree;

pub use self::config::TreapConfig;
pub use self::dictionary::TreapDictionary;
pub use self::node::{NodeRef, Payload};
