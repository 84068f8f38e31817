//! Errors reported by dictionary construction and priority updates.

use std::error;
use std::fmt;
use std::result;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// A priority that cannot be ordered against other priorities (NaN).
    InvalidPriority(f64),
    /// An all-zero seed, which the xorshift generator cannot advance from.
    InvalidSeed,
    /// A node arena configured to hold zero nodes per chunk.
    InvalidChunkSize,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidPriority(priority) => {
                write!(f, "priority {} cannot be ordered against other priorities", priority)
            },
            Error::InvalidSeed => write!(f, "priority generator seed must not be all zeros"),
            Error::InvalidChunkSize => write!(f, "node arena chunk size must be positive"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
