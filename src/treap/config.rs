use crate::error::{Error, Result};
use rand::{SeedableRng, XorShiftRng};

const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Construction parameters of a `TreapDictionary`.
///
/// `chunk_size` is the number of nodes the node arena reserves at a time. `seed` fixes the
/// sequence of priorities handed to new nodes, which makes tree shapes reproducible. Without a
/// seed, the generator is seeded from the operating system.
///
/// # Examples
///
/// ```
/// use treap_dictionary::treap::{TreapConfig, TreapDictionary};
/// use treap_dictionary::comparator::NumericOrder;
///
/// let config = TreapConfig::new().chunk_size(64).seed([1, 2, 3, 4]);
/// let dict: TreapDictionary<u32, u32> = TreapDictionary::with_config(NumericOrder, config).unwrap();
/// assert!(dict.is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreapConfig {
    pub chunk_size: usize,
    pub seed: Option<[u32; 4]>,
}

impl TreapConfig {
    pub fn new() -> Self {
        TreapConfig {
            chunk_size: DEFAULT_CHUNK_SIZE,
            seed: None,
        }
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn seed(mut self, seed: [u32; 4]) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidChunkSize);
        }
        if self.seed == Some([0; 4]) {
            return Err(Error::InvalidSeed);
        }
        Ok(())
    }

    pub(crate) fn rng(&self) -> XorShiftRng {
        match self.seed {
            Some(seed) => XorShiftRng::from_seed(seed),
            None => rand::weak_rng(),
        }
    }
}

impl Default for TreapConfig {
    fn default() -> Self {
        Self::new()
    }
}
