/// Capability that bounds how many records a single write may carry.
pub trait BatchLimits {
    fn max_batch_size(&self) -> usize;
}

impl BatchLimits for usize {
    fn max_batch_size(&self) -> usize {
        *self
    }
}

impl<T: BatchLimits + ?Sized> BatchLimits for &T {
    fn max_batch_size(&self) -> usize {
        (**self).max_batch_size()
    }
}

/// Static batch limits for callers without a server-reported capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Maximum records per batch. Zero is rejected when splitting.
    pub max_batch_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 5461, // 32766 SQLite bind variables / 6 per record
        }
    }
}

impl BatchLimits for BatchConfig {
    fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }
}
