//! Construction-time configuration.

use crate::error::ConfigError;

/// Capacities for the two chunk shapes used throughout a sequence: the
/// leaf chunks that hold items directly, and the interior chunks that
/// hold child pointers in the tree. Both must be even and at least 2, so
/// the `cap / 2` underflow threshold is always a meaningful boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    pub leaf_capacity: usize,
    pub interior_capacity: usize,
}

impl ChunkConfig {
    pub fn new(leaf_capacity: usize, interior_capacity: usize) -> Result<Self, ConfigError> {
        Self::validate(leaf_capacity)?;
        Self::validate(interior_capacity)?;
        Ok(Self {
            leaf_capacity,
            interior_capacity,
        })
    }

    fn validate(cap: usize) -> Result<(), ConfigError> {
        if cap < 2 || cap % 2 != 0 {
            Err(ConfigError::InvalidCapacity(cap))
        } else {
            Ok(())
        }
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            leaf_capacity: 512,
            interior_capacity: 32,
        }
    }
}
