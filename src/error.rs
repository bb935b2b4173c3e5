//! Error types surfaced at construction time.
//!
//! Every operation on an already-built sequence is either infallible or a
//! documented precondition violation (an `assert!`/`debug_assert!`, not a
//! `Result`). The one place a bad input can legitimately be *recovered*
//! from is choosing chunk capacities, so that's the one place this crate
//! returns a `Result`.

use thiserror::Error;

/// Failure building a [`crate::config::ChunkConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("chunk capacity must be even and at least 2, got {0}")]
    InvalidCapacity(usize),
}
