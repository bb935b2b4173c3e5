use crate::chunk::Ring;
use crate::measure::{Weigh, Weighted};
use crate::seq::Sequence;

/// A sequence ordered by insertion but measured by a client-supplied
/// weight instead of position: `search_by`/`split_by` locate items by
/// cumulative weight rather than by index.
pub type WeightedSeq<S, W> = Sequence<S, Weighted<S, W>, Ring>;
