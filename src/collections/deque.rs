use crate::chunk::Ring;
use crate::measure::Size;
use crate::seq::Sequence;

/// A double-ended sequence with `O(1)` amortized push/pop at both ends
/// and `O(log n)` indexed access, split, and concatenation.
pub type Deque<S> = Sequence<S, Size<S>, Ring>;
