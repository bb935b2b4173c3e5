use crate::chunk::Bag as BagKind;
use crate::measure::Size;
use crate::seq::Sequence;

/// An unordered, compacting sequence: every end operation is `O(1)`
/// amortized because `push_front`/`pop_front` are aliases for
/// `push_back`/`pop_back` at the chunk level, so insertion order is not
/// preserved. Useful as a plain item pool where only membership and count
/// matter.
pub type Bag<S> = Sequence<S, Size<S>, BagKind>;
