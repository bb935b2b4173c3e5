//! Ready-made configurations of [`crate::seq::Sequence`]: the same chunk
//! tree engine, instantiated with the measurement policy and chunk shape
//! that give each collection its characteristic behavior. `Deque`,
//! `Stack`, `Bag`, and `WeightedSeq` are plain type aliases, the same way
//! this crate's segment-tree ancestor exposes `SegTreeSum`/`SegTreeMax` as
//! aliases over a shared generic engine. [`OrderedMap`] needs key-ordered
//! insert/erase on top of the engine, so it is a thin wrapper instead.

mod bag;
mod deque;
mod map;
mod stack;
mod weighted;

pub use bag::Bag;
pub use deque::Deque;
pub use map::OrderedMap;
pub use stack::Stack;
pub use weighted::WeightedSeq;
