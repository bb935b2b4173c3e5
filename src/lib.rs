//! # chunked_seq
//!
//! A chunked, B-tree-shaped sequence: fixed-capacity circular-buffer
//! chunks at every level, a cached monoid measurement at every chunk, and
//! amortized `O(1)` push/pop at both ends with `O(log n)` indexed access,
//! split, and concatenation.
//!
//! The engine is [`seq::Sequence`], generic over what each item
//! "measures" to ([`measure::ItemMeasure`]) and how its leaves behave at
//! the ends ([`chunk::ChunkKind`]). [`collections`] wires up the common
//! configurations:
//!
//! - [`Deque`]: `O(1)` amortized push/pop at both ends, `O(log n)` `at`
//! - [`Stack`]: `O(1)` amortized push/pop at the back only
//! - [`Bag`]: unordered, `O(1)` amortized insertion and removal at either end
//! - [`WeightedSeq`]: split and search by cumulative weight rather than index
//! - [`OrderedMap`]: an associative container keyed by a client-supplied key
//!
//! ## Quick Start
//!
//! ```rust
//! use chunked_seq::Deque;
//!
//! let mut d: Deque<i32> = Deque::new();
//! d.push_back(1);
//! d.push_back(2);
//! d.push_front(0);
//! assert_eq!(d.len(), 3);
//! assert_eq!(d.pop_front(), Some(0));
//! assert_eq!((0..d.len()).map(|i| *d.at(i)).collect::<Vec<_>>(), vec![1, 2]);
//! ```
//!
//! ## Splitting by a custom measure
//!
//! ```rust
//! use chunked_seq::{WeightedSeq, Weigh};
//!
//! struct Len;
//! impl Weigh<&'static str> for Len {
//!     fn weight(item: &&'static str) -> i64 {
//!         item.len() as i64
//!     }
//! }
//!
//! let mut seq: WeightedSeq<&'static str, Len> = WeightedSeq::new();
//! for w in ["one", "two", "three", "four"] {
//!     seq.push_back(w);
//! }
//! let mut tail = WeightedSeq::new();
//! seq.split_by(|acc| *acc >= 6, &mut tail);
//! assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec!["one", "two"]);
//! ```
//!
//! ## Custom configurations
//!
//! [`seq::Sequence`] itself is public for configurations [`collections`]
//! doesn't cover, e.g. a plain index-addressable sequence with no bag or
//! map semantics:
//!
//! ```rust
//! use chunked_seq::{Sequence, Size, Ring};
//!
//! let mut s: Sequence<i32, Size<i32>, Ring> = Sequence::new();
//! s.push_back(10);
//! s.push_back(20);
//! assert_eq!(s.len(), 2);
//! assert_eq!(*s.at(1), 20);
//! ```
//!
//! ## Random-access cursor
//!
//! [`Sequence::cursor_front`]/[`Sequence::cursor_search_by`] (and the
//! `collections` equivalents) return a [`Cursor`], which remembers its
//! position so repeated single steps don't re-descend from the root:
//!
//! ```rust
//! use chunked_seq::Deque;
//!
//! let mut d: Deque<i32> = Deque::new();
//! for i in 0..5 {
//!     d.push_back(i);
//! }
//! let mut cursor = d.cursor_front().unwrap();
//! cursor.advance_by(2);
//! assert_eq!(*cursor.current(), 2);
//! assert_eq!(cursor.size(), 3);
//! ```
//!
//! ## Construction-time configuration
//!
//! Chunk capacities are the one place this crate returns a [`Result`]; see
//! [`ChunkConfig`] and [`ConfigError`].
//!
//! ## Design Philosophy
//!
//! Every container in this crate is the same engine instantiated
//! differently: a monoid-cached chunk tree parameterized by what an item
//! measures to and how its leaves treat their ends. New collections are
//! new measurement policies or chunk kinds, not new tree code.

pub mod chunk;
pub mod collections;
pub mod config;
pub mod error;
pub mod iter;
pub mod measure;
pub mod seq;
mod tree;

pub use chunk::{Bag as BagKind, ChunkKind, Ring, Stack as StackKind};
pub use collections::{Bag, Deque, OrderedMap, Stack, WeightedSeq};
pub use config::ChunkConfig;
pub use error::ConfigError;
pub use iter::{Cursor, Iter};
pub use measure::{
    ExtractKey, ItemMeasure, Measure, Measured, MinKey, Pair, Size, Trivial, Weigh, Weighted,
};
pub use seq::Sequence;
