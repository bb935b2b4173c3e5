//! The public sequence type: a thin, measure-generic facade over
//! [`Tree`], the piece that actually keeps the chunk-tree invariants.

use crate::chunk::ChunkKind;
use crate::config::ChunkConfig;
use crate::iter::{Cursor, Iter};
use crate::measure::{ItemMeasure, Size};
use crate::tree::Tree;

/// A chunked sequence of `S` under measurement policy `M` and chunk shape
/// `K`. See [`crate::collections`] for the common ready-made
/// configurations (deque, stack, bag, weighted sequence, ordered map).
pub struct Sequence<S, M: ItemMeasure<S>, K: ChunkKind> {
    tree: Tree<S, M, K>,
}

impl<S, M: ItemMeasure<S>, K: ChunkKind> Sequence<S, M, K> {
    pub fn new() -> Self {
        Self::with_config(ChunkConfig::default())
    }

    pub fn with_config(config: ChunkConfig) -> Self {
        Self {
            tree: Tree::new(config.leaf_capacity, config.interior_capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The current combined measurement of every item, `m(0) ⊕ ... ⊕ m(n-1)`.
    pub fn measure(&self) -> M::Value {
        self.tree.measure()
    }

    pub fn push_back(&mut self, x: S) {
        self.tree.push_back(x);
    }

    pub fn push_front(&mut self, x: S) {
        self.tree.push_front(x);
    }

    pub fn pop_back(&mut self) -> Option<S> {
        if self.is_empty() {
            None
        } else {
            Some(self.tree.pop_back())
        }
    }

    pub fn pop_front(&mut self) -> Option<S> {
        if self.is_empty() {
            None
        } else {
            Some(self.tree.pop_front())
        }
    }

    /// Returns the item at the first position where `pred` becomes true
    /// over the running ⊕-prefix.
    pub fn search_by(&self, pred: impl Fn(&M::Value) -> bool) -> Option<&S> {
        self.tree.search_by(pred)
    }

    /// Splits `self` at the first position where `pred` becomes true over
    /// the running ⊕-prefix, moving everything from there on into `other`.
    pub fn split_by(&mut self, pred: impl Fn(&M::Value) -> bool, other: &mut Self) {
        self.tree.split_by(pred, &mut other.tree);
    }

    /// Appends `other` onto the end of `self`, leaving `other` empty.
    pub fn concat(&mut self, other: &mut Self) {
        self.tree.concat(&mut other.tree);
    }

    pub fn iter(&self) -> Iter<'_, S> {
        self.tree.iter()
    }

    /// A random-access cursor parked on the first item, or `None` if empty.
    pub fn cursor_front(&self) -> Option<Cursor<'_, S, M, K>> {
        Cursor::front(&self.tree)
    }

    /// A random-access cursor parked on the last item, or `None` if empty.
    pub fn cursor_back(&self) -> Option<Cursor<'_, S, M, K>> {
        Cursor::back(&self.tree)
    }

    /// A random-access cursor parked at the first position where `pred`
    /// becomes true over the running ⊕-prefix, or `None` if it never does.
    pub fn cursor_search_by(&self, pred: impl Fn(&M::Value) -> bool) -> Option<Cursor<'_, S, M, K>> {
        Cursor::search_by(&self.tree, &pred)
    }
}

impl<S, M: ItemMeasure<S>, K: ChunkKind> Default for Sequence<S, M, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S, M: ItemMeasure<S>, K: ChunkKind> IntoIterator for &'a Sequence<S, M, K> {
    type Item = &'a S;
    type IntoIter = Iter<'a, S>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S, K: ChunkKind> Sequence<S, Size<S>, K> {
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn at(&self, i: usize) -> &S {
        self.tree.at(i)
    }

    pub fn set(&mut self, i: usize, x: S) -> S {
        self.tree.set(i, x)
    }

    pub fn split_at(&mut self, i: usize, other: &mut Self) {
        self.tree.split_at(i, &mut other.tree);
    }

    /// Grows or shrinks `self` to exactly `n` items, padding new entries
    /// with clones of `value` or dropping from the back.
    pub fn resize(&mut self, n: usize, value: S)
    where
        S: Clone,
    {
        while self.len() < n {
            self.push_back(value.clone());
        }
        while self.len() > n {
            self.pop_back();
        }
    }
}
