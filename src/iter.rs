//! Iteration over a sequence's items, in two forms.
//!
//! [`Iter`] is a plain, eager `DoubleEndedIterator`/`ExactSizeIterator`
//! built by a single in-order walk of the tree's leaves (`O(n)`, not
//! amortized `O(1)` per step) and served from a `VecDeque` of borrowed
//! references afterwards. It is what `for`-loops and iterator adapters want.
//!
//! [`Cursor`] is the random-access companion: it holds a path from the
//! tree's root down to a chunk and an index within that chunk, plus a
//! cached running prefix measurement, so `size()` (under a size-like
//! policy), single-step `advance`/`retreat`, and re-descending via
//! `search_by` are all available without walking the whole sequence. This
//! trades the raw-pointer, zero-copy segment view a finger-tree cursor
//! could expose for plain borrowed references; see `DESIGN.md` for why no
//! `unsafe` is used here.

use std::collections::VecDeque;

use crate::chunk::{Chunk, ChunkKind};
use crate::measure::{Item, ItemMeasure, Measured, Size};
use crate::tree::{Node, Tree};

/// A double-ended, exact-size iterator over a sequence's items.
pub struct Iter<'a, S> {
    items: VecDeque<&'a S>,
}

impl<'a, S> Iter<'a, S> {
    pub(crate) fn new(items: VecDeque<&'a S>) -> Self {
        Self { items }
    }
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<'a, S> DoubleEndedIterator for Iter<'a, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.pop_back()
    }
}

impl<'a, S> ExactSizeIterator for Iter<'a, S> {
    fn len(&self) -> usize {
        self.items.len()
    }
}

type InteriorChunk<'a, S, M, K> = &'a Chunk<Box<Node<S, M, K>>, M, K>;

/// Derefs a child pointer down through its `Box` for descent; a thin
/// wrapper so the call sites below read as plain tree walks.
fn child_node<S, M: ItemMeasure<S>, K: ChunkKind>(b: &Box<Node<S, M, K>>) -> &Node<S, M, K> {
    b
}

/// A path-and-prefix cursor over a sequence's items.
///
/// `path[i]` records the interior chunk visited at depth `i` and the index
/// of the child on the path through it; `leaf`/`leaf_idx` locate the
/// current item; `prefix` is the combined measure of every item strictly
/// before the current one. `advance`/`retreat` update all of this in place
/// instead of re-descending from the root.
pub struct Cursor<'a, S, M: ItemMeasure<S>, K: ChunkKind> {
    path: Vec<(InteriorChunk<'a, S, M, K>, usize)>,
    leaf: &'a Chunk<Item<S>, M, K>,
    leaf_idx: usize,
    prefix: M::Value,
}

impl<'a, S, M: ItemMeasure<S>, K: ChunkKind> Cursor<'a, S, M, K> {
    /// Builds a cursor at the leftmost item of `tree`, or `None` if `tree`
    /// is empty.
    pub(crate) fn front(tree: &'a Tree<S, M, K>) -> Option<Self> {
        let mut path = Vec::new();
        let mut node = tree.root_node();
        loop {
            match node {
                Node::Leaf(chunk) => {
                    if chunk.is_empty() {
                        return None;
                    }
                    return Some(Self {
                        path,
                        leaf: chunk,
                        leaf_idx: 0,
                        prefix: M::identity(),
                    });
                }
                Node::Interior(chunk) => {
                    path.push((chunk, 0));
                    node = child_node(chunk.at(0));
                }
            }
        }
    }

    /// Builds a cursor at the rightmost item of `tree`, or `None` if `tree`
    /// is empty.
    pub(crate) fn back(tree: &'a Tree<S, M, K>) -> Option<Self> {
        let mut path = Vec::new();
        let mut node = tree.root_node();
        let mut prefix = M::identity();
        loop {
            match node {
                Node::Leaf(chunk) => {
                    if chunk.is_empty() {
                        return None;
                    }
                    let last = chunk.size() - 1;
                    for item in chunk.iter().take(last) {
                        prefix = M::combine(&prefix, &item.cached_measure());
                    }
                    return Some(Self {
                        path,
                        leaf: chunk,
                        leaf_idx: last,
                        prefix,
                    });
                }
                Node::Interior(chunk) => {
                    let last = chunk.size() - 1;
                    for j in 0..last {
                        prefix = M::combine(&prefix, &chunk.at(j).cached_measure());
                    }
                    path.push((chunk, last));
                    node = child_node(chunk.at(last));
                }
            }
        }
    }

    /// Descends `tree` from the root, locating the first position at which
    /// `pred` becomes true over the running ⊕-prefix, the same rule
    /// [`Tree::search_by`] uses, but building a path the cursor can then
    /// step from. `None` if `pred` never becomes true.
    pub(crate) fn search_by(tree: &'a Tree<S, M, K>, pred: &impl Fn(&M::Value) -> bool) -> Option<Self> {
        let mut path = Vec::new();
        let mut node = tree.root_node();
        let mut acc = M::identity();
        loop {
            match node {
                Node::Leaf(chunk) => {
                    let mut local = acc;
                    for (idx, item) in chunk.iter().enumerate() {
                        let cand = M::combine(&local, &item.cached_measure());
                        if pred(&cand) {
                            return Some(Self {
                                path,
                                leaf: chunk,
                                leaf_idx: idx,
                                prefix: local,
                            });
                        }
                        local = cand;
                    }
                    return None;
                }
                Node::Interior(chunk) => {
                    let mut found = None;
                    for j in 0..chunk.size() {
                        let cand = M::combine(&acc, &chunk.at(j).cached_measure());
                        if pred(&cand) {
                            found = Some(j);
                            break;
                        }
                        acc = cand;
                    }
                    match found {
                        Some(j) => {
                            path.push((chunk, j));
                            node = child_node(chunk.at(j));
                        }
                        None => return None,
                    }
                }
            }
        }
    }

    /// The item the cursor currently addresses.
    pub fn current(&self) -> &'a S {
        &self.leaf.at(self.leaf_idx).0
    }

    /// The combined measure of every item strictly before the current one.
    pub fn prefix(&self) -> M::Value {
        self.prefix.clone()
    }

    /// Moves to the next item, in-order. Returns `false` (leaving the
    /// cursor parked on the last item) if already at the end.
    pub fn advance(&mut self) -> bool {
        let here = self.leaf.at(self.leaf_idx).cached_measure();
        if self.leaf_idx + 1 < self.leaf.size() {
            self.prefix = M::combine(&self.prefix, &here);
            self.leaf_idx += 1;
            return true;
        }
        self.prefix = M::combine(&self.prefix, &here);
        while let Some((chunk, idx)) = self.path.pop() {
            if idx + 1 < chunk.size() {
                self.path.push((chunk, idx + 1));
                let mut node = child_node(chunk.at(idx + 1));
                loop {
                    match node {
                        Node::Leaf(c) => {
                            self.leaf = c;
                            self.leaf_idx = 0;
                            return true;
                        }
                        Node::Interior(c) => {
                            self.path.push((c, 0));
                            node = child_node(c.at(0));
                        }
                    }
                }
            }
        }
        false
    }

    /// Moves to the previous item, in-order. Returns `false` (leaving the
    /// cursor parked on the first item) if already at the start.
    pub fn retreat(&mut self) -> bool {
        if self.leaf_idx > 0 {
            self.leaf_idx -= 1;
            self.recompute_prefix();
            return true;
        }
        while let Some((chunk, idx)) = self.path.pop() {
            if idx > 0 {
                self.path.push((chunk, idx - 1));
                let mut node = child_node(chunk.at(idx - 1));
                loop {
                    match node {
                        Node::Leaf(c) => {
                            self.leaf = c;
                            self.leaf_idx = c.size() - 1;
                            self.recompute_prefix();
                            return true;
                        }
                        Node::Interior(c) => {
                            let last = c.size() - 1;
                            self.path.push((c, last));
                            node = child_node(c.at(last));
                        }
                    }
                }
            }
        }
        false
    }

    /// Recomputes `prefix` from scratch by folding the measures of every
    /// left sibling along the current path plus every leaf item before
    /// `leaf_idx`. `retreat` needs this because subtracting the measure of
    /// the item just stepped past (as `advance` does by adding) would
    /// require `M` to be a group; folding forward from the path is correct
    /// for a monoid alone, at the cost of making `retreat` `O(log n · K)`
    /// instead of `O(1)` amortized like `advance`.
    fn recompute_prefix(&mut self) {
        let mut acc = M::identity();
        for (chunk, idx) in &self.path {
            for j in 0..*idx {
                acc = M::combine(&acc, &chunk.at(j).cached_measure());
            }
        }
        for item in self.leaf.iter().take(self.leaf_idx) {
            acc = M::combine(&acc, &item.cached_measure());
        }
        self.prefix = acc;
    }

    /// Advances by `k` positions (or as many as exist), returning the
    /// number of steps actually taken.
    pub fn advance_by(&mut self, k: usize) -> usize {
        let mut taken = 0;
        while taken < k && self.advance() {
            taken += 1;
        }
        taken
    }

    /// Retreats by `k` positions (or as many as exist), returning the
    /// number of steps actually taken.
    pub fn retreat_by(&mut self, k: usize) -> usize {
        let mut taken = 0;
        while taken < k && self.retreat() {
            taken += 1;
        }
        taken
    }

    /// The logical bounds of the contiguous chunk enclosing the current
    /// item: `(begin, middle, end)` where `middle` is the index the cursor
    /// addresses and `[begin, end)` is the full range of the current leaf.
    /// A literal zero-copy pointer segment would additionally need to
    /// distinguish the (at most two) physically contiguous ranges a
    /// wrapped ring-buffer chunk is split across; this crate does not
    /// expose that split publicly (see `DESIGN.md`), so the whole leaf is
    /// the reported segment.
    pub fn get_segment(&self) -> (usize, usize, usize) {
        (0, self.leaf_idx, self.leaf.size())
    }
}

impl<'a, S, M: ItemMeasure<S>, K: ChunkKind> PartialEq for Cursor<'a, S, M, K> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.leaf, other.leaf) && self.leaf_idx == other.leaf_idx
    }
}

impl<'a, S, K: ChunkKind> Cursor<'a, S, Size<S>, K> {
    /// Under the size-measure policy, the position's 1-based index: `i + 1`
    /// for a cursor parked at logical index `i`.
    pub fn size(&self) -> usize {
        self.prefix + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::Ring;
    use crate::measure::Size;

    type IntTree = Tree<i32, Size<i32>, Ring>;

    #[test]
    fn cursor_front_advances_in_order() {
        let mut t: IntTree = Tree::new(4, 4);
        for i in 0..12 {
            t.push_back(i);
        }
        let mut cur = Cursor::front(&t).unwrap();
        let mut seen = vec![*cur.current()];
        while cur.advance() {
            seen.push(*cur.current());
        }
        assert_eq!(seen, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn cursor_back_retreats_in_order() {
        let mut t: IntTree = Tree::new(4, 4);
        for i in 0..12 {
            t.push_back(i);
        }
        let mut cur = Cursor::back(&t).unwrap();
        let mut seen = vec![*cur.current()];
        while cur.retreat() {
            seen.push(*cur.current());
        }
        seen.reverse();
        assert_eq!(seen, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn cursor_size_matches_position_plus_one() {
        let mut t: IntTree = Tree::new(4, 4);
        for i in 0..20 {
            t.push_back(i);
        }
        let mut cur = Cursor::front(&t).unwrap();
        let mut i = 0;
        loop {
            assert_eq!(cur.size(), i + 1);
            if !cur.advance() {
                break;
            }
            i += 1;
        }
    }

    #[test]
    fn cursor_search_by_lands_on_first_true_position() {
        let mut t: IntTree = Tree::new(4, 4);
        for i in 0..20 {
            t.push_back(i);
        }
        let cur = Cursor::search_by(&t, &|acc: &usize| *acc > 9).unwrap();
        assert_eq!(*cur.current(), 9);
        assert_eq!(cur.size(), 10);
    }

    #[test]
    fn get_segment_reports_leaf_local_bounds() {
        let mut t: IntTree = Tree::new(4, 4);
        for i in 0..4 {
            t.push_back(i);
        }
        let cur = Cursor::front(&t).unwrap();
        assert_eq!(cur.get_segment(), (0, 0, 4));
    }

    #[test]
    fn advance_by_and_retreat_by_skip_several_steps() {
        let mut t: IntTree = Tree::new(4, 4);
        for i in 0..30 {
            t.push_back(i);
        }
        let mut cur = Cursor::front(&t).unwrap();
        let taken = cur.advance_by(10);
        assert_eq!(taken, 10);
        assert_eq!(*cur.current(), 10);
        let back = cur.retreat_by(3);
        assert_eq!(back, 3);
        assert_eq!(*cur.current(), 7);
    }
}
