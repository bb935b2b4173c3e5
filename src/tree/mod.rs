//! The weighted tree: a height-balanced tree of chunks, leaves holding
//! items and interior nodes holding chunks of child pointers.
//!
//! Every node, leaf or interior, is physically a [`Chunk`]. An interior
//! chunk's cached measurement is automatically the ⊕-fold of its
//! children's measurements, because `Box<Node<..>>` implements
//! [`Measured`] by delegating to the child's own cache (see the `Measured`
//! impl below) and `Chunk` already keeps its cache in sync with whatever
//! `Measured` values it holds. This is what lets the same [`Chunk`] type
//! serve as both the leaf storage and the interior "chunk of children"
//! storage the design notes describe.

use std::cmp::Ordering;

use crate::chunk::{Chunk, ChunkKind};
use crate::measure::{Item, ItemMeasure, Measured};

/// A node of the weighted tree: a leaf chunk of items, or an interior
/// chunk of child nodes.
pub enum Node<S, M: ItemMeasure<S>, K: ChunkKind> {
    Leaf(Chunk<Item<S>, M, K>),
    Interior(Chunk<Box<Node<S, M, K>>, M, K>),
}

impl<S, M: ItemMeasure<S>, K: ChunkKind> Measured<M> for Box<Node<S, M, K>> {
    fn cached_measure(&self) -> M::Value {
        match self.as_ref() {
            Node::Leaf(c) => c.measure(),
            Node::Interior(c) => c.measure(),
        }
    }
}

impl<S, M: ItemMeasure<S>, K: ChunkKind> Node<S, M, K> {
    fn measure(&self) -> M::Value {
        match self {
            Node::Leaf(c) => c.measure(),
            Node::Interior(c) => c.measure(),
        }
    }

    fn width(&self) -> usize {
        match self {
            Node::Leaf(c) => c.size(),
            Node::Interior(c) => c.size(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            Node::Leaf(c) => c.capacity(),
            Node::Interior(c) => c.capacity(),
        }
    }

    fn is_underflowing(&self) -> bool {
        match self {
            Node::Leaf(c) => c.is_underflowing(),
            Node::Interior(c) => c.is_underflowing(),
        }
    }
}

fn merge_nodes<S, M: ItemMeasure<S>, K: ChunkKind>(dst: &mut Box<Node<S, M, K>>, src: &mut Box<Node<S, M, K>>) {
    match (dst.as_mut(), src.as_mut()) {
        (Node::Leaf(d), Node::Leaf(s)) => d.concat(s),
        (Node::Interior(d), Node::Interior(s)) => d.concat(s),
        _ => unreachable!("siblings must be at the same height"),
    }
}

fn steal_back_to_front<S, M: ItemMeasure<S>, K: ChunkKind>(
    src: &mut Box<Node<S, M, K>>,
    dst: &mut Box<Node<S, M, K>>,
    n: usize,
) {
    match (src.as_mut(), dst.as_mut()) {
        (Node::Leaf(s), Node::Leaf(d)) => s.transfer_back_to_front(d, n),
        (Node::Interior(s), Node::Interior(d)) => s.transfer_back_to_front(d, n),
        _ => unreachable!("siblings must be at the same height"),
    }
}

fn steal_front_to_back<S, M: ItemMeasure<S>, K: ChunkKind>(
    src: &mut Box<Node<S, M, K>>,
    dst: &mut Box<Node<S, M, K>>,
    n: usize,
) {
    match (src.as_mut(), dst.as_mut()) {
        (Node::Leaf(s), Node::Leaf(d)) => s.transfer_front_to_back(d, n),
        (Node::Interior(s), Node::Interior(d)) => s.transfer_front_to_back(d, n),
        _ => unreachable!("siblings must be at the same height"),
    }
}

/// Repairs the last two entries of an interior chunk after the last one
/// was mutated in place and may now be underflowing: steals from its new
/// neighbor if that leaves both sides at or above half capacity, merges
/// the two together otherwise.
fn repair_last<S, M: ItemMeasure<S>, K: ChunkKind>(chunk: &mut Chunk<Box<Node<S, M, K>>, M, K>) {
    if chunk.size() < 2 {
        return;
    }
    let last_idx = chunk.size() - 1;
    if !chunk.at(last_idx).is_underflowing() {
        return;
    }
    let mut last = chunk.pop_back();
    let mut prev = chunk.pop_back();
    let last_w = last.width();
    if last_w == 0 {
        chunk.push_back(prev);
        return;
    }
    let prev_w = prev.width();
    let cap = prev.capacity();
    if prev_w + last_w <= cap {
        #[cfg(feature = "tracing")]
        tracing::trace!(prev_w, last_w, cap, "repair_last: merging underflowed node");
        merge_nodes(&mut prev, &mut last);
        chunk.push_back(prev);
    } else {
        let half = cap / 2;
        if last_w < half {
            #[cfg(feature = "tracing")]
            tracing::trace!(prev_w, last_w, cap, "repair_last: stealing to cover underflow");
            steal_back_to_front(&mut prev, &mut last, half - last_w);
        }
        chunk.push_back(prev);
        chunk.push_back(last);
    }
}

/// Mirror image of [`repair_last`] for the front of the chunk.
fn repair_first<S, M: ItemMeasure<S>, K: ChunkKind>(chunk: &mut Chunk<Box<Node<S, M, K>>, M, K>) {
    if chunk.size() < 2 {
        return;
    }
    if !chunk.at(0).is_underflowing() {
        return;
    }
    let mut first = chunk.pop_front();
    let mut second = chunk.pop_front();
    let first_w = first.width();
    if first_w == 0 {
        chunk.push_front(second);
        return;
    }
    let second_w = second.width();
    let cap = second.capacity();
    if first_w + second_w <= cap {
        #[cfg(feature = "tracing")]
        tracing::trace!(first_w, second_w, cap, "repair_first: merging underflowed node");
        merge_nodes(&mut first, &mut second);
        chunk.push_front(first);
    } else {
        let half = cap / 2;
        if first_w < half {
            #[cfg(feature = "tracing")]
            tracing::trace!(first_w, second_w, cap, "repair_first: stealing to cover underflow");
            steal_front_to_back(&mut second, &mut first, half - first_w);
        }
        chunk.push_front(second);
        chunk.push_front(first);
    }
}

fn push_back_rec<S, M: ItemMeasure<S>, K: ChunkKind>(
    node: &mut Node<S, M, K>,
    x: S,
    leaf_cap: usize,
    interior_cap: usize,
) -> Option<Box<Node<S, M, K>>> {
    match node {
        Node::Leaf(chunk) => {
            if !chunk.is_full() {
                chunk.push_back(Item(x));
                None
            } else {
                let mut sibling = Chunk::new(leaf_cap);
                sibling.push_back(Item(x));
                Some(Box::new(Node::Leaf(sibling)))
            }
        }
        Node::Interior(chunk) => {
            let last_idx = chunk.size() - 1;
            let overflow = push_back_rec(chunk.at_mut(last_idx), x, leaf_cap, interior_cap);
            chunk.refresh();
            match overflow {
                None => None,
                Some(sibling) => {
                    if !chunk.is_full() {
                        chunk.push_back(sibling);
                        None
                    } else {
                        let mut new_interior = Chunk::new(interior_cap);
                        new_interior.push_back(sibling);
                        Some(Box::new(Node::Interior(new_interior)))
                    }
                }
            }
        }
    }
}

fn push_front_rec<S, M: ItemMeasure<S>, K: ChunkKind>(
    node: &mut Node<S, M, K>,
    x: S,
    leaf_cap: usize,
    interior_cap: usize,
) -> Option<Box<Node<S, M, K>>> {
    match node {
        Node::Leaf(chunk) => {
            if !chunk.is_full() {
                chunk.push_front(Item(x));
                None
            } else {
                let mut sibling = Chunk::new(leaf_cap);
                sibling.push_front(Item(x));
                Some(Box::new(Node::Leaf(sibling)))
            }
        }
        Node::Interior(chunk) => {
            let overflow = push_front_rec(chunk.at_mut(0), x, leaf_cap, interior_cap);
            chunk.refresh();
            match overflow {
                None => None,
                Some(sibling) => {
                    if !chunk.is_full() {
                        chunk.push_front(sibling);
                        None
                    } else {
                        let mut new_interior = Chunk::new(interior_cap);
                        new_interior.push_front(sibling);
                        Some(Box::new(Node::Interior(new_interior)))
                    }
                }
            }
        }
    }
}

fn pop_back_rec<S, M: ItemMeasure<S>, K: ChunkKind>(node: &mut Node<S, M, K>) -> S {
    match node {
        Node::Leaf(chunk) => chunk.pop_back().0,
        Node::Interior(chunk) => {
            let last_idx = chunk.size() - 1;
            let result = pop_back_rec(chunk.at_mut(last_idx));
            chunk.refresh();
            repair_last(chunk);
            result
        }
    }
}

fn pop_front_rec<S, M: ItemMeasure<S>, K: ChunkKind>(node: &mut Node<S, M, K>) -> S {
    match node {
        Node::Leaf(chunk) => chunk.pop_front().0,
        Node::Interior(chunk) => {
            let result = pop_front_rec(chunk.at_mut(0));
            chunk.refresh();
            repair_first(chunk);
            result
        }
    }
}

fn search_by_rec<'a, S, M: ItemMeasure<S>, K: ChunkKind>(
    node: &'a Node<S, M, K>,
    acc: &mut M::Value,
    pred: &impl Fn(&M::Value) -> bool,
) -> Option<&'a S> {
    match node {
        Node::Leaf(chunk) => {
            for item in chunk.iter() {
                let cand = M::combine(acc, &item.cached_measure());
                if pred(&cand) {
                    return Some(&item.0);
                }
                *acc = cand;
            }
            None
        }
        Node::Interior(chunk) => {
            for j in 0..chunk.size() {
                let child = chunk.at(j);
                let cand = M::combine(acc, &child.measure());
                if pred(&cand) {
                    return search_by_rec(child, acc, pred);
                }
                *acc = cand;
            }
            None
        }
    }
}

/// Splits `node` (whose preceding prefix measure is `acc_before`) so that
/// every item for which the running ⊕-prefix first satisfies `pred`, and
/// everything after it, moves to the right half. Returns `(left, right)`;
/// either side may be empty (`None`).
fn split_node<S, M: ItemMeasure<S>, K: ChunkKind>(
    node: Box<Node<S, M, K>>,
    acc_before: &M::Value,
    pred: &impl Fn(&M::Value) -> bool,
) -> (Option<Box<Node<S, M, K>>>, Option<Box<Node<S, M, K>>>) {
    match *node {
        Node::Leaf(mut chunk) => {
            let mut local_acc = acc_before.clone();
            let mut split_idx = chunk.size();
            for (idx, item) in chunk.iter().enumerate() {
                local_acc = M::combine(&local_acc, &item.cached_measure());
                if pred(&local_acc) {
                    split_idx = idx;
                    break;
                }
            }
            let mut right_chunk = Chunk::new(chunk.capacity());
            chunk.split_at(split_idx, &mut right_chunk);
            let left = (!chunk.is_empty()).then(|| Box::new(Node::Leaf(chunk)));
            let right = (!right_chunk.is_empty()).then(|| Box::new(Node::Leaf(right_chunk)));
            (left, right)
        }
        Node::Interior(mut chunk) => {
            let n = chunk.size();
            let mut local_acc = acc_before.clone();
            let mut split_child = n;
            for j in 0..n {
                let cand = M::combine(&local_acc, &chunk.at(j).measure());
                if pred(&cand) {
                    split_child = j;
                    break;
                }
                local_acc = cand;
            }
            if split_child == n {
                let left = (!chunk.is_empty()).then(|| Box::new(Node::Interior(chunk)));
                return (left, None);
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(split_child, n, "split_node: straddling child located");
            let cap = chunk.capacity();
            let mut left_chunk: Chunk<Box<Node<S, M, K>>, M, K> = Chunk::new(cap);
            let mut right_chunk: Chunk<Box<Node<S, M, K>>, M, K> = Chunk::new(cap);
            for _ in 0..split_child {
                left_chunk.push_back(chunk.pop_front());
            }
            let straddling = chunk.pop_front();
            let remaining = chunk.size();
            chunk.transfer_front_to_back(&mut right_chunk, remaining);

            let (straddle_left, straddle_right) = split_node(straddling, &local_acc, pred);
            if let Some(sl) = straddle_left {
                left_chunk.push_back(sl);
            }
            if let Some(sr) = straddle_right {
                right_chunk.push_front(sr);
            }
            repair_last(&mut left_chunk);
            repair_first(&mut right_chunk);

            let left = (!left_chunk.is_empty()).then(|| Box::new(Node::Interior(left_chunk)));
            let right = (!right_chunk.is_empty()).then(|| Box::new(Node::Interior(right_chunk)));
            (left, right)
        }
    }
}

fn attach_children_back<S, M: ItemMeasure<S>, K: ChunkKind>(
    mut chunk: Chunk<Box<Node<S, M, K>>, M, K>,
    produced: Vec<Box<Node<S, M, K>>>,
    interior_cap: usize,
    height: usize,
) -> (Vec<Box<Node<S, M, K>>>, usize) {
    let room = chunk.capacity() - chunk.size();
    let mut produced = produced;
    if produced.len() <= room {
        for child in produced {
            chunk.push_back(child);
        }
        repair_last(&mut chunk);
        return (vec![Box::new(Node::Interior(chunk))], height);
    }
    let split = room;
    let spill: Vec<_> = produced.drain(split..).collect();
    for child in produced {
        chunk.push_back(child);
    }
    repair_last(&mut chunk);
    let mut sibling: Chunk<Box<Node<S, M, K>>, M, K> = Chunk::new(interior_cap);
    for child in spill {
        sibling.push_back(child);
    }
    (vec![Box::new(Node::Interior(chunk)), Box::new(Node::Interior(sibling))], height)
}

fn attach_children_front<S, M: ItemMeasure<S>, K: ChunkKind>(
    mut chunk: Chunk<Box<Node<S, M, K>>, M, K>,
    produced: Vec<Box<Node<S, M, K>>>,
    interior_cap: usize,
    height: usize,
) -> (Vec<Box<Node<S, M, K>>>, usize) {
    let room = chunk.capacity() - chunk.size();
    let mut produced = produced;
    if produced.len() <= room {
        while let Some(child) = produced.pop() {
            chunk.push_front(child);
        }
        repair_first(&mut chunk);
        return (vec![Box::new(Node::Interior(chunk))], height);
    }
    let split = produced.len() - room;
    let spill: Vec<_> = produced.drain(..split).collect();
    while let Some(child) = produced.pop() {
        chunk.push_front(child);
    }
    repair_first(&mut chunk);
    let mut sibling: Chunk<Box<Node<S, M, K>>, M, K> = Chunk::new(interior_cap);
    for child in spill {
        sibling.push_back(child);
    }
    (vec![Box::new(Node::Interior(sibling)), Box::new(Node::Interior(chunk))], height)
}

fn concat_rec<S, M: ItemMeasure<S>, K: ChunkKind>(
    left: Box<Node<S, M, K>>,
    h1: usize,
    right: Box<Node<S, M, K>>,
    h2: usize,
    interior_cap: usize,
) -> (Vec<Box<Node<S, M, K>>>, usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(h1, h2, "concat_rec: descending to equal height");
    match h1.cmp(&h2) {
        Ordering::Equal => {
            if h1 == 0 {
                let (Node::Leaf(mut lc), Node::Leaf(mut rc)) = (*left, *right) else {
                    unreachable!("equal-height nodes are both leaves or both interior")
                };
                if lc.size() + rc.size() <= lc.capacity() {
                    lc.concat(&mut rc);
                    (vec![Box::new(Node::Leaf(lc))], 0)
                } else {
                    (vec![Box::new(Node::Leaf(lc)), Box::new(Node::Leaf(rc))], 0)
                }
            } else {
                let (Node::Interior(mut lc), Node::Interior(mut rc)) = (*left, *right) else {
                    unreachable!("equal-height nodes are both leaves or both interior")
                };
                if lc.size() + rc.size() <= lc.capacity() {
                    lc.concat(&mut rc);
                    (vec![Box::new(Node::Interior(lc))], h1)
                } else {
                    (vec![Box::new(Node::Interior(lc)), Box::new(Node::Interior(rc))], h1)
                }
            }
        }
        Ordering::Greater => {
            let Node::Interior(mut lchunk) = *left else {
                unreachable!("a node taller than its concat partner must be interior")
            };
            let last = lchunk.pop_back();
            let (produced, produced_h) = concat_rec(last, h1 - 1, right, h2, interior_cap);
            debug_assert_eq!(produced_h, h1 - 1);
            attach_children_back(lchunk, produced, interior_cap, h1)
        }
        Ordering::Less => {
            let Node::Interior(mut rchunk) = *right else {
                unreachable!("a node taller than its concat partner must be interior")
            };
            let first = rchunk.pop_front();
            let (produced, produced_h) = concat_rec(left, h1, first, h2 - 1, interior_cap);
            debug_assert_eq!(produced_h, h2 - 1);
            attach_children_front(rchunk, produced, interior_cap, h2)
        }
    }
}

fn collect_rec<'a, S, M: ItemMeasure<S>, K: ChunkKind>(
    node: &'a Node<S, M, K>,
    out: &mut std::collections::VecDeque<&'a S>,
) {
    match node {
        Node::Leaf(chunk) => {
            for item in chunk.iter() {
                out.push_back(&item.0);
            }
        }
        Node::Interior(chunk) => {
            for j in 0..chunk.size() {
                collect_rec(chunk.at(j), out);
            }
        }
    }
}

fn tree_height<S, M: ItemMeasure<S>, K: ChunkKind>(node: &Node<S, M, K>) -> usize {
    match node {
        Node::Leaf(_) => 0,
        Node::Interior(chunk) => 1 + tree_height(chunk.at(0)),
    }
}

/// The weighted tree itself: a height-balanced chunk tree parameterized
/// by item type `S`, measurement policy `M`, and chunk shape `K`.
pub struct Tree<S, M: ItemMeasure<S>, K: ChunkKind> {
    root: Box<Node<S, M, K>>,
    height: usize,
    leaf_cap: usize,
    interior_cap: usize,
}

impl<S, M: ItemMeasure<S>, K: ChunkKind> Tree<S, M, K> {
    pub fn new(leaf_cap: usize, interior_cap: usize) -> Self {
        Self {
            root: Box::new(Node::Leaf(Chunk::new(leaf_cap))),
            height: 0,
            leaf_cap,
            interior_cap,
        }
    }

    fn placeholder(&self) -> Box<Node<S, M, K>> {
        Box::new(Node::Leaf(Chunk::new(self.leaf_cap)))
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0 && matches!(self.root.as_ref(), Node::Leaf(c) if c.is_empty())
    }

    pub fn measure(&self) -> M::Value {
        self.root.measure()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Exposes the root node to the cursor machinery in [`crate::iter`],
    /// which needs to walk the tree's actual node structure to maintain a
    /// persistent path, rather than re-searching from scratch per step.
    pub(crate) fn root_node(&self) -> &Node<S, M, K> {
        &self.root
    }

    pub fn iter(&self) -> crate::iter::Iter<'_, S> {
        let mut out = std::collections::VecDeque::new();
        collect_rec(&self.root, &mut out);
        crate::iter::Iter::new(out)
    }

    pub fn push_back(&mut self, x: S) {
        if let Some(sibling) = push_back_rec(&mut self.root, x, self.leaf_cap, self.interior_cap) {
            let old_root = std::mem::replace(&mut self.root, self.placeholder());
            let mut new_root = Chunk::new(self.interior_cap);
            new_root.push_back(old_root);
            new_root.push_back(sibling);
            self.root = Box::new(Node::Interior(new_root));
            self.height += 1;
        }
    }

    pub fn push_front(&mut self, x: S) {
        if let Some(sibling) = push_front_rec(&mut self.root, x, self.leaf_cap, self.interior_cap) {
            let old_root = std::mem::replace(&mut self.root, self.placeholder());
            let mut new_root = Chunk::new(self.interior_cap);
            new_root.push_back(sibling);
            new_root.push_back(old_root);
            self.root = Box::new(Node::Interior(new_root));
            self.height += 1;
        }
    }

    fn collapse(&mut self) {
        while self.height > 0 {
            let single = matches!(self.root.as_ref(), Node::Interior(c) if c.size() == 1);
            if !single {
                break;
            }
            let old_root = std::mem::replace(&mut self.root, self.placeholder());
            let Node::Interior(mut chunk) = *old_root else {
                unreachable!()
            };
            self.root = chunk.pop_back();
            self.height -= 1;
        }
    }

    /// # Panics
    /// Debug-asserts the tree is non-empty.
    pub fn pop_back(&mut self) -> S {
        debug_assert!(!self.is_empty(), "pop_back on an empty tree");
        let result = pop_back_rec(&mut self.root);
        self.collapse();
        result
    }

    /// # Panics
    /// Debug-asserts the tree is non-empty.
    pub fn pop_front(&mut self) -> S {
        debug_assert!(!self.is_empty(), "pop_front on an empty tree");
        let result = pop_front_rec(&mut self.root);
        self.collapse();
        result
    }

    /// Locates the first position at which `pred` becomes true over the
    /// running ⊕-prefix and returns the item there, or `None` if `pred`
    /// never becomes true (including on an empty tree).
    pub fn search_by(&self, pred: impl Fn(&M::Value) -> bool) -> Option<&S> {
        let mut acc = M::identity();
        search_by_rec(&self.root, &mut acc, &pred)
    }

    /// Splits `self` so that the first item for which `pred` becomes true
    /// over the running ⊕-prefix, and everything after it, move to
    /// `other`. `other` must be empty.
    pub fn split_by(&mut self, pred: impl Fn(&M::Value) -> bool, other: &mut Tree<S, M, K>) {
        assert!(other.is_empty(), "split_by requires an empty destination");
        if self.is_empty() {
            return;
        }
        let root = std::mem::replace(&mut self.root, self.placeholder());
        let (left, right) = split_node(root, &M::identity(), &pred);
        self.root = left.unwrap_or_else(|| Box::new(Node::Leaf(Chunk::new(self.leaf_cap))));
        self.height = tree_height(&self.root);
        self.collapse();
        if let Some(r) = right {
            other.root = r;
            other.height = tree_height(&other.root);
            other.collapse();
        }
    }

    /// Absorbs `other` onto the end of `self`, leaving `other` empty.
    pub fn concat(&mut self, other: &mut Tree<S, M, K>) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            std::mem::swap(self, other);
            return;
        }
        let h1 = self.height;
        let h2 = other.height;
        let left_root = std::mem::replace(&mut self.root, self.placeholder());
        let right_root = std::mem::replace(&mut other.root, other.placeholder());
        let (mut produced, produced_h) =
            concat_rec(left_root, h1, right_root, h2, self.interior_cap);
        if produced.len() == 1 {
            self.root = produced.pop().unwrap();
            self.height = produced_h;
        } else {
            let mut new_root: Chunk<Box<Node<S, M, K>>, M, K> = Chunk::new(self.interior_cap);
            for child in produced {
                new_root.push_back(child);
            }
            self.root = Box::new(Node::Interior(new_root));
            self.height = produced_h + 1;
        }
        other.root = Box::new(Node::Leaf(Chunk::new(other.leaf_cap)));
        other.height = 0;
    }
}

fn set_rec<S, K: ChunkKind>(node: &mut Node<S, crate::measure::Size<S>, K>, idx: usize, x: S) -> S {
    match node {
        Node::Leaf(chunk) => chunk.set(idx, Item(x)).0,
        Node::Interior(chunk) => {
            let mut acc = 0usize;
            for j in 0..chunk.size() {
                let w = chunk.at(j).measure();
                if acc + w > idx {
                    let old = set_rec(chunk.at_mut(j), idx - acc, x);
                    chunk.refresh();
                    return old;
                }
                acc += w;
            }
            panic!("index out of range")
        }
    }
}

impl<S, K: ChunkKind> Tree<S, crate::measure::Size<S>, K> {
    /// Indexed access, available when the tree is configured with the
    /// size-measure policy.
    pub fn at(&self, i: usize) -> &S {
        self.search_by(|acc| *acc > i)
            .expect("index out of range")
    }

    pub fn size(&self) -> usize {
        self.measure()
    }

    pub fn split_at(&mut self, i: usize, other: &mut Tree<S, crate::measure::Size<S>, K>) {
        self.split_by(|acc| *acc > i, other);
    }

    /// Replaces the item at `i`, returning the previous one.
    pub fn set(&mut self, i: usize, x: S) -> S {
        assert!(i < self.size(), "set index out of range");
        set_rec(&mut self.root, i, x)
    }
}
