//! The cached-measurement framework.
//!
//! Every chunk and tree node in this crate caches a *measurement*: a value
//! summarizing, under an associative combining operation, every item it
//! transitively contains. [`Measure`] is the algebra `(T, ⊕, I)` (a monoid,
//! optionally a group); [`ItemMeasure`] supplies the per-item function
//! `m: S -> T` that seeds the algebra for a concrete item type.
//!
//! This mirrors the crate's own `SegTreeSpec` / `LazySegTreeSpec` pattern
//! (a small spec trait parameterizing a generic tree) one level further:
//! here the spec is reusable across completely different containers
//! (deque, bag, weighted sequence, ordered map) rather than tied to one
//! tree shape.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// An associative algebra `(Value, combine, identity)` used to summarize a
/// sequence of items.
///
/// `combine` must be associative: `combine(a, combine(b, c)) == combine(combine(a, b), c)`.
/// Commutativity is not required. Implementations that are also a group
/// (i.e. every value has an inverse under `combine`) should override
/// [`Measure::HAS_INVERSE`] and [`Measure::inverse`] so that the tree layer
/// can repair caches in O(1) instead of recomputing them from children.
pub trait Measure {
    /// The cached measurement type.
    type Value: Clone;

    /// The identity element: `combine(identity(), x) == combine(x, identity()) == x`.
    fn identity() -> Self::Value;

    /// The associative combining operation, `a ⊕ b`.
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value;

    /// Whether [`Measure::inverse`] is implemented. Defaults to `false`.
    const HAS_INVERSE: bool = false;

    /// The group inverse, `⊖a`, such that `combine(a, inverse(a)) == identity()`.
    ///
    /// Only called when `HAS_INVERSE` is `true`; the default panics.
    fn inverse(_a: &Self::Value) -> Self::Value {
        panic!("Measure::inverse called without HAS_INVERSE support")
    }
}

/// Extends a [`Measure`] with the per-item function `m: S -> Value` needed
/// to seed the algebra from a concrete item type `S`.
pub trait ItemMeasure<S>: Measure {
    /// The measure of a single item, `m(x)`.
    fn measure_item(item: &S) -> Self::Value;

    /// The measure of a contiguous run of items, `ṁ(b, e) = m(b[0]) ⊕ ... ⊕ m(b[n-1])`.
    ///
    /// The default folds left-to-right using [`Measure::combine`]; policies
    /// with a cheaper closed form may override this.
    fn measure_slice(items: &[S]) -> Self::Value {
        let mut acc = Self::identity();
        for item in items {
            acc = Self::combine(&acc, &Self::measure_item(item));
        }
        acc
    }
}

/// A type whose cached measurement under `M` can be read without
/// recomputation. Implemented by [`Item`] (for leaf-level chunk contents)
/// and, separately, by tree nodes whose measurement is already cached.
/// This is the "payload with measure" abstraction, instantiated twice to
/// realize the bootstrapped recursive tree without a literally recursive
/// generic type.
pub trait Measured<M: Measure> {
    /// The already-known (or freshly computed) measurement of `self`.
    fn cached_measure(&self) -> M::Value;
}

/// Newtype wrapping a leaf-level item so it can implement [`Measured`]
/// without a blanket impl over an unconstrained `S` that would overlap
/// with the tree-node impl of the same trait.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item<S>(pub S);

impl<S, M: ItemMeasure<S>> Measured<M> for Item<S> {
    fn cached_measure(&self) -> M::Value {
        M::measure_item(&self.0)
    }
}

/// Trivial policy: every item measures to the unit value. Used when no
/// measurement is needed beyond "this chunk holds some items" (e.g. a bag
/// with no size tracking).
pub struct Trivial<S>(PhantomData<S>);

impl<S> Measure for Trivial<S> {
    type Value = ();
    fn identity() -> Self::Value {}
    fn combine(_a: &Self::Value, _b: &Self::Value) -> Self::Value {}
}

impl<S> ItemMeasure<S> for Trivial<S> {
    fn measure_item(_item: &S) -> Self::Value {}
}

/// Size policy: every item measures to `1`; the combined measure of a
/// region is its length. This is the policy used by `Deque`, `Stack`, and
/// `Bag` to support `size()` and `at(i)`.
pub struct Size<S>(PhantomData<S>);

impl<S> Measure for Size<S> {
    type Value = usize;
    fn identity() -> Self::Value {
        0
    }
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        a + b
    }
    // usize has no additive inverse, so this policy is a monoid only: the
    // chunk layer recomputes the cache from the remaining live items on
    // every pop instead of subtracting. `Weighted` below is the group
    // version of the same policy, over `i64`.
}

impl<S> ItemMeasure<S> for Size<S> {
    fn measure_item(_item: &S) -> Self::Value {
        1
    }
    fn measure_slice(items: &[S]) -> Self::Value {
        items.len()
    }
}

/// Weighted policy: each item contributes a client-supplied `i64` weight.
/// `W` is a zero-sized type implementing [`Weigh`] to avoid threading a
/// closure value through the tree's type parameters.
pub trait Weigh<S> {
    fn weight(item: &S) -> i64;
}

pub struct Weighted<S, W: Weigh<S>>(PhantomData<(S, W)>);

impl<S, W: Weigh<S>> Measure for Weighted<S, W> {
    type Value = i64;
    fn identity() -> Self::Value {
        0
    }
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        a + b
    }
    const HAS_INVERSE: bool = true;
    fn inverse(a: &Self::Value) -> Self::Value {
        -a
    }
}

impl<S, W: Weigh<S>> ItemMeasure<S> for Weighted<S, W> {
    fn measure_item(item: &S) -> Self::Value {
        W::weight(item)
    }
}

/// Product policy: combines two independent measures `A` and `B` into a
/// pair, e.g. tracking size *and* weight simultaneously. A group iff both
/// component policies are.
pub struct Pair<S, A: ItemMeasure<S>, B: ItemMeasure<S>>(PhantomData<(S, A, B)>);

impl<S, A: ItemMeasure<S>, B: ItemMeasure<S>> Measure for Pair<S, A, B> {
    type Value = (A::Value, B::Value);
    fn identity() -> Self::Value {
        (A::identity(), B::identity())
    }
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        (A::combine(&a.0, &b.0), B::combine(&a.1, &b.1))
    }
    const HAS_INVERSE: bool = A::HAS_INVERSE && B::HAS_INVERSE;
    fn inverse(a: &Self::Value) -> Self::Value {
        (A::inverse(&a.0), B::inverse(&a.1))
    }
}

impl<S, A: ItemMeasure<S>, B: ItemMeasure<S>> ItemMeasure<S> for Pair<S, A, B> {
    fn measure_item(item: &S) -> Self::Value {
        (A::measure_item(item), B::measure_item(item))
    }
}

/// Min-key policy: each item measures to `Some(key(item))`; the combined
/// measure of a region is the smallest key seen (or `None` for an empty
/// region). Backs the associative-map configuration, where the tree is
/// kept ordered descending by key and `split_by` locates a key by
/// comparing against the running minimum.
pub trait ExtractKey<S> {
    type Key: Ord + Clone;
    fn key(item: &S) -> Self::Key;
}

pub struct MinKey<S, X: ExtractKey<S>>(PhantomData<(S, X)>);

impl<S, X: ExtractKey<S>> Measure for MinKey<S, X> {
    type Value = Option<X::Key>;
    fn identity() -> Self::Value {
        None
    }
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        match (a, b) {
            (None, other) => other.clone(),
            (other, None) => other.clone(),
            (Some(x), Some(y)) => Some(if matches!(x.cmp(y), Ordering::Less | Ordering::Equal) {
                x.clone()
            } else {
                y.clone()
            }),
        }
    }
}

impl<S, X: ExtractKey<S>> ItemMeasure<S> for MinKey<S, X> {
    fn measure_item(item: &S) -> Self::Value {
        Some(X::key(item))
    }
}
