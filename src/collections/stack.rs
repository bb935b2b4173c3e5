use crate::chunk::Stack as StackKind;
use crate::measure::Size;
use crate::seq::Sequence;

/// A sequence whose logical front is pinned to physical index zero in
/// each chunk: `push_back`/`pop_back` stay `O(1)` amortized, `push_front`/
/// `pop_front` cost `O(leaf_capacity)` per chunk touched. Suited to
/// workloads that only grow and shrink at one end but occasionally need
/// indexed access to the other.
pub type Stack<S> = Sequence<S, Size<S>, StackKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo_at_the_back() {
        let mut s: Stack<i32> = Stack::new();
        s.push_back(1);
        s.push_back(2);
        s.push_back(3);
        assert_eq!(s.pop_back(), Some(3));
        assert_eq!(s.pop_back(), Some(2));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn front_ops_preserve_order() {
        let mut s: Stack<i32> = Stack::new();
        s.push_back(2);
        s.push_front(1);
        s.push_front(0);
        assert_eq!((0..3).map(|i| *s.at(i)).collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}
