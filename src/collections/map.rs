use crate::chunk::Ring;
use crate::config::ChunkConfig;
use crate::measure::{ExtractKey, MinKey};
use crate::seq::Sequence;

/// An associative container keyed by `X::Key`, built on the same chunk
/// tree as every other collection in this crate. Items are kept in
/// *descending* key order internally: under that order the running
/// prefix-minimum after including position `i` is exactly the key at
/// position `i`, so `split_by` on "running minimum has dropped to or below
/// `key`" lands precisely at the first entry whose key is `<= key`,
/// giving `insert`/`lookup`/`erase` their O(log n) split point without a
/// dedicated comparison tree.
pub struct OrderedMap<S, X: ExtractKey<S>> {
    seq: Sequence<S, MinKey<S, X>, Ring>,
    config: ChunkConfig,
}

impl<S, X: ExtractKey<S>> OrderedMap<S, X> {
    pub fn new() -> Self {
        Self::with_config(ChunkConfig::default())
    }

    pub fn with_config(config: ChunkConfig) -> Self {
        Self {
            seq: Sequence::with_config(config),
            config,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    fn locate(&mut self, key: &X::Key, other: &mut Sequence<S, MinKey<S, X>, Ring>) {
        let key = key.clone();
        self.seq
            .split_by(move |acc| matches!(acc, Some(k) if *k <= key), other);
    }

    /// Inserts `item`, replacing any existing entry with the same key.
    /// Returns the replaced item, if any.
    pub fn insert(&mut self, item: S) -> Option<S> {
        let key = X::key(&item);
        let mut right = Sequence::with_config(self.config);
        self.locate(&key, &mut right);

        let replaced = match right.pop_front() {
            Some(front) if X::key(&front) == key => Some(front),
            Some(front) => {
                right.push_front(front);
                None
            }
            None => None,
        };

        self.seq.push_back(item);
        self.seq.concat(&mut right);
        replaced
    }

    /// Returns the item with the given key, if present.
    pub fn lookup(&self, key: &X::Key) -> Option<&S> {
        self.seq
            .search_by(|acc| matches!(acc, Some(k) if *k <= *key))
            .filter(|item| X::key(item) == *key)
    }

    /// Removes and returns the item with the given key, if present.
    pub fn erase(&mut self, key: &X::Key) -> Option<S> {
        let mut right = Sequence::with_config(self.config);
        self.locate(key, &mut right);

        let front = right.pop_front();
        match front {
            Some(item) if X::key(&item) == *key => {
                self.seq.concat(&mut right);
                Some(item)
            }
            Some(item) => {
                right.push_front(item);
                self.seq.concat(&mut right);
                None
            }
            None => None,
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &S> {
        self.seq.iter()
    }
}

impl<S, X: ExtractKey<S>> Default for OrderedMap<S, X> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ByKey;
    impl ExtractKey<(i32, &'static str)> for ByKey {
        type Key = i32;
        fn key(item: &(i32, &'static str)) -> i32 {
            item.0
        }
    }

    type M = OrderedMap<(i32, &'static str), ByKey>;

    #[test]
    fn insert_then_lookup() {
        let mut m: M = OrderedMap::new();
        assert_eq!(m.insert((3, "three")), None);
        assert_eq!(m.insert((1, "one")), None);
        assert_eq!(m.insert((2, "two")), None);

        assert_eq!(m.lookup(&2), Some(&(2, "two")));
        assert_eq!(m.lookup(&5), None);
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut m: M = OrderedMap::new();
        m.insert((1, "one"));
        let replaced = m.insert((1, "uno"));
        assert_eq!(replaced, Some((1, "one")));
        assert_eq!(m.lookup(&1), Some(&(1, "uno")));
    }

    #[test]
    fn erase_removes_entry() {
        let mut m: M = OrderedMap::new();
        m.insert((1, "one"));
        m.insert((2, "two"));
        assert_eq!(m.erase(&1), Some((1, "one")));
        assert_eq!(m.lookup(&1), None);
        assert_eq!(m.lookup(&2), Some(&(2, "two")));
        assert_eq!(m.erase(&99), None);
    }

    #[test]
    fn iterates_in_descending_key_order() {
        let mut m: M = OrderedMap::new();
        for k in [5, 1, 4, 2, 3] {
            m.insert((k, "x"));
        }
        let keys: Vec<i32> = m.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![5, 4, 3, 2, 1]);
    }
}
