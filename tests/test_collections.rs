use chunked_seq::{Bag, ChunkConfig, Deque, OrderedMap, Stack, Weigh, WeightedSeq};
use chunked_seq::{ExtractKey, Sequence};
use pretty_assertions::assert_eq;

#[test]
fn deque_with_small_chunks_grows_and_splits() {
    let mut d: Deque<i32> = Sequence::with_config(ChunkConfig::new(4, 4).unwrap());
    for i in 1..=10 {
        d.push_back(i);
    }
    assert_eq!(d.len(), 10);
    assert_eq!((1..=10).map(|i| *d.at(i - 1)).collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());

    let mut tail: Deque<i32> = Deque::new();
    d.split_at(4, &mut tail);
    assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(tail.iter().copied().collect::<Vec<_>>(), vec![5, 6, 7, 8, 9, 10]);

    d.concat(&mut tail);
    assert!(tail.is_empty());
    assert_eq!(d.iter().copied().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
}

#[test]
fn stack_only_extends_and_shrinks_at_the_back() {
    let mut s: Stack<&str> = Stack::new();
    s.push_back("a");
    s.push_back("b");
    s.push_back("c");
    assert_eq!(s.pop_back(), Some("c"));
    assert_eq!(s.pop_back(), Some("b"));
    assert_eq!(s.pop_back(), Some("a"));
    assert_eq!(s.pop_back(), None);
}

#[test]
fn bag_pop_front_removes_from_the_back() {
    let mut b: Bag<i32> = Bag::new();
    for i in 1..=5 {
        b.push_back(i);
    }
    // Bag's push_front/pop_front alias the back, so this pulls the most
    // recently pushed item regardless of which end is asked.
    assert_eq!(b.pop_front(), Some(5));
    assert_eq!(b.len(), 4);
}

struct WordLen;
impl Weigh<&'static str> for WordLen {
    fn weight(item: &&'static str) -> i64 {
        item.len() as i64
    }
}

#[test]
fn weighted_seq_splits_by_cumulative_weight() {
    let words = ["alpha", "bb", "c", "delta"];
    let mut seq: WeightedSeq<&'static str, WordLen> = WeightedSeq::new();
    for w in words {
        seq.push_back(w);
    }
    assert_eq!(seq.measure(), 11);

    let mut tail: WeightedSeq<&'static str, WordLen> = WeightedSeq::new();
    seq.split_by(|acc| *acc >= 8, &mut tail);
    assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec!["alpha", "bb", "c"]);
    assert_eq!(tail.iter().copied().collect::<Vec<_>>(), vec!["delta"]);
}

struct ById;
impl ExtractKey<(u32, &'static str)> for ById {
    type Key = u32;
    fn key(item: &(u32, &'static str)) -> u32 {
        item.0
    }
}

#[test]
fn ordered_map_insert_lookup_erase() {
    let mut m: OrderedMap<(u32, &'static str), ById> = OrderedMap::new();
    m.insert((10, "ten"));
    m.insert((30, "thirty"));
    m.insert((20, "twenty"));

    assert_eq!(m.lookup(&20), Some(&(20, "twenty")));
    assert_eq!(m.lookup(&99), None);

    let keys: Vec<u32> = m.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![30, 20, 10]);

    assert_eq!(m.erase(&20), Some((20, "twenty")));
    assert_eq!(m.lookup(&20), None);
    assert!(!m.is_empty());
}
