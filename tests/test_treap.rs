extern crate rand;
extern crate treap_dictionary;

use self::rand::Rng;
use std::cmp::Ordering;
use treap_dictionary::comparator::{Comparator, NumericOrder};
use treap_dictionary::traversal;
use treap_dictionary::treap::{Payload, TreapConfig, TreapDictionary};

fn seeded_rng() -> rand::XorShiftRng {
    rand::SeedableRng::from_seed([1, 1, 1, 1])
}

fn seeded_dictionary<V>() -> TreapDictionary<u32, V> {
    TreapDictionary::with_config(NumericOrder, TreapConfig::new().chunk_size(64).seed([2, 7, 1, 8]))
        .expect("Expected a valid configuration.")
}

fn assert_invariants<V>(dict: &TreapDictionary<u32, V>) {
    assert!(traversal::is_search_ordered(dict.root(), dict.comparator()));
    assert!(traversal::is_heap_ordered(dict.root()));
    assert_eq!(traversal::in_order(dict.root()).len(), dict.len());
}

// Every node with its parent's key and its priority, in key order.
fn shape<V>(dict: &TreapDictionary<u32, V>) -> Vec<(u32, Option<u32>, f64)> {
    traversal::in_order(dict.root())
        .into_iter()
        .map(|node| (*node.key(), node.parent().map(|parent| *parent.key()), node.priority()))
        .collect()
}

#[test]
fn int_test_min_max_and_order() {
    let mut dict: TreapDictionary<u32, ()> = TreapDictionary::new();
    for key in &[5, 3, 8, 1, 4] {
        dict.insert_key(*key);
    }
    assert_eq!(dict.min(), Some(Payload::Key(&1)));
    assert_eq!(dict.max(), Some(Payload::Key(&8)));
    assert_eq!(traversal::in_order_keys(dict.root()), vec![&1, &3, &4, &5, &8]);
}

#[test]
fn int_test_predecessor_successor_scenarios() {
    let mut dict: TreapDictionary<u32, u32> = TreapDictionary::new();
    for key in &[1, 3, 5, 7, 9] {
        dict.insert(*key, *key);
    }
    assert_eq!(dict.predecessor(&5), Some(Payload::Value(&3)));
    assert_eq!(dict.successor(&5), Some(Payload::Value(&7)));
    assert_eq!(dict.predecessor(&1), None);
    assert_eq!(dict.successor(&9), None);

    let mut single: TreapDictionary<u32, u32> = TreapDictionary::new();
    single.insert(10, 10);
    assert_eq!(single.predecessor(&10), None);
    assert_eq!(single.successor(&10), None);
}

#[test]
fn int_test_remove_middle() {
    let mut dict: TreapDictionary<u32, ()> = seeded_dictionary();
    for key in 1..4 {
        dict.insert_key(key);
    }
    assert!(dict.remove(&2));
    assert!(!dict.contains(&2));
    assert_eq!(traversal::in_order_keys(dict.root()), vec![&1, &3]);
    assert_invariants(&dict);
}

#[test]
fn int_test_custom_comparator() {
    #[derive(Clone, Debug, PartialEq)]
    struct Point {
        x: i64,
        y: i64,
    }

    fn rank(point: &Point) -> i64 {
        point.x * 1000 + point.y
    }

    let by_rank = |a: &Point, b: &Point| rank(a).cmp(&rank(b));
    let mut rng = seeded_rng();
    let mut dict = TreapDictionary::with_comparator(by_rank);
    let mut expected = Vec::new();
    for _ in 0..500 {
        let point = Point {
            x: rng.gen_range(-50, 50),
            y: rng.gen_range(0, 1000),
        };
        if dict.insert(point.clone(), ()) {
            expected.push(point);
        }
    }

    expected.sort_by(by_rank);
    let actual: Vec<Point> = traversal::in_order_keys(dict.root())
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(actual, expected);
    assert!(traversal::is_search_ordered(dict.root(), dict.comparator()));
}

#[test]
fn int_test_duplicate_insert_is_ignored() {
    let mut dict = seeded_dictionary();
    for key in 0..100 {
        dict.insert(key, key * 2);
    }
    let before = shape(&dict);
    for key in 0..100 {
        assert!(!dict.insert(key, 0));
        assert!(!dict.insert_key(key));
    }
    assert_eq!(shape(&dict), before);
    for key in 0..100 {
        assert_eq!(dict.get(&key), Some(&(key * 2)));
    }
}

#[test]
fn int_test_remove_absent_keeps_shape() {
    let mut dict: TreapDictionary<u32, ()> = seeded_dictionary();
    for key in (0..200).map(|key| key * 2) {
        dict.insert_key(key);
    }
    let before = shape(&dict);
    for key in (0..200).map(|key| key * 2 + 1) {
        assert!(dict.remove(&key));
    }
    assert_eq!(shape(&dict), before);
    assert_eq!(dict.len(), 200);
}

#[test]
fn int_test_randomized_operations() {
    let mut rng = seeded_rng();
    let mut dict = seeded_dictionary();
    let mut expected = Vec::new();

    for _ in 0..2000 {
        let key = rng.gen_range(0, 500);
        match rng.gen_range(0, 4) {
            0 | 1 => {
                let inserted = dict.insert(key, key + 1);
                assert_eq!(inserted, !expected.contains(&key));
                if inserted {
                    expected.push(key);
                }
            },
            2 => {
                let taken = dict.take(&key);
                match expected.iter().position(|other| *other == key) {
                    Some(index) => {
                        expected.swap_remove(index);
                        assert_eq!(taken, Some((key, Some(key + 1))));
                    },
                    None => assert_eq!(taken, None),
                }
                assert!(!dict.contains(&key));
            },
            _ => {
                let priority = rng.gen::<f64>() * 2.0 - 0.5;
                assert_eq!(dict.update(&key, priority), Ok(expected.contains(&key)));
                if expected.contains(&key) {
                    assert_eq!(dict.priority(&key), Some(priority));
                }
            },
        }
        assert_invariants(&dict);
    }

    expected.sort();
    let actual: Vec<u32> = traversal::in_order_keys(dict.root()).into_iter().cloned().collect();
    assert_eq!(actual, expected);
}

#[test]
fn int_test_predecessor_successor_against_sorted() {
    let mut rng = seeded_rng();
    let mut dict = seeded_dictionary();
    let mut expected = Vec::new();
    for _ in 0..1000 {
        let key = rng.gen_range(0, 10_000);
        if dict.insert(key, key * 10) {
            expected.push(key);
        }
    }
    expected.sort();

    for (index, key) in expected.iter().enumerate() {
        let predecessor = if index == 0 { None } else { Some(expected[index - 1] * 10) };
        let successor = expected.get(index + 1).map(|next| next * 10);
        assert_eq!(dict.predecessor(key).and_then(|payload| payload.value().cloned()), predecessor);
        assert_eq!(dict.successor(key).and_then(|payload| payload.value().cloned()), successor);
    }

    let absent = (0..10_000).find(|key| expected.binary_search(key).is_err());
    if let Some(absent) = absent {
        assert_eq!(dict.predecessor(&absent), None);
        assert_eq!(dict.successor(&absent), None);
    }
}

#[test]
fn int_test_subtree_min_max() {
    let mut rng = seeded_rng();
    let mut dict: TreapDictionary<u32, ()> = seeded_dictionary();
    let mut keys: Vec<u32> = (0..300).collect();
    rng.shuffle(&mut keys);
    for key in &keys {
        dict.insert_key(*key);
    }

    for key in 0..300 {
        let node = dict.subtree(&key).expect("Expected key to be present.");
        let subtree_keys = traversal::in_order_keys(Some(node));
        let min = node.min().key().cloned();
        let max = node.max().key().cloned();
        assert_eq!(min, subtree_keys.first().map(|key| **key));
        assert_eq!(max, subtree_keys.last().map(|key| **key));
        assert!(subtree_keys.contains(&&key));
    }
}

#[test]
fn int_test_remove_everything() {
    let mut rng = seeded_rng();
    let mut dict: TreapDictionary<u32, ()> = seeded_dictionary();
    let mut keys: Vec<u32> = (0..1000).collect();
    rng.shuffle(&mut keys);
    for key in &keys {
        dict.insert_key(*key);
    }
    assert_invariants(&dict);

    rng.shuffle(&mut keys);
    for (index, key) in keys.iter().enumerate() {
        assert_eq!(dict.take(key), Some((*key, None)));
        assert_eq!(dict.len(), keys.len() - index - 1);
        if index % 50 == 0 {
            assert_invariants(&dict);
        }
    }
    assert!(dict.is_empty());
    assert!(dict.root().is_none());
    assert_eq!(dict.min(), None);
}

#[test]
fn int_test_float_keys() {
    let mut dict: TreapDictionary<f64, &str> = TreapDictionary::new();
    dict.insert(0.5, "half");
    dict.insert(-1.25, "negative");
    dict.insert(std::f64::INFINITY, "infinity");
    dict.insert(std::f64::NAN, "nan");

    assert_eq!(dict.min(), Some(Payload::Value(&"negative")));
    assert_eq!(dict.max(), Some(Payload::Value(&"nan")));
    assert_eq!(dict.successor(&0.5), Some(Payload::Value(&"infinity")));
    assert!(dict.contains(&std::f64::NAN));
    assert_eq!(dict.comparator().compare(&0.5, &-1.25), Ordering::Greater);
}

#[test]
fn int_test_signed_zero_keys_are_equal() {
    let mut dict: TreapDictionary<f64, &str> = TreapDictionary::new();
    assert!(dict.insert(0.0, "zero"));
    assert!(dict.contains(&-0.0));
    assert!(!dict.insert(-0.0, "negative zero"));
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.get(&-0.0), Some(&"zero"));
}
