use classic_collections::red_black_tree::RedBlackSet;
use rand::Rng;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 10_000;
const KEY_RANGE: u32 = 1_000;

fn init_logger() {
    let _ = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

fn seeded_rng() -> rand::XorShiftRng {
    rand::SeedableRng::from_seed([1, 1, 1, 1])
}

#[test]
fn int_test_red_black_set() {
    init_logger();
    let mut rng = seeded_rng();
    let mut set = RedBlackSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, KEY_RANGE);

        match rng.gen_range(0, 3) {
            0 | 1 => assert_eq!(set.insert(key), expected.insert(key)),
            _ => assert_eq!(set.remove(&key), expected.take(&key)),
        }

        assert!(set.validate().is_ok());
        assert_eq!(set.len(), expected.len());
        assert_eq!(set.contains(&key), expected.contains(&key));
    }

    assert_eq!(
        set.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );
    assert_eq!(set.min(), expected.iter().next());
    assert_eq!(set.max(), expected.iter().next_back());
    assert_eq!(
        set.into_iter().collect::<Vec<u32>>(),
        expected.into_iter().collect::<Vec<u32>>(),
    );
}

#[test]
fn int_test_sequential_insert_remove() {
    init_logger();
    let mut set = RedBlackSet::new();
    for key in 0..2048u32 {
        set.insert(key);
        assert!(set.validate().is_ok());
    }
    for key in (0..2048u32).rev().step_by(2) {
        assert_eq!(set.remove(&key), Some(key));
        assert!(set.validate().is_ok());
    }
    assert_eq!(set.len(), 1024);
    for key in 0..2048u32 {
        assert_eq!(set.contains(&key), key % 2 == 0);
    }
}

#[test]
fn int_test_black_height_bound() {
    let mut rng = seeded_rng();
    let mut set = RedBlackSet::new();
    for _ in 0..NUM_OF_OPERATIONS {
        set.insert(rng.gen::<u32>());
    }
    for key in 0..NUM_OF_OPERATIONS as u32 {
        set.insert(key);
    }

    // a subtree whose black-height (excluding the sentinel) is b holds at least 2^b - 1 nodes
    let black_height = set.validate().expect("Expected a valid red black tree.");
    assert!((1usize << (black_height - 1)) - 1 <= set.len());
}

#[test]
fn int_test_sorted_and_unique() {
    let mut rng = seeded_rng();
    let set: RedBlackSet<u32> = (0..NUM_OF_OPERATIONS)
        .map(|_| rng.gen_range(0, KEY_RANGE))
        .collect();

    let values = set.iter().collect::<Vec<&u32>>();
    assert_eq!(values.len(), set.len());
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn int_test_idempotence() {
    let mut once = RedBlackSet::from([1, 2, 3]);
    let mut twice = once.clone();

    once.insert(4);
    twice.insert(4);
    twice.insert(4);
    assert_eq!(once, twice);

    once.remove(&2);
    twice.remove(&2);
    twice.remove(&2);
    assert_eq!(once, twice);
    assert!(twice.validate().is_ok());
}

#[test]
fn int_test_clone_independence() {
    let mut rng = seeded_rng();
    let mut original = RedBlackSet::new();
    for _ in 0..1_000 {
        original.insert(rng.gen_range(0, KEY_RANGE));
    }
    let snapshot = original.iter().cloned().collect::<Vec<u32>>();

    let mut copy = original.clone();
    assert_eq!(copy, original);
    for key in 0..KEY_RANGE / 2 {
        copy.remove(&key);
    }
    copy.insert(KEY_RANGE);
    assert!(copy.validate().is_ok());
    assert_eq!(original.iter().cloned().collect::<Vec<u32>>(), snapshot);

    original.clear();
    assert!(copy.contains(&KEY_RANGE));
    assert!(copy.iter().all(|key| *key >= KEY_RANGE / 2));
}

#[test]
fn int_test_move_leaves_source_empty() {
    let mut source = RedBlackSet::from([5, 3, 8]);
    let target = source.take();
    assert!(source.is_empty());
    assert_eq!(source.iter().count(), 0);
    assert_eq!(target.iter().cloned().collect::<Vec<i32>>(), vec![3, 5, 8]);

    source.insert(1);
    assert_eq!(target.len(), 3);
}

#[test]
fn int_test_string_values() {
    let mut set = RedBlackSet::new();
    for word in "the quick brown fox jumps over the lazy dog".split(' ') {
        set.insert(word.to_string());
    }
    assert_eq!(set.len(), 8);
    assert!(set.contains("fox"));
    assert_eq!(set.remove("the"), Some(String::from("the")));
    assert_eq!(set.to_string(), "{brown dog fox jumps lazy over quick}");
}
