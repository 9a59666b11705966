use classic_collections::red_black_tree::RedBlackSet;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn random_keys() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

macro_rules! bst_set_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use super::{random_keys, $type_name};
                use criterion::{black_box, Criterion};

                pub fn bench_insert(c: &mut Criterion) {
                    let keys = random_keys();
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), move |b| b.iter(|| {
                        let mut set = $type_name::new();
                        for key in &keys {
                            set.insert(*key);
                        }
                        set
                    }));
                }

                pub fn bench_contains(c: &mut Criterion) {
                    let keys = random_keys();
                    let set = keys.iter().cloned().collect::<$type_name<u32>>();
                    c.bench_function(&format!("bench {} contains", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &keys {
                            black_box(set.contains(key));
                        }
                    }));
                }

                pub fn bench_remove(c: &mut Criterion) {
                    let keys = random_keys();
                    let set = keys.iter().cloned().collect::<$type_name<u32>>();
                    c.bench_function(&format!("bench {} remove", stringify!($module_name)), move |b| b.iter(|| {
                        let mut set = set.clone();
                        for key in &keys {
                            black_box(set.remove(key));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_iter,
            $(
                $module_name::bench_insert,
                $module_name::bench_contains,
                $module_name::bench_remove,
            )*
        );
    }
}

fn bench_iter(c: &mut Criterion) {
    let set = random_keys().into_iter().collect::<RedBlackSet<u32>>();
    c.bench_function("bench red_black_tree iter", move |b| {
        b.iter(|| {
            for key in &set {
                black_box(key);
            }
        })
    });
}

bst_set_benches!(
    btreeset: BTreeSet,
    red_black_tree: RedBlackSet,
);

criterion_main!(benches);
