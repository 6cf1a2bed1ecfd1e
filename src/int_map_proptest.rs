#![cfg(test)]

// Property tests for IntHashMap kept inside the crate so they can observe
// capacity() alongside the public surface.

use crate::int_map::IntHashMap;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Set(usize, i64),
    Get(usize),
    Contains(usize),
    Increment(usize),
    Decrement(usize),
    Remove(usize),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<i64>, Vec<Op>)> {
    proptest::collection::vec(-64i64..64, 1..=16).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), -1_000i64..1_000).prop_map(|(i, v)| Op::Set(i, v)),
            idx.clone().prop_map(Op::Get),
            idx.clone().prop_map(Op::Contains),
            idx.clone().prop_map(Op::Increment),
            idx.clone().prop_map(Op::Decrement),
            idx.clone().prop_map(Op::Remove),
            Just(Op::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - set/get/contains_key/remove parity with the model after each op.
// - increment/decrement create absent keys at +1/-1 and step present ones.
// - iter() yields each live entry exactly once with the model's value.
// - len parity after every op, across growth boundaries.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut = IntHashMap::new();
        let mut model: HashMap<i64, i64> = HashMap::new();

        for op in ops {
            match op {
                Op::Set(i, v) => {
                    let k = pool[i];
                    sut.set(k, v);
                    model.insert(k, v);
                }
                Op::Get(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.get(k), model.get(&k).copied());
                }
                Op::Contains(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.contains_key(k), model.contains_key(&k));
                }
                Op::Increment(i) => {
                    let k = pool[i];
                    sut.increment(k);
                    *model.entry(k).or_insert(0) += 1;
                }
                Op::Decrement(i) => {
                    let k = pool[i];
                    sut.decrement(k);
                    *model.entry(k).or_insert(0) -= 1;
                }
                Op::Remove(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.remove(k), model.remove(&k));
                }
                Op::Iterate => {
                    let mut seen: Vec<(i64, i64)> = sut.iter().collect();
                    seen.sort();
                    let mut expected: Vec<(i64, i64)> =
                        model.iter().map(|(&k, &v)| (k, v)).collect();
                    expected.sort();
                    prop_assert_eq!(seen, expected);
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert!(sut.capacity() >= 13);
        }
    }
}

// Property: Growth is content-preserving. Filling a map far past several
// growth boundaries leaves every key at its model value, capacity a
// doubling of 13, and no key duplicated across buckets.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_growth_preserves_content(keys in proptest::collection::hash_set(any::<i64>(), 1..300)) {
        let mut sut = IntHashMap::new();
        for (i, &k) in keys.iter().enumerate() {
            sut.set(k, i as i64);
        }

        prop_assert_eq!(sut.len(), keys.len());
        let mut capacity = 13;
        while capacity < sut.capacity() {
            capacity *= 2;
        }
        prop_assert_eq!(sut.capacity(), capacity);

        for (i, &k) in keys.iter().enumerate() {
            prop_assert_eq!(sut.get(k), Some(i as i64));
        }
        prop_assert_eq!(sut.iter().count(), keys.len());
    }
}
