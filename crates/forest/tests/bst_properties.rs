use std::collections::BTreeSet;

use dsa_forest::{BinarySearchTree, SortedSet};
use dsa_util::Fuzzer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn inorder_is_strictly_increasing(xs in proptest::collection::vec(-500i32..500, 0..200)) {
        let tree: BinarySearchTree<i32> = xs.iter().copied().collect();
        let got: Vec<i32> = tree.iter().copied().collect();
        prop_assert!(got.windows(2).all(|w| w[0] < w[1]));
        let expected: Vec<i32> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn remove_drops_exactly_one_node(
        xs in proptest::collection::vec(0i32..100, 1..120),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree: BinarySearchTree<i32> = xs.iter().copied().collect();
        let victim = xs[pick.index(xs.len())];
        let before = tree.node_count();
        prop_assert_eq!(tree.remove(&victim), Some(victim));
        prop_assert!(tree.contains(&victim).is_end());
        prop_assert_eq!(tree.node_count(), before - 1);
        prop_assert_eq!(tree.len(), before - 1);
    }

    #[test]
    fn pred_succ_brackets_tightly(
        xs in proptest::collection::vec(0i32..1000, 1..100),
        probe in 0i32..1000,
    ) {
        let tree: BinarySearchTree<i32> = xs.iter().copied().collect();
        let set: BTreeSet<i32> = xs.iter().copied().collect();
        let (a, b) = tree.find_pred_succ(&probe).unwrap();
        let below = set.range(..probe).next_back().copied();
        let above = set.range(probe + 1..).next().copied();
        prop_assert_eq!(*a, below.unwrap_or(*set.iter().next().unwrap()));
        prop_assert_eq!(*b, above.unwrap_or(*set.iter().next_back().unwrap()));
    }

    #[test]
    fn set_algebra_matches_btreeset(
        xs in proptest::collection::btree_set(0i32..60, 0..30),
        ys in proptest::collection::btree_set(0i32..60, 0..30),
    ) {
        let a = SortedSet::from_sorted(xs.iter().copied().collect());
        let b = SortedSet::from_sorted(ys.iter().copied().collect());
        let union: Vec<i32> = (&a + &b).iter().copied().collect();
        let inter: Vec<i32> = (&a * &b).iter().copied().collect();
        let diff: Vec<i32> = (&a - &b).iter().copied().collect();
        prop_assert_eq!(union, xs.union(&ys).copied().collect::<Vec<_>>());
        prop_assert_eq!(inter, xs.intersection(&ys).copied().collect::<Vec<_>>());
        prop_assert_eq!(diff, xs.difference(&ys).copied().collect::<Vec<_>>());
        prop_assert_eq!(a <= b, xs.is_subset(&ys));
    }
}

#[test]
fn fuzz_against_btreeset() {
    let fuzzer = Fuzzer::new(Some([42u8; 32]));
    let mut tree = BinarySearchTree::new();
    let mut model = BTreeSet::new();

    for _ in 0..5_000 {
        let x = fuzzer.random_int(0, 300);
        if fuzzer.random_bool(0.6) {
            assert_eq!(tree.insert(x), model.insert(x));
        } else {
            assert_eq!(tree.remove(&x).is_some(), model.remove(&x));
        }
        assert_eq!(tree.len(), model.len());
    }

    assert_eq!(tree.node_count(), model.len());
    assert!(tree.iter().eq(model.iter()));
    assert!(tree.iter().rev().eq(model.iter().rev()));
    assert_eq!(tree.find_min().ok(), model.first());
    assert_eq!(tree.find_max().ok(), model.last());

    let copy = tree.clone();
    assert!(copy.iter().eq(model.iter()));
}
