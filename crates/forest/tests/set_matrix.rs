use dsa_forest::SortedSet;

fn set(v: &[i32]) -> SortedSet<i32> {
    SortedSet::from_sorted(v.to_vec())
}

fn items(s: &SortedSet<i32>) -> Vec<i32> {
    s.iter().copied().collect()
}

#[test]
fn set_construction_matrix() {
    let empty = SortedSet::<i32>::new();
    assert!(empty.is_empty());
    assert_eq!(empty.cardinality(), 0);
    assert_eq!(empty.to_string(), "Set is empty!");

    let one = SortedSet::from(4);
    assert_eq!(one.cardinality(), 1);
    assert_eq!(one.to_string(), "{ 4 }");

    let s = set(&[1, 3, 5]);
    assert_eq!(s.to_string(), "{ 1 3 5 }");
    assert_eq!(s.node_count(), 3);

    let collected: SortedSet<i32> = [5, 1, 3, 1].into_iter().collect();
    assert_eq!(collected, s);
}

#[test]
fn set_membership_matrix() {
    let s = set(&[2, 4, 6, 8]);
    for x in [2, 4, 6, 8] {
        assert!(s.is_member(&x));
    }
    for x in [0, 1, 5, 9] {
        assert!(!s.is_member(&x));
    }
    assert!(!SortedSet::<i32>::new().is_member(&0));
}

#[test]
fn set_algebra_matrix() {
    let a = set(&[1, 3, 5, 7]);
    let b = set(&[2, 3, 4, 7, 9]);

    assert_eq!(items(&(&a + &b)), vec![1, 2, 3, 4, 5, 7, 9]);
    assert_eq!(items(&(&a * &b)), vec![3, 7]);
    assert_eq!(items(&(&a - &b)), vec![1, 5]);
    assert_eq!(items(&(&b - &a)), vec![2, 4, 9]);

    let mut c = SortedSet::new();
    c += &a;
    assert_eq!(c, a);
    c *= &SortedSet::new();
    assert!(c.is_empty());
    assert_eq!(c.node_count(), 0);

    let mut d = a.clone();
    d -= &a;
    assert!(d.is_empty());
    assert_eq!(items(&a), vec![1, 3, 5, 7]);
}

#[test]
fn set_subset_order_matrix() {
    let a = set(&[1, 3]);
    let b = set(&[1, 2, 3]);
    let c = set(&[2, 4]);

    assert!(a <= b);
    assert!(a < b);
    assert!(!(b <= a));
    assert!(b > a);
    assert!(a <= a.clone());
    assert!(!(a < a.clone()));
    assert_eq!(a.partial_cmp(&c), None);
    assert!(a != c);
    assert!(SortedSet::new() <= c);
}

#[test]
fn set_insert_remove_make_empty() {
    let mut s = SortedSet::new();
    assert!(s.insert(3));
    assert!(s.insert(1));
    assert!(!s.insert(3));
    assert!(s.insert(2));
    assert_eq!(items(&s), vec![1, 2, 3]);
    assert!(s.remove(&2));
    assert!(!s.remove(&2));
    assert_eq!(items(&s), vec![1, 3]);
    s.make_empty();
    assert!(s.is_empty());
    assert_eq!(s.node_count(), 0);
    assert!(s.insert(10));
    assert_eq!(s.to_string(), "{ 10 }");
}
