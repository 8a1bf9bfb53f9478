use avl_tree::{AvlError, AvlTree};

const TEST_DATA: [i32; 11] = [8, 9, 10, 2, 1, 5, 3, 6, 4, 7, 11];
const DELETE_ORDER: [i32; 11] = [4, 5, 8, 9, 10, 2, 1, 3, 6, 7, 11];

fn sample_tree() -> AvlTree<i32> {
    let mut tree = AvlTree::new();
    for v in TEST_DATA {
        tree.insert(v);
        tree.assert_valid().unwrap();
    }
    tree
}

fn in_order(tree: &AvlTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn default_tree_is_empty_matrix() {
    let tree = AvlTree::<i32>::new();
    assert!(tree.is_empty());
    assert!(tree.is_balanced());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.root(), None);
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert_eq!(tree.height(), Err(AvlError::EmptyTree));
    assert_eq!(tree.print(), "AvlTree\n∅");
}

#[test]
fn insert_sample_matrix() {
    let tree = sample_tree();
    assert_eq!(tree.len(), 11);
    assert_eq!(tree.height(), Ok(4));
    assert_eq!(tree.root(), Some(&5));
    assert_eq!(tree.first(), Some(&1));
    assert_eq!(tree.last(), Some(&11));
    assert!(tree.is_balanced());
    assert_eq!(in_order(&tree), (1..=11).collect::<Vec<_>>());
    assert!(tree.contains(&7));
    assert!(!tree.contains(&12));
}

#[test]
fn delete_sample_in_order_matrix() {
    let mut tree = sample_tree();
    for (i, v) in DELETE_ORDER.iter().enumerate() {
        tree.delete(v).unwrap();
        tree.assert_valid().unwrap();
        assert!(tree.is_balanced());
        assert!(!tree.contains(v));
        assert_eq!(tree.len(), DELETE_ORDER.len() - i - 1);
        assert!(is_sorted(&in_order(&tree)));
    }
    assert!(tree.is_empty());
}

#[test]
fn delete_on_empty_tree_fails_matrix() {
    let mut tree = AvlTree::<i32>::new();
    assert_eq!(tree.delete(&1), Err(AvlError::EmptyTree));
}

#[test]
fn delete_missing_value_fails_on_twelfth_matrix() {
    let mut tree = sample_tree();
    let mut values = DELETE_ORDER.to_vec();
    values.insert(5, 42);
    for v in &values[..5] {
        tree.delete(v).unwrap();
    }
    let before: Vec<i32> = tree.pre_order_iter().copied().collect();
    assert_eq!(tree.delete(&values[5]), Err(AvlError::NotFound));
    assert_eq!(tree.pre_order_iter().copied().collect::<Vec<_>>(), before);
    for v in &values[6..] {
        tree.delete(v).unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.delete(&42), Err(AvlError::EmptyTree));
}

#[test]
fn delete_one_more_than_inserted_matrix() {
    let mut tree = sample_tree();
    for v in TEST_DATA {
        tree.delete(&v).unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.delete(&12), Err(AvlError::EmptyTree));
}

#[test]
fn purge_matrix() {
    let mut tree = sample_tree();
    tree.purge();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), Err(AvlError::EmptyTree));
    tree.purge();
    assert!(tree.is_empty());

    tree.insert(3);
    assert_eq!(tree.height(), Ok(1));
}

#[test]
fn duplicates_go_right_matrix() {
    let mut tree = AvlTree::new();
    for v in [5, 5, 5, 3, 5] {
        tree.insert(v);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 5);
    assert_eq!(in_order(&tree), vec![3, 5, 5, 5, 5]);

    tree.delete(&5).unwrap();
    tree.delete(&5).unwrap();
    tree.assert_valid().unwrap();
    assert_eq!(in_order(&tree), vec![3, 5, 5]);
}

#[test]
fn ascending_ladder_matrix() {
    let mut tree = AvlTree::new();
    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);
    assert_eq!(tree.height(), Ok(9));

    for i in (0..300).step_by(3) {
        tree.delete(&i).unwrap();
        tree.assert_valid().unwrap();
    }
    for i in 0..300 {
        assert_eq!(tree.contains(&i), i % 3 != 0);
    }
}

#[test]
fn clone_is_independent_matrix() {
    let source = sample_tree();
    let mut copy = source.clone();
    assert_eq!(
        copy.pre_order_iter().collect::<Vec<_>>(),
        source.pre_order_iter().collect::<Vec<_>>()
    );

    for v in DELETE_ORDER {
        copy.delete(&v).unwrap();
        assert!(is_sorted(&in_order(&copy)));
    }
    assert!(copy.is_empty());
    assert_eq!(source.len(), 11);
    assert_eq!(in_order(&source), (1..=11).collect::<Vec<_>>());
    source.assert_valid().unwrap();
}

#[test]
fn clone_from_replaces_destination_matrix() {
    let source = sample_tree();
    let mut dest: AvlTree<i32> = [100, 200, 300, 400].into_iter().collect();
    dest.clone_from(&source);
    assert_eq!(dest.len(), 11);
    assert!(!dest.contains(&100));
    assert_eq!(dest.height(), Ok(4));
    dest.assert_valid().unwrap();

    dest.insert(12);
    assert!(!source.contains(&12));

    let mut empty = AvlTree::<i32>::new();
    dest.clone_from(&empty);
    assert!(dest.is_empty());
    empty.insert(1);
    assert!(dest.is_empty());
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pair(i32, i32);

#[test]
fn custom_comparator_matrix() {
    let cmp = |a: &Pair, b: &Pair| b.0.cmp(&a.0).then(a.1.cmp(&b.1));
    let mut tree = AvlTree::with_comparator(cmp);
    tree.insert(Pair(0, 0));
    tree.insert(Pair(0, 1));
    tree.insert(Pair(2, 3));
    tree.insert(Pair(3, 3));
    tree.assert_valid().unwrap();
    assert_eq!(tree.first(), Some(&Pair(3, 3)));
    assert_eq!(tree.last(), Some(&Pair(0, 1)));

    tree.delete(&Pair(0, 0)).unwrap();
    assert!(!tree.contains(&Pair(0, 0)));
    assert!(tree.contains(&Pair(0, 1)));
    assert_eq!(tree.delete(&Pair(9, 9)), Err(AvlError::NotFound));
}

#[test]
fn debug_lists_values_in_order_matrix() {
    let tree: AvlTree<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
}
