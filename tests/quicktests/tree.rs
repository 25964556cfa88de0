use ordered_bst::{OrderedBinaryTree, TreeError};

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

use crate::init_logging;

fn build(xs: &[i8]) -> OrderedBinaryTree<i8> {
    let mut tree = OrderedBinaryTree::new();
    for x in xs {
        tree.insert(*x).unwrap();
    }
    tree
}

#[test]
fn sample_session() {
    init_logging();
    let mut tree = OrderedBinaryTree::new();

    for x in 1..=10 {
        tree.insert(x).unwrap();
    }
    assert_eq!(tree.traverse(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(tree.size(), 10);

    assert!(tree.search(&5));
    assert!(!tree.search(&20));

    tree.delete(&5).unwrap();
    assert_eq!(tree.traverse(), vec![1, 2, 3, 4, 6, 7, 8, 9, 10]);
    assert_eq!(tree.size(), 9);

    tree.delete(&1).unwrap();
    assert_eq!(tree.min(), Some(&2));
    assert_eq!(tree.traverse(), vec![2, 3, 4, 6, 7, 8, 9, 10]);
    assert_eq!(tree.size(), 8);

    tree.delete(&7).unwrap();
    assert_eq!(tree.traverse(), vec![2, 3, 4, 6, 8, 9, 10]);
    assert_eq!(tree.size(), 7);
}

#[test]
fn absent_arguments_leave_tree_unchanged() {
    init_logging();
    let mut tree = build(&[3, 1, 2]);

    assert_eq!(
        tree.insert(None::<i8>),
        Err(TreeError::InvalidArgument { operation: "insert" })
    );
    assert_eq!(
        tree.delete(None::<&i8>),
        Err(TreeError::InvalidArgument { operation: "delete" })
    );
    assert_eq!(tree.traverse(), vec![1, 2, 3]);
    assert_eq!(tree.size(), 3);
}

#[quickcheck]
fn traversal_is_sorted_and_complete(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort();

    tree.traverse() == sorted && tree.size() == sorted.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn deleting_absent_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = build(&xs);
    if tree.search(&x) {
        return true;
    }
    let before = tree.traverse();
    let height = tree.height();

    tree.delete(&x).unwrap();
    tree.traverse() == before && tree.size() == before.len() && tree.height() == height
}

#[quickcheck]
fn insert_then_delete_restores_elements(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = build(&xs);
    let before = tree.traverse();

    tree.insert(x).unwrap();
    let found = tree.search(&x);
    tree.delete(&x).unwrap();

    found && tree.traverse() == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut still_present = xs;
    for delete in &deletes {
        let size = tree.size();
        tree.delete(delete).unwrap();
        // Each delete takes out a single copy.
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                assert_eq!(tree.size(), size - 1);
            }
            None => assert_eq!(tree.size(), size),
        }
    }
    still_present.sort();

    tree.traverse() == still_present
        && deletes
            .iter()
            .all(|x| tree.search(x) == still_present.contains(x))
}
