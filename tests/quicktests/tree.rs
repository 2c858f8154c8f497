use bst_view::tree::{Node, Tree};

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys in both, and that each operation
/// reported the same change the set did.
fn do_ops(ops: &[Op], tree: &mut Tree, set: &mut BTreeSet<i64>) -> bool {
    ops.iter().all(|op| match *op {
        Op::Insert(k) => tree.insert(k) == set.insert(k),
        Op::Delete(k) => tree.delete(k) == set.remove(&k),
    })
}

/// Returns `true` if every node lies strictly between the bounds set by its
/// ancestors.
fn is_ordered(node: Option<&Node>, low: Option<i64>, high: Option<i64>) -> bool {
    let Some(n) = node else { return true };
    low.map_or(true, |low| n.value() > low)
        && high.map_or(true, |high| n.value() < high)
        && is_ordered(n.left(), low, Some(n.value()))
        && is_ordered(n.right(), Some(n.value()), high)
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && tree.inorder_traversal() == set.iter().copied().collect::<Vec<_>>()
        && is_ordered(tree.root(), None, None)
}

#[quickcheck]
fn traversal_is_sorted(xs: Vec<i64>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let traversal = tree.inorder_traversal();

    traversal.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn contains(xs: Vec<i64>) -> bool {
    let tree: Tree = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(*x) && tree.find_node(*x).map(Node::value) == Some(*x))
}

#[quickcheck]
fn contains_not(xs: Vec<i64>, nots: Vec<i64>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(*x) && tree.find_node(*x).is_none())
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i64>) -> bool {
    let mut tree: Tree = xs.iter().copied().collect();
    let before = tree.inorder_traversal();
    let len = tree.len();

    xs.iter().all(|x| !tree.insert(*x)) && tree.inorder_traversal() == before && tree.len() == len
}

#[quickcheck]
fn delete_absent_changes_nothing(xs: Vec<i8>, missing: i64) -> bool {
    // i8 keys can never collide with `missing` once it's pushed out of range.
    let missing = missing.saturating_abs().saturating_add(1_000);
    let mut tree: Tree = xs.iter().map(|x| i64::from(*x)).collect();
    let before = tree.inorder_traversal();

    !tree.delete(missing) && tree.inorder_traversal() == before
}

#[quickcheck]
fn delete_present_removes_exactly_one(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree: Tree = xs.iter().map(|x| i64::from(*x)).collect();
    let victim = i64::from(xs[pick % xs.len()]);

    let mut expected = tree.inorder_traversal();
    expected.retain(|k| *k != victim);

    tree.delete(victim)
        && !tree.search(victim)
        && tree.inorder_traversal() == expected
        && is_ordered(tree.root(), None, None)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree = xs.iter().map(|x| i64::from(*x)).collect();
    for delete in &deletes {
        tree.delete(i64::from(*delete));
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    deletes.iter().all(|x| !tree.search(i64::from(*x)))
        && xs
            .iter()
            .filter(|x| !deleted.contains(x))
            .all(|x| tree.search(i64::from(*x)))
}

#[test]
fn test_insert_delete_reinsert_example() {
    let mut tree = Tree::new();
    for key in [5, 3, 8, 1, 4] {
        tree.insert(key);
    }
    assert_eq!(tree.inorder_traversal(), vec![1, 3, 4, 5, 8]);

    tree.delete(5);
    assert_eq!(tree.inorder_traversal(), vec![1, 3, 4, 8]);

    assert!(!tree.search(5));
    tree.insert(5);
    assert!(tree.search(5));
}
