use avl::{Node, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone + std::fmt::Debug,
{
    ops.iter().all(|op| {
        let agreed = match op {
            Op::Insert(k) => tree.insert(k.clone()) == set.insert(k.clone()),
            Op::Remove(k) => tree.delete(k) == set.remove(k),
        };
        agreed && tree.validate().is_ok()
    })
}

/// Walks every node checking the AVL balance rule without relying on `Tree::validate`.
fn every_node_balanced<K>(node: Option<&Node<K>>) -> bool {
    match node {
        None => true,
        Some(n) => {
            (-1..=1).contains(&n.balance_factor())
                && every_node_balanced(n.left())
                && every_node_balanced(n.right())
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter()) && tree.len() == set.len()
}

#[quickcheck]
fn every_node_stays_balanced(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();

    ops.iter().all(|op| {
        match op {
            Op::Insert(k) => {
                tree.insert(*k);
            }
            Op::Remove(k) => {
                tree.delete(k);
            }
        }
        every_node_balanced(tree.root())
    })
}

#[quickcheck]
fn in_order_is_strictly_increasing(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let keys: Vec<_> = tree.iter().collect();
    keys.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<u32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    (tree.height() as f64) <= 1.45 * ((tree.len() + 2) as f64).log2()
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, k: i8) -> bool {
    let mut once: Tree<_> = xs.into_iter().collect();
    once.insert(k);
    let mut twice = once.clone();

    !twice.insert(k) && twice == once
}

#[quickcheck]
fn delete_undoes_insert(xs: Vec<i8>, k: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != k).collect();
    let before: Vec<_> = tree.iter().copied().collect();

    tree.insert(k) && tree.delete(&k) && tree.iter().copied().eq(before)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.validate().is_ok()
}

#[quickcheck]
fn min_and_max_match_model(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.min() == xs.iter().min() && tree.max() == xs.iter().max()
}

#[quickcheck]
fn traversals_visit_every_key(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let in_order: BTreeSet<_> = tree.iter().collect();
    let pre_order: BTreeSet<_> = tree.pre_order().collect();
    let post_order: BTreeSet<_> = tree.post_order().collect();

    tree.pre_order().count() == tree.len()
        && tree.post_order().count() == tree.len()
        && in_order == pre_order
        && in_order == post_order
        && tree.pre_order().next() == tree.root().map(Node::key)
        && tree.post_order().last() == tree.root().map(Node::key)
}
