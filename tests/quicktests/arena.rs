use linked_bst::arena::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and to a count of each value.
/// This way we can ensure that after a random smattering of inserts
/// and deletes the tree holds the same multiset of values.
fn do_ops<V>(ops: &[Op<V>], bst: &mut Tree<V>, counts: &mut BTreeMap<V, usize>)
where
    V: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert_value(v.clone());
                *counts.entry(v.clone()).or_default() += 1;
            }
            Op::Remove(v) => {
                if bst.remove(v).is_some() {
                    let count = counts.get_mut(v).expect("removed value was counted");
                    *count -= 1;
                    if *count == 0 {
                        counts.remove(v);
                    }
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    let expected: Vec<_> = counts
        .iter()
        .flat_map(|(v, count)| std::iter::repeat(*v).take(*count))
        .collect();

    tree.check_invariants().is_ok()
        && tree.in_order(tree.root()) == expected
        && tree.len() == expected.len()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort();

    tree.in_order(tree.root()) == sorted
}

#[quickcheck]
fn height_is_negative_only_when_empty(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let height = tree.height(tree.root());

    (height == -1) == xs.is_empty() && height < xs.len() as isize
}

#[quickcheck]
fn parent_links_survive_deletes(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let Some(root) = tree.root() else {
        return tree.is_empty();
    };
    let mut current = Some(tree.minimum(root));
    while let Some(id) = current {
        let linked_from_parent = match tree[id].parent() {
            Some(parent) => {
                (tree[parent].left() == Some(id)) != (tree[parent].right() == Some(id))
            }
            None => tree.root() == Some(id),
        };
        if !linked_from_parent {
            return false;
        }
        current = tree.successor(id);
    }

    true
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let before = tree.pre_order(tree.root());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none()) && tree.pre_order(tree.root()) == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        // Delete each copy.
        while tree.remove(delete).is_some() {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
}

#[quickcheck]
fn depth_matches_value_depth_without_duplicates(xs: Vec<i8>) -> bool {
    let unique: Vec<_> = xs
        .into_iter()
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    let tree: Tree<_> = unique.iter().copied().collect();

    unique.iter().all(|x| {
        let id = tree.search(x).expect("inserted");
        tree.depth(id) == tree.depth_of_value(x)
    })
}
