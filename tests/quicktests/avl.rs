use ordset::avl::Tree;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`, checking the
/// tree's structural invariants after every step. This way we can ensure
/// that after a random smattering of inserts and removes we hold the same
/// set of keys as the model.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Copy,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(*k);
                set.insert(*k);
            }
            Op::Remove(k) => {
                tree.remove(k);
                set.remove(k);
            }
        }
        tree.check_invariants();
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.iter().eq(set.iter()) && tree.is_empty() == set.is_empty()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for remove in &removes {
            tree.remove(remove);
            tree.check_invariants();
        }

        let removed: BTreeSet<_> = removes.into_iter().collect();
        let still_present: BTreeSet<_> = xs
            .into_iter()
            .filter(|x| !removed.contains(x))
            .collect();

        removed.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn min_max_agree_with_iteration(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.min() == set.iter().next() && tree.max() == set.iter().next_back()
    }
}
