use ordset::unbalanced::Tree;

use std::collections::BTreeSet;

use crate::Op;

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        for op in &ops {
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
        }
        tree.iter().eq(set.iter())
            && tree.min() == set.iter().next()
            && tree.max() == set.iter().next_back()
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
