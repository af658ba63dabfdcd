//! A plain, unbalanced binary search tree. Same operation surface as the
//! balanced core in [`crate::avl`], minus any rebalancing: nothing bounds the
//! height, so every operation degrades to `O(N)` when keys arrive in sorted
//! order. Useful as a baseline and as the simplest possible rendition of the
//! shared recursion pattern.
//!
//! # Examples
//!
//! ```
//! use ordset::unbalanced::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert!(tree.contains(&2));
//! tree.remove(&2);
//! assert!(!tree.contains(&2));
//!
//! let keys: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(keys, [1, 3]);
//! ```

use std::cmp::Ordering;

type Link<K> = Option<Box<Node<K>>>;

/// An unbalanced binary search tree storing a set of unique keys.
///
/// Duplicate inserts and absent-key removes are silent no-ops; `min`/`max`
/// on an empty tree return `None`.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
}

#[derive(Clone, Debug)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node in the tree.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns `true` if the given key is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut cur = self.root.as_deref();
        while let Some(n) = cur {
            match key.cmp(&n.key) {
                Ordering::Less => cur = n.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => cur = n.right.as_deref(),
            }
        }
        false
    }

    /// Returns the smallest key in the tree, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&K> {
        let mut n = self.root.as_deref()?;
        while let Some(left) = n.left.as_deref() {
            n = left;
        }
        Some(&n.key)
    }

    /// Returns the largest key in the tree, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&K> {
        let mut n = self.root.as_deref()?;
        while let Some(right) = n.right.as_deref() {
            n = right;
        }
        Some(&n.key)
    }

    /// Inserts the given key. Inserting a present key is a no-op.
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        self.root = Some(insert(self.root.take(), key));
    }

    /// Removes the given key. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &K)
    where
        K: Ord,
    {
        self.root = remove(self.root.take(), key);
    }

    /// Returns an iterator visiting the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

/// An in-order iterator over the keys of a [`Tree`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node<K>>) {
        while let Some(n) = link {
            self.stack.push(n);
            link = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let n = self.stack.pop()?;
        self.push_left_spine(n.right.as_deref());
        Some(&n.key)
    }
}

fn insert<K>(link: Link<K>, key: K) -> Box<Node<K>>
where
    K: Ord,
{
    let mut t = match link {
        None => {
            return Box::new(Node {
                key,
                left: None,
                right: None,
            })
        }
        Some(t) => t,
    };

    match key.cmp(&t.key) {
        Ordering::Less => t.left = Some(insert(t.left.take(), key)),
        Ordering::Equal => {} // Duplicate; do nothing.
        Ordering::Greater => t.right = Some(insert(t.right.take(), key)),
    }
    t
}

fn remove<K>(link: Link<K>, key: &K) -> Link<K>
where
    K: Ord,
{
    let mut t = match link {
        None => return None, // Key not found; do nothing.
        Some(t) => t,
    };

    match key.cmp(&t.key) {
        Ordering::Less => t.left = remove(t.left.take(), key),
        Ordering::Greater => t.right = remove(t.right.take(), key),
        Ordering::Equal => {
            return match (t.left.take(), t.right.take()) {
                (left, None) => left,
                (None, Some(right)) => Some(right),
                (Some(left), Some(right)) => {
                    let (successor, right) = take_min(right);
                    t.key = successor;
                    t.left = Some(left);
                    t.right = right;
                    Some(t)
                }
            };
        }
    }
    Some(t)
}

/// Splits the smallest key out of a non-empty subtree.
fn take_min<K>(mut t: Box<Node<K>>) -> (K, Link<K>) {
    match t.left.take() {
        None => {
            let n = *t;
            (n.key, n.right)
        }
        Some(left) => {
            let (min, rest) = take_min(left);
            t.left = rest;
            (min, Some(t))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(tree: &Tree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn sorted_iteration() {
        let mut tree = Tree::new();
        for key in [5, 3, 8, 1, 4, 7, 9] {
            tree.insert(key);
        }

        assert_eq!(keys(&tree), [1, 3, 4, 5, 7, 8, 9]);
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&9));
    }

    #[test]
    fn duplicate_insert_is_a_noop() {
        let mut tree = Tree::new();
        tree.insert(1);
        tree.insert(1);

        assert_eq!(keys(&tree), [1]);
    }

    #[test]
    fn remove_two_children_promotes_successor() {
        let mut tree = Tree::new();
        for key in [5, 3, 8, 1, 4, 7, 9] {
            tree.insert(key);
        }

        tree.remove(&5);

        assert!(!tree.contains(&5));
        assert_eq!(keys(&tree), [1, 3, 4, 7, 8, 9]);
    }

    #[test]
    fn remove_leaf_and_single_child_nodes() {
        let mut tree = Tree::new();
        for key in [5, 3, 8, 9] {
            tree.insert(key);
        }

        tree.remove(&3); // leaf
        tree.remove(&8); // right child only

        assert_eq!(keys(&tree), [5, 9]);
    }

    #[test]
    fn empty_tree_queries() {
        let mut tree: Tree<i32> = Tree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert!(!tree.contains(&1));

        tree.remove(&1);
        tree.clear();
        assert!(tree.is_empty());
    }
}
