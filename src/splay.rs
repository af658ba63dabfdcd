//! A self-adjusting (splay) tree. Every lookup, insert, and remove splays
//! the accessed key to the root, so recently touched keys sit near the top
//! and any sequence of `M` operations costs `O(M lg N)` amortized — no
//! per-node height bookkeeping required.
//!
//! Because lookups restructure the tree, [`Tree::contains`] takes
//! `&mut self` here, unlike the balanced core in [`crate::avl`].
//!
//! Absence is modeled as an explicit empty link, the same as the other
//! variants; a shared sentinel node would be an aliasing hazard in Rust and
//! buys nothing outside a hand-tuned hot loop.
//!
//! # Examples
//!
//! ```
//! use ordset::splay::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert!(tree.contains(&1));
//! tree.remove(&2);
//! assert!(!tree.contains(&2));
//!
//! let keys: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(keys, [1, 3]);
//! ```

use std::cmp::Ordering;

type Link<K> = Option<Box<Node<K>>>;

/// A splay tree storing a set of unique keys.
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

    /// Returns `true` if the given key is in the tree, splaying it (or its
    /// closest neighbor) to the root. Takes `&mut self` because a splay-tree
    /// lookup restructures the tree; that restructuring is what pays for the
    /// amortized bound.
    pub fn contains(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let root = match self.root.take() {
            None => return false,
            Some(root) => root,
        };
        let root = splay(root, key);
        let found = root.key == *key;
        self.root = Some(root);
        found
    }

    /// Returns the smallest key in the tree, or `None` if the tree is empty.
    /// Read-only descent; does not splay.
    pub fn min(&self) -> Option<&K> {
        let mut n = self.root.as_deref()?;
        while let Some(left) = n.left.as_deref() {
            n = left;
        }
        Some(&n.key)
    }

    /// Returns the largest key in the tree, or `None` if the tree is empty.
    /// Read-only descent; does not splay.
    pub fn max(&self) -> Option<&K> {
        let mut n = self.root.as_deref()?;
        while let Some(right) = n.right.as_deref() {
            n = right;
        }
        Some(&n.key)
    }

    /// Inserts the given key and splays it to the root. Inserting a present
    /// key only splays it; the key set is unchanged.
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let root = match self.root.take() {
            None => {
                self.root = Some(Box::new(Node::new(key)));
                return;
            }
            Some(root) => root,
        };

        // After splaying, the root is the closest key to `key`, so splitting
        // its subtrees around the new node preserves the search order.
        let mut root = splay(root, &key);
        match key.cmp(&root.key) {
            Ordering::Equal => self.root = Some(root), // Duplicate; do nothing.
            Ordering::Less => {
                let mut n = Box::new(Node::new(key));
                n.left = root.left.take();
                n.right = Some(root);
                self.root = Some(n);
            }
            Ordering::Greater => {
                let mut n = Box::new(Node::new(key));
                n.right = root.right.take();
                n.left = Some(root);
                self.root = Some(n);
            }
        }
    }

    /// Removes the given key. Removing an absent key only splays its closest
    /// neighbor; the key set is unchanged.
    pub fn remove(&mut self, key: &K)
    where
        K: Ord,
    {
        let root = match self.root.take() {
            None => return,
            Some(root) => root,
        };

        let mut root = splay(root, key);
        if root.key != *key {
            self.root = Some(root);
            return;
        }

        // Join the two subtrees: splaying the left subtree for `key` brings
        // its maximum to the root with an empty right slot, where the right
        // subtree can be hung.
        self.root = match (root.left.take(), root.right.take()) {
            (None, right) => right,
            (Some(left), right) => {
                let mut left = splay(left, key);
                debug_assert!(left.right.is_none());
                left.right = right;
                Some(left)
            }
        };
    }

    /// Returns an iterator visiting the keys in ascending order. Iteration
    /// is read-only and does not splay.
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

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

/// Splays for `key`: after this returns, the subtree root is `key` if
/// present, and otherwise the last node on its search path — which is
/// `key`'s in-order predecessor or successor. Zig, zig-zig, and zig-zag
/// steps are handled per level of recursion.
fn splay<K>(mut t: Box<Node<K>>, key: &K) -> Box<Node<K>>
where
    K: Ord,
{
    match key.cmp(&t.key) {
        Ordering::Equal => t,
        Ordering::Less => {
            let mut l = match t.left.take() {
                None => return t, // Fell off the path; `t` is the successor.
                Some(l) => l,
            };
            match key.cmp(&l.key) {
                // Zig-zig: splay deeper first, then rotate twice at the top.
                Ordering::Less => {
                    if let Some(ll) = l.left.take() {
                        l.left = Some(splay(ll, key));
                    }
                    t.left = Some(l);
                    let mut root = rotate_right(t);
                    if root.left.is_some() {
                        root = rotate_right(root);
                    }
                    root
                }
                // Zig-zag: lift the grandchild above the child, then above us.
                Ordering::Greater => {
                    if let Some(lr) = l.right.take() {
                        l.right = Some(splay(lr, key));
                        l = rotate_left(l);
                    }
                    t.left = Some(l);
                    rotate_right(t)
                }
                // Zig: the key is the child itself.
                Ordering::Equal => {
                    t.left = Some(l);
                    rotate_right(t)
                }
            }
        }
        Ordering::Greater => {
            let mut r = match t.right.take() {
                None => return t, // Fell off the path; `t` is the predecessor.
                Some(r) => r,
            };
            match key.cmp(&r.key) {
                Ordering::Greater => {
                    if let Some(rr) = r.right.take() {
                        r.right = Some(splay(rr, key));
                    }
                    t.right = Some(r);
                    let mut root = rotate_left(t);
                    if root.right.is_some() {
                        root = rotate_left(root);
                    }
                    root
                }
                Ordering::Less => {
                    if let Some(rl) = r.left.take() {
                        r.left = Some(splay(rl, key));
                        r = rotate_right(r);
                    }
                    t.right = Some(r);
                    rotate_left(t)
                }
                Ordering::Equal => {
                    t.right = Some(r);
                    rotate_left(t)
                }
            }
        }
    }
}

/// Lifts the left child above `t`. Purely structural; no metadata to fix.
fn rotate_right<K>(mut t: Box<Node<K>>) -> Box<Node<K>> {
    let mut l = t.left.take().expect("right rotation requires a left child");
    t.left = l.right.take();
    l.right = Some(t);
    l
}

/// Lifts the right child above `t`. Mirror image of [`rotate_right`].
fn rotate_left<K>(mut t: Box<Node<K>>) -> Box<Node<K>> {
    let mut r = t.right.take().expect("left rotation requires a right child");
    t.right = r.left.take();
    r.left = Some(t);
    r
}
