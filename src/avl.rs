//! A height-balanced (AVL) ordered set. Every node caches the height of the
//! subtree it roots, and every mutation rebalances with at most one rotation
//! per node on the way back up the search path. This keeps the tree within
//! one unit of perfect balance at every node, so `insert`, `remove`,
//! `contains`, `min`, and `max` are all worst-case `O(lg N)`.
//!
//! Structural edits use ownership transfer: a recursive call consumes a
//! subtree and returns the (possibly rotated) subtree that replaces it. There
//! is no parent pointer and no aliasing anywhere.
//!
//! # Examples
//!
//! ```
//! use ordset::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.min(), None);
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert!(tree.contains(&1));
//! assert_eq!(tree.min(), Some(&1));
//! assert_eq!(tree.max(), Some(&3));
//!
//! // Keys come back out in ascending order.
//! let keys: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(keys, [1, 2, 3]);
//!
//! // Removing a missing key does nothing.
//! tree.remove(&42);
//! tree.remove(&2);
//! assert!(!tree.contains(&2));
//! ```

use std::cmp::Ordering;

/// The largest height difference between two sibling subtrees that does not
/// trigger a rotation. Anything beyond this is a logic error.
const ALLOWED_IMBALANCE: i32 = 1;

type Link<K> = Option<Box<Node<K>>>;

/// A self-balancing binary search tree (specifically, an AVL tree) storing a
/// set of unique keys.
///
/// Empty-set `min`/`max` queries signal underflow by returning `None`;
/// inserting a present key and removing an absent key are silent no-ops.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
}

#[derive(Clone, Debug)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,

    /// Height of the subtree rooted at this node. A leaf has height 0; an
    /// absent child counts as -1.
    height: i32,
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

    /// Drops every node in the tree. Clearing an empty tree does nothing.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns `true` if the given key is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordset::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
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

    /// Inserts the given key into the tree. Inserting a key that is already
    /// present leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordset::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.iter().count(), 1);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        self.root = Some(insert(self.root.take(), key));
    }

    /// Removes the given key from the tree. Removing a key that is not
    /// present leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordset::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// tree.remove(&1);
    /// tree.remove(&42);
    ///
    /// assert!(!tree.contains(&1));
    /// ```
    pub fn remove(&mut self, key: &K)
    where
        K: Ord,
    {
        self.root = remove(self.root.take(), key);
    }

    /// Returns an iterator visiting the keys in ascending order. The iterator
    /// is lazy; call `iter` again to restart from the smallest key.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Walks the whole tree re-deriving every height from scratch and panics
    /// if any node violates the search order, the cached-height rule
    /// (`height = 1 + max(left, right)` with absent children at -1), or the
    /// balance bound. A violation means a defect in this module, so this is a
    /// fatal assertion, not a recoverable condition.
    ///
    /// Read-only diagnostic; it never mutates the tree.
    pub fn check_invariants(&self)
    where
        K: Ord,
    {
        check(&self.root, None, None);
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

/// An in-order iterator over the keys of a [`Tree`]. Holds the unvisited
/// left spine on an explicit stack, so `next` is amortized `O(1)`.
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
            height: 0,
        }
    }

    /// Adjusts the cached height to be one more than the taller child's.
    fn update_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }
}

/// The height of a possibly-absent subtree: -1 for an empty link, the cached
/// height otherwise.
fn height<K>(link: &Link<K>) -> i32 {
    link.as_deref().map_or(-1, |n| n.height)
}

fn insert<K>(link: Link<K>, key: K) -> Box<Node<K>>
where
    K: Ord,
{
    let mut t = match link {
        None => return Box::new(Node::new(key)),
        Some(t) => t,
    };

    match key.cmp(&t.key) {
        Ordering::Less => t.left = Some(insert(t.left.take(), key)),
        Ordering::Equal => {} // Duplicate; do nothing.
        Ordering::Greater => t.right = Some(insert(t.right.take(), key)),
    }
    balance(t)
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
                // No right child: the left child (if any) takes this node's
                // place and no rebalancing is needed above the splice.
                (left, None) => left,
                (None, Some(right)) => Some(right),
                // Two children: promote the in-order successor. `take_min`
                // moves the smallest key out of the right subtree and
                // rebalances that subtree's left spine on the way up.
                (Some(left), Some(right)) => {
                    let (successor, right) = take_min(right);
                    t.key = successor;
                    t.left = Some(left);
                    t.right = right;
                    Some(balance(t))
                }
            };
        }
    }
    Some(balance(t))
}

/// Splits the smallest key out of a non-empty subtree, returning it together
/// with the rebalanced remainder.
fn take_min<K>(mut t: Box<Node<K>>) -> (K, Link<K>) {
    match t.left.take() {
        None => {
            let n = *t;
            (n.key, n.right)
        }
        Some(left) => {
            let (min, rest) = take_min(left);
            t.left = rest;
            (min, Some(balance(t)))
        }
    }
}

/// Restores the balance bound at `t`, assuming `t` was balanced or within one
/// unit of balanced before its most recent child change. Applies at most one
/// single or double rotation, then recomputes the height.
fn balance<K>(mut t: Box<Node<K>>) -> Box<Node<K>> {
    if height(&t.left) - height(&t.right) > ALLOWED_IMBALANCE {
        let left = t
            .left
            .as_deref()
            .expect("left subtree taller than right implies a left child");
        if height(&left.left) >= height(&left.right) {
            t = rotate_with_left_child(t);
        } else {
            t = double_with_left_child(t);
        }
    } else if height(&t.right) - height(&t.left) > ALLOWED_IMBALANCE {
        let right = t
            .right
            .as_deref()
            .expect("right subtree taller than left implies a right child");
        if height(&right.right) >= height(&right.left) {
            t = rotate_with_right_child(t);
        } else {
            t = double_with_right_child(t);
        }
    }
    t.update_height();

    // In debug builds, assert that we've restored/maintained the AVL bound.
    if cfg!(debug_assertions) {
        assert!((height(&t.left) - height(&t.right)).abs() <= ALLOWED_IMBALANCE);
    }
    t
}

/// Single right rotation (left-left case). The left child takes `k2`'s
/// place; `k2` becomes its right child and adopts its former right subtree:
///
/// ```text
///       k2            k1
///      /  \          /  \
///     k1   z   ->   x    k2
///    /  \               /  \
///   x    y             y    z
/// ```
///
/// Heights are recomputed child-first.
fn rotate_with_left_child<K>(mut k2: Box<Node<K>>) -> Box<Node<K>> {
    let mut k1 = k2
        .left
        .take()
        .expect("single right rotation requires a left child");
    k2.left = k1.right.take();
    k2.update_height();
    k1.right = Some(k2);
    k1.update_height();
    k1
}

/// Single left rotation (right-right case). Mirror image of
/// [`rotate_with_left_child`].
fn rotate_with_right_child<K>(mut k1: Box<Node<K>>) -> Box<Node<K>> {
    let mut k2 = k1
        .right
        .take()
        .expect("single left rotation requires a right child");
    k1.right = k2.left.take();
    k1.update_height();
    k2.left = Some(k1);
    k2.update_height();
    k2
}

/// Double rotation for the left-right ("zig-zag") case: rotate the left
/// child with *its* right child, then rotate `k3` with its new left child.
fn double_with_left_child<K>(mut k3: Box<Node<K>>) -> Box<Node<K>> {
    let left = k3
        .left
        .take()
        .expect("double rotation requires a left child");
    k3.left = Some(rotate_with_right_child(left));
    rotate_with_left_child(k3)
}

/// Double rotation for the right-left case. Mirror image of
/// [`double_with_left_child`].
fn double_with_right_child<K>(mut k1: Box<Node<K>>) -> Box<Node<K>> {
    let right = k1
        .right
        .take()
        .expect("double rotation requires a right child");
    k1.right = Some(rotate_with_left_child(right));
    rotate_with_right_child(k1)
}

/// Recomputes the height of the subtree at `link` bottom-up, panicking on
/// any order, height-consistency, or balance violation. `lo`/`hi` are the
/// exclusive bounds inherited from ancestors.
fn check<K>(link: &Link<K>, lo: Option<&K>, hi: Option<&K>) -> i32
where
    K: Ord,
{
    let n = match link.as_deref() {
        None => return -1,
        Some(n) => n,
    };

    if let Some(lo) = lo {
        assert!(n.key > *lo, "key not greater than an ancestor to its left");
    }
    if let Some(hi) = hi {
        assert!(n.key < *hi, "key not less than an ancestor to its right");
    }

    let hl = check(&n.left, lo, Some(&n.key));
    let hr = check(&n.right, Some(&n.key), hi);

    assert_eq!(n.height, hl.max(hr) + 1, "cached height is stale");
    assert!(
        (hl - hr).abs() <= ALLOWED_IMBALANCE,
        "balance factor out of range"
    );
    n.height
}
