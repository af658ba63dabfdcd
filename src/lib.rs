//! This crate exposes a few ordered-set containers built on Binary Search
//! Trees (BSTs), with a height-balanced (AVL) tree as the centerpiece.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores keys in `Node`s, where every `Node` may have
//! a left and a right child. The defining invariants are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold a key less
//!    than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree hold a key
//!    greater than its own key.
//!
//! Searching then takes `O(height)`, and visiting the left subtree, the
//! `Node`, and the right subtree yields the keys in ascending order. The
//! catch is that nothing in the plain structure bounds the height: feed a
//! BST sorted input and it degrades into a linked list.
//!
//! ## The variants
//!
//! - [`avl`] keeps a cached height in every `Node` and rotates after each
//!   mutation so that sibling subtree heights never differ by more than
//!   one. Every operation is worst-case `O(lg N)`. This is the default
//!   tree, re-exported as [`Tree`] at the crate root.
//! - [`unbalanced`] does no rebalancing at all. Simple, but `O(N)` in the
//!   worst case.
//! - [`splay`] rotates each accessed key all the way to the root instead of
//!   tracking heights, giving `O(lg N)` amortized over any operation
//!   sequence.
//!
//! All three share one convention set: duplicate inserts and absent-key
//! removes are silent no-ops, empty-tree `min`/`max` return `None`, and
//! `iter` walks the keys in ascending order.

#![deny(missing_docs)]

pub mod avl;
pub mod splay;
pub mod unbalanced;


pub use crate::avl::Tree;
