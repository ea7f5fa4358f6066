//! A self-balancing Binary Search Tree, built mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree (BST) stores keys in `Node`s. Every `Node` has up to two children and the
//! most important invariants are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its own
//!    key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than its
//!    own key.
//!
//! Searching takes `O(height)` where `height` is the longest path from the root `Node` to a leaf
//! `Node`. Inserting sorted keys into a plain BST makes that path as long as the number of keys.
//!
//! ## AVL trees
//!
//! An AVL tree additionally caches the height of every subtree and keeps the heights of any
//! `Node`'s two subtrees within one of each other. That bounds the height by roughly
//! `1.45 * lg N` for `N` keys. After every insert or delete each ancestor of the changed `Node`
//! is checked on the way back up to the root and, if it has become lopsided, rotated back into
//! shape. The [`balance`] module holds that decision procedure.
//!
//! ```
//! use avl::{Logger, Tree};
//!
//! let mut tree = Tree::new();
//! for key in [15, 27, 49, 10, 8, 67, 59, 9, 13, 20, 14] {
//!     // Log every rotation at debug level.
//!     tree.insert_observed(key, &mut Logger::default());
//! }
//!
//! assert_eq!(tree.len(), 11);
//! assert_eq!(tree.height(), 4);
//! assert_eq!(tree.min(), Some(&8));
//! assert_eq!(tree.max(), Some(&67));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balance;
#[cfg(feature = "dot")]
mod dot;
mod error;
pub mod iter;
mod node;
pub mod observe;
mod rotate;
mod tree;


pub use balance::BalanceState;
#[cfg(feature = "dot")]
pub use dot::Dot;
pub use error::InvariantError;
pub use node::{balance_factor, Node};
pub use observe::{Logger, Observer, Operation, Rebalance};
pub use tree::Tree;
