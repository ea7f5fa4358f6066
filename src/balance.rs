//! The rebalancing state machine. On every unwind step of an insert or delete, right after the
//! current node's height has been refreshed, the node is classified into one of five
//! [`BalanceState`]s and the matching rotations are applied.
//!
//! Inserts and deletes share the states and the resolution table but classify differently:
//!
//! * After an insert exactly one grandchild subtree grew, and the inserted key tells us which one.
//! * After a delete there is no such key, so the lean of the taller child decides. A child that
//!   doesn't lean at all is handled with a single rotation.
//!
//! Using the insert rule for deletes (or vice versa) picks the wrong rotation in rare shapes, so
//! the two are kept as separate functions.

use std::cmp::Ordering;
use std::fmt;

use crate::node::Node;
use crate::rotate;

/// How a subtree root needs to be rotated to restore the AVL balance invariant. See [the Wikipedia
/// page][wiki] for the terminology.
///
/// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BalanceState {
    /// The balance factor is in `-1..=1`. Nothing to do.
    Balanced,
    /// The left child's left subtree is too tall. Fixed by a right rotation.
    LeftLeft,
    /// The right child's right subtree is too tall. Fixed by a left rotation.
    RightRight,
    /// The left child's right subtree is too tall. Fixed by rotating the left child to the left
    /// and then the node to the right.
    LeftRight,
    /// The right child's left subtree is too tall. Fixed by rotating the right child to the right
    /// and then the node to the left.
    RightLeft,
}

impl BalanceState {
    /// Whether this state requires no rotation.
    pub fn is_balanced(self) -> bool {
        self == Self::Balanced
    }
}

impl fmt::Display for BalanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Balanced => "balanced",
            Self::LeftLeft => "left-left",
            Self::RightRight => "right-right",
            Self::LeftRight => "left-right",
            Self::RightLeft => "right-left",
        })
    }
}

/// Classifies `node` after `key` was inserted somewhere below it. `node`'s height must already be
/// up to date.
///
/// A node that leans left by more than one is `LeftLeft` when `key` went into its left child's
/// left subtree and `LeftRight` when it went into the right one. Leaning right is the mirror
/// image.
pub fn classify_insert<K>(node: &Node<K>, key: &K) -> BalanceState
where
    K: Ord,
{
    match (node.balance_factor(), node.left(), node.right()) {
        (balance, Some(left), _) if balance > 1 => match key.cmp(&left.key) {
            Ordering::Less => BalanceState::LeftLeft,
            Ordering::Greater => BalanceState::LeftRight,
            Ordering::Equal => BalanceState::Balanced,
        },
        (balance, _, Some(right)) if balance < -1 => match key.cmp(&right.key) {
            Ordering::Greater => BalanceState::RightRight,
            Ordering::Less => BalanceState::RightLeft,
            Ordering::Equal => BalanceState::Balanced,
        },
        _ => BalanceState::Balanced,
    }
}

/// Classifies `node` after a key was deleted somewhere below it. `node`'s height must already be
/// up to date.
///
/// A node that leans left by more than one is `LeftLeft` unless its left child leans right, in
/// which case it is `LeftRight`. Leaning right is the mirror image.
pub fn classify_delete<K>(node: &Node<K>) -> BalanceState {
    match (node.balance_factor(), node.left(), node.right()) {
        (balance, Some(left), _) if balance > 1 => {
            if left.balance_factor() >= 0 {
                BalanceState::LeftLeft
            } else {
                BalanceState::LeftRight
            }
        }
        (balance, _, Some(right)) if balance < -1 => {
            if right.balance_factor() <= 0 {
                BalanceState::RightRight
            } else {
                BalanceState::RightLeft
            }
        }
        _ => BalanceState::Balanced,
    }
}

/// Applies the rotations `state` calls for and returns the new subtree root.
pub(crate) fn resolve<K>(node: Box<Node<K>>, state: BalanceState) -> Box<Node<K>> {
    let node = match state {
        BalanceState::Balanced => node,
        BalanceState::LeftLeft => rotate::rotate_right(node),
        BalanceState::RightRight => rotate::rotate_left(node),
        BalanceState::LeftRight => rotate::rotate_left_right(node),
        BalanceState::RightLeft => rotate::rotate_right_left(node),
    };

    // In tests, after balancing, assert that we've restored/maintained the AVL invariant.
    if cfg!(debug_assertions) {
        let left_height = node.left().map_or(0, |n| n.height);
        let right_height = node.right().map_or(0, |n| n.height);
        assert_eq!(node.height, left_height.max(right_height) + 1);
        assert!(
            left_height.abs_diff(right_height) <= 1,
            "{state} resolution left a subtree with heights {left_height} and {right_height}"
        );
    }

    node
}
