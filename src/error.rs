use std::error::Error;
use std::fmt;

/// A broken tree invariant, as reported by [`Tree::validate`][crate::Tree::validate]. Each variant
/// names the first offending node found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantError<K> {
    /// An in-order walk found `key` right after `previous` even though it isn't greater.
    OutOfOrder {
        /// The key visited before `key`.
        previous: K,
        /// The key that should have been greater than `previous`.
        key: K,
    },
    /// The cached height of a node doesn't match its children.
    StaleHeight {
        /// The node's key.
        key: K,
        /// The height stored in the node.
        cached: usize,
        /// `1 + max(left height, right height)`.
        expected: usize,
    },
    /// A node's subtrees differ in height by more than one.
    Unbalanced {
        /// The node's key.
        key: K,
        /// Left height minus right height.
        balance_factor: isize,
    },
    /// The tree's length counter disagrees with the number of nodes.
    LengthMismatch {
        /// The length the tree reports.
        recorded: usize,
        /// The number of nodes actually reachable from the root.
        counted: usize,
    },
}

impl<K> fmt::Display for InvariantError<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfOrder { previous, key } => {
                write!(f, "ordering violation: {key:?} follows {previous:?}")
            }
            Self::StaleHeight {
                key,
                cached,
                expected,
            } => write!(
                f,
                "height violation: node {key:?} caches height {cached} but its children imply {expected}"
            ),
            Self::Unbalanced {
                key,
                balance_factor,
            } => write!(
                f,
                "AVL balance violation: node {key:?} has balance factor {balance_factor}"
            ),
            Self::LengthMismatch { recorded, counted } => write!(
                f,
                "length violation: tree records {recorded} keys but holds {counted}"
            ),
        }
    }
}

impl<K> Error for InvariantError<K> where K: fmt::Debug {}
