//! The node shape shared by every tree operation and the cached height bookkeeping that the
//! rebalancing logic relies on.

/// An owning, possibly empty, pointer to a subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single node of a [`Tree`][crate::Tree]. A node exclusively owns both of its subtrees so a
/// tree never has back references, shared children or cycles.
///
/// Nodes are only handed out by shared reference so callers can inspect the shape of a tree
/// without being able to break its invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,

    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Construct a new leaf holding `key`.
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The cached height of the subtree rooted at this node. This is never recomputed on read;
    /// every mutating operation keeps it up to date.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The left child, whose subtree only holds keys less than [`Node::key`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, whose subtree only holds keys greater than [`Node::key`].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The height of the left subtree minus the height of the right subtree. Positive values mean
    /// the node leans left. See [the Wikipedia page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }
}

/// The cached height of a subtree. An empty subtree has height 0.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// The balance factor of a possibly absent node. An absent node is balanced.
pub fn balance_factor<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(0, Node::balance_factor)
}
