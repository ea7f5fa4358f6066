//! A self-balancing Binary Search Tree (specifically, an AVL tree) of unique keys.
//!
//! Inserts and deletes recurse down to the position of the key, make their structural change and
//! then, on the way back up, refresh each ancestor's height, classify it with the
//! [`balance`][crate::balance] state machine and rotate it if needed. Every recursive call takes
//! ownership of the subtree it works on and hands back the (possibly new) root of that subtree,
//! which the caller stores in place of the old one.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // Inserting ascending keys would make a plain BST a linked list.
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.root().map(|n| *n.key()), Some(4));
//!
//! // Inserting an existing key does nothing.
//! assert!(!tree.insert(4));
//!
//! assert!(tree.delete(&4));
//! assert!(!tree.contains(&4));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::balance;
use crate::error::InvariantError;
use crate::iter::{Iter, PostOrder, PreOrder};
use crate::node::{self, Link, Node};
use crate::observe::{Observer, Operation, Rebalance};

/// An AVL tree of unique keys. See the [module documentation][self] for an overview.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree. The empty tree has height 0 and a single key has height 1.
    /// The AVL invariant keeps this below `1.45 * log2(len + 2)`.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// The root node, for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The smallest key, if any.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key, if any.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.key)
    }

    /// Iterates over the keys in increasing order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len)
    }

    /// Iterates over the keys visiting every node before its subtrees.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root())
    }

    /// Iterates over the keys visiting every node after its subtrees.
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root())
    }

    /// Renders the tree in [graphviz] `dot` format.
    ///
    /// [graphviz]: https://graphviz.org/doc/info/lang.html
    #[cfg(feature = "dot")]
    pub fn dot(&self) -> crate::dot::Dot<'_, K> {
        crate::dot::Dot { tree: self }
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Whether `key` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// The keys of the children of the node holding `key`, or `None` if `key` isn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.children(&2), Some((Some(&1), Some(&3))));
    /// assert_eq!(tree.children(&3), Some((None, None)));
    /// assert_eq!(tree.children(&4), None);
    /// ```
    pub fn children(&self, key: &K) -> Option<(Option<&K>, Option<&K>)> {
        self.find(key)
            .map(|node| (node.left().map(Node::key), node.right().map(Node::key)))
    }

    /// The keys visited while searching for `key`, starting at the root and ending with `key`
    /// itself, or `None` if `key` isn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = (1..=7).collect();
    ///
    /// assert_eq!(tree.path(&5), Some(vec![&4, &6, &5]));
    /// assert_eq!(tree.path(&8), None);
    /// ```
    pub fn path(&self, key: &K) -> Option<Vec<&K>> {
        let mut path = Vec::with_capacity(self.height());
        let mut link = self.root();
        while let Some(node) = link {
            path.push(&node.key);
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(path),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// How many edges lie between the root and the node holding `key`, or `None` if `key` isn't in
    /// the tree. The root has depth 0.
    pub fn depth(&self, key: &K) -> Option<usize> {
        self.path(key).map(|path| path.len() - 1)
    }

    fn find(&self, key: &K) -> Option<&Node<K>> {
        let mut link = self.root();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }
}

impl<K> Tree<K>
where
    K: Ord + Clone,
{
    /// Inserts `key`, rebalancing as needed. Returns `false` and leaves the tree untouched if the
    /// key was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        self.insert_observed(key, &mut ())
    }

    /// Like [`Tree::insert`] but reports every rotation it performs to `observer`.
    pub fn insert_observed<O>(&mut self, key: K, observer: &mut O) -> bool
    where
        O: Observer<K> + ?Sized,
    {
        let (root, inserted) = insert(self.root.take(), &key, observer);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Deletes `key`, rebalancing as needed. Returns `false` if the key wasn't in the tree, in
    /// which case nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        self.delete_observed(key, &mut ())
    }

    /// Like [`Tree::delete`] but reports every rotation it performs to `observer`.
    pub fn delete_observed<O>(&mut self, key: &K, observer: &mut O) -> bool
    where
        O: Observer<K> + ?Sized,
    {
        let (root, deleted) = delete(self.root.take(), key, observer);
        self.root = root;
        if deleted {
            self.len -= 1;
        }
        deleted
    }

    /// Checks every invariant of the tree: keys are strictly increasing in order, cached heights
    /// match the children, every balance factor is in `-1..=1` and the length is accurate.
    pub fn validate(&self) -> Result<(), InvariantError<K>> {
        if let Some(root) = self.root() {
            validate_node(root)?;
        }

        // Count without trusting `self.len` since that is one of the things being checked.
        let counted = PreOrder::new(self.root()).count();
        let mut previous: Option<&K> = None;
        for key in Iter::new(self.root(), counted) {
            if let Some(previous) = previous {
                if previous >= key {
                    return Err(InvariantError::OutOfOrder {
                        previous: previous.clone(),
                        key: key.clone(),
                    });
                }
            }
            previous = Some(key);
        }

        if counted != self.len {
            return Err(InvariantError::LengthMismatch {
                recorded: self.len,
                counted,
            });
        }
        Ok(())
    }

    /// Asserts every invariant checked by [`Tree::validate`].
    ///
    /// # Panics
    ///
    /// With a description of the first broken invariant.
    #[track_caller]
    pub fn assert_valid(&self)
    where
        K: fmt::Debug,
    {
        if let Err(err) = self.validate() {
            panic!("{err}; tree = {self:#?}");
        }
    }
}

/// Inserts `key` into the subtree at `link` and returns the new subtree root, along with whether
/// the key was new.
fn insert<K, O>(link: Link<K>, key: &K, observer: &mut O) -> (Box<Node<K>>, bool)
where
    K: Ord + Clone,
    O: Observer<K> + ?Sized,
{
    let Some(mut node) = link else {
        return (Node::new_boxed(key.clone()), true);
    };

    let inserted = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), key, observer);
            node.left = Some(left);
            inserted
        }
        Ordering::Equal => return (node, false),
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), key, observer);
            node.right = Some(right);
            inserted
        }
    };

    node.fix_height();
    let state = balance::classify_insert(&node, key);
    if !state.is_balanced() {
        observer.observe(Rebalance {
            operation: Operation::Insert,
            key,
            pivot: &node.key,
            state,
        });
    }
    (balance::resolve(node, state), inserted)
}

/// Deletes `key` from the subtree at `link` and returns the new subtree root, along with whether
/// the key was found.
fn delete<K, O>(link: Link<K>, key: &K, observer: &mut O) -> (Link<K>, bool)
where
    K: Ord + Clone,
    O: Observer<K> + ?Sized,
{
    let Some(mut node) = link else {
        return (None, false);
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, deleted) = delete(node.left.take(), key, observer);
            node.left = left;
            if !deleted {
                return (Some(node), false);
            }
        }
        Ordering::Greater => {
            let (right, deleted) = delete(node.right.take(), key, observer);
            node.right = right;
            if !deleted {
                return (Some(node), false);
            }
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // With at most one child that child takes our place. In an AVL tree a lone child is a
            // leaf so there is nothing to rebalance.
            (None, None) => return (None, true),
            (Some(child), None) | (None, Some(child)) => return (Some(child), true),
            // With two children we take over the key of our in-order successor (the smallest key
            // on the right) and delete the successor instead. The successor has no left child so
            // that nested delete ends in the case above.
            (Some(left), Some(right)) => {
                let successor = leftmost(&right).key.clone();
                let (right, _) = delete(Some(right), &successor, observer);
                node.left = Some(left);
                node.right = right;
                node.key = successor;
            }
        },
    }

    node.fix_height();
    let state = balance::classify_delete(&node);
    if !state.is_balanced() {
        observer.observe(Rebalance {
            operation: Operation::Delete,
            key,
            pivot: &node.key,
            state,
        });
    }
    (Some(balance::resolve(node, state)), true)
}

fn leftmost<K>(mut node: &Node<K>) -> &Node<K> {
    while let Some(left) = node.left() {
        node = left;
    }
    node
}

/// Checks the cached heights and balance factors of every node below and including `node`.
fn validate_node<K>(node: &Node<K>) -> Result<(), InvariantError<K>>
where
    K: Clone,
{
    // Children first so their cached heights can be trusted below.
    if let Some(left) = node.left() {
        validate_node(left)?;
    }
    if let Some(right) = node.right() {
        validate_node(right)?;
    }

    let expected = node::height(&node.left).max(node::height(&node.right)) + 1;
    if node.height != expected {
        return Err(InvariantError::StaleHeight {
            key: node.key.clone(),
            cached: node.height,
            expected,
        });
    }

    let balance_factor = node.balance_factor();
    if !(-1..=1).contains(&balance_factor) {
        return Err(InvariantError::Unbalanced {
            key: node.key.clone(),
            balance_factor,
        });
    }
    Ok(())
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord + Clone,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}
