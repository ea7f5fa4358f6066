//! Borrowing traversals over the keys of a [`Tree`][crate::Tree]. Rebalancing never changes the
//! in-order sequence, only the pre-order and post-order ones.

use std::iter::FusedIterator;

use crate::node::Node;

/// An in-order iterator over the keys of a [`Tree`][crate::Tree], yielding them in strictly
/// increasing order. Created by [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, K> {
    /// Nodes whose key hasn't been yielded yet, with the next one on top. Its depth never exceeds
    /// the height of the tree.
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

/// A pre-order iterator (node, then left subtree, then right subtree) over the keys of a
/// [`Tree`][crate::Tree]. Created by [`Tree::pre_order`][crate::Tree::pre_order].
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.key)
    }
}

impl<K> FusedIterator for PreOrder<'_, K> {}

/// A post-order iterator (left subtree, then right subtree, then node) over the keys of a
/// [`Tree`][crate::Tree]. Created by [`Tree::post_order`][crate::Tree::post_order].
pub struct PostOrder<'a, K> {
    /// Nodes paired with whether their children have already been pushed.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.key);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
        None
    }
}

impl<K> FusedIterator for PostOrder<'_, K> {}
