//! Constant time restructurings of a subtree. Rotations only rewire the nodes involved, they never
//! allocate or free, and they keep the BST ordering intact.
//!
//! Every rotation requires a specific child to exist. Only the balance classifier chooses a
//! rotation and it only does so after the balance factor proved that child is present, so a
//! missing child here is a classifier bug and panics rather than being papered over.

use crate::node::Node;

/// Rotate `y` to the right. This moves the left child up vertically and `y` down vertically.
/// Used to rebalance the tree when the left child is too tall.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///        y                x
///       / \              / \
///      x   T3   ->     T1   y
///     / \                  / \
///   T1   T2              T2   T3
/// ```
pub(crate) fn rotate_right<K>(mut y: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut x) = y.left.take() else {
        unreachable!("rotate right requires a left child");
    };

    // `y` ends up below `x` so its height has to be fixed first.
    y.left = x.right.take();
    y.fix_height();

    x.right = Some(y);
    x.fix_height();
    x
}

/// Rotate `x` to the left. The mirror image of [`rotate_right`].
///
/// ## Panics
///
/// When called on a node without a right child.
///
/// # Diagram
///
/// ```text
///      x                    y
///     / \                  / \
///   T1   y       ->       x   T3
///       / \              / \
///     T2   T3          T1   T2
/// ```
pub(crate) fn rotate_left<K>(mut x: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut y) = x.right.take() else {
        unreachable!("rotate left requires a right child");
    };

    x.right = y.left.take();
    x.fix_height();

    y.left = Some(x);
    y.fix_height();
    y
}

/// Rotates the left child to the left and then `node` to the right. Fixes a node whose left
/// subtree is too tall because of its *right* grandchild.
///
/// ## Panics
///
/// When `node` has no left child or that child has no right child.
pub(crate) fn rotate_left_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(left) = node.left.take() else {
        unreachable!("rotate left-right requires a left child");
    };
    node.left = Some(rotate_left(left));
    rotate_right(node)
}

/// Rotates the right child to the right and then `node` to the left. The mirror image of
/// [`rotate_left_right`].
///
/// ## Panics
///
/// When `node` has no right child or that child has no left child.
pub(crate) fn rotate_right_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(right) = node.right.take() else {
        unreachable!("rotate right-left requires a right child");
    };
    node.right = Some(rotate_right(right));
    rotate_left(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a node with the given children and a correct height.
    fn node(key: i32, left: Option<Box<Node<i32>>>, right: Option<Box<Node<i32>>>) -> Box<Node<i32>> {
        let mut node = Node::new_boxed(key);
        node.left = left;
        node.right = right;
        node.fix_height();
        node
    }

    fn leaf(key: i32) -> Option<Box<Node<i32>>> {
        Some(Node::new_boxed(key))
    }

    /// Assert the key, height and child keys of a subtree root.
    macro_rules! assert_node {
        ($node:expr, $key:expr, $height:expr, $left:expr, $right:expr) => {{
            let n = &$node;
            assert_eq!(n.key, $key);
            assert_eq!(n.height, $height);
            assert_eq!(n.left().map(|l| l.key), $left);
            assert_eq!(n.right().map(|r| r.key), $right);
        }};
    }

    #[test]
    fn rotate_right_moves_middle_subtree_across() {
        // 30 -> 20 -> 10 with 25 as the subtree that changes parents.
        let y = node(30, Some(node(20, leaf(10), leaf(25))), leaf(40));

        let x = rotate_right(y);

        assert_node!(x, 20, 3, Some(10), Some(30));
        let y = x.right().unwrap();
        assert_node!(y, 30, 2, Some(25), Some(40));
    }

    #[test]
    fn rotate_left_moves_middle_subtree_across() {
        let x = node(10, leaf(5), Some(node(20, leaf(15), leaf(30))));

        let y = rotate_left(x);

        assert_node!(y, 20, 3, Some(10), Some(30));
        let x = y.left().unwrap();
        assert_node!(x, 10, 2, Some(5), Some(15));
    }

    #[test]
    fn rotate_right_fixes_chain() {
        let y = node(3, Some(node(2, leaf(1), None)), None);

        let x = rotate_right(y);

        assert_node!(x, 2, 2, Some(1), Some(3));
        assert_eq!(x.balance_factor(), 0);
    }

    #[test]
    fn rotate_left_right_lifts_grandchild() {
        let node = node(30, Some(node(10, None, leaf(20))), None);

        let root = rotate_left_right(node);

        assert_node!(root, 20, 2, Some(10), Some(30));
        assert_node!(root.left().unwrap(), 10, 1, None, None);
        assert_node!(root.right().unwrap(), 30, 1, None, None);
    }

    #[test]
    fn rotate_right_left_lifts_grandchild() {
        let node = node(10, None, Some(node(30, leaf(20), None)));

        let root = rotate_right_left(node);

        assert_node!(root, 20, 2, Some(10), Some(30));
    }

    #[test]
    #[should_panic(expected = "rotate right requires a left child")]
    fn rotate_right_without_left_child_is_a_bug() {
        rotate_right(Node::new_boxed(1));
    }

    #[test]
    #[should_panic(expected = "rotate left requires a right child")]
    fn rotate_left_without_right_child_is_a_bug() {
        rotate_left(Node::new_boxed(1));
    }
}
