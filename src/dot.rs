use std::fmt;

use crate::node::Node;
use crate::Tree;

/// A [graphviz] rendering of a [`Tree`], created by [`Tree::dot`]. Nodes are labelled with their
/// key and cached height, edges with the side of the child.
///
/// [graphviz]: https://graphviz.org/doc/info/lang.html
pub struct Dot<'a, K> {
    pub(crate) tree: &'a Tree<K>,
}

/// Formats `key` as a quoted dot identifier.
fn id<K: fmt::Debug>(key: &K) -> String {
    let debug = format!("{key:?}");
    format!("\"{}\"", debug.replace('\\', "\\\\").replace('"', "\\\""))
}

fn node_fmt<K: fmt::Debug>(f: &mut fmt::Formatter<'_>, node: &Node<K>) -> fmt::Result {
    let id = id(&node.key);
    writeln!(f, "    {id} [label={id} xlabel=\"h={}\"];", node.height)?;

    for (side, child) in [("left", node.left()), ("right", node.right())] {
        if let Some(child) = child {
            writeln!(f, "    {id} -> {} [label=\"{side}\"];", self::id(&child.key))?;
            node_fmt(f, child)?;
        }
    }
    Ok(())
}

impl<K> fmt::Display for Dot<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("digraph {\n")?;
        if let Some(root) = self.tree.root() {
            node_fmt(f, root)?;
        }
        f.write_str("}\n")
    }
}

impl<K> fmt::Debug for Dot<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
