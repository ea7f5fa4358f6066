//! Tracing hooks for the rebalancing state machine. Every time an insert or delete classifies a
//! subtree root as anything but [`BalanceState::Balanced`], a [`Rebalance`] event is handed to the
//! caller's [`Observer`] just before the rotation is applied.
//!
//! Observers are purely observational. They can't change which rotation happens and the plain
//! [`Tree::insert`][crate::Tree::insert]/[`Tree::delete`][crate::Tree::delete] use `()` which
//! discards everything.
//!
//! # Examples
//!
//! ```
//! use avl::{BalanceState, Operation, Rebalance, Tree};
//!
//! let mut tree = Tree::new();
//! let mut events = Vec::new();
//! for key in [30, 10, 20] {
//!     tree.insert_observed(key, &mut events);
//! }
//!
//! assert_eq!(
//!     events,
//!     [Rebalance {
//!         operation: Operation::Insert,
//!         key: 20,
//!         pivot: 30,
//!         state: BalanceState::LeftRight,
//!     }]
//! );
//! ```

use std::fmt;

use crate::balance::BalanceState;

/// The tree operation that triggered a rebalance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// A key was inserted.
    Insert,
    /// A key was deleted.
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => f.write_str("insert"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// A subtree root was found unbalanced and is about to be rotated. Observers receive this with
/// borrowed keys (`Rebalance<&K>`); [`Rebalance::cloned`] makes an owned copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rebalance<K> {
    /// The operation being performed.
    pub operation: Operation,
    /// The key the operation is inserting or deleting at this level of the recursion. When a node
    /// with two children is deleted, its in-order successor is removed from the right subtree
    /// and events raised during that removal carry the successor's key.
    pub key: K,
    /// The key of the unbalanced subtree root, before rotating.
    pub pivot: K,
    /// How the subtree root is about to be rotated.
    pub state: BalanceState,
}

impl<K> Rebalance<&K>
where
    K: Clone,
{
    /// Clones the borrowed keys into an owned event.
    pub fn cloned(&self) -> Rebalance<K> {
        Rebalance {
            operation: self.operation,
            key: self.key.clone(),
            pivot: self.pivot.clone(),
            state: self.state,
        }
    }
}

impl<K> fmt::Display for Rebalance<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} unbalanced the subtree rooted at {:?}, rotating {}",
            self.operation, self.key, self.pivot, self.state
        )
    }
}

/// A sink for [`Rebalance`] events.
pub trait Observer<K> {
    /// Called once per unbalanced subtree root, before it is rotated.
    fn observe(&mut self, event: Rebalance<&K>);
}

impl<K> Observer<K> for () {
    fn observe(&mut self, _event: Rebalance<&K>) {}
}

impl<K> Observer<K> for Vec<Rebalance<K>>
where
    K: Clone,
{
    fn observe(&mut self, event: Rebalance<&K>) {
        self.push(event.cloned());
    }
}

impl<K, O> Observer<K> for &mut O
where
    O: Observer<K> + ?Sized,
{
    fn observe(&mut self, event: Rebalance<&K>) {
        (**self).observe(event);
    }
}

/// An [`Observer`] that writes every event to the [`log`] facade.
#[derive(Clone, Copy, Debug)]
pub struct Logger {
    level: log::Level,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(log::Level::Debug)
    }
}

impl Logger {
    /// Logs events at the given level.
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }

    /// The level events are logged at.
    pub fn level(&self) -> log::Level {
        self.level
    }
}

impl<K> Observer<K> for Logger
where
    K: fmt::Debug,
{
    fn observe(&mut self, event: Rebalance<&K>) {
        log::log!(target: "avl::rebalance", self.level, "{event}");
    }
}
