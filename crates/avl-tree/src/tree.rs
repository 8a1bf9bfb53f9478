use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::arena::Arena;
use crate::error::AvlError;
use crate::iter::{BreadthFirstIter, InOrderIter, PostOrderIter, PreOrderIter};
use crate::util;

/// Self-balancing binary search tree.
///
/// Values comparing `Less` than a node go to its left subtree, everything
/// else (duplicates included) to its right. Nodes live in an [`Arena`]
/// owned exclusively by the tree and are linked by index.
pub struct AvlTree<T, C = fn(&T, &T) -> Ordering>
where
    C: Fn(&T, &T) -> Ordering,
{
    root: Option<u32>,
    comparator: C,
    arena: Arena<T>,
}

impl<T> AvlTree<T, fn(&T, &T) -> Ordering>
where
    T: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T> Default for AvlTree<T, fn(&T, &T) -> Ordering>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Arena::new(),
        }
    }

    pub fn insert(&mut self, value: T) {
        let mut taller = false;
        self.root = Some(util::insert(
            &mut self.arena,
            self.root,
            value,
            &self.comparator,
            &mut taller,
        ));
    }

    /// Removes one node equal to `value`, then rebalances the whole tree
    /// from the root.
    ///
    /// # Errors
    ///
    /// - [`AvlError::EmptyTree`] if the tree has no nodes.
    /// - [`AvlError::NotFound`] if no node compares equal to `value`. The
    ///   tree is left untouched.
    pub fn delete(&mut self, value: &T) -> Result<(), AvlError> {
        if self.is_empty() {
            return Err(AvlError::EmptyTree);
        }
        let root = util::remove(&mut self.arena, self.root, value, &self.comparator)?;
        let (root, sweeps) = util::rebalance(&mut self.arena, root);
        self.root = root;
        debug!(sweeps, remaining = self.arena.len(), "deleted value");
        Ok(())
    }

    /// Releases every node, children before parent.
    pub fn purge(&mut self) {
        let released = util::purge(&mut self.arena, self.root.take());
        self.arena.clear();
        if released > 0 {
            debug!(released, "purged tree");
        }
    }

    /// # Errors
    ///
    /// [`AvlError::EmptyTree`] if the tree has no nodes.
    pub fn height(&self) -> Result<usize, AvlError> {
        if self.is_empty() {
            return Err(AvlError::EmptyTree);
        }
        Ok(util::height(&self.arena, self.root))
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// True iff every stored balance factor lies in `[-1, 1]`.
    pub fn is_balanced(&self) -> bool {
        util::is_balanced(&self.arena, self.root)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn contains(&self, value: &T) -> bool {
        util::find(&self.arena, self.root, value, &self.comparator).is_some()
    }

    pub fn root(&self) -> Option<&T> {
        self.root.map(|i| &self.arena.node(i).v)
    }

    pub fn first(&self) -> Option<&T> {
        util::first(&self.arena, self.root).map(|i| &self.arena.node(i).v)
    }

    pub fn last(&self) -> Option<&T> {
        util::last(&self.arena, self.root).map(|i| &self.arena.node(i).v)
    }

    pub fn in_order<F: FnMut(&T)>(&self, mut visit: F) {
        util::in_order(&self.arena, self.root, &mut visit);
    }

    pub fn pre_order<F: FnMut(&T)>(&self, mut visit: F) {
        util::pre_order(&self.arena, self.root, &mut visit);
    }

    pub fn post_order<F: FnMut(&T)>(&self, mut visit: F) {
        util::post_order(&self.arena, self.root, &mut visit);
    }

    pub fn breadth_first<F: FnMut(&T)>(&self, mut visit: F) {
        util::breadth_first(&self.arena, self.root, &mut visit);
    }

    /// In-order iterator; same as [`AvlTree::in_order_iter`].
    pub fn iter(&self) -> InOrderIter<'_, T> {
        self.in_order_iter()
    }

    pub fn in_order_iter(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(&self.arena, self.root)
    }

    pub fn pre_order_iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(&self.arena, self.root)
    }

    pub fn post_order_iter(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(&self.arena, self.root)
    }

    pub fn breadth_first_iter(&self) -> BreadthFirstIter<'_, T> {
        BreadthFirstIter::new(&self.arena, self.root)
    }

    /// Audits stored balance factors against real heights and checks
    /// in-order ordering.
    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_avl_tree(&self.arena, self.root, &self.comparator)
    }

    pub fn print(&self) -> String
    where
        T: fmt::Debug,
    {
        format!("AvlTree\n{}", util::print(&self.arena, self.root, ""))
    }
}

impl<T, C> Clone for AvlTree<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering + Clone,
{
    /// Deep copy in pre-order; the copy shares nothing with `self`.
    fn clone(&self) -> Self {
        let mut arena = Arena::with_capacity(self.arena.len());
        let root = util::copy_tree(&self.arena, &mut arena, self.root);
        debug!(nodes = arena.len(), "copied tree");
        Self {
            root,
            comparator: self.comparator.clone(),
            arena,
        }
    }

    /// Assignment: drops the existing nodes, then copies `source`.
    fn clone_from(&mut self, source: &Self) {
        self.purge();
        self.comparator = source.comparator.clone();
        self.root = util::copy_tree(&source.arena, &mut self.arena, source.root);
    }
}

impl<T, C> fmt::Debug for AvlTree<T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = InOrderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> Extend<T> for AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
