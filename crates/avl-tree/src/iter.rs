//! Lazy traversal iterators.
//!
//! Each iterator borrows the tree's arena and walks it with an explicit
//! stack (or queue, for breadth-first), so traversal can be paused,
//! chained or collected without a visitor callback.

use crate::arena::Arena;
use crate::queue::Queue;

/// Left, value, right.
pub struct InOrderIter<'a, T> {
    arena: &'a Arena<T>,
    stack: Vec<u32>,
}

impl<'a, T> InOrderIter<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<u32>) -> Self {
        let mut it = Self {
            arena,
            stack: Vec::new(),
        };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut node: Option<u32>) {
        while let Some(i) = node {
            self.stack.push(i);
            node = self.arena.node(i).l;
        }
    }
}

impl<'a, T> Iterator for InOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let i = self.stack.pop()?;
        let n = self.arena.node(i);
        self.push_left_spine(n.r);
        Some(&n.v)
    }
}

/// Value, left, right.
pub struct PreOrderIter<'a, T> {
    arena: &'a Arena<T>,
    stack: Vec<u32>,
}

impl<'a, T> PreOrderIter<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<u32>) -> Self {
        Self {
            arena,
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let i = self.stack.pop()?;
        let n = self.arena.node(i);
        self.stack.extend(n.r);
        self.stack.extend(n.l);
        Some(&n.v)
    }
}

/// Left, right, value.
pub struct PostOrderIter<'a, T> {
    arena: &'a Arena<T>,
    // `true` once the node's children have been scheduled.
    stack: Vec<(u32, bool)>,
}

impl<'a, T> PostOrderIter<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<u32>) -> Self {
        Self {
            arena,
            stack: root.map(|i| (i, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some((i, expanded)) = self.stack.pop() {
            let n = self.arena.node(i);
            if expanded {
                return Some(&n.v);
            }
            self.stack.push((i, true));
            self.stack.extend(n.r.map(|r| (r, false)));
            self.stack.extend(n.l.map(|l| (l, false)));
        }
        None
    }
}

/// Level by level, left to right.
pub struct BreadthFirstIter<'a, T> {
    arena: &'a Arena<T>,
    pending: Queue<u32>,
}

impl<'a, T> BreadthFirstIter<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<u32>) -> Self {
        let mut pending = Queue::new();
        if let Some(root) = root {
            pending.enqueue(root);
        }
        Self { arena, pending }
    }
}

impl<'a, T> Iterator for BreadthFirstIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let i = self.pending.dequeue().ok()?;
        let n = self.arena.node(i);
        if let Some(l) = n.l {
            self.pending.enqueue(l);
        }
        if let Some(r) = n.r {
            self.pending.enqueue(r);
        }
        Some(&n.v)
    }
}
