//! Slab of tree nodes addressed by `u32` index.
//!
//! Released slots are chained into a LIFO free list and handed out again by
//! [`Arena::alloc`] before the backing `Vec` grows.

use crate::types::AvlNode;

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(AvlNode<T>),
    Vacant { next_free: Option<u32> },
}

#[derive(Clone, Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            len: 0,
        }
    }

    /// Stores `node`, reusing the most recently released slot if any.
    pub fn alloc(&mut self, node: AvlNode<T>) -> u32 {
        let i = match self.free {
            Some(i) => {
                let slot = &mut self.slots[i as usize];
                let Slot::Vacant { next_free } = *slot else {
                    panic!("free list points at occupied slot {i}");
                };
                self.free = next_free;
                *slot = Slot::Occupied(node);
                i
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                (self.slots.len() - 1) as u32
            }
        };
        self.len += 1;
        i
    }

    /// Vacates slot `i` and hands its node back.
    pub fn release(&mut self, i: u32) -> AvlNode<T> {
        let slot = std::mem::replace(
            &mut self.slots[i as usize],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        match slot {
            Slot::Occupied(node) => {
                self.free = Some(i);
                self.len -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("released vacant arena slot {i}"),
        }
    }

    #[inline]
    pub fn node(&self, i: u32) -> &AvlNode<T> {
        match &self.slots[i as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("read from vacant arena slot {i}"),
        }
    }

    #[inline]
    pub fn node_mut(&mut self, i: u32) -> &mut AvlNode<T> {
        match &mut self.slots[i as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("write to vacant arena slot {i}"),
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }
}
