//! Arena-backed AVL tree.
//!
//! Provides a self-balancing binary search tree with ordered insertion,
//! deletion, height and balance queries, and four traversal orders
//! (in-order, pre-order, post-order, breadth-first), each available as a
//! visitor method and as a lazy iterator.
//!
//! Nodes are not heap-allocated individually. Each tree owns an [`Arena`]
//! of slots and links children by `Option<u32>` index, so rotations are
//! index reassignments and released slots are recycled through a free list.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`AvlNode`] and the [`Balance`] view of a balance factor |
//! [`arena`] | [`Arena`] slab with free list |
//! [`util`] | rotations, recursive insert/remove, whole-tree rebalance, traversal helpers |
//! [`tree`] | [`AvlTree`] public API |
//! [`iter`] | traversal iterators |
//! [`queue`] | FIFO [`Queue`] used by breadth-first traversal |
//! [`fuzzer`] | seeded workload generator |
//! [`cli`] | count parsing and the timing report for `avl-timing` |
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let tree: AvlTree<i32> = [8, 9, 10, 2, 1, 5, 3, 6, 4, 7, 11].into_iter().collect();
//! assert_eq!(tree.height(), Ok(4));
//! assert_eq!(tree.root(), Some(&5));
//! ```

pub mod arena;
pub mod cli;
pub mod error;
pub mod fuzzer;
pub mod iter;
pub mod queue;
pub mod tree;
pub mod types;
pub mod util;

pub use arena::Arena;
pub use error::{AvlError, QueueError};
pub use fuzzer::Fuzzer;
pub use iter::{BreadthFirstIter, InOrderIter, PostOrderIter, PreOrderIter};
pub use queue::Queue;
pub use tree::AvlTree;
pub use types::{AvlNode, Balance};
