use thiserror::Error;

/// Failures surfaced by [`AvlTree`](crate::AvlTree) operations.
///
/// Neither variant leaves the tree partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AvlError {
    /// `height` or `delete` called on a tree with no nodes.
    #[error("tree is empty")]
    EmptyTree,
    /// `delete` could not locate the requested value.
    #[error("value not found in tree")]
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("queue is empty")]
    Empty,
}
