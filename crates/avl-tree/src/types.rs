//! Node type stored in the tree arena.
//!
//! Child links are `Option<u32>` indices into the owning tree's
//! [`Arena`](crate::arena::Arena) rather than pointers, so rotations are
//! plain index reassignments.

/// Classification of a stored balance factor.
///
/// A factor is `height(left) - height(right)`. Only `{-1, 0, 1}` are valid
/// once an operation completes; `±2` shows up transiently mid-rebalance and
/// has no `Balance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Balance {
    LeftHeavy,
    Even,
    RightHeavy,
}

impl Balance {
    pub const fn factor(self) -> i32 {
        match self {
            Balance::LeftHeavy => 1,
            Balance::Even => 0,
            Balance::RightHeavy => -1,
        }
    }

    pub const fn from_factor(bf: i32) -> Option<Self> {
        match bf {
            1 => Some(Balance::LeftHeavy),
            0 => Some(Balance::Even),
            -1 => Some(Balance::RightHeavy),
            _ => None,
        }
    }
}

/// A single tree node.
#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: T,
    /// Balance factor, `height(left) - height(right)`.
    pub bf: i32,
}

impl<T> AvlNode<T> {
    /// Fresh leaf with `Even` balance.
    pub fn new(v: T) -> Self {
        Self {
            l: None,
            r: None,
            v,
            bf: 0,
        }
    }

    pub fn value(&self) -> &T {
        &self.v
    }

    pub fn left(&self) -> Option<u32> {
        self.l
    }

    pub fn right(&self) -> Option<u32> {
        self.r
    }

    pub fn bf(&self) -> i32 {
        self.bf
    }

    pub fn balance(&self) -> Option<Balance> {
        Balance::from_factor(self.bf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_even_leaf() {
        let n = AvlNode::new(7);
        assert_eq!(n.value(), &7);
        assert_eq!(n.balance(), Some(Balance::Even));
        assert_eq!((n.left(), n.right()), (None, None));
    }

    #[test]
    fn balance_factor_mapping() {
        for b in [Balance::LeftHeavy, Balance::Even, Balance::RightHeavy] {
            assert_eq!(Balance::from_factor(b.factor()), Some(b));
        }
        assert_eq!(Balance::from_factor(2), None);
        assert_eq!(Balance::from_factor(-2), None);
    }
}
