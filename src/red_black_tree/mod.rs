//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.

mod node;
mod set;
mod tree;

pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
use std::error;
use std::fmt;
use std::result;

/// Convenience `Error` enum for `red_black_tree`, describing which invariant a tree breaks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The root node is red.
    RedRoot,
    /// A red node has a red child.
    RedRedViolation,
    /// Two sibling subtrees have different black-heights.
    BlackHeightMismatch {
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },
    /// An in-order traversal would not be strictly ascending.
    OutOfOrder,
    /// A child does not point back at its parent, or the root has a parent.
    BrokenParentLink,
    /// The stored element count disagrees with the number of reachable nodes.
    LengthMismatch {
        /// The stored count.
        expected: usize,
        /// The number of nodes reached.
        actual: usize,
    },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RedRoot => write!(f, "root node is red"),
            Error::RedRedViolation => write!(f, "red node has a red child"),
            Error::BlackHeightMismatch { left, right } => write!(
                f,
                "black-height mismatch: left subtree has {}, right subtree has {}",
                left, right,
            ),
            Error::OutOfOrder => write!(f, "values are not in strictly ascending order"),
            Error::BrokenParentLink => write!(f, "parent link does not match child link"),
            Error::LengthMismatch { expected, actual } => write!(
                f,
                "length mismatch: expected {} nodes, found {}",
                expected, actual,
            ),
        }
    }
}

/// Convenience `Result` type for `red_black_tree`.
pub type Result<T> = result::Result<T, Error>;
