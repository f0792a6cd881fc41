//! Two self-balancing ordered sets behind one contract: an AVL tree that bounds the height
//! difference between sibling subtrees, and a left-leaning red-black tree that bounds the ratio
//! of the longest to shortest root-to-leaf path.
//!
//! Both sets order their elements by an injected comparator (defaulting to the natural order of
//! the element type) and support insertion, removal, membership tests, minimum and maximum
//! retrieval, minimum removal, and in-order traversal. All operations are synchronous and
//! single-threaded; consumers that share a set across threads must supply their own mutual
//! exclusion.

pub mod avl_tree;
pub mod red_black_tree;
mod sorted_set;

pub use self::sorted_set::{Error, Result, SortedSet};
