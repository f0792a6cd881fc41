use std::error;
use std::fmt;
use std::result;

/// The error type for ordered-set operations that require a non-empty set.
///
/// Insertion of a duplicate element and removal of an absent element are not errors; they are
/// reported through the boolean return values of [`SortedSet::insert`] and
/// [`SortedSet::remove`]. A returned error never leaves the set partially mutated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The operation requires at least one element, but the set is empty.
    EmptyCollection,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyCollection => write!(f, "the set contains no elements"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// The contract shared by every ordered-set implementation in this crate.
///
/// An ordered set maintains a strictly ordered collection of unique elements under an ordering
/// fixed at construction. Implementations guarantee logarithmic height, so point operations run
/// in `O(log n)` time and a full traversal in `O(n)` time.
///
/// The trait is object-safe; the two engines can be driven interchangeably through
/// `&mut dyn SortedSet<T>`.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlSet;
/// use balanced_collections::red_black_tree::RedBlackSet;
/// use balanced_collections::SortedSet;
///
/// fn fill(set: &mut dyn SortedSet<u32>) {
///     set.insert(2);
///     set.insert(1);
///     assert_eq!(set.in_order_traversal(), [&1, &2]);
/// }
///
/// fill(&mut AvlSet::<u32>::new());
/// fill(&mut RedBlackSet::<u32>::new());
/// ```
pub trait SortedSet<T> {
    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if an element exists in the set.
    fn contains(&self, element: &T) -> bool;

    /// Inserts an element into the set. Returns `true` if the element was not already present;
    /// returns `false` and leaves the set unchanged if an equal element already exists.
    fn insert(&mut self, element: T) -> bool;

    /// Removes an element from the set. Returns `true` if an equal element was found and
    /// removed; returns `false` and leaves the set unchanged otherwise.
    fn remove(&mut self, element: &T) -> bool;

    /// Returns the minimum element of the set, or `Error::EmptyCollection` if the set is empty.
    fn first(&self) -> Result<&T>;

    /// Returns the maximum element of the set, or `Error::EmptyCollection` if the set is empty.
    fn last(&self) -> Result<&T>;

    /// Removes and returns the minimum element of the set, or `Error::EmptyCollection` if the
    /// set is empty.
    fn pop_min(&mut self) -> Result<T>;

    /// Returns all elements in ascending order. The returned sequence is a snapshot; calling
    /// this again after mutations yields a fresh one, and its length always equals `len`.
    fn in_order_traversal(&self) -> Vec<&T>;
}
