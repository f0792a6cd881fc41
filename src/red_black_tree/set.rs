use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree;
use crate::sorted_set::{Error, Result, SortedSet};
use compare::{natural, Compare, Natural};
use std::fmt::{self, Debug};
use std::iter::FromIterator;

/// An ordered set implemented using a left-leaning red black tree.
///
/// A red black tree is a self-balancing binary search tree that tags every link with a color and
/// maintains two invariants: no red link is followed by another red link, and every path from the
/// root to an absent child passes through the same number of black links. Red links additionally
/// lean left. The set's elements are ordered by a comparator fixed at construction, which
/// defaults to the natural order of the element type.
///
/// The behavior of this set is unspecified if an element's ordering relative to any other
/// element changes while the element is in the set.
///
/// # Examples
///
/// ```
/// use balanced_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(3);
/// set.insert(0);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.first(), Ok(&0));
/// assert!(set.contains(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct RedBlackSet<T, C = Natural<T>>
where
    C: Compare<T>,
{
    tree: tree::Tree<T>,
    len: usize,
    cmp: C,
}

impl<T> RedBlackSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackSet<T>` ordered by the natural order of its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet::with_cmp(natural())
    }
}

impl<T, C> RedBlackSet<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `RedBlackSet<T, C>` ordered by the given comparator. The
    /// comparator must define a strict total order that stays consistent for the lifetime of
    /// the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_cmp(|lhs: &u32, rhs: &u32| rhs.cmp(lhs));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.first(), Ok(&3));
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        RedBlackSet {
            tree: None,
            len: 0,
            cmp,
        }
    }

    /// Inserts an element into the set. Returns `true` if the element was not already present.
    /// If an equal element already exists, the set is left unchanged, the argument is dropped,
    /// and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let RedBlackSet {
            ref mut tree,
            ref mut len,
            ref cmp,
        } = self;
        let inserted = tree::insert(tree, element, cmp);
        tree::blacken_root(tree);
        if inserted {
            *len += 1;
        }
        inserted
    }

    /// Removes an element from the set. Returns `true` if an equal element was found and
    /// removed, and `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, element: &T) -> bool {
        // the descent rotates eagerly, so verify membership before touching the tree
        if !self.contains(element) {
            return false;
        }

        let RedBlackSet {
            ref mut tree,
            ref mut len,
            ref cmp,
        } = self;
        tree::fix_root(tree);
        let removed = tree::remove(tree, element, cmp);
        tree::blacken_root(tree);
        match removed {
            Some(_) => {
                *len -= 1;
                true
            },
            None => false,
        }
    }

    /// Checks if an element exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, element: &T) -> bool {
        tree::contains(&self.tree, element, &self.cmp)
    }

    /// Returns the minimum element of the set, or `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    /// use balanced_collections::Error;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.first(), Err(Error::EmptyCollection));
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.first(), Ok(&1));
    /// ```
    pub fn first(&self) -> Result<&T> {
        tree::min(&self.tree).ok_or(Error::EmptyCollection)
    }

    /// Returns the maximum element of the set, or `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    /// use balanced_collections::Error;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.last(), Err(Error::EmptyCollection));
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.last(), Ok(&3));
    /// ```
    pub fn last(&self) -> Result<&T> {
        tree::max(&self.tree).ok_or(Error::EmptyCollection)
    }

    /// Removes and returns the minimum element of the set, or `Error::EmptyCollection` if the
    /// set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    /// use balanced_collections::Error;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.pop_min(), Ok(1));
    /// assert_eq!(set.pop_min(), Ok(3));
    /// assert_eq!(set.pop_min(), Err(Error::EmptyCollection));
    /// ```
    pub fn pop_min(&mut self) -> Result<T> {
        let RedBlackSet {
            ref mut tree,
            ref mut len,
            ..
        } = self;
        tree::fix_root(tree);
        let removed = tree::remove_min(tree);
        tree::blacken_root(tree);
        match removed {
            Some(element) => {
                *len -= 1;
                Ok(element)
            },
            None => Err(Error::EmptyCollection),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns an iterator over the set. The iterator will yield elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<T> {
        RedBlackSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T, C> SortedSet<T> for RedBlackSet<T, C>
where
    C: Compare<T>,
{
    fn len(&self) -> usize {
        RedBlackSet::len(self)
    }

    fn is_empty(&self) -> bool {
        RedBlackSet::is_empty(self)
    }

    fn contains(&self, element: &T) -> bool {
        RedBlackSet::contains(self, element)
    }

    fn insert(&mut self, element: T) -> bool {
        RedBlackSet::insert(self, element)
    }

    fn remove(&mut self, element: &T) -> bool {
        RedBlackSet::remove(self, element)
    }

    fn first(&self) -> Result<&T> {
        RedBlackSet::first(self)
    }

    fn last(&self) -> Result<&T> {
        RedBlackSet::last(self)
    }

    fn pop_min(&mut self) -> Result<T> {
        RedBlackSet::pop_min(self)
    }

    fn in_order_traversal(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T, C> IntoIterator for RedBlackSet<T, C>
where
    C: Compare<T>,
{
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackSet<T, C>
where
    T: 'a,
    C: Compare<T>,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields owned elements.
pub struct RedBlackSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { element, right, .. } = node;
            self.current = right;
            element
        })
    }
}

/// An iterator for `RedBlackSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.element
        })
    }
}

impl<T, C> Default for RedBlackSet<T, C>
where
    C: Compare<T> + Default,
{
    fn default() -> Self {
        RedBlackSet::with_cmp(C::default())
    }
}

impl<T, C> Extend<T> for RedBlackSet<T, C>
where
    C: Compare<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T, C> FromIterator<T> for RedBlackSet<T, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::default();
        set.extend(iter);
        set
    }
}

impl<T, C> Debug for RedBlackSet<T, C>
where
    T: Debug,
    C: Compare<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
