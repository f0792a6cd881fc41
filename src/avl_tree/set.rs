use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::sorted_set::{Error, Result, SortedSet};
use compare::{natural, Compare, Natural};
use std::fmt::{self, Debug};
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. The set's elements are
/// ordered by a comparator fixed at construction, which defaults to the natural order of the
/// element type.
///
/// The behavior of this set is unspecified if an element's ordering relative to any other
/// element changes while the element is in the set.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
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
pub struct AvlSet<T, C = Natural<T>>
where
    C: Compare<T>,
{
    tree: tree::Tree<T>,
    len: usize,
    cmp: C,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>` ordered by the natural order of its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet::with_cmp(natural())
    }
}

impl<T, C> AvlSet<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `AvlSet<T, C>` ordered by the given comparator. The comparator
    /// must define a strict total order that stays consistent for the lifetime of the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::with_cmp(|lhs: &u32, rhs: &u32| rhs.cmp(lhs));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.first(), Ok(&3));
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        AvlSet {
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let AvlSet {
            ref mut tree,
            ref mut len,
            ref cmp,
        } = self;
        if tree::insert(tree, element, cmp) {
            *len += 1;
            true
        } else {
            false
        }
    }

    /// Removes an element from the set. Returns `true` if an equal element was found and
    /// removed, and `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, element: &T) -> bool {
        let AvlSet {
            ref mut tree,
            ref mut len,
            ref cmp,
        } = self;
        match tree::remove(tree, element, cmp) {
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// use balanced_collections::avl_tree::AvlSet;
    /// use balanced_collections::Error;
    ///
    /// let mut set = AvlSet::new();
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
    /// use balanced_collections::avl_tree::AvlSet;
    /// use balanced_collections::Error;
    ///
    /// let mut set = AvlSet::new();
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
    /// use balanced_collections::avl_tree::AvlSet;
    /// use balanced_collections::Error;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.pop_min(), Ok(1));
    /// assert_eq!(set.pop_min(), Ok(3));
    /// assert_eq!(set.pop_min(), Err(Error::EmptyCollection));
    /// ```
    pub fn pop_min(&mut self) -> Result<T> {
        let AvlSet {
            ref mut tree,
            ref mut len,
            ..
        } = self;
        match tree::remove_min(tree) {
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T, C> SortedSet<T> for AvlSet<T, C>
where
    C: Compare<T>,
{
    fn len(&self) -> usize {
        AvlSet::len(self)
    }

    fn is_empty(&self) -> bool {
        AvlSet::is_empty(self)
    }

    fn contains(&self, element: &T) -> bool {
        AvlSet::contains(self, element)
    }

    fn insert(&mut self, element: T) -> bool {
        AvlSet::insert(self, element)
    }

    fn remove(&mut self, element: &T) -> bool {
        AvlSet::remove(self, element)
    }

    fn first(&self) -> Result<&T> {
        AvlSet::first(self)
    }

    fn last(&self) -> Result<&T> {
        AvlSet::last(self)
    }

    fn pop_min(&mut self) -> Result<T> {
        AvlSet::pop_min(self)
    }

    fn in_order_traversal(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T, C> IntoIterator for AvlSet<T, C>
where
    C: Compare<T>,
{
    type IntoIter = AvlSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a AvlSet<T, C>
where
    T: 'a,
    C: Compare<T>,
{
    type IntoIter = AvlSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields owned elements.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
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

/// An iterator for `AvlSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
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

impl<T, C> Default for AvlSet<T, C>
where
    C: Compare<T> + Default,
{
    fn default() -> Self {
        AvlSet::with_cmp(C::default())
    }
}

impl<T, C> Extend<T> for AvlSet<T, C>
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

impl<T, C> FromIterator<T> for AvlSet<T, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::default();
        set.extend(iter);
        set
    }
}

impl<T, C> Debug for AvlSet<T, C>
where
    T: Debug,
    C: Compare<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::AvlSet;
    use crate::avl_tree::tree::{self, Tree};
    use crate::sorted_set::{Error, SortedSet};
    use compare::Compare;
    use rand::{Rng, SeedableRng, XorShiftRng};
    use std::cmp::Ordering;
    use std::collections::BTreeSet;

    fn assert_invariants<T, C>(tree: &Tree<T>, cmp: &C) -> isize
    where
        C: Compare<T>,
    {
        match tree {
            None => -1,
            Some(ref node) => {
                let left_height = assert_invariants(&node.left, cmp);
                let right_height = assert_invariants(&node.right, cmp);
                assert!((right_height - left_height).abs() <= 1);
                assert_eq!(node.height, left_height.max(right_height) + 1);
                if let Some(ref child) = node.left {
                    assert!(cmp.compares_lt(&child.element, &node.element));
                }
                if let Some(ref child) = node.right {
                    assert!(cmp.compares_gt(&child.element, &node.element));
                }
                node.height
            },
        }
    }

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_first_last_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.first(), Err(Error::EmptyCollection));
        assert_eq!(set.last(), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_pop_min_empty() {
        let mut set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.pop_min(), Err(Error::EmptyCollection));
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1]);
    }

    #[test]
    fn test_remove() {
        let mut set = AvlSet::new();
        set.insert(1);
        assert!(set.remove(&1));
        assert!(!set.contains(&1));
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_remove_absent() {
        let mut set = AvlSet::new();
        set.insert(1);
        assert!(!set.remove(&0));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1]);
    }

    #[test]
    fn test_first_last() {
        let mut set = AvlSet::new();
        set.insert(3);
        set.insert(1);
        set.insert(5);

        assert_eq!(set.first(), Ok(&1));
        assert_eq!(set.last(), Ok(&5));
    }

    #[test]
    fn test_pop_min() {
        let mut set = AvlSet::new();
        set.insert(3);
        set.insert(1);
        set.insert(5);

        assert_eq!(set.pop_min(), Ok(1));
        assert_eq!(set.pop_min(), Ok(3));
        assert_eq!(set.pop_min(), Ok(5));
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_remove_sequence() {
        let mut set = AvlSet::new();
        set.insert(10);
        set.insert(5);
        set.insert(15);
        assert_eq!(set.in_order_traversal(), [&5, &10, &15]);
        assert_eq!(set.len(), 3);

        set.remove(&10);
        set.remove(&15);
        assert_eq!(set.in_order_traversal(), [&5]);
        assert_eq!(set.len(), 1);

        set.remove(&5);
        assert!(set.is_empty());

        set.insert(15);
        assert_eq!(set.in_order_traversal(), [&15]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_custom_ordering() {
        fn evens_before_odds(lhs: &u32, rhs: &u32) -> Ordering {
            (lhs % 2).cmp(&(rhs % 2)).then(lhs.cmp(rhs))
        }

        let mut set = AvlSet::with_cmp(evens_before_odds as fn(&u32, &u32) -> Ordering);
        for element in vec![3, 4, 5, 6] {
            set.insert(element);
        }

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&4, &6, &3, &5]);
        assert_eq!(set.first(), Ok(&4));
        assert_eq!(set.last(), Ok(&5));
    }

    #[test]
    fn test_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
    }

    #[test]
    fn test_into_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_random_operations_preserve_invariants() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 2, 3, 4]);
        let mut set = AvlSet::new();
        let mut expected = BTreeSet::new();

        for _ in 0..1000 {
            let element = rng.gen_range(0u32, 64);
            if rng.gen::<bool>() {
                assert_eq!(set.insert(element), expected.insert(element));
            } else {
                assert_eq!(set.remove(&element), expected.remove(&element));
            }
            assert_eq!(set.len(), expected.len());
            assert_invariants(&set.tree, &set.cmp);
        }

        assert_eq!(
            set.iter().collect::<Vec<&u32>>(),
            expected.iter().collect::<Vec<&u32>>(),
        );
    }

    #[test]
    fn test_height_stays_logarithmic() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
        let mut set = AvlSet::new();
        for _ in 0..1024 {
            set.insert(rng.next_u32());
        }

        let bound = 2.0 * (set.len() as f64 + 1.0).log2();
        assert!((tree::height(&set.tree) as f64) <= bound);
    }
}
