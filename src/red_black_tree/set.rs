use crate::red_black_tree::tree::{IntoIter, Iter, Tree};
use crate::red_black_tree::Result;
use std::borrow::Borrow;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::mem;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black
/// so that no red node has a red child and every path from a node to a leaf passes through the
/// same number of black nodes. Insertion, removal and lookup are therefore `O(log n)`. Nodes live
/// in an arena and refer to each other by index, with a reserved null index playing the part of
/// the shared black sentinel leaf.
///
/// Inserting a value that is already present leaves the set unchanged, as does removing a value
/// that is absent.
///
/// # Examples
///
/// ```
/// use classic_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.max(), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct RedBlackSet<T> {
    tree: Tree<T>,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet { tree: Tree::new() }
    }

    /// Constructs a new, empty `RedBlackSet<T>` with node storage for `capacity` values
    /// preallocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::with_capacity(1024);
    /// assert!(set.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        RedBlackSet {
            tree: Tree::with_capacity(capacity),
        }
    }

    /// Inserts a value into the set. Returns `true` if the value was not already present. If it
    /// was, the set is left unchanged and the new value is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        self.tree.insert(value)
    }

    /// Removes a value from the set. If the value exists in the set, it will return the removed
    /// value. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, value: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.remove(value)
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(String::from("a"));
    /// assert!(!set.contains("b"));
    /// assert!(set.contains("a"));
    /// ```
    pub fn contains<V>(&self, value: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.contains(value)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Moves every value out of the set into a new set, leaving this one empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    ///
    /// let moved = set.take();
    /// assert!(set.is_empty());
    /// assert!(moved.contains(&1));
    /// ```
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.tree.min()
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.tree.max()
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            tree_iter: self.tree.iter(),
        }
    }

    /// Checks every red black invariant and returns the black-height of the tree, counting the
    /// sentinel leaves. Returns the first violation found otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.validate(), Ok(1));
    ///
    /// set.insert(1);
    /// assert_eq!(set.validate(), Ok(2));
    /// ```
    pub fn validate(&self) -> Result<usize>
    where
        T: Ord,
    {
        self.tree.validate()
    }
}

impl<T> IntoIterator for RedBlackSet<T> {
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            tree_iter: self.tree.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct RedBlackSetIntoIter<T> {
    tree_iter: IntoIter<T>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tree_iter.size_hint()
    }
}

impl<T> ExactSizeIterator for RedBlackSetIntoIter<T> {}

impl<T> FusedIterator for RedBlackSetIntoIter<T> {}

/// An iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T> {
    tree_iter: Iter<'a, T>,
}

impl<'a, T> Clone for RedBlackSetIter<'a, T> {
    fn clone(&self) -> Self {
        RedBlackSetIter {
            tree_iter: self.tree_iter.clone(),
        }
    }
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tree_iter.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for RedBlackSetIter<'a, T> {}

impl<'a, T> FusedIterator for RedBlackSetIter<'a, T> {}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RedBlackSet<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        RedBlackSet {
            tree: self.tree.clone(),
        }
    }
}

// Duplicates collapse: the first occurrence of a value is the one kept.
impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

impl<T, const N: usize> From<[T; N]> for RedBlackSet<T>
where
    T: Ord,
{
    fn from(values: [T; N]) -> Self {
        IntoIterator::into_iter(values).collect()
    }
}

impl<T> Extend<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> Extend<&'a T> for RedBlackSet<T>
where
    T: 'a + Ord + Copy,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> PartialEq for RedBlackSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &RedBlackSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for RedBlackSet<T> where T: Eq {}

impl<T> fmt::Debug for RedBlackSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Formats the values in ascending order, separated by spaces and enclosed in braces.
///
/// # Examples
///
/// ```
/// use classic_collections::red_black_tree::RedBlackSet;
///
/// let set = RedBlackSet::from([3, 1, 2]);
/// assert_eq!(set.to_string(), "{1 2 3}");
/// assert_eq!(RedBlackSet::<u32>::new().to_string(), "{}");
/// ```
impl<T> fmt::Display for RedBlackSet<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "}}")
    }
}
