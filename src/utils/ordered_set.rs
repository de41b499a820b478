/*!
# Ordered Sets

[`OrderedSet`] is a duplicate-free sequence that remembers insertion order and supports
positional access. Every neighborhood of an [`AdjList`](crate::repr::AdjList) is an `OrderedSet<Node>`.

Elements live in a contiguous `Vec`; an additional hash set provides `O(1)` (average)
duplicate detection on [`OrderedSet::append`].
*/

use std::{hash::Hash, iter::Copied, slice::Iter};

use fxhash::FxHashSet;
use itertools::Itertools;

use super::set::Set;
use crate::error::{GraphError, Result};

/// A duplicate-free sequence iterated in insertion order.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    index: FxHashSet<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: FxHashSet::default(),
        }
    }
}

impl<T: Copy + Eq + Hash> OrderedSet<T> {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns *true* if no element was appended yet
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the element at position `index` (in insertion order).
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Example
    /// ```
    /// use graph_reprs::utils::OrderedSet;
    ///
    /// let set: OrderedSet<u32> = [4, 2].into_iter().collect();
    /// assert_eq!(set.value_at(1), Ok(2));
    /// assert!(set.value_at(2).is_err());
    /// ```
    pub fn value_at(&self, index: usize) -> Result<T> {
        self.items
            .get(index)
            .copied()
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
    }

    /// Appends `value` at the end.
    /// Returns *false* and leaves the set untouched if `value` is already present.
    pub fn append(&mut self, value: T) -> bool {
        if Set::insert(&mut self.index, value) {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Returns *true* if `value` is in the set
    pub fn contains(&self, value: &T) -> bool {
        Set::contains(&self.index, value)
    }

    /// Returns an iterator over all elements in insertion order.
    /// Every call starts a fresh pass from the first element.
    pub fn iter(&self) -> Copied<Iter<'_, T>> {
        self.items.iter().copied()
    }

    /// Returns the elements as a slice in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns *true* if both sets contain the same elements, regardless of order
    pub fn same_elements(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|x| other.contains(&x))
    }

    /// Returns the elements in ascending order
    pub fn sorted(&self) -> Vec<T>
    where
        T: Ord,
    {
        self.iter().sorted_unstable().collect()
    }
}

impl<T: Copy + Eq + Hash> Set<T> for OrderedSet<T> {
    fn insert(&mut self, value: T) -> bool {
        !self.append(value)
    }

    type SetIter<'a>
        = Copied<Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_> {
        self.items.iter().copied()
    }

    fn contains(&self, value: &T) -> bool {
        OrderedSet::contains(self, value)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Copy + Eq + Hash> PartialEq for OrderedSet<T> {
    /// Two sets are equal if they hold the same elements in the same order
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Copy + Eq + Hash> Eq for OrderedSet<T> {}

impl<T: Copy + Eq + Hash> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.insert_multiple(iter);
        set
    }
}

impl<'a, T: Copy + Eq + Hash> IntoIterator for &'a OrderedSet<T> {
    type Item = T;
    type IntoIter = Copied<Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
