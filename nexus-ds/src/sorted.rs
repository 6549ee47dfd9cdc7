//! Sorted list with duplicate-aware binary search.
//!
//! Elements are kept in non-decreasing order under [`Lesser`]. Insertion is
//! O(n) (append, then shift into place); lookups are O(log n), plus a linear
//! walk across runs of equal elements for the first/last variants.
//!
//! Relative order among equal elements is not guaranteed.

use core::cmp::Ordering;
use std::ops::Deref;
use std::slice;
use std::vec;

use crate::{Lesser, compare};

/// A `Vec` kept sorted by incremental insertion.
///
/// Read access goes through [`Deref`] to `[T]`; there is no mutable slice
/// access since it could break the ordering.
///
/// # Example
///
/// ```
/// use nexus_ds::SortedList;
///
/// let mut list = SortedList::new();
/// for value in [1, 3, 5, 4, 2, 2, 6, 1, 2] {
///     list.add(value);
/// }
///
/// assert_eq!(list.as_slice(), &[1, 1, 2, 2, 2, 3, 4, 5, 6]);
/// assert_eq!(list.first_index_of(&2), Some(2));
/// assert_eq!(list.last_index_of(&2), Some(4));
/// assert_eq!(list.index_of(&7), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortedList<T> {
    items: Vec<T>,
}

impl<T> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SortedList<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the elements as a sorted slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the list, returning the sorted elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the index of some element for which `f` returns `Equal`.
    ///
    /// `f` reports how the probed element orders relative to the target, as
    /// with [`slice::binary_search_by`]. Among equal elements, which one is
    /// found depends on the search path.
    pub fn index_of_by<F>(&self, mut f: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut low = 0;
        let mut high = self.items.len();
        while low < high {
            let mid = low + (high - low) / 2;
            match f(&self.items[mid]) {
                Ordering::Equal => return Some(mid),
                Ordering::Greater => high = mid,
                Ordering::Less => low = mid + 1,
            }
        }
        None
    }

    /// Returns the lowest index for which `f` returns `Equal`.
    pub fn first_index_of_by<F>(&self, mut f: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut pos = self.index_of_by(&mut f)?;
        while pos > 0 && f(&self.items[pos - 1]).is_eq() {
            pos -= 1;
        }
        Some(pos)
    }

    /// Returns the highest index for which `f` returns `Equal`.
    pub fn last_index_of_by<F>(&self, mut f: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut pos = self.index_of_by(&mut f)?;
        while pos + 1 < self.items.len() && f(&self.items[pos + 1]).is_eq() {
            pos += 1;
        }
        Some(pos)
    }
}

impl<T: Lesser> SortedList<T> {
    /// Inserts `value` at its sorted position.
    ///
    /// The value is appended and then swapped toward the front while it is
    /// strictly less than its predecessor.
    pub fn add(&mut self, value: T) {
        self.items.push(value);
        let mut pos = self.items.len() - 1;
        while pos > 0 && self.items[pos].less(&self.items[pos - 1]) {
            self.items.swap(pos, pos - 1);
            pos -= 1;
        }
    }

    /// Returns the index of some element equal to `value`.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.index_of_by(|probe| compare(probe, value))
    }

    /// Returns the index of the first element equal to `value`.
    #[inline]
    pub fn first_index_of(&self, value: &T) -> Option<usize> {
        self.first_index_of_by(|probe| compare(probe, value))
    }

    /// Returns the index of the last element equal to `value`.
    #[inline]
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.last_index_of_by(|probe| compare(probe, value))
    }

    /// Returns `true` if the list holds an element equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    #[cfg(test)]
    fn assert_sorted(&self) {
        for pair in self.items.windows(2) {
            assert!(!pair[1].less(&pair[0]), "list out of order");
        }
    }
}

impl<T> Deref for SortedList<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsRef<[T]> for SortedList<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T: Lesser> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.items.reserve(iter.size_hint().0);
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Lesser> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for SortedList<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn make_rng() -> SmallRng {
        SmallRng::seed_from_u64(12345)
    }

    fn non_unique() -> SortedList<i32> {
        [1, 3, 5, 4, 2, 2, 6, 1, 2].into_iter().collect()
    }

    #[test]
    fn new_is_empty() {
        let list: SortedList<i32> = SortedList::new();
        assert!(list.is_empty());
        assert_eq!(list.index_of(&1), None);
        assert_eq!(list.first_index_of(&1), None);
        assert_eq!(list.last_index_of(&1), None);
    }

    #[test]
    fn add_keeps_order() {
        let mut rng = make_rng();
        let mut list = SortedList::with_capacity(1000);
        for _ in 0..1000 {
            list.add(rng.random::<i64>());
        }
        assert_eq!(list.len(), 1000);
        list.assert_sorted();
    }

    #[test]
    fn add_to_front_and_back() {
        let mut list = SortedList::new();
        list.add(5);
        list.add(9);
        list.add(1);
        assert_eq!(list.as_slice(), &[1, 5, 9]);
    }

    #[test]
    fn index_of_missing() {
        let list = non_unique();
        assert_eq!(list.index_of(&-3), None);
        assert_eq!(list.index_of(&7), None);
        assert!(!list.contains(&0));
    }

    #[test]
    fn index_of_existing() {
        let mut rng = make_rng();
        let records: Vec<i64> = (0..1000).map(|_| rng.random()).collect();
        let list: SortedList<i64> = records.iter().copied().collect();

        for record in records.iter().step_by(37) {
            let pos = list.index_of(record).unwrap();
            assert_eq!(list[pos], *record);
        }
    }

    #[test]
    fn first_index_of_duplicates() {
        assert_eq!(non_unique().first_index_of(&2), Some(2));
        assert_eq!(non_unique().first_index_of(&1), Some(0));
    }

    #[test]
    fn last_index_of_duplicates() {
        assert_eq!(non_unique().last_index_of(&2), Some(4));
        assert_eq!(non_unique().last_index_of(&6), Some(8));
    }

    #[test]
    fn by_heterogeneous_key() {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
        struct Order {
            price: u32,
            id: u32,
        }

        let list: SortedList<Order> = [(10, 1), (20, 2), (20, 3), (30, 4)]
            .into_iter()
            .map(|(price, id)| Order { price, id })
            .collect();

        fn by_price(price: u32) -> impl Fn(&Order) -> Ordering {
            move |order| order.price.cmp(&price)
        }

        assert_eq!(list.first_index_of_by(by_price(20)), Some(1));
        assert_eq!(list.last_index_of_by(by_price(20)), Some(2));
        assert_eq!(list.index_of_by(by_price(30)), Some(3));
        assert_eq!(list.index_of_by(by_price(25)), None);
    }

    #[test]
    fn remove_keeps_order() {
        let mut list = non_unique();
        assert_eq!(list.remove(0), 1);
        assert_eq!(list.first(), Some(&1));
        list.assert_sorted();

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn into_iter_ascending() {
        let values: Vec<i32> = non_unique().into_iter().collect();
        assert_eq!(values, vec![1, 1, 2, 2, 2, 3, 4, 5, 6]);
    }

    proptest! {
        #[test]
        fn matches_sorted_vec(values in prop::collection::vec(0i32..50, 0..200)) {
            let list: SortedList<i32> = values.iter().copied().collect();
            let mut expected = values.clone();
            expected.sort_unstable();
            prop_assert_eq!(list.as_slice(), expected.as_slice());
        }

        #[test]
        fn first_and_last_bound_runs(
            values in prop::collection::vec(0i32..20, 0..200),
            target in 0i32..20,
        ) {
            let list: SortedList<i32> = values.iter().copied().collect();
            let first = list.iter().position(|&v| v == target);
            let last = list.iter().rposition(|&v| v == target);

            prop_assert_eq!(list.first_index_of(&target), first);
            prop_assert_eq!(list.last_index_of(&target), last);
            prop_assert_eq!(list.index_of(&target).is_some(), first.is_some());
        }
    }
}
