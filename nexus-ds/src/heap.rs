//! Min-heap keyed by external identifiers.
//!
//! Every entry pairs an identifier with a value. The heap orders entries by
//! value while a side index maps each live identifier to its current slot,
//! enabling O(1) lookup and O(log n) update or removal by identifier.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::slice;

use crate::Lesser;

/// A binary min-heap of `(key, value)` entries with O(log n) keyed updates.
///
/// Values are ordered through [`Lesser`]; keys only need to be hashable.
/// Each key appears at most once. Pushing an existing key replaces its value.
///
/// Entries with equal values are popped in no particular order.
///
/// # Example
///
/// ```
/// use nexus_ds::IndexedHeap;
///
/// let mut heap = IndexedHeap::new();
/// heap.push("a", 5);
/// heap.push("b", 3);
/// heap.push("c", 8);
/// heap.push("d", 1);
///
/// assert_eq!(heap.peek(), Some((&"d", &1)));
/// assert_eq!(heap.pop(), Some(("d", 1)));
/// assert_eq!(heap.peek(), Some((&"b", &3)));
///
/// // Re-prioritize by key
/// heap.push("c", 0);
/// assert_eq!(heap.pop(), Some(("c", 0)));
///
/// // Remove from anywhere
/// assert_eq!(heap.remove("a"), Some(5));
/// assert_eq!(heap.len(), 1);
/// ```
#[derive(Clone)]
pub struct IndexedHeap<K, V, S = RandomState> {
    /// Heap-ordered entries.
    slots: Vec<(K, V)>,
    /// Key -> position in `slots`.
    index: HashMap<K, usize, S>,
}

impl<K, V> IndexedHeap<K, V, RandomState> {
    /// Creates an empty heap.
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Creates an empty heap with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> IndexedHeap<K, V, S> {
    /// Creates an empty heap using `hasher` for the key index.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty heap with room for `capacity` entries, using `hasher`
    /// for the key index.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of entries in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the entry with the minimum value without removing it.
    ///
    /// Returns `None` if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Option<(&K, &V)> {
        self.slots.first().map(|(key, value)| (key, value))
    }

    /// Iterates over all entries in slot order.
    ///
    /// Slot order satisfies the heap property but is not sorted.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.slots.iter(),
        }
    }
}

impl<K, V, S> IndexedHeap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Lesser,
    S: BuildHasher,
{
    // ========================================================================
    // Insert operations
    // ========================================================================

    /// Inserts `value` under `key`, or updates the value of an existing key.
    ///
    /// Returns the value previously stored under `key`:
    /// - `None` if the key was not present.
    /// - `Some(value)` handing back the argument if the stored value was
    ///   already equal; the heap is left untouched.
    /// - `Some(old)` if the stored value differed; the old entry is removed
    ///   and the new one sifted into place.
    pub fn push(&mut self, key: K, value: V) -> Option<V> {
        let previous = match self.index.get(&key).copied() {
            Some(pos) if self.slots[pos].1 == value => return Some(value),
            Some(_) => self.remove(&key),
            None => None,
        };

        let pos = self.slots.len();
        self.index.insert(key.clone(), pos);
        self.slots.push((key, value));
        self.sift_up(pos);

        previous
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the entry with the minimum value.
    ///
    /// Returns `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<(K, V)> {
        if self.slots.is_empty() {
            return None;
        }

        let (key, value) = self.slots.swap_remove(0);
        self.index.remove(&key);

        if !self.slots.is_empty() {
            self.reindex(0);
            self.sift_down(0);
        }

        Some((key, value))
    }

    /// Removes the entry stored under `key` and returns its value.
    ///
    /// Returns `None` if the key is not in the heap.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = *self.index.get(key)?;
        if pos == 0 {
            return self.pop().map(|(_, value)| value);
        }

        self.index.remove(key);
        let (_, value) = self.slots.swap_remove(pos);

        // The last entry now fills the hole unless the hole was the last slot.
        if pos < self.slots.len() {
            self.reindex(pos);

            let parent = (pos - 1) / 2;
            if self.slots[pos].1.less(&self.slots[parent].1) {
                self.sift_up(pos);
            } else {
                self.sift_down(pos);
            }
        }

        Some(value)
    }

    /// Removes all entries and releases their storage.
    pub fn clear(&mut self) {
        if self.slots.is_empty() {
            return;
        }

        tracing::trace!(len = self.slots.len(), "clearing indexed heap");
        self.slots = Vec::new();
        self.index.clear();
        self.index.shrink_to_fit();
    }

    /// Consumes the heap, returning its entries in ascending value order.
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut sorted = Vec::with_capacity(self.slots.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns `true` if `key` is in the heap.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&pos| &self.slots[pos].1)
    }

    // ========================================================================
    // Internal
    // ========================================================================

    /// Points the index entry of the key at `pos` back to `pos`.
    #[inline]
    fn reindex(&mut self, pos: usize) {
        let entry = self.index.get_mut(&self.slots[pos].0);
        debug_assert!(entry.is_some(), "slot key missing from index");
        if let Some(entry) = entry {
            *entry = pos;
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.reindex(a);
        self.reindex(b);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.slots[pos].1.less(&self.slots[parent].1) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;

            // Left is checked first so it wins ties between equal children.
            let mut smallest = pos;
            if left < len && self.slots[left].1.less(&self.slots[smallest].1) {
                smallest = left;
            }
            if right < len && self.slots[right].1.less(&self.slots[smallest].1) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }

            self.swap(pos, smallest);
            pos = smallest;
        }
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        assert_eq!(self.slots.len(), self.index.len(), "index size mismatch");
        for (pos, (key, value)) in self.slots.iter().enumerate() {
            assert_eq!(self.index.get(key), Some(&pos), "index out of sync");
            if pos > 0 {
                let parent = (pos - 1) / 2;
                assert!(
                    !value.less(&self.slots[parent].1),
                    "heap order violated at slot {pos}"
                );
            }
        }
    }
}

impl<K, V> Default for IndexedHeap<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for IndexedHeap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> Extend<(K, V)> for IndexedHeap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Lesser,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.push(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for IndexedHeap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Lesser,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut heap = Self::with_hasher(S::default());
        heap.extend(iter);
        heap
    }
}

impl<'a, K, V, S> IntoIterator for &'a IndexedHeap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over heap entries in slot order.
///
/// Created by [`IndexedHeap::iter`].
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
