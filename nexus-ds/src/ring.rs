//! Growable circular buffer that gives back unused capacity.
//!
//! # Design
//!
//! The ring holds a backing array of `capacity` slots and a window of live
//! elements between `head` (first live slot) and `tail` (one past the last),
//! both taken modulo `capacity`.
//!
//! `head == tail` means either empty or full. The two are told apart by the
//! backing array: an empty ring has none at all, so a ring with storage and
//! `head == tail` is full.
//!
//! ```text
//! capacity 5, len 3, wrapped:
//!
//!   [ d ][ e ][   ][   ][ c ]
//!             ^tail     ^head
//! ```
//!
//! Storage is allocated on the first push and grows one slot at a time when a
//! push finds the ring full. It is dropped entirely when the ring becomes
//! empty, and shrunk to exactly `len` slots when a removal leaves the fill
//! rate below the configured minimum.
//!
//! # Example
//!
//! ```
//! use nexus_ds::Ring;
//!
//! let mut ring = Ring::with_min_fill_rate(50).unwrap();
//! ring.push_tail(10);
//! ring.push_tail(20);
//! ring.push_tail(30);
//! assert_eq!(ring.capacity(), 3);
//!
//! assert_eq!(ring.pop_head(), Some(10));
//! assert_eq!(ring.remove(&30), Some(30));
//!
//! // 1 of 3 slots in use is below 50%, so the ring compacted itself.
//! assert_eq!(ring.capacity(), 1);
//! assert_eq!(ring.peek_head(), Some(&20));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::InvalidFillRate;

/// Ring configuration.
///
/// # Example
///
/// ```
/// use nexus_ds::{Ring, RingConfig};
///
/// let config = RingConfig { min_fill_rate: 25 };
/// let ring: Ring<u64> = Ring::with_config(config).unwrap();
/// assert_eq!(ring.min_fill_rate(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RingConfig {
    /// Minimum fill rate in percent (`0..=100`).
    ///
    /// When a removal leaves fewer than this share of slots occupied, the ring
    /// compacts. Higher values keep memory tight at the cost of more
    /// reallocations. `0` disables automatic compaction.
    pub min_fill_rate: u8,
}

impl RingConfig {
    /// Checks that the configuration is within range.
    pub fn validate(&self) -> Result<(), InvalidFillRate> {
        if self.min_fill_rate > 100 {
            return Err(InvalidFillRate {
                value: self.min_fill_rate,
            });
        }
        Ok(())
    }
}

/// A FIFO circular buffer with positional removal and self-compaction.
///
/// See the [module documentation](self) for the storage layout.
#[derive(Clone)]
pub struct Ring<T> {
    /// Backing slots. `slots.len()` is the ring capacity.
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    min_fill_rate: u8,
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Ring<T> {
    /// Creates an empty ring with automatic compaction disabled.
    ///
    /// Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: 0,
            tail: 0,
            min_fill_rate: 0,
        }
    }

    /// Creates an empty ring from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFillRate`] if `config.min_fill_rate` exceeds 100.
    pub fn with_config(config: RingConfig) -> Result<Self, InvalidFillRate> {
        config.validate()?;
        Ok(Self {
            min_fill_rate: config.min_fill_rate,
            ..Self::new()
        })
    }

    /// Creates an empty ring that compacts below `percent` fill rate.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFillRate`] if `percent` exceeds 100.
    pub fn with_min_fill_rate(percent: u8) -> Result<Self, InvalidFillRate> {
        Self::with_config(RingConfig {
            min_fill_rate: percent,
        })
    }

    /// Returns the configured minimum fill rate in percent.
    #[inline]
    pub fn min_fill_rate(&self) -> u8 {
        self.min_fill_rate
    }

    /// Changes the minimum fill rate.
    ///
    /// Takes effect on the next removal; the ring is not compacted here.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFillRate`] if `percent` exceeds 100.
    pub fn set_min_fill_rate(&mut self, percent: u8) -> Result<(), InvalidFillRate> {
        RingConfig {
            min_fill_rate: percent,
        }
        .validate()?;
        self.min_fill_rate = percent;
        Ok(())
    }

    // ========================================================================
    // Capacity
    // ========================================================================

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        let capacity = self.slots.len();
        if capacity == 0 {
            0
        } else if self.head == self.tail {
            capacity
        } else {
            (self.tail + capacity - self.head) % capacity
        }
    }

    /// Returns `true` if the ring holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of backing slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the share of backing slots in use, in percent.
    ///
    /// Returns 0 when there is no backing storage.
    #[inline]
    pub fn fill_rate(&self) -> usize {
        match self.slots.len() {
            0 => 0,
            capacity => self.len() * 100 / capacity,
        }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the first element without removing it.
    ///
    /// Returns `None` if the ring is empty.
    #[inline]
    pub fn peek_head(&self) -> Option<&T> {
        self.slots.get(self.head)?.as_ref()
    }

    /// Returns the last element without removing it.
    ///
    /// Returns `None` if the ring is empty.
    #[inline]
    pub fn peek_tail(&self) -> Option<&T> {
        let capacity = self.slots.len();
        if capacity == 0 {
            return None;
        }
        self.slots[(self.tail + capacity - 1) % capacity].as_ref()
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    #[inline]
    #[track_caller]
    pub fn must_head(&self) -> &T {
        match self.peek_head() {
            Some(value) => value,
            None => panic!("ring: head does not exist"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    #[inline]
    #[track_caller]
    pub fn must_tail(&self) -> &T {
        match self.peek_tail() {
            Some(value) => value,
            None => panic!("ring: tail does not exist"),
        }
    }

    /// Iterates over the elements from head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            offset: 0,
            remaining: self.len(),
        }
    }

    // ========================================================================
    // Insert operations
    // ========================================================================

    /// Appends `value` after the last element.
    ///
    /// A full ring grows by one slot. The new slot is opened at the tail so
    /// the existing elements keep their logical order.
    pub fn push_tail(&mut self, value: T) {
        let capacity = self.slots.len();

        if capacity == 0 {
            self.slots.push(Some(value));
            self.head = 0;
            self.tail = 0;
            return;
        }

        if self.head != self.tail {
            debug_assert!(self.slots[self.tail].is_none(), "tail slot occupied");
            self.slots[self.tail] = Some(value);
            self.tail = (self.tail + 1) % capacity;
            return;
        }

        // Full: open a slot at the tail, shifting `head..` up by one.
        self.slots.insert(self.tail, Some(value));
        self.head += 1;
        self.tail = self.head;
        tracing::trace!(capacity = capacity + 1, "ring grew");
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the first element.
    ///
    /// Returns `None` if the ring is empty.
    pub fn pop_head(&mut self) -> Option<T> {
        let capacity = self.slots.len();
        if capacity == 0 {
            return None;
        }

        let value = self.slots[self.head].take();
        debug_assert!(value.is_some(), "head slot empty");
        self.head = (self.head + 1) % capacity;
        self.after_remove();
        value
    }

    /// Removes the first element equal to `value`, scanning from head to tail.
    ///
    /// Interior removals close the gap by shifting one of the two adjoining
    /// runs: the run after `head` if the match sits at a higher array index
    /// than `head`, otherwise the run before `tail`.
    ///
    /// Returns the removed element, or `None` if there was no match.
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let capacity = self.slots.len();
        let pos = (0..self.len())
            .map(|offset| (self.head + offset) % capacity)
            .find(|&pos| self.slots[pos].as_ref() == Some(value))?;

        let last = (self.tail + capacity - 1) % capacity;
        let removed = if pos == self.head {
            let removed = self.slots[pos].take();
            self.head = (self.head + 1) % capacity;
            removed
        } else if pos == last {
            let removed = self.slots[pos].take();
            self.tail = last;
            removed
        } else if pos > self.head {
            // Shift head..pos one slot toward the tail.
            self.slots[self.head..=pos].rotate_right(1);
            let removed = self.slots[self.head].take();
            self.head += 1;
            removed
        } else {
            // Wrapped: pos < tail. Shift pos+1..tail one slot toward head.
            self.slots[pos..self.tail].rotate_left(1);
            self.tail -= 1;
            self.slots[self.tail].take()
        };

        self.after_remove();
        removed
    }

    /// Removes all elements and releases the backing storage.
    pub fn clear(&mut self) {
        self.release();
    }

    // ========================================================================
    // Compaction
    // ========================================================================

    /// Shrinks the backing storage to exactly [`len`](Self::len) slots.
    ///
    /// Elements are laid out in logical order starting at slot 0, leaving the
    /// ring full. Does nothing if the ring is already full or empty.
    pub fn compact(&mut self) {
        if self.head == self.tail {
            return;
        }

        let len = self.len();
        let previous_capacity = self.slots.len();

        let mut slots = Vec::with_capacity(len);
        if self.head < self.tail {
            slots.extend(self.slots.drain(self.head..self.tail));
        } else {
            // Window wraps past the end of the array.
            let front = self.slots.drain(self.head..).collect::<Vec<_>>();
            slots.extend(front);
            slots.extend(self.slots.drain(..self.tail));
        }
        debug_assert_eq!(slots.len(), len);

        self.slots = slots;
        self.head = 0;
        self.tail = 0;
        tracing::trace!(len, previous_capacity, "ring compacted");
    }

    /// Restores the storage invariants after an element was taken out.
    fn after_remove(&mut self) {
        if self.head == self.tail {
            self.release();
        } else if self.fill_rate() < usize::from(self.min_fill_rate) {
            self.compact();
        }
    }

    fn release(&mut self) {
        if !self.slots.is_empty() {
            tracing::trace!(capacity = self.slots.len(), "ring released");
        }
        self.slots = Vec::new();
        self.head = 0;
        self.tail = 0;
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        let capacity = self.slots.len();
        if capacity == 0 {
            assert_eq!((self.head, self.tail), (0, 0), "empty ring with cursors");
            return;
        }
        assert!(self.head < capacity && self.tail < capacity, "cursor out of range");
        let len = self.len();
        for offset in 0..capacity {
            let slot = &self.slots[(self.head + offset) % capacity];
            assert_eq!(slot.is_some(), offset < len, "slot {offset} past head");
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Ring<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_tail(value);
        }
    }
}

impl<T> FromIterator<T> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Self::new();
        ring.extend(iter);
        ring
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over ring elements in logical order.
///
/// Created by [`Ring::iter`].
pub struct Iter<'a, T> {
    ring: &'a Ring<T>,
    offset: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let capacity = self.ring.slots.len();
        let pos = (self.ring.head + self.offset) % capacity;
        self.offset += 1;
        self.remaining -= 1;
        self.ring.slots[pos].as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
