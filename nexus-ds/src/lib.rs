//! In-memory ordered containers for schedulers, caches and buffers.
//!
//! Three independent structures share one ordering abstraction:
//!
//! | Structure | Use Case | Key Operations |
//! |-----------|----------|----------------|
//! | [`IndexedHeap`] | Priority queues, timers | O(log n) push/pop, O(log n) update/remove by key |
//! | [`Ring`] | FIFO buffers with churn | O(1) push/pop, self-compacting storage |
//! | [`SortedList`] | Read-heavy sorted access | O(log n) lookup, first/last of duplicates |
//!
//! # Ordering
//!
//! [`IndexedHeap`] and [`SortedList`] order their values through [`Lesser`]:
//! equality from [`PartialEq`] plus a strict less-than. Every `Ord` type
//! implements it already.
//!
//! ```
//! use nexus_ds::{IndexedHeap, SortedList};
//!
//! let mut timers = IndexedHeap::new();
//! timers.push("heartbeat", 30_u64);
//! timers.push("flush", 5);
//! timers.push("heartbeat", 2); // reschedule by key
//! assert_eq!(timers.pop(), Some(("heartbeat", 2)));
//!
//! let prices: SortedList<u32> = [101, 99, 100, 99].into_iter().collect();
//! assert_eq!(prices.first_index_of(&99), Some(0));
//! assert_eq!(prices.last_index_of(&99), Some(1));
//! ```
//!
//! # Ring compaction
//!
//! [`Ring`] grows one slot at a time and drops its storage when it empties.
//! With a minimum fill rate configured it also shrinks to fit whenever a
//! removal leaves too much of its storage unused.
//!
//! ```
//! use nexus_ds::{Ring, RingConfig};
//!
//! let mut queue = Ring::with_config(RingConfig { min_fill_rate: 50 }).unwrap();
//! queue.extend([1, 2, 3, 4]);
//! queue.pop_head();
//! queue.pop_head();
//! queue.pop_head();
//! assert_eq!(queue.capacity(), 1);
//! assert_eq!(queue.fill_rate(), 100);
//! ```
//!
//! # Threading
//!
//! All containers are single-owner and unsynchronized. Share them across
//! threads only behind external locking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod heap;
pub mod order;
pub mod ring;
pub mod sorted;

pub use error::InvalidFillRate;
pub use heap::IndexedHeap;
pub use order::{Lesser, compare};
pub use ring::{Ring, RingConfig};
pub use sorted::SortedList;
