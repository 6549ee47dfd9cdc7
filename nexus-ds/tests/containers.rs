use nexus_ds::{IndexedHeap, InvalidFillRate, Lesser, Ring, RingConfig, SortedList, compare};
use std::cmp::Ordering;

// =============================================================================
// IndexedHeap
// =============================================================================

#[test]
fn heap_peek_after_pop() {
    let mut heap = IndexedHeap::new();
    heap.push('A', 5);
    heap.push('B', 3);
    heap.push('C', 8);
    heap.push('D', 1);

    assert_eq!(heap.peek(), Some((&'D', &1)));
    assert_eq!(heap.pop(), Some(('D', 1)));
    assert_eq!(heap.peek(), Some((&'B', &3)));
}

#[test]
fn heap_timer_reschedule() {
    let mut timers: IndexedHeap<u32, u64> = IndexedHeap::with_capacity(16);
    for id in 0..10 {
        timers.push(id, u64::from(id) * 100);
    }

    // Push timer 9 to the front, cancel timer 0.
    assert_eq!(timers.push(9, 1), Some(900));
    assert_eq!(timers.remove(&0), Some(0));
    assert!(!timers.contains_key(&0));

    let order: Vec<u32> = timers.into_sorted_vec().into_iter().map(|(id, _)| id).collect();
    assert_eq!(order, vec![9, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn heap_round_trip() {
    let pairs: Vec<(u32, i32)> = (0..500).map(|k| (k, ((k * 7919) % 503) as i32 - 250)).collect();
    let heap: IndexedHeap<u32, i32> = pairs.iter().copied().collect();

    let mut popped = heap.into_sorted_vec();
    assert!(popped.windows(2).all(|w| w[0].1 <= w[1].1));

    popped.sort_unstable();
    assert_eq!(popped, pairs);
}

// =============================================================================
// Ring
// =============================================================================

#[test]
fn ring_fifo() {
    let mut ring = Ring::new();
    for value in 0..100 {
        ring.push_tail(value);
    }
    for expected in 0..100 {
        assert_eq!(ring.pop_head(), Some(expected));
    }
    assert_eq!(ring.pop_head(), None);
    assert_eq!(ring.capacity(), 0);
}

#[test]
fn ring_compacts_when_draining() {
    let mut ring = Ring::with_min_fill_rate(50).unwrap();
    ring.extend(0..8);
    assert_eq!(ring.capacity(), 8);

    while ring.fill_rate() >= 50 && ring.capacity() == 8 {
        ring.pop_head();
    }

    assert_eq!(ring.fill_rate(), 100);
    assert_eq!(ring.capacity(), ring.len());
    assert_eq!(ring.peek_head(), Some(&5));
    assert_eq!(ring.peek_tail(), Some(&7));
}

#[test]
fn ring_remove_reflects_order() {
    let mut ring: Ring<&str> = ["a", "b", "c", "d"].into_iter().collect();
    assert_eq!(ring.remove(&"c"), Some("c"));
    assert_eq!(ring.len(), 3);
    assert_eq!(ring.peek_head(), Some(&"a"));
    assert_eq!(ring.peek_tail(), Some(&"d"));
    assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "d"]);
}

#[test]
fn ring_config_validation() {
    let config = RingConfig { min_fill_rate: 101 };
    assert_eq!(config.validate(), Err(InvalidFillRate { value: 101 }));
    assert!(Ring::<u8>::with_config(config).is_err());
    assert!(Ring::<u8>::with_config(RingConfig::default()).is_ok());
}

#[cfg(feature = "serde")]
#[test]
fn ring_config_serde() {
    let config: RingConfig = serde_json::from_str(r#"{"min_fill_rate":30}"#).unwrap();
    assert_eq!(config, RingConfig { min_fill_rate: 30 });

    let config: RingConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, RingConfig::default());
}

// =============================================================================
// SortedList
// =============================================================================

#[test]
fn sorted_list_runs() {
    let list: SortedList<u8> = [4, 1, 4, 2, 4, 9].into_iter().collect();
    assert_eq!(list.as_slice(), &[1, 2, 4, 4, 4, 9]);
    assert_eq!(list.first_index_of(&4), Some(2));
    assert_eq!(list.last_index_of(&4), Some(4));
    assert_eq!(list.index_of(&3), None);
}

#[test]
fn sorted_list_custom_order() {
    // Orders by length only; equal lengths compare equal.
    #[derive(Debug, Clone)]
    struct ByLen(&'static str);

    impl PartialEq for ByLen {
        fn eq(&self, other: &Self) -> bool {
            self.0.len() == other.0.len()
        }
    }

    impl Lesser for ByLen {
        fn less(&self, other: &Self) -> bool {
            self.0.len() < other.0.len()
        }
    }

    let list: SortedList<ByLen> = ["ccc", "a", "bb", "dd", "e"].into_iter().map(ByLen).collect();
    let lens: Vec<usize> = list.iter().map(|w| w.0.len()).collect();
    assert_eq!(lens, vec![1, 1, 2, 2, 3]);

    assert_eq!(list.first_index_of(&ByLen("xx")), Some(2));
    assert_eq!(list.last_index_of(&ByLen("xx")), Some(3));
    assert_eq!(
        list.index_of_by(|w| w.0.len().cmp(&3)),
        Some(4)
    );
    assert_eq!(compare(&ByLen("zz"), &ByLen("a")), Ordering::Greater);
}
