//! Total order shared by the ordered containers.
//!
//! A type is ordered when it can be compared for equality ([`PartialEq`]) and
//! for strict less-than ([`Lesser::less`]). The two must agree on a total
//! order: for any `a` and `b` exactly one of `a.less(b)`, `a == b` and
//! `b.less(a)` holds.

use core::cmp::Ordering;

/// Types with a strict less-than relation consistent with their equality.
///
/// Every `T: Ord` implements this through `<`. Types that only want to expose
/// an ordering to these containers can implement it directly.
///
/// # Example
///
/// ```
/// use nexus_ds::{Lesser, compare};
/// use std::cmp::Ordering;
///
/// #[derive(Debug, PartialEq)]
/// struct Deadline(f64);
///
/// impl Lesser for Deadline {
///     fn less(&self, other: &Self) -> bool {
///         self.0 < other.0
///     }
/// }
///
/// assert_eq!(compare(&Deadline(1.0), &Deadline(2.5)), Ordering::Less);
/// assert_eq!(compare(&Deadline(2.5), &Deadline(2.5)), Ordering::Equal);
/// ```
pub trait Lesser: PartialEq {
    /// Returns `true` if `self` is strictly less than `other`.
    fn less(&self, other: &Self) -> bool;
}

impl<T: Ord + ?Sized> Lesser for T {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        self < other
    }
}

/// Three-way comparison derived from [`Lesser`].
///
/// Equality is checked first, then less-than; anything else is greater.
#[inline]
pub fn compare<T: Lesser + ?Sized>(a: &T, b: &T) -> Ordering {
    if a == b {
        Ordering::Equal
    } else if a.less(b) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
