// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Partitions
//!
//! Helpers for ordered sequences of intervals: building consecutive
//! intervals from a set of cut points, checking that a sequence is sorted and
//! disjoint or tiles a whole interval exactly, and locating the interval that
//! contains a value.

use crate::interval::Interval;

/// Builds the consecutive intervals `[l0, l1), [l1, l2), ...` between the
/// given limits.
///
/// The limits are sorted and deduplicated first, so any order is accepted.
/// Fewer than two distinct limits yield no intervals.
///
/// # Examples
///
/// ```rust
/// # use spanwise_core::{partition::from_limits, Interval};
///
/// let parts = from_limits([10, 0, 5, 5]);
/// assert_eq!(parts, vec![Interval::new(0, 5), Interval::new(5, 10)]);
/// assert!(from_limits([1]).is_empty());
/// ```
pub fn from_limits<T, I>(limits: I) -> Vec<Interval<T>>
where
    T: Ord + Clone,
    I: IntoIterator<Item = T>,
{
    let mut limits: Vec<T> = limits.into_iter().collect();
    limits.sort_unstable();
    limits.dedup();

    limits
        .windows(2)
        .map(|w| Interval::new_unchecked(w[0].clone(), w[1].clone()))
        .collect()
}

/// Checks whether the given intervals are disjoint and sorted by `min`.
///
/// Touching neighbours count as disjoint.
#[inline]
pub fn is_sorted_and_disjoint<T>(intervals: &[Interval<T>]) -> bool
where
    T: Ord,
{
    intervals.windows(2).all(|w| w[0].end() <= w[1].start())
}

/// Checks whether `parts` tile `whole` exactly, in order, with no gap and no
/// overlap.
///
/// An empty slice only tiles an empty `whole`.
///
/// # Examples
///
/// ```rust
/// # use spanwise_core::{partition::is_partition_of, Interval};
///
/// let whole = Interval::new(0, 10);
/// assert!(is_partition_of(&[Interval::new(0, 4), Interval::new(4, 10)], &whole));
/// assert!(!is_partition_of(&[Interval::new(0, 4), Interval::new(5, 10)], &whole));
/// ```
pub fn is_partition_of<T>(parts: &[Interval<T>], whole: &Interval<T>) -> bool
where
    T: Ord,
{
    match (parts.first(), parts.last()) {
        (Some(first), Some(last)) => {
            first.start() == whole.start()
                && last.end() == whole.end()
                && parts.windows(2).all(|w| w[0].end() == w[1].start())
        }
        _ => whole.is_empty(),
    }
}

/// Finds the index of the interval containing `value`.
///
/// Performs a binary search for the last interval whose `min` is not
/// greater than `value`, then checks containment.
///
/// # Panics
///
/// In debug builds, panics if `intervals` is not sorted and disjoint.
///
/// # Examples
///
/// ```rust
/// # use spanwise_core::{partition::{from_limits, locate}};
///
/// let parts = from_limits([0, 5, 10, 20]);
/// assert_eq!(locate(&parts, &7), Some(1));
/// assert_eq!(locate(&parts, &20), None);
/// ```
pub fn locate<T>(intervals: &[Interval<T>], value: &T) -> Option<usize>
where
    T: Ord,
{
    debug_assert!(
        is_sorted_and_disjoint(intervals),
        "called `locate` with intervals that are not disjoint and sorted"
    );

    let mut lo: usize = 0;
    let mut hi: usize = intervals.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        if intervals[mid].start() <= value {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    let candidate = lo.checked_sub(1)?;
    intervals[candidate]
        .contains_value(value)
        .then_some(candidate)
}
