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

//! # Half-Open Intervals
//!
//! `Interval<T>` is a `[min, max)` span over any `T: Ord`. It includes `min`,
//! excludes `max`, and is empty when both bounds coincide. Values are
//! immutable: every combination operation builds fresh intervals and leaves
//! both operands untouched.
//!
//! ## Predicates
//!
//! `is_overlapping` and `is_disjoint` are exact negations of each other.
//! Touching intervals (`[1, 3)` and `[3, 5)`) share no covered point, so
//! they are disjoint and never overlapping.
//!
//! ## Combination
//!
//! `split_at`, `union` and `difference` return up to two intervals in an
//! inline [`Intervals`] buffer; `intersection` returns an `Option`.
//! `difference` may hand back empty pieces (`min == max`); callers that do
//! not want them can filter with [`Interval::is_empty`].

use crate::error::InvertedRangeError;
use num_traits::PrimInt;
use smallvec::{SmallVec, smallvec};
use std::{
    cmp::{max, min},
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr, Bound, RangeBounds, Sub},
};

/// Up to two intervals, stored inline.
pub type Intervals<T> = SmallVec<[Interval<T>; 2]>;

/// Number of integer points in `[from, to)`, widened so that full-width
/// ranges do not overflow `T`. Saturates at `usize::MAX`.
#[inline]
fn distance<T>(from: T, to: T) -> usize
where
    T: PrimInt,
{
    if to <= from {
        return 0;
    }
    let wide = match (from.to_i128(), to.to_i128()) {
        (Some(from), Some(to)) => to.checked_sub(from).and_then(|d| u128::try_from(d).ok()),
        _ => from.to_u128().zip(to.to_u128()).map(|(from, to)| to - from),
    };
    wide.and_then(|d| usize::try_from(d).ok()).unwrap_or(usize::MAX)
}

/// A half-open interval `[min, max)` over a totally ordered type.
///
/// Equality is structural and ordering is lexicographic on `(min, max)`.
///
/// # Invariants
/// `min` is always less than or equal to `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T> {
    min: T,
    max: T,
}

/// Builds an interval, rejecting inverted bounds.
///
/// Shorthand for [`Interval::try_new`].
///
/// # Examples
///
/// ```rust
/// # use spanwise_core::interval;
///
/// let iv = interval(1, 3).unwrap();
/// assert!(iv.contains_value(&1));
/// assert!(!iv.contains_value(&3));
/// assert!(interval(3, 1).is_err());
/// ```
#[inline]
pub fn interval<T>(min: T, max: T) -> Result<Interval<T>, InvertedRangeError<T>>
where
    T: Ord,
{
    Interval::try_new(min, max)
}

impl<T> Interval<T>
where
    T: Ord,
{
    /// Creates a new `Interval`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// let iv = Interval::new(0, 10);
    /// assert_eq!(iv.start(), &0);
    /// ```
    #[inline]
    pub fn new(min: T, max: T) -> Self {
        assert!(
            min <= max,
            "Invalid interval: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Creates a new `Interval` if `min <= max`.
    ///
    /// # Errors
    ///
    /// Returns [`InvertedRangeError`] carrying both bounds if `min > max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// assert!(Interval::try_new(0, 10).is_ok());
    /// assert!(Interval::try_new(5, 5).is_ok());
    /// assert!(Interval::try_new(10, 0).is_err());
    /// ```
    #[inline]
    pub fn try_new(min: T, max: T) -> Result<Self, InvertedRangeError<T>> {
        if min <= max {
            Ok(Self { min, max })
        } else {
            tracing::debug!(
                value_type = std::any::type_name::<T>(),
                "rejected interval with inverted bounds"
            );
            Err(InvertedRangeError { min, max })
        }
    }

    /// Creates a new `Interval` without checking the bounds in release builds.
    ///
    /// The caller must ensure `min <= max`. A `debug_assert!` catches
    /// violations during development.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// let iv = Interval::new_unchecked(0, 10);
    /// assert!(!iv.is_empty());
    /// ```
    #[inline]
    pub fn new_unchecked(min: T, max: T) -> Self {
        debug_assert!(
            min <= max,
            "Invalid interval: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn start(&self) -> &T {
        &self.min
    }

    /// Returns the exclusive upper bound.
    #[inline]
    pub const fn end(&self) -> &T {
        &self.max
    }

    /// Consumes the interval and returns `(min, max)`.
    #[inline]
    pub fn into_bounds(self) -> (T, T) {
        (self.min, self.max)
    }

    /// Returns `true` if the interval covers no value (`min == max`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// assert!(Interval::new(5, 5).is_empty());
    /// assert!(!Interval::new(5, 6).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min == self.max
    }

    /// Returns `true` if `min <= value < max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// let iv = Interval::new(1, 3);
    /// assert!(iv.contains_value(&1));
    /// assert!(iv.contains_value(&2));
    /// assert!(!iv.contains_value(&3));
    /// ```
    #[inline]
    pub fn contains_value(&self, value: &T) -> bool {
        self.min <= *value && *value < self.max
    }

    /// Returns `true` if the intervals share no covered value.
    ///
    /// Touching intervals are disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// let a = Interval::new(1, 5);
    /// assert!(a.is_disjoint(&Interval::new(5, 10)));
    /// assert!(!a.is_disjoint(&Interval::new(4, 6)));
    /// ```
    #[inline]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.max <= other.min || other.max <= self.min
    }

    /// Returns `true` if one interval ends exactly where the other starts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// let a = Interval::new(1, 5);
    /// assert!(a.is_touching(&Interval::new(5, 10)));
    /// assert!(a.is_touching(&Interval::new(0, 1)));
    /// assert!(!a.is_touching(&Interval::new(3, 10)));
    /// ```
    #[inline]
    pub fn is_touching(&self, other: &Self) -> bool {
        self.max == other.min || other.max == self.min
    }

    /// Returns `true` if the intervals share at least one covered value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// let a = Interval::new(1, 5);
    /// assert!(a.is_overlapping(&Interval::new(3, 10)));
    /// assert!(!a.is_overlapping(&Interval::new(5, 10)));
    /// ```
    #[inline]
    pub fn is_overlapping(&self, other: &Self) -> bool {
        self.min < other.max && other.min < self.max
    }

    /// Returns `true` if `self` lies within `other`, bounds included.
    #[inline]
    pub fn is_subset_or_equal_to(&self, other: &Self) -> bool {
        other.min <= self.min && self.max <= other.max
    }

    /// Returns `true` if `self` lies within `other` and at least one of its
    /// bounds is strictly inside `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// let outer = Interval::new(1, 5);
    /// assert!(Interval::new(2, 4).is_proper_subset_of(&outer));
    /// assert!(Interval::new(1, 4).is_proper_subset_of(&outer));
    /// assert!(!outer.is_proper_subset_of(&outer));
    /// ```
    #[inline]
    pub fn is_proper_subset_of(&self, other: &Self) -> bool {
        self.is_subset_or_equal_to(other) && (other.min < self.min || self.max < other.max)
    }

    /// Returns `true` if `other` lies within `self`, bounds included.
    #[inline]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        self.min <= other.min && self.max >= other.max
    }
}

impl<T> Interval<T>
where
    T: Ord + Clone,
{
    /// Creates the empty interval `[value, value)`.
    #[inline]
    pub fn empty_at(value: T) -> Self {
        Self {
            min: value.clone(),
            max: value,
        }
    }

    /// Splits the interval at `limit`.
    ///
    /// Returns `[min, limit)` and `[limit, max)` if `limit` is contained in
    /// the interval, otherwise a copy of `self`. Since `max` is excluded,
    /// splitting at `max` leaves the interval whole, while splitting at
    /// `min` yields an empty left piece.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// let iv = Interval::new(1, 3);
    /// assert_eq!(iv.split_at(&2).as_slice(), &[Interval::new(1, 2), Interval::new(2, 3)]);
    /// assert_eq!(iv.split_at(&0).as_slice(), &[iv]);
    /// ```
    pub fn split_at(&self, limit: &T) -> Intervals<T> {
        if self.contains_value(limit) {
            smallvec![
                Self::new_unchecked(self.min.clone(), limit.clone()),
                Self::new_unchecked(limit.clone(), self.max.clone()),
            ]
        } else {
            smallvec![self.clone()]
        }
    }

    /// Calculates the union of two intervals.
    ///
    /// Overlapping or touching intervals merge into one span. Otherwise both
    /// are returned in argument order, unsorted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// let a = Interval::new(1, 3);
    /// assert_eq!(a.union(&Interval::new(3, 4)).as_slice(), &[Interval::new(1, 4)]);
    /// assert_eq!(
    ///     a.union(&Interval::new(4, 5)).as_slice(),
    ///     &[a, Interval::new(4, 5)]
    /// );
    /// ```
    pub fn union(&self, other: &Self) -> Intervals<T> {
        if self == other {
            return smallvec![self.clone()];
        }

        if self.is_overlapping(other) || self.is_touching(other) {
            smallvec![Self::new_unchecked(
                min(&self.min, &other.min).clone(),
                max(&self.max, &other.max).clone(),
            )]
        } else {
            smallvec![self.clone(), other.clone()]
        }
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` unless the intervals overlap; touching intervals have
    /// no intersection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// let a = Interval::new(1, 4);
    /// assert_eq!(a.intersection(&Interval::new(2, 5)), Some(Interval::new(2, 4)));
    /// assert_eq!(a.intersection(&Interval::new(4, 5)), None);
    /// ```
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.is_overlapping(other) {
            return None;
        }

        Some(Self::new_unchecked(
            max(&self.min, &other.min).clone(),
            min(&self.max, &other.max).clone(),
        ))
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Returns
    ///
    /// * 0 intervals: `other` covers `self` (this includes `self == other`).
    /// * 2 intervals: `other` lies within `self`. Either piece may be empty.
    /// * 1 interval: `other` clips one side of `self`, or they are disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// let a = Interval::new(-10, 10);
    /// let diff = a.difference(&Interval::new(-5, 5));
    /// assert_eq!(diff.as_slice(), &[Interval::new(-10, -5), Interval::new(5, 10)]);
    /// assert!(a.difference(&a).is_empty());
    /// ```
    pub fn difference(&self, other: &Self) -> Intervals<T> {
        // Equality must land here before the superset branch.
        if self.is_subset_or_equal_to(other) {
            return SmallVec::new();
        }

        if self.is_superset_of(other) {
            smallvec![
                Self::new_unchecked(self.min.clone(), other.min.clone()),
                Self::new_unchecked(other.max.clone(), self.max.clone()),
            ]
        } else if self.contains_value(&other.min) {
            smallvec![Self::new_unchecked(self.min.clone(), other.min.clone())]
        } else if self.contains_value(&other.max) {
            smallvec![Self::new_unchecked(other.max.clone(), self.max.clone())]
        } else {
            smallvec![self.clone()]
        }
    }
}

impl<T> Interval<T>
where
    T: PrimInt,
{
    /// Returns the number of integer points covered (`max - min`),
    /// saturating at `usize::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// assert_eq!(Interval::new(10, 20).len(), 10);
    /// assert_eq!(Interval::new(i8::MIN, i8::MAX).len(), 255);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        distance(self.min, self.max)
    }

    /// Creates an iterator over the integer points in the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_core::Interval;
    ///
    /// let points: Vec<_> = Interval::new(1, 4).iter().collect();
    /// assert_eq!(points, vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> IntervalPoints<T> {
        IntervalPoints {
            current: self.min,
            end: self.max,
        }
    }
}

/// An iterator over the integer points of an `Interval`.
#[derive(Debug, Clone)]
pub struct IntervalPoints<T>
where
    T: PrimInt,
{
    current: T,
    end: T,
}

impl<T> Iterator for IntervalPoints<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.end {
            let result = self.current;
            self.current = self.current + T::one();
            Some(result)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntervalPoints<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current < self.end {
            self.end = self.end - T::one();
            Some(self.end)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntervalPoints<T>
where
    T: PrimInt,
{
    fn len(&self) -> usize {
        distance(self.current, self.end)
    }
}

impl<T> FusedIterator for IntervalPoints<T> where T: PrimInt {}

impl<T> IntoIterator for Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalPoints<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalPoints<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> BitAnd for Interval<T>
where
    T: Ord + Clone,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(&rhs)
    }
}

impl<T> BitOr for Interval<T>
where
    T: Ord + Clone,
{
    type Output = Intervals<T>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl<T> Sub for Interval<T>
where
    T: Ord + Clone,
{
    type Output = Intervals<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(&rhs)
    }
}

impl<T> fmt::Display for Interval<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}

impl<T> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.min)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Excluded(&self.max)
    }
}

impl<T> TryFrom<std::ops::Range<T>> for Interval<T>
where
    T: Ord,
{
    type Error = InvertedRangeError<T>;

    #[inline]
    fn try_from(range: std::ops::Range<T>) -> Result<Self, Self::Error> {
        Self::try_new(range.start, range.end)
    }
}

impl<T> From<Interval<T>> for std::ops::Range<T> {
    #[inline]
    fn from(iv: Interval<T>) -> Self {
        iv.min..iv.max
    }
}
