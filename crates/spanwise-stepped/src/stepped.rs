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

//! # Stepped Intervals
//!
//! A `SteppedInterval<T>` pairs an [`Interval<T>`] with a unit and a step
//! magnitude. It enumerates the points `min, min + step, min + 2·step, ...`
//! below `max`, and splits itself into consecutive sub-intervals of `step`
//! units each plus, when the span does not divide evenly, one shorter
//! remainder ending at `max`.
//!
//! All relational predicates and set operations are those of the inner
//! interval, reached through `Deref`.
//!
//! Both iterators are lazy and own their state: every call to
//! [`SteppedInterval::points`] or [`SteppedInterval::split`] starts over, and
//! nothing is produced until it is pulled.

use crate::{
    error::{StepError, SteppedIntervalError, UnsupportedUnitError},
    steppable::Steppable,
};
use spanwise_core::Interval;
use std::{fmt, iter::FusedIterator, num::NonZeroU64, ops::Deref};

/// A half-open interval that steps through its span by a fixed unit.
///
/// # Invariants
/// - `min <= max`.
/// - `unit` is supported by `T` (probed at construction).
/// - `step >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SteppedInterval<T>
where
    T: Steppable,
{
    interval: Interval<T>,
    unit: T::Unit,
    step: NonZeroU64,
}

/// Builds a stepped interval, rejecting inverted bounds and unsupported
/// units.
///
/// Shorthand for [`SteppedInterval::try_new`].
///
/// # Examples
///
/// ```rust
/// # use spanwise_stepped::{stepped, Ones};
/// # use std::num::NonZeroU64;
///
/// let every_two = stepped(0, 7, Ones, NonZeroU64::new(2).unwrap()).unwrap();
/// assert_eq!(every_two.points().collect::<Vec<_>>(), vec![0, 2, 4, 6]);
/// ```
#[inline]
pub fn stepped<T>(
    min: T,
    max: T,
    unit: T::Unit,
    step: NonZeroU64,
) -> Result<SteppedInterval<T>, SteppedIntervalError<T>>
where
    T: Steppable,
{
    SteppedInterval::try_new(min, max, unit, step)
}

impl<T> SteppedInterval<T>
where
    T: Steppable,
{
    /// Creates a new `SteppedInterval`.
    ///
    /// # Errors
    ///
    /// - [`SteppedIntervalError::Inverted`] if `min > max`.
    /// - [`SteppedIntervalError::UnsupportedUnit`] if `T` cannot step by
    ///   `unit`.
    pub fn try_new(
        min: T,
        max: T,
        unit: T::Unit,
        step: NonZeroU64,
    ) -> Result<Self, SteppedIntervalError<T>> {
        let interval = Interval::try_new(min, max)?;
        Ok(Self::from_interval(interval, unit, step)?)
    }

    /// Attaches a unit and step to an existing interval.
    ///
    /// The unit is probed by stepping `min` once. A probe that only
    /// overflows is accepted: the unit is meaningful, there is just no room
    /// past `min`.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedUnitError`] if `T` cannot step by `unit`.
    pub fn from_interval(
        interval: Interval<T>,
        unit: T::Unit,
        step: NonZeroU64,
    ) -> Result<Self, UnsupportedUnitError<T::Unit>> {
        if let Err(StepError::UnsupportedUnit) = interval.start().step_by(1, unit) {
            let type_name = std::any::type_name::<T>();
            tracing::debug!(%unit, value_type = type_name, "rejected unsupported step unit");
            return Err(UnsupportedUnitError { unit, type_name });
        }

        Ok(Self {
            interval,
            unit,
            step,
        })
    }

    /// Returns the underlying interval.
    #[inline]
    pub fn interval(&self) -> &Interval<T> {
        &self.interval
    }

    /// Consumes `self` and returns the underlying interval.
    #[inline]
    pub fn into_interval(self) -> Interval<T> {
        self.interval
    }

    /// Returns the unit the interval steps by.
    #[inline]
    pub fn unit(&self) -> T::Unit {
        self.unit
    }

    /// Returns how many units make one step.
    #[inline]
    pub fn step(&self) -> NonZeroU64 {
        self.step
    }

    /// Returns a lazy iterator over `min, min + step, ...` strictly below
    /// `max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_stepped::{SteppedInterval, Ones};
    /// # use std::num::NonZeroU64;
    ///
    /// let iv = SteppedInterval::try_new(1, 10, Ones, NonZeroU64::new(3).unwrap()).unwrap();
    /// assert_eq!(iv.points().collect::<Vec<_>>(), vec![1, 4, 7]);
    /// ```
    pub fn points(&self) -> Points<T> {
        Points {
            origin: self.interval.start().clone(),
            end: self.interval.end().clone(),
            unit: self.unit,
            step: step_amount(self.step),
            index: 0,
            done: false,
        }
    }

    /// Returns a lazy iterator over consecutive sub-intervals of `step`
    /// units each, followed by one shorter remainder if the span does not
    /// divide evenly. The sub-intervals tile `[min, max)` exactly and keep
    /// this interval's unit and step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanwise_stepped::{SteppedInterval, Ones};
    /// # use spanwise_core::Interval;
    /// # use std::num::NonZeroU64;
    ///
    /// let iv = SteppedInterval::try_new(0, 10, Ones, NonZeroU64::new(3).unwrap()).unwrap();
    /// let parts: Vec<Interval<i32>> = iv.split().map(|p| p.into_interval()).collect();
    /// assert_eq!(
    ///     parts,
    ///     vec![
    ///         Interval::new(0, 3),
    ///         Interval::new(3, 6),
    ///         Interval::new(6, 9),
    ///         Interval::new(9, 10),
    ///     ]
    /// );
    /// ```
    pub fn split(&self) -> Partitions<T> {
        let min = self.interval.start();
        let max = self.interval.end();
        let step = step_amount(self.step);
        let total = min.units_until(max, self.unit).max(0);
        let full = total / step;

        tracing::trace!(
            total,
            step,
            full,
            remainder = total % step,
            "planned stepped partition"
        );

        Partitions {
            origin: min.clone(),
            cursor: min.clone(),
            end: max.clone(),
            unit: self.unit,
            step: self.step,
            full,
            index: 0,
            done: false,
        }
    }

    /// Splits the interval with a different unit and step.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedUnitError`] if `T` cannot step by `unit`.
    pub fn split_every(
        &self,
        unit: T::Unit,
        step: NonZeroU64,
    ) -> Result<Partitions<T>, UnsupportedUnitError<T::Unit>> {
        Ok(Self::from_interval(self.interval.clone(), unit, step)?.split())
    }
}

/// The step as a signed unit count. Steps beyond `i64::MAX` cannot land
/// inside any representable span, so they clamp.
#[inline]
fn step_amount(step: NonZeroU64) -> i64 {
    i64::try_from(step.get()).unwrap_or(i64::MAX)
}

impl<T> Deref for SteppedInterval<T>
where
    T: Steppable,
{
    type Target = Interval<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.interval
    }
}

impl<T> AsRef<Interval<T>> for SteppedInterval<T>
where
    T: Steppable,
{
    #[inline]
    fn as_ref(&self) -> &Interval<T> {
        &self.interval
    }
}

impl<T> fmt::Display for SteppedInterval<T>
where
    T: Steppable,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} every {} {}", self.interval, self.step, self.unit)
    }
}

/// Lazy iterator over the points of a [`SteppedInterval`].
///
/// The i-th point is computed from `min` directly rather than from the
/// previous point, so calendar clamping never accumulates.
#[derive(Debug, Clone)]
pub struct Points<T>
where
    T: Steppable,
{
    origin: T,
    end: T,
    unit: T::Unit,
    step: i64,
    index: i64,
    done: bool,
}

impl<T> Iterator for Points<T>
where
    T: Steppable,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let point = if self.index == 0 {
            Some(self.origin.clone())
        } else {
            self.index
                .checked_mul(self.step)
                .and_then(|amount| self.origin.step_by(amount, self.unit).ok())
        };

        match point {
            Some(point) if point < self.end => {
                self.index += 1;
                Some(point)
            }
            _ => {
                self.done = true;
                None
            }
        }
    }
}

impl<T> FusedIterator for Points<T> where T: Steppable {}

/// Lazy iterator over the sub-intervals of a [`SteppedInterval`].
#[derive(Debug, Clone)]
pub struct Partitions<T>
where
    T: Steppable,
{
    origin: T,
    cursor: T,
    end: T,
    unit: T::Unit,
    step: NonZeroU64,
    full: i64,
    index: i64,
    done: bool,
}

impl<T> Partitions<T>
where
    T: Steppable,
{
    #[inline]
    fn piece(&self, start: T, end: T) -> SteppedInterval<T> {
        SteppedInterval {
            interval: Interval::new_unchecked(start, end),
            unit: self.unit,
            step: self.step,
        }
    }

    /// The end of the `index`-th uniform piece, if it is representable and
    /// lies within `(cursor, end]`.
    fn boundary(&self, index: i64) -> Option<T> {
        let amount = (index + 1).checked_mul(step_amount(self.step))?;
        self.origin
            .step_by(amount, self.unit)
            .ok()
            .filter(|b| *b > self.cursor && *b <= self.end)
    }
}

impl<T> Iterator for Partitions<T>
where
    T: Steppable,
{
    type Item = SteppedInterval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.index < self.full {
            if let Some(boundary) = self.boundary(self.index) {
                let start = std::mem::replace(&mut self.cursor, boundary.clone());
                self.index += 1;
                return Some(self.piece(start, boundary));
            }
        }

        // Remainder: whatever is left between the last boundary and `end`.
        self.done = true;
        if self.cursor < self.end {
            Some(self.piece(self.cursor.clone(), self.end.clone()))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let uniform = usize::try_from(self.full - self.index).unwrap_or(usize::MAX);
        (uniform, uniform.checked_add(1))
    }
}

impl<T> FusedIterator for Partitions<T> where T: Steppable {}
