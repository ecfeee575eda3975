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

//! Construction errors for intervals.
//!
//! Constructing an `Interval` is the only fallible step in this crate: once a
//! value exists its bounds are ordered, and every predicate and combination
//! operation is total.

use thiserror::Error;

/// Returned when an interval is requested with `min > max`.
///
/// Carries both offending bounds so callers can report them.
///
/// # Examples
///
/// ```rust
/// # use spanwise_core::{interval, InvertedRangeError};
///
/// let err = interval(5, 1).unwrap_err();
/// assert_eq!(err, InvertedRangeError { min: 5, max: 1 });
/// assert_eq!(err.to_string(), "inverted range is not accepted: min: 5, max: 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("inverted range is not accepted: min: {min}, max: {max}")]
pub struct InvertedRangeError<T> {
    /// The lower bound that was supplied.
    pub min: T,
    /// The upper bound that was supplied.
    pub max: T,
}

impl<T> InvertedRangeError<T> {
    /// Returns the offending bounds as a `(min, max)` pair.
    #[inline]
    pub fn into_bounds(self) -> (T, T) {
        (self.min, self.max)
    }
}
