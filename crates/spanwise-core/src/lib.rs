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

//! # Spanwise Core
//!
//! Half-open interval algebra over any totally ordered type. An
//! [`Interval<T>`] is an immutable `[min, max)` span with a full relational
//! predicate suite and the set operations `split_at`, `union`,
//! `intersection` and `difference`, each returning fresh intervals.
//!
//! ## Modules
//!
//! - `interval`: the `Interval<T>` value type, its validating constructors,
//!   predicates (disjoint, touching, overlapping, subset, superset), set
//!   operations, integer point iteration, and conversions to/from
//!   `std::ops::Range`.
//! - `partition`: building consecutive intervals from cut points, checking
//!   that a sequence tiles an interval, and locating the interval that holds
//!   a value.
//! - `error`: the `InvertedRangeError` returned for `min > max`.
//!
//! ## Example
//!
//! ```rust
//! use spanwise_core::{interval, Interval};
//!
//! let a = interval(1, 4)?;
//! let b = interval(2, 5)?;
//! assert_eq!(a.intersection(&b), Some(Interval::new(2, 4)));
//! assert_eq!(a.union(&b).as_slice(), &[Interval::new(1, 5)]);
//! assert_eq!(a.difference(&b).as_slice(), &[Interval::new(1, 2)]);
//! # Ok::<(), spanwise_core::InvertedRangeError<i32>>(())
//! ```

pub mod error;
pub mod interval;
pub mod partition;

pub use error::InvertedRangeError;
pub use interval::{Interval, IntervalPoints, Intervals, interval};
