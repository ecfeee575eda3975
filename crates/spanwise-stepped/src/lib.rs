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

//! # Spanwise Stepped
//!
//! Half-open intervals that know how to walk themselves. A
//! [`SteppedInterval<T>`] wraps a [`spanwise_core::Interval<T>`] together
//! with a unit and a step, enumerates its points lazily, and splits itself
//! into equal sub-intervals plus an optional shorter remainder.
//!
//! ## Modules
//!
//! - `steppable`: the [`Steppable`] capability and its integer
//!   implementations (unit [`Ones`]).
//! - `stepped`: the `SteppedInterval<T>` type with its `points` and `split`
//!   iterators.
//! - `time`: chrono support stepping dates and date-times by a `TimeUnit`
//!   (behind the default `chrono` feature).
//! - `error`: construction and stepping errors.
//!
//! ## Example
//!
//! ```rust
//! use spanwise_stepped::{stepped, Ones};
//! use std::num::NonZeroU64;
//!
//! let step = NonZeroU64::new(4).unwrap();
//! let iv = stepped(0, 10, Ones, step).unwrap();
//! let lens: Vec<usize> = iv.split().map(|p| p.len()).collect();
//! assert_eq!(lens, vec![4, 4, 2]);
//! ```

pub mod error;
pub mod steppable;
pub mod stepped;
#[cfg(feature = "chrono")]
pub mod time;

pub use error::{StepError, SteppedIntervalError, UnsupportedUnitError};
pub use steppable::{Ones, Steppable};
pub use stepped::{Partitions, Points, SteppedInterval, stepped};
#[cfg(feature = "chrono")]
pub use time::TimeUnit;
