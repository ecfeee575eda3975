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

//! # Steppable Values
//!
//! The capability a value type must offer to be enumerated and partitioned:
//! advancing by a signed number of units, and measuring the signed number of
//! whole units to another value.
//!
//! Implementations are provided for the primitive integers (unit [`Ones`])
//! and, with the `chrono` feature, for chrono's date and date-time types
//! (unit [`TimeUnit`](crate::time::TimeUnit)).

use crate::error::StepError;
use num_traits::ToPrimitive;
use std::fmt::{self, Debug, Display};

/// A totally ordered type that can be advanced in discrete units.
///
/// # Contract
///
/// - `step_by(0, unit)` returns a value equal to `self` for any supported
///   unit.
/// - For a supported unit and `n > 0`, `step_by(n, unit)` is strictly greater
///   than `self`, and `step_by(n * k, unit)` grows with `k`.
/// - `units_until` counts whole units from `self` to `end`, truncating toward
///   zero and saturating at the `i64` bounds. It is negative when `end` lies
///   before `self`. Its value for units `step_by` rejects is unspecified.
pub trait Steppable: Ord + Clone + Debug + Display {
    /// The granularity this type steps by.
    type Unit: Copy + Eq + Debug + Display;

    /// Returns `self` advanced by `amount` units.
    ///
    /// # Errors
    ///
    /// - [`StepError::UnsupportedUnit`] if `unit` is meaningless for `Self`.
    /// - [`StepError::Overflow`] if the result is not representable.
    fn step_by(&self, amount: i64, unit: Self::Unit) -> Result<Self, StepError>;

    /// Returns the signed count of whole units from `self` to `end`.
    fn units_until(&self, end: &Self, unit: Self::Unit) -> i64;
}

/// The unit of the primitive integers: a distance of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ones;

impl Display for Ones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ones")
    }
}

#[inline]
fn saturate(value: i128) -> i64 {
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

macro_rules! impl_steppable_for_int {
    ($($t:ty)*) => ($(
        impl Steppable for $t {
            type Unit = Ones;

            #[inline]
            fn step_by(&self, amount: i64, _unit: Ones) -> Result<Self, StepError> {
                self.to_i128()
                    .and_then(|v| v.checked_add(i128::from(amount)))
                    .and_then(num_traits::cast::<i128, $t>)
                    .ok_or(StepError::Overflow)
            }

            #[inline]
            fn units_until(&self, end: &Self, _unit: Ones) -> i64 {
                match (self.to_i128(), end.to_i128()) {
                    (Some(start), Some(end)) => saturate(end - start),
                    _ => 0,
                }
            }
        }
    )*)
}

impl_steppable_for_int!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);
