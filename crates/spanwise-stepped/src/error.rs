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

//! Errors raised while building stepped intervals.

use crate::steppable::Steppable;
use spanwise_core::InvertedRangeError;
use thiserror::Error;

/// The outcome of a failed single step, reported by [`Steppable`]
/// implementations.
///
/// Never escapes a constructed `SteppedInterval`: construction maps
/// `UnsupportedUnit` to [`UnsupportedUnitError`], and enumeration simply
/// stops on `Overflow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StepError {
    /// The unit has no meaning for the value type (e.g. hours on a date).
    #[error("unit is not supported by this value type")]
    UnsupportedUnit,
    /// The unit is valid but the result is not representable.
    #[error("step result is out of range")]
    Overflow,
}

/// Returned when a stepped interval is requested with a unit its value type
/// cannot step by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unit {unit} is not supported by {type_name}")]
pub struct UnsupportedUnitError<U> {
    /// The rejected unit.
    pub unit: U,
    /// The name of the value type that rejected it.
    pub type_name: &'static str,
}

/// The error type for building a `SteppedInterval`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SteppedIntervalError<T>
where
    T: Steppable,
{
    /// `min > max` was supplied.
    #[error(transparent)]
    Inverted(#[from] InvertedRangeError<T>),
    /// The unit cannot step the value type.
    #[error(transparent)]
    UnsupportedUnit(#[from] UnsupportedUnitError<T::Unit>),
}
