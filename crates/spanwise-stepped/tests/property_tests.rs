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

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use spanwise_core::{Interval, partition::is_partition_of};
use spanwise_stepped::{
    Ones, Steppable, SteppedInterval, SteppedIntervalError, TimeUnit, stepped,
};
use std::num::NonZeroU64;

fn step(n: u64) -> NonZeroU64 {
    NonZeroU64::new(n).unwrap()
}

fn arb_stepped() -> impl Strategy<Value = SteppedInterval<i32>> {
    (-1_000i32..1_000, 0i32..500, 1u64..40)
        .prop_map(|(min, len, n)| stepped(min, min + len, Ones, step(n)).unwrap())
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn test_split_tiles_interval(iv in arb_stepped()) {
        let parts: Vec<Interval<i32>> = iv.split().map(SteppedInterval::into_interval).collect();
        prop_assert!(is_partition_of(&parts, iv.interval()));
    }

    #[test]
    fn test_split_pieces_have_step_length(iv in arb_stepped()) {
        let lens: Vec<usize> = iv.split().map(|p| p.len()).collect();
        let step = iv.step().get() as usize;
        prop_assert_eq!(lens.len(), iv.len().div_ceil(step));
        if let Some((last, uniform)) = lens.split_last() {
            prop_assert!(uniform.iter().all(|&len| len == step));
            prop_assert!(*last >= 1 && *last <= step);
        }
    }

    #[test]
    fn test_points_increase_below_max(iv in arb_stepped()) {
        let points: Vec<i32> = iv.points().collect();
        prop_assert_eq!(points.first(), (!iv.is_empty()).then_some(iv.start()));
        prop_assert!(points.windows(2).all(|w| w[1] - w[0] == iv.step().get() as i32));
        prop_assert!(points.iter().all(|p| iv.contains_value(p)));
    }

    #[test]
    fn test_split_starts_are_points(iv in arb_stepped()) {
        let starts: Vec<i32> = iv.split().map(|p| *p.start()).collect();
        prop_assert_eq!(starts, iv.points().collect::<Vec<_>>());
    }

    #[test]
    fn test_month_split_tiles_dates(start in arb_date(), days in 0u64..2_000, n in 1u64..6) {
        let end = start.checked_add_days(Days::new(days)).unwrap();
        let iv = stepped(start, end, TimeUnit::Months, step(n)).unwrap();
        let parts: Vec<_> = iv.split().map(SteppedInterval::into_interval).collect();
        prop_assert!(is_partition_of(&parts, iv.interval()));
    }
}

#[test]
fn test_days_split_with_remainder() {
    let day0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let day10 = day0.checked_add_days(Days::new(10)).unwrap();
    let iv = stepped(day0, day10, TimeUnit::Days, step(3)).unwrap();

    let lens: Vec<i64> = iv
        .split()
        .map(|p| p.start().units_until(p.end(), TimeUnit::Days))
        .collect();
    assert_eq!(lens, vec![3, 3, 3, 1]);
}

#[test]
fn test_date_rejects_hours() {
    let day0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let err = stepped(day0, day0, TimeUnit::Hours, step(1)).unwrap_err();
    assert!(matches!(err, SteppedIntervalError::UnsupportedUnit(e) if e.unit == TimeUnit::Hours));
}
