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

//! # Calendar and Clock Units
//!
//! [`Steppable`] support for `chrono::NaiveDate`, `chrono::NaiveDateTime` and
//! `chrono::DateTime<Tz>`, stepping by a [`TimeUnit`].
//!
//! Units up to `Weeks` are fixed durations. `Months` and longer are calendar
//! units: stepping clamps to the last day of a shorter month
//! (Jan 31 + 1 month = Feb 28/29), and distances count whole months, so
//! Jan 31 to Feb 28 is zero months. Dates reject every unit shorter than a
//! day.

use crate::{error::StepError, steppable::Steppable};
use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use std::fmt;

/// A step granularity for date and time values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
}

impl TimeUnit {
    /// Returns `true` for units that measure whole calendar days or more.
    #[inline]
    pub fn is_date_based(self) -> bool {
        self >= TimeUnit::Days
    }

    /// The number of calendar months in one unit, for calendar units.
    #[inline]
    fn months(self) -> Option<i64> {
        match self {
            TimeUnit::Months => Some(1),
            TimeUnit::Years => Some(12),
            TimeUnit::Decades => Some(120),
            TimeUnit::Centuries => Some(1_200),
            TimeUnit::Millennia => Some(12_000),
            _ => None,
        }
    }

    /// Converts `amount` units into a duration, for fixed units.
    fn delta(self, amount: i64) -> Result<TimeDelta, StepError> {
        let delta = match self {
            TimeUnit::Nanos => Some(TimeDelta::nanoseconds(amount)),
            TimeUnit::Micros => Some(TimeDelta::microseconds(amount)),
            TimeUnit::Millis => TimeDelta::try_milliseconds(amount),
            TimeUnit::Seconds => TimeDelta::try_seconds(amount),
            TimeUnit::Minutes => TimeDelta::try_minutes(amount),
            TimeUnit::Hours => TimeDelta::try_hours(amount),
            TimeUnit::HalfDays => amount.checked_mul(12).and_then(TimeDelta::try_hours),
            TimeUnit::Days => TimeDelta::try_days(amount),
            TimeUnit::Weeks => TimeDelta::try_weeks(amount),
            _ => return Err(StepError::UnsupportedUnit),
        };
        delta.ok_or(StepError::Overflow)
    }

    /// Counts whole fixed units in `delta`, truncating toward zero.
    fn count(self, delta: TimeDelta) -> i64 {
        let saturated = || {
            if delta < TimeDelta::zero() {
                i64::MIN
            } else {
                i64::MAX
            }
        };
        match self {
            TimeUnit::Nanos => delta.num_nanoseconds().unwrap_or_else(saturated),
            TimeUnit::Micros => delta.num_microseconds().unwrap_or_else(saturated),
            TimeUnit::Millis => delta.num_milliseconds(),
            TimeUnit::Seconds => delta.num_seconds(),
            TimeUnit::Minutes => delta.num_minutes(),
            TimeUnit::Hours => delta.num_hours(),
            TimeUnit::HalfDays => delta.num_hours() / 12,
            TimeUnit::Days => delta.num_days(),
            TimeUnit::Weeks => delta.num_weeks(),
            // Calendar units never reach here.
            _ => 0,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Nanos => "nanos",
            TimeUnit::Micros => "micros",
            TimeUnit::Millis => "millis",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::HalfDays => "half-days",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
            TimeUnit::Decades => "decades",
            TimeUnit::Centuries => "centuries",
            TimeUnit::Millennia => "millennia",
        };
        f.write_str(name)
    }
}

/// Shifts `value` by `months` calendar months in either direction.
fn shift_months<T>(
    value: T,
    months: i64,
    add: fn(T, Months) -> Option<T>,
    sub: fn(T, Months) -> Option<T>,
) -> Result<T, StepError> {
    let magnitude = u32::try_from(months.unsigned_abs()).map_err(|_| StepError::Overflow)?;
    let shifted = if months >= 0 {
        add(value, Months::new(magnitude))
    } else {
        sub(value, Months::new(magnitude))
    };
    shifted.ok_or(StepError::Overflow)
}

/// Index of the month since year 0, for counting calendar distances.
#[inline]
fn month_index<D: Datelike>(value: &D) -> i64 {
    i64::from(value.year()) * 12 + i64::from(value.month0())
}

/// Counts whole months from `start` to `end`.
///
/// The keys order positions within a month (day, then time of day). A month
/// only counts once the end key has caught up with the start key.
fn whole_months<K: Ord>(start: i64, start_key: K, end: i64, end_key: K) -> i64 {
    let months = end - start;
    if months > 0 && end_key < start_key {
        months - 1
    } else if months < 0 && end_key > start_key {
        months + 1
    } else {
        months
    }
}

impl Steppable for NaiveDate {
    type Unit = TimeUnit;

    fn step_by(&self, amount: i64, unit: TimeUnit) -> Result<Self, StepError> {
        if !unit.is_date_based() {
            return Err(StepError::UnsupportedUnit);
        }
        match unit.months() {
            Some(per_unit) => {
                let months = amount.checked_mul(per_unit).ok_or(StepError::Overflow)?;
                shift_months(
                    *self,
                    months,
                    NaiveDate::checked_add_months,
                    NaiveDate::checked_sub_months,
                )
            }
            None => self
                .checked_add_signed(unit.delta(amount)?)
                .ok_or(StepError::Overflow),
        }
    }

    fn units_until(&self, end: &Self, unit: TimeUnit) -> i64 {
        match unit.months() {
            Some(per_unit) => {
                whole_months(month_index(self), self.day(), month_index(end), end.day()) / per_unit
            }
            None => unit.count(end.signed_duration_since(*self)),
        }
    }
}

impl Steppable for NaiveDateTime {
    type Unit = TimeUnit;

    fn step_by(&self, amount: i64, unit: TimeUnit) -> Result<Self, StepError> {
        match unit.months() {
            Some(per_unit) => {
                let months = amount.checked_mul(per_unit).ok_or(StepError::Overflow)?;
                shift_months(
                    *self,
                    months,
                    NaiveDateTime::checked_add_months,
                    NaiveDateTime::checked_sub_months,
                )
            }
            None => self
                .checked_add_signed(unit.delta(amount)?)
                .ok_or(StepError::Overflow),
        }
    }

    fn units_until(&self, end: &Self, unit: TimeUnit) -> i64 {
        match unit.months() {
            Some(per_unit) => {
                let start_key = (self.day(), self.time());
                let end_key = (end.day(), end.time());
                whole_months(month_index(self), start_key, month_index(end), end_key) / per_unit
            }
            None => unit.count(end.signed_duration_since(*self)),
        }
    }
}

impl<Tz> Steppable for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    type Unit = TimeUnit;

    fn step_by(&self, amount: i64, unit: TimeUnit) -> Result<Self, StepError> {
        match unit.months() {
            Some(per_unit) => {
                let months = amount.checked_mul(per_unit).ok_or(StepError::Overflow)?;
                shift_months(
                    self.clone(),
                    months,
                    DateTime::<Tz>::checked_add_months,
                    DateTime::<Tz>::checked_sub_months,
                )
            }
            None => self
                .clone()
                .checked_add_signed(unit.delta(amount)?)
                .ok_or(StepError::Overflow),
        }
    }

    fn units_until(&self, end: &Self, unit: TimeUnit) -> i64 {
        match unit.months() {
            Some(per_unit) => {
                // Calendar distance is read in the start's local time.
                let start = self.naive_local();
                let end = end.with_timezone(&self.timezone()).naive_local();
                start.units_until(&end, TimeUnit::Months) / per_unit
            }
            None => unit.count(end.clone().signed_duration_since(self.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_time(NaiveTime::from_hms_opt(h, min, 0).unwrap())
    }

    #[test]
    fn test_date_rejects_sub_day_units() {
        let d = date(2024, 1, 1);
        for unit in [
            TimeUnit::Nanos,
            TimeUnit::Micros,
            TimeUnit::Millis,
            TimeUnit::Seconds,
            TimeUnit::Minutes,
            TimeUnit::Hours,
            TimeUnit::HalfDays,
        ] {
            assert_eq!(d.step_by(1, unit), Err(StepError::UnsupportedUnit), "{unit}");
        }
    }

    #[test]
    fn test_date_step_by_fixed_units() {
        let d = date(2024, 2, 27);
        assert_eq!(d.step_by(3, TimeUnit::Days), Ok(date(2024, 3, 1)));
        assert_eq!(d.step_by(-1, TimeUnit::Weeks), Ok(date(2024, 2, 20)));
    }

    #[test]
    fn test_date_step_by_calendar_units() {
        let d = date(2024, 1, 31);
        assert_eq!(d.step_by(1, TimeUnit::Months), Ok(date(2024, 2, 29)));
        assert_eq!(d.step_by(-2, TimeUnit::Months), Ok(date(2023, 11, 30)));
        assert_eq!(d.step_by(1, TimeUnit::Years), Ok(date(2025, 1, 31)));
        assert_eq!(d.step_by(1, TimeUnit::Decades), Ok(date(2034, 1, 31)));
        assert_eq!(d.step_by(1, TimeUnit::Millennia), Ok(date(3024, 1, 31)));
    }

    #[test]
    fn test_date_step_by_overflow() {
        assert_eq!(NaiveDate::MAX.step_by(1, TimeUnit::Days), Err(StepError::Overflow));
        assert_eq!(
            date(2024, 1, 1).step_by(i64::MAX, TimeUnit::Years),
            Err(StepError::Overflow)
        );
    }

    #[test]
    fn test_date_units_until() {
        let start = date(2024, 1, 31);
        assert_eq!(start.units_until(&date(2024, 2, 10), TimeUnit::Days), 10);
        assert_eq!(start.units_until(&date(2024, 2, 10), TimeUnit::Weeks), 1);
        assert_eq!(start.units_until(&date(2024, 2, 29), TimeUnit::Months), 0);
        assert_eq!(start.units_until(&date(2024, 3, 31), TimeUnit::Months), 2);
        assert_eq!(start.units_until(&date(2023, 12, 31), TimeUnit::Months), -1);
        assert_eq!(start.units_until(&date(2026, 1, 30), TimeUnit::Years), 1);
        assert_eq!(date(2024, 3, 1).units_until(&start, TimeUnit::Days), -30);
    }

    #[test]
    fn test_datetime_step_and_measure() {
        let start = datetime(2024, 5, 1, 22, 0);
        assert_eq!(start.step_by(3, TimeUnit::Hours), Ok(datetime(2024, 5, 2, 1, 0)));
        assert_eq!(start.step_by(1, TimeUnit::HalfDays), Ok(datetime(2024, 5, 2, 10, 0)));
        assert_eq!(start.units_until(&datetime(2024, 5, 2, 1, 59), TimeUnit::Hours), 3);
        assert_eq!(start.units_until(&datetime(2024, 5, 2, 1, 59), TimeUnit::Minutes), 239);
        assert_eq!(start.units_until(&datetime(2024, 6, 1, 21, 59), TimeUnit::Months), 0);
        assert_eq!(start.units_until(&datetime(2024, 6, 1, 22, 0), TimeUnit::Months), 1);
    }

    #[test]
    fn test_datetime_nanos_saturate() {
        let start = NaiveDateTime::MIN;
        let end = NaiveDateTime::MAX;
        assert_eq!(start.units_until(&end, TimeUnit::Nanos), i64::MAX);
        assert_eq!(end.units_until(&start, TimeUnit::Nanos), i64::MIN);
    }

    #[test]
    fn test_zoned_datetime() {
        let start = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        let next = start.step_by(1, TimeUnit::Months).unwrap();
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap());
        assert_eq!(start.units_until(&next, TimeUnit::Days), 29);
        assert_eq!(start.units_until(&next, TimeUnit::Months), 0);
    }

    #[test]
    fn test_is_date_based() {
        assert!(!TimeUnit::HalfDays.is_date_based());
        assert!(TimeUnit::Days.is_date_based());
        assert!(TimeUnit::Millennia.is_date_based());
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeUnit::HalfDays.to_string(), "half-days");
        assert_eq!(TimeUnit::Days.to_string(), "days");
    }
}
