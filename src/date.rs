// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil dates and date-range enumeration.
//!
//! [`CalendarDate`] is a plain `(year, month, day)` triple without a time of
//! day.  [`DateRange`] walks from one timestamp to another one calendar day
//! at a time and yields the date of every step:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tempora::{dates_between, CalendarDate};
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();
//!
//! let dates = dates_between(&start, &end);
//! assert_eq!(dates.len(), 3);
//! assert_eq!(dates[2], CalendarDate::new(2024, 1, 3).unwrap());
//! ```

use crate::error::CalendarError;
use crate::instant::localize;
use crate::DateList;
use chrono::{DateTime, Datelike, Days, Month, NaiveDate, TimeZone};
use std::fmt;
use std::iter::FusedIterator;

#[cfg(feature = "serde")]
use serde::{de, ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// A Gregorian calendar date with no time-of-day component.
///
/// Equality and ordering are by `(year, month, day)`; the month is kept as
/// its 1-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a date from a year, a 1-based month and a 1-based day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] when `month` is outside
    /// `1..=12`, and [`CalendarError::InvalidDay`] when the day does not
    /// exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .ok_or(CalendarError::InvalidDay { year, month, day })
    }

    /// Calendar date of `t` in its own zone.
    pub fn of<Tz: TimeZone>(t: &DateTime<Tz>) -> Self {
        Self::from(t.date_naive())
    }

    /// Calendar year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year.
    #[inline]
    pub fn month(&self) -> Month {
        // Fields always come from a valid NaiveDate.
        Month::try_from(self.month as u8).unwrap_or(Month::January)
    }

    /// Month number in `1..=12`.
    #[inline]
    pub const fn month_number(&self) -> u32 {
        self.month
    }

    /// Day of the month, starting at 1.
    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// The equivalent `chrono` date.
    pub fn to_naive(&self) -> NaiveDate {
        // Fields always come from a valid NaiveDate.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .unwrap_or(NaiveDate::MIN)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.to_naive()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// Serialized as `{ "year": 2024, "month": 1, "day": 31 }`; deserialization
// goes through `CalendarDate::new` so invalid dates are rejected.
#[cfg(feature = "serde")]
impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("CalendarDate", 3)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month)?;
        s.serialize_field("day", &self.day)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: u32,
            day: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        CalendarDate::new(raw.year, raw.month, raw.day).map_err(de::Error::custom)
    }
}

/// Calendar date of the day before `t`, ignoring the time of day.
///
/// Saturates at the first date chrono can represent.
pub fn prior_date<Tz: TimeZone>(t: &DateTime<Tz>) -> CalendarDate {
    CalendarDate::from(t.date_naive().pred_opt().unwrap_or(NaiveDate::MIN))
}

/// Calendar date of the day after `t`, ignoring the time of day.
///
/// Saturates at the last date chrono can represent.
pub fn next_date<Tz: TimeZone>(t: &DateTime<Tz>) -> CalendarDate {
    CalendarDate::from(t.date_naive().succ_opt().unwrap_or(NaiveDate::MAX))
}

/// Every calendar date spanned by walking from `start` to `end`, in order.
///
/// Collects a [`DateRange`]; prefer iterating the range directly for very
/// long spans.
pub fn dates_between<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> DateList {
    DateRange::new(start, end).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    Seed,
    Stepping,
    Done,
}

/// Lazy iterator over the calendar dates between two timestamps.
///
/// The walk yields the date of `start`, then advances one calendar day at a
/// time (keeping the wall-clock time of `start`).  Each step strictly before
/// `end` yields its date.  The first step that reaches or passes `end`
/// yields one last date only when it lands on the same calendar date as
/// `end`, and the walk stops.
///
/// If `end` is not after `start` the range holds only the date of `start`.
#[derive(Debug, Clone)]
pub struct DateRange<Tz: TimeZone> {
    cursor: DateTime<Tz>,
    end: DateTime<Tz>,
    state: Walk,
}

impl<Tz: TimeZone> DateRange<Tz> {
    pub fn new(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Self {
        Self {
            cursor: start.clone(),
            end: end.clone(),
            state: Walk::Seed,
        }
    }

    /// The cursor advanced by one calendar day, or `None` past chrono's range.
    fn step(&self) -> Option<DateTime<Tz>> {
        let local = self.cursor.naive_local().checked_add_days(Days::new(1))?;
        Some(localize(&self.cursor.timezone(), local))
    }
}

impl<Tz: TimeZone> Iterator for DateRange<Tz> {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            Walk::Done => None,
            Walk::Seed => {
                self.state = Walk::Stepping;
                Some(CalendarDate::of(&self.cursor))
            }
            Walk::Stepping => {
                let Some(next) = self.step() else {
                    self.state = Walk::Done;
                    return None;
                };
                if next < self.end {
                    self.cursor = next;
                    return Some(CalendarDate::of(&self.cursor));
                }
                self.state = Walk::Done;
                if next.date_naive() == self.end.date_naive() {
                    tracing::trace!(end = %self.end.date_naive(), "final step lands on end date");
                    Some(CalendarDate::of(&next))
                } else {
                    None
                }
            }
        }
    }
}

impl<Tz: TimeZone> FusedIterator for DateRange<Tz> {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_fields() {
        assert_eq!(
            CalendarDate::new(2024, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            CalendarDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            }
        );
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_accessors_and_display() {
        let d = date(2024, 7, 4);
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), Month::July);
        assert_eq!(date(2024, 12, 1).month(), Month::December);
        assert_eq!(d.month_number(), 7);
        assert_eq!(d.day(), 4);
        assert_eq!(d.to_string(), "2024-07-04");
        assert_eq!(d.to_naive(), NaiveDate::from_ymd_opt(2024, 7, 4).unwrap());
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 2, 1) < date(2024, 10, 1));
        assert!(date(2024, 10, 2) > date(2024, 10, 1));
    }

    #[test]
    fn test_prior_and_next_date() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 23, 0, 0).unwrap();
        assert_eq!(prior_date(&t), date(2024, 2, 29));
        assert_eq!(next_date(&t), date(2024, 3, 2));

        let new_year = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(next_date(&new_year), date(2025, 1, 1));
    }

    #[test]
    fn test_dates_use_local_calendar() {
        let tz = FixedOffset::east_opt(10 * 3600).unwrap();
        // 2024-01-01T20:00Z is already Jan 2nd in UTC+10.
        let t = Utc
            .with_ymd_and_hms(2024, 1, 1, 20, 0, 0)
            .unwrap()
            .with_timezone(&tz);
        assert_eq!(CalendarDate::of(&t), date(2024, 1, 2));
        assert_eq!(next_date(&t), date(2024, 1, 3));
    }

    #[test]
    fn test_dates_between_partial_final_day() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();
        assert_eq!(
            dates_between(&start, &end),
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
    }

    #[test]
    fn test_dates_between_same_instant() {
        let t = Utc.with_ymd_and_hms(2024, 5, 5, 5, 5, 5).unwrap();
        assert_eq!(dates_between(&t, &t), vec![date(2024, 5, 5)]);
    }

    #[test]
    fn test_dates_between_end_before_start() {
        let start = Utc.with_ymd_and_hms(2024, 5, 5, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(dates_between(&start, &end), vec![date(2024, 5, 5)]);
    }

    #[test]
    fn test_dates_between_final_step_lands_on_end_date() {
        // Steps land at 18:00, end is earlier in the day of the last step.
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
        assert_eq!(
            dates_between(&start, &end),
            vec![date(2024, 1, 1), date(2024, 1, 2)]
        );
    }

    #[test]
    fn test_dates_between_exact_midnight_end() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
        assert_eq!(
            dates_between(&start, &end),
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
    }

    #[test]
    fn test_date_range_is_lazy_and_fused() {
        let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap();
        let mut range = DateRange::new(&start, &end);
        let first: Vec<_> = range.by_ref().take(3).collect();
        assert_eq!(first, vec![date(2000, 1, 1), date(2000, 1, 2), date(2000, 1, 3)]);

        let mut short = DateRange::new(&start, &start);
        assert_eq!(short.next(), Some(date(2000, 1, 1)));
        assert_eq!(short.next(), None);
        assert_eq!(short.next(), None);
    }

    #[test]
    fn test_dates_between_across_dst_change() {
        let tz = chrono_tz::Europe::Berlin;
        let start = tz.with_ymd_and_hms(2024, 3, 30, 12, 0, 0).unwrap();
        let end = tz.with_ymd_and_hms(2024, 4, 1, 6, 0, 0).unwrap();
        assert_eq!(
            dates_between(&start, &end),
            vec![date(2024, 3, 30), date(2024, 3, 31), date(2024, 4, 1)]
        );
    }
}
