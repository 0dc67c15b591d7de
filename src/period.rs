// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar periods.
//!
//! This module provides:
//! - [`Period<Tz>`]: a closed `[start, end]` interval between two zoned instants
//! - [`Unit`]: a runtime choice of calendar unit, mapping a timestamp to the
//!   period of that unit which contains it

use crate::bounds::{
    day_finish, day_start, hour_finish, hour_start, month_finish, month_start, week_finish,
    week_start, year_finish, year_start,
};
use crate::quarter::{quarter_finish, quarter_start};
use chrono::{DateTime, Duration, TimeZone};
use qtty::{Day, Days, Seconds};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed interval between two instants of the same zone.
///
/// Periods produced by [`Unit::period`] end one [`tick`](crate::tick) before
/// the next unit starts, so `end` is inclusive.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempora::Unit;
///
/// let t = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
/// let day = Unit::Day.period(&t);
///
/// assert!(day.contains(&t));
/// assert_eq!(day.to_string(), "2024-03-10 00:00:00 UTC to 2024-03-10 23:59:59.999999999 UTC");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Period<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> Period<Tz> {
    /// Creates a new period between two instants.
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Period { start, end }
    }

    /// `true` when `start <= t <= end`.
    pub fn contains(&self, t: &DateTime<Tz>) -> bool {
        *t >= self.start && *t <= self.end
    }

    /// Returns the duration of the period as the difference between end and start.
    pub fn duration(&self) -> Duration {
        self.end.clone().signed_duration_since(self.start.clone())
    }

    /// Returns the duration of the period in days.
    ///
    /// A 23- or 25-hour DST day yields a value below or above one day.
    pub fn duration_days(&self) -> Days {
        let duration = self.duration();
        let seconds = match duration.num_nanoseconds() {
            Some(ns) => ns as f64 / 1e9,
            // Spans beyond ~292 years do not fit in i64 nanoseconds.
            None => duration.num_seconds() as f64,
        };
        Seconds::new(seconds).to::<Day>()
    }
}

impl<Tz: TimeZone> fmt::Display for Period<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// A calendar unit usable for bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    Hour,
    Day,
    /// Sunday-first week.
    Week,
    Month,
    Quarter,
    Year,
}

impl Unit {
    /// First instant of the unit containing `t`.
    pub fn start<Tz: TimeZone>(self, t: &DateTime<Tz>) -> DateTime<Tz> {
        match self {
            Unit::Hour => hour_start(t),
            Unit::Day => day_start(t),
            Unit::Week => week_start(t),
            Unit::Month => month_start(t),
            Unit::Quarter => quarter_start(t),
            Unit::Year => year_start(t),
        }
    }

    /// Last instant of the unit containing `t`.
    pub fn finish<Tz: TimeZone>(self, t: &DateTime<Tz>) -> DateTime<Tz> {
        match self {
            Unit::Hour => hour_finish(t),
            Unit::Day => day_finish(t),
            Unit::Week => week_finish(t),
            Unit::Month => month_finish(t),
            Unit::Quarter => quarter_finish(t),
            Unit::Year => year_finish(t),
        }
    }

    /// The unit containing `t` as a [`Period`].
    pub fn period<Tz: TimeZone>(self, t: &DateTime<Tz>) -> Period<Tz> {
        Period::new(self.start(t), self.finish(t))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Quarter => "quarter",
            Unit::Year => "year",
        };
        f.write_str(name)
    }
}
