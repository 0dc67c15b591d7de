// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Method syntax for `chrono::DateTime`.
//!
//! [`CalendarExt`] mirrors the free functions of this crate so they can be
//! chained on a timestamp:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tempora::{CalendarExt, TimeOfDay};
//!
//! let t = Utc.with_ymd_and_hms(2024, 5, 20, 16, 45, 0).unwrap();
//! assert_eq!(t.quarter_start(), Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());
//! assert_eq!(t.time_of_day(), TimeOfDay::Afternoon);
//! ```

use crate::bounds;
use crate::classify::{self, Lighting, TimeOfDay, TimeOfWeek};
use crate::date::{self, CalendarDate};
use crate::quarter;
use chrono::{DateTime, TimeZone};

/// Calendar boundaries and classifications as methods on `DateTime<Tz>`.
pub trait CalendarExt: Sized {
    fn hour_start(&self) -> Self;
    fn hour_finish(&self) -> Self;
    fn day_start(&self) -> Self;
    fn day_finish(&self) -> Self;
    fn week_start(&self) -> Self;
    fn week_finish(&self) -> Self;
    fn month_start(&self) -> Self;
    fn month_finish(&self) -> Self;
    fn quarter_start(&self) -> Self;
    fn quarter_finish(&self) -> Self;
    fn year_start(&self) -> Self;
    fn year_finish(&self) -> Self;

    /// Quarter number in `1..=4`.
    ///
    /// Named apart from `Datelike::quarter` so both traits can be in scope.
    fn quarter_number(&self) -> u8;

    fn calendar_date(&self) -> CalendarDate;
    fn prior_date(&self) -> CalendarDate;
    fn next_date(&self) -> CalendarDate;

    fn lighting(&self) -> Lighting;
    fn time_of_day(&self) -> TimeOfDay;
    fn time_of_week(&self) -> TimeOfWeek;
}

impl<Tz: TimeZone> CalendarExt for DateTime<Tz> {
    #[inline]
    fn hour_start(&self) -> Self {
        bounds::hour_start(self)
    }

    #[inline]
    fn hour_finish(&self) -> Self {
        bounds::hour_finish(self)
    }

    #[inline]
    fn day_start(&self) -> Self {
        bounds::day_start(self)
    }

    #[inline]
    fn day_finish(&self) -> Self {
        bounds::day_finish(self)
    }

    #[inline]
    fn week_start(&self) -> Self {
        bounds::week_start(self)
    }

    #[inline]
    fn week_finish(&self) -> Self {
        bounds::week_finish(self)
    }

    #[inline]
    fn month_start(&self) -> Self {
        bounds::month_start(self)
    }

    #[inline]
    fn month_finish(&self) -> Self {
        bounds::month_finish(self)
    }

    #[inline]
    fn quarter_start(&self) -> Self {
        quarter::quarter_start(self)
    }

    #[inline]
    fn quarter_finish(&self) -> Self {
        quarter::quarter_finish(self)
    }

    #[inline]
    fn year_start(&self) -> Self {
        bounds::year_start(self)
    }

    #[inline]
    fn year_finish(&self) -> Self {
        bounds::year_finish(self)
    }

    #[inline]
    fn quarter_number(&self) -> u8 {
        quarter::quarter(self)
    }

    #[inline]
    fn calendar_date(&self) -> CalendarDate {
        CalendarDate::of(self)
    }

    #[inline]
    fn prior_date(&self) -> CalendarDate {
        date::prior_date(self)
    }

    #[inline]
    fn next_date(&self) -> CalendarDate {
        date::next_date(self)
    }

    #[inline]
    fn lighting(&self) -> Lighting {
        classify::lighting(self)
    }

    #[inline]
    fn time_of_day(&self) -> TimeOfDay {
        classify::time_of_day(self)
    }

    #[inline]
    fn time_of_week(&self) -> TimeOfWeek {
        classify::time_of_week(self)
    }
}
