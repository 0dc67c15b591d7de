// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar bucketing primitives over `chrono` timestamps.
//!
//! Given a [`chrono::DateTime<Tz>`] in any zone, this crate computes the
//! first and last instants of the enclosing hour, day, week, month, quarter,
//! year and season, classifies the timestamp (lighting, time of day, time of
//! week) and enumerates the calendar dates between two timestamps.  All
//! results stay in the zone of the input.
//!
//! # Core types
//!
//! - [`CalendarDate`] — a civil `(year, month, day)` triple.
//! - [`DateRange`] — lazy iterator over the dates between two timestamps.
//! - [`Period<Tz>`] — a closed `[start, end]` interval.
//! - [`Unit`] — runtime choice of calendar unit (hour … year).
//! - [`Quarter`] — quarter of the year.
//! - [`Season`], [`YearSeasons`] — fixed-date seasons of one year.
//! - [`SeasonCache`], [`SharedSeasonCache`] — per-year season tables,
//!   computed lazily.
//! - [`CalendarExt`] — every boundary and classifier as a method.
//!
//! # Boundaries
//!
//! | Unit | Start | Finish |
//! |------|-------|--------|
//! | hour | [`hour_start`] | [`hour_finish`] |
//! | day | [`day_start`] | [`day_finish`] |
//! | week | [`week_start`] / [`week_start_on`] | [`week_finish`] / [`week_finish_on`] |
//! | month | [`month_start`] | [`month_finish`] |
//! | quarter | [`quarter_start`] | [`quarter_finish`] |
//! | year | [`year_start`] | [`year_finish`] |
//!
//! Every finish is the following start minus one [`tick`] (one nanosecond),
//! so consecutive units tile without gaps.  Local wall times that fall in a
//! DST gap resolve with the offset in force before the gap; ambiguous wall
//! times resolve to the earliest instant.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tempora::{day_finish, day_start, tick, week_start};
//!
//! let t = Utc.with_ymd_and_hms(2024, 1, 3, 15, 20, 0).unwrap();
//! assert_eq!(day_start(&t), Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap());
//! assert_eq!(day_finish(&t) + tick(), Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap());
//! assert_eq!(week_start(&t), Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap());
//! ```

mod bounds;
mod classify;
mod date;
mod error;
mod ext;
pub(crate) mod instant;
mod period;
mod quarter;
mod season;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use bounds::{
    day_finish, day_start, hour_finish, hour_start, month_finish, month_start, week_finish,
    week_finish_on, week_start, week_start_on, year_finish, year_start,
};
pub use classify::{
    lighting, lighting_with, time_of_day, time_of_week, Lighting, LightingRule, TimeOfDay,
    TimeOfWeek,
};
pub use date::{dates_between, next_date, prior_date, CalendarDate, DateRange};
pub use error::CalendarError;
pub use ext::CalendarExt;
pub use instant::tick;
pub use period::{Period, Unit};
pub use quarter::{quarter, quarter_finish, quarter_start, Quarter, UNKNOWN_QUARTER};
pub use season::{list_seasons, Season, SeasonCache, SeasonName, SharedSeasonCache, YearSeasons};

/// An ordered list of calendar dates, as returned by [`dates_between`].
pub type DateList = Vec<CalendarDate>;
