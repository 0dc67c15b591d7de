// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Start and finish instants of the calendar units enclosing a timestamp.
//!
//! Every function keeps the zone of its input.  A unit is the closed range
//! `[start, finish]` where `finish` is the next unit's start minus one
//! [`tick`](crate::tick), so consecutive units tile the time axis without
//! gaps or overlap.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tempora::{month_finish, month_start, tick};
//!
//! let t = Utc.with_ymd_and_hms(2024, 2, 14, 9, 30, 0).unwrap();
//! let start = month_start(&t);
//! let finish = month_finish(&t);
//!
//! assert_eq!(start, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
//! assert_eq!(finish + tick(), Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
//! ```

use crate::instant::{finish_before, localize, midnight, tick};
use chrono::{
    DateTime, Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, TimeZone, Timelike,
    Weekday,
};

/// Start of the hour containing `t`.
///
/// The local minutes, seconds and nanoseconds are subtracted from the
/// instant itself, so a repeated hour during a DST fold maps to its own
/// occurrence.  When a sub-hour offset change makes that land off the top of
/// the local hour, the top of the hour is resolved as a wall time instead;
/// if it falls in a gap this is the transition instant.
pub fn hour_start<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let into_hour = Duration::minutes(i64::from(t.minute()))
        + Duration::seconds(i64::from(t.second()))
        + Duration::nanoseconds(i64::from(t.nanosecond()));
    let start = t.clone() - into_hour;
    match top_of_hour(t) {
        Some(top) if start.naive_local() != top => localize(&t.timezone(), top),
        _ => start,
    }
}

/// Last instant of the hour containing `t` (`hh:59:59.999999999`).
pub fn hour_finish<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let start = hour_start(t);
    let next = hour_start(&(start.clone() + Duration::hours(1)));
    if next > start {
        return next - tick();
    }
    // Half-hour fold: the next top of the hour lies past the repeated span.
    match top_of_hour(t).and_then(|top| top.checked_add_signed(Duration::hours(1))) {
        Some(after) => localize(&t.timezone(), after) - tick(),
        None => start + Duration::hours(1) - tick(),
    }
}

/// Local midnight of the calendar date of `t`.
pub fn day_start<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    midnight(&t.timezone(), t.date_naive())
}

/// Last instant of the calendar date of `t` (`23:59:59.999999999`).
pub fn day_finish<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let date = t.date_naive();
    finish_before(&t.timezone(), date.succ_opt(), date)
}

/// Start of the Sunday-first week containing `t`.
pub fn week_start<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    week_start_on(t, Weekday::Sun)
}

/// Last instant of the Sunday-first week containing `t`.
pub fn week_finish<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    week_finish_on(t, Weekday::Sun)
}

/// Start of the week containing `t`, for weeks beginning on `first`.
///
/// ```
/// use chrono::{TimeZone, Utc, Weekday};
/// use tempora::week_start_on;
///
/// // 2024-07-04 is a Thursday.
/// let t = Utc.with_ymd_and_hms(2024, 7, 4, 15, 0, 0).unwrap();
/// assert_eq!(
///     week_start_on(&t, Weekday::Mon),
///     Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()
/// );
/// ```
pub fn week_start_on<Tz: TimeZone>(t: &DateTime<Tz>, first: Weekday) -> DateTime<Tz> {
    midnight(&t.timezone(), first_day_of_week(t.date_naive(), first))
}

/// Last instant of the week containing `t`, for weeks beginning on `first`.
pub fn week_finish_on<Tz: TimeZone>(t: &DateTime<Tz>, first: Weekday) -> DateTime<Tz> {
    let first_day = first_day_of_week(t.date_naive(), first);
    let last_day = first_day.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
    finish_before(&t.timezone(), first_day.checked_add_days(Days::new(7)), last_day)
}

/// Local midnight of the first day of the month containing `t`.
pub fn month_start<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    midnight(&t.timezone(), first_of_month(t.year(), t.month()))
}

/// Last instant of the month containing `t`.
pub fn month_finish<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    months_finish(&t.timezone(), first_of_month(t.year(), t.month()), 1)
}

/// Local midnight of January 1st of the year containing `t`.
pub fn year_start<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    midnight(&t.timezone(), first_of_month(t.year(), 1))
}

/// Last instant of the year containing `t`.
pub fn year_finish<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    months_finish(&t.timezone(), first_of_month(t.year(), 1), 12)
}

// ── calendar helpers ──────────────────────────────────────────────────────

/// Date of the most recent `first` weekday on or before `date`.
pub(crate) fn first_day_of_week(date: NaiveDate, first: Weekday) -> NaiveDate {
    let back = (7 + date.weekday().num_days_from_sunday() - first.num_days_from_sunday()) % 7;
    date.checked_sub_days(Days::new(u64::from(back)))
        .unwrap_or(NaiveDate::MIN)
}

/// First day of `month` in `year`.
///
/// `year` always comes from a valid chrono date, so only the first month of
/// the range boundary can fail; it clamps to [`NaiveDate::MIN`].
pub(crate) fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

/// Last instant of the span of `months` whole months beginning on `first`.
pub(crate) fn months_finish<Tz: TimeZone>(
    tz: &Tz,
    first: NaiveDate,
    months: u32,
) -> DateTime<Tz> {
    let next = first.checked_add_months(Months::new(months));
    let last = next.and_then(|d| d.pred_opt()).unwrap_or(NaiveDate::MAX);
    finish_before(tz, next, last)
}

/// Wall time `hh:00:00` of the local hour of `t`.
#[inline]
fn top_of_hour<Tz: TimeZone>(t: &DateTime<Tz>) -> Option<NaiveDateTime> {
    t.date_naive().and_hms_opt(t.hour(), 0, 0)
}
