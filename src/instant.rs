// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock to instant resolution.
//!
//! Every boundary in this crate is first computed as a *local* wall time
//! (`NaiveDateTime`) in the zone of the input timestamp and then mapped back
//! to an absolute instant.  Daylight-saving transitions make that mapping
//! partial, so all conversions go through [`localize`], which picks a single
//! instant for every wall time:
//!
//! | Local mapping | Result |
//! |---------------|--------|
//! | single        | that instant |
//! | ambiguous     | the earliest instant |
//! | nonexistent   | wall time read with the offset in force before the gap |

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
};

/// The smallest increment representable by `chrono` instants.
///
/// Every `*_finish` function returns the start of the following unit minus
/// one tick.
#[inline]
pub fn tick() -> Duration {
    Duration::nanoseconds(1)
}

/// Last representable wall time of a day: `23:59:59.999999999`.
#[inline]
pub(crate) fn last_nanosecond() -> NaiveTime {
    NaiveTime::MIN - tick()
}

/// Map a wall time in `tz` to an instant, resolving folds and gaps.
pub(crate) fn localize<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // Any UTC instant a day earlier precedes the transition.
            let probe = local.checked_sub_signed(Duration::days(1)).unwrap_or(local);
            let before = tz.offset_from_utc_datetime(&probe).fix();
            tracing::trace!(%local, offset = %before, "wall time falls in a gap");
            let utc = local
                .checked_sub_signed(Duration::seconds(i64::from(before.local_minus_utc())))
                .unwrap_or(local);
            tz.from_utc_datetime(&utc)
        }
    }
}

/// First instant of `date` in `tz`.
#[inline]
pub(crate) fn midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    localize(tz, date.and_time(NaiveTime::MIN))
}

/// Last instant before `next` starts, where `next` is the first day of the
/// following unit and `last` the final day of the current one.
///
/// When `next` is beyond chrono's range the wall time `23:59:59.999999999`
/// of `last` is used instead.
pub(crate) fn finish_before<Tz: TimeZone>(
    tz: &Tz,
    next: Option<NaiveDate>,
    last: NaiveDate,
) -> DateTime<Tz> {
    match next {
        Some(next) => midnight(tz, next) - tick(),
        None => localize(tz, last.and_time(last_nanosecond())),
    }
}
