// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Categorical classification of timestamps.
//!
//! Each classifier reads one local calendar field (hour or weekday) and maps
//! it onto a small closed enum.  They accept anything implementing chrono's
//! [`Timelike`] / [`Datelike`], so `NaiveDateTime` works as well as
//! `DateTime<Tz>`.

use chrono::{Datelike, Timelike, Weekday};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a timestamp likely falls in daylight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Lighting {
    Daylight,
    Dark,
}

/// Hour predicate used by [`lighting_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LightingRule {
    /// Daylight when `hour >= 7 || hour <= 19`.
    ///
    /// Every hour satisfies this predicate, so the result is always
    /// [`Lighting::Daylight`].  Kept as the default for compatibility with
    /// existing consumers of [`lighting`].
    #[default]
    Inclusive,
    /// Daylight for hours `7..=19`, dark otherwise.
    DaylightHours,
}

/// Broad part of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeOfDay {
    /// 06:00 – 11:59
    Morning,
    /// 12:00 – 17:59
    Afternoon,
    /// 18:00 – 23:59
    Evening,
    /// 00:00 – 05:59
    LateNight,
}

/// Weekday or weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeOfWeek {
    WeekDay,
    WeekEnd,
}

/// Lighting of `t` under the default [`LightingRule::Inclusive`] predicate.
pub fn lighting<T: Timelike>(t: &T) -> Lighting {
    lighting_with(t, LightingRule::default())
}

/// Lighting of `t` under an explicit rule.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempora::{lighting_with, Lighting, LightingRule};
///
/// let night = Utc.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap();
/// assert_eq!(lighting_with(&night, LightingRule::Inclusive), Lighting::Daylight);
/// assert_eq!(lighting_with(&night, LightingRule::DaylightHours), Lighting::Dark);
/// ```
pub fn lighting_with<T: Timelike>(t: &T, rule: LightingRule) -> Lighting {
    let h = t.hour();
    let daylight = match rule {
        LightingRule::Inclusive => h >= 7 || h <= 19,
        LightingRule::DaylightHours => (7..=19).contains(&h),
    };
    if daylight {
        Lighting::Daylight
    } else {
        Lighting::Dark
    }
}

/// Part of the day containing the local hour of `t`.
pub fn time_of_day<T: Timelike>(t: &T) -> TimeOfDay {
    match t.hour() {
        6..=11 => TimeOfDay::Morning,
        12..=17 => TimeOfDay::Afternoon,
        18..=23 => TimeOfDay::Evening,
        _ => TimeOfDay::LateNight,
    }
}

/// [`TimeOfWeek::WeekEnd`] on Saturdays and Sundays.
pub fn time_of_week<T: Datelike>(t: &T) -> TimeOfWeek {
    match t.weekday() {
        Weekday::Sat | Weekday::Sun => TimeOfWeek::WeekEnd,
        _ => TimeOfWeek::WeekDay,
    }
}
