// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Meteorological-style seasons on fixed calendar dates.
//!
//! Every year is split into five entries, in this order:
//!
//! | Season | From | To (inclusive) |
//! |--------|------|----------------|
//! | winter | Jan 1  | Mar 20 |
//! | spring | Mar 21 | Jun 20 |
//! | summer | Jun 21 | Sep 22 |
//! | fall   | Sep 23 | Dec 20 |
//! | winter | Dec 21 | Dec 31 |
//!
//! Bounds are full days ([`day_start`](crate::day_start) /
//! [`day_finish`](crate::day_finish)) in the zone of the timestamp used to
//! build the table.  Lookups treat each season as an *open* interval: an
//! instant exactly equal to a season's first or last instant matches
//! nothing.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tempora::{SeasonCache, SeasonName};
//!
//! let mut cache = SeasonCache::new();
//! let t = Utc.with_ymd_and_hms(2024, 7, 4, 0, 0, 0).unwrap();
//! let season = cache.get_season(&t).expect("inside summer");
//! assert_eq!(season.name, SeasonName::Summer);
//! ```

use crate::instant::{finish_before, midnight};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed `(month, day)` of the first and last day of each table entry.
const SEASON_DATES: [(SeasonName, (u32, u32), (u32, u32)); 5] = [
    (SeasonName::Winter, (1, 1), (3, 20)),
    (SeasonName::Spring, (3, 21), (6, 20)),
    (SeasonName::Summer, (6, 21), (9, 22)),
    (SeasonName::Fall, (9, 23), (12, 20)),
    (SeasonName::Winter, (12, 21), (12, 31)),
];

/// Name of a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeasonName {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl SeasonName {
    /// Lowercase label: `"winter"`, `"spring"`, `"summer"` or `"fall"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
        }
    }
}

impl fmt::Display for SeasonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One season of a given year.
#[derive(Debug, Clone, PartialEq)]
pub struct Season<Tz: TimeZone> {
    pub name: SeasonName,
    /// First instant of the season's first day.
    pub start: DateTime<Tz>,
    /// Last instant of the season's last day.
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> Season<Tz> {
    /// `true` when `t` lies strictly between `start` and `end`.
    pub fn contains(&self, t: &DateTime<Tz>) -> bool {
        *t > self.start && *t < self.end
    }
}

/// The five seasons of one year, in calendar order.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSeasons<Tz: TimeZone> {
    year: i32,
    seasons: Vec<Season<Tz>>,
}

impl<Tz: TimeZone> YearSeasons<Tz> {
    /// Calendar year the table was built for.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The table entries: winter, spring, summer, fall, winter.
    #[inline]
    pub fn seasons(&self) -> &[Season<Tz>] {
        &self.seasons
    }

    /// Season whose open interval contains `t`.
    ///
    /// Returns `None` for the exact first or last instant of a season and for
    /// timestamps outside this table's year.
    pub fn get_season(&self, t: &DateTime<Tz>) -> Option<&Season<Tz>> {
        self.seasons.iter().find(|season| season.contains(t))
    }
}

/// Builds the season table for the year of `t`, in the zone of `t`.
pub fn list_seasons<Tz: TimeZone>(t: &DateTime<Tz>) -> YearSeasons<Tz> {
    let year = t.year();
    let tz = t.timezone();
    let seasons = SEASON_DATES
        .iter()
        .map(|&(name, (from_month, from_day), (to_month, to_day))| {
            let first = calendar_day(year, from_month, from_day);
            let last = calendar_day(year, to_month, to_day);
            Season {
                name,
                start: midnight(&tz, first),
                end: finish_before(&tz, last.succ_opt(), last),
            }
        })
        .collect();
    YearSeasons { year, seasons }
}

// Fixed season dates exist in every year; only the range edges can fail.
fn calendar_day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(if year < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

/// Caller-owned, lazily populated map from year to [`YearSeasons`].
///
/// Each year's table is computed on the first lookup for that year and never
/// recomputed.  Tables are keyed by year only, so a cache should serve
/// timestamps of a single zone.  For concurrent use see
/// [`SharedSeasonCache`].
#[derive(Debug, Clone)]
pub struct SeasonCache<Tz: TimeZone> {
    years: HashMap<i32, YearSeasons<Tz>>,
}

impl<Tz: TimeZone> Default for SeasonCache<Tz> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> SeasonCache<Tz> {
    pub fn new() -> Self {
        Self {
            years: HashMap::new(),
        }
    }

    /// Table for the year of `t`, computing and storing it on a miss.
    pub fn table(&mut self, t: &DateTime<Tz>) -> &YearSeasons<Tz> {
        self.years.entry(t.year()).or_insert_with(|| {
            tracing::debug!(year = t.year(), "computing season table");
            list_seasons(t)
        })
    }

    /// Season containing `t`, or `None` on an exact season boundary.
    pub fn get_season(&mut self, t: &DateTime<Tz>) -> Option<Season<Tz>> {
        self.table(t).get_season(t).cloned()
    }

    /// Number of years computed so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    #[inline]
    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }
}

/// Thread-safe [`SeasonCache`].
///
/// The check-and-populate step runs under a single lock, so each year's table
/// is computed exactly once even with concurrent first lookups.  Tables are
/// handed out as `Arc`s; lookups on them happen outside the lock.
#[derive(Debug)]
pub struct SharedSeasonCache<Tz: TimeZone> {
    years: Mutex<HashMap<i32, Arc<YearSeasons<Tz>>>>,
}

impl<Tz: TimeZone> Default for SharedSeasonCache<Tz> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> SharedSeasonCache<Tz> {
    pub fn new() -> Self {
        Self {
            years: Mutex::new(HashMap::new()),
        }
    }

    /// Table for the year of `t`, computing and storing it on a miss.
    pub fn table(&self, t: &DateTime<Tz>) -> Arc<YearSeasons<Tz>> {
        // A poisoned map still only holds complete tables.
        let mut years = self.years.lock().unwrap_or_else(PoisonError::into_inner);
        let table = years.entry(t.year()).or_insert_with(|| {
            tracing::debug!(year = t.year(), "computing season table");
            Arc::new(list_seasons(t))
        });
        Arc::clone(table)
    }

    /// Season containing `t`, or `None` on an exact season boundary.
    pub fn get_season(&self, t: &DateTime<Tz>) -> Option<Season<Tz>> {
        self.table(t).get_season(t).cloned()
    }

    /// Number of years computed so far.
    pub fn len(&self) -> usize {
        self.years
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
