// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Yearly quarters.
//!
//! | Quarter | Months |
//! |---------|--------|
//! | [`Quarter::First`]  | Jan – Mar |
//! | [`Quarter::Second`] | Apr – Jun |
//! | [`Quarter::Third`]  | Jul – Sep |
//! | [`Quarter::Fourth`] | Oct – Dec |

use crate::bounds::{first_of_month, months_finish};
use crate::instant::midnight;
use chrono::{DateTime, Datelike, TimeZone};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric code returned by [`quarter`] when the month matches no quarter.
pub const UNKNOWN_QUARTER: u8 = 0;

/// A quarter of the calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quarter {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
}

impl Quarter {
    /// Quarter containing the 1-based `month`, or `None` outside `1..=12`.
    pub const fn from_month(month: u32) -> Option<Self> {
        match month {
            1..=3 => Some(Self::First),
            4..=6 => Some(Self::Second),
            7..=9 => Some(Self::Third),
            10..=12 => Some(Self::Fourth),
            _ => None,
        }
    }

    /// Quarter number in `1..=4`.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// 1-based number of the quarter's first month.
    #[inline]
    pub const fn first_month(self) -> u32 {
        (self as u32 - 1) * 3 + 1
    }

    /// The quarter after this one, wrapping from the fourth to the first.
    pub const fn next(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::Third,
            Self::Third => Self::Fourth,
            Self::Fourth => Self::First,
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

/// Quarter number (`1..=4`) of the month of `t`.
///
/// Returns [`UNKNOWN_QUARTER`] if the month falls outside every quarter,
/// which a valid chrono timestamp never produces.
pub fn quarter<T: Datelike>(t: &T) -> u8 {
    Quarter::from_month(t.month()).map_or(UNKNOWN_QUARTER, Quarter::number)
}

/// Local midnight of the first day of the quarter containing `t`.
pub fn quarter_start<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    midnight(&t.timezone(), first_of_month(t.year(), quarter_of(t).first_month()))
}

/// Last instant of the quarter containing `t`.
pub fn quarter_finish<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let first = first_of_month(t.year(), quarter_of(t).first_month());
    months_finish(&t.timezone(), first, 3)
}

#[inline]
fn quarter_of<T: Datelike>(t: &T) -> Quarter {
    Quarter::from_month(t.month()).unwrap_or(Quarter::First)
}
