// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.

/// Error returned when building a [`CalendarDate`](crate::CalendarDate) from
/// raw fields that do not name a real Gregorian date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The month number is outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The month number that was provided.
        month: u32,
    },

    /// The day does not exist in the given month, or the year is outside
    /// chrono's representable range.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDay {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u32,
        /// Day of the rejected date.
        day: u32,
    },
}
