// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Field and unit descriptors.
//!
//! Descriptors are the closed vocabulary a [`Keymap`](crate::Keymap) resolves
//! symbolic keys into.  A [`Field`] names one measurable component of a point
//! in time; a [`Unit`] names one measurement unit of an amount.
//!
//! | Field | Range | Carried by |
//! |-------|-------|------------|
//! | [`Field::Year`] | proleptic Gregorian year | dates, date-times |
//! | [`Field::MonthOfYear`] | 1–12 | dates, date-times |
//! | [`Field::DayOfMonth`] | 1–31 | dates, date-times |
//! | [`Field::DayOfYear`] | 1–366 | dates, date-times |
//! | [`Field::DayOfWeek`] | 1 (Monday)–7 | dates, date-times |
//! | [`Field::EpochDay`] | days since 1970-01-01 | dates, date-times |
//! | [`Field::HourOfDay`] | 0–23 | times, date-times |
//! | [`Field::MinuteOfHour`] | 0–59 | times, date-times |
//! | [`Field::SecondOfMinute`] | 0–59 | times, date-times |
//! | [`Field::SecondOfDay`] | 0–86 399 | times, date-times |
//! | [`Field::MilliOfSecond`] | 0–999 | times, date-times |
//! | [`Field::MicroOfSecond`] | 0–999 999 | times, date-times |
//! | [`Field::NanoOfSecond`] | 0–999 999 999 | times, date-times |
//! | [`Field::InstantSeconds`] | Unix seconds | offset date-times |
//! | [`Field::OffsetSeconds`] | UTC offset in seconds | offset date-times |

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A measurable field of a point in time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Field {
    Year,
    MonthOfYear,
    DayOfMonth,
    DayOfYear,
    DayOfWeek,
    EpochDay,
    HourOfDay,
    MinuteOfHour,
    SecondOfMinute,
    SecondOfDay,
    MilliOfSecond,
    MicroOfSecond,
    NanoOfSecond,
    InstantSeconds,
    OffsetSeconds,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Field; 15] = [
        Field::Year,
        Field::MonthOfYear,
        Field::DayOfMonth,
        Field::DayOfYear,
        Field::DayOfWeek,
        Field::EpochDay,
        Field::HourOfDay,
        Field::MinuteOfHour,
        Field::SecondOfMinute,
        Field::SecondOfDay,
        Field::MilliOfSecond,
        Field::MicroOfSecond,
        Field::NanoOfSecond,
        Field::InstantSeconds,
        Field::OffsetSeconds,
    ];

    /// `true` for fields that only exist on a calendar date.
    #[inline]
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Field::Year
                | Field::MonthOfYear
                | Field::DayOfMonth
                | Field::DayOfYear
                | Field::DayOfWeek
                | Field::EpochDay
        )
    }

    /// `true` for fields that only exist on a time of day.
    #[inline]
    pub const fn is_time_based(self) -> bool {
        matches!(
            self,
            Field::HourOfDay
                | Field::MinuteOfHour
                | Field::SecondOfMinute
                | Field::SecondOfDay
                | Field::MilliOfSecond
                | Field::MicroOfSecond
                | Field::NanoOfSecond
        )
    }

    /// Stable kebab-case name, as used by the default keymap.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::MonthOfYear => "month-of-year",
            Field::DayOfMonth => "day-of-month",
            Field::DayOfYear => "day-of-year",
            Field::DayOfWeek => "day-of-week",
            Field::EpochDay => "epoch-day",
            Field::HourOfDay => "hour-of-day",
            Field::MinuteOfHour => "minute-of-hour",
            Field::SecondOfMinute => "second-of-minute",
            Field::SecondOfDay => "second-of-day",
            Field::MilliOfSecond => "milli-of-second",
            Field::MicroOfSecond => "micro-of-second",
            Field::NanoOfSecond => "nano-of-second",
            Field::InstantSeconds => "instant-seconds",
            Field::OffsetSeconds => "offset-seconds",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A measurement unit of an amount of time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Unit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl Unit {
    /// Every unit, finest first.
    pub const ALL: [Unit; 7] = [
        Unit::Nanos,
        Unit::Micros,
        Unit::Millis,
        Unit::Seconds,
        Unit::Minutes,
        Unit::Hours,
        Unit::Days,
    ];

    /// Stable lowercase name, as used by the default keymap.
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Nanos => "nanos",
            Unit::Micros => "micros",
            Unit::Millis => "millis",
            Unit::Seconds => "seconds",
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
            Unit::Days => "days",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_and_time_fields_are_disjoint() {
        for field in Field::ALL {
            assert!(!(field.is_date_based() && field.is_time_based()), "{field}");
        }
        assert!(!Field::InstantSeconds.is_date_based());
        assert!(!Field::OffsetSeconds.is_time_based());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Field::ALL.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Field::ALL.len());
    }
}
