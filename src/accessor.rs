// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Field access on chrono points in time.
//!
//! chrono exposes each component through its own method (`year()`,
//! `hour()`, ...).  [`FieldAccess`] and [`FieldAdjust`] fold those into a
//! single descriptor-driven surface so the views can treat every point type
//! alike.
//!
//! | Type | Date fields | Time fields | Instant/offset |
//! |------|:-----------:|:-----------:|:--------------:|
//! | `NaiveDate` | ✓ | | |
//! | `NaiveTime` | | ✓ | |
//! | `NaiveDateTime` | ✓ | ✓ | |
//! | `DateTime<Utc>` | ✓ | ✓ | ✓ |
//! | `DateTime<FixedOffset>` | ✓ | ✓ | ✓ |
//!
//! Replacing the year or month clamps the day of month to the last valid
//! day (`2024-01-31` with month 2 gives `2024-02-29`).

use crate::descriptor::Field;
use chrono::{
    DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeDelta, TimeZone, Timelike, Utc,
};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Read access to the fields of a point in time.
pub trait FieldAccess {
    /// Whether this value carries `field` at all.
    fn supports(&self, field: Field) -> bool;

    /// Current value of `field`, or `None` when unsupported.
    fn get_field(&self, field: Field) -> Option<i64>;
}

/// Copy-on-write replacement of a single field.
pub trait FieldAdjust: FieldAccess + Sized {
    /// A new value with `field` set to `value`.
    ///
    /// Returns `None` when the field is unsupported or `value` is outside
    /// the field's valid range for this value.
    fn with_field(&self, field: Field, value: i64) -> Option<Self>;
}

// ═══════════════════════════════════════════════════════════════════════════
// Component helpers
// ═══════════════════════════════════════════════════════════════════════════

/// 1970-01-01, the origin of [`Field::EpochDay`].
#[inline]
fn epoch_date() -> NaiveDate {
    NaiveDate::default()
}

fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    next.pred_opt().map(|d| d.day())
}

fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let day = day.min(last_day_of_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

fn date_field(date: &NaiveDate, field: Field) -> Option<i64> {
    let value = match field {
        Field::Year => date.year().into(),
        Field::MonthOfYear => date.month().into(),
        Field::DayOfMonth => date.day().into(),
        Field::DayOfYear => date.ordinal().into(),
        Field::DayOfWeek => date.weekday().number_from_monday().into(),
        Field::EpochDay => date.signed_duration_since(epoch_date()).num_days(),
        _ => return None,
    };
    Some(value)
}

fn date_with(date: &NaiveDate, field: Field, value: i64) -> Option<NaiveDate> {
    match field {
        Field::Year => clamped_date(i32::try_from(value).ok()?, date.month(), date.day()),
        Field::MonthOfYear => clamped_date(date.year(), u32::try_from(value).ok()?, date.day()),
        Field::DayOfMonth => date.with_day(u32::try_from(value).ok()?),
        Field::DayOfYear => date.with_ordinal(u32::try_from(value).ok()?),
        Field::DayOfWeek => {
            if !(1..=7).contains(&value) {
                return None;
            }
            let current = i64::from(date.weekday().number_from_monday());
            date.checked_add_signed(TimeDelta::try_days(value - current)?)
        }
        Field::EpochDay => epoch_date().checked_add_signed(TimeDelta::try_days(value)?),
        _ => None,
    }
}

fn time_field(time: &NaiveTime, field: Field) -> Option<i64> {
    // Leap seconds are folded back into the regular nano-of-second range.
    let nanos = time.nanosecond() % NANOS_PER_SECOND;
    let value = match field {
        Field::HourOfDay => time.hour().into(),
        Field::MinuteOfHour => time.minute().into(),
        Field::SecondOfMinute => time.second().into(),
        Field::SecondOfDay => time.num_seconds_from_midnight().into(),
        Field::MilliOfSecond => (nanos / 1_000_000).into(),
        Field::MicroOfSecond => (nanos / 1_000).into(),
        Field::NanoOfSecond => nanos.into(),
        _ => return None,
    };
    Some(value)
}

fn time_with(time: &NaiveTime, field: Field, value: i64) -> Option<NaiveTime> {
    let value = u32::try_from(value).ok()?;
    match field {
        Field::HourOfDay => time.with_hour(value),
        Field::MinuteOfHour => time.with_minute(value),
        Field::SecondOfMinute => time.with_second(value),
        Field::SecondOfDay => {
            NaiveTime::from_num_seconds_from_midnight_opt(value, time.nanosecond())
        }
        Field::MilliOfSecond if value < 1_000 => time.with_nanosecond(value * 1_000_000),
        Field::MicroOfSecond if value < 1_000_000 => time.with_nanosecond(value * 1_000),
        Field::NanoOfSecond if value < NANOS_PER_SECOND => time.with_nanosecond(value),
        _ => None,
    }
}

fn naive_field(datetime: &NaiveDateTime, field: Field) -> Option<i64> {
    date_field(&datetime.date(), field).or_else(|| time_field(&datetime.time(), field))
}

fn naive_with(datetime: &NaiveDateTime, field: Field, value: i64) -> Option<NaiveDateTime> {
    if field.is_date_based() {
        date_with(&datetime.date(), field, value).map(|d| d.and_time(datetime.time()))
    } else if field.is_time_based() {
        time_with(&datetime.time(), field, value).map(|t| datetime.date().and_time(t))
    } else {
        None
    }
}

fn zoned_field<Tz: TimeZone>(datetime: &DateTime<Tz>, field: Field) -> Option<i64> {
    match field {
        Field::InstantSeconds => Some(datetime.timestamp()),
        Field::OffsetSeconds => Some(datetime.offset().fix().local_minus_utc().into()),
        _ => naive_field(&datetime.naive_local(), field),
    }
}

/// Replace a field of the local date-time, keeping the zone.
fn zoned_with_local<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    field: Field,
    value: i64,
) -> Option<DateTime<Tz>> {
    let local = naive_with(&datetime.naive_local(), field, value)?;
    datetime.timezone().from_local_datetime(&local).single()
}

/// Move to another instant, keeping the zone and the sub-second part.
fn zoned_with_instant<Tz: TimeZone>(datetime: &DateTime<Tz>, seconds: i64) -> Option<DateTime<Tz>> {
    let utc = DateTime::<Utc>::from_timestamp(seconds, datetime.timestamp_subsec_nanos())?;
    Some(utc.with_timezone(&datetime.timezone()))
}

// ═══════════════════════════════════════════════════════════════════════════
// Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl FieldAccess for NaiveDate {
    #[inline]
    fn supports(&self, field: Field) -> bool {
        field.is_date_based()
    }

    fn get_field(&self, field: Field) -> Option<i64> {
        date_field(self, field)
    }
}

impl FieldAdjust for NaiveDate {
    fn with_field(&self, field: Field, value: i64) -> Option<Self> {
        date_with(self, field, value)
    }
}

impl FieldAccess for NaiveTime {
    #[inline]
    fn supports(&self, field: Field) -> bool {
        field.is_time_based()
    }

    fn get_field(&self, field: Field) -> Option<i64> {
        time_field(self, field)
    }
}

impl FieldAdjust for NaiveTime {
    fn with_field(&self, field: Field, value: i64) -> Option<Self> {
        time_with(self, field, value)
    }
}

impl FieldAccess for NaiveDateTime {
    #[inline]
    fn supports(&self, field: Field) -> bool {
        field.is_date_based() || field.is_time_based()
    }

    fn get_field(&self, field: Field) -> Option<i64> {
        naive_field(self, field)
    }
}

impl FieldAdjust for NaiveDateTime {
    fn with_field(&self, field: Field, value: i64) -> Option<Self> {
        naive_with(self, field, value)
    }
}

impl FieldAccess for DateTime<Utc> {
    #[inline]
    fn supports(&self, _field: Field) -> bool {
        true
    }

    fn get_field(&self, field: Field) -> Option<i64> {
        zoned_field(self, field)
    }
}

impl FieldAdjust for DateTime<Utc> {
    fn with_field(&self, field: Field, value: i64) -> Option<Self> {
        match field {
            Field::InstantSeconds => zoned_with_instant(self, value),
            // UTC has exactly one offset.
            Field::OffsetSeconds => (value == 0).then_some(*self),
            _ => zoned_with_local(self, field, value),
        }
    }
}

impl FieldAccess for DateTime<FixedOffset> {
    #[inline]
    fn supports(&self, _field: Field) -> bool {
        true
    }

    fn get_field(&self, field: Field) -> Option<i64> {
        zoned_field(self, field)
    }
}

impl FieldAdjust for DateTime<FixedOffset> {
    fn with_field(&self, field: Field, value: i64) -> Option<Self> {
        match field {
            Field::InstantSeconds => zoned_with_instant(self, value),
            Field::OffsetSeconds => {
                let offset = FixedOffset::east_opt(i32::try_from(value).ok()?)?;
                self.naive_local().and_local_timezone(offset).single()
            }
            _ => zoned_with_local(self, field, value),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32, s: u32, nano: u32) -> NaiveTime {
        NaiveTime::from_hms_nano_opt(h, m, s, nano).unwrap()
    }

    #[test]
    fn test_date_fields() {
        let d = date(2024, 3, 15);
        assert_eq!(d.get_field(Field::Year), Some(2024));
        assert_eq!(d.get_field(Field::MonthOfYear), Some(3));
        assert_eq!(d.get_field(Field::DayOfMonth), Some(15));
        assert_eq!(d.get_field(Field::DayOfYear), Some(75));
        assert_eq!(d.get_field(Field::DayOfWeek), Some(5)); // Friday
        assert_eq!(d.get_field(Field::HourOfDay), None);
        assert!(!d.supports(Field::HourOfDay));
    }

    #[test]
    fn test_epoch_day_roundtrip() {
        assert_eq!(date(1970, 1, 1).get_field(Field::EpochDay), Some(0));
        assert_eq!(date(1969, 12, 31).get_field(Field::EpochDay), Some(-1));
        assert_eq!(date(2000, 1, 1).get_field(Field::EpochDay), Some(10_957));
        assert_eq!(
            date(1999, 5, 5).with_field(Field::EpochDay, 10_957),
            Some(date(2000, 1, 1))
        );
    }

    #[test]
    fn test_month_replacement_clamps_day() {
        let d = date(2024, 1, 31);
        assert_eq!(d.with_field(Field::MonthOfYear, 2), Some(date(2024, 2, 29)));
        assert_eq!(
            date(2024, 2, 29).with_field(Field::Year, 2023),
            Some(date(2023, 2, 28))
        );
        assert_eq!(d.with_field(Field::MonthOfYear, 13), None);
        assert_eq!(d.with_field(Field::MonthOfYear, -1), None);
    }

    #[test]
    fn test_day_of_week_moves_within_week() {
        let friday = date(2024, 3, 15);
        assert_eq!(friday.with_field(Field::DayOfWeek, 1), Some(date(2024, 3, 11)));
        assert_eq!(friday.with_field(Field::DayOfWeek, 7), Some(date(2024, 3, 17)));
        assert_eq!(friday.with_field(Field::DayOfWeek, 8), None);
    }

    #[test]
    fn test_time_fields() {
        let t = time(13, 45, 30, 123_456_789);
        assert_eq!(t.get_field(Field::HourOfDay), Some(13));
        assert_eq!(t.get_field(Field::MinuteOfHour), Some(45));
        assert_eq!(t.get_field(Field::SecondOfMinute), Some(30));
        assert_eq!(t.get_field(Field::SecondOfDay), Some(49_530));
        assert_eq!(t.get_field(Field::MilliOfSecond), Some(123));
        assert_eq!(t.get_field(Field::MicroOfSecond), Some(123_456));
        assert_eq!(t.get_field(Field::NanoOfSecond), Some(123_456_789));
        assert_eq!(t.get_field(Field::Year), None);
    }

    #[test]
    fn test_time_replacement() {
        let t = time(13, 45, 30, 123_456_789);
        assert_eq!(t.with_field(Field::HourOfDay, 0), Some(time(0, 45, 30, 123_456_789)));
        assert_eq!(t.with_field(Field::MilliOfSecond, 7), Some(time(13, 45, 30, 7_000_000)));
        assert_eq!(t.with_field(Field::SecondOfDay, 60), Some(time(0, 1, 0, 123_456_789)));
        assert_eq!(t.with_field(Field::HourOfDay, 24), None);
        assert_eq!(t.with_field(Field::NanoOfSecond, 1_000_000_000), None);
        assert_eq!(t.with_field(Field::MonthOfYear, 1), None);
    }

    #[test]
    fn test_naive_date_time_combines_both() {
        let dt = date(2024, 3, 15).and_time(time(8, 0, 0, 0));
        assert_eq!(dt.get_field(Field::Year), Some(2024));
        assert_eq!(dt.get_field(Field::HourOfDay), Some(8));
        assert!(!dt.supports(Field::InstantSeconds));
        assert_eq!(
            dt.with_field(Field::DayOfMonth, 1),
            Some(date(2024, 3, 1).and_time(time(8, 0, 0, 0)))
        );
        assert_eq!(dt.with_field(Field::OffsetSeconds, 0), None);
    }

    #[test]
    fn test_zoned_instant_and_offset() {
        let offset = FixedOffset::east_opt(3_600).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(dt.get_field(Field::HourOfDay), Some(12));
        assert_eq!(dt.get_field(Field::OffsetSeconds), Some(3_600));
        assert_eq!(dt.get_field(Field::InstantSeconds), Some(dt.timestamp()));

        let shifted = dt.with_field(Field::OffsetSeconds, 7_200).unwrap();
        assert_eq!(shifted.get_field(Field::HourOfDay), Some(12));
        assert_eq!(shifted.timestamp(), dt.timestamp() - 3_600);

        let moved = dt.with_field(Field::InstantSeconds, 0).unwrap();
        assert_eq!(moved.get_field(Field::HourOfDay), Some(1));
        assert_eq!(moved.offset(), &offset);
    }

    #[test]
    fn test_utc_offset_is_fixed() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(dt.get_field(Field::OffsetSeconds), Some(0));
        assert_eq!(dt.with_field(Field::OffsetSeconds, 0), Some(dt));
        assert_eq!(dt.with_field(Field::OffsetSeconds, 3_600), None);
        assert_eq!(
            dt.with_field(Field::Year, 2030),
            Some(Utc.with_ymd_and_hms(2030, 3, 15, 12, 0, 0).unwrap())
        );
    }
}
