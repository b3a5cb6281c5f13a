// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Formatter values.
//!
//! A [`DateTimeFormat`] is a validated strftime pattern.  It is the native
//! value behind the callable wrapper [`Callable`](crate::Callable): invoking
//! the wrapper with a point in time renders it through the pattern.

use crate::error::{Result, WrapError};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::fmt::{self, Write};
use std::sync::Arc;

/// A point in time that can be rendered through a [`DateTimeFormat`].
pub trait Formattable {
    /// Append the rendering of `self` to `out`.
    ///
    /// Fails when the pattern asks for a component this value lacks (an
    /// hour on a plain date, an offset on a naive date-time, ...).
    fn write_formatted(&self, items: StrftimeItems<'_>, out: &mut String) -> fmt::Result;
}

impl Formattable for NaiveDate {
    fn write_formatted(&self, items: StrftimeItems<'_>, out: &mut String) -> fmt::Result {
        write!(out, "{}", self.format_with_items(items))
    }
}

impl Formattable for NaiveTime {
    fn write_formatted(&self, items: StrftimeItems<'_>, out: &mut String) -> fmt::Result {
        write!(out, "{}", self.format_with_items(items))
    }
}

impl Formattable for NaiveDateTime {
    fn write_formatted(&self, items: StrftimeItems<'_>, out: &mut String) -> fmt::Result {
        write!(out, "{}", self.format_with_items(items))
    }
}

impl<Tz: TimeZone> Formattable for DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn write_formatted(&self, items: StrftimeItems<'_>, out: &mut String) -> fmt::Result {
        write!(out, "{}", self.format_with_items(items))
    }
}

/// A validated strftime-style pattern.
///
/// Equality, hashing and display use the pattern text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTimeFormat {
    pattern: Arc<str>,
}

impl DateTimeFormat {
    /// Validate `pattern` and build a formatter from it.
    ///
    /// ```
    /// use tempomap::DateTimeFormat;
    ///
    /// assert!(DateTimeFormat::parse("%Y-%m-%d").is_ok());
    /// assert!(DateTimeFormat::parse("%Y-%Q").is_err());
    /// ```
    pub fn parse(pattern: &str) -> Result<Self> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(WrapError::InvalidPattern {
                pattern: pattern.to_owned(),
            });
        }
        Ok(Self {
            pattern: Arc::from(pattern),
        })
    }

    /// `2024-03-15`
    pub fn iso_date() -> Self {
        Self::trusted("%Y-%m-%d")
    }

    /// `13:45:30.123`
    pub fn iso_time() -> Self {
        Self::trusted("%H:%M:%S%.f")
    }

    /// `2024-03-15T13:45:30.123`
    pub fn iso_date_time() -> Self {
        Self::trusted("%Y-%m-%dT%H:%M:%S%.f")
    }

    /// `2024-03-15T13:45:30.123+01:00`
    pub fn rfc3339() -> Self {
        Self::trusted("%Y-%m-%dT%H:%M:%S%.f%:z")
    }

    fn trusted(pattern: &'static str) -> Self {
        Self {
            pattern: Arc::from(pattern),
        }
    }

    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render `value` through this pattern.
    ///
    /// Fails with [`WrapError::ArgumentType`] naming `F` when the value does
    /// not carry every component the pattern needs.
    pub fn format<F: Formattable>(&self, value: &F) -> Result<String> {
        let mut out = String::new();
        value
            .write_formatted(StrftimeItems::new(&self.pattern), &mut out)
            .map_err(|_| WrapError::argument_type::<F>())?;
        Ok(out)
    }
}

impl fmt::Display for DateTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
