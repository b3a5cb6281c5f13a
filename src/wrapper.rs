// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The base value wrapper.
//!
//! [`Wrapped<T>`] is a thin identity-preserving box around one native value.
//! Equality, hashing, ordering and display are those of the wrapped value, and
//! any wrapper on the other side of a comparison is unwrapped first, so
//!
//! ```
//! use chrono::NaiveDate;
//! use tempomap::{FieldView, Keymap, Wrapped};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let wrapped = Wrapped::new(date);
//! let view = FieldView::new(Keymap::iso(), date);
//!
//! assert!(wrapped == date);
//! assert!(date == wrapped);
//! assert!(wrapped == view);
//! ```

use crate::capability::{native_operand, Derefable, Operand};
use crate::error::{Result, WrapError};
use crate::format::DateTimeFormat;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use std::time::Duration;

/// Implements value semantics for a wrapper that already implements
/// [`Operand`]: equality and ordering against any operand with the same
/// native type, plus `Eq`, `Ord`, `Hash` and `Display` delegating to it.
macro_rules! value_semantics {
    ($wrapper:ident) => {
        impl<T, O> PartialEq<O> for $wrapper<T>
        where
            T: PartialEq,
            O: $crate::capability::Operand<Native = T>,
        {
            #[inline]
            fn eq(&self, other: &O) -> bool {
                $crate::capability::Operand::operand(self)
                    == $crate::capability::Operand::operand(other)
            }
        }

        impl<T: Eq> Eq for $wrapper<T> {}

        impl<T, O> PartialOrd<O> for $wrapper<T>
        where
            T: PartialOrd,
            O: $crate::capability::Operand<Native = T>,
        {
            #[inline]
            fn partial_cmp(&self, other: &O) -> Option<std::cmp::Ordering> {
                PartialOrd::partial_cmp(
                    $crate::capability::Operand::operand(self),
                    $crate::capability::Operand::operand(other),
                )
            }
        }

        impl<T: Ord> Ord for $wrapper<T> {
            #[inline]
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                Ord::cmp(
                    $crate::capability::Operand::operand(self),
                    $crate::capability::Operand::operand(other),
                )
            }
        }

        impl<T: std::hash::Hash> std::hash::Hash for $wrapper<T> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash($crate::capability::Operand::operand(self), state)
            }
        }

        impl<T: std::fmt::Display> std::fmt::Display for $wrapper<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt($crate::capability::Operand::operand(self), f)
            }
        }
    };
}

pub(crate) use value_semantics;

/// A single non-absent native value.
#[derive(Debug, Clone, Copy)]
pub struct Wrapped<T> {
    value: T,
}

impl<T> Wrapped<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Wrap a value that may be absent.
    ///
    /// Fails with [`WrapError::Construction`] when `value` is `None`.
    pub fn try_new(value: Option<T>) -> Result<Self> {
        value.map(Self::new).ok_or(WrapError::Construction)
    }
}

impl<T> Derefable for Wrapped<T> {
    type Target = T;

    #[inline]
    fn dereference(&self) -> &T {
        &self.value
    }

    #[inline]
    fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Operand for Wrapped<T> {
    type Native = T;

    #[inline]
    fn operand(&self) -> &T {
        &self.value
    }
}

impl<T> AsRef<T> for Wrapped<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> From<T> for Wrapped<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

value_semantics!(Wrapped);

// ── Native operands ───────────────────────────────────────────────────────

native_operand!(NaiveDate => [Wrapped, FieldView, PointView]);
native_operand!(NaiveTime => [Wrapped, FieldView, PointView]);
native_operand!(NaiveDateTime => [Wrapped, FieldView, PointView]);
native_operand!(DateTime<Utc> => [Wrapped, FieldView, PointView]);
native_operand!(DateTime<FixedOffset> => [Wrapped, FieldView, PointView]);
native_operand!(TimeDelta => [Wrapped, AmountView]);
native_operand!(Duration => [Wrapped, AmountView]);
native_operand!(DateTimeFormat => [Wrapped, Callable]; unordered);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_absent_value_is_rejected() {
        assert_eq!(
            Wrapped::<NaiveDate>::try_new(None).unwrap_err(),
            WrapError::Construction
        );
        let wrapped = Wrapped::try_new(Some(date(2024, 1, 1))).unwrap();
        assert_eq!(*wrapped.dereference(), date(2024, 1, 1));
    }

    #[test]
    fn test_dereference_returns_value_unchanged() {
        let delta = TimeDelta::minutes(90);
        let wrapped = Wrapped::new(delta);
        assert_eq!(wrapped.dereference(), &delta);
        assert_eq!(wrapped.into_inner(), delta);
    }

    #[test]
    fn test_equality_unwraps_either_side() {
        let a = Wrapped::new(date(2024, 3, 15));
        let b = Wrapped::new(date(2024, 3, 15));
        let raw = date(2024, 3, 15);

        assert!(a == raw);
        assert!(raw == a);
        assert!(a == b);
        assert!(a != date(2024, 3, 16));
        assert!(date(2024, 3, 16) != a);
    }

    #[test]
    fn test_hash_matches_native() {
        let raw = date(2024, 3, 15);
        assert_eq!(hash_of(&Wrapped::new(raw)), hash_of(&raw));
    }

    #[test]
    fn test_ordering_unwraps_either_side() {
        let early = Wrapped::new(TimeDelta::seconds(1));
        let late = TimeDelta::seconds(2);

        assert!(early < late);
        assert!(late > early);
        assert_eq!(early.cmp(&Wrapped::new(late)), Ordering::Less);
        assert_eq!(
            early.partial_cmp(&TimeDelta::seconds(1)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_display_delegates() {
        let wrapped = Wrapped::new(date(2024, 3, 15));
        assert_eq!(wrapped.to_string(), "2024-03-15");
    }
}
