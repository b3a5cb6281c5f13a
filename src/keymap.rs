// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Keyword → descriptor tables.
//!
//! A [`Keymap<D>`] is built once (from configuration, or from one of the
//! default tables below) and then shared read-only between any number of
//! wrappers.  Cloning only bumps a reference count; there is no way to mutate
//! a keymap after it has been built, so concurrent readers need no locking.
//!
//! # Default tables
//!
//! | Constructor | Descriptor | Keys |
//! |-------------|------------|------|
//! | [`Keymap::iso`] | [`Field`] | `year`, `month`, `day`, `hour`, ... |
//! | [`Keymap::standard`] | [`Unit`] | `nanos`, ..., `days`, `nano-of-second` |

use crate::descriptor::{Field, Unit};
use crate::keyword::{normalize, Keyword};
use once_cell::sync::Lazy;
use std::collections::hash_map;
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Immutable mapping from symbolic key to descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap<D> {
    entries: Arc<HashMap<Keyword, D>>,
}

impl<D> Keymap<D> {
    /// Build a keymap from `(key, descriptor)` pairs.  Later duplicates win.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Keyword>,
        I: IntoIterator<Item = (K, D)>,
    {
        pairs.into_iter().map(|(k, d)| (k.into(), d)).collect()
    }

    /// Descriptor registered under `key`, if any.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&D> {
        self.entries.get(normalize(key))
    }

    /// The interned keyword registered under `key`, if any.
    #[inline]
    pub fn keyword(&self, key: &str) -> Option<&Keyword> {
        self.entries.get_key_value(normalize(key)).map(|(k, _)| k)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(normalize(key))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, Keyword, D> {
        self.entries.iter()
    }

    /// `true` when both handles point at the same table.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<D: Copy> Keymap<D> {
    /// Resolve `key` to its descriptor.
    #[inline]
    pub fn resolve(&self, key: &str) -> Option<D> {
        self.get(key).copied()
    }
}

impl<D> Default for Keymap<D> {
    fn default() -> Self {
        Self {
            entries: Arc::new(HashMap::new()),
        }
    }
}

impl<D> FromIterator<(Keyword, D)> for Keymap<D> {
    fn from_iter<I: IntoIterator<Item = (Keyword, D)>>(iter: I) -> Self {
        Self {
            entries: Arc::new(iter.into_iter().collect()),
        }
    }
}

impl<'a, D> IntoIterator for &'a Keymap<D> {
    type Item = (&'a Keyword, &'a D);
    type IntoIter = hash_map::Iter<'a, Keyword, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Default tables
// ═══════════════════════════════════════════════════════════════════════════

static ISO_FIELDS: Lazy<Keymap<Field>> = Lazy::new(|| {
    Keymap::from_pairs([
        ("year", Field::Year),
        ("month", Field::MonthOfYear),
        ("day", Field::DayOfMonth),
        ("day-of-year", Field::DayOfYear),
        ("day-of-week", Field::DayOfWeek),
        ("epoch-day", Field::EpochDay),
        ("hour", Field::HourOfDay),
        ("minute", Field::MinuteOfHour),
        ("second", Field::SecondOfMinute),
        ("second-of-day", Field::SecondOfDay),
        ("milli", Field::MilliOfSecond),
        ("micro", Field::MicroOfSecond),
        ("nano", Field::NanoOfSecond),
        ("instant-seconds", Field::InstantSeconds),
        ("offset-seconds", Field::OffsetSeconds),
    ])
});

static STANDARD_UNITS: Lazy<Keymap<Unit>> = Lazy::new(|| {
    Keymap::from_pairs(
        Unit::ALL
            .iter()
            .map(|&unit| (unit.name(), unit))
            .chain([("nano-of-second", Unit::Nanos)]),
    )
});

impl Keymap<Field> {
    /// The default field table, shared process-wide.
    pub fn iso() -> Self {
        ISO_FIELDS.clone()
    }
}

impl Keymap<Unit> {
    /// The default unit table, shared process-wide.
    pub fn standard() -> Self {
        STANDARD_UNITS.clone()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Serialize> Serialize for Keymap<D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Deserialize<'de>> Deserialize<'de> for Keymap<D> {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let entries = HashMap::<Keyword, D>::deserialize(deserializer)?;
        Ok(Self {
            entries: Arc::new(entries),
        })
    }
}
