// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Read-only keyword view over an amount of time.
//!
//! The view has two layers:
//!
//! 1. **Generic units**: every keymap entry whose [`Unit`] the amount
//!    natively reports, with that unit's value.
//! 2. **Fixed overlay**: six keys that are always present whatever the
//!    keymap holds, overriding a generic entry of the same name:
//!
//! | Key | Value |
//! |-----|-------|
//! | `:hours` | whole hours of the floored seconds |
//! | `:minutes` | whole minutes of the floored seconds |
//! | `:seconds` | floored whole seconds |
//! | `:millis` | `seconds·10³ + ⌊nanos / 10⁶⌋` |
//! | `:micros` | `seconds·10⁶ + ⌊nanos / 10³⌋` |
//! | `:nanos` | `seconds·10⁹ + nanos` |
//!
//! All values are [`BigInt`], so the totals are exact for any duration.

use crate::amount::TemporalAmount;
use crate::capability::{Derefable, Iterable, Lookupable, Operand, Structural};
use crate::descriptor::Unit;
use crate::error::{short_type_name, Result, WrapError};
use crate::keymap::Keymap;
use crate::keyword::{normalize, Keyword};
use crate::view::{Entries, LazyView, Snapshot};
use crate::wrapper::value_semantics;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use qtty::{Day, Days, Seconds};

const NANOS_PER_MILLI: u32 = 1_000_000;
const NANOS_PER_MICRO: u32 = 1_000;

/// An amount of time seen as a map from keyword to unit value.
///
/// ```
/// use chrono::TimeDelta;
/// use num_bigint::BigInt;
/// use tempomap::{AmountView, Keymap, Lookupable};
///
/// let view = AmountView::new(Keymap::standard(), TimeDelta::minutes(90));
/// assert_eq!(view.lookup(":hours"), Some(&BigInt::from(1)));
/// assert_eq!(view.lookup(":millis"), Some(&BigInt::from(5_400_000)));
/// ```
#[derive(Debug, Clone)]
pub struct AmountView<A> {
    value: A,
    keymap: Keymap<Unit>,
    view: LazyView<BigInt>,
}

impl<A: TemporalAmount> AmountView<A> {
    pub fn new(keymap: Keymap<Unit>, value: A) -> Self {
        Self {
            value,
            keymap,
            view: LazyView::new(),
        }
    }

    /// Wrap a value that may be absent.
    pub fn try_new(keymap: Keymap<Unit>, value: Option<A>) -> Result<Self> {
        value
            .map(|value| Self::new(keymap, value))
            .ok_or(WrapError::Construction)
    }

    #[inline]
    pub fn keymap(&self) -> &Keymap<Unit> {
        &self.keymap
    }

    #[inline]
    pub fn is_materialized(&self) -> bool {
        self.view.is_materialized()
    }

    /// The amount as an approximate floating-point quantity of seconds.
    pub fn as_seconds(&self) -> Seconds {
        let (seconds, nanos) = self.value.seconds_and_nanos();
        let whole = seconds.to_f64().unwrap_or(f64::NAN);
        Seconds::new(whole + f64::from(nanos) / 1e9)
    }

    /// The amount as an approximate floating-point quantity of days.
    pub fn as_days(&self) -> Days {
        self.as_seconds().to::<Day>()
    }

    fn snapshot(&self) -> &Snapshot<BigInt> {
        self.view
            .get_or_materialize(|| materialize_units(&self.keymap, &self.value))
    }
}

/// Generic unit entries, then the fixed overlay.
pub(crate) fn materialize_units<A: TemporalAmount>(
    keymap: &Keymap<Unit>,
    value: &A,
) -> Snapshot<BigInt> {
    let units = value.units();
    let mut snapshot: Snapshot<BigInt> = keymap
        .iter()
        .filter(|(_, unit)| units.contains(*unit))
        .filter_map(|(key, unit)| value.get_unit(*unit).map(|v| (key.clone(), v)))
        .collect();

    let (seconds, nanos) = value.seconds_and_nanos();
    let millis = &seconds * 1_000u32 + nanos / NANOS_PER_MILLI;
    let micros = &seconds * 1_000_000u32 + nanos / NANOS_PER_MICRO;
    let total_nanos = &seconds * 1_000_000_000u32 + nanos;

    snapshot.extend([
        (Keyword::new(Unit::Hours.name()), value.total_hours()),
        (Keyword::new(Unit::Minutes.name()), value.total_minutes()),
        (Keyword::new(Unit::Seconds.name()), seconds),
        (Keyword::new(Unit::Millis.name()), millis),
        (Keyword::new(Unit::Micros.name()), micros),
        (Keyword::new(Unit::Nanos.name()), total_nanos),
    ]);
    tracing::trace!(
        type_name = %short_type_name::<A>(),
        keys = snapshot.len(),
        "materialized amount view"
    );
    snapshot
}

impl<A> Derefable for AmountView<A> {
    type Target = A;

    #[inline]
    fn dereference(&self) -> &A {
        &self.value
    }

    #[inline]
    fn into_inner(self) -> A {
        self.value
    }
}

impl<A> Operand for AmountView<A> {
    type Native = A;

    #[inline]
    fn operand(&self) -> &A {
        &self.value
    }
}

value_semantics!(AmountView);

impl<A: TemporalAmount> Lookupable for AmountView<A> {
    type Value = BigInt;

    fn lookup(&self, key: &str) -> Option<&BigInt> {
        self.snapshot().get(normalize(key))
    }
}

impl<A: TemporalAmount> Iterable for AmountView<A> {
    fn entries(&self) -> Entries<'_, BigInt> {
        Entries::new(self.snapshot())
    }

    fn count(&self) -> usize {
        self.snapshot().len()
    }
}

impl<A: TemporalAmount> Structural for AmountView<A> {}

impl<'a, A: TemporalAmount> IntoIterator for &'a AmountView<A> {
    type Item = <Entries<'a, BigInt> as Iterator>::Item;
    type IntoIter = Entries<'a, BigInt>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use std::time::Duration;

    fn big(value: i128) -> BigInt {
        BigInt::from(value)
    }

    #[test]
    fn test_ninety_minutes() {
        let view = AmountView::new(Keymap::standard(), TimeDelta::minutes(90));
        assert_eq!(view.lookup(":hours"), Some(&big(1)));
        assert_eq!(view.lookup(":minutes"), Some(&big(90)));
        assert_eq!(view.lookup(":seconds"), Some(&big(5_400)));
        assert_eq!(view.lookup(":millis"), Some(&big(5_400_000)));
        assert_eq!(view.lookup(":micros"), Some(&big(5_400_000_000)));
        assert_eq!(view.lookup(":nanos"), Some(&big(5_400_000_000_000)));
    }

    #[test]
    fn test_overlay_present_with_empty_keymap() {
        let view = AmountView::new(Keymap::default(), TimeDelta::seconds(1));
        assert_eq!(view.count(), 6);
        assert!(view.contains_key(":millis"));
        assert!(!view.contains_key(":days"));
    }

    #[test]
    fn test_generic_units_follow_keymap() {
        let keymap = Keymap::from_pairs([
            ("nano-of-second", Unit::Nanos),
            ("whole-seconds", Unit::Seconds),
            ("days", Unit::Days),
        ]);
        let view = AmountView::new(keymap, TimeDelta::milliseconds(2_250));
        assert_eq!(view.lookup(":nano-of-second"), Some(&big(250_000_000)));
        assert_eq!(view.lookup(":whole-seconds"), Some(&big(2)));
        // Days is not a native unit of a duration.
        assert_eq!(view.lookup(":days"), None);
        assert_eq!(view.count(), 8);
    }

    #[test]
    fn test_overlay_overrides_generic_nanos() {
        let view = AmountView::new(Keymap::standard(), TimeDelta::milliseconds(1_500));
        assert_eq!(view.lookup(":nanos"), Some(&big(1_500_000_000)));
        assert_eq!(view.lookup(":nano-of-second"), Some(&big(500_000_000)));
    }

    #[test]
    fn test_exact_beyond_fixed_width() {
        let seconds = i64::MAX / 1_000;
        let view = AmountView::new(Keymap::standard(), TimeDelta::seconds(seconds));
        let expected = i128::from(seconds) * 1_000_000_000;
        assert!(expected > i128::from(i64::MAX));
        assert_eq!(view.lookup(":nanos"), Some(&big(expected)));

        let huge = AmountView::new(Keymap::standard(), Duration::new(u64::MAX, 999_999_999));
        let nanos = BigInt::from(u64::MAX) * 1_000_000_000u32 + 999_999_999u32;
        assert_eq!(huge.lookup(":nanos"), Some(&nanos));
        assert_eq!(
            huge.lookup(":millis"),
            Some(&(BigInt::from(u64::MAX) * 1_000u32 + 999u32))
        );
    }

    #[test]
    fn test_negative_fraction_floors() {
        let view = AmountView::new(Keymap::standard(), TimeDelta::milliseconds(-1_500));
        assert_eq!(view.lookup(":seconds"), Some(&big(-2)));
        assert_eq!(view.lookup(":millis"), Some(&big(-1_500)));
        assert_eq!(view.lookup(":nanos"), Some(&big(-1_500_000_000)));
    }

    #[test]
    fn test_quantities() {
        let view = AmountView::new(Keymap::standard(), TimeDelta::hours(36));
        assert!((view.as_seconds() - Seconds::new(129_600.0)).abs() < Seconds::new(1e-9));
        assert!((view.as_days() - Days::new(1.5)).abs() < Days::new(1e-12));
    }

    #[test]
    fn test_structural_operations_fail() {
        let view = AmountView::new(Keymap::standard(), TimeDelta::minutes(1));
        assert_eq!(
            view.assoc(":minutes", big(2)).unwrap_err().to_string(),
            "assoc not supported by TimeDelta"
        );
        assert_eq!(
            view.empty().unwrap_err().to_string(),
            "empty not supported by TimeDelta"
        );
    }

    #[test]
    fn test_equality_unwraps() {
        let view = AmountView::new(Keymap::standard(), TimeDelta::minutes(90));
        assert!(view == TimeDelta::minutes(90));
        assert!(TimeDelta::minutes(90) == view);
        assert!(view < TimeDelta::minutes(91));
    }
}
