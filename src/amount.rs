// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Unit access on amounts of time.
//!
//! Both supported duration types decompose into a `(seconds, nanos)` pair
//! where `seconds` is floored and `nanos` is the non-negative remainder, so
//! `-1.5 s` is `(-2, 500_000_000)`.  Every value is returned as a [`BigInt`]
//! so that derived totals never overflow.

use crate::descriptor::Unit;
use chrono::TimeDelta;
use num_bigint::BigInt;
use std::time::Duration;

const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// The units both duration types report, in the order `units()` returns them.
const SECONDS_AND_NANOS: &[Unit] = &[Unit::Seconds, Unit::Nanos];

/// Read access to an amount of time.
pub trait TemporalAmount {
    /// The units this amount is natively expressed in.
    fn units(&self) -> &'static [Unit];

    /// Value of `unit`, or `None` when not one of [`units`](Self::units).
    fn get_unit(&self, unit: Unit) -> Option<BigInt>;

    /// Floored whole seconds and the non-negative nanosecond remainder.
    fn seconds_and_nanos(&self) -> (BigInt, u32);

    /// Floored seconds divided into whole hours, truncating toward zero.
    fn total_hours(&self) -> BigInt;

    /// Floored seconds divided into whole minutes, truncating toward zero.
    fn total_minutes(&self) -> BigInt;
}

/// Split a `TimeDelta` into floored seconds and a non-negative remainder.
///
/// chrono truncates towards zero and reports a negative `subsec_nanos` for
/// negative fractional deltas; this rebalances to the floored form.
fn floor_parts(delta: &TimeDelta) -> (i64, u32) {
    let seconds = delta.num_seconds();
    let nanos = delta.subsec_nanos();
    if nanos < 0 {
        (seconds - 1, (nanos + NANOS_PER_SECOND).unsigned_abs())
    } else {
        (seconds, nanos.unsigned_abs())
    }
}

impl TemporalAmount for TimeDelta {
    #[inline]
    fn units(&self) -> &'static [Unit] {
        SECONDS_AND_NANOS
    }

    fn get_unit(&self, unit: Unit) -> Option<BigInt> {
        let (seconds, nanos) = floor_parts(self);
        match unit {
            Unit::Seconds => Some(seconds.into()),
            Unit::Nanos => Some(nanos.into()),
            _ => None,
        }
    }

    fn seconds_and_nanos(&self) -> (BigInt, u32) {
        let (seconds, nanos) = floor_parts(self);
        (seconds.into(), nanos)
    }

    fn total_hours(&self) -> BigInt {
        (floor_parts(self).0 / 3_600).into()
    }

    fn total_minutes(&self) -> BigInt {
        (floor_parts(self).0 / 60).into()
    }
}

impl TemporalAmount for Duration {
    #[inline]
    fn units(&self) -> &'static [Unit] {
        SECONDS_AND_NANOS
    }

    fn get_unit(&self, unit: Unit) -> Option<BigInt> {
        match unit {
            Unit::Seconds => Some(self.as_secs().into()),
            Unit::Nanos => Some(self.subsec_nanos().into()),
            _ => None,
        }
    }

    fn seconds_and_nanos(&self) -> (BigInt, u32) {
        (self.as_secs().into(), self.subsec_nanos())
    }

    fn total_hours(&self) -> BigInt {
        (self.as_secs() / 3_600).into()
    }

    fn total_minutes(&self) -> BigInt {
        (self.as_secs() / 60).into()
    }
}
