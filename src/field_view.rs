// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Read-only keyword view over a point in time.

use crate::accessor::FieldAccess;
use crate::capability::{Derefable, Iterable, Lookupable, Operand, Structural};
use crate::descriptor::Field;
use crate::error::{short_type_name, Result, WrapError};
use crate::keymap::Keymap;
use crate::keyword::normalize;
use crate::view::{Entries, LazyView, Snapshot};
use crate::wrapper::value_semantics;

/// A point in time seen as a map from keyword to field value.
///
/// A key is present iff the keymap resolves it to a [`Field`] that the
/// wrapped value supports.  The map is materialized on the first read and
/// reused afterwards.
///
/// ```
/// use chrono::NaiveDate;
/// use tempomap::{FieldView, Iterable, Keymap, Lookupable};
///
/// let keymap = Keymap::from_pairs([
///     ("year", tempomap::Field::Year),
///     ("month", tempomap::Field::MonthOfYear),
///     ("hour", tempomap::Field::HourOfDay),
/// ]);
/// let view = FieldView::new(keymap, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
///
/// assert_eq!(view.lookup(":year"), Some(&2024));
/// assert_eq!(view.lookup_or(":hour", -1), -1);
/// assert_eq!(view.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FieldView<T> {
    value: T,
    keymap: Keymap<Field>,
    view: LazyView<i64>,
}

impl<T: FieldAccess> FieldView<T> {
    pub fn new(keymap: Keymap<Field>, value: T) -> Self {
        Self {
            value,
            keymap,
            view: LazyView::new(),
        }
    }

    /// Wrap a value that may be absent.
    pub fn try_new(keymap: Keymap<Field>, value: Option<T>) -> Result<Self> {
        value
            .map(|value| Self::new(keymap, value))
            .ok_or(WrapError::Construction)
    }

    #[inline]
    pub fn keymap(&self) -> &Keymap<Field> {
        &self.keymap
    }

    /// Whether the snapshot has been computed yet.
    #[inline]
    pub fn is_materialized(&self) -> bool {
        self.view.is_materialized()
    }

    fn snapshot(&self) -> &Snapshot<i64> {
        self.view
            .get_or_materialize(|| materialize_fields(&self.keymap, &self.value))
    }
}

/// Every keymap entry whose field `value` supports, with its current value.
pub(crate) fn materialize_fields<T: FieldAccess>(
    keymap: &Keymap<Field>,
    value: &T,
) -> Snapshot<i64> {
    let snapshot: Snapshot<i64> = keymap
        .iter()
        .filter(|(_, field)| value.supports(**field))
        .filter_map(|(key, field)| value.get_field(*field).map(|v| (key.clone(), v)))
        .collect();
    tracing::trace!(
        type_name = %short_type_name::<T>(),
        keys = snapshot.len(),
        "materialized field view"
    );
    snapshot
}

impl<T> Derefable for FieldView<T> {
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

impl<T> Operand for FieldView<T> {
    type Native = T;

    #[inline]
    fn operand(&self) -> &T {
        &self.value
    }
}

value_semantics!(FieldView);

impl<T: FieldAccess> Lookupable for FieldView<T> {
    type Value = i64;

    fn lookup(&self, key: &str) -> Option<&i64> {
        self.snapshot().get(normalize(key))
    }
}

impl<T: FieldAccess> Iterable for FieldView<T> {
    fn entries(&self) -> Entries<'_, i64> {
        Entries::new(self.snapshot())
    }

    fn count(&self) -> usize {
        self.snapshot().len()
    }
}

impl<T: FieldAccess> Structural for FieldView<T> {}

impl<'a, T: FieldAccess> IntoIterator for &'a FieldView<T> {
    type Item = <Entries<'a, i64> as Iterator>::Item;
    type IntoIter = Entries<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
