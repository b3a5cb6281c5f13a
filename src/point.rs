// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Updatable keyword view over a point in time.
//!
//! [`PointView`] reads exactly like [`FieldView`] and adds copy-on-write
//! updates: `update(key, value)` derives a new native value with one field
//! replaced and wraps it in a new view.  The receiver, and its already
//! materialized snapshot, are never touched.
//!
//! ```
//! use chrono::NaiveDate;
//! use tempomap::{Keymap, Lookupable, PointView, Updatable};
//!
//! let date = PointView::new(Keymap::iso(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
//! let moved = date.update_many([(":year", 2031), (":month", 6)]).unwrap();
//!
//! assert_eq!(date.lookup(":year"), Some(&2024));
//! assert_eq!(moved.lookup(":year"), Some(&2031));
//! assert_eq!(moved.lookup(":month"), Some(&6));
//! ```

use crate::accessor::{FieldAccess, FieldAdjust};
use crate::capability::{Derefable, Iterable, Lookupable, Operand, Structural, Updatable};
use crate::descriptor::Field;
use crate::error::{short_type_name, Result, WrapError};
use crate::field_view::FieldView;
use crate::keymap::Keymap;
use crate::keyword::Keyword;
use crate::view::Entries;
use crate::wrapper::value_semantics;

/// A point in time that can derive copies of itself with one field replaced.
#[derive(Debug, Clone)]
pub struct PointView<T> {
    view: FieldView<T>,
}

impl<T: FieldAdjust> PointView<T> {
    pub fn new(keymap: Keymap<Field>, value: T) -> Self {
        Self {
            view: FieldView::new(keymap, value),
        }
    }

    /// Wrap a value that may be absent.
    pub fn try_new(keymap: Keymap<Field>, value: Option<T>) -> Result<Self> {
        FieldView::try_new(keymap, value).map(|view| Self { view })
    }

    #[inline]
    pub fn keymap(&self) -> &Keymap<Field> {
        self.view.keymap()
    }

    #[inline]
    pub fn is_materialized(&self) -> bool {
        self.view.is_materialized()
    }

    /// The read-only view of the same value.
    #[inline]
    pub fn as_field_view(&self) -> &FieldView<T> {
        &self.view
    }

    /// Resolve `key` to a field the current value supports.
    fn resolve(&self, key: &str) -> Result<(Keyword, Field)> {
        let keymap = self.view.keymap();
        match (keymap.keyword(key), keymap.resolve(key)) {
            (Some(keyword), Some(field)) if self.dereference().supports(field) => {
                Ok((keyword.clone(), field))
            }
            _ => {
                tracing::debug!(
                    key,
                    type_name = %short_type_name::<T>(),
                    "rejected update of unsupported field"
                );
                Err(WrapError::unsupported_key::<T>(Keyword::new(key)))
            }
        }
    }
}

impl<T> Derefable for PointView<T> {
    type Target = T;

    #[inline]
    fn dereference(&self) -> &T {
        self.view.dereference()
    }

    #[inline]
    fn into_inner(self) -> T {
        self.view.into_inner()
    }
}

impl<T> Operand for PointView<T> {
    type Native = T;

    #[inline]
    fn operand(&self) -> &T {
        self.view.operand()
    }
}

value_semantics!(PointView);

impl<T: FieldAdjust> Lookupable for PointView<T> {
    type Value = i64;

    #[inline]
    fn lookup(&self, key: &str) -> Option<&i64> {
        self.view.lookup(key)
    }
}

impl<T: FieldAdjust> Iterable for PointView<T> {
    #[inline]
    fn entries(&self) -> Entries<'_, i64> {
        self.view.entries()
    }

    #[inline]
    fn count(&self) -> usize {
        self.view.count()
    }
}

impl<T: FieldAdjust + Clone> Updatable for PointView<T> {
    fn update(&self, key: &str, value: i64) -> Result<Self> {
        let (keyword, field) = self.resolve(key)?;
        let next = self
            .dereference()
            .with_field(field, value)
            .ok_or_else(|| WrapError::out_of_range::<T>(keyword, value))?;
        Ok(Self::new(self.keymap().clone(), next))
    }
}

impl<T: FieldAdjust + Clone> Structural for PointView<T> {
    fn assoc(&self, key: &str, value: i64) -> Result<Self> {
        self.update(key, value)
    }
}

impl<'a, T: FieldAdjust> IntoIterator for &'a PointView<T> {
    type Item = <Entries<'a, i64> as Iterator>::Item;
    type IntoIter = Entries<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
