// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Keyword views over chrono values
//!
//! This crate adapts chrono dates, times, durations and formatters into
//! generic, keyword-keyed, map-like and callable values, so host code can
//! treat a date as an associative value and a formatter as a function without
//! knowing chrono's accessor methods.
//!
//! # Wrappers
//!
//! - [`Wrapped<T>`]: identity wrapper providing equality, hashing, ordering and
//!   display of the wrapped value.
//! - [`Callable<F>`] / [`FormatFn`]: a formatter invoked with one argument.
//! - [`FieldView<T>`]: read-only keyword view of a point in time.
//! - [`PointView<T>`]: [`FieldView`] plus copy-on-write field updates.
//! - [`AmountView<A>`]: read-only keyword view of a duration, with exact
//!   millisecond, microsecond and nanosecond totals.
//!
//! # Keymaps
//!
//! A [`Keymap<D>`] maps keywords (`:year`, `:millis`, ...) to descriptors
//! ([`Field`] or [`Unit`]).  It is built once and shared by every wrapper
//! constructed with it; [`Keymap::<Field>::iso()`](Keymap::iso) and
//! [`Keymap::<Unit>::standard()`](Keymap::standard) are the default tables.
//!
//! # Quick example
//!
//! ```
//! use chrono::NaiveDate;
//! use tempomap::{Keymap, Lookupable, PointView, Updatable};
//!
//! let date = PointView::new(Keymap::iso(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
//! assert_eq!(date.lookup_or(":hour", -1), -1);
//!
//! let later = date.update(":year", 2030).unwrap();
//! assert_eq!(later.lookup(":year"), Some(&2030));
//! assert_eq!(date.lookup(":year"), Some(&2024));
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialisation of [`Keyword`], [`Field`], [`Unit`] and
//!   [`Keymap`], so keymaps can be loaded from configuration.

mod accessor;
mod amount;
mod amount_view;
mod callable;
pub(crate) mod capability;
mod descriptor;
mod error;
mod field_view;
mod format;
mod keymap;
mod keyword;
mod point;
pub(crate) mod view;
pub(crate) mod wrapper;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use accessor::{FieldAccess, FieldAdjust};
pub use amount::TemporalAmount;
pub use amount_view::AmountView;
pub use callable::{Callable, FormatFn};
pub use capability::{
    Derefable, Invokable, Iterable, Lookupable, Operand, Structural, Updatable,
};
pub use descriptor::{Field, Unit};
pub use error::{Result, WrapError};
pub use field_view::FieldView;
pub use format::{DateTimeFormat, Formattable};
pub use keymap::Keymap;
pub use keyword::Keyword;
pub use point::PointView;
pub use view::Entries;
pub use wrapper::Wrapped;
