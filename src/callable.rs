// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The callable formatter wrapper.

use crate::capability::{Derefable, Invokable, Operand};
use crate::error::{Result, WrapError};
use crate::format::{DateTimeFormat, Formattable};
use crate::wrapper::value_semantics;

/// A formatter exposed as a single-argument function.
///
/// `Callable` only dereferences and invokes; it has no lookup surface and,
/// since formatters have no natural order, no ordering either.
///
/// ```
/// use chrono::NaiveDate;
/// use tempomap::{FormatFn, DateTimeFormat, Invokable, Wrapped};
///
/// let iso = FormatFn::new(DateTimeFormat::iso_date());
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
///
/// assert_eq!(iso.invoke(&date).unwrap(), "2024-03-15");
/// assert_eq!(iso.invoke(&Wrapped::new(date)).unwrap(), "2024-03-15");
/// ```
#[derive(Debug, Clone)]
pub struct Callable<F> {
    formatter: F,
}

/// The callable wrapper around a [`DateTimeFormat`].
pub type FormatFn = Callable<DateTimeFormat>;

impl<F> Callable<F> {
    #[inline]
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    /// Wrap a formatter that may be absent.
    pub fn try_new(formatter: Option<F>) -> Result<Self> {
        formatter.map(Self::new).ok_or(WrapError::Construction)
    }
}

impl<F> Derefable for Callable<F> {
    type Target = F;

    #[inline]
    fn dereference(&self) -> &F {
        &self.formatter
    }

    #[inline]
    fn into_inner(self) -> F {
        self.formatter
    }
}

impl<F> Operand for Callable<F> {
    type Native = F;

    #[inline]
    fn operand(&self) -> &F {
        &self.formatter
    }
}

value_semantics!(Callable);

impl<A> Invokable<A> for Callable<DateTimeFormat>
where
    A: Operand + ?Sized,
    A::Native: Formattable,
{
    type Output = String;

    /// Format `argument`, unwrapping it first if it is itself a wrapper.
    fn invoke(&self, argument: &A) -> Result<String> {
        self.formatter.format(argument.operand())
    }
}
