// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every wrapper.
//!
//! Read paths never fail: an unknown or unsupported key yields `None` (or the
//! caller's default).  Everything in [`WrapError`] is raised by construction,
//! invocation, update, or a structural call the domain cannot honour.

use crate::keyword::Keyword;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WrapError>;

/// Failure raised by a wrapper operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrapError {
    /// The value handed to a constructor was absent.
    #[error("Wrapped object cannot be absent")]
    Construction,

    /// The key is unknown to the keymap, or the wrapped value does not carry
    /// the field it resolves to.
    #[error("Field {key} not supported for {type_name}")]
    UnsupportedKey { key: Keyword, type_name: String },

    /// An argument of the wrong runtime shape was passed.
    #[error("Could not format {type_name}")]
    ArgumentType { type_name: String },

    /// A structural map operation with no meaning for a temporal value.
    #[error("{operation} not supported by {type_name}")]
    UnsupportedOperation {
        operation: &'static str,
        type_name: String,
    },

    /// The field is supported but the requested value is outside its range.
    #[error("Value {value} out of range for field {key} of {type_name}")]
    OutOfRange {
        key: Keyword,
        value: i64,
        type_name: String,
    },

    /// A formatter pattern that chrono cannot parse.
    #[error("Invalid format pattern {pattern:?}")]
    InvalidPattern { pattern: String },
}

impl WrapError {
    pub(crate) fn unsupported_key<T: ?Sized>(key: Keyword) -> Self {
        WrapError::UnsupportedKey {
            key,
            type_name: short_type_name::<T>(),
        }
    }

    pub(crate) fn argument_type<T: ?Sized>() -> Self {
        WrapError::ArgumentType {
            type_name: short_type_name::<T>(),
        }
    }

    pub(crate) fn unsupported_operation<T: ?Sized>(operation: &'static str) -> Self {
        WrapError::UnsupportedOperation {
            operation,
            type_name: short_type_name::<T>(),
        }
    }

    pub(crate) fn out_of_range<T: ?Sized>(key: Keyword, value: i64) -> Self {
        WrapError::OutOfRange {
            key,
            value,
            type_name: short_type_name::<T>(),
        }
    }
}

/// `std::any::type_name` with every module path stripped, so
/// `chrono::datetime::DateTime<chrono::offset::utc::Utc>` becomes
/// `DateTime<Utc>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        match c {
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';' => {
                out.push_str(last_path_segment(&segment));
                segment.clear();
                out.push(c);
            }
            _ => segment.push(c),
        }
    }
    out.push_str(last_path_segment(&segment));
    out
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
