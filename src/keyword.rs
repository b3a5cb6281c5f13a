// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Symbolic map keys.
//!
//! A [`Keyword`] is the host-facing name of a field or unit (`:year`,
//! `:millis`, ...).  The leading colon is optional everywhere: `":year"` and
//! `"year"` name the same key.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A symbolic key.  Cheap to clone; compares and hashes by name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Keyword(Arc<str>);

impl Keyword {
    /// Create a keyword, dropping a leading `:` if present.
    pub fn new(name: &str) -> Self {
        Self(Arc::from(normalize(name)))
    }

    /// The bare name, without the leading colon.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Strip the optional leading colon of a key.
#[inline]
pub(crate) fn normalize(key: &str) -> &str {
    key.strip_prefix(':').unwrap_or(key)
}

impl Borrow<str> for Keyword {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Keyword {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Keyword {
    #[inline]
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Keyword {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Keyword {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Keyword {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}
