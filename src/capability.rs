// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Capability traits.
//!
//! Each wrapper implements exactly the subset that is meaningful for what it
//! wraps:
//!
//! | Wrapper | Derefable | Lookupable + Iterable | Updatable | Invokable |
//! |---------|:---------:|:---------------------:|:---------:|:---------:|
//! | [`Wrapped`](crate::Wrapped) | ✓ | | | |
//! | [`Callable`](crate::Callable) | ✓ | | | ✓ |
//! | [`FieldView`](crate::FieldView) | ✓ | ✓ | | |
//! | [`AmountView`](crate::AmountView) | ✓ | ✓ | | |
//! | [`PointView`](crate::PointView) | ✓ | ✓ | ✓ | |
//!
//! [`Operand`] is the shared "unwrap if wrapped" step used by equality,
//! hashing, ordering and invocation.

use crate::error::{Result, WrapError};
use crate::view::Entries;

/// Anything that stands for a native value: the value itself, or a wrapper
/// around it.
pub trait Operand {
    type Native;

    /// The native value, unwrapped.
    fn operand(&self) -> &Self::Native;
}

/// Access to the single wrapped value.
pub trait Derefable {
    type Target;

    /// The wrapped value, unchanged.
    fn dereference(&self) -> &Self::Target;

    /// Consume the wrapper and return the wrapped value.
    fn into_inner(self) -> Self::Target;
}

/// Keyword lookup.  Missing keys are not an error.
pub trait Lookupable {
    type Value: Clone;

    /// Value stored under `key`, if the key resolves and is supported.
    fn lookup(&self, key: &str) -> Option<&Self::Value>;

    /// Value stored under `key`, or `default`.
    fn lookup_or(&self, key: &str, default: Self::Value) -> Self::Value {
        self.lookup(key).cloned().unwrap_or(default)
    }

    fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}

/// Enumeration of the supported `(key, value)` pairs.
pub trait Iterable: Lookupable {
    /// All supported entries, in unspecified order.
    fn entries(&self) -> Entries<'_, Self::Value>;

    /// Number of supported keys.
    fn count(&self) -> usize;
}

/// Copy-on-write field replacement.
///
/// Every call returns a brand-new wrapper; the receiver is never modified.
pub trait Updatable: Lookupable + Clone {
    /// A new wrapper with `key` set to `value`.
    fn update(&self, key: &str, value: Self::Value) -> Result<Self>;

    /// [`update`](Self::update) taking a `(key, value)` tuple.
    fn update_pair<K: AsRef<str>>(&self, pair: (K, Self::Value)) -> Result<Self> {
        let (key, value) = pair;
        self.update(key.as_ref(), value)
    }

    /// Apply `pairs` left to right, each step working on the previous result.
    ///
    /// An empty sequence yields a clone of `self`.
    fn update_many<K, I>(&self, pairs: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Self::Value)>,
    {
        let mut current: Option<Self> = None;
        for (key, value) in pairs {
            let base = current.as_ref().unwrap_or(self);
            current = Some(base.update(key.as_ref(), value)?);
        }
        Ok(current.unwrap_or_else(|| self.clone()))
    }
}

/// Single-argument invocation.
pub trait Invokable<A: ?Sized> {
    type Output;

    fn invoke(&self, argument: &A) -> Result<Self::Output>;
}

/// The structural half of a host map protocol.
///
/// None of these make sense for a temporal value, so every method fails with
/// [`WrapError::UnsupportedOperation`] naming the wrapped type.  An updatable
/// point overrides [`assoc`](Self::assoc).
pub trait Structural: Derefable + Lookupable + Sized {
    fn assoc(&self, key: &str, value: Self::Value) -> Result<Self> {
        let _ = (key, value);
        Err(WrapError::unsupported_operation::<Self::Target>("assoc"))
    }

    /// Insert-if-absent.  Every supported key is always present, so this
    /// fails even when [`assoc`](Self::assoc) would succeed.
    fn assoc_new(&self, key: &str, value: Self::Value) -> Result<Self> {
        self.assoc(key, value)?;
        Err(WrapError::unsupported_operation::<Self::Target>("assoc_new"))
    }

    fn without(&self, key: &str) -> Result<Self> {
        let _ = key;
        Err(WrapError::unsupported_operation::<Self::Target>("without"))
    }

    fn empty(&self) -> Result<Self> {
        Err(WrapError::unsupported_operation::<Self::Target>("empty"))
    }
}

/// Implements [`Operand`] for a native type, plus native-on-the-left
/// equality (and ordering, unless `unordered`) against the given wrappers.
macro_rules! native_operand {
    ($native:ty => [$($wrapper:ident),* $(,)?]; unordered) => {
        impl $crate::capability::Operand for $native {
            type Native = $native;

            #[inline]
            fn operand(&self) -> &Self::Native {
                self
            }
        }

        $(
            impl PartialEq<$crate::$wrapper<$native>> for $native {
                #[inline]
                fn eq(&self, other: &$crate::$wrapper<$native>) -> bool {
                    self == $crate::capability::Operand::operand(other)
                }
            }
        )*
    };
    ($native:ty => [$($wrapper:ident),* $(,)?]) => {
        $crate::capability::native_operand!($native => [$($wrapper),*]; unordered);

        $(
            impl PartialOrd<$crate::$wrapper<$native>> for $native {
                #[inline]
                fn partial_cmp(
                    &self,
                    other: &$crate::$wrapper<$native>,
                ) -> Option<std::cmp::Ordering> {
                    self.partial_cmp($crate::capability::Operand::operand(other))
                }
            }
        )*
    };
}

pub(crate) use native_operand;
