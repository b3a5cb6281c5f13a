// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lazily materialized key → value snapshots.
//!
//! A view is computed at most once per wrapper, on the first read, and is
//! immutable from then on.  The cell is a synchronized lazy-init: concurrent
//! first readers block until one of them has published the complete
//! snapshot, so no reader ever observes a partially built map.

use crate::keyword::Keyword;
use once_cell::sync::OnceCell;
use std::collections::{hash_map, HashMap};
use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

/// The materialized key → value map backing a view.
pub(crate) type Snapshot<V> = HashMap<Keyword, V>;

/// A snapshot computed on first access and shared by clones afterwards.
pub(crate) struct LazyView<V> {
    cell: OnceCell<Arc<Snapshot<V>>>,
}

impl<V> LazyView<V> {
    pub(crate) fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// The snapshot, computing it with `materialize` if this is the first read.
    pub(crate) fn get_or_materialize<F>(&self, materialize: F) -> &Snapshot<V>
    where
        F: FnOnce() -> Snapshot<V>,
    {
        self.cell.get_or_init(|| Arc::new(materialize()))
    }

    #[inline]
    pub(crate) fn is_materialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<V> Clone for LazyView<V> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<V> fmt::Debug for LazyView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(snapshot) => write!(f, "LazyView({} keys)", snapshot.len()),
            None => f.write_str("LazyView(pending)"),
        }
    }
}

/// Iterator over the `(key, value)` entries of a view.
///
/// Order follows the snapshot's storage and is unspecified.
#[derive(Clone)]
pub struct Entries<'a, V> {
    inner: hash_map::Iter<'a, Keyword, V>,
}

impl<'a, V> Entries<'a, V> {
    pub(crate) fn new(snapshot: &'a Snapshot<V>) -> Self {
        Self {
            inner: snapshot.iter(),
        }
    }
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (&'a Keyword, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Entries<'_, V> {}

impl<V> FusedIterator for Entries<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for Entries<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.clone()).finish()
    }
}
