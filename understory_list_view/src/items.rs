// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered item labels.

use alloc::string::String;
use alloc::vec::Vec;

/// The ordered labels shown by a list view.
///
/// Items are identified only by their position `0..len`. Replacing the labels
/// invalidates every index handed out before, which is why [`ListView::set_items`]
/// also clears the selection.
///
/// [`ListView::set_items`]: crate::ListView::set_items
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemStore {
    labels: Vec<String>,
}

impl ItemStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Creates a store holding `labels` in order.
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Replaces all labels.
    pub fn set_items<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.clear();
        self.labels.extend(labels.into_iter().map(Into::into));
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the label at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. An out-of-range index here is a caller
    /// bug; use [`ItemStore::get`] when the index is not known to be valid.
    #[must_use]
    #[track_caller]
    pub fn label(&self, index: usize) -> &str {
        match self.labels.get(index) {
            Some(label) => label,
            None => panic!(
                "item index {index} out of bounds for a list of {} items",
                self.labels.len()
            ),
        }
    }

    /// Returns the label at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Clamps `index` into `0..len`.
    ///
    /// Returns `None` for an empty store, since there is no valid index to clamp to.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> Option<usize> {
        self.labels.len().checked_sub(1).map(|last| index.min(last))
    }

    /// Returns an iterator over the labels in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
