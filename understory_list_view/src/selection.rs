// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Committed selection state.

use alloc::vec::Vec;

use crate::ItemStore;

/// The committed selection of a list view.
///
/// `SelectionState` tracks:
/// - The selected item indices, kept unique and in ascending order.
/// - An optional **anchor** index, the reference point for the next shift-click range.
/// - A monotonically increasing **revision** counter.
///
/// It does not know how many items exist; [`ListView`](crate::ListView) clamps
/// indices against its [`ItemStore`] before they get here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    indices: Vec<usize>,
    anchor: Option<usize>,
    revision: u64,
}

impl SelectionState {
    /// Creates an empty selection with no anchor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
            anchor: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the number of selected indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns the selected indices in ascending order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns `true` if `index` is selected.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Returns the anchor used for shift-click ranges, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Returns the current revision counter.
    ///
    /// The revision is bumped only when the selected indices or the anchor change.
    /// No-op calls leave it unchanged, so observers can use it as a cheap
    /// "did anything change?" marker.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clears both the selected indices and the anchor.
    pub fn clear(&mut self) {
        if self.indices.is_empty() && self.anchor.is_none() {
            return;
        }

        self.indices.clear();
        self.anchor = None;
        self.bump_revision();
    }

    /// Replaces the selection with `index`, or with nothing for `None`.
    ///
    /// The anchor is left unchanged.
    pub fn select_only(&mut self, index: Option<usize>) {
        match index {
            Some(index) if self.indices != [index] => {
                self.indices.clear();
                self.indices.push(index);
                self.bump_revision();
            }
            None if !self.indices.is_empty() => {
                self.indices.clear();
                self.bump_revision();
            }
            _ => {}
        }
    }

    /// Adds `index`, keeping the indices ascending.
    ///
    /// Returns `true` if it was not already selected. The anchor is left unchanged.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.indices.binary_search(&index) {
            Ok(_) => false,
            Err(pos) => {
                self.indices.insert(pos, index);
                self.bump_revision();
                true
            }
        }
    }

    /// Removes `index` if selected, returning whether it was.
    ///
    /// The anchor is left unchanged.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.indices.binary_search(&index) {
            Ok(pos) => {
                self.indices.remove(pos);
                self.bump_revision();
                true
            }
            Err(_) => false,
        }
    }

    /// Replaces the selected indices with `indices`.
    ///
    /// The input is sorted and de-duplicated. The anchor is left unchanged.
    pub fn replace_with<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        let mut new_indices: Vec<usize> = indices.into_iter().collect();
        new_indices.sort_unstable();
        new_indices.dedup();

        if new_indices == self.indices {
            return;
        }

        self.indices = new_indices;
        self.bump_revision();
    }

    /// Sets or clears the anchor.
    pub fn set_anchor(&mut self, anchor: Option<usize>) {
        if self.anchor != anchor {
            self.anchor = anchor;
            self.bump_revision();
        }
    }

    /// Returns the labels of the selected items, in ascending index order.
    ///
    /// # Panics
    ///
    /// Panics if a selected index is out of range for `items`.
    #[must_use]
    #[track_caller]
    pub fn labels<'a>(&self, items: &'a ItemStore) -> Vec<&'a str> {
        self.indices.iter().map(|&index| items.label(index)).collect()
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
