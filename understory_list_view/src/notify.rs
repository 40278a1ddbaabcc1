// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change detection, commit, and value-changed notification.

use alloc::boxed::Box;

use crate::{Candidate, ItemStore, SelectionState};

/// Callback invoked with the selected labels and whether a double-click occurred.
///
/// It runs synchronously during [`commit`], inside the frame that produced the change.
pub type OnValueChanged = Box<dyn FnMut(&[&str], bool)>;

/// Whether the host needs to redraw after a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawResult {
    /// Nothing changed.
    #[default]
    None,
    /// The selection changed or a double-click happened; redraw.
    Redraw,
}

impl DrawResult {
    /// Returns `true` for [`DrawResult::Redraw`].
    #[must_use]
    pub const fn needs_redraw(self) -> bool {
        matches!(self, Self::Redraw)
    }
}

/// Commits `candidate` into `state` if it differs, then notifies.
///
/// A change is any difference in the selected indices, or a double-click in the
/// candidate. On change, the indices are committed, `on_value_changed` (if any) is
/// invoked with the labels from `items`, and [`DrawResult::Redraw`] is returned.
///
/// The candidate anchor is always kept, even without a change: a shift-click that
/// only establishes an anchor leaves the indices alone but must be remembered.
///
/// # Panics
///
/// Panics if a callback is set and a committed index is out of range for `items`.
/// [`interpret`](crate::interpret) does not check click indices against the items,
/// so callers feeding it clicks directly must keep them below `items.len()`.
pub fn commit(
    state: &mut SelectionState,
    candidate: Candidate,
    items: &ItemStore,
    on_value_changed: Option<&mut OnValueChanged>,
) -> DrawResult {
    let Candidate {
        indices,
        anchor,
        double_click,
    } = candidate;

    state.set_anchor(anchor);

    if !double_click && indices == state.indices() {
        log::trace!("list selection unchanged: {indices:?}");
        return DrawResult::None;
    }

    state.replace_with(indices);
    log::debug!(
        "list selection committed: {:?} (double_click: {double_click})",
        state.indices()
    );

    if let Some(callback) = on_value_changed {
        let labels = state.labels(items);
        callback(labels.as_slice(), double_click);
    }

    DrawResult::Redraw
}
