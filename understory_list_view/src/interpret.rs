// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click interpretation: map a row click plus modifiers onto a candidate selection.
//!
//! ## Policy
//!
//! Clicks are ignored entirely while the mode is [disabled](SelectionMode::is_disabled).
//! Otherwise the first matching branch applies:
//!
//! 1. **Ctrl** with [`SelectionMode::MULTI_SELECT`]: the row's toggled state decides.
//!    A row that is now selected is inserted, a row that is now deselected is
//!    removed. The anchor does not move.
//! 2. **Shift** with [`SelectionMode::MULTI_SELECT`]: the candidate is cleared. With
//!    an anchor, the inclusive range between anchor and row is selected. Without
//!    one, nothing is selected and the row becomes the anchor.
//! 3. **Plain** (no modifiers, or multi-select not allowed): the candidate is cleared.
//!    If the row is now selected, or a double-click was seen this frame, exactly that
//!    row is selected and becomes the anchor. Re-clicking the only selected row
//!    therefore deselects it.
//!
//! A double-click is recorded on the candidate regardless of the branch taken, so it
//! is reported even when the selection ends up unchanged.

use alloc::vec::Vec;

use crate::{SelectionMode, SelectionState};

/// Modifier keys held during a click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Ctrl (or the platform's toggle-selection key) is held.
    pub ctrl: bool,
    /// Shift is held.
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
    };
    /// Ctrl only.
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
    };
    /// Shift only.
    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
    };
}

/// A click reported by the backend for one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowClick {
    /// Index of the clicked row.
    pub index: usize,
    /// The row's toggled state after the click.
    ///
    /// Immediate-mode selectables flip their selected flag when clicked, so this is
    /// normally the negation of whether the row was selected before.
    pub selected: bool,
    /// The click resolved to a double-click.
    pub double_click: bool,
}

impl RowClick {
    /// Builds a click that toggles a row which was `was_selected` before.
    #[must_use]
    pub const fn toggling(index: usize, was_selected: bool, double_click: bool) -> Self {
        Self {
            index,
            selected: !was_selected,
            double_click,
        }
    }
}

/// A tentative selection computed during a frame, before it is committed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Candidate {
    pub(crate) indices: Vec<usize>,
    pub(crate) anchor: Option<usize>,
    pub(crate) double_click: bool,
}

impl Candidate {
    /// Starts a candidate from the committed `state`.
    #[must_use]
    pub fn from_state(state: &SelectionState) -> Self {
        Self {
            indices: state.indices().to_vec(),
            anchor: state.anchor(),
            double_click: false,
        }
    }

    /// Candidate indices, ascending and unique.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Candidate anchor.
    #[must_use]
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Returns `true` if any click folded into this candidate was a double-click.
    #[must_use]
    pub fn is_double_click(&self) -> bool {
        self.double_click
    }
}

/// Folds `click` into `candidate` according to `mode` and `modifiers`.
///
/// Several clicks in the same frame are folded into the same candidate in row order.
///
/// `click.index` is not checked against the item count; an out-of-range index
/// makes a later [`commit`](crate::commit) panic.
pub fn interpret(
    candidate: &mut Candidate,
    mode: SelectionMode,
    click: RowClick,
    modifiers: Modifiers,
) {
    if mode.is_disabled() {
        return;
    }

    if click.double_click {
        candidate.double_click = true;
    }

    let index = click.index;
    if modifiers.ctrl && mode.allows_multi() {
        match (click.selected, candidate.indices.binary_search(&index)) {
            (true, Err(pos)) => candidate.indices.insert(pos, index),
            (false, Ok(pos)) => {
                candidate.indices.remove(pos);
            }
            _ => {}
        }
    } else if modifiers.shift && mode.allows_multi() {
        candidate.indices.clear();
        match candidate.anchor {
            Some(anchor) => {
                let (start, end) = if anchor <= index {
                    (anchor, index)
                } else {
                    (index, anchor)
                };
                candidate.indices.extend(start..=end);
            }
            None => candidate.anchor = Some(index),
        }
    } else {
        candidate.indices.clear();
        if click.selected || candidate.double_click {
            candidate.indices.push(index);
            candidate.anchor = Some(index);
        }
    }
}
