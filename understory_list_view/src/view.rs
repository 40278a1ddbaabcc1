// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list view and its per-frame render loop.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Rect, Size};

use crate::{
    Candidate, DrawResult, ItemStore, Modifiers, OnValueChanged, PreferredSize, RowClick,
    SelectionMode, SelectionState, TextMeasure, commit, interpret, minimum_size, preferred_size,
    rows_in_height,
};

/// Handle identifying a list view to its backend.
///
/// Immediate-mode toolkits key per-widget state (scroll offset, active item) by an
/// id, so each list view needs a distinct one. Allocate them with [`ListViewIds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListViewId(u32);

impl ListViewId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ListViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "##listview_{}", self.0)
    }
}

/// Allocator for unique [`ListViewId`]s.
///
/// Owned by whichever collaborator creates list views; ids start at `1`.
#[derive(Clone, Debug, Default)]
pub struct ListViewIds {
    last: u32,
}

impl ListViewIds {
    /// Creates an allocator whose first id is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Returns a fresh id.
    pub fn allocate(&mut self) -> ListViewId {
        self.last = self.last.wrapping_add(1);
        ListViewId(self.last)
    }
}

/// How the backend should draw a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowState {
    /// The row is in the committed selection.
    ///
    /// Backends should draw the hover highlight with the selection color when
    /// this is set and not at all otherwise, so hovering never hides the selection.
    pub selected: bool,
    /// The row accepts clicks. `false` while the mode is disabled.
    pub enabled: bool,
}

/// What happened to a row this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowResponse {
    /// The row was clicked.
    pub clicked: bool,
    /// The row's toggled selected state after the click.
    pub selected: bool,
    /// The click resolved to a double-click.
    pub double_click: bool,
}

impl RowResponse {
    /// A row that was not interacted with.
    pub const IDLE: Self = Self {
        clicked: false,
        selected: false,
        double_click: false,
    };
}

/// The immediate-mode backend drawing rows for a [`ListView`].
pub trait RowBackend {
    /// Height of one row in logical pixels.
    fn row_height(&self) -> f64;

    /// Modifier keys held this frame.
    fn modifiers(&self) -> Modifiers;

    /// Opens the list box. Returns `false` if it is not visible, in which case no
    /// rows are drawn and [`RowBackend::end_list`] is not called.
    fn begin_list(&mut self, id: ListViewId, item_count: usize, visible_rows: usize) -> bool;

    /// Draws one selectable row and reports any click on it.
    fn row(&mut self, index: usize, label: &str, state: RowState) -> RowResponse;

    /// Closes the list box opened by [`RowBackend::begin_list`].
    fn end_list(&mut self);
}

/// A list of text items with click-driven selection.
///
/// See the [crate documentation](crate) for the selection policy.
pub struct ListView {
    id: ListViewId,
    items: ItemStore,
    mode: SelectionMode,
    selection: SelectionState,
    on_value_changed: Option<OnValueChanged>,
}

impl fmt::Debug for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("mode", &self.mode)
            .field("selection", &self.selection)
            .field("on_value_changed", &self.on_value_changed.is_some())
            .finish()
    }
}

impl ListView {
    /// Creates an empty, single-select list view.
    #[must_use]
    pub fn new(id: ListViewId) -> Self {
        Self {
            id,
            items: ItemStore::new(),
            mode: SelectionMode::default(),
            selection: SelectionState::new(),
            on_value_changed: None,
        }
    }

    /// Returns the backend handle of this list view.
    #[must_use]
    pub fn id(&self) -> ListViewId {
        self.id
    }

    /// Returns the items.
    #[must_use]
    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    /// Replaces the items and clears the selection and anchor.
    ///
    /// The selection is cleared even if the new labels equal the old ones.
    pub fn set_items<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.set_items(labels);
        self.selection.clear();
    }

    /// Returns the selection mode.
    #[must_use]
    pub fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    /// Sets the selection mode. The current selection is left alone.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    /// Sets the selection mode from raw bits; unknown bits are kept and inert.
    pub fn set_selection_mode_bits(&mut self, bits: u32) {
        self.mode = SelectionMode::from_raw(bits);
    }

    /// Returns the committed selection state.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Returns the selected indices in ascending order.
    #[must_use]
    pub fn selected_indices(&self) -> &[usize] {
        self.selection.indices()
    }

    /// Returns the labels of the selected items, in ascending index order.
    #[must_use]
    pub fn selected_labels(&self) -> Vec<&str> {
        self.selection.labels(&self.items)
    }

    /// Returns `true` if `index` is selected.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(index)
    }

    /// Returns the anchor used for shift-click ranges.
    #[must_use]
    pub fn anchor(&self) -> Option<usize> {
        self.selection.anchor()
    }

    /// Returns the selection revision; see [`SelectionState::revision`].
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.selection.revision()
    }

    /// Replaces the selection with a single index, or clears it for `None`.
    ///
    /// Indices past the end are clamped to the last item. With no items the
    /// selection is always cleared. The callback is not invoked.
    pub fn set_selected_index(&mut self, index: Option<usize>) {
        let index = index.and_then(|index| self.items.clamp_index(index));
        self.selection.select_only(index);
    }

    /// Adds an index to the selection, clamped to the last item.
    ///
    /// Adding an already-selected index is a no-op, as is adding to an empty list.
    /// The callback is not invoked.
    pub fn add_selected_index(&mut self, index: usize) {
        if let Some(index) = self.items.clamp_index(index) {
            self.selection.insert(index);
        }
    }

    /// Registers the callback invoked when a frame changes the selection or sees
    /// a double-click. Replaces any previous callback.
    ///
    /// The callback must not try to reach this list view; it runs while the
    /// frame is being processed.
    pub fn set_on_value_changed<F>(&mut self, callback: F)
    where
        F: FnMut(&[&str], bool) + 'static,
    {
        self.on_value_changed = Some(Box::new(callback));
    }

    /// Removes the value-changed callback.
    pub fn clear_on_value_changed(&mut self) {
        self.on_value_changed = None;
    }

    /// Preferred size for the current items; see [`preferred_size`].
    pub fn preferred_size<M>(
        &self,
        measure: &M,
        font_size: f64,
        available_width: f64,
    ) -> PreferredSize
    where
        M: TextMeasure + ?Sized,
    {
        preferred_size(self.items.iter(), measure, font_size, available_width)
    }

    /// Minimum size; see [`minimum_size`].
    #[must_use]
    pub fn minimum_size(&self, font_size: f64) -> Size {
        minimum_size(font_size)
    }

    /// Applies a single click on row `index`, as if reported by a backend.
    ///
    /// The row's toggled state is derived from the committed selection, the way an
    /// immediate-mode selectable flips its flag. Clicks past the end are ignored.
    pub fn click(
        &mut self,
        index: usize,
        modifiers: Modifiers,
        double_click: bool,
    ) -> DrawResult {
        if index >= self.items.len() {
            log::debug!(
                "ignoring click on row {index} of a {}-item list",
                self.items.len()
            );
            return DrawResult::None;
        }
        let click = RowClick::toggling(index, self.selection.contains(index), double_click);
        let mut candidate = Candidate::from_state(&self.selection);
        interpret(&mut candidate, self.mode, click, modifiers);
        self.finish(candidate)
    }

    /// Draws one frame through `backend` and applies any clicks it reports.
    ///
    /// `frame` is the area laid out for the list; its height decides how many rows
    /// the backend should show without scrolling.
    pub fn render<B>(&mut self, frame: Rect, backend: &mut B) -> DrawResult
    where
        B: RowBackend + ?Sized,
    {
        let visible_rows = rows_in_height(frame.height(), backend.row_height());
        if !backend.begin_list(self.id, self.items.len(), visible_rows) {
            return DrawResult::None;
        }

        let modifiers = backend.modifiers();
        let enabled = !self.mode.is_disabled();
        let mut candidate = Candidate::from_state(&self.selection);

        for (index, label) in self.items.iter().enumerate() {
            let state = RowState {
                selected: self.selection.contains(index),
                enabled,
            };
            let response = backend.row(index, label, state);
            if response.clicked {
                let click = RowClick {
                    index,
                    selected: response.selected,
                    double_click: response.double_click,
                };
                interpret(&mut candidate, self.mode, click, modifiers);
            }
        }
        backend.end_list();

        self.finish(candidate)
    }

    fn finish(&mut self, candidate: Candidate) -> DrawResult {
        commit(
            &mut self.selection,
            candidate,
            &self.items,
            self.on_value_changed.as_mut(),
        )
    }
}
