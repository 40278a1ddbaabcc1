// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_list_view --heading-base-level=0

//! Understory List View: selection and change notification for immediate-mode lists.
//!
//! This crate holds the part of a list widget that has real logic: which rows are
//! selected, how a click combined with modifier keys changes that, and when an
//! observer needs to hear about it. Everything visual (fonts, colors, scrolling,
//! hit testing pixels to rows) belongs to the host's immediate-mode backend, which
//! this crate reaches through the small [`RowBackend`] and [`TextMeasure`] traits.
//!
//! The pieces, leaf first:
//!
//! - [`ItemStore`]: the ordered labels. Items have no identity beyond their index.
//! - [`SelectionMode`]: capability flags (`SINGLE_SELECT`, `MULTI_SELECT`,
//!   `DESELECTABLE`; the empty set disables selection).
//! - [`SelectionState`]: ascending, unique selected indices plus the anchor used
//!   for shift-click ranges and a revision counter.
//! - [`interpret`]: folds one row click into a [`Candidate`] selection.
//! - [`commit`]: diffs a candidate against the committed state, commits it,
//!   fires the value-changed callback, and reports whether to redraw.
//! - [`preferred_size`] / [`minimum_size`]: layout hints for the host.
//! - [`ListView`]: ties it together and provides the per-frame [`ListView::render`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_list_view::{DrawResult, ListView, ListViewIds, Modifiers, SelectionMode};
//!
//! let mut ids = ListViewIds::new();
//! let mut list = ListView::new(ids.allocate());
//! list.set_items(["a", "b", "c", "d"]);
//! list.set_selection_mode(SelectionMode::MULTI_SELECT);
//!
//! // Plain click on "b".
//! assert_eq!(list.click(1, Modifiers::NONE, false), DrawResult::Redraw);
//! assert_eq!(list.selected_indices(), &[1]);
//!
//! // Ctrl-click on "d" adds it; the anchor stays on "b".
//! list.click(3, Modifiers::CTRL, false);
//! assert_eq!(list.selected_indices(), &[1, 3]);
//!
//! // Shift-click on "a" selects the range back to the anchor.
//! list.click(0, Modifiers::SHIFT, false);
//! assert_eq!(list.selected_labels(), ["a", "b"]);
//! ```
//!
//! ## Frames
//!
//! Hosts with an immediate-mode toolkit call [`ListView::render`] once per frame.
//! The backend draws each row, reports whether it was clicked, what its toggled
//! state became, and whether the gesture resolved to a double-click. All clicks of
//! a frame are interpreted against one candidate, then committed in one step, so
//! no partial state is observable between interpretation and notification.
//!
//! The value-changed callback runs synchronously inside that step. It only
//! receives borrowed labels and cannot reach the list view while it is being
//! rendered.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod interpret;
mod items;
mod mode;
mod notify;
mod selection;
mod size;
mod view;

pub use interpret::{Candidate, Modifiers, RowClick, interpret};
pub use items::ItemStore;
pub use mode::{SelectionMode, UnknownModeBits};
pub use notify::{DrawResult, OnValueChanged, commit};
pub use selection::SelectionState;
pub use size::{Dim, PreferredSize, TextMeasure, minimum_size, preferred_size, rows_in_height};
pub use view::{ListView, ListViewId, ListViewIds, RowBackend, RowResponse, RowState};
