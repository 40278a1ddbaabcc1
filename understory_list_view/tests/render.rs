// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `ListView::render` against a scripted backend.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Rect;
use understory_list_view::{
    DrawResult, ListView, ListViewId, Modifiers, RowBackend, RowResponse, RowState, SelectionMode,
};

/// A backend that replays scripted clicks for one frame and records what it was asked to draw.
#[derive(Default)]
struct Scripted {
    visible: bool,
    modifiers: Modifiers,
    clicks: Vec<(usize, bool)>,
    opened: Vec<(ListViewId, usize, usize)>,
    rows: Vec<(usize, String, RowState)>,
    closed: usize,
}

impl Scripted {
    fn visible() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    fn click(&mut self, index: usize, modifiers: Modifiers, double_click: bool) {
        self.clicks(modifiers, &[(index, double_click)]);
    }

    /// Queues several `(row, double_click)` clicks for the next frame.
    fn clicks(&mut self, modifiers: Modifiers, clicks: &[(usize, bool)]) {
        self.clicks = clicks.to_vec();
        self.modifiers = modifiers;
        self.rows.clear();
    }
}

impl RowBackend for Scripted {
    fn row_height(&self) -> f64 {
        20.0
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn begin_list(&mut self, id: ListViewId, item_count: usize, visible_rows: usize) -> bool {
        self.opened.push((id, item_count, visible_rows));
        self.visible
    }

    fn row(&mut self, index: usize, label: &str, state: RowState) -> RowResponse {
        self.rows.push((index, label.to_string(), state));
        let pending = self.clicks.iter().position(|&(row, _)| row == index);
        match pending {
            Some(pos) if state.enabled => {
                let (_, double_click) = self.clicks.remove(pos);
                RowResponse {
                    clicked: true,
                    selected: !state.selected,
                    double_click,
                }
            }
            _ => RowResponse::IDLE,
        }
    }

    fn end_list(&mut self) {
        self.closed += 1;
    }
}

fn frame() -> Rect {
    Rect::new(0.0, 0.0, 120.0, 90.0)
}

fn list(mode: SelectionMode) -> ListView {
    let mut list = ListView::new(ListViewId::from_raw(3));
    list.set_items(["a", "b", "c", "d"]);
    list.set_selection_mode(mode);
    list
}

#[test]
fn frame_without_clicks_needs_no_redraw() {
    let mut list = list(SelectionMode::MULTI_SELECT);
    let mut backend = Scripted::visible();

    assert_eq!(list.render(frame(), &mut backend), DrawResult::None);
    assert_eq!(backend.opened, vec![(ListViewId::from_raw(3), 4, 4)]);
    assert_eq!(backend.rows.len(), 4);
    assert_eq!(backend.closed, 1);
}

#[test]
fn hidden_list_draws_nothing() {
    let mut list = list(SelectionMode::MULTI_SELECT);
    let mut backend = Scripted::default();
    backend.click(0, Modifiers::NONE, false);

    assert_eq!(list.render(frame(), &mut backend), DrawResult::None);
    assert!(backend.rows.is_empty());
    assert_eq!(backend.closed, 0);
    assert!(list.selected_indices().is_empty());
}

#[test]
fn rows_reflect_committed_selection() {
    let mut list = list(SelectionMode::MULTI_SELECT);
    let mut backend = Scripted::visible();

    backend.click(1, Modifiers::NONE, false);
    assert_eq!(list.render(frame(), &mut backend), DrawResult::Redraw);
    // Rows are drawn before the click is committed.
    assert!(backend.rows.iter().all(|(_, _, state)| !state.selected));

    backend.click(3, Modifiers::CTRL, false);
    list.render(frame(), &mut backend);
    let selected: Vec<usize> = backend
        .rows
        .iter()
        .filter(|(_, _, state)| state.selected)
        .map(|(index, _, _)| *index)
        .collect();
    assert_eq!(selected, vec![1]);
    assert_eq!(list.selected_indices(), &[1, 3]);
}

#[test]
fn scripted_scenario_notifies_each_change() {
    let mut list = list(SelectionMode::MULTI_SELECT);
    let calls: Rc<RefCell<Vec<(Vec<String>, bool)>>> = Rc::default();
    let sink = calls.clone();
    list.set_on_value_changed(move |labels, double_click| {
        let labels = labels.iter().map(|label| label.to_string()).collect();
        sink.borrow_mut().push((labels, double_click));
    });
    let mut backend = Scripted::visible();

    for (index, modifiers) in [
        (1, Modifiers::NONE),
        (3, Modifiers::CTRL),
        (0, Modifiers::SHIFT),
    ] {
        backend.click(index, modifiers, false);
        assert!(list.render(frame(), &mut backend).needs_redraw());
    }

    backend.click(0, Modifiers::NONE, true);
    list.render(frame(), &mut backend);

    let strings = |labels: &[&str]| labels.iter().map(|l| l.to_string()).collect::<Vec<_>>();
    assert_eq!(
        *calls.borrow(),
        vec![
            (strings(&["b"]), false),
            (strings(&["b", "d"]), false),
            (strings(&["a", "b"]), false),
            (strings(&["a"]), true),
        ]
    );
}

#[test]
fn clicks_in_one_frame_fold_into_one_commit() {
    let mut list = list(SelectionMode::MULTI_SELECT);
    list.set_selected_index(Some(2));
    let calls: Rc<RefCell<Vec<(Vec<String>, bool)>>> = Rc::default();
    let sink = calls.clone();
    list.set_on_value_changed(move |labels, double_click| {
        let labels = labels.iter().map(|label| label.to_string()).collect();
        sink.borrow_mut().push((labels, double_click));
    });
    let mut backend = Scripted::visible();
    let strings = |labels: &[&str]| labels.iter().map(|l| l.to_string()).collect::<Vec<_>>();

    // A double-click on row 0, then a plain click that toggles row 2 off. The
    // double-click seen earlier in the frame keeps row 2 selected.
    backend.clicks(Modifiers::NONE, &[(0, true), (2, false)]);
    assert_eq!(list.render(frame(), &mut backend), DrawResult::Redraw);
    assert_eq!(list.selected_indices(), &[2]);
    assert_eq!(list.anchor(), Some(2));
    assert_eq!(*calls.borrow(), vec![(strings(&["c"]), true)]);

    // Two ctrl-clicks in one frame are both added and reported once.
    backend.clicks(Modifiers::CTRL, &[(1, false), (3, false)]);
    assert_eq!(list.render(frame(), &mut backend), DrawResult::Redraw);
    assert_eq!(list.selected_indices(), &[1, 2, 3]);
    assert_eq!(list.anchor(), Some(2));
    assert_eq!(
        *calls.borrow(),
        vec![
            (strings(&["c"]), true),
            (strings(&["b", "c", "d"]), false),
        ]
    );
}

#[test]
fn disabled_rows_are_not_enabled() {
    let mut list = list(SelectionMode::DISABLED);
    list.set_selected_index(Some(2));
    let mut backend = Scripted::visible();
    backend.click(0, Modifiers::NONE, false);

    assert_eq!(list.render(frame(), &mut backend), DrawResult::None);
    assert!(backend.rows.iter().all(|(_, _, state)| !state.enabled));
    assert_eq!(list.selected_indices(), &[2]);
}
