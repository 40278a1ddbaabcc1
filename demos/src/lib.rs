// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the Understory demos.
//!
//! [`TextBackend`] stands in for an immediate-mode toolkit: it "draws" rows as
//! lines of text and replays a queue of scripted clicks, one per frame.

use std::collections::VecDeque;

use kurbo::Vec2;
use understory_list_view::{ListViewId, Modifiers, RowBackend, RowResponse, RowState, TextMeasure};

/// A scripted click: row, modifiers, and whether it is a double-click.
#[derive(Clone, Copy, Debug)]
pub struct ScriptedClick {
    /// Row index.
    pub row: usize,
    /// Modifiers held.
    pub modifiers: Modifiers,
    /// The click is the second half of a double-click.
    pub double_click: bool,
}

/// Text-mode row backend with fixed-width glyphs.
#[derive(Debug, Default)]
pub struct TextBackend {
    clicks: VecDeque<ScriptedClick>,
    current: Option<ScriptedClick>,
    frame: String,
}

impl TextBackend {
    /// Creates a backend that will replay `clicks` in order.
    pub fn new(clicks: impl IntoIterator<Item = ScriptedClick>) -> Self {
        Self {
            clicks: clicks.into_iter().collect(),
            current: None,
            frame: String::new(),
        }
    }

    /// Advances to the next scripted click. Returns `false` when the script is done.
    pub fn next_frame(&mut self) -> bool {
        self.frame.clear();
        self.current = self.clicks.pop_front();
        self.current.is_some()
    }

    /// The click being replayed this frame.
    pub fn current(&self) -> Option<ScriptedClick> {
        self.current
    }

    /// The text drawn during the last frame.
    pub fn frame(&self) -> &str {
        &self.frame
    }
}

impl RowBackend for TextBackend {
    fn row_height(&self) -> f64 {
        1.0
    }

    fn modifiers(&self) -> Modifiers {
        self.current.map(|click| click.modifiers).unwrap_or_default()
    }

    fn begin_list(&mut self, id: ListViewId, item_count: usize, visible_rows: usize) -> bool {
        self.frame
            .push_str(&format!("{id} ({item_count} items, {visible_rows} visible)\n"));
        true
    }

    fn row(&mut self, index: usize, label: &str, state: RowState) -> RowResponse {
        let mark = match (state.enabled, state.selected) {
            (false, _) => '-',
            (true, true) => 'x',
            (true, false) => ' ',
        };
        self.frame.push_str(&format!("  [{mark}] {label}\n"));

        match self.current {
            Some(click) if click.row == index && state.enabled => RowResponse {
                clicked: true,
                selected: !state.selected,
                double_click: click.double_click,
            },
            _ => RowResponse::IDLE,
        }
    }

    fn end_list(&mut self) {}
}

impl TextMeasure for TextBackend {
    fn text_width(&self, text: &str, font_size: f64, wrap_width: f64) -> f64 {
        let width = text.chars().count() as f64 * font_size * 0.6;
        width.min(wrap_width)
    }

    fn frame_padding(&self) -> Vec2 {
        Vec2::new(4.0, 3.0)
    }
}
