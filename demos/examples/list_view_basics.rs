// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List view basics.
//!
//! Drive a multi-select `ListView` through a scripted sequence of clicks and print
//! each frame plus the value-changed callbacks it produces.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example list_view_basics`

use kurbo::Rect;
use understory_demos::{ScriptedClick, TextBackend};
use understory_list_view::{ListView, ListViewIds, Modifiers, SelectionMode};

fn main() {
    env_logger::init();

    let mut ids = ListViewIds::new();
    let mut list = ListView::new(ids.allocate());
    list.set_items(["alpha", "bravo", "charlie", "delta", "echo"]);
    list.set_selection_mode(SelectionMode::MULTI_SELECT);
    list.set_on_value_changed(|labels, double_click| {
        if double_click {
            println!("  -> activated {labels:?}");
        } else {
            println!("  -> selected {labels:?}");
        }
    });

    let click = |row, modifiers| ScriptedClick {
        row,
        modifiers,
        double_click: false,
    };
    let mut backend = TextBackend::new([
        click(1, Modifiers::NONE),
        click(3, Modifiers::CTRL),
        click(0, Modifiers::SHIFT),
        click(4, Modifiers::SHIFT),
        ScriptedClick {
            row: 2,
            modifiers: Modifiers::NONE,
            double_click: true,
        },
        click(2, Modifiers::NONE),
    ]);

    let preferred = list.preferred_size(&backend, 14.0, 400.0);
    let minimum = list.minimum_size(14.0);
    println!("preferred: {preferred:?}, minimum: {minimum:?}");

    let frame = Rect::new(0.0, 0.0, preferred.width, 5.0);
    while backend.next_frame() {
        if let Some(current) = backend.current() {
            println!("click {current:?}");
        }
        let result = list.render(frame, &mut backend);
        print!("{}", backend.frame());
        println!("  {result:?}, anchor {:?}", list.anchor());
    }
}
