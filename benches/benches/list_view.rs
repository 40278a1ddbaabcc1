// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Rect;
use understory_list_view::{
    ListView, ListViewId, Modifiers, RowBackend, RowResponse, RowState, SelectionMode,
};

fn list_with(len: usize) -> ListView {
    let mut list = ListView::new(ListViewId::from_raw(1));
    list.set_items((0..len).map(|i| format!("item {i}")));
    list.set_selection_mode(SelectionMode::MULTI_SELECT);
    list
}

fn bench_shift_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_view/shift_range");

    // Shift-click from the first to the last row: the candidate range is O(n)
    // and the diff against the previous selection is O(n).
    for len in [128usize, 2_048, 32_768] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut list = list_with(len);
                    list.click(0, Modifiers::NONE, false);
                    list
                },
                |mut list| {
                    black_box(list.click(len - 1, Modifiers::SHIFT, false));
                    black_box(list);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_ctrl_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_view/ctrl_toggle");

    // Toggle one row in the middle of a large, already-selected block.
    for len in [128usize, 2_048, 32_768] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut list = list_with(len);
                    list.click(0, Modifiers::NONE, false);
                    list.click(len - 1, Modifiers::SHIFT, false);
                    list
                },
                |mut list| {
                    black_box(list.click(len / 2, Modifiers::CTRL, false));
                    black_box(list);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// A backend that draws nothing and never reports clicks.
struct Idle;

impl RowBackend for Idle {
    fn row_height(&self) -> f64 {
        20.0
    }

    fn modifiers(&self) -> Modifiers {
        Modifiers::NONE
    }

    fn begin_list(&mut self, _id: ListViewId, _item_count: usize, _visible_rows: usize) -> bool {
        true
    }

    fn row(&mut self, _index: usize, label: &str, state: RowState) -> RowResponse {
        black_box((label, state));
        RowResponse::IDLE
    }

    fn end_list(&mut self) {}
}

fn bench_idle_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_view/idle_frame");
    let frame = Rect::new(0.0, 0.0, 200.0, 400.0);

    for len in [128usize, 2_048, 32_768] {
        let mut list = list_with(len);
        list.click(0, Modifiers::NONE, false);
        list.click(len / 2, Modifiers::SHIFT, false);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| black_box(list.render(frame, &mut Idle)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_shift_range,
    bench_ctrl_toggle,
    bench_idle_frame
);
criterion_main!(benches);
