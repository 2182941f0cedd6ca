//! Benchmarks for the main Msg → Update → Cmd → Render loop
//!
//! Run with: cargo bench main_loop

mod support;
use support::make_model;

use todolist::messages::{FormMsg, ListMsg, Msg};
use todolist::model::moved;
use todolist::update::update;
use todolist::view::{render_state, render_text};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Update-only benchmarks (no rendering)
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn update_add(iterations: usize) {
    let mut model = make_model(0);

    for i in 0..iterations {
        let cmd = update(&mut model, Msg::add(format!("t{}", i), "d"));
        divan::black_box(cmd);
    }

    divan::black_box(&model);
}

#[divan::bench(args = [100, 1000])]
fn update_delete_front(items: usize) {
    let mut model = make_model(items);

    while let Some(item) = model.items.get(0) {
        let id = item.id.clone();
        let cmd = update(&mut model, Msg::List(ListMsg::Delete(id)));
        divan::black_box(cmd);
    }
}

#[divan::bench(args = [100, 1000])]
fn update_reorder_drag(items: usize) {
    let mut model = make_model(items);

    for i in 0..50 {
        if let Some(order) = moved(model.items.as_slice(), i % items, (i * 7) % items) {
            let cmd = update(&mut model, Msg::List(ListMsg::Reorder(order)));
            divan::black_box(cmd);
        }
    }
}

#[divan::bench(args = [100, 1000])]
fn update_edit_cycle(items: usize) {
    let mut model = make_model(items);
    let id = model.items.get(items / 2).map(|i| i.id.clone()).unwrap();

    for i in 0..50 {
        update(&mut model, Msg::List(ListMsg::BeginEdit(id.clone())));
        update(&mut model, Msg::Form(FormMsg::SetTitle(format!("edited {}", i))));
        let cmd = update(&mut model, Msg::Form(FormMsg::Submit));
        divan::black_box(cmd);
    }
}

// ============================================================================
// Render benchmarks
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn render_screen(bencher: divan::Bencher, items: usize) {
    let model = make_model(items);

    bencher.bench(|| divan::black_box(render_text(&render_state(&model))));
}
