//! Monkey tests - edge cases, fuzzing, and stress testing
//!
//! These tests push the controller with long, unusual sequences of
//! operations and check that the list invariants always hold.

mod common;

use std::collections::HashSet;

use common::{id_at, test_model};
use todolist::messages::{FormMsg, ListMsg, Msg};
use todolist::model::{moved, AppModel, EditSession, ItemId};
use todolist::update::update;

/// Tiny deterministic generator so failures reproduce
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n.max(1) as u64) as usize
    }
}

fn check_invariants(model: &AppModel) {
    let ids: HashSet<&ItemId> = model.items.iter().map(|item| &item.id).collect();
    assert_eq!(ids.len(), model.items.len(), "ids must be unique");
    for item in &model.items {
        assert!(!item.title.is_empty(), "empty title admitted");
        assert!(!item.description.is_empty(), "empty description admitted");
    }
    if let EditSession::Editing(id) = &model.session {
        assert!(model.items.contains(id), "session points at a deleted item");
    }
}

fn random_text(rng: &mut Lcg) -> String {
    match rng.below(4) {
        0 => String::new(),
        1 => "x".to_string(),
        2 => format!("item {}", rng.next()),
        _ => "ünïcødé ✓".to_string(),
    }
}

#[test]
fn test_random_operation_sequences_keep_invariants() {
    for seed in 0..20 {
        let mut rng = Lcg(seed);
        let mut model = test_model();

        for _ in 0..500 {
            let len = model.items.len();
            let msg = match rng.below(8) {
                0 | 1 => Msg::add(random_text(&mut rng), random_text(&mut rng)),
                2 => Msg::Form(FormMsg::SetTitle(random_text(&mut rng))),
                3 => Msg::Form(FormMsg::SetDescription(random_text(&mut rng))),
                4 => Msg::Form(FormMsg::Submit),
                5 if len > 0 => Msg::List(ListMsg::BeginEdit(id_at(&model, rng.below(len)))),
                6 if len > 0 => Msg::List(ListMsg::Delete(id_at(&model, rng.below(len)))),
                7 if len > 0 => {
                    let from = rng.below(len);
                    let to = rng.below(len);
                    let order = moved(model.items.as_slice(), from, to).expect("from is in range");
                    Msg::List(ListMsg::Reorder(order))
                }
                _ => Msg::List(ListMsg::Delete(ItemId::new("missing"))),
            };
            update(&mut model, msg);
            check_invariants(&model);
        }
    }
}

#[test]
fn test_delete_everything_then_add_again() {
    let mut model = test_model();
    for i in 0..50 {
        update(&mut model, Msg::add(format!("t{}", i), "d"));
    }
    while !model.items.is_empty() {
        let id = id_at(&model, 0);
        update(&mut model, Msg::List(ListMsg::Delete(id)));
    }

    update(&mut model, Msg::add("fresh", "start"));

    assert_eq!(model.items.len(), 1);
    assert_eq!(model.items.get(0).unwrap().title, "fresh");
}

#[test]
fn test_reorder_of_empty_list() {
    let mut model = test_model();
    update(&mut model, Msg::List(ListMsg::Reorder(Vec::new())));
    assert!(model.items.is_empty());
}

#[test]
fn test_very_long_text_is_kept_verbatim() {
    let mut model = test_model();
    let title = "t".repeat(100_000);
    update(&mut model, Msg::add(title.clone(), "d"));
    assert_eq!(model.items.get(0).unwrap().title, title);
}

#[test]
fn test_submit_twice_does_not_duplicate() {
    let mut model = test_model();
    update(&mut model, Msg::Form(FormMsg::SetTitle("a".into())));
    update(&mut model, Msg::Form(FormMsg::SetDescription("b".into())));

    update(&mut model, Msg::Form(FormMsg::Submit));
    update(&mut model, Msg::Form(FormMsg::Submit));

    assert_eq!(model.items.len(), 1);
}
