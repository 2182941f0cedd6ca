//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use todolist::commands::Cmd;
use todolist::config::AppConfig;
use todolist::messages::{ListMsg, Msg};
use todolist::model::{AppModel, ItemId, SequentialIds};
use todolist::update::update;

/// Create an empty model with sequential ids
pub fn test_model() -> AppModel {
    AppModel::with_ids(AppConfig::default(), Box::new(SequentialIds::new()))
}

/// Create a model holding the given (title, description) pairs, in order
pub fn test_model_with_items(items: &[(&str, &str)]) -> AppModel {
    let mut model = test_model();
    for (title, description) in items {
        update(&mut model, Msg::add(*title, *description));
    }
    assert_eq!(model.items.len(), items.len(), "fixture items must be valid");
    model
}

/// Id of the item at a zero-based position
pub fn id_at(model: &AppModel, index: usize) -> ItemId {
    model.items.get(index).expect("no item at index").id.clone()
}

/// Id of the first item with the given title
pub fn id_of(model: &AppModel, title: &str) -> ItemId {
    model
        .items
        .iter()
        .find(|item| item.title == title)
        .unwrap_or_else(|| panic!("no item titled {:?}", title))
        .id
        .clone()
}

/// (title, description) pairs in list order
pub fn titles_and_descriptions(model: &AppModel) -> Vec<(String, String)> {
    model
        .items
        .iter()
        .map(|item| (item.title.clone(), item.description.clone()))
        .collect()
}

/// Run a message and return its flattened effects
pub fn effects(model: &mut AppModel, msg: Msg) -> Vec<Cmd> {
    update(model, msg).map(Cmd::effects).unwrap_or_default()
}

pub fn begin_edit(model: &mut AppModel, id: &ItemId) -> Option<Cmd> {
    update(model, Msg::List(ListMsg::BeginEdit(id.clone())))
}

pub fn delete(model: &mut AppModel, id: &ItemId) -> Option<Cmd> {
    update(model, Msg::List(ListMsg::Delete(id.clone())))
}
