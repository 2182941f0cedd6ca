//! Shared helpers for benchmarks

use todolist::config::AppConfig;
use todolist::messages::Msg;
use todolist::model::{AppModel, SequentialIds};
use todolist::update::update;

/// Create an AppModel holding the specified number of items
#[allow(dead_code)]
pub fn make_model(items: usize) -> AppModel {
    let mut model = AppModel::with_ids(AppConfig::default(), Box::new(SequentialIds::new()));
    for i in 0..items {
        update(&mut model, Msg::add(format!("Item {}", i), "The quick brown fox"));
    }
    model
}
