//! List message handlers (add, edit, delete, reorder)

use std::collections::HashSet;

use crate::commands::{Cmd, Haptic};
use crate::messages::ListMsg;
use crate::model::{is_admissible, AppModel, EditSession, Item, ItemId};

/// Attempts at drawing a fresh id before an add is declined
const MAX_ID_ATTEMPTS: usize = 16;

/// Handle list messages
pub fn update_list(model: &mut AppModel, msg: ListMsg) -> Option<Cmd> {
    match msg {
        ListMsg::Add { title, description } => add_item(model, title, description),
        ListMsg::BeginEdit(id) => begin_edit(model, id),
        ListMsg::SaveEdit {
            id,
            title,
            description,
        } => save_edit(model, id, title, description),
        ListMsg::Delete(id) => delete_item(model, &id),
        ListMsg::Reorder(items) => reorder(model, items),
        ListMsg::ToggleChecked(id) => {
            let item = model.items.find_mut(&id)?;
            item.checked = !item.checked;
            Some(Cmd::Redraw)
        }
    }
}

/// Append a new item and reset the form to compose mode
///
/// Empty input declines the add but still dismisses the keyboard.
pub(crate) fn add_item(model: &mut AppModel, title: String, description: String) -> Option<Cmd> {
    let title = model.normalize_input(title);
    let description = model.normalize_input(description);

    if !is_admissible(&title, &description, model.config.trim_input) {
        tracing::debug!("add declined: title or description empty");
        return Some(Cmd::DismissKeyboard);
    }

    let mut item = Item::new(model.ids.next_id(), title, description);
    let mut attempts = 1;
    while model.items.contains(&item.id) {
        if attempts >= MAX_ID_ATTEMPTS {
            tracing::warn!(id = %item.id, "id generator keeps returning taken ids, add declined");
            return Some(Cmd::DismissKeyboard);
        }
        tracing::warn!(id = %item.id, "id generator returned a taken id, retrying");
        item.id = model.ids.next_id();
        attempts += 1;
    }

    tracing::debug!(id = %item.id, "item added");
    model.items.push(item);
    // Adding always leaves the form in compose mode
    model.end_session();

    Some(Cmd::batch(vec![
        Cmd::Redraw,
        Cmd::Haptic(Haptic::Success),
        Cmd::DismissKeyboard,
    ]))
}

/// Start (or retarget) an edit session for an existing item
fn begin_edit(model: &mut AppModel, id: ItemId) -> Option<Cmd> {
    let Some(item) = model.items.find(&id) else {
        tracing::debug!(%id, "edit ignored: no such item");
        return None;
    };

    if let EditSession::Editing(previous) = &model.session {
        if previous != &id {
            tracing::debug!(%previous, %id, "switching edit target without saving");
        }
    }

    model.form.load(item);
    model.session = EditSession::Editing(id);
    Some(Cmd::Redraw)
}

/// Overwrite an item's text in place and close the edit session
///
/// Saves obey the same non-empty rule as adds.
pub(crate) fn save_edit(
    model: &mut AppModel,
    id: ItemId,
    title: String,
    description: String,
) -> Option<Cmd> {
    let title = model.normalize_input(title);
    let description = model.normalize_input(description);

    if !is_admissible(&title, &description, model.config.trim_input) {
        tracing::debug!(%id, "save declined: title or description empty");
        return Some(Cmd::DismissKeyboard);
    }

    match model.items.find_mut(&id) {
        Some(item) => {
            item.title = title;
            item.description = description;
            tracing::debug!(%id, "item saved");
        }
        None => {
            tracing::debug!(%id, "save target no longer exists, closing session");
        }
    }

    model.end_session();
    Some(Cmd::batch(vec![Cmd::Redraw, Cmd::DismissKeyboard]))
}

/// Remove an item, closing the edit session if it targeted that item
fn delete_item(model: &mut AppModel, id: &ItemId) -> Option<Cmd> {
    if model.items.remove(id).is_none() {
        tracing::debug!(%id, "delete ignored: no such item");
        return None;
    }

    if model.session.target() == Some(id) {
        tracing::debug!(%id, "deleted the item being edited, closing session");
        model.end_session();
    }

    Some(Cmd::batch(vec![Cmd::Redraw, Cmd::Haptic(Haptic::Success)]))
}

/// Take the settled order from a drag gesture
///
/// The order is applied verbatim. Input that would duplicate an id is
/// refused since that would break the uniqueness of the list.
fn reorder(model: &mut AppModel, items: Vec<Item>) -> Option<Cmd> {
    let repeats_id = {
        let mut seen = HashSet::with_capacity(items.len());
        !items.iter().all(|item| seen.insert(&item.id))
    };
    if repeats_id {
        tracing::warn!("reorder refused: new order repeats an id");
        return None;
    }

    if !model.items.is_permutation(&items) {
        tracing::warn!(
            current = model.items.len(),
            incoming = items.len(),
            "reorder input is not a permutation of the current list"
        );
    }

    model.items.replace(items);

    if let Some(target) = model.session.target() {
        if !model.items.contains(target) {
            model.end_session();
        }
    }

    Some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn model() -> AppModel {
        AppModel::new(AppConfig::default())
    }

    #[test]
    fn test_add_empty_only_dismisses_keyboard() {
        let mut model = model();
        let cmd = add_item(&mut model, String::new(), "x".into());
        assert_eq!(cmd, Some(Cmd::DismissKeyboard));
        assert!(model.items.is_empty());
    }

    #[test]
    fn test_add_retries_on_taken_id() {
        #[derive(Debug)]
        struct Stuck(u32);
        impl crate::model::IdGenerator for Stuck {
            fn next_id(&mut self) -> ItemId {
                self.0 += 1;
                // "same" twice, then distinct values
                if self.0 <= 2 {
                    ItemId::new("same")
                } else {
                    ItemId::new(format!("n{}", self.0))
                }
            }
        }

        let mut model = AppModel::with_ids(AppConfig::default(), Box::new(Stuck(0)));
        add_item(&mut model, "a".into(), "b".into());
        add_item(&mut model, "c".into(), "d".into());

        assert_eq!(model.items.len(), 2);
        assert_eq!(model.items.get(0).unwrap().id.as_str(), "same");
        assert_eq!(model.items.get(1).unwrap().id.as_str(), "n3");
    }

    #[test]
    fn test_add_declined_when_generator_never_yields_fresh_id() {
        #[derive(Debug)]
        struct Constant;
        impl crate::model::IdGenerator for Constant {
            fn next_id(&mut self) -> ItemId {
                ItemId::new("fixed")
            }
        }

        let mut model = AppModel::with_ids(AppConfig::default(), Box::new(Constant));
        add_item(&mut model, "a".into(), "b".into());
        model.form.set_title("typed");
        let cmd = add_item(&mut model, "c".into(), "d".into());

        assert_eq!(cmd, Some(Cmd::DismissKeyboard));
        assert_eq!(model.items.len(), 1);
        assert_eq!(model.form.title, "typed");
    }

    #[test]
    fn test_reorder_refuses_duplicate_ids() {
        let mut model = model();
        add_item(&mut model, "a".into(), "b".into());
        add_item(&mut model, "c".into(), "d".into());
        let first = model.items.get(0).unwrap().clone();
        let before = model.items.clone();

        let cmd = reorder(&mut model, vec![first.clone(), first]);

        assert_eq!(cmd, None);
        assert_eq!(model.items, before);
    }
}
