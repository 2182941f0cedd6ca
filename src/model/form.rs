//! Input form state and the edit session that drives it

use serde::Serialize;

use super::item::{Item, ItemId};

/// Whether the form composes a new item or amends an existing one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum EditSession {
    /// Composing a new item
    #[default]
    None,
    /// Amending the item with this id
    Editing(ItemId),
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    /// The id being edited, if any
    pub fn target(&self) -> Option<&ItemId> {
        match self {
            EditSession::None => None,
            EditSession::Editing(id) => Some(id),
        }
    }

    /// Label for the form's action button
    pub fn action_label(&self) -> &'static str {
        match self {
            EditSession::None => "Add Item",
            EditSession::Editing(_) => "Save changes",
        }
    }
}

/// The two text inputs above the list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub title: String,
    pub description: String,
}

impl FormState {
    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    /// Replace both fields with the values of an existing item
    pub fn load(&mut self, item: &Item) {
        self.title.clone_from(&item.title);
        self.description.clone_from(&item.description);
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}
