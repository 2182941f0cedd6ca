//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{Item, ItemId};

/// Form messages (text inputs and the action button)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMsg {
    /// Title input changed
    SetTitle(String),
    /// Description input changed
    SetDescription(String),
    /// Action button pressed: adds or saves depending on the edit session
    Submit,
}

/// List messages (item operations)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMsg {
    /// Append a new item
    Add { title: String, description: String },
    /// Load an item into the form for editing
    BeginEdit(ItemId),
    /// Overwrite an item's text in place
    SaveEdit {
        id: ItemId,
        title: String,
        description: String,
    },
    /// Remove an item
    Delete(ItemId),
    /// Replace the list order with the settled result of a drag
    Reorder(Vec<Item>),
    /// Flip an item's checked mark
    ToggleChecked(ItemId),
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Leave the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Form(FormMsg),
    List(ListMsg),
    App(AppMsg),
}

impl Msg {
    pub fn add(title: impl Into<String>, description: impl Into<String>) -> Self {
        Msg::List(ListMsg::Add {
            title: title.into(),
            description: description.into(),
        })
    }

    pub fn save_edit(
        id: ItemId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Msg::List(ListMsg::SaveEdit {
            id,
            title: title.into(),
            description: description.into(),
        })
    }
}
