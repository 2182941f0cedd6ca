//! Stateless rendering of the model
//!
//! [`render_state`] turns an [`AppModel`] into plain render-ready data and
//! [`render_text`] lays that data out for a terminal. Neither keeps state
//! between calls.

use std::fmt::Write as _;

use serde::Serialize;

use crate::model::{AppModel, ItemId};

pub const HEADER: &str = "To Do List";
pub const EMPTY_PLACEHOLDER: &str = "Your to do list is empty - add something!";
pub const TITLE_PLACEHOLDER: &str = "Title";
pub const DESCRIPTION_PLACEHOLDER: &str = "Description";

/// One row of the list as the presentation layer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    /// 1-based position shown to the user
    pub position: usize,
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub checked: bool,
    /// This row is the current edit target
    pub editing: bool,
}

/// Everything needed to draw the screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderState {
    pub header: &'static str,
    pub title_input: String,
    pub description_input: String,
    pub action_label: &'static str,
    pub editing: Option<ItemId>,
    pub rows: Vec<ItemRow>,
    /// Shown instead of rows when the list is empty
    pub placeholder: Option<&'static str>,
}

/// Derive render-ready data from the model
pub fn render_state(model: &AppModel) -> RenderState {
    let editing = model.session.target().cloned();
    let rows = model
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| ItemRow {
            position: index + 1,
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            checked: item.checked,
            editing: editing.as_ref() == Some(&item.id),
        })
        .collect();

    RenderState {
        header: HEADER,
        title_input: model.form.title.clone(),
        description_input: model.form.description.clone(),
        action_label: model.session.action_label(),
        editing,
        rows,
        placeholder: model.items.is_empty().then_some(EMPTY_PLACEHOLDER),
    }
}

/// Lay the render state out as terminal text
pub fn render_text(state: &RenderState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", state.header);
    let _ = writeln!(out, "{}", "=".repeat(state.header.chars().count()));
    let _ = writeln!(
        out,
        "[{}] {}",
        TITLE_PLACEHOLDER,
        field_text(&state.title_input)
    );
    let _ = writeln!(
        out,
        "[{}] {}",
        DESCRIPTION_PLACEHOLDER,
        field_text(&state.description_input)
    );
    let _ = writeln!(out, "<{}>", state.action_label);
    out.push('\n');

    if let Some(placeholder) = state.placeholder {
        let _ = writeln!(out, "{}", placeholder);
        return out;
    }

    for row in &state.rows {
        let mark = if row.checked { "x" } else { " " };
        let editing = if row.editing { "  (editing)" } else { "" };
        let _ = writeln!(
            out,
            "{:>3}. [{}] {}{}",
            row.position, mark, row.title, editing
        );
        let _ = writeln!(out, "       {}", row.description);
    }

    out
}

fn field_text(text: &str) -> &str {
    if text.is_empty() {
        "_"
    } else {
        text
    }
}
