//! Form message handlers (text inputs and the action button)

use crate::commands::Cmd;
use crate::messages::FormMsg;
use crate::model::{AppModel, EditSession};

use super::list::{add_item, save_edit};

/// Handle form messages
pub fn update_form(model: &mut AppModel, msg: FormMsg) -> Option<Cmd> {
    match msg {
        FormMsg::SetTitle(text) => {
            model.form.set_title(text);
            Some(Cmd::Redraw)
        }
        FormMsg::SetDescription(text) => {
            model.form.set_description(text);
            Some(Cmd::Redraw)
        }
        FormMsg::Submit => submit(model),
    }
}

/// Dispatch the action button to add or save depending on the session
fn submit(model: &mut AppModel) -> Option<Cmd> {
    let title = model.form.title.clone();
    let description = model.form.description.clone();

    match model.session.clone() {
        EditSession::None => add_item(model, title, description),
        EditSession::Editing(id) => save_edit(model, id, title, description),
    }
}
