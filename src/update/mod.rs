//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod form;
mod list;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::ListSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use form::update_form;
pub use list::update_list;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Form(m) => form::update_form(model, m),
        Msg::List(m) => list::update_list(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after list state and logs diffs for debugging.
/// Keystroke-level input changes are logged at trace level only.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::FormMsg;

    let is_noisy = matches!(
        &msg,
        Msg::Form(FormMsg::SetTitle(_)) | Msg::Form(FormMsg::SetDescription(_))
    );

    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = ListSnapshot::from_model(model);

    if is_noisy {
        tracing::trace!(target: "message", msg = %msg_name, "processing");
    } else {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = ListSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "list", %diff, "state changed");
    }

    model.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `List::Delete(ItemId("3"))`
/// - `Form::Submit`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Form(m) => format!("Form::{:?}", m),
        Msg::List(crate::messages::ListMsg::Reorder(items)) => {
            format!("List::Reorder({} items)", items.len())
        }
        Msg::List(m) => format!("List::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
