//! Application model - the complete state of the list screen
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod form;
pub mod ids;
pub mod item;

pub use form::{EditSession, FormState};
pub use ids::{IdGenerator, IdStrategy, SequentialIds, UuidIds};
pub use item::{is_admissible, moved, Item, ItemId, ItemList};

use crate::config::AppConfig;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Items in display order
    pub items: ItemList,
    /// Title/description inputs
    pub form: FormState,
    /// Whether the form is adding or editing
    pub session: EditSession,
    /// Source of ids for new items
    pub ids: Box<dyn IdGenerator>,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppModel {
    /// Create an empty model using the id strategy from `config`
    pub fn new(config: AppConfig) -> Self {
        let ids = config.id_strategy.generator();
        Self::with_ids(config, ids)
    }

    /// Create an empty model with an explicit id generator
    pub fn with_ids(config: AppConfig, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            items: ItemList::new(),
            form: FormState::default(),
            session: EditSession::None,
            ids,
            config,
        }
    }

    /// Reset the form to "add" mode with empty inputs
    pub fn end_session(&mut self) {
        self.session = EditSession::None;
        self.form.clear();
    }

    /// Normalize user text according to the `trim_input` setting
    pub fn normalize_input(&self, text: String) -> String {
        if self.config.trim_input {
            text.trim().to_string()
        } else {
            text
        }
    }

    /// Panic if the model violates one of its structural invariants
    ///
    /// Debug builds run this after every update.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        assert!(
            self.items.has_unique_ids(),
            "[{}] duplicate item ids in list",
            context
        );
        if let EditSession::Editing(id) = &self.session {
            assert!(
                self.items.contains(id),
                "[{}] edit session references missing item {}",
                context,
                id
            );
        }
    }

    #[cfg(not(debug_assertions))]
    pub fn assert_invariants(&self, _context: &str) {}
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
