//! todolist - Elm-style to-do list
//!
//! This crate provides the core types and logic for a single-screen to-do
//! list implementing the Elm Architecture pattern: an [`AppModel`] holds all
//! state, [`Msg`] values describe user intent, [`update::update`] applies
//! them and returns the [`Cmd`] side effects for the runtime to perform.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use messages::Msg;
pub use model::AppModel;
