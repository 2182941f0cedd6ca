//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! list and edit-session state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=list=debug,message=trace` - scoped filtering
//! - `RUST_LOG=todolist::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/todolist/logs/todolist.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{ensure_logs_dir, LOG_FILE_PREFIX};
use crate::model::{AppModel, EditSession};

/// Initialize tracing subscriber with console and optional file logging
///
/// Console output goes to stderr so it never interleaves with the list
/// printed on stdout.
pub fn init(file_logging: bool) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = if file_logging {
        match ensure_logs_dir() {
            Ok(logs_dir) => {
                let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
                Some(
                    fmt::layer()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(EnvFilter::new("debug")),
                )
            }
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {:#}", e);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of list/form state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    pub item_count: usize,
    pub ids: Vec<String>,
    pub editing: Option<String>,
    pub title_len: usize,
    pub description_len: usize,
}

impl ListSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            item_count: model.items.len(),
            ids: model.items.iter().map(|i| i.id.to_string()).collect(),
            editing: match &model.session {
                EditSession::None => None,
                EditSession::Editing(id) => Some(id.to_string()),
            },
            title_len: model.form.title.chars().count(),
            description_len: model.form.description.chars().count(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ListSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.item_count != other.item_count {
            changes.push(format!(
                "items: {} → {}",
                self.item_count, other.item_count
            ));
        } else if self.ids != other.ids {
            changes.push("order changed".to_string());
        }

        if self.editing != other.editing {
            let show = |e: &Option<String>| e.as_deref().unwrap_or("none").to_string();
            changes.push(format!(
                "session: {} → {}",
                show(&self.editing),
                show(&other.editing)
            ));
        }

        if self.title_len != other.title_len || self.description_len != other.description_len {
            changes.push(format!(
                "form: ({},{}) → ({},{})",
                self.title_len, self.description_len, other.title_len, other.description_len
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
