//! Item id generation
//!
//! The model never invents ids itself; it asks an injected [`IdGenerator`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::item::ItemId;

/// Source of fresh item ids
pub trait IdGenerator: fmt::Debug {
    /// Produce an id that has never been returned by this generator before
    fn next_id(&mut self) -> ItemId;
}

/// Monotonic counter: `1`, `2`, `3`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next.to_string());
        self.next += 1;
        id
    }
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> ItemId {
        ItemId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Which generator the application should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
            IdStrategy::Uuid => Box::new(UuidIds),
        }
    }
}

impl std::str::FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" | "counter" => Ok(IdStrategy::Sequential),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(format!("unknown id strategy '{}'", other)),
        }
    }
}
