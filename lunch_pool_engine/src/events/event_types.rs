use serde::{Deserialize, Serialize};

use crate::db_types::OrderLine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAddedEvent {
    pub line: OrderLine,
}

impl OrderAddedEvent {
    pub fn new(line: OrderLine) -> Self {
        Self { line }
    }
}

/// Emitted after the pool has been bulk-cleared, i.e. at the start of a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolClearedEvent {
    pub lines_removed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouletteSpunEvent {
    pub store_name: String,
    pub winner: String,
}

impl RouletteSpunEvent {
    pub fn new<S: Into<String>, W: Into<String>>(store_name: S, winner: W) -> Self {
        Self { store_name: store_name.into(), winner: winner.into() }
    }
}
