//! Global concurrency limits and the table used to display them.
//!
//! The table is a fixed column configuration: every column knows its header
//! and how to render a record into a [`Cell`]. Records are displayed in the
//! order they were supplied.

use serde::{Deserialize, Serialize};

use crate::id::ConcurrencyLimitId;
use crate::time::Timestamp;

/// A global concurrency limit as returned by the orchestration API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConcurrencyLimit {
    pub id: ConcurrencyLimitId,
    pub name: String,
    pub limit: u32,
    #[serde(default)]
    pub active_slots: u32,
    #[serde(default)]
    pub slot_decay_per_second: f64,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<Timestamp>,
}

impl GlobalConcurrencyLimit {
    /// Create an active limit with no slots taken and no decay.
    #[must_use]
    pub fn new(name: impl Into<String>, limit: u32) -> Self {
        Self {
            id: ConcurrencyLimitId::new(),
            name: name.into(),
            limit,
            active_slots: 0,
            slot_decay_per_second: 0.0,
            active: true,
            created: None,
            updated: None,
        }
    }
}

/// Columns of the concurrency limits table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Limit,
    ActiveSlots,
    SlotDecayPerSecond,
    Active,
}

impl Column {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Limit,
        Self::ActiveSlots,
        Self::SlotDecayPerSecond,
        Self::Active,
    ];

    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Limit => "Limit",
            Self::ActiveSlots => "Active Slots",
            Self::SlotDecayPerSecond => "Slot Decay Per Second",
            Self::Active => "Active",
        }
    }

    #[must_use]
    pub fn cell(self, limit: &GlobalConcurrencyLimit) -> Cell {
        match self {
            Self::Name => Cell::Text(limit.name.clone()),
            Self::Limit => Cell::Text(limit.limit.to_string()),
            Self::ActiveSlots => Cell::Text(limit.active_slots.to_string()),
            Self::SlotDecayPerSecond => Cell::Text(limit.slot_decay_per_second.to_string()),
            Self::Active => Cell::Indicator(limit.active),
        }
    }
}

/// A rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// On/off indicator.
    Indicator(bool),
}

/// The concurrency limits table over a list of records.
#[derive(Debug, Clone, Default)]
pub struct ConcurrencyLimitTable {
    limits: Vec<GlobalConcurrencyLimit>,
}

impl ConcurrencyLimitTable {
    #[must_use]
    pub fn new(limits: Vec<GlobalConcurrencyLimit>) -> Self {
        Self { limits }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    #[must_use]
    pub fn headers(&self) -> Vec<&'static str> {
        Column::ALL.iter().map(|column| column.header()).collect()
    }

    /// One row of cells per record, in column order.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.limits
            .iter()
            .map(|limit| Column::ALL.iter().map(|column| column.cell(limit)).collect())
            .collect()
    }
}
