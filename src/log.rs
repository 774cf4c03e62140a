//! Timestamped mutation records handed back to callers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Quantity;

/// One accepted mutation, appended to a caller-owned log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Wall-clock time the mutation was applied.
    pub timestamp: DateTime<Utc>,
    /// Human-readable description of the mutation.
    pub message: String,
}

impl LogEntry {
    /// Builds the entry recorded for an accepted add.
    pub fn added(item: &str, quantity: Quantity) -> Self {
        Self {
            timestamp: Utc::now(),
            message: format!("Added {quantity} of {item}"),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.timestamp, self.message)
    }
}
