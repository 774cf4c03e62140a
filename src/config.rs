//! Runtime configuration for the command-line front end.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_INVENTORY_PATH, DEFAULT_LOW_STOCK_THRESHOLD, Quantity};

/// `tracing` filter used when neither a directive nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Inventory file, relative to the working directory unless absolute.
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Items strictly below this quantity are reported as low.
    #[serde(default = "default_threshold")]
    pub low_stock_threshold: Quantity,
    /// Explicit `tracing` env-filter directive, overriding `RUST_LOG`.
    #[serde(default)]
    pub log_filter: Option<String>,
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_INVENTORY_PATH)
}

fn default_threshold() -> Quantity {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            low_stock_threshold: default_threshold(),
            log_filter: None,
        }
    }
}
