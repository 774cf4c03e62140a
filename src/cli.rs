//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    config::StoreConfig,
    types::{DEFAULT_INVENTORY_PATH, DEFAULT_LOW_STOCK_THRESHOLD, Quantity},
};

/// Track inventory item counts in a JSON file.
#[derive(Debug, Parser)]
#[command(name = "stockbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Inventory file
    #[arg(short, long, global = true, env = "STOCKBOOK_FILE", default_value = DEFAULT_INVENTORY_PATH)]
    pub file: PathBuf,

    /// Report items strictly below this quantity as low
    #[arg(short, long, global = true, env = "STOCKBOOK_LOW_THRESHOLD", default_value_t = DEFAULT_LOW_STOCK_THRESHOLD)]
    pub threshold: Quantity,

    /// Log filter directive (e.g. `debug`, `stockbook=trace`); falls back to
    /// `RUST_LOG`, then `info`
    #[arg(long, global = true, env = "STOCKBOOK_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the demonstration flow (default)
    Demo,

    /// Add units of an item
    Add {
        item: String,
        #[arg(allow_negative_numbers = true)]
        quantity: Quantity,
    },

    /// Remove units of an item
    Remove {
        item: String,
        #[arg(allow_negative_numbers = true)]
        quantity: Quantity,
    },

    /// Print the quantity held for an item
    Qty { item: String },

    /// List items below the low-stock threshold
    Low,

    /// Print the items report
    Report,
}

impl Cli {
    pub fn config(&self) -> StoreConfig {
        StoreConfig {
            path: self.file.clone(),
            low_stock_threshold: self.threshold,
            log_filter: self.log_level.clone(),
        }
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Demo)
    }
}
