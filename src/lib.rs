//! In-memory inventory counts with JSON file persistence.
//!
//! # Examples
//!
//! ```
//! use stockbook::core::store::{InventoryStore, StoreError};
//!
//! let mut store = InventoryStore::new();
//! let mut logs = Vec::new();
//! store.add("apple", 10, Some(&mut logs));
//! store.add("banana", 2, None);
//! store.add("", 5, None); // rejected, no effect
//!
//! store.remove("apple", 3).expect("apple is stocked");
//! assert_eq!(store.get_quantity("apple"), 7);
//! assert_eq!(store.check_low_items(5), vec!["banana"]);
//! assert_eq!(
//!     store.remove("orange", 1),
//!     Err(StoreError::ItemNotFound("orange".to_string()))
//! );
//! assert_eq!(logs.len(), 1);
//! ```
//!
//! Persisting to disk:
//! ```no_run
//! use stockbook::{core::store::InventoryStore, types::DEFAULT_INVENTORY_PATH};
//!
//! let mut store = InventoryStore::new();
//! store.add("apple", 7, None);
//! store.save_to(DEFAULT_INVENTORY_PATH).expect("save");
//!
//! let mut reloaded = InventoryStore::new();
//! match reloaded.load_from(DEFAULT_INVENTORY_PATH) {
//!     Ok(()) => {}
//!     Err(e) if e.is_recoverable() => {}
//!     Err(e) => panic!("{e}"),
//! }
//! reloaded.report().expect("stdout");
//! ```

/// Command-line definitions for the `stockbook` binary.
pub mod cli;
/// Front-end configuration.
pub mod config;
/// Core in-memory store.
pub mod core;
/// Mutation log entries.
pub mod log;
/// Persistence errors and the JSON file codec.
pub mod persist;
/// Items report rendering.
pub mod report;
/// Tracing initialisation.
pub mod telemetry;
/// Shared primitive types and defaults.
pub mod types;
