//! Shared primitive types and defaults.

/// Item quantity as seen at the API boundary.
///
/// Signed so that negative inputs can be expressed and rejected; stored
/// quantities are always positive.
pub type Quantity = i64;

/// Persistence path used when none is configured.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Threshold below which an item counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;
