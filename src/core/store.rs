use std::{io, path::Path};

use hashbrown::HashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    log::LogEntry,
    persist::{PersistError, PersistResult, json},
    report,
    types::Quantity,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Item '{0}' not found in inventory")]
    ItemNotFound(String),
}

/// Reason an add was refused by [`validate_add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("item name is empty")]
    EmptyItem,
    #[error("quantity {0} is negative")]
    NegativeQuantity(Quantity),
}

/// Checks the inputs of [`InventoryStore::add`].
pub fn validate_add(item: &str, quantity: Quantity) -> Result<(), Rejection> {
    if item.is_empty() {
        return Err(Rejection::EmptyItem);
    }
    if quantity < 0 {
        return Err(Rejection::NegativeQuantity(quantity));
    }
    Ok(())
}

/// Item name to quantity mapping, iterated in insertion order.
///
/// Every key is a non-empty name mapped to a quantity of at least one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    stock: HashMap<String, Quantity>,
    order: Vec<String>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `item`.
    ///
    /// Invalid input is dropped without mutating the store or appending to
    /// `logs`; use [`validate_add`] to learn why.
    pub fn add(&mut self, item: &str, quantity: Quantity, logs: Option<&mut Vec<LogEntry>>) {
        if let Err(rejection) = validate_add(item, quantity) {
            debug!(item, quantity, %rejection, "add rejected");
            return;
        }

        let current = self.get_quantity(item);
        let updated = current.saturating_add(quantity);
        if updated > 0 {
            self.set(item, updated);
        }
        debug!(item, quantity, total = updated, "added stock");

        if let Some(logs) = logs {
            logs.push(LogEntry::added(item, quantity));
        }
    }

    /// Subtracts `quantity` units of `item`, deleting the item once it
    /// reaches zero or less.
    ///
    /// `quantity` is not bounded: removing more than is held deletes the
    /// item and a negative value adds stock.
    pub fn remove(&mut self, item: &str, quantity: Quantity) -> Result<(), StoreError> {
        let current = self
            .stock
            .get_mut(item)
            .ok_or_else(|| StoreError::ItemNotFound(item.to_string()))?;

        *current = current.saturating_sub(quantity);
        let remaining = *current;
        if remaining <= 0 {
            self.delete(item);
        }
        debug!(item, quantity, remaining = remaining.max(0), "removed stock");
        Ok(())
    }

    pub fn get_quantity(&self, item: &str) -> Quantity {
        self.stock.get(item).copied().unwrap_or(0)
    }

    /// Items whose quantity is strictly below `threshold`, in store order.
    pub fn check_low_items(&self, threshold: Quantity) -> Vec<&str> {
        self.iter()
            .filter(|(_, quantity)| *quantity < threshold)
            .map(|(item, _)| item)
            .collect()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(item, quantity)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> + '_ {
        self.order.iter().filter_map(|item| {
            self.stock
                .get(item)
                .map(|quantity| (item.as_str(), *quantity))
        })
    }

    pub fn clear(&mut self) {
        self.stock.clear();
        self.order.clear();
    }

    /// Replaces the whole mapping with the JSON object stored at `path`.
    ///
    /// A missing file empties the store and returns
    /// [`PersistError::NotFound`]. Every other failure leaves the store as it
    /// was.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> PersistResult<()> {
        let path = path.as_ref();
        match json::read_stock(path) {
            Ok(entries) => {
                self.clear();
                for (item, quantity) in entries {
                    self.set(&item, quantity);
                }
                info!(path = %path.display(), items = self.len(), "loaded inventory");
                Ok(())
            }
            Err(err @ PersistError::NotFound { .. }) => {
                warn!(path = %path.display(), "inventory file not found, starting empty");
                self.clear();
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Writes the mapping to `path` as pretty-printed JSON.
    pub fn save_to(&self, path: impl AsRef<Path>) -> PersistResult<()> {
        let path = path.as_ref();
        json::write_stock(path, self.iter())?;
        info!(path = %path.display(), items = self.len(), "saved inventory");
        Ok(())
    }

    /// Prints the items report to standard output.
    pub fn report(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(&mut out)
    }

    pub fn write_report<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        report::write_report(out, self.iter())
    }

    fn set(&mut self, item: &str, quantity: Quantity) {
        match self.stock.get_mut(item) {
            Some(current) => *current = quantity,
            None => {
                self.stock.insert(item.to_string(), quantity);
                self.order.push(item.to_string());
            }
        }
    }

    fn delete(&mut self, item: &str) {
        self.stock.remove(item);
        if let Some(pos) = self.order.iter().position(|x| x == item) {
            self.order.remove(pos);
        }
    }
}
