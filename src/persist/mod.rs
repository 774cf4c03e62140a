pub mod json;

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::types::Quantity;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("File '{}' not found", .path.display())]
    NotFound { path: PathBuf },
    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed inventory file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid entry in '{}': {item:?} -> {quantity}", .path.display())]
    InvalidEntry {
        path: PathBuf,
        item: String,
        quantity: Quantity,
    },
    #[error("failed to encode inventory: {0}")]
    Encode(#[source] serde_json::Error),
}

impl PersistError {
    /// True when the caller may carry on with an empty inventory.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type PersistResult<T> = Result<T, PersistError>;
