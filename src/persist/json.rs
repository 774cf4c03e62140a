//! JSON file codec for the item to quantity mapping.
//!
//! The file is a bare object (`{"apple": 7, ...}`). Key order in the file is
//! the store's iteration order in both directions.

use std::{
    fmt, fs,
    io::{self, Write},
    path::Path,
};

use hashbrown::HashMap;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
};
use tempfile::{Builder, NamedTempFile};

use crate::types::Quantity;

use super::{PersistError, PersistResult};

/// Ordered entries as they appear in the file.
struct StockEntries(Vec<(String, Quantity)>);

impl<'de> Deserialize<'de> for StockEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = StockEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping item names to integer quantities")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((item, quantity)) = map.next_entry::<String, Quantity>()? {
                    entries.push((item, quantity));
                }
                Ok(StockEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

struct OrderedStock<'a>(&'a [(&'a str, Quantity)]);

impl Serialize for OrderedStock<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(item, quantity)| (item, quantity)))
    }
}

/// Reads and validates the entries stored at `path`.
///
/// A duplicated key keeps its first position and its last value. Validation
/// runs on the merged entries.
pub fn read_stock(path: &Path) -> PersistResult<Vec<(String, Quantity)>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(PersistError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(PersistError::io(path, err)),
    };

    let StockEntries(entries) =
        serde_json::from_slice(&bytes).map_err(|source| PersistError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let entries = merge_duplicates(entries);
    if let Some((item, quantity)) = entries
        .iter()
        .find(|(item, quantity)| item.is_empty() || *quantity <= 0)
    {
        return Err(PersistError::InvalidEntry {
            path: path.to_path_buf(),
            item: item.clone(),
            quantity: *quantity,
        });
    }

    Ok(entries)
}

fn merge_duplicates(entries: Vec<(String, Quantity)>) -> Vec<(String, Quantity)> {
    let mut pos = HashMap::<String, usize>::with_capacity(entries.len());
    let mut merged: Vec<(String, Quantity)> = Vec::with_capacity(entries.len());
    for (item, quantity) in entries {
        match pos.get(&item) {
            Some(&idx) => merged[idx].1 = quantity,
            None => {
                pos.insert(item.clone(), merged.len());
                merged.push((item, quantity));
            }
        }
    }
    merged
}

/// Renders entries as a 2-space indented JSON object with a trailing newline.
pub fn encode_stock<'a, I>(entries: I) -> PersistResult<Vec<u8>>
where
    I: IntoIterator<Item = (&'a str, Quantity)>,
{
    let entries: Vec<(&str, Quantity)> = entries.into_iter().collect();
    let mut payload =
        serde_json::to_vec_pretty(&OrderedStock(&entries)).map_err(PersistError::Encode)?;
    payload.push(b'\n');
    Ok(payload)
}

/// Writes entries to `path`, replacing any existing file.
///
/// The payload goes to a temporary file in the destination directory which
/// is then renamed over `path`. An existing file keeps its permissions; a new
/// one gets the umask default.
pub fn write_stock<'a, I>(path: &Path, entries: I) -> PersistResult<()>
where
    I: IntoIterator<Item = (&'a str, Quantity)>,
{
    let payload = encode_stock(entries)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = temp_file_for(path, dir).map_err(|err| PersistError::io(path, err))?;
    tmp.write_all(&payload)
        .map_err(|err| PersistError::io(path, err))?;
    tmp.as_file()
        .sync_all()
        .map_err(|err| PersistError::io(path, err))?;
    tmp.persist(path)
        .map_err(|err| PersistError::io(path, err.error))?;
    Ok(())
}

fn temp_file_for(path: &Path, dir: &Path) -> io::Result<NamedTempFile> {
    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Creation mode is masked by the umask, like a plain `File::create`.
        builder.permissions(
            existing
                .clone()
                .unwrap_or_else(|| fs::Permissions::from_mode(0o666)),
        );
    }
    let tmp = builder.tempfile_in(dir)?;

    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms)?;
    }
    Ok(tmp)
}
