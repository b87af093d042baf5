//! Shared JSON loading for directory snapshots.

use chainlens_core::error::DirectoryError;
use serde::de::{DeserializeOwned, Error as _};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// API responses come either as a bare array or wrapped in `{"data": [...]}`.
///
/// The envelope is picked by looking at the top-level value, so a bad entry
/// surfaces serde's own field-level message.
pub(crate) fn entries_from_str<T: DeserializeOwned>(s: &str) -> Result<Vec<T>, DirectoryError> {
    let value: Value = serde_json::from_str(s)?;
    let items = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove("data").ok_or_else(envelope_error)?,
        _ => return Err(envelope_error().into()),
    };
    Ok(Vec::<T>::deserialize(items)?)
}

fn envelope_error() -> serde_json::Error {
    serde_json::Error::custom("expected an array or an object with a `data` array")
}

pub(crate) fn entries_from_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DirectoryError> {
    let content = std::fs::read_to_string(path)?;
    entries_from_str(&content)
}

/// Reject blank or repeated ids, keeping the first-seen order.
pub(crate) fn check_unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DirectoryError> {
    let mut seen = std::collections::HashSet::new();
    for (index, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(DirectoryError::EmptyId { kind, index });
        }
        if !seen.insert(id.to_lowercase()) {
            return Err(DirectoryError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
