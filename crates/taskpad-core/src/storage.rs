use std::collections::BTreeMap;

use crate::error::StorageError;

/// String key-value slot store, the shape of `window.localStorage`.
///
/// Writes replace the whole value under a key.
pub trait KeyValueStorage {
  fn get(
    &self,
    key: &str
  ) -> Result<Option<String>, StorageError>;

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> Result<(), StorageError>;
}

/// In-process storage used by tests and as the fallback when the browser
/// refuses access to `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
  entries: BTreeMap<String, String>
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_entry(
    mut self,
    key: &str,
    value: &str
  ) -> Self {
    self
      .entries
      .insert(key.to_string(), value.to_string());
    self
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl KeyValueStorage for MemoryStorage {
  fn get(
    &self,
    key: &str
  ) -> Result<Option<String>, StorageError> {
    Ok(self.entries.get(key).cloned())
  }

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> Result<(), StorageError> {
    self
      .entries
      .insert(key.to_string(), value.to_string());
    Ok(())
  }
}
