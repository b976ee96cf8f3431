use thiserror::Error;

use crate::task::TaskId;

/// Failure reported by a [`crate::storage::KeyValueStorage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
  #[error("failed to read key '{key}': {reason}")]
  Read { key: String, reason: String },
  #[error("failed to write key '{key}': {reason}")]
  Write { key: String, reason: String }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
  #[error("title is required")]
  MissingTitle,
  #[error(
    "deadline '{0}' is not a date (expected YYYY-MM-DD)"
  )]
  InvalidDeadline(String),
  #[error("task not found: {0}")]
  TaskNotFound(TaskId),
  #[error(
    "saved tasks under '{key}' could not be read: {reason}"
  )]
  Corrupt { key: String, reason: String },
  #[error("failed to serialize tasks: {0}")]
  Encode(String),
  #[error(transparent)]
  Storage(#[from] StorageError)
}

impl StoreError {
  /// Validation failures keep the form open without touching storage.
  pub fn is_validation(&self) -> bool {
    matches!(
      self,
      Self::MissingTitle
        | Self::InvalidDeadline(_)
    )
  }
}
