use taskpad_core::{
  KeyValueStorage,
  MemoryStorage,
  StorageError
};

/// `window.localStorage`, or an in-memory stand-in when the browser
/// refuses access (private mode, disabled storage).
#[derive(Debug, Clone)]
pub enum BrowserStorage {
  Local(web_sys::Storage),
  Volatile(MemoryStorage)
}

impl BrowserStorage {
  pub fn open() -> Self {
    let storage = web_sys::window()
      .and_then(|window| {
        window
          .local_storage()
          .ok()
          .flatten()
      });

    match storage {
      | Some(storage) => {
        Self::Local(storage)
      }
      | None => {
        tracing::warn!(
          "localStorage unavailable; \
           changes will not survive a \
           reload"
        );
        Self::Volatile(MemoryStorage::new())
      }
    }
  }

  pub fn is_volatile(&self) -> bool {
    matches!(self, Self::Volatile(_))
  }
}

impl KeyValueStorage for BrowserStorage {
  fn get(
    &self,
    key: &str
  ) -> Result<Option<String>, StorageError> {
    match self {
      | Self::Local(storage) => {
        storage.get_item(key).map_err(
          |error| StorageError::Read {
            key:    key.to_string(),
            reason: format!("{error:?}")
          }
        )
      }
      | Self::Volatile(memory) => {
        memory.get(key)
      }
    }
  }

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> Result<(), StorageError> {
    match self {
      | Self::Local(storage) => {
        storage
          .set_item(key, value)
          .map_err(|error| {
            StorageError::Write {
              key:    key.to_string(),
              reason: format!("{error:?}")
            }
          })
      }
      | Self::Volatile(memory) => {
        memory.set(key, value)
      }
    }
  }
}
