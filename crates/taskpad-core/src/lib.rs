//! Domain logic for the Taskpad task list editor.
//!
//! Everything here is platform-neutral; the browser binding lives in the
//! `taskpad_ui` crate and plugs in through [`storage::KeyValueStorage`].

pub mod config;
pub mod error;
pub mod form;
pub mod hotkey;
pub mod storage;
pub mod store;
pub mod task;
pub mod theme;
pub mod view;

pub use config::AppConfig;
pub use error::{
  StorageError,
  StoreError
};
pub use form::{
  ModalMode,
  ModalState,
  TaskForm
};
pub use storage::{
  KeyValueStorage,
  MemoryStorage
};
pub use store::{
  LoadOutcome,
  TaskStore
};
pub use task::{
  Task,
  TaskDraft,
  TaskId,
  TaskState
};
pub use theme::ThemePreference;
