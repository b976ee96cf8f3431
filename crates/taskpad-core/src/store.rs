use tracing::{
  debug,
  info,
  warn
};

use crate::error::StoreError;
use crate::storage::KeyValueStorage;
use crate::task::{
  Task,
  TaskDraft,
  TaskId
};

/// What `TaskStore::open` found in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
  Missing,
  Restored(usize),
  /// The stored value could not be parsed; the store starts empty and the
  /// next write replaces it.
  Discarded(StoreError)
}

/// Slot that keeps a copy of a task list `TaskStore::open` had to discard.
pub fn backup_key(key: &str) -> String {
  format!("{key}.corrupt")
}

/// Reads the task list under `key`. An absent slot is an empty list.
#[tracing::instrument(skip(storage))]
pub fn load_tasks<S>(
  storage: &S,
  key: &str
) -> Result<Vec<Task>, StoreError>
where
  S: KeyValueStorage
{
  let Some(raw) = storage.get(key)?
  else {
    debug!("no saved tasks");
    return Ok(Vec::new());
  };

  if raw.trim().is_empty() {
    return Ok(Vec::new());
  }

  serde_json::from_str::<Vec<Task>>(&raw)
    .map_err(|error| {
      StoreError::Corrupt {
        key:    key.to_string(),
        reason: error.to_string()
      }
    })
}

/// Ordered task list mirrored to one storage slot.
///
/// Every mutation serializes the next snapshot and writes it before the
/// snapshot becomes current, so memory and storage never disagree.
#[derive(Debug, Clone)]
pub struct TaskStore<S> {
  storage: S,
  key:     String,
  tasks:   Vec<Task>
}

impl<S> TaskStore<S>
where
  S: KeyValueStorage
{
  #[tracing::instrument(skip(storage))]
  pub fn open(
    mut storage: S,
    key: &str
  ) -> (Self, LoadOutcome) {
    let (tasks, outcome) =
      match load_tasks(&storage, key) {
        | Ok(tasks) if tasks.is_empty() => {
          (tasks, LoadOutcome::Missing)
        }
        | Ok(tasks) => {
          let count = tasks.len();
          (
            tasks,
            LoadOutcome::Restored(count)
          )
        }
        | Err(error) => {
          warn!(
            %error,
            "discarding unreadable task list"
          );
          if matches!(
            error,
            StoreError::Corrupt { .. }
          ) {
            backup_payload(&mut storage, key);
          }
          (
            Vec::new(),
            LoadOutcome::Discarded(error)
          )
        }
      };

    info!(
      key,
      count = tasks.len(),
      "opened task store"
    );

    (
      Self {
        storage,
        key: key.to_string(),
        tasks
      },
      outcome
    )
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn get(
    &self,
    index: usize
  ) -> Option<&Task> {
    self.tasks.get(index)
  }

  pub fn find(
    &self,
    id: TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn position(
    &self,
    id: TaskId
  ) -> Option<usize> {
    self
      .tasks
      .iter()
      .position(|task| task.id == id)
  }

  pub fn storage(&self) -> &S {
    &self.storage
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  #[tracing::instrument(
    skip(self, draft),
    fields(title = %draft.title)
  )]
  pub fn create(
    &mut self,
    draft: TaskDraft
  ) -> Result<TaskId, StoreError> {
    let draft = require_title(draft)?;
    let task = Task::from_draft(draft);
    let id = task.id;

    let mut next = self.tasks.clone();
    next.push(task);
    self.commit(next)?;

    info!(%id, count = self.tasks.len(), "created task");
    Ok(id)
  }

  #[tracing::instrument(
    skip(self, draft),
    fields(id = %id)
  )]
  pub fn edit(
    &mut self,
    id: TaskId,
    draft: TaskDraft
  ) -> Result<(), StoreError> {
    let draft = require_title(draft)?;
    let index = self
      .position(id)
      .ok_or(StoreError::TaskNotFound(id))?;

    let mut next = self.tasks.clone();
    next[index].apply(draft);
    self.commit(next)?;

    info!(index, "edited task");
    Ok(())
  }

  #[tracing::instrument(
    skip(self),
    fields(id = %id)
  )]
  pub fn delete(
    &mut self,
    id: TaskId
  ) -> Result<Task, StoreError> {
    let index = self
      .position(id)
      .ok_or(StoreError::TaskNotFound(id))?;

    let mut next = self.tasks.clone();
    let removed = next.remove(index);
    self.commit(next)?;

    info!(index, count = self.tasks.len(), "deleted task");
    Ok(removed)
  }

  /// Writes the current list again, overwriting whatever the slot holds.
  pub fn persist(
    &mut self
  ) -> Result<(), StoreError> {
    write_tasks(
      &mut self.storage,
      &self.key,
      &self.tasks
    )
  }

  fn commit(
    &mut self,
    next: Vec<Task>
  ) -> Result<(), StoreError> {
    write_tasks(
      &mut self.storage,
      &self.key,
      &next
    )?;
    self.tasks = next;
    Ok(())
  }
}

fn write_tasks<S>(
  storage: &mut S,
  key: &str,
  tasks: &[Task]
) -> Result<(), StoreError>
where
  S: KeyValueStorage
{
  let json = serde_json::to_string(tasks)
    .map_err(|error| {
      StoreError::Encode(error.to_string())
    })?;

  storage.set(key, &json).map_err(|error| {
    warn!(%error, key, "task list write failed");
    StoreError::from(error)
  })?;

  debug!(
    key,
    bytes = json.len(),
    count = tasks.len(),
    "persisted task list"
  );
  Ok(())
}

/// Copies the raw value under `key` aside before a later write replaces it.
fn backup_payload<S>(
  storage: &mut S,
  key: &str
) where
  S: KeyValueStorage
{
  let backup = backup_key(key);
  let copied = storage
    .get(key)
    .and_then(|raw| match raw {
      | Some(raw) => {
        storage.set(&backup, &raw)
      }
      | None => Ok(())
    });
  match copied {
    | Ok(()) => {
      info!(
        backup = %backup,
        "kept copy of discarded task list"
      )
    }
    | Err(error) => {
      warn!(
        %error,
        backup = %backup,
        "could not keep copy of discarded task list"
      )
    }
  }
}

fn require_title(
  mut draft: TaskDraft
) -> Result<TaskDraft, StoreError> {
  let title = draft.title.trim();
  if title.is_empty() {
    return Err(StoreError::MissingTitle);
  }
  draft.title = title.to_string();
  Ok(draft)
}
