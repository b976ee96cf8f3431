use crate::error::StoreError;
use crate::storage::KeyValueStorage;
use crate::store::TaskStore;
use crate::task::{
  Task,
  TaskDraft,
  TaskId,
  TaskState,
  parse_deadline
};

/// Raw field values as typed into the modal.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct TaskForm {
  pub title:    String,
  pub summary:  String,
  pub state:    TaskState,
  pub deadline: String
}

impl TaskForm {
  pub fn from_task(task: &Task) -> Self {
    Self {
      title:    task.title.clone(),
      summary:  task.summary.clone(),
      state:    task.state,
      deadline: task.deadline_text()
    }
  }

  pub fn with_title(
    self,
    title: impl Into<String>
  ) -> Self {
    Self {
      title: title.into(),
      ..self
    }
  }

  pub fn with_summary(
    self,
    summary: impl Into<String>
  ) -> Self {
    Self {
      summary: summary.into(),
      ..self
    }
  }

  pub fn with_state(
    self,
    state: TaskState
  ) -> Self {
    Self { state, ..self }
  }

  pub fn with_deadline(
    self,
    deadline: impl Into<String>
  ) -> Self {
    Self {
      deadline: deadline.into(),
      ..self
    }
  }

  pub fn title_missing(&self) -> bool {
    self.title.trim().is_empty()
  }

  pub fn to_draft(
    &self
  ) -> Result<TaskDraft, StoreError> {
    if self.title_missing() {
      return Err(StoreError::MissingTitle);
    }
    let deadline =
      parse_deadline(&self.deadline)
        .map_err(|_| {
          StoreError::InvalidDeadline(
            self.deadline.trim().to_string()
          )
        })?;

    Ok(TaskDraft::new(
      self.title.trim(),
      self.summary.clone(),
      self.state,
      deadline
    ))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
  Create,
  Edit(TaskId)
}

/// An open modal. Closed is `None` at the call site, so create and edit
/// can never be open at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
  pub mode:  ModalMode,
  pub form:  TaskForm,
  pub error: Option<String>
}

impl ModalState {
  pub fn create() -> Self {
    Self {
      mode:  ModalMode::Create,
      form:  TaskForm::default(),
      error: None
    }
  }

  pub fn edit(task: &Task) -> Self {
    Self {
      mode:  ModalMode::Edit(task.id),
      form:  TaskForm::from_task(task),
      error: None
    }
  }

  pub fn title(&self) -> &'static str {
    match self.mode {
      | ModalMode::Create => "New Task",
      | ModalMode::Edit(_) => "Edit Task"
    }
  }

  pub fn submit_label(
    &self
  ) -> &'static str {
    match self.mode {
      | ModalMode::Create => "Create Task",
      | ModalMode::Edit(_) => {
        "Save Changes"
      }
    }
  }

  /// Replaces the form and clears any previous error.
  pub fn update(
    self,
    edit: impl FnOnce(TaskForm) -> TaskForm
  ) -> Self {
    Self {
      form: edit(self.form),
      error: None,
      ..self
    }
  }

  pub fn with_error(
    self,
    error: &StoreError
  ) -> Self {
    Self {
      error: Some(error.to_string()),
      ..self
    }
  }

  /// Commits the form through the store.
  ///
  /// On success the caller closes the modal. On failure nothing was
  /// written and the caller keeps the modal open with the error shown.
  pub fn submit<S>(
    &self,
    store: &mut TaskStore<S>
  ) -> Result<TaskId, StoreError>
  where
    S: KeyValueStorage
  {
    let draft = self.form.to_draft()?;
    match self.mode {
      | ModalMode::Create => {
        store.create(draft)
      }
      | ModalMode::Edit(id) => {
        store.edit(id, draft)?;
        Ok(id)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::storage::MemoryStorage;

  fn empty_store()
  -> TaskStore<MemoryStorage> {
    TaskStore::open(
      MemoryStorage::new(),
      "tasks"
    )
    .0
  }

  #[test]
  fn create_modal_starts_blank() {
    let modal = ModalState::create();
    assert_eq!(modal.mode, ModalMode::Create);
    assert_eq!(
      modal.form,
      TaskForm::default()
    );
    assert_eq!(
      modal.form.state,
      TaskState::NotDone
    );
    assert_eq!(
      modal.submit_label(),
      "Create Task"
    );
  }

  #[test]
  fn edit_modal_copies_task_fields() {
    let mut store = empty_store();
    let id = store
      .create(TaskDraft::new(
        "Pay rent",
        "before friday",
        TaskState::InProgress,
        NaiveDate::from_ymd_opt(
          2024, 3, 1
        )
      ))
      .expect("create");
    let task =
      store.find(id).expect("task exists");

    let modal = ModalState::edit(task);
    assert_eq!(modal.mode, ModalMode::Edit(id));
    assert_eq!(modal.form.title, "Pay rent");
    assert_eq!(
      modal.form.summary,
      "before friday"
    );
    assert_eq!(
      modal.form.state,
      TaskState::InProgress
    );
    assert_eq!(
      modal.form.deadline,
      "2024-03-01"
    );
    assert_eq!(modal.title(), "Edit Task");
  }

  #[test]
  fn submit_create_adds_task() {
    let mut store = empty_store();
    let modal = ModalState::create()
      .update(|form| {
        form
          .with_title("Buy milk")
          .with_deadline("2024-01-01")
      });

    let id = modal
      .submit(&mut store)
      .expect("submit");
    let task = store.find(id).expect("task");
    assert_eq!(task.title, "Buy milk");
    assert_eq!(
      task.deadline,
      NaiveDate::from_ymd_opt(
        2024, 1, 1
      )
    );
  }

  #[test]
  fn submit_without_title_keeps_store_unchanged(
  ) {
    let mut store = empty_store();
    let modal = ModalState::create()
      .update(|form| {
        form.with_summary("orphan summary")
      });

    let err = modal
      .submit(&mut store)
      .expect_err("title required");
    assert!(err.is_validation());
    assert!(store.is_empty());

    let shown = modal.with_error(&err);
    assert_eq!(
      shown.error.as_deref(),
      Some("title is required")
    );
    assert_eq!(
      shown.form.summary,
      "orphan summary"
    );
  }

  #[test]
  fn edit_path_also_requires_title() {
    let mut store = empty_store();
    let id = store
      .create(TaskDraft::new(
        "keep me",
        "",
        TaskState::NotDone,
        None
      ))
      .expect("create");
    let task = store
      .find(id)
      .expect("task")
      .clone();

    let modal = ModalState::edit(&task)
      .update(|form| form.with_title(""));
    assert_eq!(
      modal.submit(&mut store),
      Err(StoreError::MissingTitle)
    );
    assert_eq!(
      store.find(id),
      Some(&task)
    );
  }

  #[test]
  fn bad_deadline_text_is_reported() {
    let form = TaskForm::default()
      .with_title("x")
      .with_deadline("someday");
    assert_eq!(
      form.to_draft(),
      Err(StoreError::InvalidDeadline(
        "someday".to_string()
      ))
    );
  }

  #[test]
  fn update_clears_error() {
    let modal = ModalState::create()
      .with_error(&StoreError::MissingTitle)
      .update(|form| form.with_title("t"));
    assert_eq!(modal.error, None);
    assert_eq!(modal.form.title, "t");
  }
}
