use chrono::NaiveDate;
use taskpad_core::store::load_tasks;
use taskpad_core::{
  KeyValueStorage,
  LoadOutcome,
  MemoryStorage,
  ModalState,
  StorageError,
  StoreError,
  Task,
  TaskDraft,
  TaskState,
  TaskStore
};

const KEY: &str = "tasks";

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::from_default_env()
    )
    .with_test_writer()
    .try_init();
}

fn assert_mirrored(
  store: &TaskStore<MemoryStorage>
) {
  let reloaded =
    load_tasks(store.storage(), KEY)
      .expect("reload persisted list");
  assert_eq!(reloaded, store.tasks());
}

/// Storage whose writes can be switched off, standing in for a full quota.
#[derive(Debug, Clone, Default)]
struct FlakyStorage {
  inner:        MemoryStorage,
  reject_write: bool
}

impl KeyValueStorage for FlakyStorage {
  fn get(
    &self,
    key: &str
  ) -> Result<Option<String>, StorageError> {
    self.inner.get(key)
  }

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> Result<(), StorageError> {
    if self.reject_write {
      return Err(StorageError::Write {
        key:    key.to_string(),
        reason: "QuotaExceededError"
          .to_string()
      });
    }
    self.inner.set(key, value)
  }
}

#[test]
fn buy_milk_scenario() {
  init_tracing();
  let (mut store, outcome) =
    TaskStore::open(MemoryStorage::new(), KEY);
  assert_eq!(outcome, LoadOutcome::Missing);

  let id = store
    .create(TaskDraft::new(
      "Buy milk",
      "",
      TaskState::NotDone,
      NaiveDate::from_ymd_opt(2024, 1, 1)
    ))
    .expect("create");
  assert_mirrored(&store);

  let raw = store
    .storage()
    .get(KEY)
    .expect("get")
    .expect("value written");
  let json: serde_json::Value =
    serde_json::from_str(&raw).expect("json");
  assert_eq!(json[0]["title"], "Buy milk");
  assert_eq!(json[0]["summary"], "");
  assert_eq!(json[0]["state"], "Not done");
  assert_eq!(json[0]["deadline"], "2024-01-01");

  store
    .edit(
      id,
      TaskDraft::new(
        "Buy oat milk",
        "",
        TaskState::InProgress,
        None
      )
    )
    .expect("edit");
  assert_mirrored(&store);
  let task = store.get(0).expect("task");
  assert_eq!(task.title, "Buy oat milk");
  assert_eq!(task.state, TaskState::InProgress);
  assert_eq!(task.deadline, None);
  assert_eq!(
    store
      .storage()
      .get(KEY)
      .expect("get")
      .map(|raw| raw.contains("\"deadline\":\"\"")),
    Some(true)
  );

  store.delete(id).expect("delete");
  assert_mirrored(&store);
  assert!(store.is_empty());
}

#[test]
fn every_mutation_keeps_storage_in_sync() {
  init_tracing();
  let (mut store, _) =
    TaskStore::open(MemoryStorage::new(), KEY);

  let mut ids = Vec::new();
  for n in 0..5 {
    let id = store
      .create(TaskDraft::new(
        format!("task {n}"),
        format!("summary {n}"),
        TaskState::NotDone,
        None
      ))
      .expect("create");
    ids.push(id);
    assert_mirrored(&store);
  }

  store
    .edit(
      ids[3],
      TaskDraft::new(
        "changed",
        "",
        TaskState::Done,
        NaiveDate::from_ymd_opt(2025, 6, 30)
      )
    )
    .expect("edit");
  assert_mirrored(&store);

  let before: Vec<Task> = store.tasks().to_vec();
  store.delete(ids[1]).expect("delete");
  assert_mirrored(&store);

  let expected: Vec<Task> = before
    .into_iter()
    .filter(|task| task.id != ids[1])
    .collect();
  assert_eq!(store.tasks(), expected.as_slice());
  assert_eq!(store.len(), 4);
}

#[test]
fn edit_changes_only_the_target() {
  let (mut store, _) =
    TaskStore::open(MemoryStorage::new(), KEY);
  for title in ["a", "b", "c"] {
    store
      .create(TaskDraft::new(
        title,
        "",
        TaskState::NotDone,
        None
      ))
      .expect("create");
  }
  let before = store.tasks().to_vec();
  let target = before[1].id;

  store
    .edit(
      target,
      TaskDraft::new(
        "b2",
        "now with summary",
        TaskState::Done,
        NaiveDate::from_ymd_opt(2024, 2, 29)
      )
    )
    .expect("edit");

  let after = load_tasks(store.storage(), KEY)
    .expect("reload");
  assert_eq!(after[0], before[0]);
  assert_eq!(after[2], before[2]);
  assert_eq!(after[1].id, target);
  assert_eq!(after[1].title, "b2");
  assert_eq!(after[1].summary, "now with summary");
  assert_eq!(after[1].state, TaskState::Done);
  assert_eq!(
    after[1].deadline,
    NaiveDate::from_ymd_opt(2024, 2, 29)
  );
}

#[test]
fn reopening_restores_saved_list() {
  let (mut store, _) =
    TaskStore::open(MemoryStorage::new(), KEY);
  store
    .create(TaskDraft::new(
      "persisted",
      "",
      TaskState::NotDone,
      None
    ))
    .expect("create");
  let saved = store.tasks().to_vec();

  let (reopened, outcome) =
    TaskStore::open(store.storage().clone(), KEY);
  assert_eq!(outcome, LoadOutcome::Restored(1));
  assert_eq!(reopened.tasks(), saved.as_slice());
}

#[test]
fn legacy_payload_without_ids_is_loaded() {
  let raw = r#"[
    {"title":"Buy milk","summary":"","state":"Not done","deadline":"2024-01-01"},
    {"title":"Walk dog","summary":"twice","state":"Done","deadline":""}
  ]"#;
  let (store, outcome) = TaskStore::open(
    MemoryStorage::new().with_entry(KEY, raw),
    KEY
  );

  assert_eq!(outcome, LoadOutcome::Restored(2));
  assert_eq!(store.tasks()[1].title, "Walk dog");
  assert_ne!(store.tasks()[0].id, store.tasks()[1].id);
}

#[test]
fn corrupt_payload_never_panics() {
  for raw in ["not json", "{}", "[{\"summary\":\"no title\"}]", "[1,2]"] {
    let (store, outcome) = TaskStore::open(
      MemoryStorage::new().with_entry(KEY, raw),
      KEY
    );
    assert!(store.is_empty(), "payload {raw:?}");
    assert!(
      matches!(
        outcome,
        LoadOutcome::Discarded(StoreError::Corrupt { .. })
      ),
      "payload {raw:?}"
    );
  }
}

#[test]
fn failed_write_leaves_memory_and_storage_unchanged() {
  init_tracing();
  let (mut store, _) =
    TaskStore::open(FlakyStorage::default(), KEY);
  let id = store
    .create(TaskDraft::new(
      "stays",
      "",
      TaskState::NotDone,
      None
    ))
    .expect("create");
  let before = store.tasks().to_vec();

  let mut flaky = store.storage().clone();
  flaky.reject_write = true;
  let (mut store, _) = TaskStore::open(flaky, KEY);

  let err = store
    .create(TaskDraft::new(
      "lost",
      "",
      TaskState::NotDone,
      None
    ))
    .expect_err("write rejected");
  assert!(matches!(
    err,
    StoreError::Storage(StorageError::Write { .. })
  ));
  assert_eq!(store.tasks(), before.as_slice());

  assert!(store.delete(id).is_err());
  assert_eq!(store.tasks(), before.as_slice());
  assert_eq!(
    load_tasks(store.storage(), KEY).expect("reload"),
    before
  );
}

#[test]
fn modal_flow_create_then_edit() {
  let (mut store, _) =
    TaskStore::open(MemoryStorage::new(), KEY);

  let modal = ModalState::create().update(|form| {
    form
      .with_title("Write report")
      .with_state(TaskState::InProgress)
  });
  let id = modal.submit(&mut store).expect("create");

  let task = store.find(id).expect("task").clone();
  let modal = ModalState::edit(&task)
    .update(|form| form.with_summary("draft done"));
  modal.submit(&mut store).expect("save");

  assert_mirrored(&store);
  let saved = store.find(id).expect("task");
  assert_eq!(saved.title, "Write report");
  assert_eq!(saved.summary, "draft done");
  assert_eq!(saved.state, TaskState::InProgress);
}
