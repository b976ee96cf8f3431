use std::fmt;

use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

pub const DEADLINE_FORMAT: &str =
  "%Y-%m-%d";

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for TaskId {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
)]
pub enum TaskState {
  #[default]
  #[serde(rename = "Not done")]
  NotDone,
  #[serde(rename = "Doing right now")]
  InProgress,
  #[serde(rename = "Done")]
  Done
}

impl TaskState {
  pub const ALL: [Self; 3] = [
    Self::NotDone,
    Self::InProgress,
    Self::Done
  ];

  pub fn label(self) -> &'static str {
    match self {
      | Self::NotDone => "Not done",
      | Self::InProgress => {
        "Doing right now"
      }
      | Self::Done => "Done"
    }
  }

  pub fn from_label(
    raw: &str
  ) -> Option<Self> {
    Self::ALL.into_iter().find(
      |state| state.label() == raw
    )
  }
}

impl fmt::Display for TaskState {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// A single entry of the task list.
///
/// Records written before ids existed carry no `id` field; they get a
/// fresh one when deserialized.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Task {
  #[serde(default)]
  pub id:       TaskId,
  pub title:    String,
  #[serde(default)]
  pub summary:  String,
  #[serde(default)]
  pub state:    TaskState,
  #[serde(
    default,
    with = "deadline_serde"
  )]
  pub deadline: Option<NaiveDate>
}

impl Task {
  pub fn from_draft(
    draft: TaskDraft
  ) -> Self {
    Self {
      id:       TaskId::new(),
      title:    draft.title,
      summary:  draft.summary,
      state:    draft.state,
      deadline: draft.deadline
    }
  }

  pub fn apply(
    &mut self,
    draft: TaskDraft
  ) {
    self.title = draft.title;
    self.summary = draft.summary;
    self.state = draft.state;
    self.deadline = draft.deadline;
  }

  pub fn deadline_text(&self) -> String {
    format_deadline(self.deadline)
  }
}

/// The four user-editable fields of a task, already validated.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct TaskDraft {
  pub title:    String,
  pub summary:  String,
  pub state:    TaskState,
  pub deadline: Option<NaiveDate>
}

impl TaskDraft {
  pub fn new(
    title: impl Into<String>,
    summary: impl Into<String>,
    state: TaskState,
    deadline: Option<NaiveDate>
  ) -> Self {
    Self {
      title: title.into(),
      summary: summary.into(),
      state,
      deadline
    }
  }
}

pub fn format_deadline(
  deadline: Option<NaiveDate>
) -> String {
  deadline
    .map(|date| {
      date
        .format(DEADLINE_FORMAT)
        .to_string()
    })
    .unwrap_or_default()
}

/// Empty or whitespace input means "no deadline".
pub fn parse_deadline(
  raw: &str
) -> Result<Option<NaiveDate>, chrono::ParseError>
{
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Ok(None);
  }
  NaiveDate::parse_from_str(
    trimmed,
    DEADLINE_FORMAT
  )
  .map(Some)
}

/// Saved deadlines that are not `YYYY-MM-DD` read back as `None` so one bad
/// record never costs the rest of the list.
pub mod deadline_serde {
  use chrono::NaiveDate;
  use serde::{
    Deserialize,
    Deserializer,
    Serializer
  };

  pub fn serialize<S>(
    deadline: &Option<NaiveDate>,
    serializer: S
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer
  {
    serializer.serialize_str(
      &super::format_deadline(
        *deadline
      )
    )
  }

  pub fn deserialize<'de, D>(
    deserializer: D
  ) -> Result<Option<NaiveDate>, D::Error>
  where
    D: Deserializer<'de>
  {
    let raw =
      Option::<String>::deserialize(
        deserializer
      )?;
    let Some(value) = raw else {
      return Ok(None);
    };
    match super::parse_deadline(&value) {
      | Ok(deadline) => Ok(deadline),
      | Err(error) => {
        tracing::warn!(
          value = %value,
          %error,
          "dropping unreadable deadline"
        );
        Ok(None)
      }
    }
  }
}
