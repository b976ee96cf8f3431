use crate::task::{
  Task,
  TaskId,
  TaskState
};

pub const EMPTY_LIST_TEXT: &str =
  "You have no tasks";
pub const MISSING_SUMMARY_TEXT: &str =
  "No summary provided";
pub const MISSING_DEADLINE_TEXT: &str =
  "No deadline set";

/// Display-ready fields for one task card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
  pub id:              TaskId,
  pub title:           String,
  pub summary:         String,
  pub summary_missing: bool,
  pub state:           TaskState,
  pub deadline:        String
}

impl TaskCard {
  pub fn from_task(task: &Task) -> Self {
    let summary_missing =
      task.summary.is_empty();
    Self {
      id: task.id,
      title: task.title.clone(),
      summary: if summary_missing {
        MISSING_SUMMARY_TEXT.to_string()
      } else {
        task.summary.clone()
      },
      summary_missing,
      state: task.state,
      deadline: match task.deadline {
        | Some(_) => task.deadline_text(),
        | None => {
          MISSING_DEADLINE_TEXT.to_string()
        }
      }
    }
  }

  pub fn state_line(&self) -> String {
    format!("State: {}", self.state)
  }

  pub fn deadline_line(&self) -> String {
    format!("Deadline: {}", self.deadline)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
  Empty,
  Cards(Vec<TaskCard>)
}

impl ListView {
  pub fn build(tasks: &[Task]) -> Self {
    if tasks.is_empty() {
      return Self::Empty;
    }
    Self::Cards(
      tasks
        .iter()
        .map(TaskCard::from_task)
        .collect()
    )
  }
}
