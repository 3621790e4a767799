//! To-do tasks

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::NaiveDate;

use crate::tag::TagOption;

/// The identifier of a task, which is also the identifier of its calendar event.
///
/// This is an opaque string. Ids created by this crate are time-ordered UUIDs,
/// but any string that has been stored previously is accepted as well.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId {
    content: String,
}

impl TaskId {
    /// Generate a new, unique id.
    /// It starts with a millisecond timestamp, but ids generated within the same millisecond still differ.
    pub fn generate() -> Self {
        Self { content: Uuid::now_v7().to_string() }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}


/// A to-do task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// The task id, shared with its calendar event
    id: TaskId,
    /// The title of the task
    text: String,
    completed: bool,
    /// The name of the tag this task has been created with
    tag: String,
    /// The color of the tag this task has been created with.
    /// This is copied from the tag, so that later changes of the tag presets do not alter existing tasks
    color: String,
    /// The day this task is scheduled on. Serialized as `YYYY-MM-DD`
    date: NaiveDate,
}

impl Task {
    /// Create a brand new, uncompleted Task.
    /// This will pick a new task ID.
    pub fn new(text: String, date: NaiveDate, tag: &TagOption) -> Self {
        Self::new_with_parameters(TaskId::generate(), text, false, tag.name.clone(), tag.color.clone(), date)
    }

    /// Create a new Task instance, e.g. one that has been stored before
    pub fn new_with_parameters(id: TaskId, text: String, completed: bool,
                               tag: String, color: String, date: NaiveDate) -> Self
    {
        Self { id, text, completed, tag, color, date }
    }

    pub fn id(&self) -> &TaskId     { &self.id      }
    pub fn text(&self) -> &str      { &self.text    }
    pub fn completed(&self) -> bool { self.completed }
    pub fn tag(&self) -> &str       { &self.tag     }
    pub fn color(&self) -> &str     { &self.color   }
    pub fn date(&self) -> NaiveDate { self.date     }

    /// Set the completion status
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
