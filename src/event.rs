//! Calendar events, as consumed by the calendar widget

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::task::{Task, TaskId};

/// Widget-specific properties of an event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedProps {
    pub tag: String,
}

/// The calendar-facing projection of a [`Task`].
///
/// Events are never edited on their own: they are always derived from a task, see the `From<&Task>` implementation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    id: TaskId,
    title: String,
    start: NaiveDate,
    background_color: String,
    border_color: String,
    extended_props: ExtendedProps,
}

impl CalendarEvent {
    pub fn id(&self) -> &TaskId           { &self.id }
    pub fn title(&self) -> &str           { &self.title }
    pub fn start(&self) -> NaiveDate      { self.start }
    pub fn background_color(&self) -> &str { &self.background_color }
    pub fn border_color(&self) -> &str    { &self.border_color }
    pub fn tag(&self) -> &str             { &self.extended_props.tag }
    pub fn extended_props(&self) -> &ExtendedProps { &self.extended_props }

    /// Whether this event is the exact projection of `task`
    pub fn mirrors(&self, task: &Task) -> bool {
        self == &CalendarEvent::from(task)
    }
}

impl From<&Task> for CalendarEvent {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().clone(),
            title: task.text().to_string(),
            start: task.date(),
            background_color: task.color().to_string(),
            border_color: task.color().to_string(),
            extended_props: ExtendedProps { tag: task.tag().to_string() },
        }
    }
}
