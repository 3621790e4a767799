//! Support for library configuration options

use once_cell::sync::Lazy;

use crate::tag::TagOption;

/// Name of the store slot that holds the serialized tasks
pub const TASKS_SLOT: &str = "notion-todos";

/// Name of the store slot that holds the serialized calendar events
pub const EVENTS_SLOT: &str = "notion-events";

/// The filter value that means "do not filter anything"
pub const ALL_FILTER: &str = "all";

/// The key that submits the content of the input buffer
pub const SUBMIT_KEY: &str = "Enter";

/// The tag presets that are used when the app does not provide its own.
/// Feel free to build a custom [`TagRegistry`](crate::tag::TagRegistry) instead.
pub static DEFAULT_TAGS: Lazy<Vec<TagOption>> = Lazy::new(|| vec![
    TagOption::new("업무", "#ff7675"),
    TagOption::new("개인", "#74b9ff"),
    TagOption::new("공부", "#55efc4"),
]);

/// The names of the two slots the planner state is persisted into
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotKeys {
    pub tasks: String,
    pub events: String,
}

impl SlotKeys {
    pub fn new<T: Into<String>, E: Into<String>>(tasks: T, events: E) -> Self {
        Self { tasks: tasks.into(), events: events.into() }
    }
}

impl Default for SlotKeys {
    fn default() -> Self {
        Self::new(TASKS_SLOT, EVENTS_SLOT)
    }
}
