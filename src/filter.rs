//! The tag filter applied to both the task list and the calendar

use crate::event::CalendarEvent;
use crate::projector::EventProjector;
use crate::tag::TagFilter;
use crate::task::Task;
use crate::task_store::TaskStore;

/// Holds the active tag filter.
///
/// Any value is accepted: a tag name that is not in the registry is not an error, it just filters everything out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterController {
    active: TagFilter,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &TagFilter {
        &self.active
    }

    /// Change the active filter. The `"all"` sentinel resets it.
    /// Returns whether the filter has actually changed
    pub fn set_filter(&mut self, value: &str) -> bool {
        let new_filter = TagFilter::from(value);
        if new_filter == self.active {
            return false;
        }
        log::debug!("Filter changed from {} to {}", self.active, new_filter);
        self.active = new_filter;
        true
    }

    pub fn visible_tasks<'a>(&'a self, tasks: &'a TaskStore) -> impl Iterator<Item = &'a Task> + Clone + 'a {
        tasks.filter_by_tag(&self.active)
    }

    pub fn visible_events<'a>(&'a self, events: &'a EventProjector) -> impl Iterator<Item = &'a CalendarEvent> + Clone + 'a {
        events.filter_by_tag(&self.active)
    }
}
