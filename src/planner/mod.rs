//! This module owns the whole planner state, and keeps its parts consistent with each other
//!
//! Every change goes through the same steps: update the tasks, update the calendar events, save both, then notify the observers.
//! A change that cannot be saved is rolled back.

use chrono::NaiveDate;

use crate::cache::Cache;
use crate::error::{PlannerError, PlannerResult, StorageError};
use crate::event::CalendarEvent;
use crate::filter::FilterController;
use crate::projector::EventProjector;
use crate::tag::{TagFilter, TagOption, TagRegistry};
use crate::task::{Task, TaskId};
use crate::task_store::TaskStore;
use crate::traits::KeyValueStore;

pub mod change_feed;
pub use change_feed::{ChangeFeed, Changes};

/// The controller of a to-do list and its calendar.
///
/// It is meant to be created once when the app starts, and handed (by reference) to the UI callbacks.
#[derive(Debug)]
pub struct Planner<S: KeyValueStore> {
    registry: TagRegistry,
    tasks: TaskStore,
    events: EventProjector,
    filter: FilterController,
    cache: Cache<S>,
    change_feed: ChangeFeed,
}

impl<S: KeyValueStore> Planner<S> {
    /// Load the planner from its cache.
    ///
    /// The stored tasks are authoritative: calendar events are derived again from them.
    /// In case the stored events do not match, they will be overwritten at the next save.
    pub fn open(registry: TagRegistry, mut cache: Cache<S>) -> Self {
        let (stored_tasks, stored_events) = cache.load();
        let tasks = TaskStore::from_tasks(stored_tasks);
        let events = EventProjector::from_tasks(tasks.iter());
        if events.as_slice() != stored_events.as_slice() {
            log::warn!("Stored calendar events ({}) do not match the stored tasks ({}). Deriving them again from the tasks",
                stored_events.len(), tasks.len());
        }
        log::info!("Planner opened with {} tasks", tasks.len());

        Self {
            registry,
            tasks,
            events,
            filter: FilterController::new(),
            cache,
            change_feed: ChangeFeed::new(),
        }
    }

    pub fn registry(&self) -> &TagRegistry  { &self.registry }
    pub fn tasks(&self) -> &TaskStore       { &self.tasks }
    pub fn events(&self) -> &EventProjector { &self.events }
    pub fn cache(&self) -> &Cache<S>        { &self.cache }
    pub fn cache_mut(&mut self) -> &mut Cache<S> { &mut self.cache }

    /// Register a callback that is run after every successful change
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(Changes) + 'static,
    {
        self.change_feed.subscribe(Box::new(observer));
    }

    /// Create a task (and its calendar event), and save them.
    ///
    /// # Errors
    /// * [`PlannerError::InvalidInput`] if `text` is blank. Nothing is changed nor saved.
    /// * [`PlannerError::UnknownTag`] if `tag` is not part of the registry. Nothing is changed nor saved.
    /// * [`PlannerError::Storage`] if the new state could not be saved. The task is not kept.
    ///
    /// Only the name of `tag` is used: the color always comes from the registry.
    pub fn add_task(&mut self, text: &str, date: NaiveDate, tag: &TagOption) -> PlannerResult<TaskId> {
        let registered = match self.registry.get(&tag.name) {
            Some(registered) => registered,
            None => return Err(PlannerError::UnknownTag(tag.name.clone())),
        };
        if registered.color != tag.color {
            log::debug!("Ignoring color {:?} for tag {}, using {:?}", tag.color, tag.name, registered.color);
        }

        let task = self.tasks.add(text, date, registered)?;
        let id = task.id().clone();
        self.events.project_insert(task);

        if let Err(err) = self.persist() {
            log::warn!("Unable to save the new task {}: {}. Rolling it back", id, err);
            self.tasks.remove(&id);
            self.events.project_remove(&id);
            self.restore_store();
            return Err(err.into());
        }

        log::info!("Added task {} on {} with tag {}", id, date, tag.name);
        self.change_feed.notify(Changes::TASKS | Changes::EVENTS);
        Ok(id)
    }

    /// Remove a task (and its calendar event), and save the new state.
    ///
    /// Returns whether there was such a task. Removing an unknown id is not an error, and does not save anything.
    pub fn remove_task(&mut self, id: &TaskId) -> PlannerResult<bool> {
        let (task_index, task) = match self.tasks.remove(id) {
            Some(removed) => removed,
            None => {
                log::debug!("No task {} to remove", id);
                return Ok(false);
            },
        };
        let removed_event = self.events.project_remove(id);

        if let Err(err) = self.persist() {
            log::warn!("Unable to save the removal of task {}: {}. Rolling it back", id, err);
            self.tasks.restore(task_index, task);
            if let Some((event_index, event)) = removed_event {
                self.events.restore(event_index, event);
            }
            self.restore_store();
            return Err(err.into());
        }

        log::info!("Removed task {}", id);
        self.change_feed.notify(Changes::TASKS | Changes::EVENTS);
        Ok(true)
    }

    /// Flip the completion status of a task, and save it.
    ///
    /// Returns the new status, or `None` if there is no such task.
    /// Calendar events do not show the completion status, so they are left untouched.
    pub fn toggle_completed(&mut self, id: &TaskId) -> PlannerResult<Option<bool>> {
        let completed = match self.tasks.toggle_completed(id) {
            Some(completed) => completed,
            None => {
                log::debug!("No task {} to toggle", id);
                return Ok(None);
            },
        };

        if let Err(err) = self.persist() {
            log::warn!("Unable to save the completion of task {}: {}. Rolling it back", id, err);
            self.tasks.toggle_completed(id);
            self.restore_store();
            return Err(err.into());
        }

        self.change_feed.notify(Changes::TASKS);
        Ok(Some(completed))
    }

    pub fn active_filter(&self) -> &TagFilter {
        self.filter.active()
    }

    /// Change the tag filter. `"all"` shows everything.
    ///
    /// A name that is not in the registry is accepted, and simply makes the views empty.
    pub fn set_filter(&mut self, value: &str) {
        if self.filter.set_filter(value) == false {
            return;
        }
        if let TagFilter::Tag(name) = self.filter.active() {
            if self.registry.contains(name) == false {
                log::debug!("Filtering on {:?}, which is not a known tag", name);
            }
        }
        self.change_feed.notify(Changes::FILTER);
    }

    /// The tasks that pass the active filter, in insertion order
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> + Clone + '_ {
        self.filter.visible_tasks(&self.tasks)
    }

    /// The calendar events that pass the active filter, in insertion order
    pub fn visible_events(&self) -> impl Iterator<Item = &CalendarEvent> + Clone + '_ {
        self.filter.visible_events(&self.events)
    }

    /// Whether there is exactly one matching calendar event per task
    pub fn is_consistent(&self) -> bool {
        self.events.mirrors(self.tasks.as_slice())
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        self.cache.save(self.tasks.as_slice(), self.events.as_slice())
    }

    /// After a rollback, try to make the store match the in-memory state again, in case a slot has been written before the failure
    fn restore_store(&mut self) {
        if let Err(err) = self.persist() {
            log::warn!("Unable to restore the previous content of the store: {}", err);
        }
    }
}
