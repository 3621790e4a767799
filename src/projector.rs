//! Calendar events derived from the tasks

use crate::event::CalendarEvent;
use crate::tag::TagFilter;
use crate::task::{Task, TaskId};

/// Maintains the calendar events, so that there is exactly one event per task.
///
/// This is only ever mutated alongside a [`TaskStore`](crate::task_store::TaskStore) mutation,
/// so the two collections have the same size and the same ids, in the same order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventProjector {
    events: Vec<CalendarEvent>,
}

impl EventProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive every event from scratch
    pub fn from_tasks<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        Self {
            events: tasks.into_iter().map(CalendarEvent::from).collect(),
        }
    }

    /// Project a task that has just been appended to the task list
    pub fn project_insert(&mut self, task: &Task) -> &CalendarEvent {
        self.events.push(CalendarEvent::from(task));
        &self.events[self.events.len() - 1]
    }

    /// Remove the event of a task, if any
    pub fn project_remove(&mut self, id: &TaskId) -> Option<(usize, CalendarEvent)> {
        let index = self.events.iter().position(|event| event.id() == id)?;
        Some((index, self.events.remove(index)))
    }

    /// Put back an event where it was before it has been removed
    pub(crate) fn restore(&mut self, index: usize, event: CalendarEvent) {
        let index = index.min(self.events.len());
        self.events.insert(index, event);
    }

    pub fn get(&self, id: &TaskId) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id() == id)
    }

    /// The events whose tag passes `filter`, in task insertion order.
    ///
    /// The returned iterator is lazy, and can be cloned to walk the same view again.
    pub fn filter_by_tag<'a>(&'a self, filter: &'a TagFilter) -> impl Iterator<Item = &'a CalendarEvent> + Clone + 'a {
        self.events.iter().filter(move |event| filter.matches(event.tag()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarEvent> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether these events are exactly the projection of `tasks`
    pub fn mirrors(&self, tasks: &[Task]) -> bool {
        self.events.len() == tasks.len()
            && self.events.iter().zip(tasks).all(|(event, task)| event.mirrors(task))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::tag::TagOption;
    use crate::task_store::TaskStore;

    #[test]
    fn incremental_projection_matches_full_derivation() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let work = TagOption::new("업무", "#ff7675");
        let private = TagOption::new("개인", "#74b9ff");

        let mut tasks = TaskStore::new();
        let mut events = EventProjector::new();

        let a = tasks.add("a", date, &work).unwrap().clone();
        events.project_insert(&a);
        let b = tasks.add("b", date, &private).unwrap().clone();
        let projected = events.project_insert(&b).clone();
        assert_eq!(projected.id(), b.id());
        assert_eq!(projected.tag(), "개인");

        assert!(events.mirrors(tasks.as_slice()));
        assert_eq!(events, EventProjector::from_tasks(tasks.iter()));

        tasks.remove(a.id());
        let (index, removed) = events.project_remove(a.id()).unwrap();
        assert_eq!(index, 0);
        assert_eq!(removed.title(), "a");
        assert!(events.mirrors(tasks.as_slice()));
        assert!(events.project_remove(a.id()).is_none());

        let filter = TagFilter::from("개인");
        let filtered: Vec<&str> = events.filter_by_tag(&filter).map(|e| e.title()).collect();
        assert_eq!(filtered, vec!["b"]);
        assert_eq!(events.filter_by_tag(&TagFilter::from("업무")).count(), 0);
    }

    #[test]
    fn mirrors_detects_drift() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let tag = TagOption::new("업무", "#ff7675");
        let mut tasks = TaskStore::new();
        tasks.add("a", date, &tag).unwrap();
        tasks.add("b", date, &tag).unwrap();

        let partial = EventProjector::from_tasks(tasks.iter().take(1));
        assert!(partial.mirrors(tasks.as_slice()) == false);

        let mut reversed: Vec<Task> = tasks.iter().cloned().collect();
        reversed.reverse();
        assert!(EventProjector::from_tasks(&reversed).mirrors(tasks.as_slice()) == false);
    }
}
