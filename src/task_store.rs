//! The canonical list of tasks

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::PlannerError;
use crate::tag::{TagFilter, TagOption};
use crate::task::{Task, TaskId};

/// Owns the tasks, in insertion order.
///
/// This is the single source of truth: calendar events are derived from its content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from tasks that have been stored before.
    ///
    /// Ids must be unique: a task that re-uses the id of a previous one is kept, under a newly generated id.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(tasks.len());
        for task in tasks {
            let task = if seen.contains(task.id()) {
                let new_id = TaskId::generate();
                log::warn!("Task {:?} re-uses id {}, giving it id {}", task.text(), task.id(), new_id);
                Task::new_with_parameters(new_id, task.text().to_string(), task.completed(),
                                          task.tag().to_string(), task.color().to_string(), task.date())
            } else {
                task
            };
            seen.insert(task.id().clone());
            kept.push(task);
        }
        Self { tasks: kept }
    }

    /// Create a new task and append it to the list.
    ///
    /// Fails with [`PlannerError::InvalidInput`] (and leaves the store unchanged) if `text` is blank.
    pub fn add(&mut self, text: &str, date: NaiveDate, tag: &TagOption) -> Result<&Task, PlannerError> {
        if text.trim().is_empty() {
            return Err(PlannerError::InvalidInput("a task cannot have a blank text".to_string()));
        }

        let task = Task::new(text.to_string(), date, tag);
        log::debug!("Adding task {} ({:?}, tag {}, on {})", task.id(), task.text(), task.tag(), task.date());
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Remove the task with this id.
    ///
    /// Returns the removed task and the position it had, or `None` if there was no such task (which is not an error).
    pub fn remove(&mut self, id: &TaskId) -> Option<(usize, Task)> {
        let index = self.position(id)?;
        let task = self.tasks.remove(index);
        log::debug!("Removed task {} ({:?})", task.id(), task.text());
        Some((index, task))
    }

    /// Put back a task where it was before it has been removed
    pub(crate) fn restore(&mut self, index: usize, task: Task) {
        let index = index.min(self.tasks.len());
        self.tasks.insert(index, task);
    }

    /// Flip the completion status of a task.
    /// Returns the new status, or `None` if there is no such task
    pub fn toggle_completed(&mut self, id: &TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id() == id)?;
        let completed = !task.completed();
        task.set_completed(completed);
        log::debug!("Task {} is now {}", id, if completed { "completed" } else { "uncompleted" });
        Some(completed)
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// The tasks that pass `filter`, in insertion order.
    ///
    /// The returned iterator is lazy, and can be cloned to walk the same view again.
    pub fn filter_by_tag<'a>(&'a self, filter: &'a TagFilter) -> impl Iterator<Item = &'a Task> + Clone + 'a {
        self.tasks.iter().filter(move |task| filter.matches(task.tag()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn add_and_remove() {
        let work = TagOption::new("업무", "#ff7675");
        let mut store = TaskStore::new();

        let first = store.add("Buy milk", day(1), &work).unwrap().id().clone();
        let second = store.add("  Write report ", day(2), &work).unwrap().id().clone();
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
        // The text is kept as it has been typed
        assert_eq!(store.get(&second).unwrap().text(), "  Write report ");

        let (index, removed) = store.remove(&first).unwrap();
        assert_eq!(index, 0);
        assert_eq!(removed.text(), "Buy milk");
        assert_eq!(store.len(), 1);

        assert!(store.remove(&first).is_none());
        assert_eq!(store.len(), 1);

        store.restore(index, removed);
        let texts: Vec<&str> = store.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["Buy milk", "  Write report "]);
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut store = TaskStore::new();
        for text in &["", "   ", "\t\n"] {
            let err = store.add(text, day(1), &TagOption::new("업무", "#ff7675")).unwrap_err();
            assert!(err.is_invalid_input());
        }
        assert!(store.is_empty());
    }

    #[test]
    fn filter_keeps_insertion_order() {
        let work = TagOption::new("업무", "#ff7675");
        let private = TagOption::new("개인", "#74b9ff");
        let mut store = TaskStore::new();
        store.add("a", day(3), &work).unwrap();
        store.add("b", day(1), &private).unwrap();
        store.add("c", day(2), &work).unwrap();

        let filter = TagFilter::from("업무");
        let view = store.filter_by_tag(&filter);
        let texts: Vec<&str> = view.clone().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["a", "c"]);
        // Views can be walked several times
        assert_eq!(view.count(), 2);

        let all: Vec<&str> = store.filter_by_tag(&TagFilter::All).map(|t| t.text()).collect();
        assert_eq!(all, vec!["a", "b", "c"]);

        assert_eq!(store.filter_by_tag(&TagFilter::from("unknown")).count(), 0);
    }

    #[test]
    fn toggle_completion() {
        let mut store = TaskStore::new();
        let id = store.add("a", day(1), &TagOption::new("업무", "#ff7675")).unwrap().id().clone();
        assert_eq!(store.toggle_completed(&id), Some(true));
        assert!(store.get(&id).unwrap().completed());
        assert_eq!(store.toggle_completed(&id), Some(false));
        assert_eq!(store.toggle_completed(&TaskId::from("nope")), None);
    }

    #[test]
    fn duplicate_ids_get_a_new_id_on_load() {
        let task = |id: &str, text: &str| Task::new_with_parameters(id.into(), text.to_string(), false,
                                                                   "업무".to_string(), "#ff7675".to_string(), day(1));
        let store = TaskStore::from_tasks(vec![task("1", "a"), task("2", "b"), task("1", "c"), task("1", "d")]);
        let texts: Vec<&str> = store.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);

        let ids: HashSet<&TaskId> = store.iter().map(|t| t.id()).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(store.get(&TaskId::from("1")).unwrap().text(), "a");
        let moved = &store.as_slice()[2];
        assert!(moved.id().as_str() != "1");
        assert_eq!(moved.tag(), "업무");
        assert_eq!(moved.date(), day(1));
    }
}
