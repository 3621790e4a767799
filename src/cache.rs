//! This module persists the planner collections into a key-value store

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::SlotKeys;
use crate::error::StorageError;
use crate::event::CalendarEvent;
use crate::task::Task;
use crate::traits::KeyValueStore;

/// Reads and writes the task list and the event list, each one in its own slot of a [`KeyValueStore`].
///
/// Each slot holds a JSON array. There is no schema version.
#[derive(Debug)]
pub struct Cache<S: KeyValueStore> {
    backend: S,
    keys: SlotKeys,
}

impl<S: KeyValueStore> Cache<S> {
    /// Use the default slot names
    pub fn new(backend: S) -> Self {
        Self::with_keys(backend, SlotKeys::default())
    }

    pub fn with_keys(backend: S, keys: SlotKeys) -> Self {
        Self { backend, keys }
    }

    pub fn backend(&self) -> &S { &self.backend }
    pub fn backend_mut(&mut self) -> &mut S { &mut self.backend }
    pub fn keys(&self) -> &SlotKeys { &self.keys }

    /// Read both collections.
    ///
    /// This never fails: a slot that is missing, unreadable or malformed is read as an empty collection.
    pub fn load(&mut self) -> (Vec<Task>, Vec<CalendarEvent>) {
        let tasks = load_slot(&mut self.backend, &self.keys.tasks);
        let events = load_slot(&mut self.backend, &self.keys.events);
        log::debug!("Loaded {} tasks and {} events", tasks.len(), events.len());
        (tasks, events)
    }

    /// Write both collections.
    ///
    /// Both are serialized before anything is written, so that a serialization error leaves the store untouched.
    pub fn save(&mut self, tasks: &[Task], events: &[CalendarEvent]) -> Result<(), StorageError> {
        let tasks_json = to_json(&self.keys.tasks, tasks)?;
        let events_json = to_json(&self.keys.events, events)?;

        self.backend.set(&self.keys.tasks, &tasks_json)?;
        self.backend.set(&self.keys.events, &events_json)?;
        log::trace!("Saved {} tasks and {} events", tasks.len(), events.len());
        Ok(())
    }
}

fn load_slot<S, T>(backend: &mut S, key: &str) -> Vec<T>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let content = match backend.get(key) {
        Ok(Some(content)) => content,
        Ok(None) => {
            log::debug!("Slot {:?} does not exist yet. Starting with an empty list", key);
            return Vec::new();
        },
        Err(err) => {
            log::warn!("{}. Starting with an empty list", err);
            return Vec::new();
        },
    };

    match serde_json::from_str(&content) {
        Ok(items) => items,
        Err(err) => {
            log::warn!("Invalid content in slot {:?}: {}. Starting with an empty list", key, err);
            Vec::new()
        },
    }
}

fn to_json<T: Serialize>(key: &str, items: &[T]) -> Result<String, StorageError> {
    serde_json::to_string(items)
        .map_err(|source| StorageError::Serialize { key: key.to_string(), source })
}
