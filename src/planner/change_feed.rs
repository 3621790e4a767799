//! Utilities to tell the interaction surface that something has to be rendered again

use std::fmt::{Debug, Formatter};

use bitflags::bitflags;

bitflags! {
    /// What has changed in the planner state
    pub struct Changes: u8 {
        /// The task list
        const TASKS = 1;
        /// The calendar event list
        const EVENTS = 2;
        /// The active tag filter
        const FILTER = 4;
    }
}

/// A callback that is run after every successful change
pub type Observer = Box<dyn FnMut(Changes)>;

/// The list of observers of a planner
#[derive(Default)]
pub struct ChangeFeed {
    observers: Vec<Observer>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Tell every observer about `changes`, in the order they have subscribed
    pub fn notify(&mut self, changes: Changes) {
        if changes.is_empty() {
            return;
        }
        log::trace!("Notifying {} observers of {:?}", self.observers.len(), changes);
        for observer in self.observers.iter_mut() {
            observer(changes);
        }
    }
}

impl Debug for ChangeFeed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChangeFeed({} observers)", self.observers.len())
    }
}
