//! This crate provides the core of a tagged to-do list that is also displayed as a month-view calendar.
//!
//! Tasks live in a [`TaskStore`](task_store::TaskStore). Every task has exactly one [`CalendarEvent`], that is derived from it by the [`EventProjector`](projector::EventProjector). \
//! Both lists can be filtered by tag, see the [`filter`] module.
//!
//! The [`Planner`] owns all of these. It keeps them in sync, saves them into a key-value store (see [`traits::KeyValueStore`] and the [`backend`] module) through a [`Cache`](cache::Cache),
//! and tells its observers whenever something has to be rendered again. \
//! The [`surface`] module turns user gestures (keystrokes, calendar clicks) into planner operations.

pub mod traits;
pub mod config;
pub mod error;
pub use error::{PlannerError, StorageError};

pub mod tag;
pub use tag::{TagFilter, TagOption, TagRegistry};
pub mod task;
pub use task::{Task, TaskId};
pub mod event;
pub use event::CalendarEvent;

pub mod task_store;
pub mod projector;
pub mod filter;

pub mod backend;
pub mod cache;
pub mod mock_behaviour;

pub mod planner;
pub use planner::Planner;
pub mod surface;

pub mod utils;
