//! The boundary between the user gestures (keystrokes, calendar clicks) and the [`Planner`]
//!
//! The input buffer, the selected tag and the selected date are UI-local state: they are not saved,
//! they are only used as parameters of the next task creation.

use chrono::NaiveDate;

use crate::config::SUBMIT_KEY;
use crate::error::{PlannerError, PlannerResult};
use crate::planner::Planner;
use crate::tag::{TagOption, TagRegistry};
use crate::task::TaskId;
use crate::traits::KeyValueStore;

/// The confirmation message shown before a task is deleted
pub const DELETE_CONFIRMATION: &str = "일정을 삭제할까요?";

/// The modal dialogs the surface needs from the UI toolkit
pub trait Dialogs {
    /// Ask the user for a line of text. `None` means the dialog has been cancelled
    fn prompt(&mut self, message: &str) -> Option<String>;
    /// Ask the user for a yes/no confirmation
    fn confirm(&mut self, message: &str) -> bool;
}

/// The side panel where tasks are typed in
#[derive(Clone, Debug, PartialEq)]
pub struct InputPanel {
    buffer: String,
    selected_date: NaiveDate,
    selected_tag: TagOption,
}

impl InputPanel {
    /// The first tag of the registry is selected, as well as `today`
    pub fn new(registry: &TagRegistry, today: NaiveDate) -> Self {
        Self {
            buffer: String::new(),
            selected_date: today,
            selected_tag: registry.first().clone(),
        }
    }

    /// Same as [`Self::new`], with the current local date
    pub fn new_today(registry: &TagRegistry) -> Self {
        Self::new(registry, chrono::Local::now().date_naive())
    }

    pub fn buffer(&self) -> &str { &self.buffer }
    pub fn selected_date(&self) -> NaiveDate { self.selected_date }
    pub fn selected_tag(&self) -> &TagOption { &self.selected_tag }

    pub fn set_buffer<T: Into<String>>(&mut self, content: T) {
        self.buffer = content.into();
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Select the tag with this name. Returns `false` (and keeps the current selection) if there is no such tag
    pub fn select_tag(&mut self, registry: &TagRegistry, name: &str) -> bool {
        match registry.get(name) {
            Some(tag) => {
                self.selected_tag = tag.clone();
                true
            },
            None => {
                log::warn!("Cannot select unknown tag {:?}", name);
                false
            },
        }
    }

    /// Handle a key press in the text input.
    ///
    /// The submit key creates a task from the buffer (if it is not blank), then clears the buffer.
    /// Every other key is left to the text input itself.
    pub fn on_key<S: KeyValueStore>(&mut self, key: &str, planner: &mut Planner<S>) -> PlannerResult<Option<TaskId>> {
        if key != SUBMIT_KEY || self.buffer.trim().is_empty() {
            return Ok(None);
        }

        let id = planner.add_task(&self.buffer, self.selected_date, &self.selected_tag)?;
        self.buffer.clear();
        Ok(Some(id))
    }

    /// Handle a click on a day of the calendar, given as an ISO date (`YYYY-MM-DD`).
    ///
    /// The user is prompted for a title. Cancelling the prompt, or giving a blank title, creates nothing.
    pub fn on_date_click<S, D>(&self, date: &str, planner: &mut Planner<S>, dialogs: &mut D) -> PlannerResult<Option<TaskId>>
    where
        S: KeyValueStore,
        D: Dialogs,
    {
        let date: NaiveDate = date.parse()
            .map_err(|err| PlannerError::InvalidInput(format!("invalid date {:?}: {}", date, err)))?;

        let message = format!("[{}] 새로운 일정을 입력하세요:", self.selected_tag.name);
        let title = match dialogs.prompt(&message) {
            Some(title) if title.trim().is_empty() == false => title,
            _ => {
                log::debug!("No title given for {}", date);
                return Ok(None);
            },
        };

        planner.add_task(&title, date, &self.selected_tag).map(Some)
    }

    /// Handle a click on a calendar event. The task is removed if the user confirms it.
    ///
    /// Returns whether a task has been removed
    pub fn on_event_click<S, D>(&self, id: &str, planner: &mut Planner<S>, dialogs: &mut D) -> PlannerResult<bool>
    where
        S: KeyValueStore,
        D: Dialogs,
    {
        confirm_and_remove(id, planner, dialogs)
    }

    /// Handle a click on the delete button of a task in the list. The task is removed if the user confirms it.
    ///
    /// Returns whether a task has been removed
    pub fn on_delete_click<S, D>(&self, id: &TaskId, planner: &mut Planner<S>, dialogs: &mut D) -> PlannerResult<bool>
    where
        S: KeyValueStore,
        D: Dialogs,
    {
        confirm_and_remove(id.as_str(), planner, dialogs)
    }
}

fn confirm_and_remove<S, D>(id: &str, planner: &mut Planner<S>, dialogs: &mut D) -> PlannerResult<bool>
where
    S: KeyValueStore,
    D: Dialogs,
{
    if dialogs.confirm(DELETE_CONFIRMATION) == false {
        return Ok(false);
    }
    planner.remove_task(&TaskId::from(id))
}
