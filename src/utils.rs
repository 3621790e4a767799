//! Some utility functions

use crate::event::CalendarEvent;
use crate::task::Task;

/// A one-line description of a task, as shown in the side list
pub fn format_task(task: &Task) -> String {
    let completion = if task.completed() { "✓" } else { " " };
    format!("{} [{}] {}\t{}\t{}", completion, task.tag(), task.text(), task.date(), task.id())
}

/// A one-line description of a calendar event
pub fn format_event(event: &CalendarEvent) -> String {
    format!("{} {} ({}, {})\t{}", event.start(), event.title(), event.tag(), event.background_color(), event.id())
}

/// A debug utility that pretty-prints tasks
pub fn print_task_list<'a, I>(tasks: I)
where
    I: IntoIterator<Item = &'a Task>,
{
    for task in tasks {
        println!("    {}", format_task(task));
    }
}

/// A debug utility that pretty-prints calendar events
pub fn print_event_list<'a, I>(events: I)
where
    I: IntoIterator<Item = &'a CalendarEvent>,
{
    for event in events {
        println!("    {}", format_event(event));
    }
}
