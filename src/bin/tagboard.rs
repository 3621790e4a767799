//! A line-oriented front-end to a planner, that keeps its data in a local folder.
//!
//! Set the RUST_LOG environment variable to display more info about what happens.

use std::cell::Cell;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::rc::Rc;

use tagboard::backend::FileBackend;
use tagboard::cache::Cache;
use tagboard::config::SUBMIT_KEY;
use tagboard::surface::{Dialogs, InputPanel};
use tagboard::utils::{print_event_list, print_task_list};
use tagboard::{Planner, TagRegistry, TaskId};

const DATA_FOLDER: &str = "tagboard_data";

/// Dialogs that are answered on the terminal
struct TerminalDialogs;

impl Dialogs for TerminalDialogs {
    fn prompt(&mut self, message: &str) -> Option<String> {
        print!("{} ", message);
        let _ = stdout().flush();
        read_line()
    }

    fn confirm(&mut self, message: &str) -> bool {
        match self.prompt(&format!("{} [y/N]", message)) {
            Some(answer) => answer.trim().eq_ignore_ascii_case("y"),
            None => false,
        }
    }
}

/// Read a line from stdin, without its line ending. `None` at the end of the input
fn read_line() -> Option<String> {
    let mut line = String::new();
    match stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
        Err(err) => {
            log::warn!("Unable to read from stdin: {}", err);
            None
        },
    }
}

fn print_help(registry: &TagRegistry) {
    println!("Type a task title and press Enter to add it. Other commands:");
    println!("  :tag NAME         select the tag of the next tasks");
    println!("  :date YYYY-MM-DD  select the date of the next tasks");
    println!("  :click YYYY-MM-DD click on a day of the calendar");
    println!("  :filter NAME|all  only show the tasks with this tag");
    println!("  :done ID          toggle the completion of a task");
    println!("  :rm ID            delete a task");
    println!("  :quit");
    let tags: Vec<&str> = registry.iter().map(|tag| tag.name.as_str()).collect();
    println!("Available tags: {}", tags.join(", "));
}

fn render(planner: &Planner<FileBackend>, panel: &InputPanel) {
    println!("---- To-do ({}) -----", planner.active_filter());
    print_task_list(planner.visible_tasks());
    println!("---- Calendar -----");
    print_event_list(planner.visible_events());
    println!("[{} on {}]", panel.selected_tag().name, panel.selected_date());
}

fn main() {
    env_logger::init();

    let folder = std::env::args().nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DATA_FOLDER));
    println!("Using data folder {:?}", folder);

    let mut planner = Planner::open(TagRegistry::default(), Cache::new(FileBackend::new(&folder)));
    let mut panel = InputPanel::new_today(planner.registry());
    let mut dialogs = TerminalDialogs;

    let needs_render = Rc::new(Cell::new(true));
    let flag = Rc::clone(&needs_render);
    planner.subscribe(move |changes| {
        log::debug!("Planner changed: {:?}", changes);
        flag.set(true);
    });

    print_help(planner.registry());

    loop {
        if needs_render.replace(false) {
            render(&planner, &panel);
        }

        print!("> ");
        let _ = stdout().flush();
        let line = match read_line() {
            Some(line) => line,
            None => break,
        };

        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line.as_str(), ""),
        };

        let result = match command {
            ":quit" => break,
            ":tag" => {
                if panel.select_tag(planner.registry(), argument) {
                    needs_render.set(true);
                }
                Ok(())
            },
            ":date" => match argument.parse::<chrono::NaiveDate>() {
                Ok(date) => {
                    panel.select_date(date);
                    needs_render.set(true);
                    Ok(())
                },
                Err(err) => {
                    println!("Invalid date {:?}: {}", argument, err);
                    Ok(())
                },
            },
            ":click" => panel.on_date_click(argument, &mut planner, &mut dialogs).map(|_| ()),
            ":filter" => {
                planner.set_filter(argument);
                Ok(())
            },
            ":done" => planner.toggle_completed(&TaskId::from(argument)).map(|_| ()),
            ":rm" => panel.on_event_click(argument, &mut planner, &mut dialogs).map(|_| ()),
            _ => {
                panel.set_buffer(line.as_str());
                panel.on_key(SUBMIT_KEY, &mut planner).map(|_| ())
            },
        };

        if let Err(err) = result {
            println!("{}", err);
        }
    }
}
