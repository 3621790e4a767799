//! End-to-end scenarios of the planner, as driven by a user

use chrono::NaiveDate;

use tagboard::backend::MemoryBackend;
use tagboard::cache::Cache;
use tagboard::{Planner, PlannerError, TagFilter, TagRegistry, TaskId};

fn new_planner() -> Planner<MemoryBackend> {
    let _ = env_logger::builder().is_test(true).try_init();
    Planner::open(TagRegistry::default(), Cache::new(MemoryBackend::new()))
}

fn may_1st() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

#[test]
fn scenario_add_a_task() {
    let mut planner = new_planner();
    let work = planner.registry().get("업무").unwrap().clone();

    let id = planner.add_task("Buy milk", may_1st(), &work).unwrap();

    assert_eq!(planner.tasks().len(), 1);
    let task = planner.tasks().get(&id).unwrap();
    assert_eq!(task.text(), "Buy milk");
    assert_eq!(task.date(), may_1st());
    assert_eq!(task.tag(), "업무");
    assert_eq!(task.completed(), false);

    assert_eq!(planner.events().len(), 1);
    let event = &planner.events().as_slice()[0];
    assert_eq!(event.id(), &id);
    assert_eq!(event.title(), "Buy milk");
    assert_eq!(event.start(), may_1st());
}

#[test]
fn scenario_filter_by_tag() {
    let mut planner = new_planner();
    let work = planner.registry().get("업무").unwrap().clone();
    let private = planner.registry().get("개인").unwrap().clone();

    planner.add_task("Write report", may_1st(), &work).unwrap();
    let second = planner.add_task("Call mom", may_1st(), &private).unwrap();

    let filter = TagFilter::from("개인");
    let tasks: Vec<&TaskId> = planner.tasks().filter_by_tag(&filter).map(|t| t.id()).collect();
    assert_eq!(tasks, vec![&second]);

    let events: Vec<_> = planner.events().filter_by_tag(&filter).collect();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].extended_props().tag, "개인");

    // The same through the filter controller
    planner.set_filter("개인");
    assert_eq!(planner.visible_tasks().count(), 1);
    assert_eq!(planner.visible_events().next().unwrap().id(), &second);
}

#[test]
fn scenario_remove_a_task() {
    let mut planner = new_planner();
    let work = planner.registry().first().clone();
    let id = planner.add_task("Buy milk", may_1st(), &work).unwrap();

    assert_eq!(planner.remove_task(&id).unwrap(), true);
    assert!(planner.tasks().is_empty());
    assert!(planner.events().is_empty());

    let (stored_tasks, stored_events) = planner.cache_mut().load();
    assert!(stored_tasks.is_empty());
    assert!(stored_events.is_empty());
}

#[test]
fn scenario_remove_an_unknown_task() {
    let mut planner = new_planner();
    assert_eq!(planner.remove_task(&TaskId::from("nonexistent-id")).unwrap(), false);
    assert!(planner.tasks().is_empty());
    assert!(planner.events().is_empty());
    assert_eq!(planner.cache().backend().write_count(), 0);
}

#[test]
fn scenario_blank_text_is_rejected() {
    let mut planner = new_planner();
    let any_tag = planner.registry().first().clone();

    match planner.add_task("   ", may_1st(), &any_tag) {
        Err(PlannerError::InvalidInput(_)) => {},
        other => panic!("unexpected result {:?}", other),
    }
    assert!(planner.tasks().is_empty());
    assert!(planner.events().is_empty());
    assert_eq!(planner.cache().backend().write_count(), 0);
}

#[test]
fn scenario_restart_the_app() {
    let mut planner = new_planner();
    let work = planner.registry().get("업무").unwrap().clone();
    let study = planner.registry().get("공부").unwrap().clone();
    let a = planner.add_task("Write report", may_1st(), &work).unwrap();
    let b = planner.add_task("Read a book", may_1st().succ_opt().unwrap(), &study).unwrap();
    planner.toggle_completed(&a).unwrap();
    planner.set_filter("공부");

    let backend = planner.cache().backend().clone();
    let reopened = Planner::open(TagRegistry::default(), Cache::new(backend));

    assert_eq!(reopened.tasks(), planner.tasks());
    assert_eq!(reopened.events(), planner.events());
    assert!(reopened.tasks().get(&a).unwrap().completed());
    assert_eq!(reopened.events().get(&b).unwrap().background_color(), "#55efc4");
    // The filter is not saved
    assert!(reopened.active_filter().is_all());
}
