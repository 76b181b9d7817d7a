//! Checks how the agenda and the today list react to the store content and to the selection

use chrono::{Duration, NaiveDate, NaiveDateTime};

use todo_agenda::{DueDate, MemoryStore, Task, TaskId, TaskType, Todo, TodoId, WeekdaySet};
use todo_agenda::date_window::{snap_group_start, DateWindow};
use todo_agenda::traits::TaskStore;
use todo_agenda::views::{AgendaView, RenderTrigger, SectionKind, TaskListView};

const VIEWPORT_HEIGHT: u32 = 900;

fn today() -> NaiveDate {
    // A Monday
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn at(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, 0, 0).unwrap()
}

fn task(id: &str, task_type: TaskType, due_date: Option<DueDate>, checked: bool) -> Task {
    Task::new_with_parameters(TaskId::from(id), id.to_string(), task_type, due_date, None, checked, TodoId::from("list"))
}

fn store_with(tasks: Vec<Task>) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.add_todo(Todo::with_css_color(TodoId::from("list"), "List".to_string(), "#aabbcc").unwrap());
    for task in tasks {
        store.add_task(task);
    }
    store
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id().to_string()).collect()
}


#[test]
fn out_of_window_selection_has_no_index_and_no_scroll() {
    let mut agenda = AgendaView::new(today());
    let far_away = today() + Duration::days(31);

    assert!(agenda.select_date(far_away).is_none());
    assert_eq!(agenda.strip().selected_index(), None);
    assert_eq!(agenda.strip().window().index_of(far_away), None);

    // Rendering still works, with no active cell
    let store = store_with(vec![task("simple", TaskType::Simple, None, false)]);
    let screen = agenda.render(&store);
    assert_eq!(screen.selected_index, None);
    assert!(screen.cells.iter().all(|cell| cell.is_active == false));
    assert_eq!(ids(&screen.tasks()), vec!["simple"]);
}

#[test]
fn snap_group_start_stays_in_bounds() {
    let window = DateWindow::new(today());
    let len = window.len();
    for group_size in 1..=len {
        for index in 0..len {
            let start = snap_group_start(index, group_size, len);
            assert!(start <= len - group_size, "index {} group {} gave {}", index, group_size, start);
        }
    }
}

#[test]
fn task_matching_two_agenda_rules_is_listed_twice() {
    let store = store_with(vec![
        task("both", TaskType::Simple, Some(DueDate::on(at(today(), 10))), false),
    ]);
    let screen = AgendaView::new(today()).render(&store);
    assert_eq!(ids(&screen.tasks()), vec!["both", "both"]);
}

#[test]
fn today_list_classification() {
    let yesterday = today() - Duration::days(1);
    let store = store_with(vec![
        task("today", TaskType::Scheduled, Some(DueDate::on(at(today(), 9))), false),
        task("yesterday", TaskType::Scheduled, Some(DueDate::on(at(yesterday, 9))), false),
        task("simple-checked", TaskType::Simple, None, true),
    ]);

    let screen = TaskListView::new(today(), VIEWPORT_HEIGHT).render(&store);
    assert_eq!(ids(&screen.tasks(SectionKind::Ongoing)), vec!["today"]);
    assert_eq!(ids(&screen.tasks(SectionKind::Overdue)), vec!["yesterday"]);
    // A checked simple task is still due today, it is simply finished
    assert_eq!(ids(&screen.tasks(SectionKind::Finished)), vec!["simple-checked"]);

    // The agenda only lists unchecked tasks
    let agenda = AgendaView::new(today()).render(&store);
    assert_eq!(ids(&agenda.tasks()), vec!["today"]);
}

#[test]
fn toggling_moves_tasks_between_sections() {
    let mut store = store_with(vec![
        task("chore", TaskType::Simple, None, false),
        task("meeting", TaskType::Scheduled, Some(DueDate::on(at(today(), 14))), false),
    ]);
    let list = TaskListView::new(today(), VIEWPORT_HEIGHT);
    let agenda = AgendaView::new(today());

    {
        let screen = list.render(&store);
        assert_eq!(ids(&screen.tasks(SectionKind::Ongoing)), vec!["chore", "meeting"]);
        assert!(screen.tasks(SectionKind::Finished).is_empty());
    }

    store.toggle_checked(&TaskId::from("meeting")).unwrap();

    let screen = list.render(&store);
    assert_eq!(ids(&screen.tasks(SectionKind::Ongoing)), vec!["chore"]);
    assert_eq!(ids(&screen.tasks(SectionKind::Finished)), vec!["meeting"]);
    assert_eq!(ids(&agenda.render(&store).tasks()), vec!["chore"]);
    assert_eq!(agenda.header(&store).pending_count, 1);
}

#[test]
fn empty_store_shows_placeholders() {
    let store = MemoryStore::new();

    let agenda = AgendaView::new(today()).render(&store);
    assert_eq!(agenda.content.placeholder().map(|p| p.text.as_str()), Some("No Tasks for this day"));

    let list = TaskListView::new(today(), VIEWPORT_HEIGHT).render(&store);
    assert!(list.content.items().is_none());
    assert_eq!(list.content.placeholder().map(|p| p.height), Some(VIEWPORT_HEIGHT - 50));
}

#[test]
fn recurring_tasks_follow_the_selected_weekday() {
    let mut store = store_with(Vec::new());
    store.add_task(Task::new_with_parameters(
        TaskId::from("yoga"), "Yoga".to_string(), TaskType::Scheduled,
        None, Some(WeekdaySet::TUESDAY | WeekdaySet::SATURDAY), false, TodoId::from("list"),
    ));

    let mut agenda = AgendaView::new(today());
    assert!(agenda.render(&store).content.is_empty());

    let tuesday = today() + Duration::days(1);
    agenda.select_date(tuesday);
    assert_eq!(ids(&agenda.render(&store).tasks()), vec!["yoga"]);

    // Nothing is due on Monday: the today list shows its placeholder
    assert!(TaskListView::new(today(), VIEWPORT_HEIGHT).render(&store).content.is_empty());
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn store_changes_trigger_a_new_render() {
    let mut store = store_with(vec![task("chore", TaskType::Simple, None, false)]);
    let mut trigger = RenderTrigger::new(store.subscribe());

    assert!(trigger.needs_render());
    assert_eq!(trigger.needs_render(), false);

    store.set_checked(&TaskId::from("chore"), true).unwrap();
    assert!(trigger.needs_render());
    assert_eq!(trigger.needs_render(), false);

    drop(store);
    assert_eq!(trigger.needs_render(), false);
}
