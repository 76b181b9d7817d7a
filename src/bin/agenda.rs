use std::error::Error;
use std::path::Path;

use chrono::{Duration, NaiveDate};

use todo_agenda::{MemoryStore, Task, Todo, TodoId, WeekdaySet};
use todo_agenda::views::{AgendaView, TaskListView};
use todo_agenda::utils::{print_agenda, print_today, today};

const VIEWPORT_HEIGHT: u32 = 800;


fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let today = today();
    let store = match std::env::args().nth(1) {
        Some(path) => MemoryStore::from_file(Path::new(&path))?,
        None => {
            println!("No data file given, using sample data. Usage: agenda [data.json [yyyy-mm-dd]]");
            sample_store(today)?
        },
    };

    let mut agenda = AgendaView::new(today);
    if let Some(date) = std::env::args().nth(2) {
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")?;
        match agenda.select_date(date) {
            Some(request) => log::info!("Scrolling the date strip to index {}", request.index),
            None => log::warn!("{} is out of the date strip", date),
        }
    }

    println!("---- Agenda -----");
    print_agenda(&agenda.render(&store));

    println!();
    println!("---- Today -----");
    print_today(&TaskListView::new(today, VIEWPORT_HEIGHT).render(&store));

    Ok(())
}

fn sample_store(today: NaiveDate) -> Result<MemoryStore, Box<dyn Error>> {
    let home = TodoId::from("home");
    let work = TodoId::from("work");

    let mut store = MemoryStore::new();
    store.add_todo(Todo::with_css_color(home.clone(), "Home".to_string(), "#f4a261")?);
    store.add_todo(Todo::with_css_color(work.clone(), "Work".to_string(), "#2a9d8f")?);

    let at_nine = |day: NaiveDate| day.and_hms_opt(9, 0, 0).ok_or("invalid time");

    store.add_task(Task::new_due("Dentist appointment".to_string(), &home, at_nine(today)?));
    store.add_task(Task::new_due("Send the report".to_string(), &work, at_nine(today - Duration::days(2))?));
    store.add_task(Task::new_recurring("Team meeting".to_string(), &work, WeekdaySet::MONDAY | WeekdaySet::THURSDAY));
    store.add_task(Task::new_simple("Water the plants".to_string(), &home));

    let mut done = Task::new_simple("Buy bread".to_string(), &home);
    done.set_checked(true);
    store.add_task(done);

    Ok(store)
}
