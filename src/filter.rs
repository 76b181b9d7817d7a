//! Rules that decide which tasks show up on a given day

use chrono::NaiveDate;

use crate::Task;


/// Whether a task has an enabled due date that falls on `day`.
///
/// The task type is not checked here: a simple task that carries a due date matches as well.
pub fn is_date_bound_on(task: &Task, day: NaiveDate) -> bool {
    task.enabled_due_date()
        .map(|due| due.falls_on(day))
        .unwrap_or(false)
}

/// Whether a scheduled task without an enabled due date comes back on the weekday of `day`
pub fn is_recurring_on(task: &Task, day: NaiveDate) -> bool {
    task.is_scheduled()
        && task.enabled_due_date().is_none()
        && task.repeat().map(|repeat| repeat.matches(day)).unwrap_or(false)
}

/// Whether a task is due on `day`, regardless of its checked state.
///
/// That is the case of tasks bound to this day, of tasks recurring on this weekday, and of every simple task
pub fn is_due_on(task: &Task, day: NaiveDate) -> bool {
    is_date_bound_on(task, day)
        || is_recurring_on(task, day)
        || task.is_simple()
}

/// Whether a task is scheduled on a day strictly before `today` and is still unchecked
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    if task.is_scheduled() == false || task.is_checked() {
        return false;
    }
    match task.enabled_due_date() {
        None => false,
        // Before today's midnight, i.e. on an earlier calendar day
        Some(due) => due.falls_on(today) == false && due.day() < today,
    }
}

/// Every task that is due on `day` (see [`is_due_on`]), in their original order
pub fn tasks_due_on(tasks: &[Task], day: NaiveDate) -> Vec<&Task> {
    tasks.iter()
        .filter(|task| is_due_on(task, day))
        .collect()
}

/// Every overdue task (see [`is_overdue`]), in their original order
pub fn overdue_tasks(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    tasks.iter()
        .filter(|task| is_overdue(task, today))
        .collect()
}

/// The unchecked tasks to display in the agenda for `day`.
///
/// These are the tasks bound to this day, then the tasks recurring on this weekday, then the simple tasks.
/// Each group keeps the original order. Groups are concatenated as they are: a task that matches two groups is listed twice.
pub fn agenda_tasks(tasks: &[Task], day: NaiveDate) -> Vec<&Task> {
    let unchecked = || tasks.iter().filter(|task| task.is_checked() == false);

    let date_bound = unchecked().filter(|task| is_date_bound_on(task, day));
    let recurring = unchecked().filter(|task| is_recurring_on(task, day));
    let simple = unchecked().filter(|task| task.is_simple());

    date_bound
        .chain(recurring)
        .chain(simple)
        .collect()
}


/// Today's tasks, split into the sections of the today list
#[derive(Debug, Default)]
pub struct TodayCategories<'a> {
    /// Due today, unchecked
    pub ongoing: Vec<&'a Task>,
    /// Due today, checked
    pub finished: Vec<&'a Task>,
    /// Scheduled before today, unchecked
    pub overdue: Vec<&'a Task>,
}

impl<'a> TodayCategories<'a> {
    /// Whether no task is due today. Overdue tasks are not taken into account.
    pub fn nothing_due_today(&self) -> bool {
        self.ongoing.is_empty() && self.finished.is_empty()
    }
}

/// Split the tasks into ongoing, finished and overdue tasks
pub fn categorize_today(tasks: &[Task], today: NaiveDate) -> TodayCategories<'_> {
    let (finished, ongoing): (Vec<&Task>, Vec<&Task>) = tasks_due_on(tasks, today)
        .into_iter()
        .partition(|task| task.is_checked());

    TodayCategories {
        ongoing,
        finished,
        overdue: overdue_tasks(tasks, today),
    }
}
