//! The agenda screen: the date strip, and the unchecked tasks of the selected day

use chrono::NaiveDate;

use crate::Task;
use crate::config::{AGENDA_EMPTY_HEIGHT, AGENDA_EMPTY_TEXT};
use crate::date_window::{DateCell, DateStrip, ScrollRequest, snap_group_start};
use crate::filter::{agenda_tasks, tasks_due_on};
use crate::navigation::TodoRoute;
use crate::traits::TaskStore;
use crate::views::{ListContent, Placeholder};


/// The top of the agenda. It always describes today, whatever the selected date
#[derive(Clone, Debug, PartialEq)]
pub struct AgendaHeader {
    /// e.g. `October 19`
    pub title: String,
    /// The number of unchecked tasks due today
    pub pending_count: usize,
}

/// An entry of the agenda list, that links to its todo list
#[derive(Clone, Debug, PartialEq)]
pub struct AgendaRow<'a> {
    pub task: &'a Task,
    pub route: TodoRoute,
}

/// Everything the agenda displays
#[derive(Clone, Debug, PartialEq)]
pub struct AgendaScreen<'a> {
    pub header: AgendaHeader,
    pub cells: Vec<DateCell>,
    pub selected_index: Option<usize>,
    pub initial_scroll_index: usize,
    pub group_size: usize,
    pub content: ListContent<Vec<AgendaRow<'a>>>,
}

impl<'a> AgendaScreen<'a> {
    /// The cells of the snap group the selection is in (or the first group when nothing is selected)
    pub fn visible_cells(&self) -> &[DateCell] {
        let start = match self.selected_index {
            Some(index) => snap_group_start(index, self.group_size, self.cells.len()),
            None => 0,
        };
        let end = (start + self.group_size).min(self.cells.len());
        &self.cells[start..end]
    }

    /// The tasks listed for the selected day
    pub fn tasks(&self) -> Vec<&'a Task> {
        match &self.content {
            ListContent::Items(rows) => rows.iter().map(|row| row.task).collect(),
            ListContent::Empty(_) => Vec::new(),
        }
    }
}


/// The agenda: a strip of dates, and the tasks of the selected date
#[derive(Clone, Debug)]
pub struct AgendaView {
    today: NaiveDate,
    strip: DateStrip,
}

impl AgendaView {
    /// An agenda around `today`, with `today` selected
    pub fn new(today: NaiveDate) -> Self {
        Self::with_strip(today, DateStrip::new(today))
    }

    pub fn with_strip(today: NaiveDate, strip: DateStrip) -> Self {
        Self { today, strip }
    }

    pub fn today(&self) -> NaiveDate    { self.today }
    pub fn strip(&self) -> &DateStrip   { &self.strip }
    pub fn selected(&self) -> NaiveDate { self.strip.selected() }

    /// Select another date. Returns the scroll that recentres the strip, if the date is in the strip
    pub fn select_date(&mut self, date: NaiveDate) -> Option<ScrollRequest> {
        self.strip.select_date(date)
    }

    pub fn header<S: TaskStore + ?Sized>(&self, store: &S) -> AgendaHeader {
        let pending_count = tasks_due_on(store.tasks(), self.today)
            .into_iter()
            .filter(|task| task.is_checked() == false)
            .count();
        AgendaHeader {
            title: self.today.format("%B %-d").to_string(),
            pending_count,
        }
    }

    /// Derive the whole screen out of the current store content and the current selection
    pub fn render<'s, S: TaskStore + ?Sized>(&self, store: &'s S) -> AgendaScreen<'s> {
        let rows: Vec<AgendaRow<'s>> = agenda_tasks(store.tasks(), self.strip.selected())
            .into_iter()
            .map(|task| AgendaRow { task, route: TodoRoute::for_task(task, store) })
            .collect();

        let content = if rows.is_empty() {
            ListContent::Empty(Placeholder {
                text: crate::config::read(&AGENDA_EMPTY_TEXT),
                height: AGENDA_EMPTY_HEIGHT,
            })
        } else {
            ListContent::Items(rows)
        };

        AgendaScreen {
            header: self.header(store),
            cells: self.strip.cells(),
            selected_index: self.strip.selected_index(),
            initial_scroll_index: self.strip.initial_scroll_index(),
            group_size: self.strip.group_size(),
            content,
        }
    }
}
