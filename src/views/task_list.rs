//! The today list: what is due today, split into ongoing, finished and overdue sections

use chrono::NaiveDate;

use crate::Task;
use crate::config::{SECTION_TITLES, TODAY_EMPTY_TEXT};
use crate::filter::categorize_today;
use crate::todo::Todo;
use crate::traits::TaskStore;
use crate::views::{ListContent, Placeholder};


/// The sections of the today list, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Ongoing,
    Finished,
    Overdue,
}

impl SectionKind {
    fn index(&self) -> usize {
        match self {
            SectionKind::Ongoing => 0,
            SectionKind::Finished => 1,
            SectionKind::Overdue => 2,
        }
    }

    /// The header of this section
    pub fn title(&self) -> String {
        let titles = crate::config::read(&SECTION_TITLES);
        titles[self.index()].clone()
    }
}

/// A task, along with its todo list
#[derive(Clone, Debug, PartialEq)]
pub struct TaskRow<'a> {
    pub task: &'a Task,
    /// `None` when the todo list the task refers to does not exist
    pub parent: Option<&'a Todo>,
}

/// A section of the today list. Empty sections are still displayed, as a lone header
#[derive(Clone, Debug, PartialEq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub title: String,
    pub rows: Vec<TaskRow<'a>>,
}

/// Everything the today list displays
#[derive(Clone, Debug, PartialEq)]
pub struct TodayScreen<'a> {
    pub content: ListContent<Vec<Section<'a>>>,
}

impl<'a> TodayScreen<'a> {
    pub fn section(&self, kind: SectionKind) -> Option<&Section<'a>> {
        self.content.items()?
            .iter()
            .find(|section| section.kind == kind)
    }

    /// The tasks of a section. This is empty when the section does not exist
    pub fn tasks(&self, kind: SectionKind) -> Vec<&'a Task> {
        match self.section(kind) {
            None => Vec::new(),
            Some(section) => section.rows.iter().map(|row| row.task).collect(),
        }
    }
}


/// The list of today's tasks, split into ongoing, finished and overdue tasks
#[derive(Clone, Debug)]
pub struct TaskListView {
    today: NaiveDate,
    viewport_height: u32,
}

impl TaskListView {
    pub fn new(today: NaiveDate, viewport_height: u32) -> Self {
        Self { today, viewport_height }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Derive the whole screen out of the current store content.
    ///
    /// When nothing is due today, no section is displayed at all (not even the overdue one), only a placeholder
    pub fn render<'s, S: TaskStore + ?Sized>(&self, store: &'s S) -> TodayScreen<'s> {
        let categories = categorize_today(store.tasks(), self.today);

        if categories.nothing_due_today() {
            if categories.overdue.is_empty() == false {
                log::debug!("Hiding {} overdue tasks, since nothing is due today", categories.overdue.len());
            }
            return TodayScreen {
                content: ListContent::Empty(Placeholder {
                    text: crate::config::read(&TODAY_EMPTY_TEXT),
                    height: self.viewport_height.saturating_sub(50),
                }),
            };
        }

        let to_rows = move |tasks: Vec<&'s Task>| -> Vec<TaskRow<'s>> {
            tasks.into_iter()
                .map(|task| {
                    let parent = store.todo(task.todo_id());
                    if parent.is_none() {
                        log::warn!("Task {} refers to an unknown todo list {}", task.id(), task.todo_id());
                    }
                    TaskRow { task, parent }
                })
                .collect()
        };

        let sections: Vec<Section<'s>> = vec![
            (SectionKind::Ongoing, categories.ongoing),
            (SectionKind::Finished, categories.finished),
            (SectionKind::Overdue, categories.overdue),
        ].into_iter()
            .map(|(kind, tasks)| Section { kind, title: kind.title(), rows: to_rows(tasks) })
            .collect();

        TodayScreen { content: ListContent::Items(sections) }
    }
}
