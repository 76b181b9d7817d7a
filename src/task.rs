//! To-do tasks

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde::de::Error as _;
use uuid::Uuid;

use crate::todo::TodoId;
use crate::weekday::WeekdaySet;

/// The kind of a task.
///
/// A task is either simple or scheduled, never both
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// A task with no date, that is due every day until it is checked
    Simple,
    /// A task bound to a due date, or recurring on some weekdays
    Scheduled,
}

/// An optional due date, that can be switched off without losing its value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DueDate {
    pub enabled: bool,
    /// Local wall-clock time
    #[serde(deserialize_with = "deserialize_due_date")]
    pub date: NaiveDateTime,
}

/// Due dates are written either as local wall-clock times or as RFC 3339 timestamps with an offset.
/// The latter are converted to local time.
fn deserialize_due_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    if let Ok(date) = DateTime::parse_from_rfc3339(&text) {
        return Ok(date.with_timezone(&Local).naive_local());
    }
    text.parse::<NaiveDateTime>()
        .map_err(|err| D::Error::custom(format!("Invalid due date {:?}: {}", text, err)))
}

impl DueDate {
    /// An enabled due date
    pub fn on(date: NaiveDateTime) -> Self {
        Self { enabled: true, date }
    }

    /// A due date that has been switched off
    pub fn disabled(date: NaiveDateTime) -> Self {
        Self { enabled: false, date }
    }

    /// The calendar day of this due date
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Whether this due date falls on `day` (day granularity)
    pub fn falls_on(&self, day: NaiveDate) -> bool {
        self.day() == day
    }
}


/// The identifier of a task
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId {
    content: String,
}
impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}


/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,

    /// The display name of the task
    #[serde(default)]
    name: String,

    task_type: TaskType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<DueDate>,
    /// The weekdays a scheduled task comes back on.
    /// Only used when there is no enabled due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    repeat: Option<WeekdaySet>,

    is_checked: bool,

    /// The todo list this task belongs to. This is only used for lookups, the task does not own it
    todo_id: TodoId,
}

impl Task {
    /// Create a brand new simple task.
    /// This will pick a new (random) task ID.
    pub fn new_simple(name: String, todo_id: &TodoId) -> Self {
        Self::new_with_parameters(TaskId::random(), name, TaskType::Simple, None, None, false, todo_id.clone())
    }

    /// Create a brand new task that is due at a given date
    pub fn new_due(name: String, todo_id: &TodoId, date: NaiveDateTime) -> Self {
        Self::new_with_parameters(TaskId::random(), name, TaskType::Scheduled, Some(DueDate::on(date)), None, false, todo_id.clone())
    }

    /// Create a brand new task that comes back on some weekdays
    pub fn new_recurring(name: String, todo_id: &TodoId, repeat: WeekdaySet) -> Self {
        Self::new_with_parameters(TaskId::random(), name, TaskType::Scheduled, None, Some(repeat), false, todo_id.clone())
    }

    /// Create a new Task instance, with every field explicitly provided
    pub fn new_with_parameters(id: TaskId, name: String, task_type: TaskType,
                               due_date: Option<DueDate>, repeat: Option<WeekdaySet>,
                               is_checked: bool, todo_id: TodoId,
                            ) -> Self
    {
        Self {
            id,
            name,
            task_type,
            due_date,
            repeat,
            is_checked,
            todo_id,
        }
    }

    pub fn id(&self) -> &TaskId             { &self.id          }
    pub fn name(&self) -> &str              { &self.name        }
    pub fn task_type(&self) -> TaskType     { self.task_type    }
    pub fn is_checked(&self) -> bool        { self.is_checked   }
    pub fn todo_id(&self) -> &TodoId        { &self.todo_id     }
    pub fn due_date(&self) -> Option<&DueDate>      { self.due_date.as_ref() }
    pub fn repeat(&self) -> Option<&WeekdaySet>     { self.repeat.as_ref() }

    pub fn is_simple(&self) -> bool    { self.task_type == TaskType::Simple }
    pub fn is_scheduled(&self) -> bool { self.task_type == TaskType::Scheduled }

    /// Returns the due date, only if it is enabled
    pub fn enabled_due_date(&self) -> Option<&DueDate> {
        self.due_date.as_ref().filter(|due| due.enabled)
    }

    /// Check or uncheck this task
    pub fn set_checked(&mut self, checked: bool) {
        self.is_checked = checked;
    }

    /// Flip the checked state of this task, and returns the new state
    pub fn toggle_checked(&mut self) -> bool {
        self.is_checked = !self.is_checked;
        self.is_checked
    }

    pub fn set_name(&mut self, new_name: String) {
        self.name = new_name;
    }

    pub fn set_due_date(&mut self, due_date: Option<DueDate>) {
        self.due_date = due_date;
    }

    pub fn set_repeat(&mut self, repeat: Option<WeekdaySet>) {
        self.repeat = repeat;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_task_uses_app_field_names() {
        let json = r#"{
            "id": "t1",
            "name": "Water the plants",
            "taskType": "scheduled",
            "dueDate": { "enabled": false, "date": "2026-10-19T08:30:00" },
            "repeat": ["Mon", "thursday"],
            "isChecked": false,
            "todoId": "home"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id().as_str(), "t1");
        assert!(task.is_scheduled());
        assert!(task.enabled_due_date().is_none());
        assert_eq!(task.due_date().map(|d| d.enabled), Some(false));
        assert_eq!(task.due_date().map(|d| d.date), NaiveDate::from_ymd_opt(2026, 10, 19).and_then(|d| d.and_hms_opt(8, 30, 0)));
        assert_eq!(task.repeat(), Some(&(WeekdaySet::MONDAY | WeekdaySet::THURSDAY)));
        assert_eq!(task.todo_id().as_str(), "home");

        let back = serde_json::to_value(&task).unwrap();
        assert_eq!(back["taskType"], "scheduled");
        assert_eq!(back["isChecked"], false);
        assert_eq!(back["todoId"], "home");
        assert_eq!(back["repeat"], serde_json::json!(["Mon", "Thu"]));
    }

    #[test]
    fn due_date_with_an_offset_is_read_as_local_time() {
        let json = r#"{
            "id": "t3",
            "taskType": "scheduled",
            "dueDate": { "enabled": true, "date": "2026-10-19T08:30:00.000Z" },
            "isChecked": false,
            "todoId": "home"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        let expected = DateTime::parse_from_rfc3339("2026-10-19T08:30:00Z").unwrap().with_timezone(&Local).naive_local();
        let due = task.enabled_due_date().unwrap();
        assert_eq!(due.date, expected);
        assert!(due.falls_on(expected.date()));

        let due: DueDate = serde_json::from_str(r#"{"enabled":true,"date":"2026-10-19T10:30:00+02:00"}"#).unwrap();
        assert_eq!(due.date, expected);

        assert!(serde_json::from_str::<DueDate>(r#"{"enabled":true,"date":"next tuesday"}"#).is_err());
    }

    #[test]
    fn simple_task_has_no_date() {
        let task: Task = serde_json::from_str(r#"{"id":"t2","taskType":"simple","isChecked":true,"todoId":"x"}"#).unwrap();
        assert!(task.is_simple());
        assert!(task.is_checked());
        assert!(task.due_date().is_none());
        assert!(task.repeat().is_none());
        assert_eq!(task.name(), "");
    }

    #[test]
    fn toggle() {
        let mut task = Task::new_simple("Buy milk".to_string(), &TodoId::from("groceries"));
        assert_eq!(task.is_checked(), false);
        assert_eq!(task.toggle_checked(), true);
        assert_eq!(task.toggle_checked(), false);
        task.set_checked(true);
        assert!(task.is_checked());
    }
}
