//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Number of days shown before today in the date strip
pub const DAYS_BEFORE: i64 = 30;
/// Number of days shown after today in the date strip
pub const DAYS_AFTER: i64 = 30;
/// Number of date cells in a snap group. The selected date is centred in its group.
pub const DAYS_PER_SNAP: usize = 7;
/// Width of a single date cell
pub const ITEM_WIDTH: u32 = 50;
/// Height of the agenda's empty-state placeholder
pub const AGENDA_EMPTY_HEIGHT: u32 = 400;

/// Text displayed when no task is scheduled for the selected day.
/// Feel free to override it when initing this library.
pub static AGENDA_EMPTY_TEXT: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("No Tasks for this day".to_string())));

/// Text displayed when there is no task at all for today.
/// Feel free to override it when initing this library.
pub static TODAY_EMPTY_TEXT: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("No tasks for Today".to_string())));

/// Section titles of the today list, in display order (ongoing, finished, overdue)
pub static SECTION_TITLES: Lazy<Arc<Mutex<[String; 3]>>> = Lazy::new(|| Arc::new(Mutex::new([
    "ongoing".to_string(),
    "finished".to_string(),
    "past the due-date".to_string(),
])));

/// Scheme of the URLs built by [`TodoRoute::to_url`](crate::navigation::TodoRoute::to_url)
pub static ROUTE_SCHEME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("app".to_string())));

/// Returns a copy of the current value of a setting.
///
/// A poisoned setting still holds a usable value, so it is read anyway
pub fn read<T: Clone>(setting: &Lazy<Arc<Mutex<T>>>) -> T {
    match setting.lock() {
        Ok(value) => value.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Overrides the value of a setting
pub fn set<T>(setting: &Lazy<Arc<Mutex<T>>>, new_value: T) {
    match setting.lock() {
        Ok(mut value) => *value = new_value,
        Err(poisoned) => *poisoned.into_inner() = new_value,
    }
}
