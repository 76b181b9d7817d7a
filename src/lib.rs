//! This crate derives what the screens of a personal todo application display.
//!
//! It provides the date strip of the agenda (a window of days around today, a selected day, and the snapping
//! arithmetic that keeps the selection centred) in the [`date_window`] module, and the rules that decide which
//! tasks show up on a given day in the [`filter`] module.
//!
//! Screens are described in the [`views`] module. They are pure functions of a [`TaskStore`](traits::TaskStore)
//! and of the current selection: they read the store, never mutate it. \
//! [`MemoryStore`](store::MemoryStore) is a simple store that notifies its subscribers whenever it changes,
//! so that views know when to render again.

pub mod traits;

mod task;
pub use task::{DueDate, Task, TaskId, TaskType};
pub mod todo;
pub use todo::{Todo, TodoId};
pub mod weekday;
pub use weekday::WeekdaySet;

pub mod date_window;
pub mod filter;
pub mod navigation;
pub mod store;
pub use store::MemoryStore;
pub mod views;

pub mod config;
pub mod utils;
