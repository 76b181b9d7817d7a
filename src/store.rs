//! This module provides an in-memory task store, that can be saved to and loaded from a JSON file

use std::path::{Path, PathBuf};
use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::Task;
use crate::task::TaskId;
use crate::todo::Todo;
use crate::traits::TaskStore;


/// See [`MemoryStore::subscribe`]
pub type RevisionSender = tokio::sync::watch::Sender<u64>;
/// See [`MemoryStore::subscribe`]
pub type RevisionReceiver = tokio::sync::watch::Receiver<u64>;


/// A task store that keeps everything in memory, and notifies its subscribers whenever it changes
#[derive(Debug)]
pub struct MemoryStore {
    backing_file: Option<PathBuf>,
    data: StoreData,

    revision: u64,
    notifier: RevisionSender,
}

/// The user data, as it is saved to disk
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl MemoryStore {
    /// An empty store, that is not backed by any file
    pub fn new() -> Self {
        Self::from_data(StoreData::default())
    }

    pub fn from_data(data: StoreData) -> Self {
        let (notifier, _) = tokio::sync::watch::channel(0);
        Self {
            backing_file: None,
            data,
            revision: 0,
            notifier,
        }
    }

    /// Initialize a store from the content of a valid backing file if it exists.
    /// Returns an error otherwise
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let data = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            },
            Ok(file) => serde_json::from_reader(file)?,
        };

        let mut store = Self::from_data(data);
        store.backing_file = Some(PathBuf::from(path));
        Ok(store)
    }

    /// Store the current data to the backing file (if any)
    pub fn save_to_file(&self) -> Result<(), Box<dyn Error>> {
        match &self.backing_file {
            None => Err("This store has no backing file".into()),
            Some(path) => self.save_to(path),
        }
    }

    /// Store the current data to a given file, and keep it as the backing file
    pub fn save_as(&mut self, path: &Path) -> Result<(), Box<dyn Error>> {
        self.save_to(path)?;
        self.backing_file = Some(PathBuf::from(path));
        Ok(())
    }

    fn save_to(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let file = std::fs::File::create(path)
            .map_err(|err| format!("Unable to save file {:?}: {}", path, err))?;
        serde_json::to_writer(file, &self.data)?;
        log::debug!("Saved {} tasks and {} todos to {:?}", self.data.tasks.len(), self.data.todos.len(), path);
        Ok(())
    }

    pub fn backing_file(&self) -> Option<&Path> {
        self.backing_file.as_deref()
    }

    /// A copy of the whole content of this store
    pub fn snapshot(&self) -> StoreData {
        self.data.clone()
    }

    /// The number of changes since this store has been created
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Get notified of changes.
    ///
    /// The receiver always holds the latest revision; consumers should derive their views again when it changes
    pub fn subscribe(&self) -> RevisionReceiver {
        self.notifier.subscribe()
    }

    fn notify(&mut self) {
        self.revision += 1;
        // Stored even when nobody is subscribed yet
        self.notifier.send_replace(self.revision);
    }


    pub fn add_task(&mut self, task: Task) {
        self.data.tasks.push(task);
        self.notify();
    }

    pub fn add_todo(&mut self, todo: Todo) {
        self.data.todos.push(todo);
        self.notify();
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.data.tasks.iter().find(|task| task.id() == id)
    }

    /// Remove a task. Returns an error if it does not exist.
    pub fn remove_task(&mut self, id: &TaskId) -> Result<Task, Box<dyn Error>> {
        let position = self.data.tasks.iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| format!("No task with id {}", id))?;
        let removed = self.data.tasks.remove(position);
        self.notify();
        Ok(removed)
    }

    /// Check or uncheck a task
    pub fn set_checked(&mut self, id: &TaskId, checked: bool) -> Result<(), Box<dyn Error>> {
        self.task_mut(id)?.set_checked(checked);
        self.notify();
        Ok(())
    }

    /// Flip the checked state of a task, and returns its new state
    pub fn toggle_checked(&mut self, id: &TaskId) -> Result<bool, Box<dyn Error>> {
        let checked = self.task_mut(id)?.toggle_checked();
        self.notify();
        Ok(checked)
    }

    fn task_mut(&mut self, id: &TaskId) -> Result<&mut Task, Box<dyn Error>> {
        match self.data.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => Ok(task),
            None => Err(format!("No task with id {}", id).into()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for MemoryStore {
    fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }

    fn todos(&self) -> &[Todo] {
        &self.data.todos
    }
}

impl TaskStore for StoreData {
    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn todos(&self) -> &[Todo] {
        &self.todos
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::todo::TodoId;

    fn sample() -> MemoryStore {
        let mut store = MemoryStore::new();
        let todo = Todo::with_css_color(TodoId::from("home"), "Home".to_string(), "#336699").unwrap();
        store.add_todo(todo);
        store.add_task(Task::new_simple("Vacuum".to_string(), &TodoId::from("home")));
        store
    }

    #[test]
    fn serde_store() {
        let path = PathBuf::from(String::from("test_store_serde.json"));

        let mut store = sample();
        store.save_as(&path).unwrap();

        let retrieved = MemoryStore::from_file(&path).unwrap();
        assert_eq!(store.snapshot(), retrieved.snapshot());
        assert_eq!(retrieved.backing_file(), Some(path.as_path()));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file() {
        assert!(MemoryStore::from_file(Path::new("this/file/does/not/exist.json")).is_err());
        assert!(MemoryStore::new().save_to_file().is_err());
    }

    #[test]
    fn mutations() {
        let mut store = sample();
        assert_eq!(store.revision(), 2);

        let id = store.tasks()[0].id().clone();
        assert_eq!(store.toggle_checked(&id).unwrap(), true);
        assert!(store.task(&id).unwrap().is_checked());
        store.set_checked(&id, false).unwrap();
        assert_eq!(store.task(&id).unwrap().is_checked(), false);
        assert_eq!(store.revision(), 4);

        let unknown = TaskId::from("nope");
        assert!(store.toggle_checked(&unknown).is_err());
        assert!(store.remove_task(&unknown).is_err());
        assert_eq!(store.revision(), 4);

        store.remove_task(&id).unwrap();
        assert!(store.tasks().is_empty());
        assert!(store.todo(&TodoId::from("home")).is_some());
    }

    #[tokio::test]
    async fn subscribers_are_notified() {
        let mut store = sample();
        let mut receiver = store.subscribe();
        assert_eq!(*receiver.borrow(), 2);

        let id = store.tasks()[0].id().clone();
        store.toggle_checked(&id).unwrap();

        receiver.changed().await.unwrap();
        assert_eq!(*receiver.borrow(), 3);
    }
}
