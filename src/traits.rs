use crate::Task;
use crate::todo::{Todo, TodoId};

/// A read-only view over the tasks and todo lists of the user.
///
/// Views receive a store rather than owning the data, and never mutate it
pub trait TaskStore {
    /// Returns every task, in the order they are stored
    fn tasks(&self) -> &[Task];
    /// Returns every todo list, in the order they are stored
    fn todos(&self) -> &[Todo];

    /// Returns the todo list matching `id`, if any
    fn todo(&self, id: &TodoId) -> Option<&Todo> {
        crate::todo::find_todo(self.todos(), id)
    }
}
