//! References to the todo screen a task item links to.
//!
//! This only builds the reference. Performing the transition is up to the application.

use std::error::Error;

use url::Url;

use crate::Task;
use crate::config::ROUTE_SCHEME;
use crate::todo::TodoId;
use crate::traits::TaskStore;


/// A link to the screen of a todo list, tinted with the colour of that list
#[derive(Clone, Debug, PartialEq)]
pub struct TodoRoute {
    todo_id: TodoId,
    /// `None` when the todo list could not be found
    bg: Option<String>,
}

impl TodoRoute {
    pub fn new(todo_id: TodoId, bg: Option<String>) -> Self {
        Self { todo_id, bg }
    }

    /// The route to the parent todo list of a task.
    ///
    /// When the todo list does not exist, the route is still built, with no colour
    pub fn for_task<S: TaskStore + ?Sized>(task: &Task, store: &S) -> Self {
        let bg = match store.todo(task.todo_id()) {
            Some(todo) => Some(todo.bg_hex()),
            None => {
                log::warn!("Task {} refers to an unknown todo list {}", task.id(), task.todo_id());
                None
            },
        };
        Self::new(task.todo_id().clone(), bg)
    }

    pub fn todo_id(&self) -> &TodoId   { &self.todo_id }
    pub fn bg(&self) -> Option<&str>   { self.bg.as_deref() }

    /// Whether the todo list this route points to is known
    pub fn is_resolved(&self) -> bool {
        self.bg.is_some()
    }

    /// Render this route as a URL, e.g. `app:///groceries?bg=%23ff0000`
    pub fn to_url(&self) -> Result<Url, Box<dyn Error>> {
        let scheme = crate::config::read(&ROUTE_SCHEME);
        let mut url = Url::parse(&format!("{}:///", scheme))?;
        url.path_segments_mut()
            .map_err(|_| format!("Unable to build a route with scheme {:?}", scheme))?
            .clear()
            .push(self.todo_id.as_str());
        if let Some(bg) = &self.bg {
            url.query_pairs_mut().append_pair("bg", bg);
        }
        Ok(url)
    }
}
