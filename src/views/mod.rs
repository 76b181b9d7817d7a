//! The screens of the application, as pure derivations of a store snapshot and a selection.
//!
//! Rendering is left to the application: these types only describe what has to be displayed.

mod agenda;
pub use agenda::{AgendaHeader, AgendaRow, AgendaScreen, AgendaView};
mod task_list;
pub use task_list::{Section, SectionKind, TaskListView, TaskRow, TodayScreen};

use crate::store::RevisionReceiver;


/// What a list displays: either its items, or a placeholder when there is nothing to show
#[derive(Clone, Debug, PartialEq)]
pub enum ListContent<T> {
    Empty(Placeholder),
    Items(T),
}

impl<T> ListContent<T> {
    pub fn is_empty(&self) -> bool {
        match self {
            ListContent::Empty(_) => true,
            _ => false,
        }
    }

    pub fn items(&self) -> Option<&T> {
        match self {
            ListContent::Items(items) => Some(items),
            ListContent::Empty(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        match self {
            ListContent::Empty(placeholder) => Some(placeholder),
            ListContent::Items(_) => None,
        }
    }
}

/// The "empty state" of a list
#[derive(Clone, Debug, PartialEq)]
pub struct Placeholder {
    pub text: String,
    pub height: u32,
}


/// Tells a view when the store has changed since it was last rendered
pub struct RenderTrigger {
    receiver: RevisionReceiver,
}

impl RenderTrigger {
    /// The trigger fires once right away, so that the first render happens
    pub fn new(mut receiver: RevisionReceiver) -> Self {
        receiver.mark_changed();
        Self { receiver }
    }

    /// Returns `true` (once) when the store has changed since the last call.
    /// A store that has been dropped never triggers anything anymore
    pub fn needs_render(&mut self) -> bool {
        match self.receiver.has_changed() {
            Ok(true) => {
                let revision = *self.receiver.borrow_and_update();
                log::debug!("Store is now at revision {}, rendering again", revision);
                true
            },
            Ok(false) => false,
            Err(_) => false,
        }
    }
}
