//! # Per-Tab Navigation Stack
//!
//! One generic container, instantiated once per tab's route type.
//!
//! ```text
//! NavigationStack<R>
//! ├── path: Vec<R>            // index 0 = first push, last = visible
//! └── modal: Option<AppModal> // independent of path depth
//! ```
//!
//! An empty path means the tab's root screen is showing. Every operation is
//! total: popping an empty stack does nothing.

use crate::core::modal::AppModal;
use crate::core::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack<R: Route> {
    path: Vec<R>,
    modal: Option<AppModal>,
}

impl<R: Route> Default for NavigationStack<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Route> NavigationStack<R> {
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            modal: None,
        }
    }

    /// Appends `route`. The same destination may appear more than once.
    pub fn push(&mut self, route: R) {
        self.path.push(route);
    }

    /// Removes and returns the visible route, if any.
    pub fn pop(&mut self) -> Option<R> {
        self.path.pop()
    }

    /// Clears the whole path in one step. Returns how many routes were removed.
    pub fn pop_to_root(&mut self) -> usize {
        let removed = self.path.len();
        self.path.clear();
        removed
    }

    /// Replaces any currently presented modal.
    pub fn present_modal(&mut self, modal: AppModal) {
        self.modal = Some(modal);
    }

    /// Returns the modal that was dismissed, if any.
    pub fn dismiss_modal(&mut self) -> Option<AppModal> {
        self.modal.take()
    }

    pub fn path(&self) -> &[R] {
        &self.path
    }

    pub fn top(&self) -> Option<&R> {
        self.path.last()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn modal(&self) -> Option<&AppModal> {
        self.modal.as_ref()
    }

    /// Route identities, root-first.
    pub fn ids(&self) -> Vec<String> {
        self.path.iter().map(Route::id).collect()
    }
}
