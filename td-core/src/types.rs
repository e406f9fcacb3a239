//! Core data types for the todo list.

use serde::{Deserialize, Serialize};

/// Priority value meaning "assign a priority automatically on push".
pub const AUTO_PRIORITY: i64 = 0;

/// Title of the placeholder todo returned by [`Todolist::first`] on an empty
/// list.
pub const EMPTY_PLACEHOLDER_TITLE: &str = "Empty!";

/// Gap left between auto-assigned priorities.
const PRIORITY_STEP: i64 = 10;

/// A single task entry: a title and an integer priority.
///
/// Higher priorities sort first. There is no id field; equality is by value
/// and duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub title: String,
    pub priority: i64,
}

impl Todo {
    /// Create a new todo. A priority of [`AUTO_PRIORITY`] requests
    /// auto-assignment when the todo is pushed onto a list.
    pub fn new(title: impl Into<String>, priority: i64) -> Self {
        Self {
            title: title.into(),
            priority,
        }
    }

    /// The placeholder returned when peeking at an empty list.
    fn placeholder() -> Self {
        Self::new(EMPTY_PLACEHOLDER_TITLE, 0)
    }
}

/// Ordered collection of todos, kept sorted by descending priority.
///
/// The list is rebuilt from the config file at the start of every invocation
/// and written back after mutating operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todolist {
    pub todos: Vec<Todo>,
}

impl Todolist {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a todo and re-sort the list in descending-priority order.
    ///
    /// A todo with priority [`AUTO_PRIORITY`] is assigned the current maximum
    /// priority plus a step, which places it at the front of the list. On an
    /// empty list the priority stays zero. Equal priorities keep their
    /// relative insertion order (`sort_by` is stable).
    pub fn push(&mut self, mut todo: Todo) {
        if todo.priority == AUTO_PRIORITY {
            todo.priority = self.next_priority();
        }
        self.todos.push(todo);
        self.todos.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Remove the front (highest-priority) todo. No-op on an empty list.
    pub fn pop(&mut self) {
        if !self.todos.is_empty() {
            self.todos.remove(0);
        }
    }

    /// Return the front todo without removing it.
    ///
    /// An empty list yields the placeholder `{ "Empty!", 0 }` so the
    /// no-argument CLI path always has something to print.
    pub fn first(&self) -> Todo {
        self.todos.first().cloned().unwrap_or_else(Todo::placeholder)
    }

    /// Drop every todo.
    pub fn clear(&mut self) {
        self.todos.clear();
    }

    /// Number of todos in the list.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the list has no todos.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Iterate over the todos in list (descending-priority) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    /// Priority for the next auto-assigned todo: strictly above every
    /// existing priority, zero on an empty list.
    fn next_priority(&self) -> i64 {
        self.todos
            .iter()
            .map(|t| t.priority)
            .max()
            .map(|max| max + PRIORITY_STEP)
            .unwrap_or(0)
    }
}
