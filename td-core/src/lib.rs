//! Personal todo list with JSON persistence.
//!
//! This crate provides the core of `td`, a single-user command-line todo
//! list. It keeps an ordered list of tasks, each with a title and an integer
//! priority, and persists it as a JSON document in a per-user config
//! directory.
//!
//! ## Features
//!
//! - **Priority ordering**: The list is kept sorted by descending priority;
//!   a priority of zero means "assign automatically above everything else".
//! - **JSON storage**: One `td.json` file under `~/.config/td` (Unix) or
//!   `~\td` (Windows), created with owner-only permissions.
//! - **Missing file is not an error**: Loading with no config file yields an
//!   empty list, so the first invocation needs no setup.
//! - **Testable storage**: The config directory is threaded through the
//!   [`ListStorage`] constructor, so tests run against temporary
//!   directories without shared global state.
//!
//! ## Basic Usage
//!
//! ```rust
//! use td_core::{ListStorage, Todo, AUTO_PRIORITY};
//!
//! # fn example() -> td_core::Result<()> {
//! // Open storage at the default per-user location
//! let storage = ListStorage::new_default()?;
//!
//! // Load the list, add a task, save it back
//! let mut list = storage.load()?;
//! list.push(Todo::new("buy milk", AUTO_PRIORITY));
//! storage.save(&list)?;
//!
//! // Peek at the current task
//! println!("next up: {}", list.first().title);
//! # Ok(())
//! # }
//! ```

mod error;
mod paths;
mod storage;
mod types;

// Re-exports
pub use error::{Result, TdError};
pub use paths::{default_config_dir, CONFIG_FILE_NAME};
pub use storage::ListStorage;
pub use types::{Todo, Todolist, AUTO_PRIORITY, EMPTY_PLACEHOLDER_TITLE};
