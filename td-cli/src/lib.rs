//! td - personal todo list CLI.
//!
//! Library target backing the `td` binary. Exposes the CLI definition and
//! the command handlers so integration tests can drive them directly.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
