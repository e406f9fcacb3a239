//! CLI definition for the td command-line interface.
//!
//! This module is self-contained — it only depends on `clap` so the surface
//! stays easy to audit: three named subcommands, and everything else is a
//! new todo title.

use clap::{Parser, Subcommand};

/// td - personal todo list
///
/// With no arguments, prints the title of the current (highest-priority)
/// todo. Any unrecognized first argument becomes the title of a new todo.
#[derive(Parser, Debug)]
#[command(name = "td")]
#[command(version)]
#[command(about = "Personal todo list manager")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the todo list, one title per line
    Ls,
    /// Finish the current todo
    Pop,
    /// Clear the todo list
    Clear,
    /// Add a new todo (any unrecognized argument becomes the title)
    #[command(external_subcommand)]
    Add(Vec<String>),
}
