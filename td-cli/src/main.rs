//! td - personal todo list CLI.
//!
//! Commands:
//! - `td` (no args): Print the title of the current todo
//! - `td <title>`: Add a new todo with an auto-assigned priority
//! - `td ls`: Show the todo list, one title per line
//! - `td pop`: Finish the current todo
//! - `td clear`: Clear the todo list
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error, or `ls` on an empty list

use clap::Parser;
use tracing_subscriber::EnvFilter;

use td::cli::{Cli, Commands};
use td::commands;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("td=debug,td_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(dispatch_command(cli));
}

/// Dispatch a parsed CLI to the appropriate command handler.
fn dispatch_command(cli: Cli) -> i32 {
    let storage = match commands::resolve_storage() {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    match cli.command {
        None => result_to_exit(commands::show_first(&storage)),
        Some(Commands::Ls) => match commands::ls(&storage) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        },
        Some(Commands::Pop) => result_to_exit(commands::pop(&storage)),
        Some(Commands::Clear) => result_to_exit(commands::clear(&storage)),
        // External subcommand: the first captured argument is the title,
        // matching the original surface where trailing arguments are ignored.
        Some(Commands::Add(args)) => match args.first() {
            Some(title) => result_to_exit(commands::add(&storage, title)),
            None => {
                eprintln!("Error: no todo title given");
                1
            }
        },
    }
}

/// Convert a `Result<(), E: Display>` to an exit code.
fn result_to_exit<E: std::fmt::Display>(result: Result<(), E>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_no_args() {
        let cli = Cli::parse_from(["td"]);
        assert!(!cli.debug);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parsing_debug() {
        let cli = Cli::parse_from(["td", "--debug"]);
        assert!(cli.debug);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parsing_ls() {
        let cli = Cli::parse_from(["td", "ls"]);
        assert!(matches!(cli.command, Some(Commands::Ls)));
    }

    #[test]
    fn test_cli_parsing_pop() {
        let cli = Cli::parse_from(["td", "pop"]);
        assert!(matches!(cli.command, Some(Commands::Pop)));
    }

    #[test]
    fn test_cli_parsing_clear() {
        let cli = Cli::parse_from(["td", "clear"]);
        assert!(matches!(cli.command, Some(Commands::Clear)));
    }

    #[test]
    fn test_cli_parsing_unrecognized_arg_is_add() {
        let cli = Cli::parse_from(["td", "buy milk"]);
        match cli.command {
            Some(Commands::Add(args)) => assert_eq!(args, vec!["buy milk".to_string()]),
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_keeps_trailing_args() {
        let cli = Cli::parse_from(["td", "buy", "milk"]);
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args[0], "buy");
                assert_eq!(args.len(), 2);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_result_to_exit_ok() {
        let result: Result<(), String> = Ok(());
        assert_eq!(result_to_exit(result), 0);
    }

    #[test]
    fn test_result_to_exit_err() {
        let result: Result<(), String> = Err("something failed".to_string());
        assert_eq!(result_to_exit(result), 1);
    }
}
