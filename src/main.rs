//! Tabsh - deterministic command autocompletion shell
//!
//! An interactive shell built around a deterministic autocompletion engine.
//! A typed prefix always resolves to the lexicographically smallest matching
//! command keyword; when nothing matches, the input stays unchanged and the
//! command word is highlighted as an error.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! tabsh
//!
//! # One-shot completion
//! tabsh complete ad
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod completion;
mod config;
mod error;
mod repl;

use cli::CliInterface;
use completion::CommandAutocompleter;
use error::Result;
use repl::ReplEngine;

/// Application entry point
fn main() {
    // Initialize the application and handle any errors
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Main application logic
///
/// This function orchestrates the application startup:
/// 1. Parse command-line arguments
/// 2. Load configuration
/// 3. Initialize logging
/// 4. Handle subcommands or start the interactive shell
///
/// # Returns
/// * `Result<()>` - Success or error
fn run() -> Result<()> {
    // Parse command-line arguments and load configuration
    let cli = CliInterface::new()?;

    // Initialize logging based on verbosity
    initialize_logging(&cli);

    // Handle subcommands (version, complete, vocab, completion, config)
    if cli.handle_subcommand()? {
        return Ok(());
    }

    // Print banner if not in quiet mode
    cli.print_banner();

    // Run in interactive mode
    run_interactive_mode(&cli)
}

/// Run application in interactive shell mode
fn run_interactive_mode(cli: &CliInterface) -> Result<()> {
    let autocompleter = cli.build_autocompleter();
    info!(
        vocabulary_size = autocompleter.vocabulary().len(),
        "starting interactive shell"
    );

    let mut repl = ReplEngine::new(autocompleter.clone(), cli.config())?;
    run_repl_loop(&mut repl, &autocompleter)?;

    println!("Goodbye!");
    Ok(())
}

/// Main shell loop
fn run_repl_loop(repl: &mut ReplEngine, autocompleter: &CommandAutocompleter) -> Result<()> {
    while repl.is_running() {
        let input = match repl.read_line()? {
            Some(line) if !line.trim().is_empty() => line,
            Some(_) => continue,
            None => break,
        };

        if !dispatch_input(autocompleter, input.trim()) {
            repl.stop();
        }
    }

    Ok(())
}

/// Handle one line of input
///
/// The shell only demonstrates the embedding contract: recognized commands
/// are acknowledged, unknown input gets a non-fatal error line. Command
/// semantics beyond recognition are the host application's concern.
///
/// # Arguments
/// * `autocompleter` - Command autocompleter with the vocabulary
/// * `input` - Trimmed input line
///
/// # Returns
/// * `bool` - False when the shell should exit
fn dispatch_input(autocompleter: &CommandAutocompleter, input: &str) -> bool {
    let word = input.split_whitespace().next().unwrap_or("");

    match word {
        "exit" => false,
        "help" => {
            println!("Known commands:");
            for command in autocompleter.vocabulary() {
                println!("  {command}");
            }
            true
        }
        w if autocompleter.is_known_command(w) => {
            println!("{w}: recognized command");
            true
        }
        w => {
            eprintln!("{w}: unknown command (try 'help')");
            true
        }
    }
}

/// Initialize logging system based on configuration and verbosity
///
/// The `TABSH_LOG` environment variable overrides the configured level.
///
/// # Arguments
/// * `cli` - CLI interface with verbosity settings
fn initialize_logging(cli: &CliInterface) {
    let level = cli.config().logging.level.to_tracing_level();
    let filter = EnvFilter::try_from_env("TABSH_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // Build subscriber with level filter
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // Configure timestamps
    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_autocompleter() -> CommandAutocompleter {
        CommandAutocompleter::new(vec![
            "add".to_string(),
            "exit".to_string(),
            "list".to_string(),
        ])
    }

    #[test]
    fn test_dispatch_exit() {
        assert!(!dispatch_input(&test_autocompleter(), "exit"));
    }

    #[test]
    fn test_dispatch_recognized_command() {
        assert!(dispatch_input(&test_autocompleter(), "add John"));
    }

    #[test]
    fn test_dispatch_unknown_command() {
        assert!(dispatch_input(&test_autocompleter(), "frobnicate"));
    }

    #[test]
    fn test_dispatch_help() {
        assert!(dispatch_input(&test_autocompleter(), "help"));
    }
}
