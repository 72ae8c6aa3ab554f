//! Command-line interface for tabsh
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Mode selection (interactive shell vs one-shot subcommands)

pub mod completion;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::completion::CommandAutocompleter;
use crate::config::Config;
use crate::error::Result;

/// Deterministic command autocompletion shell
#[derive(Parser, Debug)]
#[command(
    name = "tabsh",
    version,
    about = "Deterministic command autocompletion shell",
    long_about = "An interactive shell built around a deterministic autocompletion engine:
a typed prefix always resolves to the lexicographically smallest matching
command keyword, or fails explicitly when no keyword matches."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Extra command keywords to add to the vocabulary
    #[arg(long = "command", value_name = "WORD")]
    pub extra_commands: Vec<String>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (debug logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for tabsh
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Resolve a prefix against the vocabulary and print the completion
    Complete {
        /// Prefix to complete
        #[arg(value_name = "PREFIX")]
        prefix: String,
    },

    /// List the effective command vocabulary
    Vocab,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show or validate configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        let args = CliArgs::parse();
        let config = Self::load_config(&args)?;

        Ok(Self { args, config })
    }

    /// Create a CLI interface from pre-parsed arguments
    ///
    /// # Arguments
    /// * `args` - Parsed command-line arguments
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {e}");
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    ///
    /// # Arguments
    /// * `config` - Configuration to modify
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        use crate::config::LogLevel;

        if args.no_color {
            config.display.color_output = false;
        }

        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };

        for command in &args.extra_commands {
            if !config.vocabulary.commands.contains(command) {
                config.vocabulary.commands.push(command.clone());
            }
        }
    }

    /// Build the command autocompleter from the effective vocabulary
    ///
    /// # Returns
    /// * `CommandAutocompleter` - Autocompleter over the configured vocabulary
    pub fn build_autocompleter(&self) -> CommandAutocompleter {
        CommandAutocompleter::new(self.config.vocabulary.commands.clone())
    }

    /// Get the configuration
    ///
    /// # Returns
    /// * `&Config` - Reference to configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    ///
    /// # Returns
    /// * `&CliArgs` - Reference to arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if a subcommand was handled, false to continue
    ///   into interactive mode
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Complete { prefix }) => {
                let autocompleter = self.build_autocompleter();
                let completed = autocompleter.autocomplete_command(prefix)?;
                println!("{completed}");
                Ok(true)
            }
            Some(Commands::Vocab) => {
                for command in &self.config.vocabulary.commands {
                    println!("{command}");
                }
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell)?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Show version information
    fn show_version(&self) {
        println!("tabsh version {}", env!("CARGO_PKG_VERSION"));
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file();
        }

        if show {
            self.show_config();
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("Configuration file does not exist");
            return;
        }

        match Config::load_from_file(self.args.config_file.as_deref()) {
            Ok(config) => match config.validate() {
                Ok(_) => println!("Configuration is valid"),
                Err(e) => println!("Configuration validation failed: {e}"),
            },
            Err(e) => println!("Failed to load configuration: {e}"),
        }
    }

    /// Show effective configuration
    fn show_config(&self) {
        let path = self.get_config_path();
        println!("Configuration file: {}", path.display());
        println!();

        match toml::to_string_pretty(&self.config) {
            Ok(toml_str) => println!("{toml_str}"),
            Err(e) => {
                eprintln!("Error formatting configuration: {e}");
                println!("{:#?}", self.config);
            }
        }
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_config_path)
    }

    /// Print banner for interactive mode
    pub fn print_banner(&self) {
        if !self.args.quiet {
            println!("tabsh {}", env!("CARGO_PKG_VERSION"));
            println!("Press Tab to complete a command, 'exit' to leave.");
        }
    }
}
