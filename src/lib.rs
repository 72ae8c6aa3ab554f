//! Tabsh - deterministic command autocompletion
//!
//! This library provides the core functionality for tabsh: an autocompletion
//! engine that resolves a typed prefix against a set of known command
//! keywords to exactly one completion (lexical priority), or fails with an
//! explicit, typed error.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `completion`: The autocompletion engine and its command adapter
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `repl`: Interactive shell around the engine
//!
//! # Example
//!
//! ```
//! use tabsh::completion::CommandAutocompleter;
//!
//! let autocompleter = CommandAutocompleter::new(vec![
//!     "add".to_string(),
//!     "delete".to_string(),
//!     "find".to_string(),
//! ]);
//!
//! assert_eq!(autocompleter.autocomplete_command("f").unwrap(), "find");
//! assert!(autocompleter.autocomplete_command("xyz").is_err());
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod repl;

// Re-export commonly used types
pub use completion::{Autocompleter, CommandAutocompleter};
pub use config::Config;
pub use error::{AutocompleteError, Result, TabshError};
pub use repl::ReplEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
