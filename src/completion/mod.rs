//! Completion engine for tabsh
//!
//! This module provides a deterministic, stateless autocompletion engine:
//! given a typed prefix and a set of candidate keywords, it resolves the
//! prefix to exactly one completion or fails explicitly.
//!
//! # Architecture
//!
//! The engine consists of two components:
//!
//! - **Autocompleter**: the pure resolution algorithm (lexical priority)
//! - **CommandAutocompleter**: a thin adapter binding the engine to a fixed
//!   command vocabulary injected at construction time
//!
//! # Examples
//!
//! ```
//! use tabsh::completion::Autocompleter;
//!
//! let autocompleter = Autocompleter::new();
//! let vocabulary = vec!["add".to_string(), "adda".to_string()];
//! let result = autocompleter.autocomplete_with_lexical_priority(Some("ad"), Some(vocabulary.as_slice()));
//! assert_eq!(result.unwrap(), "add");
//! ```

mod autocompleter;
mod command;

pub use autocompleter::Autocompleter;
pub use command::CommandAutocompleter;
