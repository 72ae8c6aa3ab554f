//! Error handling module for tabsh.
//!
//! This module provides the crate's error taxonomy:
//! - [`AutocompleteError`] - the engine's two leaf conditions, `InvalidArgument`
//!   (caller contract violation) and `NoMatch` (normal runtime outcome)
//! - [`ConfigError`] - configuration loading and validation failures
//! - [`TabshError`] - top-level error type wrapping the specific kinds
//!
//! # Example
//!
//! ```
//! use tabsh::error::{AutocompleteError, Result, TabshError};
//!
//! fn handle(err: AutocompleteError) -> Result<()> {
//!     match err {
//!         // Expected outcome: recovered locally, input left unchanged
//!         AutocompleteError::NoMatch => Ok(()),
//!         // Caller misuse: propagate
//!         AutocompleteError::InvalidArgument(_) => Err(TabshError::Autocomplete(err)),
//!     }
//! }
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{AutocompleteError, ConfigError, Result, TabshError};
