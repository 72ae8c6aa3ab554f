//! Interactive shell for tabsh
//!
//! This module provides the interactive input surface around the completion
//! engine:
//! - Line editing with reedline, including a Tab binding that requests a
//!   completion for the typed prefix
//! - Command history management
//! - Input-line highlighting as the visible success/failure indicator
//!
//! The shell owns all UI state transitions; the engine itself stays pure.

mod completer;
mod engine;
mod highlighter;
mod prompt;

pub use completer::VocabCompleter;
pub use engine::ReplEngine;
pub use highlighter::CommandHighlighter;
pub use prompt::ShellPrompt;
