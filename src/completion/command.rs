//! Command autocompleter - binds the engine to a fixed command vocabulary
//!
//! This is the adapter boundary between the pure engine and an interactive
//! input surface. The vocabulary is an immutable configuration value injected
//! at construction time, never shared mutable state.

use tracing::debug;

use super::Autocompleter;
use crate::error::AutocompleteError;

/// Autocompleter for a fixed set of command keywords
#[derive(Debug, Clone)]
pub struct CommandAutocompleter {
    /// Recognized command keywords
    vocabulary: Vec<String>,

    /// Underlying resolution engine
    autocompleter: Autocompleter,
}

impl CommandAutocompleter {
    /// Create a new command autocompleter
    ///
    /// # Arguments
    /// * `vocabulary` - Recognized command keywords, in any order
    ///
    /// # Returns
    /// * `Self` - New command autocompleter
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self {
            vocabulary,
            autocompleter: Autocompleter::new(),
        }
    }

    /// Get the command vocabulary
    ///
    /// # Returns
    /// * `&[String]` - Recognized command keywords
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Autocomplete a partially typed command
    ///
    /// # Arguments
    /// * `text` - The typed text, treated in full as the command prefix
    ///
    /// # Returns
    /// * `Result<String, AutocompleteError>` - Completed command keyword
    pub fn autocomplete_command(&self, text: &str) -> Result<String, AutocompleteError> {
        let result = self
            .autocompleter
            .autocomplete_with_lexical_priority(Some(text), Some(self.vocabulary.as_slice()));
        debug!(prefix = text, ?result, "autocomplete request");
        result
    }

    /// Check whether a word is a recognized command keyword
    ///
    /// # Arguments
    /// * `word` - Word to check
    ///
    /// # Returns
    /// * `bool` - True if the word is in the vocabulary
    pub fn is_known_command(&self, word: &str) -> bool {
        self.vocabulary.iter().any(|command| command == word)
    }

    /// Check whether a word could still become a recognized command
    ///
    /// # Arguments
    /// * `word` - Word to check
    ///
    /// # Returns
    /// * `bool` - True if some vocabulary entry starts with the word
    pub fn is_viable_prefix(&self, word: &str) -> bool {
        self.vocabulary
            .iter()
            .any(|command| command.starts_with(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_autocompleter() -> CommandAutocompleter {
        CommandAutocompleter::new(vec![
            "add".to_string(),
            "clear".to_string(),
            "delete".to_string(),
            "edit".to_string(),
            "exit".to_string(),
            "find".to_string(),
            "help".to_string(),
            "list".to_string(),
        ])
    }

    #[test]
    fn test_autocomplete_command() {
        let autocompleter = create_test_autocompleter();
        assert_eq!(autocompleter.autocomplete_command("f").unwrap(), "find");
        assert_eq!(autocompleter.autocomplete_command("cl").unwrap(), "clear");
    }

    #[test]
    fn test_autocomplete_command_lexical_tie_break() {
        // "e" matches both "edit" and "exit"; "edit" is lexically smaller
        let autocompleter = create_test_autocompleter();
        assert_eq!(autocompleter.autocomplete_command("e").unwrap(), "edit");
    }

    #[test]
    fn test_autocomplete_command_no_match() {
        let autocompleter = create_test_autocompleter();
        let result = autocompleter.autocomplete_command("xyz");
        assert_eq!(result, Err(AutocompleteError::NoMatch));
    }

    #[test]
    fn test_empty_vocabulary_never_completes() {
        let autocompleter = CommandAutocompleter::new(Vec::new());
        assert_eq!(
            autocompleter.autocomplete_command("a"),
            Err(AutocompleteError::NoMatch)
        );
    }

    #[test]
    fn test_is_known_command() {
        let autocompleter = create_test_autocompleter();
        assert!(autocompleter.is_known_command("add"));
        assert!(!autocompleter.is_known_command("ad"));
        assert!(!autocompleter.is_known_command("remove"));
    }

    #[test]
    fn test_is_viable_prefix() {
        let autocompleter = create_test_autocompleter();
        assert!(autocompleter.is_viable_prefix("ad"));
        assert!(autocompleter.is_viable_prefix(""));
        assert!(!autocompleter.is_viable_prefix("adx"));
    }

    #[test]
    fn test_vocabulary_accessor() {
        let autocompleter = create_test_autocompleter();
        assert_eq!(autocompleter.vocabulary().len(), 8);
        assert!(autocompleter.vocabulary().contains(&"help".to_string()));
    }
}
