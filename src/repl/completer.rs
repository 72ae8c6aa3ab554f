//! Completer for reedline - surfaces the engine's single winner
//!
//! Unlike list-style completers, this one never offers alternatives: the
//! engine either commits to exactly one completion or the suggestion list
//! stays empty and the input is left unchanged.

use reedline::{Completer, Span, Suggestion};
use tracing::trace;

use crate::completion::CommandAutocompleter;

/// Vocabulary completer for reedline
pub struct VocabCompleter {
    /// Command autocompleter holding the fixed vocabulary
    autocompleter: CommandAutocompleter,
}

impl VocabCompleter {
    /// Create a new vocabulary completer
    ///
    /// # Arguments
    /// * `autocompleter` - Command autocompleter with the vocabulary
    ///
    /// # Returns
    /// * `Self` - New completer
    pub fn new(autocompleter: CommandAutocompleter) -> Self {
        Self { autocompleter }
    }
}

impl Completer for VocabCompleter {
    /// Complete the input at the given cursor position
    ///
    /// Commands are anchored at the start of the line, so completion only
    /// applies while the first word is being typed. On success the single
    /// winning keyword replaces the typed prefix and a trailing space is
    /// appended; on failure the list is empty.
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - At most one suggestion
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let typed = &line[..pos];

        // Past the command word: nothing to complete
        if typed.contains(char::is_whitespace) {
            return Vec::new();
        }

        match self.autocompleter.autocomplete_command(typed) {
            Ok(completed) => vec![Suggestion {
                value: completed,
                description: None,
                style: None,
                extra: None,
                span: Span::new(0, pos),
                append_whitespace: true,
                match_indices: None,
            }],
            Err(e) => {
                trace!(prefix = typed, error = %e, "no completion");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_completer() -> VocabCompleter {
        VocabCompleter::new(CommandAutocompleter::new(vec![
            "add".to_string(),
            "adda".to_string(),
            "delete".to_string(),
            "exit".to_string(),
        ]))
    }

    #[test]
    fn test_complete_single_winner() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("ad", 2);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value, "add");
        assert!(suggestions[0].append_whitespace);
    }

    #[test]
    fn test_span_covers_typed_prefix() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("del", 3);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].span.start, 0);
        assert_eq!(suggestions[0].span.end, 3);
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("xyz", 3);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_no_completion_past_first_word() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("add na", 6);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_empty_line_completes_to_lexical_minimum() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("", 0);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value, "add");
    }

    #[test]
    fn test_completion_ignores_text_after_cursor() {
        let mut completer = create_test_completer();
        // Cursor after "e" with trailing garbage beyond it
        let suggestions = completer.complete("exyz", 1);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value, "exit");
    }
}
