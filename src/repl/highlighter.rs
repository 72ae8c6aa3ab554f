//! Input-line highlighter - the shell's success/failure indicator
//!
//! The original intent of a command box that flips to an error style when a
//! completion or command lookup fails is expressed here as live highlighting:
//! the command word turns red as soon as no vocabulary entry can match it,
//! green once it is an exact keyword, and stays unstyled while it is still a
//! viable prefix.

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use crate::completion::CommandAutocompleter;

/// Highlighter for the command word of the input line
pub struct CommandHighlighter {
    /// Command autocompleter holding the fixed vocabulary
    autocompleter: CommandAutocompleter,

    /// Whether highlighting is enabled
    enabled: bool,
}

impl CommandHighlighter {
    /// Create a new command highlighter
    ///
    /// # Arguments
    /// * `autocompleter` - Command autocompleter with the vocabulary
    /// * `enabled` - Enable highlighting
    ///
    /// # Returns
    /// * `Self` - New highlighter
    pub fn new(autocompleter: CommandAutocompleter, enabled: bool) -> Self {
        Self {
            autocompleter,
            enabled,
        }
    }

    /// Pick the style for the command word
    fn command_style(&self, word: &str) -> Style {
        if self.autocompleter.is_known_command(word) {
            Color::Green.bold().into()
        } else if self.autocompleter.is_viable_prefix(word) {
            Style::default()
        } else {
            // Failure cue: nothing in the vocabulary can complete this
            Color::Red.into()
        }
    }
}

impl Highlighter for CommandHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();

        if !self.enabled || line.is_empty() {
            styled.push((Style::default(), line.to_string()));
            return styled;
        }

        let word_end = line
            .find(char::is_whitespace)
            .unwrap_or(line.len());
        let (word, rest) = line.split_at(word_end);

        styled.push((self.command_style(word), word.to_string()));
        if !rest.is_empty() {
            styled.push((Style::default(), rest.to_string()));
        }

        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_highlighter(enabled: bool) -> CommandHighlighter {
        CommandHighlighter::new(
            CommandAutocompleter::new(vec![
                "add".to_string(),
                "delete".to_string(),
                "exit".to_string(),
            ]),
            enabled,
        )
    }

    #[test]
    fn test_known_command_styled_green() {
        let highlighter = create_test_highlighter(true);
        let styled = highlighter.highlight("add", 3);
        let green: Style = Color::Green.bold().into();
        assert_eq!(styled.buffer[0], (green, "add".to_string()));
    }

    #[test]
    fn test_viable_prefix_unstyled() {
        let highlighter = create_test_highlighter(true);
        let styled = highlighter.highlight("de", 2);
        assert_eq!(styled.buffer[0], (Style::default(), "de".to_string()));
    }

    #[test]
    fn test_unmatchable_word_styled_red() {
        let highlighter = create_test_highlighter(true);
        let styled = highlighter.highlight("xyz", 3);
        let red: Style = Color::Red.into();
        assert_eq!(styled.buffer[0], (red, "xyz".to_string()));
    }

    #[test]
    fn test_arguments_after_command_unstyled() {
        let highlighter = create_test_highlighter(true);
        let styled = highlighter.highlight("add John Doe", 12);
        assert_eq!(styled.buffer.len(), 2);
        assert_eq!(styled.buffer[1], (Style::default(), " John Doe".to_string()));
    }

    #[test]
    fn test_disabled_highlighting_passes_through() {
        let highlighter = create_test_highlighter(false);
        let styled = highlighter.highlight("xyz", 3);
        assert_eq!(styled.buffer[0], (Style::default(), "xyz".to_string()));
        assert_eq!(styled.render_simple(), "xyz");
    }

    #[test]
    fn test_render_preserves_text() {
        let highlighter = create_test_highlighter(true);
        let styled = highlighter.highlight("delete 3", 8);
        assert_eq!(styled.render_simple(), "delete 3");
    }
}
