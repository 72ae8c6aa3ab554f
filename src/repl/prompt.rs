//! Custom prompt implementation for tabsh

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Custom prompt for the tabsh shell
pub struct ShellPrompt {
    /// Shell name shown in the prompt
    name: String,
}

impl ShellPrompt {
    /// Create a new shell prompt
    ///
    /// # Arguments
    /// * `name` - Shell name shown in the prompt
    ///
    /// # Returns
    /// * `Self` - New prompt
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Default for ShellPrompt {
    fn default() -> Self {
        Self::new("tabsh".to_string())
    }
}

impl Prompt for ShellPrompt {
    /// Render the left prompt (main prompt)
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - Prompt string
    fn render_prompt_left(&self) -> std::borrow::Cow<'_, str> {
        format!("{}> ", self.name).into()
    }

    /// Render the right prompt (empty in our case)
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - Right prompt string (empty)
    fn render_prompt_right(&self) -> std::borrow::Cow<'_, str> {
        "".into()
    }

    /// Render the prompt indicator
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - Indicator string (empty since we include it in left prompt)
    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> std::borrow::Cow<'_, str> {
        "".into()
    }

    /// Render the multiline prompt indicator
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - Multiline indicator
    fn render_prompt_multiline_indicator(&self) -> std::borrow::Cow<'_, str> {
        "... ".into()
    }

    /// Render the history search prompt
    ///
    /// # Arguments
    /// * `history_search` - History search state
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - History search prompt
    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> std::borrow::Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_prompt() {
        let prompt = ShellPrompt::new("tabsh".to_string());
        let rendered = prompt.render_prompt_left();
        assert_eq!(rendered, "tabsh> ");
    }

    #[test]
    fn test_default_prompt() {
        let prompt = ShellPrompt::default();
        assert_eq!(prompt.render_prompt_left(), "tabsh> ");
    }

    #[test]
    fn test_right_prompt_empty() {
        let prompt = ShellPrompt::default();
        assert_eq!(prompt.render_prompt_right(), "");
    }

    #[test]
    fn test_indicator_empty() {
        let prompt = ShellPrompt::default();
        let rendered = prompt.render_prompt_indicator(PromptEditMode::Default);
        assert_eq!(rendered, "");
    }

    #[test]
    fn test_multiline_indicator() {
        let prompt = ShellPrompt::default();
        assert_eq!(prompt.render_prompt_multiline_indicator(), "... ");
    }
}
