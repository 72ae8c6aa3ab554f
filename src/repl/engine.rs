//! Shell engine - reedline setup and the read loop

use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use tracing::debug;

use crate::completion::CommandAutocompleter;
use crate::config::Config;
use crate::error::{Result, TabshError};

use super::completer::VocabCompleter;
use super::highlighter::CommandHighlighter;
use super::prompt::ShellPrompt;

/// Name of the reedline completion menu driven by the Tab key
const COMPLETION_MENU: &str = "completion_menu";

/// Shell engine for interactive input
pub struct ReplEngine {
    /// Line editor
    editor: Reedline,

    /// Prompt renderer
    prompt: ShellPrompt,

    /// Whether to continue running
    running: bool,
}

impl ReplEngine {
    /// Create a new shell engine
    ///
    /// The engine wires the Tab key to a completion request: the vocabulary
    /// completer yields at most one suggestion, so a Tab press either inserts
    /// the winning keyword (with its trailing space) or leaves the input
    /// unchanged.
    ///
    /// # Arguments
    /// * `autocompleter` - Command autocompleter with the vocabulary
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `Result<Self>` - New shell engine or error
    pub fn new(autocompleter: CommandAutocompleter, config: &Config) -> Result<Self> {
        let completer = VocabCompleter::new(autocompleter.clone());
        let highlighter = CommandHighlighter::new(
            autocompleter,
            config.display.syntax_highlighting && config.display.color_output,
        );

        let completion_menu = Box::new(ColumnarMenu::default().with_name(COMPLETION_MENU));

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let mut editor = Reedline::create()
            .with_completer(Box::new(completer))
            .with_highlighter(Box::new(highlighter))
            .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
            .with_edit_mode(Box::new(Emacs::new(keybindings)));

        if config.history.persist {
            let history = FileBackedHistory::with_file(
                config.history.max_size,
                config.history.file_path.clone(),
            )
            .map_err(|e| TabshError::Generic(format!("History error: {e}")))?;
            editor = editor.with_history(Box::new(history));
        }

        Ok(Self {
            editor,
            prompt: ShellPrompt::default(),
            running: true,
        })
    }

    /// Read a single line of input
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input line or None on EOF / interrupt
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.read_line(&self.prompt) {
            Ok(Signal::Success(line)) => Ok(Some(line)),
            Ok(Signal::CtrlC) => {
                // Ctrl-C
                debug!("interrupted");
                Ok(None)
            }
            Ok(Signal::CtrlD) => {
                // Ctrl-D
                debug!("end of input");
                Ok(None)
            }
            Err(err) => Err(TabshError::Generic(format!("Read error: {err}"))),
        }
    }

    /// Stop the shell
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Check if the shell is still running
    ///
    /// # Returns
    /// * `bool` - True if running
    pub fn is_running(&self) -> bool {
        self.running
    }
}
