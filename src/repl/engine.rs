use reedline::{
    Emacs, ExternalPrinter, FileBackedHistory, KeyCode, KeyModifiers, Reedline, ReedlineEvent,
    ReedlineMenu, Signal, default_emacs_keybindings,
};

use std::sync::Arc;

use crate::config::{DisplayConfig, HistoryConfig};
use crate::error::{ConfigureError, Result};

use super::completer::ConfigCompleter;
use super::completion::CommandTree;
use super::highlighter::GrammarHighlighter;
use super::hinter::GrammarHinter;
use super::menu::CompletionMenu;
use super::prompt::ConfigPrompt;

const COMPLETION_MENU: &str = "completion_menu";

/// REPL engine for interactive configuration input
pub struct ReplEngine {
    /// Line editor for command input
    editor: Reedline,

    /// Prompt rendered before each line
    prompt: ConfigPrompt,

    /// Whether to continue running
    running: bool,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// The completer, hinter and highlighter all share `tree`.
    ///
    /// # Arguments
    /// * `tree` - Command grammar
    /// * `history_config` - History configuration
    /// * `display_config` - Prompt and highlighting settings
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(
        tree: Arc<CommandTree>,
        history_config: &HistoryConfig,
        display_config: &DisplayConfig,
    ) -> Result<Self> {
        let history = if history_config.persist {
            FileBackedHistory::with_file(history_config.max_size, history_config.file_path.clone())
        } else {
            FileBackedHistory::new(history_config.max_size)
        }
        .map_err(|e| ConfigureError::Generic(format!("Failed to open history: {}", e)))?;

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let completion_menu = CompletionMenu::new(COMPLETION_MENU);
        let printer = ExternalPrinter::default();
        let highlighting =
            display_config.color_output && display_config.syntax_highlighting;

        let editor = Reedline::create()
            .with_history(Box::new(history))
            .with_completer(Box::new(ConfigCompleter::with_printer(
                tree.clone(),
                printer.clone(),
            )))
            .with_external_printer(printer)
            .with_menu(ReedlineMenu::EngineCompleter(Box::new(completion_menu)))
            .with_quick_completions(true)
            .with_partial_completions(true)
            .with_hinter(Box::new(GrammarHinter::new(tree.clone())))
            .with_highlighter(Box::new(GrammarHighlighter::new(tree, highlighting)))
            .with_ansi_colors(display_config.color_output)
            .with_edit_mode(Box::new(Emacs::new(keybindings)));

        Ok(Self {
            editor,
            prompt: ConfigPrompt::new(display_config.prompt.clone()),
            running: true,
        })
    }

    /// Read a single line of input
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input line or None on Ctrl-C / Ctrl-D
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.read_line(&self.prompt) {
            Ok(Signal::Success(line)) => Ok(Some(line)),
            Ok(_) => {
                self.running = false;
                Ok(None)
            }
            Err(err) => Err(ConfigureError::Generic(format!("Read error: {}", err))),
        }
    }

    /// Check if REPL is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the loop after the current command
    pub fn stop(&mut self) {
        self.running = false;
    }
}
