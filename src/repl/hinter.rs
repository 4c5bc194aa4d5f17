//! Hinter for reedline - history hints and value placeholders

use std::sync::Arc;

use nu_ansi_term::{Color, Style};
use reedline::{Hinter, History};

use super::completion::{CommandTree, Walk};

/// Inline hinter for the configuration shell.
///
/// Prefers the most recent history entry extending the current line. When
/// there is none and the cursor sits after a token that expects a value,
/// the value's placeholder (e.g. `<ip/mask>`) is shown instead.
pub struct GrammarHinter {
    /// Grammar used to find value slots
    tree: Arc<CommandTree>,
    /// Style for hints
    style: Style,
    /// Current hint text
    current_hint: String,
}

impl GrammarHinter {
    /// Create a new hinter with default style
    pub fn new(tree: Arc<CommandTree>) -> Self {
        Self {
            tree,
            style: Style::new().italic().fg(Color::DarkGray),
            current_hint: String::new(),
        }
    }

    /// Placeholder for the value expected after `line`, if any
    fn placeholder_hint(&self, line: &str) -> Option<&'static str> {
        if !line.ends_with(' ') {
            return None;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match self.tree.walk(&tokens) {
            Walk::Reached(node) => node.placeholder(),
            _ => None,
        }
    }

    fn history_hint(line: &str, history: &dyn History) -> Option<String> {
        let item = history
            .search(reedline::SearchQuery::last_with_prefix(
                line.to_string(),
                None,
            ))
            .ok()
            .and_then(|results| results.into_iter().next())?;

        let history_line = item.command_line.as_str();
        if history_line.len() > line.len() && history_line.starts_with(line) {
            Some(history_line[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Hinter for GrammarHinter {
    /// Provide a hint for the current line
    ///
    /// # Arguments
    /// * `line` - The current input line
    /// * `pos` - Cursor position
    /// * `history` - Command history
    /// * `use_ansi_coloring` - Whether to use ANSI colors
    /// * `_cwd` - Current working directory (unused)
    ///
    /// # Returns
    /// * `String` - Hint text to display after the cursor
    fn handle(
        &mut self,
        line: &str,
        pos: usize,
        history: &dyn History,
        use_ansi_coloring: bool,
        _cwd: &str,
    ) -> String {
        self.current_hint.clear();

        // Only provide hints if cursor is at the end of the line
        if pos != line.len() || line.trim().is_empty() {
            return String::new();
        }

        let hint = match Self::history_hint(line, history) {
            Some(hint) => {
                // History hints can be accepted as-is
                self.current_hint = hint.clone();
                hint
            }
            None => match self.placeholder_hint(line) {
                Some(placeholder) => placeholder.to_string(),
                None => return String::new(),
            },
        };

        if use_ansi_coloring {
            self.style.paint(hint).to_string()
        } else {
            hint
        }
    }

    fn next_hint_token(&self) -> String {
        self.current_hint
            .split_inclusive(' ')
            .next()
            .unwrap_or_default()
            .to_string()
    }

    fn complete_hint(&self) -> String {
        self.current_hint.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reedline::{FileBackedHistory, HistoryItem};

    fn create_test_hinter() -> GrammarHinter {
        GrammarHinter::new(Arc::new(CommandTree::network()))
    }

    fn empty_history() -> Box<dyn History> {
        Box::new(FileBackedHistory::new(100).expect("Failed to create history"))
    }

    #[test]
    fn test_empty_line_no_hint() {
        let mut hinter = create_test_hinter();
        let history = empty_history();
        assert_eq!(hinter.handle("", 0, history.as_ref(), false, "/tmp"), "");
    }

    #[test]
    fn test_cursor_not_at_end_no_hint() {
        let mut hinter = create_test_hinter();
        let history = empty_history();
        assert_eq!(hinter.handle("set dns ", 2, history.as_ref(), false, "/tmp"), "");
    }

    #[test]
    fn test_placeholder_after_value_slot() {
        let mut hinter = create_test_hinter();
        let history = empty_history();
        let hint = hinter.handle("set dns ", 8, history.as_ref(), false, "/tmp");
        assert_eq!(hint, "<address>");
        // Placeholders are not insertable
        assert_eq!(hinter.complete_hint(), "");
    }

    #[test]
    fn test_placeholder_for_interface_parameters() {
        let mut hinter = create_test_hinter();
        let history = empty_history();
        let line = "set interfaces eth1 mac ";
        let hint = hinter.handle(line, line.len(), history.as_ref(), false, "/tmp");
        assert_eq!(hint, "<xx:xx:xx:xx:xx:xx>");
    }

    #[test]
    fn test_no_placeholder_for_branches() {
        let mut hinter = create_test_hinter();
        let history = empty_history();
        assert_eq!(hinter.handle("set ", 4, history.as_ref(), false, "/tmp"), "");
        assert_eq!(hinter.handle("set dns", 7, history.as_ref(), false, "/tmp"), "");
    }

    #[test]
    fn test_history_hint_preferred() {
        let mut hinter = create_test_hinter();
        let mut history = FileBackedHistory::new(100).expect("Failed to create history");
        history
            .save(HistoryItem::from_command_line("set dns 8.8.8.8"))
            .expect("Failed to save history");

        let hint = hinter.handle("set dns ", 8, &history, false, "/tmp");
        assert_eq!(hint, "8.8.8.8");
        assert_eq!(hinter.complete_hint(), "8.8.8.8");
        assert_eq!(hinter.next_hint_token(), "8.8.8.8");
    }
}
