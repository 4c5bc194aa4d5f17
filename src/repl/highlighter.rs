//! Syntax highlighter for configuration commands
//!
//! Tokens are colored by where they land in the completion grammar: green
//! for literal keywords, cyan for values typed into a value slot. Red marks
//! tokens that neither the grammar nor the command parser accept, so
//! dispatcher-only commands such as `commit` stay uncolored.

use std::sync::Arc;

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use super::completion::{CommandTree, Walk};
use crate::parser::CommandParser;

/// Grammar-aware highlighter
pub struct GrammarHighlighter {
    tree: Arc<CommandTree>,
    enabled: bool,
}

impl GrammarHighlighter {
    /// Create a new highlighter
    pub fn new(tree: Arc<CommandTree>, enabled: bool) -> Self {
        Self { tree, enabled }
    }

    const KEYWORD: Color = Color::Green;
    const VALUE: Color = Color::Cyan;
    const INVALID: Color = Color::Red;

    /// Style for each token of `tokens`
    fn token_styles(&self, tokens: &[&str]) -> Vec<Style> {
        let (valid, first_value) = match self.tree.walk(tokens) {
            Walk::Reached(_) => (tokens.len(), tokens.len()),
            Walk::Value { consumed, .. } => (consumed + 1, consumed),
            Walk::Invalid { .. } if CommandParser::parse(&tokens.join(" ")).is_ok() => {
                return vec![Style::default(); tokens.len()];
            }
            Walk::Invalid { index } => (index, index),
        };

        (0..tokens.len())
            .map(|i| {
                if i < first_value {
                    Self::KEYWORD.bold()
                } else if i < valid {
                    Self::VALUE.normal()
                } else {
                    Self::INVALID.normal()
                }
            })
            .collect()
    }
}

impl Highlighter for GrammarHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();
        if !self.enabled {
            styled.push((Style::default(), line.to_string()));
            return styled;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let styles = self.token_styles(&tokens);

        // Walk the raw line so whitespace is preserved exactly
        let mut rest = line;
        for (token, style) in tokens.iter().zip(styles) {
            let Some(offset) = rest.find(token) else {
                break;
            };
            if offset > 0 {
                styled.push((Style::default(), rest[..offset].to_string()));
            }
            styled.push((style, token.to_string()));
            rest = &rest[offset + token.len()..];
        }
        if !rest.is_empty() {
            styled.push((Style::default(), rest.to_string()));
        }

        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_highlighter() -> GrammarHighlighter {
        GrammarHighlighter::new(Arc::new(CommandTree::network()), true)
    }

    fn plain(styled: &StyledText) -> String {
        styled.buffer.iter().map(|(_, s)| s.as_str()).collect()
    }

    fn style_of<'a>(styled: &'a StyledText, text: &str) -> Option<&'a Style> {
        styled
            .buffer
            .iter()
            .find(|(_, s)| s == text)
            .map(|(style, _)| style)
    }

    #[test]
    fn test_text_preserved() {
        let highlighter = create_test_highlighter();
        let line = "  set   interfaces eth0 address 10.0.0.1/24 ";
        let styled = highlighter.highlight(line, line.len());
        assert_eq!(plain(&styled), line);
    }

    #[test]
    fn test_keywords_and_values() {
        let highlighter = create_test_highlighter();
        let styled = highlighter.highlight("set dns 8.8.8.8", 15);
        assert_eq!(style_of(&styled, "set"), Some(&Color::Green.bold()));
        assert_eq!(style_of(&styled, "dns"), Some(&Color::Green.bold()));
        assert_eq!(style_of(&styled, "8.8.8.8"), Some(&Color::Cyan.normal()));
    }

    #[test]
    fn test_invalid_tokens() {
        let highlighter = create_test_highlighter();
        let styled = highlighter.highlight("show nonsense", 13);
        assert_eq!(style_of(&styled, "show"), Some(&Color::Green.bold()));
        assert_eq!(style_of(&styled, "nonsense"), Some(&Color::Red.normal()));
    }

    #[test]
    fn test_tokens_after_value_are_invalid() {
        let highlighter = create_test_highlighter();
        let styled = highlighter.highlight("add dns 1.1.1.1 extra", 21);
        assert_eq!(style_of(&styled, "1.1.1.1"), Some(&Color::Cyan.normal()));
        assert_eq!(style_of(&styled, "extra"), Some(&Color::Red.normal()));
    }

    #[test]
    fn test_commands_outside_grammar_are_not_invalid() {
        let highlighter = create_test_highlighter();

        let styled = highlighter.highlight("commit", 6);
        assert_eq!(style_of(&styled, "commit"), Some(&Style::default()));

        let line = "set ip route default via 10.0.0.1";
        let styled = highlighter.highlight(line, line.len());
        assert_eq!(plain(&styled), line);
        assert!(styled.buffer.iter().all(|(style, _)| *style == Style::default()));
    }

    #[test]
    fn test_unparsable_line_is_still_invalid() {
        let highlighter = create_test_highlighter();
        let styled = highlighter.highlight("commit now", 10);
        assert_eq!(style_of(&styled, "commit"), Some(&Color::Red.normal()));
        assert_eq!(style_of(&styled, "now"), Some(&Color::Red.normal()));
    }

    #[test]
    fn test_disabled() {
        let highlighter = GrammarHighlighter::new(Arc::new(CommandTree::network()), false);
        let styled = highlighter.highlight("set dns", 7);
        assert_eq!(styled.buffer.len(), 1);
        assert_eq!(styled.buffer[0].0, Style::default());
    }
}
