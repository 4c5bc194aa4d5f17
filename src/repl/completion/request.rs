//! Completion request - splits a line at the cursor
//!
//! A request is derived from `(line, cursor)` on every keystroke and thrown
//! away afterwards. It holds the tokens already typed before the word under
//! the cursor, the partial word itself and the offset where insertion starts.

/// Tokens and prefix derived from a line and cursor position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest<'a> {
    /// Completed tokens before the current word.
    ///
    /// When the cursor directly follows a space the last entry is an empty
    /// marker meaning "nothing typed yet at this level".
    pub tokens: Vec<&'a str>,
    /// Partially typed word under the cursor
    pub prefix: &'a str,
    /// Byte offset where the completed word starts
    pub start: usize,
    /// Byte offset of the cursor
    pub cursor: usize,
}

impl<'a> CompletionRequest<'a> {
    /// Split `line` at byte offset `cursor`.
    ///
    /// Returns `None` if the cursor lies outside the line or inside a
    /// multi-byte character.
    pub fn parse(line: &'a str, cursor: usize) -> Option<Self> {
        if cursor > line.len() || !line.is_char_boundary(cursor) {
            return None;
        }

        let before = &line[..cursor];
        let mut start = before.rfind(' ').map(|i| i + 1).unwrap_or(0);
        let mut prefix = &line[start..cursor];
        let mut tokens: Vec<&str> = line[..start].split_whitespace().collect();

        // Cursor right after a space: list the next level instead of
        // completing a word.
        if before.ends_with(' ') {
            tokens.push("");
            prefix = "";
            start = cursor;
        }

        Some(Self {
            tokens,
            prefix,
            start,
            cursor,
        })
    }

    /// Whether the user asked for the candidate list with `?`
    pub fn is_help(&self) -> bool {
        self.prefix == "?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line() {
        let req = CompletionRequest::parse("", 0).unwrap();
        assert!(req.tokens.is_empty());
        assert_eq!(req.prefix, "");
        assert_eq!(req.start, 0);
    }

    #[test]
    fn test_partial_first_word() {
        let req = CompletionRequest::parse("sh", 2).unwrap();
        assert!(req.tokens.is_empty());
        assert_eq!(req.prefix, "sh");
        assert_eq!(req.start, 0);
    }

    #[test]
    fn test_trailing_space_appends_marker() {
        let req = CompletionRequest::parse("set ", 4).unwrap();
        assert_eq!(req.tokens, vec!["set", ""]);
        assert_eq!(req.prefix, "");
        assert_eq!(req.start, 4);
    }

    #[test]
    fn test_multiple_spaces_collapse() {
        let req = CompletionRequest::parse("  set   interfaces  e", 21).unwrap();
        assert_eq!(req.tokens, vec!["set", "interfaces"]);
        assert_eq!(req.prefix, "e");
        assert_eq!(req.start, 20);
    }

    #[test]
    fn test_cursor_in_middle_of_line() {
        // Text after the cursor is ignored.
        let req = CompletionRequest::parse("set dns 8.8.8.8", 5).unwrap();
        assert_eq!(req.tokens, vec!["set"]);
        assert_eq!(req.prefix, "d");
        assert_eq!(req.start, 4);
        assert_eq!(req.cursor, 5);
    }

    #[test]
    fn test_help_prefix() {
        let req = CompletionRequest::parse("show ?", 6).unwrap();
        assert!(req.is_help());
        assert_eq!(req.tokens, vec!["show"]);
    }

    #[test]
    fn test_cursor_out_of_range() {
        assert!(CompletionRequest::parse("set", 4).is_none());
    }

    #[test]
    fn test_cursor_inside_multibyte_char() {
        assert!(CompletionRequest::parse("sé", 2).is_none());
        assert!(CompletionRequest::parse("sé", 3).is_some());
    }
}
