//! Completion engine - resolves next-token candidates against the grammar
//!
//! The engine never fails. Unknown paths, value slots, terminals and
//! prefixes with no match all come back as an empty candidate list.

use std::io::{self, Write};
use std::sync::Arc;

use super::request::CompletionRequest;
use super::tree::CommandTree;

/// Result of one completion call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Byte offset where the candidates are inserted
    pub start: usize,
    /// Text to insert for each candidate, sorted.
    ///
    /// Each entry is the remainder of the candidate after the typed prefix,
    /// followed by a single space.
    pub candidates: Vec<String>,
}

impl Completion {
    /// Empty result anchored at the cursor
    fn none(cursor: usize) -> Self {
        Self {
            start: cursor,
            candidates: Vec::new(),
        }
    }

    /// Whether there is nothing to insert
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Grammar-driven completion engine
#[derive(Debug, Clone)]
pub struct CompletionEngine {
    /// Grammar shared with the other line editor components
    tree: Arc<CommandTree>,
}

impl CompletionEngine {
    /// Create a new completion engine over `tree`
    pub fn new(tree: Arc<CommandTree>) -> Self {
        Self { tree }
    }
}

impl Default for CompletionEngine {
    fn default() -> Self {
        Self::new(Arc::new(CommandTree::network()))
    }
}

impl CompletionEngine {
    /// The grammar this engine completes against
    pub fn tree(&self) -> &CommandTree {
        &self.tree
    }

    /// Complete `line` at byte offset `pos`, printing `?` help to stdout
    pub fn complete(&self, line: &str, pos: usize) -> Completion {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.complete_with(line, pos, &mut out)
    }

    /// Complete `line` at byte offset `pos`, printing `?` help to `out`
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    /// * `out` - Sink for the `?` candidate listing
    ///
    /// # Returns
    /// * `Completion` - Insertion offset and sorted insertion texts
    pub fn complete_with<W: Write>(&self, line: &str, pos: usize, out: &mut W) -> Completion {
        let Some(request) = CompletionRequest::parse(line, pos) else {
            return Completion::none(pos);
        };

        if request.is_help() {
            let mut names = self.resolve(&request.tokens, "");
            names.sort();
            Self::print_help(out, &names);
            return Completion::none(request.cursor);
        }

        let mut names = self.resolve(&request.tokens, request.prefix);
        if names.is_empty() {
            return Completion::none(request.cursor);
        }
        names.sort();

        let candidates = names
            .into_iter()
            .map(|name| {
                let word = format!("{name} ");
                word[request.prefix.len()..].to_string()
            })
            .collect();

        Completion {
            start: request.start,
            candidates,
        }
    }

    /// Child tokens of the node reached by `tokens` that start with `prefix`.
    ///
    /// An empty token stops the walk where it is. A token that is not a
    /// child, or a walk through a node without children, yields nothing.
    pub fn resolve<S: AsRef<str>>(&self, tokens: &[S], prefix: &str) -> Vec<String> {
        let mut node = self.tree.root();
        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                break;
            }
            if !node.has_children() {
                return Vec::new();
            }
            match node.child(token) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        if !node.has_children() {
            return Vec::new();
        }

        let matches: Vec<String> = node
            .child_names()
            .filter(|name| name.starts_with(prefix))
            .map(str::to_string)
            .collect();

        // A unique match is authoritative as-is; several are returned unranked.
        matches
    }

    /// Blank line, then one indented candidate per line
    fn print_help<W: Write>(out: &mut W, names: &[String]) {
        if names.is_empty() {
            return;
        }
        let _ = writeln!(out);
        for name in names {
            let _ = writeln!(out, "  {name}");
        }
        let _ = out.flush();
    }
}
