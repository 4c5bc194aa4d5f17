//! Completer for reedline - provides completion suggestions

use std::io::{self, Write};
use std::sync::Arc;

use reedline::{Completer, ExternalPrinter, Span, Suggestion};
use tracing::{debug, trace};

use super::completion::{CommandTree, CompletionEngine};

/// Grammar completer for reedline
pub struct ConfigCompleter {
    /// Completion engine over the shared grammar
    completion_engine: CompletionEngine,

    /// Prints `?` listings above the prompt; stdout when unset
    printer: Option<ExternalPrinter<String>>,
}

impl ConfigCompleter {
    /// Create a new completer over `tree` that writes `?` help to stdout
    pub fn new(tree: Arc<CommandTree>) -> Self {
        Self {
            completion_engine: CompletionEngine::new(tree),
            printer: None,
        }
    }

    /// Create a completer that hands `?` help to the line editor's printer
    ///
    /// The editor prints the listing above the prompt and redraws the line
    /// below it, so the listing survives the repaint after completion.
    pub fn with_printer(tree: Arc<CommandTree>, printer: ExternalPrinter<String>) -> Self {
        Self {
            completion_engine: CompletionEngine::new(tree),
            printer: Some(printer),
        }
    }

    /// Send a help listing to the printer, one message per listing
    fn forward_help(printer: &ExternalPrinter<String>, help: &[u8]) {
        let text = String::from_utf8_lossy(help);
        let text = text.trim_matches('\n');
        if text.is_empty() {
            return;
        }
        // Never block the key handler on a full channel
        if let Err(e) = printer.sender().try_send(text.to_string()) {
            debug!("Dropped help listing: {}", e);
        }
    }
}

impl Completer for ConfigCompleter {
    /// Complete the input at the given cursor position
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - List of completion suggestions
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let completion = match &self.printer {
            Some(printer) => {
                let mut help = Vec::new();
                let completion = self.completion_engine.complete_with(line, pos, &mut help);
                Self::forward_help(printer, &help);
                completion
            }
            None => {
                let mut out = TerminalWriter::new(io::stdout());
                self.completion_engine.complete_with(line, pos, &mut out)
            }
        };
        trace!(line, pos, candidates = completion.candidates.len(), "completion");

        // reedline replaces the whole span, so put the typed prefix back in
        // front of each insertion text.
        let typed = line.get(completion.start..pos).unwrap_or("");
        completion
            .candidates
            .into_iter()
            .map(|insertion| Suggestion {
                value: format!("{typed}{insertion}"),
                span: Span::new(completion.start, pos),
                append_whitespace: false,
                ..Default::default()
            })
            .collect()
    }
}

/// Stdout writer that emits `\r\n` while the terminal is in raw mode.
///
/// reedline keeps the terminal raw while editing, where a bare `\n` moves
/// down without returning to column zero.
struct TerminalWriter<W: Write> {
    inner: W,
    raw: bool,
}

impl<W: Write> TerminalWriter<W> {
    fn new(inner: W) -> Self {
        let raw = crossterm::terminal::is_raw_mode_enabled().unwrap_or(false);
        Self { inner, raw }
    }
}

impl<W: Write> Write for TerminalWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.raw {
            return self.inner.write(buf);
        }
        for chunk in buf.split_inclusive(|b| *b == b'\n') {
            match chunk.strip_suffix(b"\n") {
                Some(body) => {
                    self.inner.write_all(body)?;
                    self.inner.write_all(b"\r\n")?;
                }
                None => self.inner.write_all(chunk)?,
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
