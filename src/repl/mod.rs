//! Interactive configuration shell
//!
//! This module wires the command grammar into reedline:
//! - Tab completion and `?` help driven by the [`completion::CommandTree`]
//! - Inline hints from history, falling back to value placeholders
//! - Grammar-aware syntax highlighting
//! - Persistent command history

pub mod completion;
mod completer;
mod engine;
mod highlighter;
mod hinter;
mod menu;
mod prompt;

pub use completer::ConfigCompleter;
pub use engine::ReplEngine;
pub use highlighter::GrammarHighlighter;
pub use hinter::GrammarHinter;
pub use menu::CompletionMenu;
pub use prompt::ConfigPrompt;
