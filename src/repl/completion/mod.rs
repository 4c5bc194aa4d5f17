//! Completion system for the configuration shell
//!
//! Tab completion is driven entirely by a fixed command grammar. The system
//! consists of three parts:
//!
//! - **Tree**: the grammar, a hand-built tree of literal tokens and value slots
//! - **Request**: splits the line at the cursor into typed tokens and a prefix
//! - **Engine**: walks the tree and produces insertion texts
//!
//! # Examples
//!
//! ```
//! use configure::repl::completion::{CommandTree, CompletionEngine};
//! use std::sync::Arc;
//!
//! let engine = CompletionEngine::new(Arc::new(CommandTree::network()));
//!
//! // "sh" completes to "show "
//! let completion = engine.complete("sh", 2);
//! assert_eq!(completion.start, 0);
//! assert_eq!(completion.candidates, vec!["ow ".to_string()]);
//! ```

mod engine;
mod request;
mod tree;

pub use engine::{Completion, CompletionEngine};
pub use request::CompletionRequest;
pub use tree::{CommandNode, CommandTree, NodeBuilder, Walk};
