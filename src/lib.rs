//! Interactive network configuration shell library
//!
//! This library provides the core of the `configure` shell: a router-style
//! command grammar with Tab completion and `?` help, a YAML-backed network
//! configuration store, and the actions that apply it to the host.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Application settings
//! - `error`: Error types and handling
//! - `executor`: Command execution against the store
//! - `formatter`: Output formatting and display
//! - `parser`: Command line parsing
//! - `repl`: Interactive shell and the completion engine
//! - `store`: Network configuration document and files
//! - `system`: Applying configuration to the host
//! - `validator`: Address validation
//!
//! # Example
//!
//! ```
//! use configure::repl::completion::CompletionEngine;
//!
//! let engine = CompletionEngine::default();
//! let completion = engine.complete("set interfaces eth0 m", 21);
//! assert_eq!(completion.candidates, vec!["ac "]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod formatter;
pub mod parser;
pub mod repl;
pub mod store;
pub mod system;
pub mod validator;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigureError, Result};
pub use executor::{CommandExecutor, ExecutionResult};
pub use formatter::Formatter;
pub use parser::{Command, CommandParser};
pub use repl::ReplEngine;
pub use store::{ConfigStore, NetworkConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date, taken from `CONFIGURE_BUILD_DATE` at compile time
pub const BUILD_DATE: &str = match option_env!("CONFIGURE_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

/// Package author
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}
