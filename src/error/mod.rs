//! Error handling module for the configuration shell.
//!
//! Completion never produces errors; everything in here is raised after a
//! line has been submitted, or while loading and applying configuration.
//!
//! # Example
//!
//! ```rust,no_run
//! use configure::error::{ParseError, Result};
//!
//! fn parse(line: &str) -> Result<()> {
//!     Err(ParseError::UnknownCommand(line.to_string()).into())
//! }
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{
    ConfigError, ConfigureError, ParseError, Result, SystemError, ValidationError,
};
