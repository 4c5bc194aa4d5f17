//! Execution result types

use std::collections::BTreeMap;

use crate::store::{InterfaceConfig, NetworkConfig};

/// Result of command execution
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    /// Result data
    pub data: ResultData,

    /// Whether the session should end after this command
    pub exit: bool,
}

/// Data returned from command execution
#[derive(Debug, Clone, PartialEq)]
pub enum ResultData {
    /// Status line, e.g. `Set DNS: 8.8.8.8`
    Message(String),

    /// Command summary
    Help,

    /// Current DNS servers
    Dns(Vec<String>),

    /// Whole document
    Config(NetworkConfig),

    /// Interface table
    Interfaces(BTreeMap<String, InterfaceConfig>),

    /// Build information
    Version(VersionInfo),

    /// Nothing to print
    None,
}

/// Version, build date and author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: &'static str,
    pub build_date: &'static str,
    pub author: &'static str,
}

impl VersionInfo {
    /// Information for this build
    pub fn current() -> Self {
        Self {
            version: crate::VERSION,
            build_date: crate::BUILD_DATE,
            author: crate::AUTHOR,
        }
    }
}

impl ExecutionResult {
    /// Create a result that keeps the session running
    pub fn success(data: ResultData) -> Self {
        Self { data, exit: false }
    }

    /// Create a status message result
    pub fn message(text: impl Into<String>) -> Self {
        Self::success(ResultData::Message(text.into()))
    }

    /// Create the result that ends the session
    pub fn exit() -> Self {
        Self {
            data: ResultData::None,
            exit: true,
        }
    }
}
