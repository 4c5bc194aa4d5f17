//! Command type definitions

use std::fmt;

/// A parsed configuration-mode command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave configuration mode without saving
    Exit,

    /// Print the command summary (`help` or `?`)
    Help,

    /// Persist the document to the boot and running files
    Save,

    /// Apply the document to the host
    Commit,

    /// Replace the DNS server list
    SetDns(String),

    /// Append a DNS server
    AddDns(String),

    /// Display part of the configuration
    Show(ShowTarget),

    /// Set one interface parameter
    SetInterface {
        interface: String,
        param: InterfaceParam,
        value: String,
    },

    /// Set the default gateway
    SetDefaultRoute(String),
}

/// What `show` displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTarget {
    Dns,
    Config,
    Interfaces,
    Version,
}

impl ShowTarget {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "dns" => Some(Self::Dns),
            "config" => Some(Self::Config),
            "interfaces" => Some(Self::Interfaces),
            "version" => Some(Self::Version),
            _ => None,
        }
    }
}

/// Settable interface parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceParam {
    /// IP address, optionally with prefix length
    Address,
    /// Hardware address
    Mac,
}

impl InterfaceParam {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "address" => Some(Self::Address),
            "mac" => Some(Self::Mac),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Mac => "mac",
        }
    }
}

impl fmt::Display for InterfaceParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
