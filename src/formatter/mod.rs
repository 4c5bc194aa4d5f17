//! Output formatting for command results
//!
//! Status messages are colored when enabled, `show interfaces` renders a
//! table, and everything else is plain text.

mod colorizer;
mod table;

pub use colorizer::Colorizer;
pub use table::interfaces_table;

use std::fmt::Write;

use crate::executor::{ExecutionResult, ResultData, VersionInfo};
use crate::store::NetworkConfig;

/// Command summary printed by `help` and `?`
pub const HELP_TEXT: &str = "\
Available commands:
  set dns <address>                       Set DNS address
  add dns <address>                       Add DNS address
  set interfaces <iface> <param> <value>  Set interface parameters
    Parameters:
      address <ip/mask>                   Set interface IP address
      mac <address>                       Set interface MAC address
  set ip route default via <ip>           Set default route
  show dns                                Show current DNS settings
  show config                             Show current configuration
  show interfaces                         Show interface status
  show version                            Show version information
  save                                    Save current configuration
  commit                                  Apply current configuration
  exit                                    Exit configuration mode
  help, ?                                 Show this help message";

/// Main formatter for execution results
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    colorizer: Colorizer,
}

impl Formatter {
    /// Create a new formatter
    ///
    /// # Arguments
    /// * `use_colors` - Enable colored output
    pub fn new(use_colors: bool) -> Self {
        Self {
            colorizer: Colorizer::new(use_colors),
        }
    }

    /// Format an execution result
    ///
    /// # Returns
    /// * `Option<String>` - Text to print, `None` when there is nothing to show
    pub fn format(&self, result: &ExecutionResult) -> Option<String> {
        let text = match &result.data {
            ResultData::Message(text) => self.colorizer.success(text),
            ResultData::Help => HELP_TEXT.to_string(),
            ResultData::Dns(servers) => format_dns(servers),
            ResultData::Config(config) => self.format_config(config),
            ResultData::Interfaces(interfaces) if interfaces.is_empty() => {
                "No interfaces configured".to_string()
            }
            ResultData::Interfaces(interfaces) => {
                interfaces_table(interfaces, self.colorizer.is_enabled())
            }
            ResultData::Version(info) => format_version(info),
            ResultData::None => return None,
        };
        Some(text)
    }

    /// Format an error for display
    pub fn format_error(&self, message: &str) -> String {
        self.colorizer.error(&format!("Error: {}", message))
    }

    /// Readable dump of the whole document
    pub fn format_config(&self, config: &NetworkConfig) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Hostname: {}", config.hostname);
        let _ = writeln!(out, "{}", self.colorizer.heading("Interfaces:"));
        for (name, iface) in &config.interfaces {
            let _ = writeln!(out, "  {}:", name);
            let _ = writeln!(out, "    Address: {}", iface.address);
            if !iface.mac.is_empty() {
                let _ = writeln!(out, "    MAC: {}", iface.mac);
            }
        }
        let _ = writeln!(out, "{}", self.colorizer.heading("DNS servers:"));
        for server in &config.dns {
            let _ = writeln!(out, "  {}", server);
        }
        if !config.default_route.is_empty() {
            let _ = writeln!(out, "Default route: {}", config.default_route);
        }
        out.truncate(out.trim_end().len());
        out
    }
}

fn format_dns(servers: &[String]) -> String {
    format!("Current DNS: [{}]", servers.join(" "))
}

fn format_version(info: &VersionInfo) -> String {
    format!(
        "Version: {}\nBuild Date: {}\nAuthor: {}",
        info.version, info.build_date, info.author
    )
}
