//! Command execution engine
//!
//! Applies parsed [`Command`]s to the configuration store. Edits only touch
//! the in-memory document; `save` persists it and `commit` pushes it to the
//! host through the [`SystemApplier`].

mod result;

pub use result::{ExecutionResult, ResultData, VersionInfo};

use tracing::{debug, info};

use crate::error::Result;
use crate::parser::{Command, InterfaceParam, ShowTarget};
use crate::store::ConfigStore;
use crate::system::SystemApplier;
use crate::validator;

/// Executes commands against the store
pub struct CommandExecutor {
    store: ConfigStore,
    applier: SystemApplier,
}

impl CommandExecutor {
    /// Create a new executor
    ///
    /// # Arguments
    /// * `store` - Opened configuration store
    /// * `applier` - Host applier used by `commit`
    pub fn new(store: ConfigStore, applier: SystemApplier) -> Self {
        Self { store, applier }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Execute a command
    ///
    /// Values are validated before the document changes, so a failed
    /// command leaves the configuration untouched.
    ///
    /// # Arguments
    /// * `command` - Parsed command
    ///
    /// # Returns
    /// * `Result<ExecutionResult>` - What to display, or an error
    pub fn execute(&mut self, command: Command) -> Result<ExecutionResult> {
        debug!(?command, "executing");

        let result = match command {
            Command::Exit => ExecutionResult::exit(),
            Command::Help => ExecutionResult::success(ResultData::Help),
            Command::Save => {
                self.store.save()?;
                info!("configuration saved");
                ExecutionResult::message("Configuration saved successfully")
            }
            Command::Commit => {
                self.applier.apply(self.store.config())?;
                ExecutionResult::message("Configuration applied successfully")
            }
            Command::SetDns(addr) => {
                validator::validate_dns_address(&addr)?;
                self.store.config_mut().set_dns(&addr);
                ExecutionResult::message(format!("Set DNS: {}", addr))
            }
            Command::AddDns(addr) => {
                validator::validate_dns_address(&addr)?;
                if !self.store.config_mut().add_dns(&addr) {
                    debug!(addr = %addr, "dns server already present");
                }
                ExecutionResult::message(format!("Added DNS: {}", addr))
            }
            Command::Show(target) => self.show(target),
            Command::SetInterface {
                interface,
                param,
                value,
            } => {
                let config = self.store.config_mut();
                match param {
                    InterfaceParam::Address => {
                        validator::validate_ip_address(&value)?;
                        config.set_interface_address(&interface, &value);
                    }
                    InterfaceParam::Mac => {
                        validator::validate_mac_address(&value)?;
                        config.set_interface_mac(&interface, &value);
                    }
                }
                ExecutionResult::message(format!(
                    "Set interface {} {} to {}",
                    interface, param, value
                ))
            }
            Command::SetDefaultRoute(gateway) => {
                validator::validate_ip_address(&gateway)?;
                self.store.config_mut().set_default_route(&gateway);
                ExecutionResult::message(format!("Set default route via {}", gateway))
            }
        };

        Ok(result)
    }

    fn show(&self, target: ShowTarget) -> ExecutionResult {
        let config = self.store.config();
        let data = match target {
            ShowTarget::Dns => ResultData::Dns(config.dns.clone()),
            ShowTarget::Config => ResultData::Config(config.clone()),
            ShowTarget::Interfaces => ResultData::Interfaces(config.interfaces.clone()),
            ShowTarget::Version => ResultData::Version(VersionInfo::current()),
        };
        ExecutionResult::success(data)
    }
}
