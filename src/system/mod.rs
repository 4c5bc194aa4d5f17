//! Applying the network configuration to the host
//!
//! `commit` writes the resolver file, restarts the resolver services and
//! installs the default route. External programs go through a
//! [`CommandRunner`] so they can be replaced in tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::config::SystemConfig;
use crate::error::{Result, SystemError};
use crate::store::NetworkConfig;

/// Services restarted after the resolver file changes, in order
pub const RESOLVER_SERVICES: [&str; 2] = ["resolvconf.service", "systemd-resolved.service"];

/// Runs external programs
pub trait CommandRunner: Send {
    /// Run `program` with `args`, failing on spawn errors or non-zero exit
    fn run(&self, program: &str, args: &[&str]) -> Result<()>;
}

/// Spawns real processes and waits for them
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        let command = command_line(program, args);
        debug!(command = %command, "running");

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| SystemError::SpawnFailed {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SystemError::CommandFailed {
                command,
                status: status.to_string(),
            }
            .into())
        }
    }
}

fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render resolver file content, one `nameserver` line per server
pub fn resolv_conf_content(servers: &[String]) -> String {
    servers
        .iter()
        .map(|server| format!("nameserver {}\n", server))
        .collect()
}

/// Applies a [`NetworkConfig`] to the running system
pub struct SystemApplier {
    resolv_conf: PathBuf,
    use_sudo: bool,
    runner: Box<dyn CommandRunner>,
}

impl SystemApplier {
    /// Create an applier
    ///
    /// # Arguments
    /// * `resolv_conf` - Resolver file to write
    /// * `use_sudo` - Prefix commands with `sudo`
    /// * `runner` - Runner for external commands
    pub fn new(
        resolv_conf: impl Into<PathBuf>,
        use_sudo: bool,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            resolv_conf: resolv_conf.into(),
            use_sudo,
            runner,
        }
    }

    /// Create an applier from settings, spawning real processes
    pub fn from_config(config: &SystemConfig) -> Self {
        Self::new(
            config.resolv_conf.clone(),
            config.use_sudo,
            Box::new(ProcessRunner),
        )
    }

    pub fn resolv_conf(&self) -> &Path {
        &self.resolv_conf
    }

    /// Write the resolver file for `servers`
    pub fn write_resolv_conf(&self, servers: &[String]) -> Result<()> {
        fs::write(&self.resolv_conf, resolv_conf_content(servers)).map_err(|e| {
            SystemError::ResolverWrite {
                path: self.resolv_conf.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        debug!(path = %self.resolv_conf.display(), servers = servers.len(), "resolver file written");
        Ok(())
    }

    /// Restart resolver services, stopping at the first failure
    pub fn restart_services(&self) -> Result<()> {
        for service in RESOLVER_SERVICES {
            self.run("systemctl", &["restart", service])?;
        }
        Ok(())
    }

    /// Install the default route via `gateway`
    pub fn add_default_route(&self, gateway: &str) -> Result<()> {
        self.run("ip", &["route", "add", "default", "via", gateway])
    }

    /// Apply the whole document
    ///
    /// The route step is skipped when no default route is configured.
    pub fn apply(&self, config: &NetworkConfig) -> Result<()> {
        self.write_resolv_conf(&config.dns)?;
        self.restart_services()?;
        if !config.default_route.is_empty() {
            self.add_default_route(&config.default_route)?;
        }
        info!("configuration applied");
        Ok(())
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        if self.use_sudo {
            let mut sudo_args = Vec::with_capacity(args.len() + 1);
            sudo_args.push(program);
            sudo_args.extend_from_slice(args);
            self.runner.run("sudo", &sudo_args)
        } else {
            self.runner.run(program, args)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records command lines instead of running them
    #[derive(Clone, Default)]
    struct RecordingRunner {
        calls: Arc<Mutex<Vec<String>>>,
        fail_on: Option<&'static str>,
    }

    impl RecordingRunner {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, program: &str, args: &[&str]) -> Result<()> {
            let line = command_line(program, args);
            self.calls.lock().unwrap().push(line.clone());
            match self.fail_on {
                Some(needle) if line.contains(needle) => Err(SystemError::CommandFailed {
                    command: line,
                    status: "exit status: 1".to_string(),
                }
                .into()),
                _ => Ok(()),
            }
        }
    }

    fn create_test_applier(
        dir: &tempfile::TempDir,
        use_sudo: bool,
        runner: &RecordingRunner,
    ) -> SystemApplier {
        SystemApplier::new(
            dir.path().join("resolv.conf"),
            use_sudo,
            Box::new(runner.clone()),
        )
    }

    #[test]
    fn test_resolv_conf_content() {
        let servers = vec!["8.8.8.8".to_string(), "1.1.1.1".to_string()];
        assert_eq!(
            resolv_conf_content(&servers),
            "nameserver 8.8.8.8\nnameserver 1.1.1.1\n"
        );
        assert_eq!(resolv_conf_content(&[]), "");
    }

    #[test]
    fn test_apply_with_route() {
        let dir = tempfile::tempdir().unwrap();
        let runner = RecordingRunner::default();
        let applier = create_test_applier(&dir, true, &runner);

        let mut config = NetworkConfig::default();
        config.set_dns("8.8.8.8");
        config.set_default_route("192.168.1.254");
        applier.apply(&config).unwrap();

        assert_eq!(
            fs::read_to_string(applier.resolv_conf()).unwrap(),
            "nameserver 8.8.8.8\n"
        );
        assert_eq!(
            runner.calls(),
            vec![
                "sudo systemctl restart resolvconf.service",
                "sudo systemctl restart systemd-resolved.service",
                "sudo ip route add default via 192.168.1.254",
            ]
        );
    }

    #[test]
    fn test_apply_without_route_or_sudo() {
        let dir = tempfile::tempdir().unwrap();
        let runner = RecordingRunner::default();
        let applier = create_test_applier(&dir, false, &runner);

        applier.apply(&NetworkConfig::default()).unwrap();
        assert_eq!(
            runner.calls(),
            vec![
                "systemctl restart resolvconf.service",
                "systemctl restart systemd-resolved.service",
            ]
        );
    }

    #[test]
    fn test_apply_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let runner = RecordingRunner {
            fail_on: Some("resolvconf.service"),
            ..Default::default()
        };
        let applier = create_test_applier(&dir, true, &runner);

        let mut config = NetworkConfig::default();
        config.set_default_route("10.0.0.1");
        let err = applier.apply(&config).unwrap_err();

        assert!(err.to_string().contains("resolvconf.service"));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn test_resolver_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let runner = RecordingRunner::default();
        let applier = SystemApplier::new(
            dir.path().join("missing").join("resolv.conf"),
            false,
            Box::new(runner.clone()),
        );

        let err = applier.apply(&NetworkConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("System error: failed to write"));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_process_runner_reports_spawn_failure() {
        let err = ProcessRunner
            .run("definitely-not-a-real-binary-xyz", &[])
            .unwrap_err();
        assert!(err.to_string().contains("failed to run"));
    }
}
