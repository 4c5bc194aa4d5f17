//! Network configuration document and its on-disk copies
//!
//! The document is kept in two YAML files: the boot configuration, loaded at
//! startup, and the running configuration, rewritten alongside it on every
//! save. Backups are timestamped snapshots of the in-memory document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigureError, Result};

/// Hostname used for a freshly created document
pub const DEFAULT_HOSTNAME: &str = "vyos-router";

/// The network configuration being edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Interfaces keyed by name, e.g. `eth0`
    #[serde(default)]
    pub interfaces: BTreeMap<String, InterfaceConfig>,

    /// DNS servers in resolver order
    #[serde(default)]
    pub dns: Vec<String>,

    /// Default gateway, empty when unset
    #[serde(default)]
    pub default_route: String,
}

/// Per-interface settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    #[serde(default)]
    pub address: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mac: String,
}

fn default_hostname() -> String {
    DEFAULT_HOSTNAME.to_string()
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            hostname: default_hostname(),
            interfaces: BTreeMap::new(),
            dns: Vec::new(),
            default_route: String::new(),
        }
    }
}

impl NetworkConfig {
    /// Parse a document from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Serialize to YAML text
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()).into())
    }

    /// Load a document, failing if the file does not exist
    ///
    /// # Arguments
    /// * `path` - YAML file to read
    ///
    /// # Returns
    /// * `Result<NetworkConfig>` - Parsed document or error
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| not_found_or_io(path, e))?;
        Self::from_yaml(&content).map_err(|e| match e {
            ConfigureError::Config(ConfigError::InvalidFormat(msg)) => {
                ConfigError::InvalidFormat(format!("{}: {}", path.display(), msg)).into()
            }
            other => other,
        })
    }

    /// Write the document to `path`
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Replace the DNS list with a single server
    pub fn set_dns(&mut self, server: &str) {
        self.dns = vec![server.to_string()];
    }

    /// Append a DNS server unless it is already listed
    ///
    /// # Returns
    /// * `bool` - True if the list changed
    pub fn add_dns(&mut self, server: &str) -> bool {
        if self.dns.iter().any(|s| s == server) {
            return false;
        }
        self.dns.push(server.to_string());
        true
    }

    /// Set an interface address, creating the interface if needed
    pub fn set_interface_address(&mut self, name: &str, address: &str) {
        self.interfaces.entry(name.to_string()).or_default().address = address.to_string();
    }

    /// Set an interface MAC, creating the interface if needed
    pub fn set_interface_mac(&mut self, name: &str, mac: &str) {
        self.interfaces.entry(name.to_string()).or_default().mac = mac.to_string();
    }

    pub fn set_default_route(&mut self, gateway: &str) {
        self.default_route = gateway.to_string();
    }
}

fn not_found_or_io(path: &Path, e: std::io::Error) -> ConfigureError {
    if e.kind() == std::io::ErrorKind::NotFound {
        ConfigError::FileNotFound(path.display().to_string()).into()
    } else {
        ConfigureError::Io(e)
    }
}

/// Owns the in-memory document and the paths it is persisted to
#[derive(Debug)]
pub struct ConfigStore {
    boot_path: PathBuf,
    running_path: PathBuf,
    config: NetworkConfig,
}

impl ConfigStore {
    /// Open the store, loading the boot configuration
    ///
    /// A missing boot file is replaced by the default document, written to
    /// both files. A boot file that does not parse is an error.
    ///
    /// # Arguments
    /// * `boot_path` - Boot configuration file
    /// * `running_path` - Running configuration file
    ///
    /// # Returns
    /// * `Result<ConfigStore>` - Opened store or error
    pub fn open(boot_path: impl Into<PathBuf>, running_path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self {
            boot_path: boot_path.into(),
            running_path: running_path.into(),
            config: NetworkConfig::default(),
        };

        match NetworkConfig::load_from(&store.boot_path) {
            Ok(config) => {
                debug!(path = %store.boot_path.display(), "loaded boot configuration");
                store.config = config;
            }
            Err(ConfigureError::Config(ConfigError::FileNotFound(_))) => {
                info!(path = %store.boot_path.display(), "boot configuration missing, writing defaults");
                store.save()?;
            }
            Err(e) => return Err(e),
        }

        Ok(store)
    }

    /// Current document
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Mutable access to the document
    pub fn config_mut(&mut self) -> &mut NetworkConfig {
        &mut self.config
    }

    pub fn boot_path(&self) -> &Path {
        &self.boot_path
    }

    pub fn running_path(&self) -> &Path {
        &self.running_path
    }

    /// Write the document to the boot file, then the running file
    pub fn save(&self) -> Result<()> {
        let content = self.config.to_yaml()?;
        fs::write(&self.boot_path, &content)?;
        fs::write(&self.running_path, &content)?;
        debug!(
            boot = %self.boot_path.display(),
            running = %self.running_path.display(),
            "configuration saved"
        );
        Ok(())
    }

    /// Write a timestamped snapshot of the document into `dir`
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the backup file
    pub fn backup<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let name = format!(
            "config_{}.yaml",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        let path = dir.join(name);
        self.config.save_to(&path)?;
        info!(path = %path.display(), "backup written");
        Ok(path)
    }

    /// Replace the document with a backup and save it
    pub fn restore<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.config = NetworkConfig::load_from(path.as_ref())?;
        self.save()?;
        info!(path = %path.as_ref().display(), "configuration restored");
        Ok(())
    }
}

/// Copy the running configuration over the boot configuration
pub fn copy_running_to_boot<P: AsRef<Path>, Q: AsRef<Path>>(running: P, boot: Q) -> Result<()> {
    let running = running.as_ref();
    let content = fs::read(running).map_err(|e| not_found_or_io(running, e))?;
    fs::write(boot, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> (PathBuf, PathBuf) {
        (
            dir.path().join("boot.config.yaml"),
            dir.path().join("running.config.yaml"),
        )
    }

    #[test]
    fn test_open_creates_default_files() {
        let dir = tempfile::tempdir().unwrap();
        let (boot, running) = paths(&dir);

        let store = ConfigStore::open(&boot, &running).unwrap();
        assert_eq!(store.config(), &NetworkConfig::default());
        assert!(boot.exists());
        assert!(running.exists());

        let loaded = NetworkConfig::load_from(&boot).unwrap();
        assert_eq!(loaded.hostname, "vyos-router");
    }

    #[test]
    fn test_open_reads_existing_boot_file() {
        let dir = tempfile::tempdir().unwrap();
        let (boot, running) = paths(&dir);
        fs::write(
            &boot,
            "hostname: edge1\ninterfaces:\n  eth0:\n    address: 10.0.0.1/24\ndns:\n- 1.1.1.1\ndefault_route: 10.0.0.254\n",
        )
        .unwrap();

        let store = ConfigStore::open(&boot, &running).unwrap();
        let config = store.config();
        assert_eq!(config.hostname, "edge1");
        assert_eq!(config.interfaces["eth0"].address, "10.0.0.1/24");
        assert_eq!(config.interfaces["eth0"].mac, "");
        assert_eq!(config.dns, vec!["1.1.1.1"]);
        assert_eq!(config.default_route, "10.0.0.254");
        // Opening an existing file does not touch the running copy
        assert!(!running.exists());
    }

    #[test]
    fn test_open_rejects_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let (boot, running) = paths(&dir);
        fs::write(&boot, "dns: [unterminated\n").unwrap();

        let err = ConfigStore::open(&boot, &running).unwrap_err();
        assert!(matches!(
            err,
            ConfigureError::Config(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config = NetworkConfig::from_yaml("dns:\n- 8.8.8.8\n").unwrap();
        assert_eq!(config.hostname, DEFAULT_HOSTNAME);
        assert!(config.interfaces.is_empty());
        assert_eq!(config.dns, vec!["8.8.8.8"]);
    }

    #[test]
    fn test_save_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let (boot, running) = paths(&dir);
        let mut store = ConfigStore::open(&boot, &running).unwrap();

        store.config_mut().set_dns("9.9.9.9");
        store.save().unwrap();

        assert_eq!(
            fs::read_to_string(&boot).unwrap(),
            fs::read_to_string(&running).unwrap()
        );
        assert_eq!(NetworkConfig::load_from(&running).unwrap().dns, vec!["9.9.9.9"]);
    }

    #[test]
    fn test_mac_omitted_when_empty() {
        let mut config = NetworkConfig::default();
        config.set_interface_address("eth0", "10.0.0.1/24");
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("address: 10.0.0.1/24"));
        assert!(!yaml.contains("mac"));

        config.set_interface_mac("eth0", "00:11:22:33:44:55");
        assert!(config.to_yaml().unwrap().contains("mac: 00:11:22:33:44:55"));
    }

    #[test]
    fn test_dns_mutations() {
        let mut config = NetworkConfig::default();
        assert!(config.add_dns("1.1.1.1"));
        assert!(config.add_dns("8.8.8.8"));
        assert!(!config.add_dns("1.1.1.1"));
        assert_eq!(config.dns, vec!["1.1.1.1", "8.8.8.8"]);

        config.set_dns("9.9.9.9");
        assert_eq!(config.dns, vec!["9.9.9.9"]);
    }

    #[test]
    fn test_interface_fields_are_independent() {
        let mut config = NetworkConfig::default();
        config.set_interface_mac("eth1", "aa:bb:cc:dd:ee:ff");
        config.set_interface_address("eth1", "192.168.0.1/24");
        let eth1 = &config.interfaces["eth1"];
        assert_eq!(eth1.address, "192.168.0.1/24");
        assert_eq!(eth1.mac, "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = NetworkConfig::load_from(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(
            err,
            ConfigureError::Config(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_backup_and_restore() {
        let dir = tempfile::tempdir().unwrap();
        let (boot, running) = paths(&dir);
        let backup_dir = dir.path().join("backup");

        let mut store = ConfigStore::open(&boot, &running).unwrap();
        store.config_mut().set_dns("1.1.1.1");
        let backup = store.backup(&backup_dir).unwrap();

        let name = backup.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("config_"));
        assert!(name.ends_with(".yaml"));
        // config_YYYYMMDD_HHMMSS.yaml
        assert_eq!(name.len(), "config_".len() + 15 + ".yaml".len());

        store.config_mut().set_dns("8.8.8.8");
        store.restore(&backup).unwrap();
        assert_eq!(store.config().dns, vec!["1.1.1.1"]);
        assert_eq!(NetworkConfig::load_from(&boot).unwrap().dns, vec!["1.1.1.1"]);
    }

    #[test]
    fn test_copy_running_to_boot() {
        let dir = tempfile::tempdir().unwrap();
        let (boot, running) = paths(&dir);
        fs::write(&running, "hostname: copied\n").unwrap();

        copy_running_to_boot(&running, &boot).unwrap();
        assert_eq!(NetworkConfig::load_from(&boot).unwrap().hostname, "copied");
    }

    #[test]
    fn test_copy_missing_running_file() {
        let dir = tempfile::tempdir().unwrap();
        let (boot, running) = paths(&dir);
        assert!(copy_running_to_boot(&running, &boot).is_err());
        assert!(!boot.exists());
    }
}
