//! Command-line interface for configure
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Settings loading and validation
//! - One-shot subcommands (copy, backup, restore, completion, config)
//! - Mode selection (subcommand vs interactive shell)

pub mod completion;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, LogLevel};
use crate::error::Result;
use crate::executor::VersionInfo;
use crate::store::{self, ConfigStore};

/// Interactive router-style network configuration shell
#[derive(Parser, Debug)]
#[command(
    name = "configure",
    version,
    about = "Configure network settings",
    long_about = "A command line tool for configuring network settings.

Without a subcommand, starts an interactive configuration shell with
Tab completion and `?` help for DNS, interfaces and the default route."
)]
pub struct CliArgs {
    /// Boot configuration file
    #[arg(long, value_name = "FILE", env = "CONFIGURE_BOOT_CONFIG")]
    pub boot_config: Option<PathBuf>,

    /// Running configuration file
    #[arg(long, value_name = "FILE", env = "CONFIGURE_RUNNING_CONFIG")]
    pub running_config: Option<PathBuf>,

    /// Settings file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for configure
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Copy the running configuration over the boot configuration
    Copy,

    /// Write a timestamped backup of the boot configuration
    Backup {
        /// Backup directory
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Restore a backup into the boot and running configuration
    Restore {
        /// Backup file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show settings
    Config {
        /// Show effective settings
        #[arg(long)]
        show: bool,

        /// Validate settings file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Effective settings
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load settings from file and merge with environment and arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Effective settings or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        config.apply_env();
        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Get the settings
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Open the network configuration store at the configured paths
    pub fn open_store(&self) -> Result<ConfigStore> {
        ConfigStore::open(
            self.config.paths.boot_config.clone(),
            self.config.paths.running_config.clone(),
        )
    }

    /// Apply CLI arguments to configuration
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        if let Some(path) = &args.boot_config {
            config.paths.boot_config = path.clone();
        }
        if let Some(path) = &args.running_config {
            config.paths.running_config = path.clone();
        }

        if args.no_color {
            config.display.color_output = false;
        }

        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell, &mut std::io::stdout())?;
                Ok(true)
            }
            Some(Commands::Copy) => {
                self.copy_running_to_boot()?;
                Ok(true)
            }
            Some(Commands::Backup { dir }) => {
                let dir = dir.as_ref().unwrap_or(&self.config.paths.backup_dir);
                let path = self.open_store()?.backup(dir)?;
                println!("Backup written to {}", path.display());
                Ok(true)
            }
            Some(Commands::Restore { file }) => {
                self.open_store()?.restore(file)?;
                println!("Restored configuration from {}", file.display());
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Show version information
    fn show_version(&self) {
        let info = VersionInfo::current();
        println!("configure version {}", info.version);
        println!("Build date: {}", info.build_date);
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    fn copy_running_to_boot(&self) -> Result<()> {
        let running = &self.config.paths.running_config;
        let boot = &self.config.paths.boot_config;
        store::copy_running_to_boot(running, boot)?;
        println!("Copied {} to {}", running.display(), boot.display());
        Ok(())
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show settings
    /// * `validate` - Whether to validate the settings file
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file();
        }

        if show {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate settings file
    fn validate_config_file(&self) {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("Configuration file does not exist");
            return;
        }

        match Config::from_file(&path) {
            Ok(config) => match config.validate() {
                Ok(_) => println!("Configuration is valid"),
                Err(e) => println!("Configuration validation failed: {}", e),
            },
            Err(e) => println!("Failed to load configuration: {}", e),
        }
    }

    /// Show effective settings
    fn show_config(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Configuration file: {}", path.display());
        println!();
        println!("=== Effective Configuration ===");
        println!();
        println!("{}", self.config.to_toml()?);
        Ok(())
    }

    /// Get settings file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_config_path)
    }
}
