use std::{fmt, io};

/// Crate-wide `Result` type using [`ConfigureError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, ConfigureError>;

/// Top-level error type for the configuration shell.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum ConfigureError {
    /// Command line parsing errors.
    Parse(ParseError),

    /// Input validation errors (addresses, MACs).
    Validation(ValidationError),

    /// Configuration file errors.
    Config(ConfigError),

    /// Errors raised while applying configuration to the host.
    System(SystemError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Parsing-specific errors.
#[derive(Debug)]
pub enum ParseError {
    /// Line does not match any known command.
    UnknownCommand(String),

    /// Command is recognised but arguments are missing.
    MissingArgument(String),

    /// Unknown interface parameter (anything but `address` / `mac`).
    UnknownParameter(String),
}

/// Validation-specific errors.
#[derive(Debug)]
pub enum ValidationError {
    /// Address is `addr/prefix` but does not parse as CIDR.
    InvalidCidr(String),

    /// Plain address does not parse as IPv4 or IPv6.
    InvalidIp(String),

    /// MAC address is not six colon separated hex octets.
    InvalidMac(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Serializing the document failed.
    Serialize(String),
}

/// System apply errors.
#[derive(Debug)]
pub enum SystemError {
    /// Writing the resolver file failed.
    ResolverWrite { path: String, reason: String },

    /// Spawning an external command failed.
    SpawnFailed { command: String, reason: String },

    /// External command ran but exited unsuccessfully.
    CommandFailed { command: String, status: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for ConfigureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigureError::Parse(e) => write!(f, "{e}"),
            ConfigureError::Validation(e) => write!(f, "{e}"),
            ConfigureError::Config(e) => write!(f, "Configuration error: {e}"),
            ConfigureError::System(e) => write!(f, "System error: {e}"),
            ConfigureError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigureError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownCommand(line) => write!(f, "unknown command: {line}"),
            ParseError::MissingArgument(msg) => write!(f, "{msg}"),
            ParseError::UnknownParameter(param) => {
                write!(f, "unknown interface parameter: {param}")
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidCidr(value) => {
                write!(f, "invalid CIDR notation: {value}")
            }
            ValidationError::InvalidIp(value) => {
                write!(f, "invalid IP address format: {value}")
            }
            ValidationError::InvalidMac(value) => write!(
                f,
                "invalid MAC address format (expected XX:XX:XX:XX:XX:XX): {value}"
            ),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Serialize(msg) => write!(f, "Failed to serialize config: {msg}"),
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::ResolverWrite { path, reason } => {
                write!(f, "failed to write {path}: {reason}")
            }
            SystemError::SpawnFailed { command, reason } => {
                write!(f, "failed to run '{command}': {reason}")
            }
            SystemError::CommandFailed { command, status } => {
                write!(f, "'{command}' exited with {status}")
            }
        }
    }
}

impl std::error::Error for ConfigureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigureError::Io(e) => Some(e),
            _ => None,
        }
    }
}
impl std::error::Error for ParseError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for SystemError {}

/* ========================= Conversions to ConfigureError ========================= */

impl From<io::Error> for ConfigureError {
    fn from(err: io::Error) -> Self {
        ConfigureError::Io(err)
    }
}

impl From<ParseError> for ConfigureError {
    fn from(err: ParseError) -> Self {
        ConfigureError::Parse(err)
    }
}

impl From<ValidationError> for ConfigureError {
    fn from(err: ValidationError) -> Self {
        ConfigureError::Validation(err)
    }
}

impl From<ConfigError> for ConfigureError {
    fn from(err: ConfigError) -> Self {
        ConfigureError::Config(err)
    }
}

impl From<SystemError> for ConfigureError {
    fn from(err: SystemError) -> Self {
        ConfigureError::System(err)
    }
}

impl From<serde_yaml::Error> for ConfigureError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigureError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<toml::de::Error> for ConfigureError {
    fn from(err: toml::de::Error) -> Self {
        ConfigureError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<toml::ser::Error> for ConfigureError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigureError::Config(ConfigError::Serialize(err.to_string()))
    }
}
