//! Command parser for configuration mode
//!
//! Lines are split on whitespace and matched against the fixed command set.
//! This is stricter than completion: `commit` and `set ip route default via`
//! are accepted here although the completion grammar does not offer them.
//!
//! # Examples
//!
//! ```
//! use configure::parser::{Command, CommandParser, ShowTarget};
//!
//! let cmd = CommandParser::parse("show dns").unwrap();
//! assert_eq!(cmd, Command::Show(ShowTarget::Dns));
//! ```

mod command;

pub use command::*;

use crate::error::{ParseError, Result};

/// Parser for configuration-mode command lines
pub struct CommandParser;

impl CommandParser {
    /// Parse an input line into a Command
    ///
    /// # Arguments
    /// * `input` - The submitted line
    ///
    /// # Returns
    /// * `Result<Command>` - The parsed command or a parse error
    pub fn parse(input: &str) -> Result<Command> {
        let fields: Vec<&str> = input.split_whitespace().collect();

        let command = match fields.as_slice() {
            ["exit"] => Command::Exit,
            ["help"] | ["?"] => Command::Help,
            ["save"] => Command::Save,
            ["commit"] => Command::Commit,
            ["set", "dns", addr] => Command::SetDns(addr.to_string()),
            ["add", "dns", addr] => Command::AddDns(addr.to_string()),
            ["show", target] => match ShowTarget::from_token(target) {
                Some(target) => Command::Show(target),
                None => return Err(unknown(&fields)),
            },
            ["set", "interfaces", rest @ ..] => Self::parse_set_interface(rest)?,
            ["set", "ip", "route", "default", "via", rest @ ..] => match rest {
                [gateway] => Command::SetDefaultRoute(gateway.to_string()),
                [] => {
                    return Err(ParseError::MissingArgument(
                        "missing IP address for default route".to_string(),
                    )
                    .into());
                }
                _ => return Err(unknown(&fields)),
            },
            _ => return Err(unknown(&fields)),
        };

        Ok(command)
    }

    /// Parse the arguments after `set interfaces`
    fn parse_set_interface(args: &[&str]) -> Result<Command> {
        let (interface, param, value) = match args {
            [] | [_] => {
                return Err(
                    ParseError::MissingArgument("missing interface parameters".to_string()).into(),
                );
            }
            [interface, param] => (interface, param, None),
            [interface, param, value] => (interface, param, Some(value)),
            _ => {
                return Err(ParseError::UnknownCommand(format!(
                    "set interfaces {}",
                    args.join(" ")
                ))
                .into());
            }
        };

        let param = InterfaceParam::from_token(param)
            .ok_or_else(|| ParseError::UnknownParameter(param.to_string()))?;

        let value = value.ok_or_else(|| {
            ParseError::MissingArgument(format!("missing value for interface {}", param))
        })?;

        Ok(Command::SetInterface {
            interface: interface.to_string(),
            param,
            value: value.to_string(),
        })
    }
}

fn unknown(fields: &[&str]) -> crate::error::ConfigureError {
    ParseError::UnknownCommand(fields.join(" ")).into()
}
