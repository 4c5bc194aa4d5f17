//! configure - interactive network configuration shell
//!
//! A router-style shell for editing DNS servers, interface addresses and the
//! default route, with Tab completion and `?` help at every position.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! configure --boot-config boot.config.yaml
//!
//! # Copy the running configuration over the boot configuration
//! configure copy
//! ```

use std::sync::Arc;

use configure::cli::CliInterface;
use configure::error::Result;
use configure::executor::CommandExecutor;
use configure::formatter::Formatter;
use configure::parser::CommandParser;
use configure::repl::ReplEngine;
use configure::repl::completion::CommandTree;
use configure::system::SystemApplier;

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load settings
/// 2. Initialize logging
/// 3. Handle subcommands or start the interactive shell
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    run_interactive_mode(&cli)
}

/// Run the configuration shell
fn run_interactive_mode(cli: &CliInterface) -> Result<()> {
    let config = cli.config();
    let store = cli.open_store()?;
    let applier = SystemApplier::from_config(&config.system);
    let mut executor = CommandExecutor::new(store, applier);

    let tree = Arc::new(CommandTree::network());
    let mut repl = ReplEngine::new(tree, &config.history, &config.display)?;
    let formatter = Formatter::new(config.display.color_output);

    run_repl_loop(&mut repl, &mut executor, &formatter)
}

/// Main REPL loop
///
/// Errors from a single command are printed and the loop continues.
fn run_repl_loop(
    repl: &mut ReplEngine,
    executor: &mut CommandExecutor,
    formatter: &Formatter,
) -> Result<()> {
    while repl.is_running() {
        let input = match repl.read_line()? {
            Some(line) if !line.trim().is_empty() => line,
            Some(_) => continue,
            None => break,
        };

        let result = CommandParser::parse(&input).and_then(|command| executor.execute(command));
        match result {
            Ok(result) => {
                if let Some(output) = formatter.format(&result) {
                    println!("{}", output);
                }
                if result.exit {
                    repl.stop();
                }
            }
            Err(e) => eprintln!("{}", formatter.format_error(&e.to_string())),
        }
    }

    Ok(())
}

/// Initialize logging system based on verbosity level
///
/// # Arguments
/// * `cli` - CLI interface with resolved logging settings
fn initialize_logging(cli: &CliInterface) {
    let level = cli.config().logging.level.to_tracing_level();

    // Build subscriber with level filter, keeping stdout for command output
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    // Configure timestamps
    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
