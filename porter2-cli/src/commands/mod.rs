//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod list;
pub mod stem;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stem words given as arguments, read from files, or read from stdin
    Stem(stem::StemArgs),

    /// Check stems against a reference list of `input expected` pairs
    Validate(validate::ValidateArgs),

    /// List compiled-in tables and supported formats
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List the exception map and the post-step-1a words
    Exceptions,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Stem(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the verbosity count.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run in-process
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Exceptions,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Exceptions"));
    }

    #[test]
    fn test_list_commands_execute() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        assert!(list_cmd.execute().is_ok());
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(2, false);
        init_logging(0, false);
        init_logging(0, true);
    }
}
