//! porter2 command-line entry point

use clap::Parser;
use porter2_cli::commands::Commands;

/// Porter2 (Snowball English) stemmer
#[derive(Debug, Parser)]
#[command(name = "porter2")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
