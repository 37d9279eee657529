//! segrob-convert: pipeline output to segrob documents

use clap::Parser;
use segrob_cli::commands::Commands;
use segrob_cli::CliResult;

/// Convert Stanza and spaCy output into segrob documents
#[derive(Debug, Parser)]
#[command(name = "segrob-convert", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
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

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from([
            "segrob-convert",
            "convert",
            "doc.json",
            "--pipeline",
            "stanza",
            "-l",
            "es",
            "-l",
            "novela",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert(args) => assert_eq!(args.labels, vec!["es", "novela"]),
            other => panic!("Expected convert, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_migrate_defaults_to_grouped() {
        let cli = Cli::try_parse_from(["segrob-convert", "migrate", "legacy.json"]).unwrap();
        match cli.command {
            Commands::Migrate(args) => {
                assert_eq!(args.schema, segrob_cli::commands::convert::SchemaArg::Grouped)
            }
            other => panic!("Expected migrate, got {other:?}"),
        }
    }
}
