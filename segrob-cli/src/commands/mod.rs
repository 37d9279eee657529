//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;
use segrob_core::pipeline::{get_profile, list_profiles};
use segrob_core::Schema;

pub mod convert;
pub mod migrate;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert pipeline output into a segrob document
    Convert(convert::ConvertArgs),

    /// Check a segrob document against the format invariants
    Validate(validate::ValidateArgs),

    /// Rewrite a segrob document in another schema variant
    Migrate(migrate::MigrateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported pipelines and their defaults
    Pipelines,

    /// List output schema variants
    Schemas,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::Migrate(args) => args.execute(),
            Commands::List { subcommand } => {
                println!("{}", subcommand.render()?);
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Text printed by the list command
    pub fn render(&self) -> CliResult<String> {
        let lines: Vec<String> = match self {
            ListCommands::Pipelines => list_profiles()
                .into_iter()
                .map(|name| {
                    let profile = get_profile(name)?;
                    Ok(format!(
                        "{:<8} {:<8} {:<8} {}",
                        profile.metadata.name,
                        profile.metadata.default_version,
                        profile.output.schema.as_str(),
                        profile.metadata.description
                    ))
                })
                .collect::<CliResult<_>>()?,
            ListCommands::Schemas => Schema::ALL
                .iter()
                .map(|schema| schema.to_string())
                .collect(),
        };
        Ok(lines.join("\n"))
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Already initialized when several commands run in one process
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_pipelines() {
        let text = ListCommands::Pipelines.render().unwrap();
        let names: Vec<&str> = text
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(names, vec!["spacy", "stanza"]);
        assert!(text.contains("grouped"));
        assert!(text.contains("flat"));
    }

    #[test]
    fn test_list_schemas() {
        assert_eq!(ListCommands::Schemas.render().unwrap(), "grouped\nflat");
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Schemas,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Schemas"));
    }
}
