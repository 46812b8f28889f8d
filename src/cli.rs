use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Privacy Lock Options
///
/// Lists, looks up and validates the privacy lock timeout options offered
/// by a wallet.
#[derive(Parser, Debug)]
#[command(name = "privacy-lock")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to catalog file (defaults to the per-user catalog, then the built-in one)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all options in the catalog
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the option with the given hour count
    Show {
        /// Hour count to look up
        #[arg(allow_hyphen_values = true)]
        hours: i32,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Check that the catalog loads and is usable
    Validate,
    /// Write the example catalog to the catalog path
    Init {
        /// Overwrite an existing catalog file
        #[arg(long)]
        force: bool,
    },
    /// Print the example catalog
    Example,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Yaml,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_negative_hours() {
        let args = Args::try_parse_from(["privacy-lock", "show", "-1"]).unwrap();
        match args.command {
            Commands::Show { hours, format } => {
                assert_eq!(hours, -1);
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let args = Args::try_parse_from([
            "privacy-lock",
            "list",
            "--format",
            "json",
            "--config",
            "options.toml",
            "-v",
        ])
        .unwrap();
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("options.toml")));
        assert!(matches!(
            args.command,
            Commands::List {
                format: OutputFormat::Json
            }
        ));
    }

    #[test]
    fn test_command_required() {
        assert!(Args::try_parse_from(["privacy-lock"]).is_err());
    }
}
