//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use sigfind::Group;

#[derive(Parser)]
#[command(name = "sigfind", version)]
#[command(about = "Locate patch offsets in an executable image by byte signature")]
pub struct Cli {
    /// Config file (defaults to <config dir>/sigfind/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve every catalog signature against a binary
    Scan {
        /// Path to the executable image
        binary: PathBuf,

        /// Signature catalog (JSON); the built-in catalog is used otherwise
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve a single ad-hoc signature
    Find {
        /// Path to the executable image
        binary: PathBuf,

        /// Hex bytes, e.g. "69029f1a" or "69 02 9F 1A"
        pattern: String,

        /// Resolution group (A-F)
        #[arg(short, long, default_value = "A")]
        group: Group,
    },

    /// Show the replacement value for each catalog signature
    Patches {
        /// Only show this label (case-insensitive)
        label: Option<String>,

        /// Signature catalog (JSON); the built-in catalog is used otherwise
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Write the built-in catalog as JSON
    Catalog {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `label: offset` lines
    #[default]
    Text,
    /// Tab-separated values with header
    Tsv,
    /// One JSON object per line
    Json,
    /// Single JSON report document
    Report,
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
    fn test_parse_scan() {
        let cli = Cli::parse_from(["sigfind", "scan", "YWP", "--format", "tsv", "-o", "out.tsv"]);
        match cli.command {
            Command::Scan {
                binary,
                catalog,
                format,
                output,
            } => {
                assert_eq!(binary, PathBuf::from("YWP"));
                assert!(catalog.is_none());
                assert_eq!(format, Some(OutputFormat::Tsv));
                assert_eq!(output, Some(PathBuf::from("out.tsv")));
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_parse_find_group() {
        let cli = Cli::parse_from(["sigfind", "find", "YWP", "69029f1a", "--group", "d"]);
        match cli.command {
            Command::Find { group, pattern, .. } => {
                assert_eq!(group, Group::D);
                assert_eq!(pattern, "69029f1a");
            }
            _ => panic!("expected find"),
        }

        assert!(Cli::try_parse_from(["sigfind", "find", "YWP", "00", "--group", "Z"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["sigfind", "patches", "-v", "--config", "my.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_parse_patches_label() {
        let cli = Cli::parse_from(["sigfind", "patches", "HP"]);
        match cli.command {
            Command::Patches { label, catalog } => {
                assert_eq!(label.as_deref(), Some("HP"));
                assert!(catalog.is_none());
            }
            _ => panic!("expected patches"),
        }
    }
}
