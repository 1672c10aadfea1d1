mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::scan::ScanOptions;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let directive = if cli.verbose {
        "sigfind=debug"
    } else {
        "sigfind=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::discover(cli.config.as_deref())?;
    debug!("Effective config: {:?}", config);

    match cli.command {
        Command::Scan {
            binary,
            catalog,
            format,
            output,
        } => commands::scan::run(ScanOptions {
            binary: &binary,
            catalog: catalog.as_deref().or(config.catalog.as_deref()),
            format: format.unwrap_or(config.format),
            output: output.as_deref(),
            color: !config.no_color,
        }),
        Command::Find {
            binary,
            pattern,
            group,
        } => commands::find::run(&binary, &pattern, group),
        Command::Patches { label, catalog } => commands::patches::run(
            catalog.as_deref().or(config.catalog.as_deref()),
            label.as_deref(),
        ),
        Command::Catalog { output } => commands::catalog::run(output.as_deref()),
    }
}
