//! Scan command implementation.

use std::fs;
use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use sigfind::{
    ExportFormat, Image, JsonExporter, Resolution, ScanReport, SignatureResolver, TextExporter,
    TsvExporter,
};
use tracing::info;

use super::load_catalog_or_builtin;
use crate::cli::OutputFormat;

pub struct ScanOptions<'a> {
    pub binary: &'a Path,
    pub catalog: Option<&'a Path>,
    pub format: OutputFormat,
    pub output: Option<&'a Path>,
    pub color: bool,
}

/// Resolve every catalog signature against the binary
pub fn run(options: ScanOptions<'_>) -> Result<()> {
    let catalog = load_catalog_or_builtin(options.catalog)?;
    let signatures = catalog.compile().context("Invalid signature catalog")?;

    info!("Reading {}...", options.binary.display());
    let image = Image::load(options.binary)
        .with_context(|| format!("Failed to read binary {}", options.binary.display()))?;

    let resolutions = SignatureResolver::new(image.as_bytes()).resolve_all(&signatures);
    let found = resolutions.iter().filter(|r| r.is_found()).count();
    info!("Resolved {}/{} signatures", found, resolutions.len());

    let content = match options.format {
        OutputFormat::Text => TextExporter.format_rows(&resolutions),
        OutputFormat::Tsv => TsvExporter.format_rows(&resolutions),
        OutputFormat::Json => JsonExporter.format_rows(&resolutions),
        OutputFormat::Report => {
            let report = ScanReport::new(&image, &catalog.version, &resolutions);
            if let Some(output_path) = options.output {
                report
                    .save(output_path)
                    .with_context(|| format!("Failed to write {}", output_path.display()))?;
                eprintln!("Report saved to: {}", output_path.display());
                return Ok(());
            }
            report.to_json()?
        }
    };

    if let Some(output_path) = options.output {
        fs::write(output_path, &content)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        eprintln!("Exported to: {}", output_path.display());
    } else if options.format == OutputFormat::Text {
        let color = options.color && std::io::stdout().is_terminal();
        println!();
        println!("============== Results ==============");
        print!("{}", render_console(&resolutions, color));
        println!("=====================================");
        println!();
    } else {
        print!("{}", content);
    }

    Ok(())
}

/// Text listing for the terminal, optionally highlighting found / missing
pub fn render_console(resolutions: &[Resolution], color: bool) -> String {
    if !color {
        return TextExporter.format_rows(resolutions);
    }

    resolutions
        .iter()
        .map(|r| {
            let offset = r.offset_text();
            if r.is_found() {
                format!("{}: {}\n", r.label, offset.green())
            } else {
                format!("{}: {}\n", r.label, offset.red())
            }
        })
        .collect()
}
