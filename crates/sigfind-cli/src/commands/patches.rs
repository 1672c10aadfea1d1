//! Patches command implementation.

use std::path::Path;

use anyhow::{Result, bail};
use sigfind::SignatureCatalog;

use super::load_catalog_or_builtin;

/// Show the replacement value table, or a single entry's value
pub fn run(catalog: Option<&Path>, label: Option<&str>) -> Result<()> {
    let catalog = load_catalog_or_builtin(catalog)?;

    if let Some(label) = label {
        println!("{}", format_patch_entry(&catalog, label)?);
        return Ok(());
    }

    println!();
    println!("====== Patch values ======");
    print!("{}", format_patch_table(&catalog));
    println!("==========================");
    println!();

    Ok(())
}

pub fn format_patch_entry(catalog: &SignatureCatalog, label: &str) -> Result<String> {
    let Some(entry) = catalog.entry(label) else {
        bail!("No signature labelled '{}' in catalog {}", label, catalog.version);
    };
    Ok(format!(
        "{}: {}",
        entry.label,
        entry.patch.as_deref().unwrap_or("-")
    ))
}

pub fn format_patch_table(catalog: &SignatureCatalog) -> String {
    catalog
        .entries
        .iter()
        .map(|entry| format!("{}: {}\n", entry.label, entry.patch.as_deref().unwrap_or("-")))
        .collect()
}
