//! Catalog command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use sigfind::{builtin_catalog, save_catalog};

/// Write the built-in catalog as a template for custom catalogs
pub fn run(output: Option<&Path>) -> Result<()> {
    let catalog = builtin_catalog();

    match output {
        Some(path) => {
            save_catalog(path, &catalog)
                .with_context(|| format!("Failed to write catalog {}", path.display()))?;
            eprintln!(
                "Wrote {} signatures to {}",
                catalog.len(),
                path.display()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&catalog)?),
    }

    Ok(())
}
