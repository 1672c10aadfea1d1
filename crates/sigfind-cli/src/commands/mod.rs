//! CLI command implementations.

pub mod catalog;
pub mod find;
pub mod patches;
pub mod scan;

use std::path::Path;

use anyhow::{Context, Result, bail};
use sigfind::{SignatureCatalog, builtin_catalog, load_catalog};
use tracing::info;

/// Load the catalog at `path`, falling back to the built-in one.
pub fn load_catalog_or_builtin(path: Option<&Path>) -> Result<SignatureCatalog> {
    match path {
        Some(path) => {
            let catalog = match load_catalog(path) {
                Ok(catalog) => catalog,
                Err(e) if e.is_not_found() => bail!("Catalog not found: {}", path.display()),
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Failed to load catalog {}", path.display()));
                }
            };
            info!(
                "Loaded catalog version {} ({} signatures)",
                catalog.version,
                catalog.len()
            );
            Ok(catalog)
        }
        None => Ok(builtin_catalog()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigfind::{BUILTIN_VERSION, save_catalog};
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_fallback() {
        let catalog = load_catalog_or_builtin(None).unwrap();
        assert_eq!(catalog.version, BUILTIN_VERSION);
    }

    #[test]
    fn test_load_from_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut catalog = builtin_catalog();
        catalog.version = "custom".to_string();
        catalog.entries.truncate(2);
        save_catalog(temp_file.path(), &catalog).unwrap();

        let loaded = load_catalog_or_builtin(Some(temp_file.path())).unwrap();
        assert_eq!(loaded.version, "custom");
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_missing_catalog_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = load_catalog_or_builtin(Some(&path)).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Catalog not found"));
        assert!(message.contains("nope.json"));
    }

    #[test]
    fn test_malformed_catalog_error_has_context() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "{ not json").unwrap();
        let err = load_catalog_or_builtin(Some(temp_file.path())).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to load catalog"));
    }
}
