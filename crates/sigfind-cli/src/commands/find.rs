//! Find command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use sigfind::{Group, Image, Signature, SignatureResolver, format_needle, parse_needle};

/// Resolve one ad-hoc pattern against a binary
pub fn run(binary: &Path, pattern: &str, group: Group) -> Result<()> {
    let needle = parse_needle(pattern).context("Invalid pattern")?;
    let image = Image::load(binary)
        .with_context(|| format!("Failed to read binary {}", binary.display()))?;

    let signature = Signature {
        label: "pattern".to_string(),
        needle,
        group,
        patch: None,
    };
    let resolution = SignatureResolver::new(image.as_bytes()).resolve_signature(&signature);

    println!("Pattern: {}", format_needle(&signature.needle));
    println!("Group:   {} ({:?})", group, signature.policy());
    println!("Matches: {}", resolution.match_count);
    if let Some(pos) = resolution.position {
        println!("First:   0x{:X}", pos);
    }
    println!("Offset:  {}", resolution.offset_text());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_rejects_bad_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("YWP");
        fs::write(&path, [0x00, 0x01]).unwrap();
        assert!(run(&path, "0x1", Group::A).is_err());
    }

    #[test]
    fn test_find_missing_binary() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&dir.path().join("YWP"), "0001", Group::A).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read binary"));
    }

    #[test]
    fn test_find_not_found_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("YWP");
        fs::write(&path, [0x00, 0x01]).unwrap();
        assert!(run(&path, "ABCD", Group::E).is_ok());
    }
}
