mod builtin;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::resolver::{Group, Policy};

pub use builtin::{BUILTIN_VERSION, builtin_catalog};

/// Catalog entry as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub label: String,
    /// Hex bytes, contiguous (`69029f1a`) or space separated (`69 02 9F 1A`)
    pub pattern: String,
    #[serde(default)]
    pub group: Group,
    /// Replacement bytes written at the reported offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
}

impl SignatureEntry {
    pub fn needle(&self) -> Result<Vec<u8>> {
        parse_needle(&self.pattern)
    }

    pub fn compile(&self) -> Result<Signature> {
        let needle = self.needle().map_err(|e| match e {
            Error::InvalidSignature(msg) => {
                Error::InvalidSignature(format!("{}: {}", self.label, msg))
            }
            other => other,
        })?;
        Ok(Signature {
            label: self.label.clone(),
            needle,
            group: self.group,
            patch: self.patch.clone(),
        })
    }
}

/// Catalog entry with its needle decoded, ready for resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub label: String,
    pub needle: Vec<u8>,
    pub group: Group,
    pub patch: Option<String>,
}

impl Signature {
    pub fn policy(&self) -> Policy {
        self.group.policy()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureCatalog {
    pub version: String,
    pub entries: Vec<SignatureEntry>,
}

impl SignatureCatalog {
    pub fn entry(&self, label: &str) -> Option<&SignatureEntry> {
        self.entries
            .iter()
            .find(|entry| entry.label.eq_ignore_ascii_case(label))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode every entry, in catalog order.
    ///
    /// Fails on the first malformed pattern so that no partial catalog is
    /// ever resolved.
    pub fn compile(&self) -> Result<Vec<Signature>> {
        if self.entries.is_empty() {
            return Err(Error::CatalogEmpty);
        }

        let mut signatures: Vec<Signature> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            if signatures
                .iter()
                .any(|s| s.label.eq_ignore_ascii_case(&entry.label))
            {
                warn!("Duplicate signature label '{}' in catalog", entry.label);
            }
            signatures.push(entry.compile()?);
        }

        debug!(
            "Compiled {} signatures (catalog version {})",
            signatures.len(),
            self.version
        );
        Ok(signatures)
    }
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<SignatureCatalog> {
    let content = fs::read_to_string(&path)?;
    let catalog: SignatureCatalog = serde_json::from_str(&content)?;
    debug!(
        "Loaded catalog '{}' with {} entries from {}",
        catalog.version,
        catalog.entries.len(),
        path.as_ref().display()
    );
    Ok(catalog)
}

pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &SignatureCatalog) -> Result<()> {
    let content = serde_json::to_string_pretty(catalog)?;
    fs::write(path, content)?;
    Ok(())
}

/// Decode a hex needle. Whitespace between bytes is optional.
pub fn parse_needle(pattern: &str) -> Result<Vec<u8>> {
    let digits: String = pattern.split_whitespace().collect();
    if digits.is_empty() {
        return Err(Error::InvalidSignature("Signature pattern is empty".to_string()));
    }
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidSignature(format!(
            "Odd number of hex digits in '{}'",
            pattern
        )));
    }

    // Tokens must not straddle a byte boundary ("6 90 2" is rejected)
    if pattern
        .split_whitespace()
        .any(|token| token.len() % 2 != 0)
    {
        return Err(Error::InvalidSignature(format!(
            "Misaligned hex token in '{}'",
            pattern
        )));
    }

    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            // from_str_radix alone would accept a leading '+'
            if !pair.iter().all(u8::is_ascii_hexdigit) {
                return Err(Error::InvalidSignature(format!(
                    "Non-hex character in '{}'",
                    pattern
                )));
            }
            let token = std::str::from_utf8(pair).map_err(|_| {
                Error::InvalidSignature(format!("Non-ASCII character in '{}'", pattern))
            })?;
            u8::from_str_radix(token, 16).map_err(|e| {
                Error::InvalidSignature(format!("Invalid signature token '{}': {}", token, e))
            })
        })
        .collect()
}

pub fn format_needle(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
