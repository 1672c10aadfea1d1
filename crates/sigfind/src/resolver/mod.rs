//! Signature resolver
//!
//! Finds a signature's matches inside an executable image and converts the
//! selected match position into the offset reported for patching.

mod policy;

use std::fmt;

use memchr::memmem;
use tracing::{debug, warn};

use crate::catalog::Signature;

pub use policy::*;

/// Sentinel printed for a signature with no qualifying match
pub const NOT_FOUND: &str = "NoN";

/// Lowest position `>= start` at which `needle` occurs in `buffer`.
///
/// An empty needle matches at `start` itself.
pub fn find_first(buffer: &[u8], needle: &[u8], start: usize) -> Option<usize> {
    let haystack = buffer.get(start..)?;
    memmem::find(haystack, needle).map(|pos| start + pos)
}

/// Iterate every match of `needle`, restarting one byte past each match start.
///
/// Overlapping occurrences are all visited: `aa` in `aaaa` yields 0, 1, 2.
pub fn find_all<'a>(buffer: &'a [u8], needle: &'a [u8]) -> Matches<'a> {
    Matches {
        buffer,
        needle,
        next_start: Some(0),
    }
}

/// Iterator returned by [`find_all`]
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    buffer: &'a [u8],
    needle: &'a [u8],
    next_start: Option<usize>,
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let start = self.next_start?;
        let found = find_first(self.buffer, self.needle, start);
        self.next_start = found.map(|pos| pos + 1);
        found
    }
}

/// Resolve a single needle under `policy`. `None` means "not found".
pub fn resolve(buffer: &[u8], needle: &[u8], policy: Policy) -> Option<u64> {
    scan(buffer, needle, policy).offset(policy)
}

/// Render a resolved offset as `0x` + uppercase hex, or the not-found sentinel.
pub fn format_offset(offset: Option<u64>) -> String {
    match offset {
        Some(value) => format!("0x{:X}", value),
        None => NOT_FOUND.to_string(),
    }
}

#[derive(Debug, Clone, Copy)]
struct ScanOutcome {
    first: Option<usize>,
    count: usize,
}

impl ScanOutcome {
    fn offset(&self, policy: Policy) -> Option<u64> {
        self.first.map(|pos| pos as u64 + policy.addend())
    }
}

fn scan(buffer: &[u8], needle: &[u8], policy: Policy) -> ScanOutcome {
    if policy.is_exhaustive() {
        let mut matches = find_all(buffer, needle);
        let first = matches.next();
        ScanOutcome {
            first,
            count: usize::from(first.is_some()) + matches.count(),
        }
    } else {
        let first = find_first(buffer, needle, 0);
        ScanOutcome {
            first,
            count: usize::from(first.is_some()),
        }
    }
}

/// Outcome of resolving one catalog signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub label: String,
    pub group: Group,
    /// Raw position of the selected match
    pub position: Option<usize>,
    /// Reported (patch-relevant) offset
    pub offset: Option<u64>,
    /// Matches seen by the scan; at most 1 for single-search policies
    pub match_count: usize,
    /// Replacement value carried over from the catalog
    pub patch: Option<String>,
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        self.offset.is_some()
    }

    pub fn offset_text(&self) -> String {
        format_offset(self.offset)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.offset_text())
    }
}

/// Resolves signatures against one borrowed image buffer
#[derive(Debug, Clone, Copy)]
pub struct SignatureResolver<'a> {
    buffer: &'a [u8],
}

impl<'a> SignatureResolver<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer }
    }

    pub fn resolve(&self, needle: &[u8], policy: Policy) -> Option<u64> {
        resolve(self.buffer, needle, policy)
    }

    pub fn resolve_signature(&self, signature: &Signature) -> Resolution {
        let policy = signature.policy();
        let outcome = scan(self.buffer, &signature.needle, policy);
        let offset = outcome.offset(policy);

        match outcome.first {
            Some(pos) => debug!(
                "  {} [{}]: match at 0x{:X} -> {}",
                signature.label,
                signature.group,
                pos,
                format_offset(offset)
            ),
            None => debug!("  {} [{}]: not found", signature.label, signature.group),
        }
        if outcome.count > 1 {
            warn!(
                "Signature '{}' matched {} times, reporting the first",
                signature.label, outcome.count
            );
        }

        Resolution {
            label: signature.label.clone(),
            group: signature.group,
            position: outcome.first,
            offset,
            match_count: outcome.count,
            patch: signature.patch.clone(),
        }
    }

    /// Resolve every signature, preserving input order.
    pub fn resolve_all(&self, signatures: &[Signature]) -> Vec<Resolution> {
        debug!(
            "Resolving {} signatures over {} bytes",
            signatures.len(),
            self.buffer.len()
        );
        let results: Vec<Resolution> = signatures
            .iter()
            .map(|signature| self.resolve_signature(signature))
            .collect();
        let found = results.iter().filter(|r| r.is_found()).count();
        debug!("Resolved {}/{} signatures", found, results.len());
        results
    }
}
