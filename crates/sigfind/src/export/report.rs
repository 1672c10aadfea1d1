//! Whole-run scan report

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::image::Image;
use crate::resolver::{Resolution, format_offset};

/// Scan report for archiving or diffing between builds
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub tool_version: String,
    pub generated_at: String,
    pub image: Option<String>,
    pub image_size: usize,
    pub catalog_version: String,
    pub found: usize,
    pub total: usize,
    pub results: Vec<ResolutionJson>,
}

/// Resolution in report form (offsets as hex text)
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionJson {
    pub label: String,
    pub group: String,
    pub offset: String,
    pub matches: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
}

impl From<&Resolution> for ResolutionJson {
    fn from(resolution: &Resolution) -> Self {
        Self {
            label: resolution.label.clone(),
            group: resolution.group.to_string(),
            offset: format_offset(resolution.offset),
            matches: resolution.match_count,
            patch: resolution.patch.clone(),
        }
    }
}

impl ScanReport {
    pub fn new(image: &Image, catalog_version: &str, resolutions: &[Resolution]) -> Self {
        Self::with_timestamp(image, catalog_version, resolutions, Local::now())
    }

    pub fn with_timestamp(
        image: &Image,
        catalog_version: &str,
        resolutions: &[Resolution],
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: generated_at.to_rfc3339(),
            image: image.path().map(|p| p.display().to_string()),
            image_size: image.len(),
            catalog_version: catalog_version.to_string(),
            found: resolutions.iter().filter(|r| r.is_found()).count(),
            total: resolutions.len(),
            results: resolutions.iter().map(ResolutionJson::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
