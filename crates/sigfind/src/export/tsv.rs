//! Tab-separated export

use crate::resolver::Resolution;

use super::format::ExportFormat;

#[derive(Debug, Clone, Copy, Default)]
pub struct TsvExporter;

impl ExportFormat for TsvExporter {
    fn header(&self) -> Option<String> {
        Some(["Label", "Group", "Offset", "Matches", "Patch"].join("\t"))
    }

    fn format_row(&self, resolution: &Resolution) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            resolution.label,
            resolution.group,
            resolution.offset_text(),
            resolution.match_count,
            resolution.patch.as_deref().unwrap_or("")
        )
    }
}
