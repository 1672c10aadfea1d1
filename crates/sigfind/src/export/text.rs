//! Plain `label: offset` listing

use crate::resolver::Resolution;

use super::format::ExportFormat;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl ExportFormat for TextExporter {
    fn header(&self) -> Option<String> {
        None
    }

    fn format_row(&self, resolution: &Resolution) -> String {
        resolution.to_string()
    }
}
