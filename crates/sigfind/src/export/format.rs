//! ExportFormat trait definition

use crate::resolver::Resolution;

/// Trait for export format implementations
///
/// Provides a common interface for different export formats (text, TSV, JSON)
pub trait ExportFormat {
    /// Returns the header line for the format (empty for formats without headers)
    fn header(&self) -> Option<String>;

    /// Format a single resolution
    fn format_row(&self, resolution: &Resolution) -> String;

    /// Format multiple resolutions, in the given order
    fn format_rows(&self, resolutions: &[Resolution]) -> String {
        let mut output = String::new();
        if let Some(header) = self.header() {
            output.push_str(&header);
            output.push('\n');
        }
        for resolution in resolutions {
            output.push_str(&self.format_row(resolution));
            output.push('\n');
        }
        output
    }
}
