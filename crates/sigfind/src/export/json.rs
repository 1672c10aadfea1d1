//! JSON export format implementation

use serde_json::{Value as JsonValue, json};

use crate::resolver::Resolution;

use super::format::ExportFormat;

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportFormat for JsonExporter {
    fn header(&self) -> Option<String> {
        None
    }

    fn format_row(&self, resolution: &Resolution) -> String {
        format_json_entry(resolution).to_string()
    }
}

/// Generate a JSON entry for one resolution
///
/// Offsets are emitted as the same `0x..` text the console shows so that
/// consumers parsing either output see identical values.
pub fn format_json_entry(resolution: &Resolution) -> JsonValue {
    json!({
        "label": resolution.label,
        "group": resolution.group.short_name(),
        "found": resolution.is_found(),
        "offset": resolution.offset.map(|o| format!("0x{:X}", o)),
        "position": resolution.position.map(|p| format!("0x{:X}", p)),
        "matches": resolution.match_count,
        "patch": resolution.patch,
    })
}
