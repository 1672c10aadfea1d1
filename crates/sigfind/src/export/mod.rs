//! Rendering of resolution results

mod format;
mod json;
mod report;
mod text;
mod tsv;

pub use format::ExportFormat;
pub use json::{JsonExporter, format_json_entry};
pub use report::{ResolutionJson, ScanReport};
pub use text::TextExporter;
pub use tsv::TsvExporter;
