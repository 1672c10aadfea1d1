//! # sigfind
//!
//! Signature-based offset discovery for executable images.
//!
//! This crate provides:
//! - The signature resolver (search primitive + resolution policies)
//! - Signature catalogs (JSON on disk, plus a built-in catalog)
//! - Image loading
//! - Text, TSV and JSON rendering of results
//!
//! ## Example
//!
//! ```
//! use sigfind::{Policy, SubTag, format_offset, resolve};
//!
//! let image = [0x00, 0x01, 0x02, 0x03, 0x69, 0x02, 0x9F, 0x1A, 0xFF];
//! let offset = resolve(&image, &[0x69, 0x02, 0x9F, 0x1A], Policy::Default(SubTag::A));
//! assert_eq!(format_offset(offset), "0x18");
//! ```

pub mod catalog;
pub mod error;
pub mod export;
pub mod image;
pub mod prelude;
pub mod resolver;

pub use catalog::{
    BUILTIN_VERSION, Signature, SignatureCatalog, SignatureEntry, builtin_catalog, format_needle,
    load_catalog, parse_needle, save_catalog,
};
pub use error::{Error, Result};
pub use export::{ExportFormat, JsonExporter, ScanReport, TextExporter, TsvExporter};
pub use image::Image;
pub use resolver::{
    Group, Matches, NOT_FOUND, Policy, Resolution, SignatureResolver, SubTag, find_all,
    find_first, format_offset, resolve,
};
