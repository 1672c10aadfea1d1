//! Prelude module for convenient imports
//!
//! ```ignore
//! use sigfind::prelude::*;
//! ```

// Resolution
pub use crate::resolver::{Group, Policy, Resolution, SignatureResolver, SubTag};

// Catalog and image
pub use crate::catalog::{Signature, SignatureCatalog, builtin_catalog, load_catalog};
pub use crate::image::Image;

// Error handling
pub use crate::error::{Error, Result};

// Export format trait
pub use crate::export::ExportFormat;
