//! Executable image loading
//!
//! The whole file is read into memory once; resolution only ever borrows it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Read-only executable image
#[derive(Debug, Clone, Default)]
pub struct Image {
    path: Option<PathBuf>,
    bytes: Vec<u8>,
}

impl Image {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        debug!("Loaded image {} ({} bytes)", path.display(), bytes.len());
        Ok(Self {
            path: Some(path.to_path_buf()),
            bytes,
        })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { path: None, bytes }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Image {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_image() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[0x69, 0x02, 0x9F, 0x1A]).unwrap();

        let image = Image::load(temp_file.path()).unwrap();
        assert_eq!(image.len(), 4);
        assert_eq!(image.as_bytes(), &[0x69, 0x02, 0x9F, 0x1A]);
        assert_eq!(image.path(), Some(temp_file.path()));
    }

    #[test]
    fn test_load_missing_image() {
        let dir = tempfile::tempdir().unwrap();
        let err = Image::load(dir.path().join("YWP")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_bytes() {
        let image = Image::from_bytes(Vec::new());
        assert!(image.is_empty());
        assert!(image.path().is_none());
    }
}
