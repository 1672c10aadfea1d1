use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Signature catalog is empty")]
    CatalogEmpty,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());

        assert!(!Error::CatalogEmpty.is_not_found());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidSignature("odd number of hex digits".to_string());
        assert_eq!(err.to_string(), "Invalid signature: odd number of hex digits");
        assert_eq!(Error::CatalogEmpty.to_string(), "Signature catalog is empty");
    }
}
