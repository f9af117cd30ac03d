//! Storage error types
//!
//! Error codes:
//! - STORE_IO_ERROR (ERROR severity)
//! - STORE_DATA_CORRUPTION (FATAL severity): checksum mismatch or stored data
//!   that no longer decodes

use std::fmt;
use std::io;

/// Severity levels for storage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, stored data is intact
    Error,
    /// Stored data cannot be trusted
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Storage-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    /// Disk I/O failure
    StoreIoError,
    /// Checksum or decoding failure
    StoreDataCorruption,
}

impl StorageErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StorageErrorCode::StoreIoError => "STORE_IO_ERROR",
            StorageErrorCode::StoreDataCorruption => "STORE_DATA_CORRUPTION",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            StorageErrorCode::StoreIoError => Severity::Error,
            StorageErrorCode::StoreDataCorruption => Severity::Fatal,
        }
    }
}

impl fmt::Display for StorageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Storage error with context and optional I/O source
#[derive(Debug)]
pub struct StorageError {
    code: StorageErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl StorageError {
    /// Create an I/O error
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StorageErrorCode::StoreIoError,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a corruption error
    pub fn corruption(message: impl Into<String>) -> Self {
        Self {
            code: StorageErrorCode::StoreDataCorruption,
            message: message.into(),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StorageErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity(), self.code, self.message)?;
        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StorageErrorCode::StoreIoError.code(), "STORE_IO_ERROR");
        assert_eq!(
            StorageErrorCode::StoreDataCorruption.code(),
            "STORE_DATA_CORRUPTION"
        );
    }

    #[test]
    fn test_corruption_is_fatal() {
        assert!(StorageError::corruption("bad checksum").is_fatal());
        let io_err = io::Error::new(io::ErrorKind::Other, "disk full");
        assert!(!StorageError::io("write failed", io_err).is_fatal());
    }

    #[test]
    fn test_display_includes_source() {
        let io_err = io::Error::new(io::ErrorKind::Other, "disk full");
        let display = format!("{}", StorageError::io("write failed", io_err));
        assert!(display.contains("STORE_IO_ERROR"));
        assert!(display.contains("disk full"));
    }
}
