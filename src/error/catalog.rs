// Catalog error types and constants

use crate::error::{ErrorCode, ServiceError};
use log::error;
use std::fmt;

/// Catalog error code constants
///
/// Error code range: 4001-4006
pub struct CatalogErrorCodes {}

impl CatalogErrorCodes {
    /// Catalog JSON could not be parsed
    pub const PARSE_FAILED: i32 = 4001;

    /// Catalog file could not be read
    pub const READ_FAILED: i32 = 4002;

    /// Catalog version is zero
    pub const INVALID_VERSION: i32 = 4003;

    /// Catalog declares no services
    pub const EMPTY: i32 = 4004;

    /// Two services share an id
    pub const DUPLICATE_ID: i32 = 4005;

    /// A service record failed validation
    pub const INVALID_SERVICE: i32 = 4006;
}

/// Log a catalog error with structured context
///
/// The logging is non-blocking and will not panic on failure.
pub fn log_catalog_error(err: &CatalogError, context: &str) {
    error!(
        "Catalog error in {}: code={}, component=ServiceCatalog, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Catalog-level errors
///
/// These cover reading, parsing and validating a whole list of service
/// descriptors.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    ParseFailed { reason: String },

    ReadFailed { path: String, reason: String },

    InvalidVersion { version: u32 },

    Empty,

    DuplicateId { id: String },

    /// Record-level failure, tagged with the offending service id
    InvalidService { id: String, error: ServiceError },
}

impl ErrorCode for CatalogError {
    fn code(&self) -> i32 {
        match self {
            CatalogError::ParseFailed { .. } => CatalogErrorCodes::PARSE_FAILED,
            CatalogError::ReadFailed { .. } => CatalogErrorCodes::READ_FAILED,
            CatalogError::InvalidVersion { .. } => CatalogErrorCodes::INVALID_VERSION,
            CatalogError::Empty => CatalogErrorCodes::EMPTY,
            CatalogError::DuplicateId { .. } => CatalogErrorCodes::DUPLICATE_ID,
            CatalogError::InvalidService { .. } => CatalogErrorCodes::INVALID_SERVICE,
        }
    }

    fn message(&self) -> String {
        match self {
            CatalogError::ParseFailed { reason } => {
                format!("Failed to parse service catalog JSON: {}", reason)
            }
            CatalogError::ReadFailed { path, reason } => {
                format!("Failed to read service catalog {}: {}", path, reason)
            }
            CatalogError::InvalidVersion { version } => {
                format!("Catalog version must be > 0 (got {})", version)
            }
            CatalogError::Empty => "Catalog must contain at least one service".to_string(),
            CatalogError::DuplicateId { id } => {
                format!("Duplicate service id detected: {}", id)
            }
            CatalogError::InvalidService { id, error } => {
                format!("Service '{}' is invalid: {}", id, error.message())
            }
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CatalogError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::InvalidService { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::ParseFailed {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_codes() {
        assert_eq!(
            CatalogError::ParseFailed {
                reason: "test".to_string()
            }
            .code(),
            CatalogErrorCodes::PARSE_FAILED
        );
        assert_eq!(
            CatalogError::InvalidVersion { version: 0 }.code(),
            CatalogErrorCodes::INVALID_VERSION
        );
        assert_eq!(CatalogError::Empty.code(), CatalogErrorCodes::EMPTY);
        assert_eq!(
            CatalogError::DuplicateId {
                id: "toolbox".to_string()
            }
            .code(),
            CatalogErrorCodes::DUPLICATE_ID
        );
        assert_eq!(
            CatalogError::InvalidService {
                id: "toolbox".to_string(),
                error: ServiceError::EmptyName
            }
            .code(),
            CatalogErrorCodes::INVALID_SERVICE
        );
    }

    #[test]
    fn test_invalid_service_message_names_service() {
        let err = CatalogError::InvalidService {
            id: "tunnel".to_string(),
            error: ServiceError::EmptyTemplate,
        };
        assert_eq!(
            err.message(),
            "Service 'tunnel' is invalid: Template name cannot be empty"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: CatalogError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.code(), CatalogErrorCodes::PARSE_FAILED);
    }
}
