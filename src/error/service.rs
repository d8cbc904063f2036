// Service descriptor error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;

/// Service descriptor error code constants
///
/// Error code range: 3001-3005
pub struct ServiceErrorCodes {}

impl ServiceErrorCodes {
    /// Service id is empty or whitespace
    pub const EMPTY_ID: i32 = 3001;

    /// Service name is empty or whitespace
    pub const EMPTY_NAME: i32 = 3002;

    /// Template name is present but empty
    pub const EMPTY_TEMPLATE: i32 = 3003;

    /// A grid bound is missing and no template was given
    pub const MISSING_BOUND: i32 = 3004;

    /// Minimum bound exceeds maximum bound on an axis
    pub const INVERTED_BOUNDS: i32 = 3005;
}

/// Log a service error with structured context
///
/// The logging is non-blocking and will not panic on failure.
pub fn log_service_error(err: &ServiceError, context: &str) {
    error!(
        "Service error in {}: code={}, component=ServiceRecord, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Shape violations found while turning a wire record into a [`crate::Service`].
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    EmptyId,

    EmptyName,

    EmptyTemplate,

    /// One of `minColumns`, `maxColumns`, `minRows`, `maxRows` is absent
    MissingBound { field: String },

    /// `min > max` on the given axis (`columns` or `rows`)
    InvertedBounds { axis: String, min: u32, max: u32 },
}

impl ErrorCode for ServiceError {
    fn code(&self) -> i32 {
        match self {
            ServiceError::EmptyId => ServiceErrorCodes::EMPTY_ID,
            ServiceError::EmptyName => ServiceErrorCodes::EMPTY_NAME,
            ServiceError::EmptyTemplate => ServiceErrorCodes::EMPTY_TEMPLATE,
            ServiceError::MissingBound { .. } => ServiceErrorCodes::MISSING_BOUND,
            ServiceError::InvertedBounds { .. } => ServiceErrorCodes::INVERTED_BOUNDS,
        }
    }

    fn message(&self) -> String {
        match self {
            ServiceError::EmptyId => "Service id cannot be empty".to_string(),
            ServiceError::EmptyName => "Service name cannot be empty".to_string(),
            ServiceError::EmptyTemplate => "Template name cannot be empty".to_string(),
            ServiceError::MissingBound { field } => {
                format!("Missing config.{} and no template given", field)
            }
            ServiceError::InvertedBounds { axis, min, max } => {
                format!("Minimum {} ({}) exceeds maximum {} ({})", axis, min, axis, max)
            }
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ServiceError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_codes() {
        assert_eq!(ServiceError::EmptyId.code(), ServiceErrorCodes::EMPTY_ID);
        assert_eq!(ServiceError::EmptyName.code(), ServiceErrorCodes::EMPTY_NAME);
        assert_eq!(
            ServiceError::EmptyTemplate.code(),
            ServiceErrorCodes::EMPTY_TEMPLATE
        );
        assert_eq!(
            ServiceError::MissingBound {
                field: "minRows".to_string()
            }
            .code(),
            ServiceErrorCodes::MISSING_BOUND
        );
        assert_eq!(
            ServiceError::InvertedBounds {
                axis: "rows".to_string(),
                min: 3,
                max: 1
            }
            .code(),
            ServiceErrorCodes::INVERTED_BOUNDS
        );
    }

    #[test]
    fn test_service_error_messages() {
        let err = ServiceError::MissingBound {
            field: "maxColumns".to_string(),
        };
        assert_eq!(err.message(), "Missing config.maxColumns and no template given");

        let err = ServiceError::InvertedBounds {
            axis: "columns".to_string(),
            min: 5,
            max: 2,
        };
        assert_eq!(err.message(), "Minimum columns (5) exceeds maximum columns (2)");
    }

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::EmptyTemplate;
        let display = format!("{}", err);
        assert!(display.contains("ServiceError"));
        assert!(display.contains(&err.code().to_string()));
    }
}
