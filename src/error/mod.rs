// Error types for the ASD service fixtures
//
// This module defines the error types raised while decoding and validating
// service descriptors and catalogs. Every error carries a stable numeric code
// so harnesses can match on failures without parsing messages.

mod catalog;
mod service;

pub use catalog::{log_catalog_error, CatalogError, CatalogErrorCodes};
pub use service::{log_service_error, ServiceError, ServiceErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling across
/// the library and the CLI.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
