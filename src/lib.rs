// ASD Service Fixtures - canonical service descriptors for test harnesses
// Typed service model, literal fixture and a validated JSON catalog

// Module declarations
pub mod catalog;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod service;

// Re-exports for convenience
pub use catalog::{CatalogDiff, ServiceCatalog};
pub use error::{CatalogError, ErrorCode, ServiceError};
pub use fixtures::get_services;
pub use service::{GridBounds, Service, ServiceType, Sizing};
