//! Validated catalog of service descriptors.
//!
//! The canonical fixture also ships as `fixtures/services.json` so harnesses in
//! other languages can read the same records. [`ServiceCatalog`] parses that
//! document (or any other in the same shape), enforces the descriptor rules and
//! answers lookups. [`ServiceCatalog::diff`] compares two catalogs so the
//! bundled file can be checked against the literal fixture.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::error::{log_service_error, CatalogError, ServiceError};
use crate::fixtures::get_services;
use crate::service::{Service, ServiceRecord, ServiceType};

/// Default catalog path bundled with the crate sources.
const CATALOG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/services.json");

const EMBEDDED_CATALOG: &str = include_str!("../fixtures/services.json");

/// Catalog document version written by [`ServiceCatalog::canonical`].
pub const CATALOG_VERSION: u32 = 1;

static EMBEDDED: Lazy<Result<ServiceCatalog, CatalogError>> =
    Lazy::new(|| ServiceCatalog::from_json(EMBEDDED_CATALOG));

/// Machine-readable catalog containing all known services.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCatalog {
    pub version: u32,
    pub services: Vec<Service>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    version: u32,
    services: Vec<ServiceRecord>,
}

impl ServiceCatalog {
    /// Catalog built from the literal fixture.
    pub fn canonical() -> Self {
        Self {
            version: CATALOG_VERSION,
            services: get_services(),
        }
    }

    /// The catalog compiled into the crate, parsed once per process.
    pub fn embedded() -> Result<&'static Self, CatalogError> {
        match &*EMBEDDED {
            Ok(catalog) => Ok(catalog),
            Err(err) => Err(err.clone()),
        }
    }

    /// Load catalog from disk when available, falling back to the embedded copy.
    pub fn load_from_default() -> Result<Self, CatalogError> {
        Self::load(&CatalogConfig::default())
    }

    /// Load the catalog described by `config`.
    ///
    /// An explicit `path` is read as-is and never falls back. The default
    /// location falls back to the embedded catalog when the file is missing
    /// and the config allows it; every other read failure is returned.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        if let Some(path) = &config.path {
            return Self::load_from_path(path);
        }

        let path = Path::new(CATALOG_PATH);
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!("[Catalog] Reading {}", path.display());
                Self::from_json(&contents)
            }
            Err(err)
                if err.kind() == std::io::ErrorKind::NotFound
                    && config.allow_embedded_fallback =>
            {
                tracing::warn!(
                    "[Catalog] {} not found, using embedded catalog",
                    path.display()
                );
                Self::embedded().cloned()
            }
            Err(err) => Err(read_error(path, err)),
        }
    }

    /// Read and parse an explicit catalog file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| read_error(path, err))?;
        Self::from_json(&contents)
    }

    /// Parse catalog contents from JSON and validate invariants.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(data)?;
        let services = document
            .services
            .into_iter()
            .map(|record| {
                let id = record.id.clone();
                Service::try_from(record).map_err(|error| {
                    log_service_error(&error, "ServiceCatalog::from_json");
                    invalid(id, error)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Self {
            version: document.version,
            services,
        };
        catalog.validate()?;
        tracing::debug!(
            "[Catalog] Parsed {} services (version {})",
            catalog.len(),
            catalog.version
        );
        Ok(catalog)
    }

    /// Check catalog-wide rules plus every record.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.version == 0 {
            return Err(CatalogError::InvalidVersion {
                version: self.version,
            });
        }
        if self.services.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for service in &self.services {
            service
                .validate()
                .map_err(|error| invalid(service.id.clone(), error))?;
            if !seen.insert(service.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: service.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Return a single service by id, if present.
    pub fn find(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|service| service.id.as_str())
    }

    pub fn by_type(&self, service_type: ServiceType) -> impl Iterator<Item = &Service> {
        self.services
            .iter()
            .filter(move |service| service.service_type == service_type)
    }

    /// Services with a non-zero instance cap.
    pub fn enabled(&self) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(|service| service.is_enabled())
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, CatalogError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Compare this catalog against `expected`, keyed by service id.
    pub fn diff(&self, expected: &ServiceCatalog) -> CatalogDiff {
        let mut diff = CatalogDiff::default();

        for want in &expected.services {
            match self.find(&want.id) {
                Some(have) if have != want => diff.changed.push(want.id.clone()),
                Some(_) => {}
                None => diff.missing.push(want.id.clone()),
            }
        }
        for have in &self.services {
            if expected.find(&have.id).is_none() {
                diff.unexpected.push(have.id.clone());
            }
        }

        let order_matches = self.ids().eq(expected.ids());
        diff.reordered = !order_matches && diff.missing.is_empty() && diff.unexpected.is_empty();
        diff
    }
}

/// Per-id differences between two catalogs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogDiff {
    /// Expected ids absent from the catalog
    pub missing: Vec<String>,
    /// Ids present in the catalog but not expected
    pub unexpected: Vec<String>,
    /// Ids present in both with different contents
    pub changed: Vec<String>,
    /// Same ids, different order
    pub reordered: bool,
}

impl CatalogDiff {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
            && self.unexpected.is_empty()
            && self.changed.is_empty()
            && !self.reordered
    }
}

fn invalid(id: String, error: ServiceError) -> CatalogError {
    CatalogError::InvalidService { id, error }
}

fn read_error(path: &Path, err: std::io::Error) -> CatalogError {
    CatalogError::ReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
