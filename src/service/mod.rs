//! Service descriptor model.
//!
//! A [`Service`] describes one orchestrable ASD endpoint: where it lives, what
//! kind of endpoint it is, how many instances may run at once and how it is
//! sized on the dashboard grid. Sizing is either a named layout template or an
//! explicit set of grid bounds, never both, which [`Sizing`] encodes
//! structurally.
//!
//! On the wire a service keeps its flat, camelCase shape (`template` next to a
//! `config` object holding the four bounds). [`ServiceRecord`] mirrors that
//! shape and conversion between the two is where shape rules are enforced.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// How a consumer treats the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// Data API endpoint
    Api,
    /// Rendered UI endpoint
    Web,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Api => "api",
            ServiceType::Web => "web",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive grid-size bounds.
///
/// Fields are private so `min <= max` holds on both axes for every value.
/// Literal bounds go through [`GridBounds::new`] in const context, which turns
/// an inverted pair into a compile error; decoded bounds go through
/// [`GridBounds::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridBounds {
    min_columns: u32,
    max_columns: u32,
    min_rows: u32,
    max_rows: u32,
}

impl GridBounds {
    /// Panics when a minimum exceeds its maximum.
    pub const fn new(min_columns: u32, max_columns: u32, min_rows: u32, max_rows: u32) -> Self {
        assert!(min_columns <= max_columns, "minColumns exceeds maxColumns");
        assert!(min_rows <= max_rows, "minRows exceeds maxRows");
        Self {
            min_columns,
            max_columns,
            min_rows,
            max_rows,
        }
    }

    pub fn try_new(
        min_columns: u32,
        max_columns: u32,
        min_rows: u32,
        max_rows: u32,
    ) -> Result<Self, ServiceError> {
        if min_columns > max_columns {
            return Err(ServiceError::InvertedBounds {
                axis: "columns".to_string(),
                min: min_columns,
                max: max_columns,
            });
        }
        if min_rows > max_rows {
            return Err(ServiceError::InvertedBounds {
                axis: "rows".to_string(),
                min: min_rows,
                max: max_rows,
            });
        }
        Ok(Self {
            min_columns,
            max_columns,
            min_rows,
            max_rows,
        })
    }

    pub fn min_columns(&self) -> u32 {
        self.min_columns
    }

    pub fn max_columns(&self) -> u32 {
        self.max_columns
    }

    pub fn min_rows(&self) -> u32 {
        self.min_rows
    }

    pub fn max_rows(&self) -> u32 {
        self.max_rows
    }

    pub fn columns(&self) -> RangeInclusive<u32> {
        self.min_columns..=self.max_columns
    }

    pub fn rows(&self) -> RangeInclusive<u32> {
        self.min_rows..=self.max_rows
    }

    /// Returns true when a `columns` x `rows` cell fits inside the bounds.
    pub fn contains(&self, columns: u32, rows: u32) -> bool {
        self.columns().contains(&columns) && self.rows().contains(&rows)
    }
}

/// Exactly one sizing mode per service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sizing {
    /// Named layout template; authoritative over any bounds.
    Template(String),
    Explicit(GridBounds),
}

/// One orchestrable service endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ServiceRecord", into = "ServiceRecord")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub url: String,
    pub service_type: ServiceType,
    /// Upper bound on concurrently allocated instances; 0 disables the service.
    pub max_instances: u32,
    pub sizing: Sizing,
}

impl Service {
    pub fn template(&self) -> Option<&str> {
        match &self.sizing {
            Sizing::Template(name) => Some(name),
            Sizing::Explicit(_) => None,
        }
    }

    pub fn bounds(&self) -> Option<&GridBounds> {
        match &self.sizing {
            Sizing::Template(_) => None,
            Sizing::Explicit(bounds) => Some(bounds),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_instances > 0
    }

    /// Check the rules the type system cannot carry (non-empty strings).
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.id.trim().is_empty() {
            return Err(ServiceError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(ServiceError::EmptyName);
        }
        if let Sizing::Template(name) = &self.sizing {
            if name.trim().is_empty() {
                return Err(ServiceError::EmptyTemplate);
            }
        }
        Ok(())
    }
}

/// Wire representation of a [`Service`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub max_instances: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default)]
    pub config: BoundsRecord,
}

/// Wire representation of the `config` object; every bound is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rows: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<u32>,
}

impl BoundsRecord {
    pub fn is_empty(&self) -> bool {
        self.min_columns.is_none()
            && self.max_columns.is_none()
            && self.min_rows.is_none()
            && self.max_rows.is_none()
    }

    fn to_bounds(&self) -> Result<GridBounds, ServiceError> {
        GridBounds::try_new(
            require(self.min_columns, "minColumns")?,
            require(self.max_columns, "maxColumns")?,
            require(self.min_rows, "minRows")?,
            require(self.max_rows, "maxRows")?,
        )
    }
}

impl From<GridBounds> for BoundsRecord {
    fn from(bounds: GridBounds) -> Self {
        Self {
            min_columns: Some(bounds.min_columns),
            max_columns: Some(bounds.max_columns),
            min_rows: Some(bounds.min_rows),
            max_rows: Some(bounds.max_rows),
        }
    }
}

fn require(value: Option<u32>, field: &str) -> Result<u32, ServiceError> {
    value.ok_or_else(|| ServiceError::MissingBound {
        field: field.to_string(),
    })
}

impl TryFrom<ServiceRecord> for Service {
    type Error = ServiceError;

    fn try_from(record: ServiceRecord) -> Result<Self, Self::Error> {
        let sizing = match record.template {
            Some(name) => {
                if !record.config.is_empty() {
                    tracing::debug!(
                        "[Service] {} uses template {}; ignoring config bounds",
                        record.id,
                        name
                    );
                }
                Sizing::Template(name)
            }
            None => Sizing::Explicit(record.config.to_bounds()?),
        };
        let service = Service {
            id: record.id,
            name: record.name,
            url: record.url,
            service_type: record.service_type,
            max_instances: record.max_instances,
            sizing,
        };
        service.validate()?;
        Ok(service)
    }
}

impl From<Service> for ServiceRecord {
    fn from(service: Service) -> Self {
        let (template, config) = match service.sizing {
            Sizing::Template(name) => (Some(name), BoundsRecord::default()),
            Sizing::Explicit(bounds) => (None, bounds.into()),
        };
        Self {
            id: service.id,
            name: service.name,
            url: service.url,
            service_type: service.service_type,
            max_instances: service.max_instances,
            template,
            config,
        }
    }
}

#[cfg(test)]
mod tests;
