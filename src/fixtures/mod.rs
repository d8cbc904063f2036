//! Canonical ASD service fixture.
//!
//! Test harnesses call [`get_services`] for representative service
//! descriptors. Every call builds fresh owned values from literal constants,
//! so one test mutating its copy can never leak into another. Grid bounds are
//! declared as `const` items, which makes an inverted literal a compile error.

use crate::service::{GridBounds, Service, ServiceType, Sizing};

/// Root of every fixture endpoint.
pub const ASD_BASE_URL: &str = "http://localhost:8000/asd";

/// Layout template used by the `templated` fixture entry.
pub const TWO_BY_TWO_TEMPLATE: &str = "twoByTwo";

/// Number of records in the canonical fixture.
pub const SERVICE_COUNT: usize = 5;

const TOOLBOX_BOUNDS: GridBounds = GridBounds::new(1, 4, 1, 4);
const TERMINAL_BOUNDS: GridBounds = GridBounds::new(2, 6, 2, 6);
const TUNNEL_BOUNDS: GridBounds = GridBounds::new(1, 2, 1, 2);
const CONTAINERS_BOUNDS: GridBounds = GridBounds::new(2, 8, 2, 4);

enum SizingDef {
    Template(&'static str),
    Explicit(GridBounds),
}

struct ServiceDef {
    id: &'static str,
    name: &'static str,
    url: &'static str,
    service_type: ServiceType,
    max_instances: u32,
    sizing: SizingDef,
}

impl ServiceDef {
    fn to_service(&self) -> Service {
        Service {
            id: self.id.to_string(),
            name: self.name.to_string(),
            url: self.url.to_string(),
            service_type: self.service_type,
            max_instances: self.max_instances,
            sizing: match self.sizing {
                SizingDef::Template(name) => Sizing::Template(name.to_string()),
                SizingDef::Explicit(bounds) => Sizing::Explicit(bounds),
            },
        }
    }
}

static SERVICE_DEFS: [ServiceDef; SERVICE_COUNT] = [
    ServiceDef {
        id: "toolbox",
        name: "Toolbox",
        url: "http://localhost:8000/asd/toolbox",
        service_type: ServiceType::Api,
        max_instances: 2,
        sizing: SizingDef::Explicit(TOOLBOX_BOUNDS),
    },
    ServiceDef {
        id: "terminal",
        name: "Terminal",
        url: "http://localhost:8000/asd/terminal",
        service_type: ServiceType::Web,
        max_instances: 4,
        sizing: SizingDef::Explicit(TERMINAL_BOUNDS),
    },
    ServiceDef {
        id: "tunnel",
        name: "Tunnel",
        url: "http://localhost:8000/asd/tunnel",
        service_type: ServiceType::Api,
        max_instances: 1,
        sizing: SizingDef::Explicit(TUNNEL_BOUNDS),
    },
    ServiceDef {
        id: "containers",
        name: "Containers",
        url: "http://localhost:8000/asd/containers",
        service_type: ServiceType::Web,
        max_instances: 3,
        sizing: SizingDef::Explicit(CONTAINERS_BOUNDS),
    },
    ServiceDef {
        id: "templated",
        name: "Templated",
        url: "http://localhost:8000/asd/templated",
        service_type: ServiceType::Web,
        max_instances: 1,
        sizing: SizingDef::Template(TWO_BY_TWO_TEMPLATE),
    },
];

/// Return the canonical service list, in declaration order.
pub fn get_services() -> Vec<Service> {
    SERVICE_DEFS.iter().map(ServiceDef::to_service).collect()
}

/// Ids of the canonical services, in declaration order.
pub fn service_ids() -> impl Iterator<Item = &'static str> {
    SERVICE_DEFS.iter().map(|def| def.id)
}
