//! Staffing backend: workers, projects and assignments behind a REST API.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the entities,
//! policies and workflow services behind port traits; [`inbound`] adapts
//! HTTP onto the driving ports; [`outbound`] implements the driven ports
//! against PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
