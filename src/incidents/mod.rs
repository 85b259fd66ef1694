//! Company incidents: catalog, rolling and player resolution.

pub mod data;
pub mod generation;
pub mod logic;
pub mod types;

pub use data::default_incident_templates;
pub use generation::generate_incident;
pub use logic::{resolve_incident, IncidentResolution};
pub use types::{ActiveIncident, DecisionId, IncidentTemplate, Severity};
