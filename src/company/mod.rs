//! The simulated company: employees, traits, ledger and the periodic tick.

pub mod tick;
pub mod traits;
pub mod types;

pub use tick::{incident_chance, simulate_tick, IncidentResult, TickInput, TickOutcome};
pub use traits::trait_catalog;
pub use types::{
    Assignment, BuffTotals, Company, Employee, EmployeeRole, LedgerEntry, TickReason, Trait,
    TraitEffects,
};
