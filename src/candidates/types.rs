//! Hireable candidates.

use crate::company::types::{EmployeeRole, Trait};
use serde::{Deserialize, Serialize};

/// A generated candidate. Replaced wholesale when the pool refreshes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub summary: String,
    /// 0..=100
    pub quality: f64,
    pub role: EmployeeRole,
    pub traits: Vec<Trait>,
    pub expected_salary: i64,
    /// The derived seed this candidate was rolled from.
    pub seed: String,
}
