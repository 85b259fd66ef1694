//! Incident templates, decisions and live incident instances.

use crate::core::stage::StageWeights;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

/// The three fixed answers every incident offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionId {
    A,
    B,
    C,
}

impl DecisionId {
    pub const ALL: [DecisionId; 3] = [DecisionId::A, DecisionId::B, DecisionId::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionId::A => "a",
            DecisionId::B => "b",
            DecisionId::C => "c",
        }
    }
}

/// What picking a decision does to the company.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionEffects {
    pub cash: i64,
    pub reputation: f64,
    pub tech_debt: f64,
    /// Applied to every employee.
    pub morale: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentDecision {
    pub id: DecisionId,
    pub label: String,
    pub effects: DecisionEffects,
}

/// Catalog entry supplied by the content layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentTemplate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub tags: Vec<String>,
    pub stage_weights: StageWeights,
    pub decisions: [IncidentDecision; 3],
}

impl IncidentTemplate {
    /// Tech-flavoured templates become likelier as tech debt grows.
    pub fn is_tech_related(&self) -> bool {
        self.tags.iter().any(|t| t == "tech" || t == "debt")
    }
}

/// How an incident was closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub decision: DecisionId,
    pub resolved_at: DateTime<Utc>,
    pub resolved_tick: u64,
}

/// A rolled incident waiting for, or archived after, a player decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveIncident {
    pub instance_id: String,
    pub template_id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub tags: Vec<String>,
    pub decisions: [IncidentDecision; 3],
    pub tick_index: u64,
    pub created_at: DateTime<Utc>,
    pub resolution: Option<Resolution>,
}

impl ActiveIncident {
    pub fn decision(&self, id: DecisionId) -> Option<&IncidentDecision> {
        self.decisions.iter().find(|d| d.id == id)
    }
}
