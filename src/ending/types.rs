//! Ending inputs and results.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndingId {
    Ipo,
    Acq,
    Oss,
    Scandal,
    Bankrupt,
}

impl EndingId {
    pub const ALL: [EndingId; 5] = [
        EndingId::Ipo,
        EndingId::Acq,
        EndingId::Oss,
        EndingId::Scandal,
        EndingId::Bankrupt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EndingId::Ipo => "ipo",
            EndingId::Acq => "acq",
            EndingId::Oss => "oss",
            EndingId::Scandal => "scandal",
            EndingId::Bankrupt => "bankrupt",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EndingId::Ipo => "Ring the Bell",
            EndingId::Acq => "Acquired",
            EndingId::Oss => "Open Source Legacy",
            EndingId::Scandal => "Front Page Scandal",
            EndingId::Bankrupt => "Lights Out",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            EndingId::Ipo => "Your company went public on strong numbers and a clean codebase.",
            EndingId::Acq => "A larger player bought the company and kept the team.",
            EndingId::Oss => "The company wound down, but its code lives on in the open.",
            EndingId::Scandal => "Reputation collapsed and the press noticed.",
            EndingId::Bankrupt => "The money ran out before the product took off.",
        }
    }
}

/// Choices made during the finale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EndingFlags {
    pub aggressive: bool,
    pub ethical: bool,
    pub oss: bool,
}

/// Career totals, reported alongside the ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EndingCounters {
    pub scenarios_completed: u32,
    pub exams_passed: u32,
    pub incidents_resolved: u32,
    pub contracts_completed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EndingInput {
    pub cash: i64,
    pub reputation: f64,
    pub tech_debt: f64,
    pub morale: f64,
    pub company_level: u32,
    pub finale_complete: bool,
    pub flags: EndingFlags,
    pub counters: EndingCounters,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndingStats {
    pub cash: i64,
    pub reputation: f64,
    pub tech_debt: f64,
    pub morale: f64,
    pub company_level: u32,
    pub counters: EndingCounters,
    /// 0..=1000
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndingResult {
    pub ending: EndingId,
    pub title: String,
    pub summary: String,
    pub stats: EndingStats,
}
