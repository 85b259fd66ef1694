//! Career stage of the player, which scales every generator.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerStage {
    Intern,
    Junior,
    Middle,
    Senior,
}

impl CareerStage {
    /// All stages from earliest to latest.
    pub const ALL: [CareerStage; 4] = [
        CareerStage::Intern,
        CareerStage::Junior,
        CareerStage::Middle,
        CareerStage::Senior,
    ];

    /// Stable identifier used inside derived seeds.
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerStage::Intern => "intern",
            CareerStage::Junior => "junior",
            CareerStage::Middle => "middle",
            CareerStage::Senior => "senior",
        }
    }

    /// Parses the identifier produced by [`CareerStage::as_str`].
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.as_str() == s)
    }
}

/// Per-stage weights for catalog entries. Missing stages weigh zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StageWeights {
    pub intern: f64,
    pub junior: f64,
    pub middle: f64,
    pub senior: f64,
}

impl StageWeights {
    pub const fn new(intern: f64, junior: f64, middle: f64, senior: f64) -> Self {
        Self {
            intern,
            junior,
            middle,
            senior,
        }
    }

    pub fn for_stage(&self, stage: CareerStage) -> f64 {
        match stage {
            CareerStage::Intern => self.intern,
            CareerStage::Junior => self.junior,
            CareerStage::Middle => self.middle,
            CareerStage::Senior => self.senior,
        }
    }
}
