//! Contract templates and instantiated contract offers.

use crate::core::stage::StageWeights;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

/// What an objective counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveKind {
    CompleteScenarios,
    PassExams,
    ReduceTechDebt,
    MakePurchases,
    HireEmployees,
    ResolveIncidents,
}

impl ObjectiveKind {
    /// Short label for display, e.g. "Pass 3 exams".
    pub fn describe(&self, target: u32) -> String {
        match self {
            ObjectiveKind::CompleteScenarios => format!("Complete {target} scenarios"),
            ObjectiveKind::PassExams => format!("Pass {target} exams"),
            ObjectiveKind::ReduceTechDebt => format!("Pay down {target} points of tech debt"),
            ObjectiveKind::MakePurchases => format!("Make {target} purchases"),
            ObjectiveKind::HireEmployees => format!("Hire {target} people"),
            ObjectiveKind::ResolveIncidents => format!("Resolve {target} incidents"),
        }
    }
}

/// Inclusive integer range rolled once per instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveSpec {
    pub kind: ObjectiveKind,
    pub target: IntRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSpec {
    pub coins: IntRange,
    #[serde(default)]
    pub cash: Option<IntRange>,
    #[serde(default)]
    pub reputation_delta: Option<IntRange>,
    #[serde(default)]
    pub tech_debt_delta: Option<IntRange>,
}

/// Catalog entry supplied by the content layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractTemplate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub stage_weights: StageWeights,
    #[serde(default)]
    pub tags: Vec<String>,
    pub objectives: Vec<ObjectiveSpec>,
    pub reward: RewardSpec,
}

impl ContractTemplate {
    /// Has an objective that pays down tech debt.
    pub fn is_debt_type(&self) -> bool {
        self.objectives
            .iter()
            .any(|o| o.kind == ObjectiveKind::ReduceTechDebt)
    }

    /// Has an objective that asks for purchases.
    pub fn is_purchase_type(&self) -> bool {
        self.objectives
            .iter()
            .any(|o| o.kind == ObjectiveKind::MakePurchases)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_hard(&self) -> bool {
        self.difficulty == Difficulty::Hard
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub kind: ObjectiveKind,
    pub target: u32,
    pub current: u32,
}

impl Objective {
    pub fn is_met(&self) -> bool {
        self.current >= self.target
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractReward {
    pub coins: i64,
    pub cash: Option<i64>,
    pub reputation_delta: Option<i64>,
    pub tech_debt_delta: Option<i64>,
}

/// A contract offer or an accepted contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub template_id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub objectives: Vec<Objective>,
    pub reward: ContractReward,
    /// The derived seed this offer was instantiated from.
    pub seed: String,
}

impl Contract {
    pub fn has_debt_objective(&self) -> bool {
        self.objectives
            .iter()
            .any(|o| o.kind == ObjectiveKind::ReduceTechDebt)
    }
}
