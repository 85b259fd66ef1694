//! Balance configuration shared by every formula in the core.
//!
//! All balance numbers live here, grouped per subsystem. Hosts may ship a
//! partial JSON document; anything it leaves out resolves to the defaults
//! below. Change once, test everywhere.

use super::stage::CareerStage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard ceiling for the per-tick incident probability.
pub const INCIDENT_CHANCE_CEILING: f64 = 0.95;

/// Errors raised while loading a balance configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse balance config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid balance value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

// =============================================================================
// COMPANY TICK
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickBalance {
    /// Income the company earns per tick before employees.
    pub base_income: f64,
    /// Income per employee at quality 100 and no productivity modifier.
    pub income_per_employee: f64,
    pub salary_junior: i64,
    pub salary_middle: i64,
    pub salary_senior: i64,
    /// Morale gained per employee on a non-negative cash tick.
    pub morale_step_up: f64,
    /// Morale lost per employee on a losing tick.
    pub morale_step_down: f64,
    /// Cap on the combined cash income bonus (0.5 = +50%).
    pub cash_bonus_cap_pct: f64,
    /// Cap on the combined incident chance reduction.
    pub incident_reduce_cap_pct: f64,
    /// In-game seconds per tick, used for synthetic timestamps.
    pub tick_duration_secs: i64,
    /// Ledger entries kept on the company.
    pub ledger_history_limit: usize,
    /// Reputation lost when a tick ends with negative cash.
    pub crisis_reputation_penalty: f64,
    /// Morale lost per employee when a tick ends with negative cash.
    pub crisis_morale_penalty: f64,
    pub max_reputation: f64,
    pub max_tech_debt: f64,
}

impl Default for TickBalance {
    fn default() -> Self {
        Self {
            base_income: 120.0,
            income_per_employee: 90.0,
            salary_junior: 40,
            salary_middle: 70,
            salary_senior: 110,
            morale_step_up: 2.0,
            morale_step_down: 4.0,
            cash_bonus_cap_pct: 0.5,
            incident_reduce_cap_pct: 0.6,
            tick_duration_secs: 86_400,
            ledger_history_limit: 50,
            crisis_reputation_penalty: 3.0,
            crisis_morale_penalty: 8.0,
            max_reputation: 100.0,
            max_tech_debt: 100.0,
        }
    }
}

// =============================================================================
// ASSIGNMENTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentBalance {
    pub product_cash_bonus_pct: f64,
    pub sales_cash_bonus_pct: f64,
    pub support_incident_reduce_pct: f64,
    pub refactoring_incident_reduce_pct: f64,
    /// Tech debt change per tick per employee on refactoring (negative pays it down).
    pub refactoring_tech_debt_per_tick: f64,
}

impl Default for AssignmentBalance {
    fn default() -> Self {
        Self {
            product_cash_bonus_pct: 0.03,
            sales_cash_bonus_pct: 0.05,
            support_incident_reduce_pct: 0.05,
            refactoring_incident_reduce_pct: 0.02,
            refactoring_tech_debt_per_tick: -0.5,
        }
    }
}

// =============================================================================
// TRAIT CAPS
// =============================================================================

/// Per-employee caps for each trait dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitCaps {
    pub cash_income_bonus_pct: f64,
    pub incident_reduce_pct: f64,
    /// Absolute cap, applied symmetrically to positive and negative drift.
    pub tech_debt_per_tick: f64,
    /// Absolute cap, applied symmetrically.
    pub productivity_pct: f64,
}

impl Default for TraitCaps {
    fn default() -> Self {
        Self {
            cash_income_bonus_pct: 0.3,
            incident_reduce_pct: 0.3,
            tech_debt_per_tick: 1.0,
            productivity_pct: 0.25,
        }
    }
}

// =============================================================================
// INCIDENTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentBalance {
    pub base_chance: f64,
    /// Extra chance per point of tech debt.
    pub chance_per_debt_point: f64,
    /// Upper bound of the chance, itself never above [`INCIDENT_CHANCE_CEILING`].
    pub chance_max: f64,
    pub cost: i64,
    pub reputation_penalty: f64,
    pub morale_penalty: f64,
    /// Weight boost per debt point for templates tagged `tech` or `debt`.
    pub tech_tag_debt_multiplier: f64,
    /// Resolved incidents kept on the company.
    pub history_limit: usize,
}

impl Default for IncidentBalance {
    fn default() -> Self {
        Self {
            base_chance: 0.08,
            chance_per_debt_point: 0.01,
            chance_max: INCIDENT_CHANCE_CEILING,
            cost: 300,
            reputation_penalty: 2.0,
            morale_penalty: 5.0,
            tech_tag_debt_multiplier: 0.05,
            history_limit: 20,
        }
    }
}

impl IncidentBalance {
    /// The effective chance ceiling.
    pub fn max_chance(&self) -> f64 {
        self.chance_max.clamp(0.0, INCIDENT_CHANCE_CEILING)
    }
}

// =============================================================================
// CONTRACTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractBalance {
    pub default_count: usize,
    pub max_count: usize,
    /// Contracts a player may hold at once.
    pub max_active: usize,
    /// Hard template weight multiplier per reputation point.
    pub hard_weight_per_reputation: f64,
    /// Debt template weight multiplier per tech debt point.
    pub debt_weight_per_point: f64,
    /// Purchase template weight divisor per tech debt point.
    pub purchase_penalty_per_point: f64,
    /// Weight multiplier per tech debt point for `refactor`/`optimization` tags.
    pub refactor_tag_weight_per_point: f64,
    /// Tech debt at which at least one debt contract is forced.
    pub debt_bias_threshold: f64,
    /// Reputation at which at least one hard contract is forced.
    pub hard_bias_reputation_threshold: f64,
    pub reward_bonus_per_reputation: f64,
    pub reward_bonus_cap: f64,
    pub reward_penalty_per_debt: f64,
    pub reward_penalty_cap: f64,
}

impl Default for ContractBalance {
    fn default() -> Self {
        Self {
            default_count: 5,
            max_count: 20,
            max_active: 3,
            hard_weight_per_reputation: 0.08,
            debt_weight_per_point: 0.15,
            purchase_penalty_per_point: 0.1,
            refactor_tag_weight_per_point: 0.08,
            debt_bias_threshold: 10.0,
            hard_bias_reputation_threshold: 25.0,
            reward_bonus_per_reputation: 0.005,
            reward_bonus_cap: 0.25,
            reward_penalty_per_debt: 0.01,
            reward_penalty_cap: 0.3,
        }
    }
}

// =============================================================================
// CANDIDATES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateBalance {
    pub default_count: usize,
    pub max_count: usize,
    pub base_quality_intern: f64,
    pub base_quality_junior: f64,
    pub base_quality_middle: f64,
    pub base_quality_senior: f64,
    pub jitter_min: i64,
    pub jitter_max: i64,
    pub reputation_bonus_per_point: f64,
    pub reputation_bonus_cap: f64,
    pub debt_penalty_per_point: f64,
    pub debt_penalty_cap: f64,
    pub senior_quality_threshold: f64,
    pub middle_quality_threshold: f64,
    /// Chance a senior roll is downgraded to middle at the junior stage.
    pub junior_senior_downgrade_chance: f64,
    /// Chance a senior roll is downgraded to middle at the middle stage.
    pub middle_senior_downgrade_chance: f64,
    pub min_traits: usize,
    pub max_traits: usize,
    /// Salary slope per quality point around quality 50.
    pub salary_quality_slope: f64,
    pub starting_morale: f64,
    pub max_employees: usize,
}

impl Default for CandidateBalance {
    fn default() -> Self {
        Self {
            default_count: 3,
            max_count: 12,
            base_quality_intern: 35.0,
            base_quality_junior: 48.0,
            base_quality_middle: 60.0,
            base_quality_senior: 72.0,
            jitter_min: -6,
            jitter_max: 8,
            reputation_bonus_per_point: 0.1,
            reputation_bonus_cap: 8.0,
            debt_penalty_per_point: 0.3,
            debt_penalty_cap: 10.0,
            senior_quality_threshold: 75.0,
            middle_quality_threshold: 55.0,
            junior_senior_downgrade_chance: 0.5,
            middle_senior_downgrade_chance: 0.2,
            min_traits: 2,
            max_traits: 3,
            salary_quality_slope: 0.005,
            starting_morale: 70.0,
            max_employees: 8,
        }
    }
}

impl CandidateBalance {
    pub fn base_quality(&self, stage: CareerStage) -> f64 {
        match stage {
            CareerStage::Intern => self.base_quality_intern,
            CareerStage::Junior => self.base_quality_junior,
            CareerStage::Middle => self.base_quality_middle,
            CareerStage::Senior => self.base_quality_senior,
        }
    }
}

// =============================================================================
// EXAMS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamBalance {
    pub default_pass_score: u32,
    pub default_question_count: usize,
}

impl Default for ExamBalance {
    fn default() -> Self {
        Self {
            default_pass_score: 70,
            default_question_count: 10,
        }
    }
}

// =============================================================================
// ROOT
// =============================================================================

/// The full, resolved balance configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    pub tick: TickBalance,
    pub assignments: AssignmentBalance,
    pub traits: TraitCaps,
    pub incidents: IncidentBalance,
    pub contracts: ContractBalance,
    pub candidates: CandidateBalance,
    pub exam: ExamBalance,
}

impl BalanceConfig {
    /// Parses a (possibly partial) JSON document over the defaults and validates it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BalanceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every value that a formula relies on being in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let chance_max = self.incidents.chance_max;
        if !(0.0..=INCIDENT_CHANCE_CEILING).contains(&chance_max) {
            return Err(invalid(
                "incidents.chance_max",
                format!("{chance_max} is outside [0, {INCIDENT_CHANCE_CEILING}]"),
            ));
        }
        let non_negative = [
            ("tick.cash_bonus_cap_pct", self.tick.cash_bonus_cap_pct),
            ("tick.incident_reduce_cap_pct", self.tick.incident_reduce_cap_pct),
            ("tick.morale_step_up", self.tick.morale_step_up),
            ("tick.morale_step_down", self.tick.morale_step_down),
            ("traits.cash_income_bonus_pct", self.traits.cash_income_bonus_pct),
            ("traits.incident_reduce_pct", self.traits.incident_reduce_pct),
            ("traits.tech_debt_per_tick", self.traits.tech_debt_per_tick),
            ("traits.productivity_pct", self.traits.productivity_pct),
            ("incidents.base_chance", self.incidents.base_chance),
            ("contracts.reward_bonus_cap", self.contracts.reward_bonus_cap),
            ("contracts.reward_penalty_cap", self.contracts.reward_penalty_cap),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("{value} must be a non-negative number")));
            }
        }
        if self.tick.tick_duration_secs <= 0 {
            return Err(invalid("tick.tick_duration_secs", "must be positive"));
        }
        if self.candidates.min_traits > self.candidates.max_traits {
            return Err(invalid(
                "candidates.min_traits",
                format!(
                    "{} exceeds max_traits {}",
                    self.candidates.min_traits, self.candidates.max_traits
                ),
            ));
        }
        if self.candidates.jitter_min > self.candidates.jitter_max {
            return Err(invalid("candidates.jitter_min", "exceeds jitter_max"));
        }
        if self.contracts.max_active == 0 {
            return Err(invalid("contracts.max_active", "must allow at least one contract"));
        }
        if self.exam.default_pass_score > 100 {
            return Err(invalid("exam.default_pass_score", "must be within 0..=100"));
        }
        Ok(())
    }
}
