//! Company, employee and ledger data.

use crate::incidents::types::ActiveIncident;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    Junior,
    Middle,
    Senior,
}

impl EmployeeRole {
    pub fn name(&self) -> &'static str {
        match self {
            EmployeeRole::Junior => "Junior",
            EmployeeRole::Middle => "Middle",
            EmployeeRole::Senior => "Senior",
        }
    }
}

/// What an employee is working on; each assignment carries its own modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assignment {
    #[default]
    Unassigned,
    Product,
    Sales,
    Support,
    Refactoring,
}

/// Effect bundle of a trait. Percentages are fractions (0.05 = 5%).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitEffects {
    pub cash_income_bonus_pct: f64,
    pub incident_reduce_pct: f64,
    pub tech_debt_delta_per_tick: f64,
    pub productivity_pct: f64,
}

impl Add for TraitEffects {
    type Output = TraitEffects;

    fn add(self, rhs: TraitEffects) -> TraitEffects {
        TraitEffects {
            cash_income_bonus_pct: self.cash_income_bonus_pct + rhs.cash_income_bonus_pct,
            incident_reduce_pct: self.incident_reduce_pct + rhs.incident_reduce_pct,
            tech_debt_delta_per_tick: self.tech_debt_delta_per_tick
                + rhs.tech_debt_delta_per_tick,
            productivity_pct: self.productivity_pct + rhs.productivity_pct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    pub id: String,
    pub name: String,
    pub effects: TraitEffects,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: EmployeeRole,
    /// 0..=100
    pub quality: f64,
    /// 0..=100
    pub morale: f64,
    #[serde(default)]
    pub traits: Vec<Trait>,
    #[serde(default)]
    pub assignment: Assignment,
    /// Salary quoted at hire time. Display only: the tick pays the role's
    /// `tick.salary_*` rate through `salary_for`.
    pub salary: i64,
}

/// Why a tick was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickReason {
    Scenario,
    Exam,
    Manual,
}

impl TickReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            TickReason::Scenario => "scenario",
            TickReason::Exam => "exam",
            TickReason::Manual => "manual",
        }
    }
}

/// Aggregate bonuses from purchased boosts and other host-side sources.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuffTotals {
    pub cash_income_bonus_pct: f64,
    pub incident_reduce_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerDeltas {
    pub cash: i64,
    pub reputation: f64,
    pub tech_debt: f64,
    /// Change of average team morale.
    pub morale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerBalances {
    pub cash: i64,
    pub reputation: f64,
    pub tech_debt: f64,
}

/// One line item in the company history, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    pub tick_index: u64,
    pub reason: TickReason,
    pub timestamp: DateTime<Utc>,
    pub lines: Vec<String>,
    pub income: i64,
    pub salaries: i64,
    pub deltas: LedgerDeltas,
    pub balances: LedgerBalances,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub cash: i64,
    pub employees: Vec<Employee>,
    pub ledger: Vec<LedgerEntry>,
    pub active_incident: Option<ActiveIncident>,
    pub incidents_history: Vec<ActiveIncident>,
    pub level: u32,
}

impl Company {
    pub fn new(cash: i64) -> Self {
        Self {
            cash,
            level: 1,
            ..Default::default()
        }
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Average morale, or zero for an empty team.
    pub fn average_morale(&self) -> f64 {
        if self.employees.is_empty() {
            return 0.0;
        }
        self.employees.iter().map(|e| e.morale).sum::<f64>() / self.employees.len() as f64
    }
}
