//! Trait catalog and the capped aggregation of trait and assignment effects.

use super::types::{Assignment, Employee, Trait, TraitEffects};
use crate::core::balance::{AssignmentBalance, TraitCaps};
use crate::core::numeric::{clamp_pct, clamp_signed};

fn entry(id: &str, name: &str, cash: f64, incident: f64, debt: f64, productivity: f64) -> Trait {
    Trait {
        id: id.to_string(),
        name: name.to_string(),
        effects: TraitEffects {
            cash_income_bonus_pct: cash,
            incident_reduce_pct: incident,
            tech_debt_delta_per_tick: debt,
            productivity_pct: productivity,
        },
    }
}

/// The fixed catalog candidates draw their traits from.
pub fn trait_catalog() -> Vec<Trait> {
    vec![
        entry("hustler", "Hustler", 0.06, 0.0, 0.2, 0.05),
        entry("careful", "Careful", 0.0, 0.08, 0.0, -0.03),
        entry("refactorer", "Refactorer", 0.0, 0.02, -0.4, 0.0),
        entry("mentor", "Mentor", 0.0, 0.02, 0.0, 0.04),
        entry("closer", "Closer", 0.08, 0.0, 0.0, 0.0),
        entry("night-owl", "Night Owl", 0.0, -0.03, 0.1, 0.08),
        entry("pragmatic", "Pragmatic", 0.03, 0.0, 0.1, 0.03),
        entry("tester", "Tester", 0.0, 0.1, -0.1, -0.02),
        entry("architect", "Architect", 0.0, 0.04, -0.3, 0.0),
        entry("speedrunner", "Speedrunner", 0.02, -0.02, 0.5, 0.1),
    ]
}

/// Clamps each dimension to its cap. Bonus percentages floor at zero; the
/// signed dimensions are bounded on both sides.
pub fn cap_effects(effects: TraitEffects, caps: &TraitCaps) -> TraitEffects {
    TraitEffects {
        cash_income_bonus_pct: clamp_pct(effects.cash_income_bonus_pct, caps.cash_income_bonus_pct),
        incident_reduce_pct: clamp_pct(effects.incident_reduce_pct, caps.incident_reduce_pct),
        tech_debt_delta_per_tick: clamp_signed(
            effects.tech_debt_delta_per_tick,
            caps.tech_debt_per_tick,
        ),
        productivity_pct: clamp_signed(effects.productivity_pct, caps.productivity_pct),
    }
}

/// Sum of one employee's traits, capped per dimension.
pub fn employee_trait_effects(employee: &Employee, caps: &TraitCaps) -> TraitEffects {
    let raw = employee
        .traits
        .iter()
        .fold(TraitEffects::default(), |acc, t| acc + t.effects);
    cap_effects(raw, caps)
}

/// Rescales a set of traits so no dimension's total exceeds its cap.
///
/// A dimension whose absolute sum is over the cap has every contribution
/// multiplied by `cap / |sum|`; dimensions within their cap are untouched.
pub fn scale_traits_to_caps(traits: &mut [Trait], caps: &TraitCaps) {
    let total = traits
        .iter()
        .fold(TraitEffects::default(), |acc, t| acc + t.effects);

    let factor = |sum: f64, cap: f64| -> f64 {
        let cap = cap.abs();
        if sum.abs() > cap && sum != 0.0 {
            cap / sum.abs()
        } else {
            1.0
        }
    };
    let cash = factor(total.cash_income_bonus_pct, caps.cash_income_bonus_pct);
    let incident = factor(total.incident_reduce_pct, caps.incident_reduce_pct);
    let debt = factor(total.tech_debt_delta_per_tick, caps.tech_debt_per_tick);
    let productivity = factor(total.productivity_pct, caps.productivity_pct);

    for t in traits.iter_mut() {
        t.effects.cash_income_bonus_pct *= cash;
        t.effects.incident_reduce_pct *= incident;
        t.effects.tech_debt_delta_per_tick *= debt;
        t.effects.productivity_pct *= productivity;
    }
}

/// Modifiers an employee's assignment contributes to a tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AssignmentModifiers {
    pub cash_bonus_pct: f64,
    pub incident_reduce_pct: f64,
    pub tech_debt_delta_per_tick: f64,
}

impl std::ops::Add for AssignmentModifiers {
    type Output = AssignmentModifiers;

    fn add(self, rhs: AssignmentModifiers) -> AssignmentModifiers {
        AssignmentModifiers {
            cash_bonus_pct: self.cash_bonus_pct + rhs.cash_bonus_pct,
            incident_reduce_pct: self.incident_reduce_pct + rhs.incident_reduce_pct,
            tech_debt_delta_per_tick: self.tech_debt_delta_per_tick + rhs.tech_debt_delta_per_tick,
        }
    }
}

pub fn assignment_modifiers(assignment: Assignment, balance: &AssignmentBalance) -> AssignmentModifiers {
    match assignment {
        Assignment::Unassigned => AssignmentModifiers::default(),
        Assignment::Product => AssignmentModifiers {
            cash_bonus_pct: balance.product_cash_bonus_pct,
            ..Default::default()
        },
        Assignment::Sales => AssignmentModifiers {
            cash_bonus_pct: balance.sales_cash_bonus_pct,
            ..Default::default()
        },
        Assignment::Support => AssignmentModifiers {
            incident_reduce_pct: balance.support_incident_reduce_pct,
            ..Default::default()
        },
        Assignment::Refactoring => AssignmentModifiers {
            incident_reduce_pct: balance.refactoring_incident_reduce_pct,
            tech_debt_delta_per_tick: balance.refactoring_tech_debt_per_tick,
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::types::EmployeeRole;

    fn employee_with(traits: Vec<Trait>) -> Employee {
        Employee {
            id: "e1".to_string(),
            name: "Test".to_string(),
            role: EmployeeRole::Junior,
            quality: 50.0,
            morale: 50.0,
            traits,
            assignment: Assignment::Unassigned,
            salary: 40,
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = trait_catalog();
        let mut ids: Vec<_> = catalog.iter().map(|t| t.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_employee_effects_capped() {
        let caps = TraitCaps::default();
        let greedy = entry("greedy", "Greedy", 0.25, 0.0, 0.0, 0.0);
        let employee = employee_with(vec![greedy.clone(), greedy]);
        let effects = employee_trait_effects(&employee, &caps);
        assert_eq!(effects.cash_income_bonus_pct, caps.cash_income_bonus_pct);
    }

    #[test]
    fn test_negative_productivity_bounded() {
        let caps = TraitCaps::default();
        let lazy = entry("lazy", "Lazy", 0.0, 0.0, 0.0, -2.0);
        let effects = employee_trait_effects(&employee_with(vec![lazy]), &caps);
        assert_eq!(effects.productivity_pct, -caps.productivity_pct);
    }

    #[test]
    fn test_scale_traits_to_caps_is_proportional() {
        let caps = TraitCaps::default();
        let mut traits = vec![
            entry("x", "X", 0.2, 0.0, 0.0, 0.0),
            entry("y", "Y", 0.4, 0.0, 0.0, 0.0),
        ];
        scale_traits_to_caps(&mut traits, &caps);
        let total: f64 = traits.iter().map(|t| t.effects.cash_income_bonus_pct).sum();
        assert!((total - caps.cash_income_bonus_pct).abs() < 1e-9);
        assert!((traits[1].effects.cash_income_bonus_pct / traits[0].effects.cash_income_bonus_pct - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_leaves_dimensions_within_cap() {
        let caps = TraitCaps::default();
        let mut traits = vec![entry("x", "X", 0.1, 0.05, -0.2, 0.0)];
        let before = traits.clone();
        scale_traits_to_caps(&mut traits, &caps);
        assert_eq!(traits, before);
    }

    #[test]
    fn test_assignment_modifiers() {
        let balance = AssignmentBalance::default();
        assert_eq!(assignment_modifiers(Assignment::Unassigned, &balance), AssignmentModifiers::default());
        let refactoring = assignment_modifiers(Assignment::Refactoring, &balance);
        assert!(refactoring.tech_debt_delta_per_tick < 0.0);
        assert!(assignment_modifiers(Assignment::Sales, &balance).cash_bonus_pct > 0.0);
    }
}
